//! Tests for document segmentation

use super::*;
use crate::app::services::result_extractor::segmenter::{preamble, segment};

#[test]
fn test_segment_empty_text() {
    assert!(segment("").is_empty());
}

#[test]
fn test_segment_without_markers() {
    let text = "SAVITRIBAI PHULE PUNE UNIVERSITY\nNo results published for this course.\n";
    assert!(segment(text).is_empty());
    assert_eq!(preamble(text), text);
}

#[test]
fn test_segment_one_block_per_marker() {
    let document = create_test_document();
    let segments = segment(&document);

    assert_eq!(segments.len(), 3);
    for (index, seg) in segments.iter().enumerate() {
        assert_eq!(seg.ordinal, index + 1);
        assert!(seg.text.starts_with("SEAT NO.:"));
        assert_eq!(seg.text.matches("SEAT NO.").count(), 1);
        assert!(document[seg.offset..].starts_with(seg.text));
    }

    assert!(segments[0].text.contains("PATIL ANANYA RAJESH"));
    assert!(segments[1].text.contains("KULKARNI OMKAR VIJAY"));
    assert!(segments[2].text.contains("SHAIKH AYESHA"));
}

#[test]
fn test_segments_reassemble_document() {
    let document = create_test_document();
    let segments = segment(&document);

    let rebuilt: String = segments.iter().map(|seg| seg.text).collect();
    let head = preamble(&document);

    assert!(head.starts_with("SAVITRIBAI PHULE PUNE UNIVERSITY"));
    assert_eq!(format!("{}{}", head, rebuilt), document);
}

#[test]
fn test_segment_marker_spacing_variants() {
    let text = "SEAT NO.:A1 NAME : X\nSEAT  NO : B2 NAME : Y\nSEAT NO.\t:C3";
    let segments = segment(text);

    assert_eq!(segments.len(), 3);
    assert!(segments[1].text.starts_with("SEAT  NO :"));
    assert!(segments[2].text.starts_with("SEAT NO.\t:"));
}

#[test]
fn test_segment_does_not_require_identifier_format() {
    // Marker without a recognisable seat value still opens a block
    let segments = segment("SEAT NO.: \nNAME : NO SEAT VALUE\nSEAT NO.: 42");
    assert_eq!(segments.len(), 2);
}
