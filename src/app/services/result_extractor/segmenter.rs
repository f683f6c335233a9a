//! Document segmentation into per-student blocks
//!
//! A result document is a run of student blocks, each announced by a seat
//! number label. The segmenter only recognises the label itself; the value
//! that follows it is left to the field rules.

use regex::Regex;
use std::sync::LazyLock;

/// Block-start marker: "SEAT NO.:" with tolerant spacing and optional period
static BLOCK_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"SEAT\s+NO\.?\s*:").expect("valid block marker regex"));

/// One student's slice of the document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Segment<'a> {
    /// 1-based position of the block in the document
    pub ordinal: usize,

    /// Byte offset of the block start within the document
    pub offset: usize,

    /// Text from this block's marker up to the next marker or end of text
    pub text: &'a str,
}

/// Split `text` into one segment per block-start marker
///
/// Returns an empty vector when the text contains no marker. Segments are
/// contiguous: joining them in order yields `text[first_marker..]`.
pub fn segment(text: &str) -> Vec<Segment<'_>> {
    let starts: Vec<usize> = BLOCK_MARKER.find_iter(text).map(|m| m.start()).collect();

    starts
        .iter()
        .enumerate()
        .map(|(index, &start)| {
            let end = starts.get(index + 1).copied().unwrap_or(text.len());
            Segment {
                ordinal: index + 1,
                offset: start,
                text: &text[start..end],
            }
        })
        .collect()
}

/// Text preceding the first block marker (page headers, institution banner)
pub fn preamble(text: &str) -> &str {
    match BLOCK_MARKER.find(text) {
        Some(m) => &text[..m.start()],
        None => text,
    }
}
