//! Tests for summary statistics, score bands and failure reasons

use super::*;
use crate::app::services::result_queries::{
    failure_breakdown, failure_reasons, score_distribution, summarize, summary,
};
use crate::constants::{REASON_FAILED_SUBJECTS, REASON_NO_SUBJECTS, REASON_NO_VALID_SCORE};

#[test]
fn test_summary_counts() {
    let result = summary(&create_mixed_batch());

    assert_eq!(result.total, 6);
    assert_eq!(result.passed, 3);
    assert_eq!(result.failed, 3);
    assert_eq!(result.with_valid_score, 4);
    assert_eq!(result.without_valid_score, 2);
    assert_approx_eq(result.pass_percentage, 50.0);
    assert_approx_eq(result.average_score, (8.5 + 9.4 + 8.5 + 6.2) / 4.0);
}

#[test]
fn test_summary_of_empty_batch() {
    let result = summary(&create_test_batch(Vec::new()));

    assert_eq!(result.total, 0);
    assert_eq!(result.pass_percentage, 0.0);
    assert_eq!(result.average_score, 0.0);
}

#[test]
fn test_average_ignores_invalid_scores() {
    let batch = create_test_batch(vec![
        create_test_record("S1", "ASHA", "--", &["A"]),
        create_test_record("S2", "BHARAT", "AB", &["A"]),
    ]);
    let result = summary(&batch);

    assert_eq!(result.with_valid_score, 0);
    assert_eq!(result.average_score, 0.0);
    assert_eq!(result.pass_percentage, 0.0);
}

#[test]
fn test_summarize_subset() {
    let batch = create_mixed_batch();
    let result = summarize(batch.records().iter().take(2));

    assert_eq!(result.total, 2);
    assert_eq!(result.passed, 2);
    assert_approx_eq(result.pass_percentage, 100.0);
}

#[test]
fn test_score_distribution_bands() {
    let bands = score_distribution(&create_mixed_batch());
    let counts: Vec<usize> = bands.iter().map(|b| b.count).collect();

    assert_eq!(bands.len(), 5);
    assert_eq!(bands[0].label, "9.0+ (Excellent)");
    assert_eq!(counts, vec![1, 2, 0, 1, 0]);
    assert_approx_eq(bands[1].percentage, 50.0);
    assert_eq!(counts.iter().sum::<usize>(), 4);
}

#[test]
fn test_score_distribution_boundaries() {
    let batch = create_test_batch(vec![
        create_test_record("S1", "A", "9.0", &["A"]),
        create_test_record("S2", "B", "8.99", &["A"]),
        create_test_record("S3", "C", "5.99", &["A"]),
    ]);
    let counts: Vec<usize> = score_distribution(&batch).iter().map(|b| b.count).collect();

    assert_eq!(counts, vec![1, 1, 0, 0, 1]);
}

#[test]
fn test_failure_reasons_per_record() {
    let batch = create_mixed_batch();
    let records = batch.records();

    assert!(failure_reasons(&records[0]).is_empty());
    assert_eq!(failure_reasons(&records[3]), vec![REASON_FAILED_SUBJECTS]);
    assert_eq!(
        failure_reasons(&records[4]),
        vec![REASON_NO_VALID_SCORE, REASON_FAILED_SUBJECTS]
    );
    assert_eq!(failure_reasons(&records[5]), vec![REASON_NO_VALID_SCORE]);

    let no_subjects = create_test_record("S7", "GITA", "7.5", &[]);
    assert_eq!(failure_reasons(&no_subjects), vec![REASON_NO_SUBJECTS]);
}

#[test]
fn test_failure_breakdown() {
    let breakdown = failure_breakdown(&create_mixed_batch());

    assert_eq!(breakdown.total_failed, 3);
    assert_eq!(breakdown.no_valid_score, 2);
    assert_eq!(breakdown.failed_subjects, 1);
    assert_eq!(breakdown.both, 1);
    assert_eq!(breakdown.no_subjects, 0);
}
