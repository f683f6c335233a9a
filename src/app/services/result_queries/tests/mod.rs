//! Shared fixtures for query tests

mod filter_tests;
mod summary_tests;

use crate::app::models::{
    ExtractedFields, ExtractionStats, ResultBatch, StudentRecord, SubjectGrade,
};
use crate::app::services::result_extractor::ClassificationPolicy;

/// Build a record with one subject per grade in `grades`
pub fn create_test_record(seat: &str, name: &str, score_raw: &str, grades: &[&str]) -> StudentRecord {
    let fields = ExtractedFields {
        seat_number: seat.to_string(),
        name: name.to_string(),
        guardian_name: "Unknown".to_string(),
        registration_number: format!("PRN{}", seat),
        aggregate_score_raw: score_raw.to_string(),
        earned_credits: 20,
    };

    let subjects = grades
        .iter()
        .enumerate()
        .map(|(i, grade)| SubjectGrade::new(format!("31024{}", i), "SUBJECT", *grade, None))
        .collect();

    StudentRecord::new(fields, subjects, ClassificationPolicy::strict())
}

pub fn create_test_batch(records: Vec<StudentRecord>) -> ResultBatch {
    ResultBatch::new(records, String::new(), ExtractionStats::new())
}

/// Six students covering every status/validity combination
///
/// | seat | score | subjects | status |
/// |------|-------|----------|--------|
/// | S1   | 8.50  | A, B     | Pass   |
/// | S2   | 9.40  | O        | Pass   |
/// | S3   | 8.50  | A+       | Pass   |
/// | S4   | 6.20  | F, B     | Fail   |
/// | S5   | --    | AB       | Fail   |
/// | S6   | N/A   | A        | Fail   |
pub fn create_mixed_batch() -> ResultBatch {
    create_test_batch(vec![
        create_test_record("S1", "ASHA", "8.50", &["A", "B"]),
        create_test_record("S2", "BHARAT", "9.40", &["O"]),
        create_test_record("S3", "CHITRA", "8.50", &["A+"]),
        create_test_record("S4", "DEV", "6.20", &["F", "B"]),
        create_test_record("S5", "ESHA", "--", &["AB"]),
        create_test_record("S6", "FARHAN", "N/A", &["A"]),
    ])
}

/// Approximate float comparison for derived percentages
pub fn assert_approx_eq(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {}, got {}",
        expected,
        actual
    );
}
