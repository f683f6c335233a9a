//! Tests for the JSON result store and history grouping


use crate::app::models::{ExtractedFields, StudentRecord};
use crate::app::services::result_extractor::ClassificationPolicy;

pub fn create_test_record(seat: &str, name: &str, prn: &str, score_raw: &str) -> StudentRecord {
    let fields = ExtractedFields {
        seat_number: seat.to_string(),
        name: name.to_string(),
        guardian_name: "Unknown".to_string(),
        registration_number: prn.to_string(),
        aggregate_score_raw: score_raw.to_string(),
        earned_credits: 20,
    };
    StudentRecord::new(fields, Vec::new(), ClassificationPolicy::lenient())
}
