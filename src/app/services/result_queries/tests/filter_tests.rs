//! Tests for filtering, the failed set and student lookup

use super::*;
use crate::app::models::ResultStatus;
use crate::app::services::result_queries::{
    LookupKey, ScoreValidity, failed, filter, find_student,
};

fn seats<'a>(records: &[&'a crate::app::models::StudentRecord]) -> Vec<&'a str> {
    records.iter().map(|r| r.seat_number()).collect()
}

#[test]
fn test_failed_keeps_batch_order() {
    let batch = create_mixed_batch();
    assert_eq!(seats(&failed(&batch)), vec!["S4", "S5", "S6"]);
}

#[test]
fn test_filter_without_predicates_keeps_everything() {
    let batch = create_mixed_batch();
    assert_eq!(filter(&batch, 0.0, None, ScoreValidity::All).len(), 6);
}

#[test]
fn test_filter_min_score() {
    let batch = create_mixed_batch();
    assert_eq!(
        seats(&filter(&batch, 8.5, None, ScoreValidity::All)),
        vec!["S1", "S2", "S3"]
    );
}

#[test]
fn test_filter_is_conjunctive() {
    let batch = create_mixed_batch();

    let result = filter(&batch, 6.0, Some(ResultStatus::Fail), ScoreValidity::Valid);
    assert_eq!(seats(&result), vec!["S4"]);

    let result = filter(&batch, 0.0, Some(ResultStatus::Fail), ScoreValidity::Invalid);
    assert_eq!(seats(&result), vec!["S5", "S6"]);

    let result = filter(&batch, 0.0, Some(ResultStatus::Pass), ScoreValidity::Invalid);
    assert!(result.is_empty());
}

#[test]
fn test_min_score_excludes_invalid_scores() {
    let batch = create_mixed_batch();
    let result = filter(&batch, 0.1, None, ScoreValidity::All);

    assert!(result.iter().all(|r| r.has_valid_aggregate_score()));
}

#[test]
fn test_find_student_by_each_key() {
    let batch = create_mixed_batch();

    let by_seat = find_student(&batch, &LookupKey::SeatNumber("S4".into()));
    assert_eq!(by_seat.map(|r| r.name()), Some("DEV"));

    let by_name = find_student(&batch, &LookupKey::Name(" CHITRA ".into()));
    assert_eq!(by_name.map(|r| r.seat_number()), Some("S3"));

    let by_prn = find_student(&batch, &LookupKey::RegistrationNumber("PRNS6".into()));
    assert_eq!(by_prn.map(|r| r.seat_number()), Some("S6"));

    assert!(find_student(&batch, &LookupKey::Name("chitra".into())).is_none());
    assert!(find_student(&batch, &LookupKey::SeatNumber("S99".into())).is_none());
}

#[test]
fn test_find_student_returns_first_duplicate() {
    let batch = create_test_batch(vec![
        create_test_record("S1", "FIRST", "8.0", &["A"]),
        create_test_record("S1", "SECOND", "7.0", &["A"]),
    ]);

    let found = find_student(&batch, &LookupKey::SeatNumber("S1".into()));
    assert_eq!(found.map(|r| r.name()), Some("FIRST"));
}
