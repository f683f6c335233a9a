//! Conversion from records to polars frames

use crate::app::models::StudentRecord;
use crate::Result;
use polars::prelude::{Column, DataFrame};

/// One row per record
///
/// `aggregate_score` is null when the score token was not a valid score; the
/// token itself is always kept in `aggregate_score_raw`.
pub fn students_frame(records: &[&StudentRecord]) -> Result<DataFrame> {
    let seat_numbers: Vec<&str> = records.iter().map(|r| r.seat_number()).collect();
    let names: Vec<&str> = records.iter().map(|r| r.name()).collect();
    let guardians: Vec<&str> = records.iter().map(|r| r.guardian_name()).collect();
    let registrations: Vec<&str> = records.iter().map(|r| r.registration_number()).collect();
    let scores: Vec<Option<f64>> = records
        .iter()
        .map(|r| r.has_valid_aggregate_score().then(|| r.aggregate_score()))
        .collect();
    let raw_scores: Vec<&str> = records.iter().map(|r| r.aggregate_score_raw()).collect();
    let valid: Vec<bool> = records.iter().map(|r| r.has_valid_aggregate_score()).collect();
    let credits: Vec<u32> = records.iter().map(|r| r.earned_credits()).collect();
    let passed: Vec<u32> = records.iter().map(|r| r.passed_subject_count() as u32).collect();
    let total: Vec<u32> = records.iter().map(|r| r.total_subject_count() as u32).collect();
    let statuses: Vec<&str> = records.iter().map(|r| r.result_status().as_str()).collect();

    let df = DataFrame::new(vec![
        Column::new("seat_number".into(), seat_numbers),
        Column::new("name".into(), names),
        Column::new("guardian_name".into(), guardians),
        Column::new("registration_number".into(), registrations),
        Column::new("aggregate_score".into(), scores),
        Column::new("aggregate_score_raw".into(), raw_scores),
        Column::new("has_valid_aggregate_score".into(), valid),
        Column::new("earned_credits".into(), credits),
        Column::new("passed_subjects".into(), passed),
        Column::new("total_subjects".into(), total),
        Column::new("result_status".into(), statuses),
    ])?;

    Ok(df)
}

/// One row per subject, in record order then row order
pub fn subjects_frame(records: &[&StudentRecord]) -> Result<DataFrame> {
    let mut seat_numbers = Vec::new();
    let mut positions = Vec::new();
    let mut codes = Vec::new();
    let mut names = Vec::new();
    let mut grades = Vec::new();
    let mut marks = Vec::new();
    let mut failing = Vec::new();

    for record in records {
        for (index, subject) in record.subjects().iter().enumerate() {
            seat_numbers.push(record.seat_number());
            positions.push(index as u32 + 1);
            codes.push(subject.course_code.as_str());
            names.push(subject.course_name.as_str());
            grades.push(subject.grade.as_str());
            marks.push(subject.total_marks.as_deref());
            failing.push(subject.is_failing());
        }
    }

    let df = DataFrame::new(vec![
        Column::new("seat_number".into(), seat_numbers),
        Column::new("position".into(), positions),
        Column::new("course_code".into(), codes),
        Column::new("course_name".into(), names),
        Column::new("grade".into(), grades),
        Column::new("total_marks".into(), marks),
        Column::new("failing".into(), failing),
    ])?;

    Ok(df)
}
