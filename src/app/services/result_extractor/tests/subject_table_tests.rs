//! Tests for subject row recovery

use super::*;
use crate::app::models::SubjectGrade;
use crate::app::services::result_extractor::segmenter::segment;
use crate::app::services::result_extractor::subject_table::{
    extract_subjects, scan_line, structural_rows,
};

#[test]
fn test_structural_row_with_marks_columns() {
    let rows = structural_rows("310241 DATABASE MANAGEMENT SYSTEMS 025/030 050/070 075/100 A");

    assert_eq!(
        rows,
        vec![SubjectGrade::new(
            "310241",
            "DATABASE MANAGEMENT SYSTEMS",
            "A",
            Some("075/100".to_string())
        )]
    );
}

#[test]
fn test_structural_row_skips_credit_columns_before_grade() {
    let rows =
        structural_rows("310243 SYSTEMS PROGRAMMING & OS 020/030 045/070 065/100 04 B+ 08 32");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].course_name, "SYSTEMS PROGRAMMING & OS");
    assert_eq!(rows[0].grade, "B+");
    assert_eq!(rows[0].total_marks.as_deref(), Some("065/100"));
}

#[test]
fn test_structural_row_with_letter_suffixed_code() {
    let rows = structural_rows("310245A ELECTIVE: CLOUD COMPUTING 030/050 040/050 070/100 03 O 10 30");

    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0].course_code, "310245A");
    assert_eq!(rows[0].course_name, "ELECTIVE: CLOUD COMPUTING");
    assert_eq!(rows[0].grade, "O");
}

#[test]
fn test_scan_recovers_absent_marks_row() {
    let line = "310241 DATABASE MANAGEMENT SYSTEMS AB/030 AB/070 AB/100 04 AB 00 00";
    assert!(structural_rows(line).is_empty());

    let subject = scan_line(line).expect("row should be recovered by token scan");
    assert_eq!(subject.course_code, "310241");
    assert_eq!(subject.course_name, "DATABASE MANAGEMENT SYSTEMS");
    assert_eq!(subject.grade, "AB");
    assert_eq!(subject.total_marks, None);
    assert!(subject.is_failing());
}

#[test]
fn test_scan_row_without_marks_columns() {
    let subject = scan_line("310250 SEMINAR PP").expect("grade-only row");

    assert_eq!(subject.course_name, "SEMINAR");
    assert_eq!(subject.grade, "PP");
    assert_eq!(subject.total_marks, None);
}

#[test]
fn test_title_ending_in_short_word_is_not_a_grade() {
    for line in [
        "310248 SOFTWARE LAB",
        "310249 DATA SCIENCE AND",
        "310243 SYSTEMS PROGRAMMING OS",
        "310244 INFORMATION TECHNOLOGY IT",
    ] {
        assert!(scan_line(line).is_none(), "line {}", line);
    }

    // Wrapped title with the marks on the following line
    let text = "310246 COMPUTER NETWORKS AND SECURITY LAB\n025/030 A\n";
    assert!(extract_subjects(text).is_empty());
}

#[test]
fn test_scan_rejects_non_rows() {
    assert!(scan_line("").is_none());
    assert!(scan_line("310241 A").is_none());
    assert!(scan_line("THIRD YEAR SGPA : 9.12 TOTAL CREDITS EARNED : 22").is_none());
    assert!(scan_line("T.E. (2019 PATTERN) EXAMINATION MAY 2024").is_none());
    assert!(scan_line("310241 025/030 050/070 075/100 A").is_none());
}

#[test]
fn test_extract_subjects_keeps_document_order() {
    let document = create_test_document();
    let segments = segment(&document);

    let codes: Vec<String> = extract_subjects(segments[0].text)
        .into_iter()
        .map(|s| s.course_code)
        .collect();
    assert_eq!(codes, vec!["310241", "310242", "310243"]);

    let grades: Vec<String> = extract_subjects(segments[0].text)
        .into_iter()
        .map(|s| s.grade)
        .collect();
    assert_eq!(grades, vec!["A", "A+", "B+"]);
}

#[test]
fn test_extract_subjects_mixes_structural_and_scan_rows() {
    let document = create_test_document();
    let segments = segment(&document);
    let subjects = extract_subjects(segments[2].text);

    assert_eq!(subjects.len(), 2);
    assert_eq!(subjects[0].grade, "AB");
    assert_eq!(subjects[1].grade, "A");
    assert_eq!(subjects[1].total_marks.as_deref(), Some("074/100"));
}

#[test]
fn test_duplicate_rows_are_preserved() {
    let text = "310241 DATABASE MANAGEMENT SYSTEMS 025/030 050/070 075/100 A\n\
                310241 DATABASE MANAGEMENT SYSTEMS 025/030 050/070 075/100 A\n";

    let subjects = extract_subjects(text);
    assert_eq!(subjects.len(), 2);
    assert_eq!(subjects[0], subjects[1]);
}

#[test]
fn test_identity_and_score_lines_yield_no_rows() {
    let text = "SEAT NO.: T190010001 NAME : PATIL ANANYA RAJESH MOTHER : SUNITA PRN :72012345L\n\
                THIRD YEAR SGPA : 9.12 TOTAL CREDITS EARNED : 22\n";
    assert!(extract_subjects(text).is_empty());
}
