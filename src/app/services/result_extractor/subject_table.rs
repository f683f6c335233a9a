//! Subject row recovery from a student block
//!
//! Rows are matched per line with two strategies:
//! - a structural pattern (code, padded name, marks fractions, grade)
//! - a positional token scan for lines that open with a course code but do
//!   not fit the structural pattern (absent marks, missing fractions)
//!
//! Rows are returned in document order and never deduplicated.

use crate::app::models::SubjectGrade;
use crate::constants::{KNOWN_GRADES, MAX_TOKENS_BEFORE_GRADE, MIN_SUBJECT_ROW_TOKENS};
use regex::Regex;
use std::sync::LazyLock;
use tracing::debug;

/// Code, padded name, repeated marks fractions, final fraction, up to a few
/// intervening tokens (credits, grade points), then the grade
static STRUCTURAL_ROW: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(
        r"\b(?P<code>\d{{6}}[A-Z]?)[ \t]+(?P<name>[A-Za-z][A-Za-z0-9 &.,:()'\-]*?)[ \t]+(?:[*#][ \t]+)?(?:\d+/\d+[ \t]+)*(?P<total>\d+/\d+)[ \t]+(?:\S+[ \t]+){{0,{MAX_TOKENS_BEFORE_GRADE}}}?(?P<grade>[A-Z]{{1,3}}\+{{0,2}})(?:[ \t]|$)"
    ))
    .expect("valid structural subject row regex")
});

/// Six-digit course-code token, optionally letter-suffixed
static COURSE_CODE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d{6}[A-Z]?$").expect("valid course code regex"));

static GRADE_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{1,3}\+{0,2}$").expect("valid grade regex"));

static MARKS_FRACTION_TOKEN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^\d+/\d+$").expect("valid marks fraction regex"));

/// Extract every subject row in `text`, in document order
pub fn extract_subjects(text: &str) -> Vec<SubjectGrade> {
    let mut subjects = Vec::new();

    for line in text.lines() {
        let structural = structural_rows(line);
        if !structural.is_empty() {
            subjects.extend(structural);
            continue;
        }

        if let Some(subject) = scan_line(line) {
            debug!(
                "Recovered subject {} by token scan",
                subject.course_code
            );
            subjects.push(subject);
        }
    }

    subjects
}

/// Rows matching the structural pattern within one line
pub fn structural_rows(line: &str) -> Vec<SubjectGrade> {
    STRUCTURAL_ROW
        .captures_iter(line)
        .filter_map(|caps| {
            let code = caps.name("code")?.as_str();
            let name = caps.name("name")?.as_str().trim();
            let grade = caps.name("grade")?.as_str();
            let total = caps.name("total").map(|m| m.as_str().to_string());
            Some(SubjectGrade::new(code, name, grade, total))
        })
        .collect()
}

/// Positional parse of a line that opens with a course-code token
///
/// The name runs from the second token up to the first token carrying a
/// digit, "/" or "*". The grade is the last grade-shaped token after the
/// name; the marks fraction closest before it becomes `total_marks`. A line
/// without marks columns only counts when its last token is a known grade.
pub fn scan_line(line: &str) -> Option<SubjectGrade> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < MIN_SUBJECT_ROW_TOKENS || !COURSE_CODE_TOKEN.is_match(tokens[0]) {
        return None;
    }

    let name_end = tokens
        .iter()
        .skip(1)
        .position(|token| token.chars().any(|c| c.is_ascii_digit() || c == '/' || c == '*'))
        .map(|index| index + 1)
        .unwrap_or(tokens.len());

    let (name_tokens, grade_index) = if name_end == tokens.len() {
        // No marks columns at all: trailing token is the grade
        let last = tokens.len() - 1;
        if !KNOWN_GRADES.contains(&tokens[last]) {
            return None;
        }
        (&tokens[1..last], last)
    } else {
        let grade_index = (name_end..tokens.len())
            .rev()
            .find(|&index| GRADE_TOKEN.is_match(tokens[index]))?;
        (&tokens[1..name_end], grade_index)
    };

    if name_tokens.is_empty() {
        return None;
    }

    let total_marks = tokens[name_end.min(grade_index)..grade_index]
        .iter()
        .rev()
        .find(|token| MARKS_FRACTION_TOKEN.is_match(token))
        .map(|token| token.to_string());

    Some(SubjectGrade::new(
        tokens[0],
        name_tokens.join(" "),
        tokens[grade_index],
        total_marks,
    ))
}
