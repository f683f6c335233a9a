//! Data models for student result processing
//!
//! This module contains the typed records produced by the extraction pipeline:
//! one [`StudentRecord`] per student block, its [`SubjectGrade`] rows, and the
//! [`ResultBatch`] that holds every record extracted from one document.

use crate::app::services::result_extractor::classifier::{self, ClassificationPolicy};
use crate::constants::FAILING_GRADES;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// =============================================================================
// Subject Rows
// =============================================================================

/// One subject row belonging to exactly one student record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubjectGrade {
    /// Course code as printed (e.g. "310241" or "310245A")
    pub course_code: String,

    /// Course title with surrounding padding removed
    pub course_name: String,

    /// Grade token (uppercase letters, optionally "+"-suffixed)
    pub grade: String,

    /// Final marks fraction (e.g. "075/100") when the row carried one
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total_marks: Option<String>,
}

impl SubjectGrade {
    pub fn new(
        course_code: impl Into<String>,
        course_name: impl Into<String>,
        grade: impl Into<String>,
        total_marks: Option<String>,
    ) -> Self {
        Self {
            course_code: course_code.into(),
            course_name: course_name.into(),
            grade: grade.into(),
            total_marks,
        }
    }

    /// True when the grade is one of the failing-grade tokens
    pub fn is_failing(&self) -> bool {
        FAILING_GRADES.contains(&self.grade.as_str())
    }
}

// =============================================================================
// Result Status
// =============================================================================

/// Derived pass/fail outcome for one student
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ResultStatus {
    Pass,
    Fail,
}

impl ResultStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ResultStatus::Pass => "Pass",
            ResultStatus::Fail => "Fail",
        }
    }

    pub fn is_pass(&self) -> bool {
        matches!(self, ResultStatus::Pass)
    }
}

impl fmt::Display for ResultStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ResultStatus {
    type Err = crate::Error;

    fn from_str(s: &str) -> crate::Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "pass" => Ok(ResultStatus::Pass),
            "fail" => Ok(ResultStatus::Fail),
            other => Err(crate::Error::configuration(format!(
                "Unknown result status '{}' (expected 'pass' or 'fail')",
                other
            ))),
        }
    }
}

// =============================================================================
// Extracted Fields
// =============================================================================

/// Scalar fields pulled out of one student block before classification
///
/// Every field is always populated: a label that was not found resolves to
/// its sentinel ("Unknown", "0.0" or 0).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtractedFields {
    pub seat_number: String,
    pub name: String,
    pub guardian_name: String,
    pub registration_number: String,
    pub aggregate_score_raw: String,
    pub earned_credits: u32,
}

// =============================================================================
// Student Record
// =============================================================================

/// Fully assembled and classified result for one student
///
/// Records are created once by the aggregator and never modified; the derived
/// counters and status are computed at construction and exposed read-only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StudentRecord {
    seat_number: String,
    name: String,
    guardian_name: String,
    registration_number: String,
    aggregate_score: f64,
    aggregate_score_raw: String,
    earned_credits: u32,
    subjects: Vec<SubjectGrade>,
    passed_subject_count: usize,
    total_subject_count: usize,
    has_valid_aggregate_score: bool,
    result_status: ResultStatus,
}

impl StudentRecord {
    /// Assemble a record from extracted fields and subject rows, classifying
    /// it under `policy`
    pub fn new(
        fields: ExtractedFields,
        subjects: Vec<SubjectGrade>,
        policy: ClassificationPolicy,
    ) -> Self {
        let classification = classifier::classify(&fields.aggregate_score_raw, &subjects, policy);

        Self {
            seat_number: fields.seat_number,
            name: fields.name,
            guardian_name: fields.guardian_name,
            registration_number: fields.registration_number,
            aggregate_score: classification.aggregate_score,
            aggregate_score_raw: fields.aggregate_score_raw,
            earned_credits: fields.earned_credits,
            subjects,
            passed_subject_count: classification.passed_subject_count,
            total_subject_count: classification.total_subject_count,
            has_valid_aggregate_score: classification.has_valid_aggregate_score,
            result_status: classification.result_status,
        }
    }

    pub fn seat_number(&self) -> &str {
        &self.seat_number
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn guardian_name(&self) -> &str {
        &self.guardian_name
    }

    pub fn registration_number(&self) -> &str {
        &self.registration_number
    }

    /// Numeric score, 0.0 whenever the raw token is not a valid score
    pub fn aggregate_score(&self) -> f64 {
        self.aggregate_score
    }

    /// Score token exactly as it appeared in the document
    pub fn aggregate_score_raw(&self) -> &str {
        &self.aggregate_score_raw
    }

    pub fn earned_credits(&self) -> u32 {
        self.earned_credits
    }

    pub fn subjects(&self) -> &[SubjectGrade] {
        &self.subjects
    }

    pub fn passed_subject_count(&self) -> usize {
        self.passed_subject_count
    }

    pub fn total_subject_count(&self) -> usize {
        self.total_subject_count
    }

    pub fn failed_subject_count(&self) -> usize {
        self.total_subject_count - self.passed_subject_count
    }

    pub fn has_valid_aggregate_score(&self) -> bool {
        self.has_valid_aggregate_score
    }

    pub fn result_status(&self) -> ResultStatus {
        self.result_status
    }

    /// Score as shown to users: the number when valid, the raw token otherwise
    pub fn display_score(&self) -> String {
        if self.has_valid_aggregate_score {
            format!("{:.2}", self.aggregate_score)
        } else {
            self.aggregate_score_raw.clone()
        }
    }
}

// =============================================================================
// Extraction Statistics
// =============================================================================

/// Counters and warnings collected while extracting one document
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ExtractionStats {
    /// Number of student blocks found by the segmenter
    pub segments_found: usize,

    /// Number of records successfully assembled
    pub records_built: usize,

    /// Number of blocks dropped as malformed
    pub records_skipped: usize,

    /// Human-readable warning per dropped block
    pub warnings: Vec<String>,
}

impl ExtractionStats {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a dropped block
    pub fn add_warning(&mut self, message: String) {
        self.records_skipped += 1;
        self.warnings.push(message);
    }

    /// Share of segments that became records, as a percentage
    pub fn success_rate(&self) -> f64 {
        if self.segments_found == 0 {
            0.0
        } else {
            (self.records_built as f64 / self.segments_found as f64) * 100.0
        }
    }
}

// =============================================================================
// Result Batch
// =============================================================================

/// All records extracted from one document, in document order
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResultBatch {
    records: Vec<StudentRecord>,
    raw_text: String,
    stats: ExtractionStats,
}

impl ResultBatch {
    pub fn new(records: Vec<StudentRecord>, raw_text: String, stats: ExtractionStats) -> Self {
        Self {
            records,
            raw_text,
            stats,
        }
    }

    /// Batch produced from a document with no student blocks
    pub fn empty(raw_text: impl Into<String>) -> Self {
        Self::new(Vec::new(), raw_text.into(), ExtractionStats::new())
    }

    pub fn records(&self) -> &[StudentRecord] {
        &self.records
    }

    /// Source text, kept for audit and debug display
    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    pub fn stats(&self) -> &ExtractionStats {
        &self.stats
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn into_records(self) -> Vec<StudentRecord> {
        self.records
    }
}
