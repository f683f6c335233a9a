//! Aggregate statistics over a batch
//!
//! The headline [`ResultSummary`] is also the summary handed to the result
//! store with every upload, so it is serializable.

use crate::app::models::{ResultBatch, StudentRecord};
use crate::constants::{REASON_FAILED_SUBJECTS, REASON_NO_SUBJECTS, REASON_NO_VALID_SCORE, SCORE_BANDS};
use serde::{Deserialize, Serialize};

/// Headline counts for a set of records
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResultSummary {
    pub total: usize,
    pub passed: usize,
    pub failed: usize,
    pub with_valid_score: usize,
    pub without_valid_score: usize,
    /// `passed / total * 100`, 0 for an empty set
    pub pass_percentage: f64,
    /// Mean over valid scores only, 0 when there are none
    pub average_score: f64,
}

/// Summary of every record in `batch`
pub fn summary(batch: &ResultBatch) -> ResultSummary {
    summarize(batch.records())
}

/// Summary of an arbitrary record set, such as a filtered subset
pub fn summarize<'a>(records: impl IntoIterator<Item = &'a StudentRecord>) -> ResultSummary {
    let mut result = ResultSummary::default();
    let mut score_sum = 0.0;

    for record in records {
        result.total += 1;
        if record.result_status().is_pass() {
            result.passed += 1;
        }
        if record.has_valid_aggregate_score() {
            result.with_valid_score += 1;
            score_sum += record.aggregate_score();
        }
    }

    result.failed = result.total - result.passed;
    result.without_valid_score = result.total - result.with_valid_score;

    if result.total > 0 {
        result.pass_percentage = result.passed as f64 / result.total as f64 * 100.0;
    }
    if result.with_valid_score > 0 {
        result.average_score = score_sum / result.with_valid_score as f64;
    }

    result
}

// =============================================================================
// Score Bands
// =============================================================================

/// One band of the valid-score distribution
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoreBand {
    pub label: String,
    /// Inclusive lower bound; the last band is unbounded below
    pub lower_bound: f64,
    pub count: usize,
    /// Share of valid-score records in this band
    pub percentage: f64,
}

/// Distribution of valid scores over the fixed bands, highest band first
///
/// Records without a valid score are not counted in any band.
pub fn score_distribution(batch: &ResultBatch) -> Vec<ScoreBand> {
    let mut counts = vec![0usize; SCORE_BANDS.len()];
    let mut valid = 0usize;

    for record in batch.records().iter().filter(|r| r.has_valid_aggregate_score()) {
        valid += 1;
        if let Some(index) = SCORE_BANDS
            .iter()
            .position(|(_, lower)| record.aggregate_score() >= *lower)
        {
            counts[index] += 1;
        }
    }

    SCORE_BANDS
        .iter()
        .zip(counts)
        .map(|((label, lower), count)| ScoreBand {
            label: label.to_string(),
            lower_bound: *lower,
            count,
            percentage: if valid > 0 {
                count as f64 / valid as f64 * 100.0
            } else {
                0.0
            },
        })
        .collect()
}

// =============================================================================
// Failure Reasons
// =============================================================================

/// Why failed records failed
///
/// `no_valid_score` includes the records also counted in `both`;
/// `failed_subjects` only counts records that had a valid score.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FailureBreakdown {
    pub total_failed: usize,
    pub no_valid_score: usize,
    pub failed_subjects: usize,
    pub both: usize,
    pub no_subjects: usize,
}

/// Reasons a record failed, empty for a passing record
pub fn failure_reasons(record: &StudentRecord) -> Vec<&'static str> {
    if record.result_status().is_pass() {
        return Vec::new();
    }

    let mut reasons = Vec::new();
    if !record.has_valid_aggregate_score() {
        reasons.push(REASON_NO_VALID_SCORE);
    }
    if record.failed_subject_count() > 0 {
        reasons.push(REASON_FAILED_SUBJECTS);
    }
    if reasons.is_empty() && record.total_subject_count() == 0 {
        reasons.push(REASON_NO_SUBJECTS);
    }
    reasons
}

/// Failure-reason counts over the failed records of `batch`
pub fn failure_breakdown(batch: &ResultBatch) -> FailureBreakdown {
    let mut breakdown = FailureBreakdown::default();

    for record in batch.records().iter().filter(|r| !r.result_status().is_pass()) {
        breakdown.total_failed += 1;

        let valid = record.has_valid_aggregate_score();
        let subjects_failed = record.failed_subject_count() > 0;

        if !valid {
            breakdown.no_valid_score += 1;
        }
        if valid && subjects_failed {
            breakdown.failed_subjects += 1;
        }
        if !valid && subjects_failed {
            breakdown.both += 1;
        }
        if valid && record.total_subject_count() == 0 {
            breakdown.no_subjects += 1;
        }
    }

    breakdown
}
