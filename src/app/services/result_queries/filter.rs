//! Record filtering

use crate::app::models::{ResultBatch, ResultStatus, StudentRecord};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Score-validity predicate for [`filter`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
pub enum ScoreValidity {
    /// Keep every record
    #[default]
    All,
    /// Only records with a valid aggregate score
    Valid,
    /// Only records whose score token was missing or a sentinel
    Invalid,
}

impl ScoreValidity {
    pub fn matches(&self, record: &StudentRecord) -> bool {
        match self {
            ScoreValidity::All => true,
            ScoreValidity::Valid => record.has_valid_aggregate_score(),
            ScoreValidity::Invalid => !record.has_valid_aggregate_score(),
        }
    }
}

/// Records meeting all three predicates, in batch order
///
/// `min_score` compares against the numeric score, which is 0.0 for records
/// without a valid score; a bound of 0.0 therefore keeps everyone.
pub fn filter(
    batch: &ResultBatch,
    min_score: f64,
    status: Option<ResultStatus>,
    score_validity: ScoreValidity,
) -> Vec<&StudentRecord> {
    batch
        .records()
        .iter()
        .filter(|record| record.aggregate_score() >= min_score)
        .filter(|record| status.is_none_or(|wanted| record.result_status() == wanted))
        .filter(|record| score_validity.matches(record))
        .collect()
}

/// Every failing record, in batch order
pub fn failed(batch: &ResultBatch) -> Vec<&StudentRecord> {
    batch
        .records()
        .iter()
        .filter(|record| record.result_status() == ResultStatus::Fail)
        .collect()
}
