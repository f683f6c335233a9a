//! Ranking by aggregate score

use crate::app::models::{ResultBatch, StudentRecord};

/// Best `n` records with a valid aggregate score, highest first
///
/// Ties keep their batch order. Records without a valid score never rank.
pub fn top_n(batch: &ResultBatch, n: usize) -> Vec<&StudentRecord> {
    let mut ranked: Vec<&StudentRecord> = batch
        .records()
        .iter()
        .filter(|record| record.has_valid_aggregate_score())
        .collect();

    // sort_by is stable
    ranked.sort_by(|a, b| b.aggregate_score().total_cmp(&a.aggregate_score()));
    ranked.truncate(n);
    ranked
}
