//! Read-only views over an extracted batch
//!
//! Every function here borrows a [`ResultBatch`](crate::app::models::ResultBatch)
//! and returns references or plain values; nothing mutates records.
//!
//! - [`ranking`] - Top-N by aggregate score
//! - [`summary`] - Headline counts, score bands and failure reasons
//! - [`filter`] - Conjunctive filtering and the failed set
//! - [`lookup`] - Single-student lookup by seat, name or registration number

pub mod filter;
pub mod lookup;
pub mod ranking;
pub mod summary;

#[cfg(test)]
pub mod tests;

pub use filter::{ScoreValidity, failed, filter};
pub use lookup::{LookupKey, find_student};
pub use ranking::top_n;
pub use summary::{
    FailureBreakdown, ResultSummary, ScoreBand, failure_breakdown, failure_reasons,
    score_distribution, summarize, summary,
};
