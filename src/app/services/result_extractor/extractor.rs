//! Document-level extraction entry point
//!
//! Runs the segmenter and aggregator over one document's text and wraps the
//! outcome in a [`ResultBatch`].

use super::aggregator::aggregate;
use super::classifier::ClassificationPolicy;
use super::segmenter::segment;
use crate::app::models::ResultBatch;
use tracing::{debug, info, warn};

/// Extractor for converted result-sheet text
///
/// Holds no state besides the classification policy; the same extractor can
/// be shared across threads and documents.
#[derive(Debug, Clone, Copy, Default)]
pub struct ResultExtractor {
    policy: ClassificationPolicy,
}

impl ResultExtractor {
    pub fn new(policy: ClassificationPolicy) -> Self {
        Self { policy }
    }

    pub fn policy(&self) -> ClassificationPolicy {
        self.policy
    }

    /// Extract every student record in `text`
    ///
    /// Empty text or text without a single block marker yields an empty batch.
    pub fn extract(&self, text: &str) -> ResultBatch {
        let segments = segment(text);
        debug!("Found {} student blocks", segments.len());

        if segments.is_empty() {
            if !text.trim().is_empty() {
                warn!("No student blocks found in {} bytes of text", text.len());
            }
            return ResultBatch::empty(text);
        }

        let (records, stats) = aggregate(&segments, self.policy);

        info!(
            "Extracted {} records from {} blocks ({} skipped, strict subject check: {})",
            stats.records_built,
            stats.segments_found,
            stats.records_skipped,
            self.policy.strict_subject_check
        );

        ResultBatch::new(records, text.to_string(), stats)
    }
}
