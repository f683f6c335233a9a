//! Persistence of analysed documents and per-student history
//!
//! The [`ResultStore`] trait is the persistence contract: accept one analysed
//! document with its records, uploader and summary, return an opaque id, and
//! never leave a partially written document behind. [`JsonFileStore`] keeps
//! one JSON file per upload in a directory.
//!
//! History lookups group a student's records across every stored document,
//! ordered by upload time.

pub mod history;
pub mod json_store;
pub mod models;

#[cfg(test)]
pub mod tests;

pub use history::{HistoryQuery, build_history};
pub use json_store::JsonFileStore;
pub use models::{HistoryEntry, StoredDocument, StoredDocumentId, StudentHistory, Uploader};

use crate::Result;
use crate::app::models::StudentRecord;
use crate::app::services::result_queries::ResultSummary;

/// Storage collaborator for analysed documents
pub trait ResultStore {
    /// Persist one analysed document
    fn save(
        &self,
        document_name: &str,
        exam_tag: &str,
        records: &[StudentRecord],
        uploader: &Uploader,
        summary: &ResultSummary,
    ) -> Result<StoredDocumentId>;

    /// Every stored document, oldest upload first
    fn documents(&self) -> Result<Vec<StoredDocument>>;

    /// Records of every student matching `query`, grouped per student
    fn history(&self, query: &HistoryQuery) -> Result<Vec<StudentHistory>> {
        let documents = self.documents()?;
        Ok(build_history(&documents, query))
    }
}
