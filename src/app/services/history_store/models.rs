//! Stored document and history types

use crate::app::models::StudentRecord;
use crate::app::services::result_queries::ResultSummary;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Who uploaded a document
///
/// Passed explicitly into every save; nothing is read from ambient session
/// state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Uploader {
    pub name: String,
}

impl Uploader {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Opaque identifier of a stored document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StoredDocumentId(Uuid);

impl StoredDocumentId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn parse(value: &str) -> Option<Self> {
        Uuid::parse_str(value.trim()).ok().map(Self)
    }
}

impl Default for StoredDocumentId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for StoredDocumentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One persisted upload
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredDocument {
    pub id: StoredDocumentId,
    pub document_name: String,
    pub exam_tag: String,
    pub uploaded_by: Uploader,
    pub uploaded_at: DateTime<Utc>,
    pub summary: ResultSummary,
    pub records: Vec<StudentRecord>,
}

/// One student's record within one stored document
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct HistoryEntry {
    pub document_id: StoredDocumentId,
    pub document_name: String,
    pub exam_tag: String,
    pub uploaded_at: DateTime<Utc>,
    pub record: StudentRecord,
}

/// Every stored record of one student, oldest upload first
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StudentHistory {
    /// Registration number, or seat number when the registration is unknown
    pub student_key: String,
    /// Name from the most recent entry
    pub name: String,
    pub entries: Vec<HistoryEntry>,
}
