//! Cross-document history lookups

use super::models::{HistoryEntry, StoredDocument, StudentHistory};
use crate::app::models::StudentRecord;
use crate::constants::UNKNOWN_FIELD;

/// Which students a history lookup returns
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryQuery {
    /// Exact registration number
    Registration(String),
    /// Case-insensitive name substring
    Name(String),
}

impl HistoryQuery {
    pub fn matches(&self, record: &StudentRecord) -> bool {
        match self {
            HistoryQuery::Registration(prn) => record.registration_number() == prn.trim(),
            HistoryQuery::Name(fragment) => {
                let fragment = fragment.trim().to_lowercase();
                !fragment.is_empty() && record.name().to_lowercase().contains(&fragment)
            }
        }
    }
}

/// Key identifying one student across documents
///
/// `None` when neither the registration number nor the seat number was read.
pub fn student_key(record: &StudentRecord) -> Option<&str> {
    [record.registration_number(), record.seat_number()]
        .into_iter()
        .find(|value| *value != UNKNOWN_FIELD)
}

/// Group matching records per student
///
/// Entries follow upload time regardless of the order of `documents`;
/// students appear in order of their earliest matching entry. A record with
/// no key is never merged and forms a history of its own.
pub fn build_history(documents: &[StoredDocument], query: &HistoryQuery) -> Vec<StudentHistory> {
    let mut ordered: Vec<&StoredDocument> = documents.iter().collect();
    ordered.sort_by_key(|doc| doc.uploaded_at);

    let mut histories: Vec<StudentHistory> = Vec::new();

    for document in ordered {
        for record in document.records.iter().filter(|r| query.matches(r)) {
            let key = student_key(record);
            let entry = HistoryEntry {
                document_id: document.id,
                document_name: document.document_name.clone(),
                exam_tag: document.exam_tag.clone(),
                uploaded_at: document.uploaded_at,
                record: record.clone(),
            };

            let existing =
                key.and_then(|key| histories.iter_mut().find(|h| h.student_key == key));

            match existing {
                Some(history) => {
                    history.name = record.name().to_string();
                    history.entries.push(entry);
                }
                None => histories.push(StudentHistory {
                    student_key: key.unwrap_or(UNKNOWN_FIELD).to_string(),
                    name: record.name().to_string(),
                    entries: vec![entry],
                }),
            }
        }
    }

    histories
}
