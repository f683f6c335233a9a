//! Directory-backed JSON result store

use super::ResultStore;
use super::models::{StoredDocument, StoredDocumentId, Uploader};
use crate::app::models::StudentRecord;
use crate::app::services::result_queries::ResultSummary;
use crate::{Error, Result};
use chrono::Utc;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use tracing::{debug, info, warn};

const STORE_EXTENSION: &str = "json";

/// One pretty-printed JSON file per stored document
///
/// Each save is written to a temporary file in the store directory and then
/// renamed into place, so readers never see a half-written document.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    root: PathBuf,
}

impl JsonFileStore {
    /// Open a store rooted at `root`, creating the directory if needed
    pub fn open(root: impl Into<PathBuf>) -> Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root).map_err(|e| {
            Error::io(format!("Failed to create result store {}", root.display()), e)
        })?;
        debug!("Opened result store at {}", root.display());
        Ok(Self { root })
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    fn document_path(&self, id: StoredDocumentId) -> PathBuf {
        self.root.join(format!("{}.{}", id, STORE_EXTENSION))
    }

    /// Load one document by id
    pub fn load(&self, id: StoredDocumentId) -> Result<StoredDocument> {
        let path = self.document_path(id);
        if !path.exists() {
            return Err(Error::file_not_found(path.display().to_string()));
        }
        read_document(&path)
    }

    fn write_atomically(&self, document: &StoredDocument) -> Result<()> {
        let json = serde_json::to_vec_pretty(document).map_err(|e| {
            Error::serialization(format!("Failed to encode document {}", document.id), e)
        })?;

        let mut temp = NamedTempFile::new_in(&self.root)
            .map_err(|e| Error::io("Failed to create temporary store file", e))?;
        temp.write_all(&json)
            .and_then(|_| temp.as_file().sync_all())
            .map_err(|e| Error::io("Failed to write temporary store file", e))?;

        let target = self.document_path(document.id);
        temp.persist(&target).map_err(|e| {
            Error::io(format!("Failed to move document into {}", target.display()), e.error)
        })?;

        Ok(())
    }
}

fn read_document(path: &Path) -> Result<StoredDocument> {
    let contents = fs::read_to_string(path)
        .map_err(|e| Error::io(format!("Failed to read {}", path.display()), e))?;
    serde_json::from_str(&contents)
        .map_err(|e| Error::serialization(format!("Failed to decode {}", path.display()), e))
}

impl ResultStore for JsonFileStore {
    fn save(
        &self,
        document_name: &str,
        exam_tag: &str,
        records: &[StudentRecord],
        uploader: &Uploader,
        summary: &ResultSummary,
    ) -> Result<StoredDocumentId> {
        if document_name.trim().is_empty() {
            return Err(Error::store("Document name must not be empty"));
        }
        if uploader.name.trim().is_empty() {
            return Err(Error::store("Uploader must be named"));
        }

        let document = StoredDocument {
            id: StoredDocumentId::new(),
            document_name: document_name.trim().to_string(),
            exam_tag: exam_tag.trim().to_string(),
            uploaded_by: uploader.clone(),
            uploaded_at: Utc::now(),
            summary: summary.clone(),
            records: records.to_vec(),
        };

        self.write_atomically(&document)?;

        info!(
            "Stored '{}' ({} records) as {}",
            document.document_name,
            document.records.len(),
            document.id
        );
        Ok(document.id)
    }

    fn documents(&self) -> Result<Vec<StoredDocument>> {
        let entries = fs::read_dir(&self.root).map_err(|e| {
            Error::io(format!("Failed to list result store {}", self.root.display()), e)
        })?;

        let mut documents = Vec::new();
        for entry in entries {
            let path = entry?.path();
            if path.extension().and_then(|ext| ext.to_str()) != Some(STORE_EXTENSION) {
                continue;
            }

            match read_document(&path) {
                Ok(document) => documents.push(document),
                Err(e) => warn!("Skipping unreadable stored document: {}", e),
            }
        }

        documents.sort_by_key(|doc| doc.uploaded_at);
        Ok(documents)
    }
}
