//! Filesystem access for result documents
//!
//! Documents are plain text produced by an external PDF-to-text step. This
//! adapter reads one document, or discovers every document under a directory
//! for multi-document analysis.

use crate::constants::DOCUMENT_EXTENSION;
use crate::{Error, Result};
use glob::Pattern;
use std::path::{Path, PathBuf};
use tracing::{debug, info};
use walkdir::WalkDir;

/// Read one document's text
///
/// Invalid UTF-8 sequences are replaced rather than rejected; converter
/// output occasionally carries stray bytes from ligatures and headers.
pub fn read_document(path: &Path) -> Result<String> {
    if !path.is_file() {
        return Err(Error::file_not_found(path.display().to_string()));
    }

    let bytes = std::fs::read(path)
        .map_err(|e| Error::io(format!("Failed to read document {}", path.display()), e))?;

    match String::from_utf8(bytes) {
        Ok(text) => Ok(text),
        Err(e) => {
            debug!("{} is not valid UTF-8, decoding lossily", path.display());
            Ok(String::from_utf8_lossy(e.as_bytes()).into_owned())
        }
    }
}

/// Options for [`discover_documents`]
#[derive(Debug, Clone, Default)]
pub struct DiscoveryOptions {
    /// File-name glob applied on top of the extension filter (e.g. "TE_*")
    pub pattern: Option<String>,
    /// Descend into subdirectories
    pub recursive: bool,
}

/// Every text document under `root`, sorted by path
pub fn discover_documents(root: &Path, options: &DiscoveryOptions) -> Result<Vec<PathBuf>> {
    if !root.is_dir() {
        return Err(Error::file_not_found(root.display().to_string()));
    }

    let pattern = options
        .pattern
        .as_deref()
        .map(|p| {
            Pattern::new(p).map_err(|source| Error::Pattern {
                pattern: p.to_string(),
                source,
            })
        })
        .transpose()?;

    let max_depth = if options.recursive { usize::MAX } else { 1 };
    let mut documents = Vec::new();

    for entry in WalkDir::new(root).follow_links(false).max_depth(max_depth) {
        let entry = entry?;
        let path = entry.path();

        if !entry.file_type().is_file()
            || path.extension().is_none_or(|ext| ext != DOCUMENT_EXTENSION)
        {
            continue;
        }

        if let Some(pattern) = &pattern {
            let name = entry.file_name().to_string_lossy();
            if !pattern.matches(&name) {
                continue;
            }
        }

        documents.push(path.to_path_buf());
    }

    documents.sort();
    info!("Discovered {} documents under {}", documents.len(), root.display());
    Ok(documents)
}
