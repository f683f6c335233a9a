//! CSV and Parquet output for record frames

use super::frames::{students_frame, subjects_frame};
use crate::app::models::StudentRecord;
use crate::{Error, Result};
use clap::ValueEnum;
use polars::prelude::{CsvWriter, DataFrame, ParquetCompression, ParquetWriter, SerWriter};
use serde::Serialize;
use std::fs::File;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// On-disk table format
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Serialize)]
pub enum ExportFormat {
    #[default]
    Csv,
    Parquet,
}

impl ExportFormat {
    pub fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Parquet => "parquet",
        }
    }
}

/// Files written by one export
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ExportSummary {
    pub students_path: PathBuf,
    pub subjects_path: PathBuf,
    pub student_rows: usize,
    pub subject_rows: usize,
}

/// Write the student and subject tables for `records`
///
/// Files are named `<stem>_students.<ext>` and `<stem>_subjects.<ext>` next
/// to `output_stem`. Missing parent directories are created.
pub fn export_records(
    records: &[&StudentRecord],
    output_stem: &Path,
    format: ExportFormat,
) -> Result<ExportSummary> {
    if let Some(parent) = output_stem.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent).map_err(|e| {
            Error::io(format!("Failed to create output directory {}", parent.display()), e)
        })?;
    }

    let students_path = sibling_path(output_stem, "students", format);
    let subjects_path = sibling_path(output_stem, "subjects", format);

    let mut students = students_frame(records)?;
    let mut subjects = subjects_frame(records)?;

    write_frame(&mut students, &students_path, format)?;
    write_frame(&mut subjects, &subjects_path, format)?;

    info!(
        "Exported {} students and {} subjects as {}",
        students.height(),
        subjects.height(),
        format.extension()
    );

    Ok(ExportSummary {
        students_path,
        subjects_path,
        student_rows: students.height(),
        subject_rows: subjects.height(),
    })
}

fn sibling_path(output_stem: &Path, table: &str, format: ExportFormat) -> PathBuf {
    let stem = output_stem
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "results".to_string());
    output_stem.with_file_name(format!("{}_{}.{}", stem, table, format.extension()))
}

/// Write one frame to `path`
pub fn write_frame(df: &mut DataFrame, path: &Path, format: ExportFormat) -> Result<()> {
    debug!("Writing {} rows to {}", df.height(), path.display());

    let mut file = File::create(path)
        .map_err(|e| Error::io(format!("Failed to create {}", path.display()), e))?;

    match format {
        ExportFormat::Csv => CsvWriter::new(&mut file)
            .include_header(true)
            .finish(df)
            .map_err(|e| Error::export(format!("Failed to write CSV {}", path.display()), e))?,
        ExportFormat::Parquet => {
            ParquetWriter::new(file)
                .with_compression(ParquetCompression::Snappy)
                .finish(df)
                .map_err(|e| {
                    Error::export(format!("Failed to write Parquet {}", path.display()), e)
                })?;
        }
    }

    Ok(())
}
