//! Tabular export of extracted records
//!
//! A batch (or any filtered subset of it) is written as two tables:
//! - a student table, one row per record with subjects left out
//! - a subject table, one row per subject keyed by seat number and position
//!
//! Both tables are built as polars frames and written as CSV or Parquet.

pub mod frames;
pub mod writer;

pub use frames::{students_frame, subjects_frame};
pub use writer::{ExportFormat, ExportSummary, export_records};
