//! Result-sheet extraction pipeline
//!
//! This module turns the plain text of a converted result document into typed
//! student records. The text is loosely formatted: one block per student, each
//! opened by a seat-number label, with identity fields, an aggregate score
//! (SGPA) and a table of subject/grade rows.
//!
//! ## Architecture
//!
//! The pipeline is organised leaf-first:
//! - [`segmenter`] - Split the document into one block per student
//! - [`field_rules`] - Named label → value → default rules for scalar fields
//! - [`subject_table`] - Structural and token-scan recovery of subject rows
//! - [`classifier`] - Pass/fail and score-validity derivation
//! - [`aggregator`] - Record assembly with per-block failure isolation
//! - [`extractor`] - Document-level entry point producing a batch
//!
//! ## Usage
//!
//! ```rust
//! use result_analyzer::app::services::result_extractor::{ClassificationPolicy, ResultExtractor};
//!
//! let text = "SEAT NO.: T100 NAME : JOHN DOE MOTHER : JANE DOE PRN :AB123 \
//!             THIRD YEAR SGPA : 8.5 TOTAL CREDITS EARNED : 20\n\
//!             310241 DATABASE MANAGEMENT SYSTEMS 025/030 050/070 075/100 A\n";
//!
//! let batch = ResultExtractor::new(ClassificationPolicy::strict()).extract(text);
//! assert_eq!(batch.len(), 1);
//! assert_eq!(batch.records()[0].seat_number(), "T100");
//! ```

pub mod aggregator;
pub mod classifier;
pub mod extractor;
pub mod field_rules;
pub mod segmenter;
pub mod subject_table;

#[cfg(test)]
pub mod tests;

// Re-export main types for easy access
pub use classifier::{Classification, ClassificationPolicy};
pub use extractor::ResultExtractor;
pub use field_rules::{Field, FieldRule};
pub use segmenter::Segment;
