//! Application constants for the result analyzer
//!
//! This module contains the grading vocabularies, extraction defaults,
//! and configuration keys used throughout the application.

// =============================================================================
// Grading Vocabulary
// =============================================================================

/// Grade tokens that mark a subject as failed (exact, case-sensitive match)
///
/// Grades outside this set pass, including "+"-suffixed grades such as "A+".
pub const FAILING_GRADES: &[&str] = &["F", "FF", "AB", "IC", "ABS"];

/// Grades accepted on a subject row that has no marks or credit columns
pub const KNOWN_GRADES: &[&str] = &[
    "O", "A+", "A", "B+", "B", "C", "D", "E", "P", "PP", "NP", "F", "FF", "AB", "IC", "ABS",
];

/// Aggregate-score tokens that can never be a valid score
pub const INVALID_SCORE_TOKENS: &[&str] = &["", "N/A", "--", "FF", "AB", "IC", "ABS"];

/// Score bands used for the distribution report, highest first
///
/// Each entry is `(label, inclusive lower bound)`; the last band catches
/// everything below the previous bound.
pub const SCORE_BANDS: &[(&str, f64)] = &[
    ("9.0+ (Excellent)", 9.0),
    ("8.0-8.9 (Very Good)", 8.0),
    ("7.0-7.9 (Good)", 7.0),
    ("6.0-6.9 (Average)", 6.0),
    ("Below 6.0", f64::NEG_INFINITY),
];

// =============================================================================
// Extraction Defaults
// =============================================================================

/// Sentinel for string fields whose label was not found
pub const UNKNOWN_FIELD: &str = "Unknown";

/// Raw aggregate-score token recorded when no score label is present
pub const DEFAULT_SCORE_TOKEN: &str = "0.0";

/// Minimum whitespace-separated tokens for a line-scanned subject row
pub const MIN_SUBJECT_ROW_TOKENS: usize = 3;

/// Maximum tokens allowed between the last marks fraction and the grade
pub const MAX_TOKENS_BEFORE_GRADE: usize = 5;

// =============================================================================
// Failure Reasons
// =============================================================================

pub const REASON_NO_VALID_SCORE: &str = "No valid SGPA";
pub const REASON_FAILED_SUBJECTS: &str = "Failed subjects";
pub const REASON_NO_SUBJECTS: &str = "No subject rows";

// =============================================================================
// Processing Defaults
// =============================================================================

/// Default number of students shown by ranking queries
pub const DEFAULT_TOP_N: usize = 10;

/// Upper bound on concurrent document extractions
pub const MAX_WORKERS: usize = 64;

/// Accepted `[logging] level` values
pub const LOG_LEVELS: &[&str] = &["error", "warn", "info", "debug", "trace"];

/// File extension of converted result documents
pub const DOCUMENT_EXTENSION: &str = "txt";

/// Application directory name under the user's config/data directories
pub const APP_DIR_NAME: &str = "result-analyzer";

/// Configuration file name
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Environment Overrides
// =============================================================================

pub mod env_keys {
    pub const STRICT: &str = "RESULT_ANALYZER_STRICT";
    pub const WORKERS: &str = "RESULT_ANALYZER_WORKERS";
    pub const HISTORY_PATH: &str = "RESULT_ANALYZER_HISTORY_PATH";
    pub const OUTPUT_PATH: &str = "RESULT_ANALYZER_OUTPUT_PATH";
}
