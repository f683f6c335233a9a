//! Command-line argument definitions for the result analyzer
//!
//! Defines the CLI surface with the clap derive API. Global flags (config
//! file, verbosity, classification policy, output format) are accepted before
//! or after the subcommand.

use crate::app::models::ResultStatus;
use crate::app::services::batch_exporter::ExportFormat;
use crate::app::services::result_queries::ScoreValidity;
use clap::{ArgGroup, Args as ClapArgs, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// CLI arguments for the student result analyzer
///
/// Reads the plain text of a converted university result sheet, extracts one
/// record per student and reports on the batch.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "result-analyzer",
    version,
    about = "Extract and analyse student results from converted result-sheet text",
    long_about = "Turns the plain text of a converted university result sheet into typed \
                  student records (seat number, name, SGPA, credits, subject grades) and \
                  derives pass/fail outcomes, rankings, score bands and failure reasons. \
                  Records can be exported to CSV or Parquet and stored for per-student \
                  history across exam sessions."
)]
pub struct Args {
    #[command(flatten)]
    pub global: GlobalArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Flags shared by every subcommand
#[derive(Debug, Clone, Default, ClapArgs)]
pub struct GlobalArgs {
    /// Path to configuration file
    ///
    /// TOML configuration file. If not specified, looks for
    /// <config dir>/result-analyzer/config.toml
    #[arg(
        short = 'c',
        long = "config",
        value_name = "FILE",
        global = true,
        help = "Path to configuration file (TOML format)"
    )]
    pub config_file: Option<PathBuf>,

    /// Pass on a valid SGPA alone, ignoring subject grades
    #[arg(
        long = "lenient",
        global = true,
        help = "Classify on SGPA validity alone, ignoring failed subjects"
    )]
    pub lenient: bool,

    #[arg(
        short = 'v',
        long = "verbose",
        action = clap::ArgAction::Count,
        global = true,
        help = "Increase logging verbosity (-v: info, -vv: debug, -vvv: trace)"
    )]
    pub verbose: u8,

    /// Only show errors and critical messages. Overrides verbose settings.
    #[arg(
        short = 'q',
        long = "quiet",
        global = true,
        help = "Suppress output except errors",
        conflicts_with = "verbose"
    )]
    pub quiet: bool,

    #[arg(
        long = "format",
        value_enum,
        default_value = "human",
        global = true,
        help = "Output format for results"
    )]
    pub output_format: OutputFormat,
}

impl GlobalArgs {
    /// Get log level based on verbosity flags
    pub fn get_log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else {
            match self.verbose {
                0 => "warn",
                1 => "info",
                2 => "debug",
                _ => "trace",
            }
        }
    }

    /// Level requested by `-v`/`-q`, `None` when neither flag was given
    pub fn log_level_override(&self) -> Option<&'static str> {
        (self.quiet || self.verbose > 0).then(|| self.get_log_level())
    }

    /// Progress bars are hidden in quiet mode and for machine-readable output
    pub fn show_progress(&self) -> bool {
        !self.quiet && matches!(self.output_format, OutputFormat::Human)
    }
}

/// Available subcommands
#[derive(Debug, Clone, Subcommand)]
pub enum Commands {
    /// Summary, score bands, failure reasons and top performers for one document
    Analyze(AnalyzeArgs),
    /// Look up a single student by seat number, name or PRN
    Search(SearchArgs),
    /// List students matching score, status and validity filters
    Filter(FilterArgs),
    /// Write student and subject tables to CSV or Parquet
    Export(ExportArgs),
    /// Analyse every document in a directory concurrently
    Batch(BatchArgs),
    /// Save a document's records to the result store
    Store(StoreArgs),
    /// Show a student's records across stored documents
    History(HistoryArgs),
}

#[derive(Debug, Clone, Parser)]
pub struct AnalyzeArgs {
    /// Converted result document (plain text)
    #[arg(value_name = "DOCUMENT")]
    pub input: PathBuf,

    /// Number of top performers to list
    ///
    /// Defaults to the configured top-N (10 unless overridden).
    #[arg(short = 'n', long = "top", value_name = "COUNT")]
    pub top: Option<usize>,

    /// List every failed student with failure reasons
    #[arg(long = "show-failed", help = "List failed students with failure reasons")]
    pub show_failed: bool,

    /// Print the raw document text after the report
    #[arg(long = "show-raw", help = "Print the extracted source text")]
    pub show_raw: bool,
}

#[derive(Debug, Clone, Parser)]
#[command(group(ArgGroup::new("key").required(true).args(["seat", "name", "prn"])))]
pub struct SearchArgs {
    #[arg(value_name = "DOCUMENT")]
    pub input: PathBuf,

    #[arg(long = "seat", value_name = "SEAT_NO", help = "Exact seat number")]
    pub seat: Option<String>,

    #[arg(long = "name", value_name = "NAME", help = "Exact student name")]
    pub name: Option<String>,

    #[arg(long = "prn", value_name = "PRN", help = "Exact registration number")]
    pub prn: Option<String>,
}

/// Status predicate for the filter command
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Pass,
    Fail,
}

impl From<StatusArg> for ResultStatus {
    fn from(status: StatusArg) -> Self {
        match status {
            StatusArg::Pass => ResultStatus::Pass,
            StatusArg::Fail => ResultStatus::Fail,
        }
    }
}

#[derive(Debug, Clone, Parser)]
pub struct FilterArgs {
    #[arg(value_name = "DOCUMENT")]
    pub input: PathBuf,

    #[arg(
        long = "min-score",
        value_name = "SGPA",
        default_value_t = 0.0,
        help = "Minimum SGPA (invalid scores count as 0.0)"
    )]
    pub min_score: f64,

    #[arg(long = "status", value_enum, help = "Keep only passing or failing students")]
    pub status: Option<StatusArg>,

    #[arg(
        long = "validity",
        value_enum,
        default_value = "all",
        help = "Keep students with valid, invalid or any SGPA"
    )]
    pub validity: ScoreValidity,

    /// Also export the filtered students to `<STEM>_students.<ext>`
    #[arg(long = "export", value_name = "STEM")]
    pub export: Option<PathBuf>,

    #[arg(long = "export-format", value_enum, default_value = "csv")]
    pub export_format: ExportFormat,
}

#[derive(Debug, Clone, Parser)]
pub struct ExportArgs {
    #[arg(value_name = "DOCUMENT")]
    pub input: PathBuf,

    /// Output file stem
    ///
    /// Tables are written as `<STEM>_students.<ext>` and `<STEM>_subjects.<ext>`.
    /// Defaults to the document name inside the configured output directory.
    #[arg(short = 'o', long = "output", value_name = "STEM")]
    pub output: Option<PathBuf>,

    #[arg(long = "export-format", value_enum, default_value = "csv")]
    pub export_format: ExportFormat,
}

#[derive(Debug, Clone, Parser)]
pub struct BatchArgs {
    /// Directory of converted result documents (*.txt)
    #[arg(value_name = "DIR")]
    pub input_dir: PathBuf,

    #[arg(long = "pattern", value_name = "GLOB", help = "File-name glob, e.g. 'TE_*'")]
    pub pattern: Option<String>,

    #[arg(short = 'r', long = "recursive", help = "Descend into subdirectories")]
    pub recursive: bool,

    #[arg(
        short = 'j',
        long = "workers",
        value_name = "COUNT",
        help = "Documents extracted concurrently"
    )]
    pub workers: Option<usize>,
}

#[derive(Debug, Clone, Parser)]
pub struct StoreArgs {
    #[arg(value_name = "DOCUMENT")]
    pub input: PathBuf,

    #[arg(long = "uploader", value_name = "NAME", help = "Who is uploading the document")]
    pub uploader: String,

    #[arg(
        long = "exam",
        value_name = "TAG",
        default_value = "",
        help = "Exam session tag, e.g. 'MAY-2024'"
    )]
    pub exam_tag: String,

    /// Name recorded for the document; defaults to the file name
    #[arg(long = "document-name", value_name = "NAME")]
    pub document_name: Option<String>,

    #[arg(long = "store", value_name = "DIR", help = "Result store directory")]
    pub store_path: Option<PathBuf>,
}

#[derive(Debug, Clone, Parser)]
#[command(group(ArgGroup::new("key").required(true).args(["prn", "name"])))]
pub struct HistoryArgs {
    #[arg(long = "prn", value_name = "PRN", help = "Exact registration number")]
    pub prn: Option<String>,

    #[arg(long = "name", value_name = "TEXT", help = "Case-insensitive name fragment")]
    pub name: Option<String>,

    #[arg(long = "store", value_name = "DIR", help = "Result store directory")]
    pub store_path: Option<PathBuf>,
}

/// Output format options for results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable output
    #[default]
    Human,
    /// JSON format for scripting
    Json,
}
