//! Batch command: concurrent analysis of every document in a directory

use super::shared::{create_progress_bar, document_label, extract_document, is_critical_error};
use crate::app::adapters::filesystem::{DiscoveryOptions, discover_documents};
use crate::app::models::ResultBatch;
use crate::app::services::result_queries::{ResultSummary, summarize, summary};
use crate::cli::args::{BatchArgs, GlobalArgs, OutputFormat};
use crate::cli::report::print_json;
use crate::config::Config;
use crate::{Error, Result};
use colored::Colorize;
use futures::stream::{self, StreamExt};
use indicatif::HumanDuration;
use serde::Serialize;
use std::path::PathBuf;
use std::time::Instant;
use tracing::{info, warn};

/// Outcome for one document
#[derive(Debug)]
pub struct DocumentOutcome {
    pub path: PathBuf,
    pub result: Result<ResultBatch>,
}

#[derive(Debug, Serialize)]
struct DocumentReport {
    document: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<ResultSummary>,
    records_skipped: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<String>,
}

#[derive(Debug, Serialize)]
struct BatchReport {
    documents: Vec<DocumentReport>,
    totals: ResultSummary,
    failed_documents: usize,
}

/// Extract every path with at most `workers` documents in flight
///
/// Outcomes come back in path order regardless of completion order.
pub async fn extract_all(
    paths: Vec<PathBuf>,
    config: &Config,
    workers: usize,
    show_progress: bool,
) -> Vec<DocumentOutcome> {
    let progress = create_progress_bar(paths.len() as u64, "Extracting documents");
    if !show_progress {
        progress.set_draw_target(indicatif::ProgressDrawTarget::hidden());
    }

    let mut outcomes: Vec<DocumentOutcome> = stream::iter(paths)
        .map(|path| {
            let progress = progress.clone();
            async move {
                let result = extract_document(&path, config).await;
                progress.inc(1);
                progress.set_message(document_label(&path));
                DocumentOutcome { path, result }
            }
        })
        .buffer_unordered(workers.max(1))
        .collect()
        .await;

    progress.finish_and_clear();
    outcomes.sort_by(|a, b| a.path.cmp(&b.path));
    outcomes
}

pub async fn run_batch(global: &GlobalArgs, args: &BatchArgs, config: &Config) -> Result<()> {
    let start_time = Instant::now();
    let workers = args.workers.unwrap_or(config.processing.workers);
    if workers == 0 {
        return Err(Error::configuration("Worker count must be at least 1"));
    }

    let options = DiscoveryOptions {
        pattern: args.pattern.clone(),
        recursive: args.recursive,
    };
    let paths = discover_documents(&args.input_dir, &options)?;

    if paths.is_empty() {
        warn!("No documents found in {}", args.input_dir.display());
        if global.output_format == OutputFormat::Human {
            println!(
                "{} no .txt documents found in {}",
                "⚠️".yellow(),
                args.input_dir.display()
            );
        }
        return Ok(());
    }

    info!("Extracting {} documents with {} workers", paths.len(), workers);
    let outcomes = extract_all(paths, config, workers, global.show_progress()).await;

    if let Some(critical) = outcomes
        .iter()
        .filter_map(|o| o.result.as_ref().err())
        .find(|e| is_critical_error(e))
    {
        return Err(Error::processing_interrupted(format!(
            "Batch stopped: {}",
            critical
        )));
    }

    let totals = summarize(
        outcomes
            .iter()
            .filter_map(|o| o.result.as_ref().ok())
            .flat_map(|batch| batch.records()),
    );
    let failed_documents = outcomes.iter().filter(|o| o.result.is_err()).count();

    match global.output_format {
        OutputFormat::Json => {
            let documents = outcomes
                .iter()
                .map(|outcome| match &outcome.result {
                    Ok(batch) => DocumentReport {
                        document: document_label(&outcome.path),
                        summary: Some(summary(batch)),
                        records_skipped: batch.stats().records_skipped,
                        error: None,
                    },
                    Err(e) => DocumentReport {
                        document: document_label(&outcome.path),
                        summary: None,
                        records_skipped: 0,
                        error: Some(e.to_string()),
                    },
                })
                .collect();
            print_json(&BatchReport {
                documents,
                totals,
                failed_documents,
            })?;
        }
        OutputFormat::Human => {
            print_batch_table(&outcomes);
            println!();
            println!(
                "{} {} documents, {} students, {} passed ({:.2}%), average SGPA {:.2}",
                "Σ".bold(),
                outcomes.len(),
                totals.total,
                totals.passed,
                totals.pass_percentage,
                totals.average_score
            );
            if failed_documents > 0 {
                println!(
                    "{} {} documents could not be read",
                    "⚠️".yellow(),
                    failed_documents
                );
            }
            println!(
                "{} in {}",
                "✅ Done".bright_green(),
                HumanDuration(start_time.elapsed())
            );
        }
    }

    Ok(())
}

fn print_batch_table(outcomes: &[DocumentOutcome]) {
    println!();
    println!(
        "  {:<36} {:>8} {:>7} {:>7} {:>8} {:>8}",
        "Document", "Students", "Passed", "Failed", "Pass %", "Avg"
    );
    for outcome in outcomes {
        let label = document_label(&outcome.path);
        match &outcome.result {
            Ok(batch) => {
                let s = summary(batch);
                println!(
                    "  {:<36} {:>8} {:>7} {:>7} {:>7.2}% {:>8.2}",
                    label,
                    s.total,
                    s.passed.to_string().bright_green(),
                    s.failed.to_string().bright_red(),
                    s.pass_percentage,
                    s.average_score
                );
            }
            Err(e) => println!("  {:<36} {}", label, e.to_string().red()),
        }
    }
}
