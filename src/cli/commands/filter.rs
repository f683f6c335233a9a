//! Filter command: conjunctive record filtering with optional export

use super::shared::extract_document;
use crate::app::models::ResultStatus;
use crate::app::services::batch_exporter::export_records;
use crate::app::services::result_queries::{filter, summarize};
use crate::cli::args::{FilterArgs, GlobalArgs, OutputFormat};
use crate::cli::report::{print_json, print_records_table};
use crate::config::Config;
use crate::Result;
use colored::Colorize;
use serde_json::json;
use tracing::info;

pub async fn run_filter(global: &GlobalArgs, args: &FilterArgs, config: &Config) -> Result<()> {
    let batch = extract_document(&args.input, config).await?;
    let status: Option<ResultStatus> = args.status.map(Into::into);

    let matches = filter(&batch, args.min_score, status, args.validity);
    info!(
        "{} of {} students match (min score {}, status {:?}, validity {:?})",
        matches.len(),
        batch.len(),
        args.min_score,
        status,
        args.validity
    );

    let exported = match &args.export {
        Some(stem) => Some(export_records(&matches, stem, args.export_format)?),
        None => None,
    };

    match global.output_format {
        OutputFormat::Json => print_json(&json!({
            "summary": summarize(matches.iter().copied()),
            "students": matches,
            "export": exported,
        }))?,
        OutputFormat::Human => {
            print_records_table("Filtered students", &matches);
            if let Some(summary) = &exported {
                println!(
                    "\n{} {} and {}",
                    "💾 Exported".bright_green(),
                    summary.students_path.display(),
                    summary.subjects_path.display()
                );
            }
        }
    }

    Ok(())
}
