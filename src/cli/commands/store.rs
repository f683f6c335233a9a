//! Store command: persist a document's records for later history lookups

use super::shared::{document_label, extract_document};
use crate::app::services::history_store::{JsonFileStore, ResultStore, Uploader};
use crate::app::services::result_queries::summary;
use crate::cli::args::{GlobalArgs, OutputFormat, StoreArgs};
use crate::cli::report::print_json;
use crate::config::Config;
use crate::{Error, Result};
use colored::Colorize;
use serde_json::json;

pub async fn run_store(global: &GlobalArgs, args: &StoreArgs, config: &Config) -> Result<()> {
    let batch = extract_document(&args.input, config).await?;
    if batch.is_empty() {
        return Err(Error::store(format!(
            "No student records found in {}; nothing to store",
            args.input.display()
        )));
    }

    let store_path = args
        .store_path
        .clone()
        .unwrap_or_else(|| config.processing.history_path.clone());
    let store = JsonFileStore::open(store_path)?;

    let document_name = args
        .document_name
        .clone()
        .unwrap_or_else(|| document_label(&args.input));
    let uploader = Uploader::new(args.uploader.clone());
    let result_summary = summary(&batch);

    let id = store.save(
        &document_name,
        &args.exam_tag,
        batch.records(),
        &uploader,
        &result_summary,
    )?;

    match global.output_format {
        OutputFormat::Json => print_json(&json!({
            "id": id,
            "document_name": document_name,
            "records": batch.len(),
            "store": store.root(),
        }))?,
        OutputFormat::Human => println!(
            "{} {} ({} students) as {} in {}",
            "💾 Stored".bright_green(),
            document_name,
            batch.len(),
            id.to_string().bold(),
            store.root().display()
        ),
    }

    Ok(())
}
