//! History command: a student's records across stored documents

use crate::app::services::history_store::{HistoryQuery, JsonFileStore, ResultStore};
use crate::cli::args::{GlobalArgs, HistoryArgs, OutputFormat};
use crate::cli::report::{print_history, print_json};
use crate::config::Config;
use crate::{Error, Result};
use tracing::info;

pub fn history_query(args: &HistoryArgs) -> Result<HistoryQuery> {
    match (&args.prn, &args.name) {
        (Some(prn), None) => Ok(HistoryQuery::Registration(prn.clone())),
        (None, Some(name)) => Ok(HistoryQuery::Name(name.clone())),
        _ => Err(Error::configuration(
            "History needs exactly one of --prn or --name",
        )),
    }
}

pub async fn run_history(global: &GlobalArgs, args: &HistoryArgs, config: &Config) -> Result<()> {
    let query = history_query(args)?;
    let store_path = args
        .store_path
        .clone()
        .unwrap_or_else(|| config.processing.history_path.clone());
    let store = JsonFileStore::open(store_path)?;

    let histories = store.history(&query)?;
    info!("{} students match {:?}", histories.len(), query);

    match global.output_format {
        OutputFormat::Json => print_json(&histories)?,
        OutputFormat::Human => print_history(&histories),
    }

    Ok(())
}
