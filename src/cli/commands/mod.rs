//! Command implementations for the result analyzer CLI
//!
//! Each subcommand lives in its own module; [`run`] loads configuration,
//! sets up logging from it and dispatches.

pub mod analyze;
pub mod batch;
pub mod export;
pub mod filter;
pub mod history;
pub mod search;
pub mod shared;
pub mod store;

use crate::Result;
use crate::cli::args::{Args, Commands};
use shared::{load_configuration, setup_logging};
use tracing::debug;

/// Main command runner
pub async fn run(args: Args) -> Result<()> {
    let config = load_configuration(&args.global)?;
    setup_logging(&args.global, &config)?;
    debug!("Loaded configuration: {:?}", config);

    let global = &args.global;
    match &args.command {
        Commands::Analyze(a) => analyze::run_analyze(global, a, &config).await,
        Commands::Search(a) => search::run_search(global, a, &config).await,
        Commands::Filter(a) => filter::run_filter(global, a, &config).await,
        Commands::Export(a) => export::run_export(global, a, &config).await,
        Commands::Batch(a) => batch::run_batch(global, a, &config).await,
        Commands::Store(a) => store::run_store(global, a, &config).await,
        Commands::History(a) => history::run_history(global, a, &config).await,
    }
}
