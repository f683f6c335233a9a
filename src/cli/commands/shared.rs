//! Shared components for CLI commands
//!
//! Logging setup, layered configuration loading and document extraction used
//! by every subcommand.

use crate::app::adapters::filesystem::read_document;
use crate::app::models::ResultBatch;
use crate::app::services::result_extractor::ResultExtractor;
use crate::cli::args::GlobalArgs;
use crate::config::Config;
use crate::{Error, Result};
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use tokio::task;
use tracing::{debug, info};

/// Set up structured logging on stderr at the configured level
///
/// `RUST_LOG` takes precedence over `config.logging.level`, which already
/// carries any `-v`/`-q` override.
pub fn setup_logging(args: &GlobalArgs, config: &Config) -> Result<()> {
    use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

    let log_level = config.logging.level.as_str();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("result_analyzer={}", log_level)));

    if args.quiet {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_writer(std::io::stderr)
                    .compact(),
            )
            .try_init()
            .map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))?;
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(
                fmt::layer()
                    .with_target(false)
                    .with_level(true)
                    .with_timer(fmt::time::uptime())
                    .with_writer(std::io::stderr),
            )
            .try_init()
            .map_err(|e| Error::configuration(format!("Failed to initialise logging: {}", e)))?;
    }

    debug!("Logging initialized at level: {}", log_level);
    Ok(())
}

/// Load configuration using layered approach (file -> env -> args)
pub fn load_configuration(args: &GlobalArgs) -> Result<Config> {
    let default_config_path = if args.config_file.is_none() {
        Config::default_config_path().ok()
    } else {
        None
    };

    let config_file = match &args.config_file {
        Some(path) => Some(path.as_path()),
        None => default_config_path
            .as_ref()
            .filter(|path| path.exists())
            .map(|path| path.as_path()),
    };

    if let Some(config_path) = config_file {
        info!("Using config file: {}", config_path.display());
    } else {
        debug!("No config file found, using defaults and environment variables");
    }

    let mut config = Config::load_layered(config_file)?;
    apply_cli_overrides(&mut config, args);
    config.validate()?;

    Ok(config)
}

/// Apply global CLI flag overrides to configuration
pub fn apply_cli_overrides(config: &mut Config, args: &GlobalArgs) {
    if args.lenient {
        config.extraction.strict_subject_check = false;
    }
    if let Some(level) = args.log_level_override() {
        config.logging.level = level.to_string();
    }
}

/// Read one document and extract its records off the async runtime
pub async fn extract_document(path: &Path, config: &Config) -> Result<ResultBatch> {
    let extractor = ResultExtractor::new(config.policy());
    let path = path.to_path_buf();

    task::spawn_blocking(move || {
        let text = read_document(&path)?;
        debug!("Read {} bytes from {}", text.len(), path.display());
        Ok::<_, Error>(extractor.extract(&text))
    })
    .await
    .map_err(|e| Error::processing_interrupted(format!("Extraction task failed: {}", e)))?
}

/// File name used to label a document in reports
pub fn document_label(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Create a progress bar with appropriate styling
pub fn create_progress_bar(total: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(total);
    if let Ok(style) = ProgressStyle::default_bar().template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {pos}/{len} ({percent}%) {msg}",
    ) {
        pb.set_style(style.progress_chars("#>-"));
    }
    pb.set_message(message.to_string());
    pb
}

/// Check if an error is critical enough to stop processing
pub fn is_critical_error(error: &Error) -> bool {
    matches!(
        error,
        Error::Configuration { .. } | Error::ProcessingInterrupted { .. }
    )
}
