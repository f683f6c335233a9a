use clap::Parser;
use result_analyzer::cli::{args::Args, commands};
use std::process;

fn main() {
    let args = Args::parse();

    let runtime = tokio::runtime::Runtime::new().unwrap_or_else(|e| {
        eprintln!("Failed to create async runtime: {}", e);
        process::exit(1);
    });

    let result: anyhow::Result<()> = runtime.block_on(async {
        tokio::select! {
            result = commands::run(args) => {
                result.map_err(anyhow::Error::from)
            }
            signal = tokio::signal::ctrl_c() => {
                signal.map_err(|e| anyhow::anyhow!("Failed to listen for CTRL+C: {}", e))?;
                eprintln!("\nReceived CTRL+C, shutting down...");
                Err(result_analyzer::Error::processing_interrupted(
                    "Interrupted by user",
                )
                .into())
            }
        }
    });

    if let Err(error) = result {
        eprintln!("Error: {:#}", error);
        process::exit(1);
    }
}
