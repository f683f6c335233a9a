//! Export command: student and subject tables for a whole document

use super::shared::extract_document;
use crate::app::services::batch_exporter::export_records;
use crate::cli::args::{ExportArgs, GlobalArgs, OutputFormat};
use crate::cli::report::print_json;
use crate::config::Config;
use crate::Result;
use colored::Colorize;
use std::path::{Path, PathBuf};

/// `<output dir>/<document stem>` unless an explicit stem was given
pub fn output_stem(args: &ExportArgs, config: &Config) -> PathBuf {
    args.output.clone().unwrap_or_else(|| {
        let stem = Path::new(&args.input)
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "results".to_string());
        config.processing.output_path.join(stem)
    })
}

pub async fn run_export(global: &GlobalArgs, args: &ExportArgs, config: &Config) -> Result<()> {
    let batch = extract_document(&args.input, config).await?;
    let records: Vec<_> = batch.records().iter().collect();
    let stem = output_stem(args, config);

    let summary = export_records(&records, &stem, args.export_format)?;

    match global.output_format {
        OutputFormat::Json => print_json(&summary)?,
        OutputFormat::Human => {
            println!(
                "{} {} students → {}",
                "💾".bold(),
                summary.student_rows,
                summary.students_path.display()
            );
            println!(
                "{} {} subjects → {}",
                "💾".bold(),
                summary.subject_rows,
                summary.subjects_path.display()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::services::batch_exporter::ExportFormat;

    #[test]
    fn test_output_stem_defaults_to_output_dir() {
        let config = Config::default();
        let args = ExportArgs {
            input: PathBuf::from("/data/TE_may_2024.txt"),
            output: None,
            export_format: ExportFormat::Parquet,
        };

        assert_eq!(
            output_stem(&args, &config),
            config.processing.output_path.join("TE_may_2024")
        );
    }

    #[test]
    fn test_output_stem_explicit() {
        let args = ExportArgs {
            input: PathBuf::from("a.txt"),
            output: Some(PathBuf::from("/tmp/out/may")),
            export_format: ExportFormat::Csv,
        };
        assert_eq!(output_stem(&args, &Config::default()), PathBuf::from("/tmp/out/may"));
    }
}
