//! Analyze command: full report for one document

use super::shared::{document_label, extract_document};
use crate::cli::args::{AnalyzeArgs, GlobalArgs, OutputFormat};
use crate::cli::report::{
    AnalysisReport, FailedStudent, print_extraction_warnings, print_failed_students,
    print_failure_breakdown, print_json, print_records_table, print_score_distribution,
    print_summary,
};
use crate::app::services::result_queries::{
    failed, failure_breakdown, score_distribution, summary, top_n,
};
use crate::config::Config;
use crate::Result;
use colored::Colorize;
use tracing::info;

pub async fn run_analyze(global: &GlobalArgs, args: &AnalyzeArgs, config: &Config) -> Result<()> {
    let batch = extract_document(&args.input, config).await?;
    let document = document_label(&args.input);
    let top = args.top.unwrap_or(config.processing.top_n);

    info!("Analysing {} students from {}", batch.len(), document);

    let failed_students: Vec<FailedStudent<'_>> = if args.show_failed {
        failed(&batch).into_iter().map(FailedStudent::new).collect()
    } else {
        Vec::new()
    };

    let report = AnalysisReport {
        document,
        summary: summary(&batch),
        score_bands: score_distribution(&batch),
        failure_breakdown: failure_breakdown(&batch),
        top_performers: top_n(&batch, top),
        failed_students,
        extraction: batch.stats(),
    };

    match global.output_format {
        OutputFormat::Json => print_json(&report)?,
        OutputFormat::Human => {
            if batch.is_empty() {
                println!(
                    "{} no student records found in {}",
                    "⚠️".yellow(),
                    report.document
                );
                print_extraction_warnings(batch.stats());
                return Ok(());
            }

            print_summary(&report.document, &report.summary);
            print_score_distribution(&report.score_bands);
            print_failure_breakdown(&report.failure_breakdown);
            print_records_table(&format!("🏆 Top {} by SGPA", top), &report.top_performers);
            if args.show_failed {
                print_failed_students(&report.failed_students);
            }
            print_extraction_warnings(batch.stats());
        }
    }

    if args.show_raw {
        println!();
        println!("{}", "Raw text".bold());
        println!("{}", "─".repeat(60));
        println!("{}", batch.raw_text());
    }

    Ok(())
}
