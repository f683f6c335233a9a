//! Terminal and JSON rendering for command output
//!
//! Human output is colored tables on stdout; JSON output serializes the same
//! report structures with `serde_json`.

use crate::app::models::{ExtractionStats, StudentRecord};
use crate::app::services::history_store::StudentHistory;
use crate::app::services::result_queries::{
    FailureBreakdown, ResultSummary, ScoreBand, failure_reasons,
};
use crate::Result;
use colored::Colorize;
use serde::Serialize;

/// Everything the analyze command reports for one document
#[derive(Debug, Serialize)]
pub struct AnalysisReport<'a> {
    pub document: String,
    pub summary: ResultSummary,
    pub score_bands: Vec<ScoreBand>,
    pub failure_breakdown: FailureBreakdown,
    pub top_performers: Vec<&'a StudentRecord>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub failed_students: Vec<FailedStudent<'a>>,
    pub extraction: &'a ExtractionStats,
}

/// A failed record with its failure reasons
#[derive(Debug, Serialize)]
pub struct FailedStudent<'a> {
    #[serde(flatten)]
    pub record: &'a StudentRecord,
    pub reasons: Vec<&'static str>,
}

impl<'a> FailedStudent<'a> {
    pub fn new(record: &'a StudentRecord) -> Self {
        Self {
            record,
            reasons: failure_reasons(record),
        }
    }
}

/// Pretty-printed JSON on stdout
pub fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    let json = serde_json::to_string_pretty(value)?;
    println!("{}", json);
    Ok(())
}

pub fn print_summary(document: &str, summary: &ResultSummary) {
    println!();
    println!("{} {}", "📊 Result summary:".bright_blue().bold(), document);
    println!("{}", "═".repeat(60).bright_blue());
    println!("  Students:            {}", summary.total.to_string().bold());
    println!(
        "  Passed:              {}",
        summary.passed.to_string().bright_green()
    );
    println!("  Failed:              {}", summary.failed.to_string().bright_red());
    println!(
        "  Pass percentage:     {}",
        format!("{:.2}%", summary.pass_percentage).bold()
    );
    println!(
        "  Valid SGPA:          {} ({} without)",
        summary.with_valid_score, summary.without_valid_score
    );
    println!("  Average SGPA:        {:.2}", summary.average_score);
}

pub fn print_score_distribution(bands: &[ScoreBand]) {
    println!();
    println!("{}", "SGPA distribution (valid scores only)".bold());
    for band in bands {
        let bar = "█".repeat((band.percentage / 5.0).round() as usize);
        println!(
            "  {:<22} {:>4}  {:>6.2}%  {}",
            band.label,
            band.count,
            band.percentage,
            bar.cyan()
        );
    }
}

pub fn print_failure_breakdown(breakdown: &FailureBreakdown) {
    println!();
    if breakdown.total_failed == 0 {
        println!("{}", "🎉 All students passed!".bright_green().bold());
        return;
    }

    println!("{}", "Failure reasons".bold());
    println!("  No valid SGPA:       {}", breakdown.no_valid_score);
    println!("  Failed subjects:     {}", breakdown.failed_subjects);
    println!("  Both:                {}", breakdown.both);
    if breakdown.no_subjects > 0 {
        println!("  No subject rows:     {}", breakdown.no_subjects);
    }
}

fn status_label(record: &StudentRecord) -> colored::ColoredString {
    if record.result_status().is_pass() {
        record.result_status().as_str().bright_green()
    } else {
        record.result_status().as_str().bright_red()
    }
}

/// Ranked table: position, seat, name, score, subjects passed, status
pub fn print_records_table(title: &str, records: &[&StudentRecord]) {
    println!();
    println!("{} ({})", title.bold(), records.len());
    if records.is_empty() {
        println!("  {}", "No students".dimmed());
        return;
    }

    println!(
        "  {:>3}  {:<12} {:<32} {:>6}  {:>8}  {}",
        "#", "Seat", "Name", "SGPA", "Subjects", "Result"
    );
    for (index, record) in records.iter().enumerate() {
        println!(
            "  {:>3}  {:<12} {:<32} {:>6}  {:>8}  {}",
            index + 1,
            record.seat_number(),
            truncate(record.name(), 32),
            record.display_score(),
            format!("{}/{}", record.passed_subject_count(), record.total_subject_count()),
            status_label(record)
        );
    }
}

pub fn print_failed_students(failed: &[FailedStudent<'_>]) {
    println!();
    println!("{} ({})", "Failed students".bold(), failed.len());
    for entry in failed {
        println!(
            "  {:<12} {:<32} {:>6}  {}",
            entry.record.seat_number(),
            truncate(entry.record.name(), 32),
            entry.record.aggregate_score_raw(),
            entry.reasons.join(", ").yellow()
        );
    }
}

/// Full detail for one student, failing subjects highlighted
pub fn print_student_detail(record: &StudentRecord) {
    println!();
    println!("{} {}", "🎓".bold(), record.name().bold());
    println!("  Seat number:         {}", record.seat_number());
    println!("  Registration (PRN):  {}", record.registration_number());
    println!("  Mother / guardian:   {}", record.guardian_name());
    println!("  SGPA:                {}", record.display_score());
    println!("  Credits earned:      {}", record.earned_credits());
    println!("  Result:              {}", status_label(record));

    let reasons = failure_reasons(record);
    if !reasons.is_empty() {
        println!("  Failure reasons:     {}", reasons.join(", ").yellow());
    }

    if record.subjects().is_empty() {
        println!("  {}", "No subject rows found".dimmed());
        return;
    }

    println!();
    println!("  {:<8} {:<40} {:>8}  {}", "Code", "Course", "Marks", "Grade");
    for subject in record.subjects() {
        let grade = if subject.is_failing() {
            subject.grade.bright_red().bold()
        } else {
            subject.grade.normal()
        };
        println!(
            "  {:<8} {:<40} {:>8}  {}",
            subject.course_code,
            truncate(&subject.course_name, 40),
            subject.total_marks.as_deref().unwrap_or("-"),
            grade
        );
    }
}

pub fn print_history(histories: &[StudentHistory]) {
    if histories.is_empty() {
        println!("{}", "No stored records match".yellow());
        return;
    }

    for history in histories {
        println!();
        println!(
            "{} {} ({})",
            "📚".bold(),
            history.name.bold(),
            history.student_key
        );
        for entry in &history.entries {
            let exam = if entry.exam_tag.is_empty() {
                "-"
            } else {
                entry.exam_tag.as_str()
            };
            println!(
                "  {}  {:<12} {:<28} seat {:<12} SGPA {:>6}  {}",
                entry.uploaded_at.format("%Y-%m-%d %H:%M"),
                exam,
                truncate(&entry.document_name, 28),
                entry.record.seat_number(),
                entry.record.display_score(),
                status_label(&entry.record)
            );
        }
    }
}

/// Dropped-block warnings, if any
pub fn print_extraction_warnings(stats: &ExtractionStats) {
    if stats.warnings.is_empty() {
        return;
    }

    println!();
    println!(
        "{} {} of {} student blocks could not be read",
        "⚠️".yellow(),
        stats.records_skipped,
        stats.segments_found
    );
    for warning in &stats.warnings {
        println!("  {}", warning.yellow());
    }
}

fn truncate(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        text.to_string()
    } else {
        let mut shortened: String = text.chars().take(width.saturating_sub(1)).collect();
        shortened.push('…');
        shortened
    }
}
