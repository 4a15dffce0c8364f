//! CLI output formatting.

use std::io::{self, Write};

use clap::ValueEnum;

use fittrack_core::summary::{render, WorkoutSummary};
use fittrack_core::workout::WorkoutKind;
use fittrack_orchestration::interfaces::{BatchStats, ReadingOutcome};

/// How summaries are written.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// The fixed one-line text message.
    #[default]
    Text,
    /// One JSON object per line.
    Json,
}

/// Format one summary for output.
#[must_use]
pub fn format_line(summary: &WorkoutSummary, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => render(summary),
        // A struct of strings and f64s always serializes; non-finite floats become null
        OutputFormat::Json => serde_json::to_string(summary).unwrap_or_default(),
    }
}

/// Format batch totals.
#[must_use]
pub fn format_stats(stats: &BatchStats) -> String {
    format!(
        "{} readings processed: {} ok, {} failed",
        stats.processed, stats.succeeded, stats.failed
    )
}

/// Format batch totals as a single JSON object.
#[must_use]
pub fn format_stats_json(stats: &BatchStats) -> String {
    serde_json::to_string(stats).unwrap_or_default()
}

/// Format one row of the workout type table.
#[must_use]
pub fn format_kind(kind: WorkoutKind) -> String {
    format!(
        "{:<5}{:<15}{} params",
        kind.code(),
        kind.display_name(),
        kind.arity()
    )
}

/// Write the successful lines of a batch to a file.
///
/// # Errors
///
/// Returns an I/O error if the file cannot be created or written.
pub fn write_report(path: &str, outcomes: &[ReadingOutcome], format: OutputFormat) -> io::Result<()> {
    let mut file = io::BufWriter::new(std::fs::File::create(path)?);
    let mut written = 0usize;
    for summary in outcomes.iter().filter_map(ReadingOutcome::summary) {
        writeln!(file, "{}", format_line(summary, format))?;
        written += 1;
    }
    file.flush()?;
    tracing::debug!(path, lines = written, "report written");
    Ok(())
}
