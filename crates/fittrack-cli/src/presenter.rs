//! CLI result presenter.

use fittrack_core::summary::WorkoutSummary;
use fittrack_core::workout::WorkoutError;
use fittrack_orchestration::interfaces::{BatchStats, ResultPresenter};

use crate::output::{format_line, format_stats, format_stats_json, OutputFormat};
use crate::ui::{print_error, print_status};

/// CLI result presenter: summaries to stdout, errors and totals to stderr.
///
/// Quiet mode keeps only the summary lines.
pub struct CLIResultPresenter {
    format: OutputFormat,
    quiet: bool,
}

impl CLIResultPresenter {
    #[must_use]
    pub fn new(format: OutputFormat, quiet: bool) -> Self {
        Self { format, quiet }
    }

    /// The stdout line for a summary.
    #[must_use]
    pub fn summary_message(&self, summary: &WorkoutSummary) -> String {
        format_line(summary, self.format)
    }

    /// The stderr message for a rejected reading, if one is shown.
    #[must_use]
    pub fn error_message(&self, code: &str, error: &WorkoutError) -> Option<String> {
        (!self.quiet).then(|| format!("{code}: {error}"))
    }

    /// The stderr totals line, if one is shown.
    #[must_use]
    pub fn stats_message(&self, stats: &BatchStats) -> Option<String> {
        if self.quiet {
            return None;
        }
        Some(match self.format {
            OutputFormat::Text => format_stats(stats),
            OutputFormat::Json => format_stats_json(stats),
        })
    }
}

impl ResultPresenter for CLIResultPresenter {
    fn present_summary(&self, summary: &WorkoutSummary) {
        println!("{}", self.summary_message(summary));
    }

    fn present_error(&self, code: &str, error: &WorkoutError) {
        if let Some(message) = self.error_message(code, error) {
            print_error(&message);
        }
    }

    fn present_stats(&self, stats: &BatchStats) {
        let Some(message) = self.stats_message(stats) else {
            return;
        };
        match self.format {
            OutputFormat::Text => print_status(stats.failed == 0, &message),
            OutputFormat::Json => eprintln!("{message}"),
        }
    }
}
