//! Application configuration from CLI flags and environment.

use clap::Parser;

use fittrack_cli::output::OutputFormat;

/// fittrack — distance, speed and calorie summaries from fitness tracker readings.
#[derive(Parser, Debug)]
#[command(name = "fittrack", version, about)]
pub struct AppConfig {
    /// JSON file with an array of readings (`-` for stdin). Without it, the
    /// built-in demo packages are processed.
    #[arg(short, long, env = "FITTRACK_INPUT")]
    pub input: Option<String>,

    /// Output format for summaries.
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Text, env = "FITTRACK_FORMAT")]
    pub format: OutputFormat,

    /// Also write the summaries to this file.
    #[arg(short, long)]
    pub output: Option<String>,

    /// Quiet mode (only the summary lines, no errors or totals).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose logging.
    #[arg(short, long)]
    pub verbose: bool,

    /// List the recognised workout types and exit.
    #[arg(long)]
    pub list_types: bool,

    /// Generate shell completion.
    #[arg(long, value_enum)]
    pub completion: Option<clap_complete::Shell>,
}

impl AppConfig {
    /// Parse CLI arguments.
    #[must_use]
    pub fn parse() -> Self {
        <Self as Parser>::parse()
    }

    /// Default log level for this run.
    #[must_use]
    pub fn log_level(&self) -> tracing::Level {
        if self.verbose {
            tracing::Level::DEBUG
        } else if self.quiet {
            tracing::Level::ERROR
        } else {
            tracing::Level::WARN
        }
    }
}
