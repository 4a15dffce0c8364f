//! Application entry point and dispatch.

use anyhow::{Context, Result};

use fittrack_cli::output::{format_kind, write_report};
use fittrack_cli::presenter::CLIResultPresenter;
use fittrack_cli::ui::print_header;
use fittrack_core::constants::exit_codes;
use fittrack_core::reading::{sample_readings, SensorReading};
use fittrack_core::registry::DefaultFactory;
use fittrack_core::workout::WorkoutKind;
use fittrack_orchestration::orchestrator::{present_outcomes, process_readings};

use crate::config::AppConfig;
use crate::errors::handle_error;
use crate::input::load_readings;

/// Run the application and return the process exit code.
pub fn run(config: &AppConfig) -> Result<i32> {
    // Handle shell completion
    if let Some(shell) = config.completion {
        let mut cmd = <AppConfig as clap::CommandFactory>::command();
        fittrack_cli::completion::generate_completion(&mut cmd, shell, &mut std::io::stdout());
        return Ok(exit_codes::SUCCESS);
    }

    if config.list_types {
        list_types(config.quiet);
        return Ok(exit_codes::SUCCESS);
    }

    let readings = read_input(config)?;
    run_batch(config, &readings)
}

fn read_input(config: &AppConfig) -> Result<Vec<SensorReading>> {
    match config.input.as_deref() {
        Some(path) => load_readings(path),
        None => {
            tracing::info!("no input given, processing demo readings");
            Ok(sample_readings())
        }
    }
}

fn run_batch(config: &AppConfig, readings: &[SensorReading]) -> Result<i32> {
    let factory = DefaultFactory::new();
    let outcomes = process_readings(&factory, readings);

    let presenter = CLIResultPresenter::new(config.format, config.quiet);
    present_outcomes(&presenter, &outcomes);

    if let Some(ref path) = config.output {
        write_report(path, &outcomes, config.format)
            .with_context(|| format!("failed to write report to {path}"))?;
    }

    // First rejected reading decides the exit code
    Ok(outcomes
        .iter()
        .find_map(|o| o.error())
        .map_or(exit_codes::SUCCESS, handle_error))
}

fn list_types(quiet: bool) {
    if !quiet {
        print_header("Workout types");
    }
    for kind in WorkoutKind::ALL {
        println!("{}", format_kind(kind));
    }
}
