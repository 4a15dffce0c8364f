//! fittrack — workout summaries from fitness tracker readings.

use fittrack_core::constants::exit_codes;
use fittrack_lib::{app, config};

fn main() {
    // --verbose picks the default log level, so parse args first
    let config = config::AppConfig::parse();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::builder()
                .with_default_directive(config.log_level().into())
                .from_env_lossy(),
        )
        .init();

    let code = match app::run(&config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:?}");
            exit_codes::ERROR_GENERIC
        }
    };
    std::process::exit(code);
}
