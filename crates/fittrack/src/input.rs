//! Loading sensor readings from a file or stdin.

use std::io::Read;

use anyhow::{Context, Result};

use fittrack_core::reading::SensorReading;

/// Parse a JSON array of readings.
pub fn parse_readings(content: &str) -> Result<Vec<SensorReading>> {
    serde_json::from_str(content).context("malformed readings JSON")
}

/// Load readings from `path`; `-` reads stdin.
pub fn load_readings(path: &str) -> Result<Vec<SensorReading>> {
    let content = if path == "-" {
        let mut buf = String::new();
        std::io::stdin()
            .read_to_string(&mut buf)
            .context("failed to read readings from stdin")?;
        buf
    } else {
        std::fs::read_to_string(path)
            .with_context(|| format!("failed to read readings from {path}"))?
    };
    let readings = parse_readings(&content).with_context(|| format!("in {path}"))?;
    tracing::debug!(path, count = readings.len(), "readings loaded");
    Ok(readings)
}
