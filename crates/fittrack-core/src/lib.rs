//! # fittrack-core
//!
//! Workout model for the fitness tracker: derives distance, mean speed and
//! calories for running, sports walking and swimming from raw sensor data,
//! and renders the result as a one-line summary.

pub mod constants;
pub mod reading;
pub mod registry;
pub mod running;
pub mod summary;
pub mod swimming;
pub mod walking;
pub mod workout;

// Re-exports
pub use constants::{exit_codes, DEFAULT_STEP_LENGTH_M, MIN_IN_H, M_IN_KM, SWIM_STROKE_LENGTH_M};
pub use reading::{sample_readings, SensorReading};
pub use registry::{DefaultFactory, WorkoutFactory};
pub use running::Running;
pub use summary::{render, WorkoutSummary};
pub use swimming::Swimming;
pub use walking::Walking;
pub use workout::{Training, Workout, WorkoutError, WorkoutKind};

/// Resolve one reading and render its summary line.
///
/// This is a convenience function for simple use cases. Batches should go
/// through `fittrack-orchestration`, which keeps failures per reading.
///
/// # Example
/// ```
/// let line = fittrack_core::summarize_line("SWM", &[720.0, 1.0, 80.0, 25.0, 40.0]).unwrap();
/// assert!(line.ends_with("Calories: 336.000."));
/// ```
pub fn summarize_line(code: &str, params: &[f64]) -> Result<String, WorkoutError> {
    let workout = DefaultFactory::new().resolve(code, params)?;
    Ok(render(&workout.summarize()))
}
