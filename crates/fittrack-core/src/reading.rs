//! Raw sensor readings.

use serde::{Deserialize, Serialize};

/// One package from the tracker's sensor block: a workout code plus
/// positional numeric parameters.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SensorReading {
    /// Workout code, e.g. `"RUN"`.
    pub code: String,
    /// Positional parameters for the workout constructor.
    pub params: Vec<f64>,
}

impl SensorReading {
    /// Create a new reading.
    #[must_use]
    pub fn new(code: impl Into<String>, params: Vec<f64>) -> Self {
        Self {
            code: code.into(),
            params,
        }
    }
}

/// The packages the tracker emits in demo mode: one swim, one run, one walk.
#[must_use]
pub fn sample_readings() -> Vec<SensorReading> {
    vec![
        SensorReading::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        SensorReading::new("RUN", vec![15_000.0, 1.0, 75.0]),
        SensorReading::new("WLK", vec![9_000.0, 1.0, 75.0, 180.0]),
    ]
}
