//! Computed workout summary and its fixed text rendering.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Derived metrics for one workout. Built once, never mutated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkoutSummary {
    /// Display name of the workout variant.
    pub type_name: String,
    /// Session length, hours.
    pub duration_hours: f64,
    /// Distance covered, km.
    pub distance_km: f64,
    /// Mean speed, km/h.
    pub mean_speed_kmh: f64,
    /// Energy spent, kcal.
    pub spent_calories: f64,
}

/// Render a summary as a single line with every number at three decimals.
#[must_use]
pub fn render(summary: &WorkoutSummary) -> String {
    format!(
        "Training type: {}; Duration: {:.3} h; Distance: {:.3} km; Avg speed: {:.3} km/h; Calories: {:.3}.",
        summary.type_name,
        summary.duration_hours,
        summary.distance_km,
        summary.mean_speed_kmh,
        summary.spent_calories,
    )
}

impl fmt::Display for WorkoutSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&render(self))
    }
}
