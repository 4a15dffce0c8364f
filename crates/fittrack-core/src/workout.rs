//! Workout trait, the shared `Training` base, and the error taxonomy.
//!
//! `Workout` is the polymorphic seam consumed by the dispatcher and the batch
//! driver. Every variant composes a `Training` holding the fields common to
//! all workouts and supplies its own calorie formula. Distance and mean speed
//! have default implementations that variants may override.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_STEP_LENGTH_M, M_IN_KM};
use crate::summary::WorkoutSummary;

/// Error type for building and resolving workouts.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum WorkoutError {
    /// The workout code is not one of the recognised codes.
    #[error("unknown workout type: {0}")]
    UnknownWorkoutType(String),

    /// The parameter count does not match the workout's constructor.
    #[error("{kind} expects {expected} parameters, got {actual}")]
    ArityMismatch {
        kind: WorkoutKind,
        expected: usize,
        actual: usize,
    },

    /// A parameter is outside its physical domain.
    #[error("invalid {field}: expected {expected}, got {value}")]
    InvalidInput {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
}

/// The closed set of workout types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum WorkoutKind {
    #[serde(rename = "RUN")]
    Running,
    #[serde(rename = "WLK")]
    Walking,
    #[serde(rename = "SWM")]
    Swimming,
}

impl WorkoutKind {
    /// All kinds, in sensor-code order.
    pub const ALL: [WorkoutKind; 3] = [Self::Running, Self::Walking, Self::Swimming];

    /// Short sensor code.
    #[must_use]
    pub fn code(self) -> &'static str {
        match self {
            Self::Running => "RUN",
            Self::Walking => "WLK",
            Self::Swimming => "SWM",
        }
    }

    /// Name shown in the rendered summary.
    #[must_use]
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Running => "Running",
            Self::Walking => "SportsWalking",
            Self::Swimming => "Swimming",
        }
    }

    /// Number of positional parameters the constructor takes.
    #[must_use]
    pub fn arity(self) -> usize {
        match self {
            Self::Running => 3,
            Self::Walking => 4,
            Self::Swimming => 5,
        }
    }

    /// Look up a kind by its sensor code (case-sensitive).
    pub fn from_code(code: &str) -> Result<Self, WorkoutError> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.code() == code)
            .ok_or_else(|| WorkoutError::UnknownWorkoutType(code.to_string()))
    }
}

impl fmt::Display for WorkoutKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

impl FromStr for WorkoutKind {
    type Err = WorkoutError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_code(s)
    }
}

/// Fields shared by every workout.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Training {
    action_count: u32,
    duration_hours: f64,
    weight_kg: f64,
}

impl Training {
    /// Build the shared base, rejecting non-positive duration or weight.
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            action_count,
            duration_hours: require_positive("duration_hours", duration_hours)?,
            weight_kg: require_positive("weight_kg", weight_kg)?,
        })
    }

    /// Steps or strokes counted by the sensor.
    #[must_use]
    pub fn action_count(&self) -> u32 {
        self.action_count
    }

    /// Session length in hours.
    #[must_use]
    pub fn duration_hours(&self) -> f64 {
        self.duration_hours
    }

    /// Participant weight in kilograms.
    #[must_use]
    pub fn weight_kg(&self) -> f64 {
        self.weight_kg
    }
}

/// A workout whose metrics can be derived from its raw inputs.
pub trait Workout: Send + Sync + fmt::Debug {
    /// Which variant this is.
    fn kind(&self) -> WorkoutKind;

    /// The shared base fields.
    fn training(&self) -> &Training;

    /// Energy spent over the session, kcal.
    fn spent_calories(&self) -> f64;

    /// Distance covered by one step or stroke, metres.
    fn step_length_m(&self) -> f64 {
        DEFAULT_STEP_LENGTH_M
    }

    /// Distance covered, km.
    fn distance_km(&self) -> f64 {
        f64::from(self.training().action_count()) * self.step_length_m() / M_IN_KM
    }

    /// Mean speed over the session, km/h.
    fn mean_speed_kmh(&self) -> f64 {
        self.distance_km() / self.training().duration_hours()
    }

    /// Compute all derived metrics into an immutable summary.
    fn summarize(&self) -> WorkoutSummary {
        WorkoutSummary {
            type_name: self.kind().display_name().to_string(),
            duration_hours: self.training().duration_hours(),
            distance_km: self.distance_km(),
            mean_speed_kmh: self.mean_speed_kmh(),
            spent_calories: self.spent_calories(),
        }
    }
}

/// Accept only finite, strictly positive values.
pub(crate) fn require_positive(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidInput {
            field,
            value,
            expected: "a finite value > 0",
        })
    }
}

/// Accept only finite derived metrics.
pub(crate) fn require_finite(field: &'static str, value: f64) -> Result<f64, WorkoutError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(WorkoutError::InvalidInput {
            field,
            value,
            expected: "a finite value",
        })
    }
}

/// Accept only finite, non-negative whole numbers that fit in `u32`.
#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::float_cmp
)]
pub(crate) fn require_count(field: &'static str, value: f64) -> Result<u32, WorkoutError> {
    if value.is_finite() && value >= 0.0 && value.fract() == 0.0 && value <= f64::from(u32::MAX) {
        Ok(value as u32)
    } else {
        Err(WorkoutError::InvalidInput {
            field,
            value,
            expected: "a whole number >= 0",
        })
    }
}
