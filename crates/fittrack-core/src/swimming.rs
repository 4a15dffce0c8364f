//! Swimming: stroke-counted distance, speed from pool laps.

use crate::constants::swimming::{CALORIES_MEAN_SPEED_SHIFT, CALORIES_WEIGHT_MULTIPLIER};
use crate::constants::{M_IN_KM, SWIM_STROKE_LENGTH_M};
use crate::workout::{require_positive, Training, Workout, WorkoutError, WorkoutKind};

/// A pool swimming session.
#[derive(Debug, Clone, PartialEq)]
pub struct Swimming {
    training: Training,
    pool_length_m: f64,
    pool_laps: u32,
}

impl Swimming {
    /// Create a swimming session; `pool_length_m` must be positive.
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        pool_length_m: f64,
        pool_laps: u32,
    ) -> Result<Self, WorkoutError> {
        Ok(Self {
            training: Training::new(action_count, duration_hours, weight_kg)?,
            pool_length_m: require_positive("pool_length_m", pool_length_m)?,
            pool_laps,
        })
    }

    /// Pool length in metres.
    #[must_use]
    pub fn pool_length_m(&self) -> f64 {
        self.pool_length_m
    }

    /// Laps swum.
    #[must_use]
    pub fn pool_laps(&self) -> u32 {
        self.pool_laps
    }
}

impl Workout for Swimming {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Swimming
    }

    fn training(&self) -> &Training {
        &self.training
    }

    fn step_length_m(&self) -> f64 {
        SWIM_STROKE_LENGTH_M
    }

    /// Speed comes from laps, not strokes.
    fn mean_speed_kmh(&self) -> f64 {
        self.pool_length_m() * f64::from(self.pool_laps()) / M_IN_KM / self.training.duration_hours()
    }

    fn spent_calories(&self) -> f64 {
        (self.mean_speed_kmh() + CALORIES_MEAN_SPEED_SHIFT)
            * CALORIES_WEIGHT_MULTIPLIER
            * self.training.weight_kg()
            * self.training.duration_hours()
    }
}
