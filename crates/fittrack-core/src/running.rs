//! Running: step-counted, calories from mean speed.

use crate::constants::running::{CALORIES_MEAN_SPEED_MULTIPLIER, CALORIES_MEAN_SPEED_SHIFT};
use crate::constants::{M_IN_KM, MIN_IN_H};
use crate::workout::{Training, Workout, WorkoutError, WorkoutKind};

/// A running session.
#[derive(Debug, Clone, PartialEq)]
pub struct Running {
    training: Training,
}

impl Running {
    /// Create a running session.
    pub fn new(action_count: u32, duration_hours: f64, weight_kg: f64) -> Result<Self, WorkoutError> {
        Ok(Self {
            training: Training::new(action_count, duration_hours, weight_kg)?,
        })
    }
}

impl Workout for Running {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Running
    }

    fn training(&self) -> &Training {
        &self.training
    }

    fn spent_calories(&self) -> f64 {
        (CALORIES_MEAN_SPEED_MULTIPLIER * self.mean_speed_kmh() + CALORIES_MEAN_SPEED_SHIFT)
            * self.training.weight_kg()
            / M_IN_KM
            * self.training.duration_hours()
            * MIN_IN_H
    }
}
