//! Sports walking: calories depend on speed squared over height.

use crate::constants::walking::{
    CALORIES_SPEED_HEIGHT_MULTIPLIER, CALORIES_WEIGHT_MULTIPLIER, CM_IN_M, KMH_IN_MSEC,
};
use crate::constants::MIN_IN_H;
use crate::workout::{require_positive, Training, Workout, WorkoutError, WorkoutKind};

/// A sports walking session.
#[derive(Debug, Clone, PartialEq)]
pub struct Walking {
    training: Training,
    height_cm: f64,
}

impl Walking {
    /// Create a walking session; `height_cm` must be positive.
    pub fn new(
        action_count: u32,
        duration_hours: f64,
        weight_kg: f64,
        height_cm: f64,
    ) -> Result<Self, WorkoutError> {
        Ok(Self {
            training: Training::new(action_count, duration_hours, weight_kg)?,
            height_cm: require_positive("height_cm", height_cm)?,
        })
    }

    /// Participant height in centimetres.
    #[must_use]
    pub fn height_cm(&self) -> f64 {
        self.height_cm
    }
}

impl Workout for Walking {
    fn kind(&self) -> WorkoutKind {
        WorkoutKind::Walking
    }

    fn training(&self) -> &Training {
        &self.training
    }

    fn spent_calories(&self) -> f64 {
        let weight = self.training.weight_kg();
        let speed_ms = self.mean_speed_kmh() * KMH_IN_MSEC;
        let height_m = self.height_cm() / CM_IN_M;
        (CALORIES_WEIGHT_MULTIPLIER * weight
            + (speed_ms.powi(2) / height_m) * CALORIES_SPEED_HEIGHT_MULTIPLIER * weight)
            * (self.training.duration_hours() * MIN_IN_H)
    }
}
