//! Workout factory: maps a sensor code and positional parameters to a workout.

use crate::running::Running;
use crate::swimming::Swimming;
use crate::walking::Walking;
use crate::workout::{require_count, require_finite, Workout, WorkoutError, WorkoutKind};

/// Factory trait for building workouts from raw sensor data.
pub trait WorkoutFactory: Send + Sync {
    /// Build the workout named by `code` from positional `params`.
    fn resolve(&self, code: &str, params: &[f64]) -> Result<Box<dyn Workout>, WorkoutError>;

    /// List all recognised codes.
    fn available(&self) -> Vec<&str>;
}

/// Default factory over the closed set of workout kinds.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultFactory;

impl DefaultFactory {
    /// Create a new default factory.
    #[must_use]
    pub fn new() -> Self {
        Self
    }

    fn create_workout(kind: WorkoutKind, params: &[f64]) -> Result<Box<dyn Workout>, WorkoutError> {
        if params.len() != kind.arity() {
            return Err(WorkoutError::ArityMismatch {
                kind,
                expected: kind.arity(),
                actual: params.len(),
            });
        }

        let action_count = require_count("action_count", params[0])?;
        let (duration_hours, weight_kg) = (params[1], params[2]);

        let workout: Box<dyn Workout> = match kind {
            WorkoutKind::Running => Box::new(Running::new(action_count, duration_hours, weight_kg)?),
            WorkoutKind::Walking => Box::new(Walking::new(
                action_count,
                duration_hours,
                weight_kg,
                params[3],
            )?),
            WorkoutKind::Swimming => Box::new(Swimming::new(
                action_count,
                duration_hours,
                weight_kg,
                params[3],
                require_count("pool_laps", params[4])?,
            )?),
        };
        Self::check_metrics(workout)
    }

    /// Reject workouts whose inputs are valid but whose derived metrics
    /// overflow `f64`.
    fn check_metrics(workout: Box<dyn Workout>) -> Result<Box<dyn Workout>, WorkoutError> {
        require_finite("distance_km", workout.distance_km())?;
        require_finite("mean_speed_kmh", workout.mean_speed_kmh())?;
        require_finite("spent_calories", workout.spent_calories())?;
        Ok(workout)
    }
}

impl WorkoutFactory for DefaultFactory {
    fn resolve(&self, code: &str, params: &[f64]) -> Result<Box<dyn Workout>, WorkoutError> {
        let kind = WorkoutKind::from_code(code)?;
        tracing::debug!(code, kind = %kind, params = params.len(), "resolving workout");
        Self::create_workout(kind, params)
    }

    fn available(&self) -> Vec<&str> {
        WorkoutKind::ALL.iter().map(|kind| kind.code()).collect()
    }
}
