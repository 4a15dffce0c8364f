//! Orchestration interfaces.

use serde::Serialize;

use fittrack_core::summary::WorkoutSummary;
use fittrack_core::workout::WorkoutError;

/// Trait for presenting results to the user.
pub trait ResultPresenter: Send + Sync {
    /// Present a computed summary.
    fn present_summary(&self, summary: &WorkoutSummary);

    /// Present a failed reading.
    fn present_error(&self, code: &str, error: &WorkoutError);

    /// Present batch totals.
    fn present_stats(&self, stats: &BatchStats);
}

/// Result of processing a single reading.
#[derive(Debug, Clone, PartialEq)]
pub struct ReadingOutcome {
    /// Workout code as received.
    pub code: String,
    /// The computed summary or a structured error.
    pub outcome: Result<WorkoutSummary, WorkoutError>,
}

impl ReadingOutcome {
    /// The summary, if the reading was valid.
    #[must_use]
    pub fn summary(&self) -> Option<&WorkoutSummary> {
        self.outcome.as_ref().ok()
    }

    /// The error, if the reading was rejected.
    #[must_use]
    pub fn error(&self) -> Option<&WorkoutError> {
        self.outcome.as_ref().err()
    }
}

/// Counts over a processed batch.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct BatchStats {
    /// Readings seen.
    pub processed: usize,
    /// Readings that produced a summary.
    pub succeeded: usize,
    /// Readings rejected.
    pub failed: usize,
}

/// Null presenter (does nothing).
pub struct NullPresenter;

impl ResultPresenter for NullPresenter {
    fn present_summary(&self, _summary: &WorkoutSummary) {}
    fn present_error(&self, _code: &str, _error: &WorkoutError) {}
    fn present_stats(&self, _stats: &BatchStats) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summary() -> WorkoutSummary {
        WorkoutSummary {
            type_name: "Running".into(),
            duration_hours: 1.0,
            distance_km: 9.75,
            mean_speed_kmh: 9.75,
            spent_calories: 797.805,
        }
    }

    #[test]
    fn null_presenter() {
        let presenter = NullPresenter;
        presenter.present_summary(&summary());
        presenter.present_error("XYZ", &WorkoutError::UnknownWorkoutType("XYZ".into()));
        presenter.present_stats(&BatchStats::default());
    }

    #[test]
    fn outcome_accessors() {
        let ok = ReadingOutcome {
            code: "RUN".into(),
            outcome: Ok(summary()),
        };
        assert!(ok.summary().is_some());
        assert!(ok.error().is_none());

        let err = ReadingOutcome {
            code: "XYZ".into(),
            outcome: Err(WorkoutError::UnknownWorkoutType("XYZ".into())),
        };
        assert!(err.summary().is_none());
        assert_eq!(
            err.error(),
            Some(&WorkoutError::UnknownWorkoutType("XYZ".into()))
        );
    }
}
