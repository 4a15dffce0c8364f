//! Batch processing: each reading resolved and summarized independently.

use rayon::iter::{IntoParallelRefIterator, ParallelIterator};

use fittrack_core::reading::SensorReading;
use fittrack_core::registry::WorkoutFactory;

use crate::interfaces::{BatchStats, ReadingOutcome, ResultPresenter};

/// Resolve one reading and compute its summary.
pub fn process_reading(factory: &dyn WorkoutFactory, reading: &SensorReading) -> ReadingOutcome {
    let outcome = factory
        .resolve(&reading.code, &reading.params)
        .map(|workout| workout.summarize());

    match &outcome {
        Ok(summary) => tracing::debug!(
            code = %reading.code,
            calories = summary.spent_calories,
            "reading processed"
        ),
        Err(e) => tracing::warn!(code = %reading.code, error = %e, "reading rejected"),
    }

    ReadingOutcome {
        code: reading.code.clone(),
        outcome,
    }
}

/// Process a batch of readings. Outcomes come back in input order; a
/// rejected reading never affects the others.
pub fn process_readings(
    factory: &dyn WorkoutFactory,
    readings: &[SensorReading],
) -> Vec<ReadingOutcome> {
    let outcomes: Vec<ReadingOutcome> = if readings.len() <= 1 {
        readings
            .iter()
            .map(|reading| process_reading(factory, reading))
            .collect()
    } else {
        // Indexed parallel collect keeps input order
        readings
            .par_iter()
            .map(|reading| process_reading(factory, reading))
            .collect()
    };

    let stats = batch_stats(&outcomes);
    tracing::info!(
        processed = stats.processed,
        failed = stats.failed,
        "batch complete"
    );
    outcomes
}

/// Count successes and failures in a processed batch.
#[must_use]
pub fn batch_stats(outcomes: &[ReadingOutcome]) -> BatchStats {
    let succeeded = outcomes.iter().filter(|o| o.outcome.is_ok()).count();
    BatchStats {
        processed: outcomes.len(),
        succeeded,
        failed: outcomes.len() - succeeded,
    }
}

/// Hand every outcome to the presenter in order, then the totals.
pub fn present_outcomes(presenter: &dyn ResultPresenter, outcomes: &[ReadingOutcome]) {
    for outcome in outcomes {
        match &outcome.outcome {
            Ok(summary) => presenter.present_summary(summary),
            Err(e) => presenter.present_error(&outcome.code, e),
        }
    }
    presenter.present_stats(&batch_stats(outcomes));
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use fittrack_core::reading::sample_readings;
    use fittrack_core::registry::DefaultFactory;
    use fittrack_core::summary::{render, WorkoutSummary};
    use fittrack_core::workout::{WorkoutError, WorkoutKind};

    #[derive(Default)]
    struct RecordingPresenter {
        lines: Mutex<Vec<String>>,
    }

    impl ResultPresenter for RecordingPresenter {
        fn present_summary(&self, summary: &WorkoutSummary) {
            self.lines.lock().unwrap().push(render(summary));
        }
        fn present_error(&self, code: &str, error: &WorkoutError) {
            self.lines.lock().unwrap().push(format!("{code}: {error}"));
        }
        fn present_stats(&self, stats: &BatchStats) {
            self.lines
                .lock()
                .unwrap()
                .push(format!("{}/{}", stats.succeeded, stats.processed));
        }
    }

    #[test]
    fn process_single_reading() {
        let factory = DefaultFactory::new();
        let reading = SensorReading::new("RUN", vec![15_000.0, 1.0, 75.0]);
        let outcome = process_reading(&factory, &reading);
        assert_eq!(outcome.code, "RUN");
        let summary = outcome.summary().unwrap();
        assert_eq!(summary.type_name, "Running");
        assert!((summary.spent_calories - 797.805).abs() < 1e-9);
    }

    #[test]
    fn process_samples_in_order() {
        let factory = DefaultFactory::new();
        let outcomes = process_readings(&factory, &sample_readings());
        let names: Vec<_> = outcomes
            .iter()
            .map(|o| o.summary().unwrap().type_name.as_str())
            .collect();
        assert_eq!(names, ["Swimming", "Running", "SportsWalking"]);
    }

    #[test]
    fn failure_does_not_stop_batch() {
        let factory = DefaultFactory::new();
        let readings = vec![
            SensorReading::new("RUN", vec![15_000.0, 1.0, 75.0]),
            SensorReading::new("XYZ", vec![1.0, 1.0, 1.0]),
            SensorReading::new("WLK", vec![9_000.0, 1.0, 75.0]),
            SensorReading::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ];
        let outcomes = process_readings(&factory, &readings);
        assert_eq!(outcomes.len(), 4);
        assert!(outcomes[0].outcome.is_ok());
        assert_eq!(
            outcomes[1].error(),
            Some(&WorkoutError::UnknownWorkoutType("XYZ".into()))
        );
        assert_eq!(
            outcomes[2].error(),
            Some(&WorkoutError::ArityMismatch {
                kind: WorkoutKind::Walking,
                expected: 4,
                actual: 3,
            })
        );
        assert!(outcomes[3].outcome.is_ok());
    }

    #[test]
    fn large_batch_keeps_order() {
        let factory = DefaultFactory::new();
        let readings: Vec<_> = (1..=200)
            .map(|i| SensorReading::new("RUN", vec![f64::from(i) * 100.0, 1.0, 75.0]))
            .collect();
        let outcomes = process_readings(&factory, &readings);
        for (i, outcome) in outcomes.iter().enumerate() {
            let expected = (i as f64 + 1.0) * 100.0 * 0.65 / 1000.0;
            let distance = outcome.summary().unwrap().distance_km;
            assert!((distance - expected).abs() < 1e-9, "reading {i} out of order");
        }
    }

    #[test]
    fn empty_batch() {
        let factory = DefaultFactory::new();
        let outcomes = process_readings(&factory, &[]);
        assert!(outcomes.is_empty());
        assert_eq!(batch_stats(&outcomes), BatchStats::default());
    }

    #[test]
    fn stats_count_failures() {
        let factory = DefaultFactory::new();
        let readings = vec![
            SensorReading::new("RUN", vec![15_000.0, 1.0, 75.0]),
            SensorReading::new("RUN", vec![15_000.0, 0.0, 75.0]),
        ];
        let stats = batch_stats(&process_readings(&factory, &readings));
        assert_eq!(
            stats,
            BatchStats {
                processed: 2,
                succeeded: 1,
                failed: 1,
            }
        );
    }

    #[test]
    fn present_outcomes_in_order() {
        let factory = DefaultFactory::new();
        let readings = vec![
            SensorReading::new("XYZ", vec![]),
            SensorReading::new("SWM", vec![720.0, 1.0, 80.0, 25.0, 40.0]),
        ];
        let outcomes = process_readings(&factory, &readings);
        let presenter = RecordingPresenter::default();
        present_outcomes(&presenter, &outcomes);

        let lines = presenter.lines.into_inner().unwrap();
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "XYZ: unknown workout type: XYZ");
        assert!(lines[1].starts_with("Training type: Swimming;"));
        assert_eq!(lines[2], "1/2");
    }
}
