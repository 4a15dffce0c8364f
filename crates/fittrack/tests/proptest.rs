//! Property-based tests for reading input and batch processing.

use proptest::prelude::*;

use fittrack_core::reading::SensorReading;
use fittrack_core::registry::DefaultFactory;
use fittrack_lib::input::parse_readings;
use fittrack_orchestration::orchestrator::{batch_stats, process_readings};

fn valid_reading() -> impl Strategy<Value = SensorReading> {
    let count = 0u32..50_000;
    let hours = 0.1f64..5.0;
    let weight = 30.0f64..150.0;
    prop_oneof![
        (count.clone(), hours.clone(), weight.clone())
            .prop_map(|(c, h, w)| SensorReading::new("RUN", vec![f64::from(c), h, w])),
        (count.clone(), hours.clone(), weight.clone(), 120.0f64..210.0)
            .prop_map(|(c, h, w, ht)| SensorReading::new("WLK", vec![f64::from(c), h, w, ht])),
        (count, hours, weight, 10.0f64..60.0, 0u32..200).prop_map(|(c, h, w, len, laps)| {
            SensorReading::new("SWM", vec![f64::from(c), h, w, len, f64::from(laps)])
        }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    /// Readings survive a trip through the JSON input format.
    #[test]
    fn json_input_preserves_readings(readings in prop::collection::vec(valid_reading(), 0..20)) {
        let json = serde_json::to_string(&readings).unwrap();
        let parsed = parse_readings(&json).unwrap();
        prop_assert_eq!(parsed.len(), readings.len());
        for (back, original) in parsed.iter().zip(&readings) {
            prop_assert_eq!(&back.code, &original.code);
            prop_assert_eq!(back.params.len(), original.params.len());
            for (a, b) in back.params.iter().zip(&original.params) {
                prop_assert!((a - b).abs() <= b.abs() * 1e-12);
            }
        }
    }

    /// Every valid reading yields exactly one summary, in order.
    #[test]
    fn valid_batch_all_succeed(readings in prop::collection::vec(valid_reading(), 0..50)) {
        let outcomes = process_readings(&DefaultFactory::new(), &readings);
        prop_assert_eq!(outcomes.len(), readings.len());
        for (reading, outcome) in readings.iter().zip(&outcomes) {
            prop_assert_eq!(&outcome.code, &reading.code);
            prop_assert!(outcome.outcome.is_ok());
        }
        prop_assert_eq!(batch_stats(&outcomes).failed, 0);
    }

    /// Arbitrary parameters never panic; failures stay per reading.
    #[test]
    fn arbitrary_params_never_panic(
        code in prop::sample::select(vec!["RUN", "WLK", "SWM", "XYZ"]),
        params in prop::collection::vec(any::<f64>(), 0..7),
    ) {
        let readings = vec![
            SensorReading::new(code, params),
            SensorReading::new("RUN", vec![15_000.0, 1.0, 75.0]),
        ];
        let outcomes = process_readings(&DefaultFactory::new(), &readings);
        prop_assert!(outcomes[1].outcome.is_ok());
    }
}
