#![no_main]

use libfuzzer_sys::fuzz_target;

use fittrack_core::registry::{DefaultFactory, WorkoutFactory};
use fittrack_core::summary::render;

fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }
    // First byte picks the code, the rest becomes up to 6 parameters
    let code = match data[0] % 4 {
        0 => "RUN",
        1 => "WLK",
        2 => "SWM",
        _ => "XYZ",
    };
    let params: Vec<f64> = data[1..]
        .chunks_exact(8)
        .take(6)
        .map(|chunk| f64::from_le_bytes(chunk.try_into().unwrap()))
        .collect();

    // Should not panic
    if let Ok(workout) = DefaultFactory::new().resolve(code, &params) {
        let _ = render(&workout.summarize());
    }
});
