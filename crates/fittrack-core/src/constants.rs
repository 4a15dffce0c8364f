//! Unit conversions and per-workout physical constants.

/// Metres in a kilometre.
pub const M_IN_KM: f64 = 1000.0;

/// Minutes in an hour. Shared by every calorie formula that works per minute.
pub const MIN_IN_H: f64 = 60.0;

/// Step length (metres) for running and walking.
pub const DEFAULT_STEP_LENGTH_M: f64 = 0.65;

/// Stroke length (metres) for swimming.
pub const SWIM_STROKE_LENGTH_M: f64 = 1.38;

/// Running calorie coefficients.
pub mod running {
    /// Multiplier applied to mean speed (km/h).
    pub const CALORIES_MEAN_SPEED_MULTIPLIER: f64 = 18.0;
    /// Shift added to the scaled mean speed.
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.79;
}

/// Sports walking calorie coefficients.
pub mod walking {
    /// Weight multiplier for the base term.
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 0.035;
    /// Multiplier for the speed²/height term.
    pub const CALORIES_SPEED_HEIGHT_MULTIPLIER: f64 = 0.029;
    /// km/h to m/s.
    pub const KMH_IN_MSEC: f64 = 0.278;
    /// Centimetres in a metre.
    pub const CM_IN_M: f64 = 100.0;
}

/// Swimming calorie coefficients.
pub mod swimming {
    /// Shift added to mean speed (km/h).
    pub const CALORIES_MEAN_SPEED_SHIFT: f64 = 1.1;
    /// Weight multiplier.
    pub const CALORIES_WEIGHT_MULTIPLIER: f64 = 2.0;
}

/// Process exit codes.
pub mod exit_codes {
    /// Every reading produced a summary.
    pub const SUCCESS: i32 = 0;
    /// Generic error (I/O, malformed input file).
    pub const ERROR_GENERIC: i32 = 1;
    /// A reading carried an unrecognised workout code.
    pub const ERROR_UNKNOWN_WORKOUT: i32 = 2;
    /// A reading had the wrong number of parameters.
    pub const ERROR_ARITY: i32 = 3;
    /// A reading had a non-physical parameter value.
    pub const ERROR_INVALID_INPUT: i32 = 4;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn step_lengths() {
        assert!((DEFAULT_STEP_LENGTH_M - 0.65).abs() < f64::EPSILON);
        assert!((SWIM_STROKE_LENGTH_M - 1.38).abs() < f64::EPSILON);
    }

    #[test]
    fn exit_codes_are_distinct() {
        let codes = [
            exit_codes::SUCCESS,
            exit_codes::ERROR_GENERIC,
            exit_codes::ERROR_UNKNOWN_WORKOUT,
            exit_codes::ERROR_ARITY,
            exit_codes::ERROR_INVALID_INPUT,
        ];
        for (i, a) in codes.iter().enumerate() {
            for b in &codes[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
