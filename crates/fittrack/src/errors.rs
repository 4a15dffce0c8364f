//! Error handling and exit codes.

use fittrack_core::constants::exit_codes;
use fittrack_core::workout::WorkoutError;

/// Map a rejected reading to its exit code.
pub fn handle_error(err: &WorkoutError) -> i32 {
    match err {
        WorkoutError::UnknownWorkoutType(_) => exit_codes::ERROR_UNKNOWN_WORKOUT,
        WorkoutError::ArityMismatch { .. } => exit_codes::ERROR_ARITY,
        WorkoutError::InvalidInput { .. } => exit_codes::ERROR_INVALID_INPUT,
    }
}
