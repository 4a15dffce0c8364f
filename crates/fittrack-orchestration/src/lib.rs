//! # fittrack-orchestration
//!
//! Batch processing of sensor readings and result presentation interfaces.

pub mod interfaces;
pub mod orchestrator;

pub use interfaces::{BatchStats, ReadingOutcome, ResultPresenter};
pub use orchestrator::{batch_stats, present_outcomes, process_reading, process_readings};
