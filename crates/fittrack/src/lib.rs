//! fittrack library — application logic for the workout summary tool.

pub mod app;
pub mod config;
pub mod errors;
pub mod input;
