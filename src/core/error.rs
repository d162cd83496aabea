//! Centralised error types used across the crate.

use std::io;

use crate::core::data::ParseSweepError;

/// Precise configuration faults.
#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("display bound `{0}` must be a finite number")]
    NonFinite(&'static str),
    #[error("min display value {low} must be <= max display value {high}")]
    InvalidRange { low: f64, high: f64 },
    #[error("frequency window start {start} Hz must be <= stop {stop} Hz")]
    InvalidWindow { start: f64, stop: f64 },
}

/// Caller-side geometry faults surfaced by the mapper and tick generator.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisError {
    #[error("plot height must be positive, got {height_px}px")]
    InvalidGeometry { height_px: i32 },
}

/// Top-level error type bubbled up by public APIs.
#[derive(thiserror::Error, Debug)]
pub enum SweepError {
    #[error("{0}")]
    Io(#[from] io::Error),
    #[error("{0}")]
    Parse(#[from] ParseSweepError),
    #[error("{0}")]
    Config(#[from] ConfigError),
    #[error("{0}")]
    Axis(#[from] AxisError),
}
