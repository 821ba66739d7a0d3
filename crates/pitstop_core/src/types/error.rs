//! Error types for structured error handling.
//!
//! This module provides:
//! - `ParamError`: Invalid race or tire parameters
//! - `StrategyError`: Strategy incompatible with the race (e.g. pit lap out of range)
//! - `CompoundError`: Errors from compound and strategy parsing

use thiserror::Error;

/// Race or tire parameter validation errors.
///
/// # Examples
/// ```
/// use pitstop_core::types::ParamError;
///
/// let err = ParamError::InvalidLapCount(1);
/// assert_eq!(format!("{}", err), "Invalid lap count 1: a race needs at least 2 laps");
/// ```
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    /// Lap count below the one-stop minimum of 2.
    #[error("Invalid lap count {0}: a race needs at least 2 laps")]
    InvalidLapCount(u32),

    /// Time-scale or coefficient value that is negative or not finite.
    #[error("Invalid parameter '{name}': {value} (must be finite and non-negative)")]
    InvalidParameter {
        /// Parameter name.
        name: &'static str,
        /// Offending value.
        value: f64,
    },
}

/// Strategy errors.
///
/// A strategy that cannot be run on a given race is reported explicitly
/// rather than being encoded as an artificially large race time.
///
/// # Examples
/// ```
/// use pitstop_core::types::StrategyError;
///
/// let err = StrategyError::InvalidPitLap { pit_lap: 52, laps: 52 };
/// assert!(format!("{}", err).contains("[1, 52)"));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StrategyError {
    /// Pit lap outside `[1, laps)`.
    #[error("Invalid pit lap {pit_lap}: must be in range [1, {laps})")]
    InvalidPitLap {
        /// Requested pit lap.
        pit_lap: u32,
        /// Race distance in laps.
        laps: u32,
    },
}

/// Compound and strategy parsing errors.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CompoundError {
    /// Unrecognised compound name or code.
    #[error("Unknown compound '{0}': expected S, M, H, soft, medium or hard")]
    UnknownCompound(String),

    /// Malformed compound pair or strategy string.
    #[error("Malformed strategy '{0}': expected 'S-M' or 'S-M@18'")]
    Malformed(String),
}
