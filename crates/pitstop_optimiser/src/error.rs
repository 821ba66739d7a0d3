//! Search-specific error types.

use pitstop_core::types::ParamError;
use pitstop_engine::mc::{ConfigError, EngineError};
use thiserror::Error;

/// Errors that can occur while setting up or running a strategy search.
///
/// All configuration problems are detected before the first evaluation.
///
/// # Examples
///
/// ```
/// use pitstop_optimiser::SearchError;
///
/// let err = SearchError::InvalidLapRange { lap_min: 10, lap_max: 52, laps: 52 };
/// assert!(format!("{}", err).contains("[10, 52]"));
/// ```
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    /// Pit-lap range not inside `[1, laps)` or empty.
    #[error("Invalid pit lap range [{lap_min}, {lap_max}] for a {laps}-lap race: need 1 <= lap_min <= lap_max < laps")]
    InvalidLapRange {
        /// Lowest pit lap searched
        lap_min: u32,
        /// Highest pit lap searched
        lap_max: u32,
        /// Race distance in laps
        laps: u32,
    },

    /// No compound pairs to search.
    #[error("Search space has no compound pairs")]
    NoPairs,

    /// No risk-aversion coefficients to search.
    #[error("Search space has no risk-aversion coefficients")]
    NoLambdas,

    /// Risk-aversion coefficient negative or not finite.
    #[error("Invalid risk-aversion coefficient {0}: must be finite and non-negative")]
    InvalidLambda(f64),

    /// Every candidate was rejected before scoring.
    #[error("No valid candidates to score")]
    NoValidCandidates,

    /// Invalid race or tire parameters.
    #[error("Parameter error: {0}")]
    Params(#[from] ParamError),

    /// Invalid Monte Carlo configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Evaluation failure.
    #[error("Engine error: {0}")]
    Engine(#[from] EngineError),
}
