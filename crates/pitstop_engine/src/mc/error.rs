//! Error types for the Monte Carlo aggregator.
//!
//! This module defines structured error types for configuration validation
//! and strategy rejection in the simulation engine.

use pitstop_core::types::StrategyError;
use thiserror::Error;

use super::config::MAX_TRIALS;

/// Configuration error for the Monte Carlo aggregator.
///
/// These errors occur during construction when invalid parameters are provided.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// Trial count outside valid range [1, 10_000_000].
    #[error("Invalid trial count {0}: must be in range [1, {max}]", max = MAX_TRIALS)]
    InvalidTrialCount(usize),
}

/// Errors returned by [`evaluate`](super::evaluate).
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// Invalid aggregator configuration.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Strategy cannot be run on this race.
    #[error("Strategy error: {0}")]
    Strategy(#[from] StrategyError),
}
