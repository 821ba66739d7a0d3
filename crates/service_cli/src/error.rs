//! Error types for the pitstop CLI.

use thiserror::Error;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file or validation error
    #[error("Configuration error: {0}")]
    Config(#[from] crate::config::ConfigError),

    /// Monte Carlo configuration error
    #[error("Monte Carlo configuration error: {0}")]
    MonteCarlo(#[from] pitstop_engine::mc::ConfigError),

    /// Strategy evaluation error
    #[error("Evaluation error: {0}")]
    Engine(#[from] pitstop_engine::EngineError),

    /// Strategy search error
    #[error("Search error: {0}")]
    Search(#[from] pitstop_optimiser::SearchError),

    /// Invalid command-line argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON serialisation error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create an invalid argument error
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, CliError>;

#[cfg(test)]
mod tests {
    use super::*;
    use pitstop_core::types::StrategyError;
    use pitstop_engine::EngineError;

    #[test]
    fn test_error_display() {
        let err = CliError::invalid_argument("pit lap 0");
        assert_eq!(err.to_string(), "Invalid argument: pit lap 0");
    }

    #[test]
    fn test_from_engine_error() {
        let err: CliError = EngineError::from(StrategyError::InvalidPitLap { pit_lap: 52, laps: 52 }).into();
        assert!(matches!(err, CliError::Engine(_)));
        assert!(err.to_string().contains("Invalid pit lap 52"));
    }
}
