//! CLI configuration management.
//!
//! Loads `pitstop.toml` (race, tire models, search and comparison settings)
//! with environment variable overrides. A missing file yields the defaults.

use std::path::Path;

use pitstop_core::types::{CompoundPair, RaceParams, Strategy1Stop, TireModelSet};
use pitstop_engine::mc::{MonteCarloConfig, DEFAULT_SEED};
use pitstop_optimiser::search::{SearchSpace, DEFAULT_TOP_K};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Search section: `[search]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchSection {
    /// Risk-aversion coefficients, one pass each
    pub lambdas: Vec<f64>,
    /// Lowest pit lap searched
    pub lap_min: u32,
    /// Highest pit lap searched
    pub lap_max: u32,
    /// Compound pairings such as `"S-M"`
    pub pairs: Vec<String>,
    /// Trials per candidate
    pub n_trials: usize,
    /// Seed shared by every candidate
    pub seed: u64,
    /// Ranked candidates reported per λ
    pub top_k: usize,
}

impl Default for SearchSection {
    fn default() -> Self {
        let space = SearchSpace::default();
        Self {
            lambdas: space.lambdas,
            lap_min: space.lap_min,
            lap_max: space.lap_max,
            pairs: space.pairs.iter().map(pair_code).collect(),
            n_trials: 50_000,
            seed: DEFAULT_SEED,
            top_k: DEFAULT_TOP_K,
        }
    }
}

/// Comparison section: `[compare]`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CompareSection {
    /// Strategies such as `"S-M@18"`
    pub strategies: Vec<String>,
    /// Trials per strategy
    pub n_trials: usize,
    /// Seed shared by every strategy
    pub seed: u64,
}

impl Default for CompareSection {
    fn default() -> Self {
        Self {
            strategies: vec!["S-M@18".to_string(), "M-H@24".to_string()],
            n_trials: 3_000,
            seed: 7,
        }
    }
}

/// Full CLI configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Race parameters: `[race]`
    pub race: RaceParams,
    /// Tire models: `[tires.soft]`, `[tires.medium]`, `[tires.hard]`
    pub tires: TireModelSet,
    /// Strategy search settings
    pub search: SearchSection,
    /// Fixed-strategy comparison settings
    pub compare: CompareSection,
}

fn pair_code(pair: &CompoundPair) -> String {
    format!("{}-{}", pair.first.code(), pair.second.code())
}

impl AppConfig {
    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::Io(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from `path`, or return the defaults if it does not exist.
    ///
    /// A file that exists but cannot be read or parsed is an error.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            debug!(path = %path.display(), "loading configuration");
            Self::load(path)
        } else {
            debug!(path = %path.display(), "configuration file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Apply environment variable overrides
    ///
    /// `PITSTOP_TRIALS` and `PITSTOP_SEED` apply to both search and comparison.
    pub fn with_env_override(mut self) -> Self {
        if let Ok(trials) = std::env::var("PITSTOP_TRIALS") {
            match trials.parse() {
                Ok(n) => {
                    self.search.n_trials = n;
                    self.compare.n_trials = n;
                }
                Err(_) => warn!(value = %trials, "ignoring unparsable PITSTOP_TRIALS"),
            }
        }

        if let Ok(seed) = std::env::var("PITSTOP_SEED") {
            match seed.parse() {
                Ok(s) => {
                    self.search.seed = s;
                    self.compare.seed = s;
                }
                Err(_) => warn!(value = %seed, "ignoring unparsable PITSTOP_SEED"),
            }
        }

        self
    }

    /// Compound pairs of the search section.
    pub fn pairs(&self) -> Result<Vec<CompoundPair>, ConfigError> {
        self.search
            .pairs
            .iter()
            .map(|p| p.parse().map_err(|e| ConfigError::validation(format!("search.pairs: {}", e))))
            .collect()
    }

    /// Search space described by the search section.
    pub fn search_space(&self) -> Result<SearchSpace, ConfigError> {
        Ok(SearchSpace::new(
            self.pairs()?,
            self.search.lap_min,
            self.search.lap_max,
            self.search.lambdas.clone(),
        ))
    }

    /// Strategies of the comparison section.
    pub fn compare_strategies(&self) -> Result<Vec<Strategy1Stop>, ConfigError> {
        self.compare
            .strategies
            .iter()
            .map(|s| {
                s.parse()
                    .map_err(|e| ConfigError::validation(format!("compare.strategies: {}", e)))
            })
            .collect()
    }

    /// Validate the configuration, collecting every problem found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let mut errors = Vec::new();

        if let Err(e) = self.race.validate() {
            errors.push(format!("race: {}", e));
        }

        if let Err(e) = self.tires.validate() {
            errors.push(format!("tires: {}", e));
        }

        match self.search_space() {
            Ok(space) => {
                if let Err(e) = space.validate(self.race.laps) {
                    errors.push(format!("search: {}", e));
                }
            }
            Err(e) => errors.extend(e.into_messages()),
        }

        if let Err(e) = MonteCarloConfig::builder()
            .n_trials(self.search.n_trials)
            .build()
        {
            errors.push(format!("search.n_trials: {}", e));
        }

        if self.search.top_k == 0 {
            errors.push("search.top_k must be greater than 0".to_string());
        }

        match self.compare_strategies() {
            Ok(strategies) => {
                for strategy in strategies {
                    if let Err(e) = strategy.validate(self.race.laps) {
                        errors.push(format!("compare.strategies: {} ({})", e, strategy));
                    }
                }
            }
            Err(e) => errors.extend(e.into_messages()),
        }

        if let Err(e) = MonteCarloConfig::builder()
            .n_trials(self.compare.n_trials)
            .build()
        {
            errors.push(format!("compare.n_trials: {}", e));
        }

        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Validation(errors))
        }
    }
}

/// Configuration error type
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ConfigError {
    /// IO error reading config file
    #[error("IO error: {0}")]
    Io(String),
    /// Parse error in config file
    #[error("Parse error: {0}")]
    Parse(String),
    /// Validation errors
    #[error("Validation errors: {}", .0.join("; "))]
    Validation(Vec<String>),
}

impl ConfigError {
    /// Create a single-message validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(vec![msg.into()])
    }

    fn into_messages(self) -> Vec<String> {
        match self {
            Self::Validation(errors) => errors,
            other => vec![other.to_string()],
        }
    }
}
