//! Monte Carlo evaluation configuration.

use super::error::ConfigError;

/// Maximum number of trials allowed per evaluation.
pub const MAX_TRIALS: usize = 10_000_000;

/// Seed used when none is supplied.
pub const DEFAULT_SEED: u64 = 123;

/// Monte Carlo evaluation configuration.
///
/// Immutable configuration specifying the trial count and the seed of the
/// generator created for each evaluation. Use [`MonteCarloConfigBuilder`]
/// to construct instances.
///
/// # Examples
///
/// ```rust
/// use pitstop_engine::mc::MonteCarloConfig;
///
/// let config = MonteCarloConfig::builder()
///     .n_trials(50_000)
///     .seed(123)
///     .build()
///     .expect("valid configuration");
///
/// assert_eq!(config.n_trials(), 50_000);
/// assert_eq!(config.seed(), 123);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MonteCarloConfig {
    /// Number of simulated races.
    n_trials: usize,
    /// Seed of the per-evaluation generator.
    seed: u64,
}

impl MonteCarloConfig {
    /// Creates a new configuration builder.
    #[inline]
    pub fn builder() -> MonteCarloConfigBuilder {
        MonteCarloConfigBuilder::default()
    }

    /// Returns the number of trials.
    #[inline]
    pub fn n_trials(&self) -> usize {
        self.n_trials
    }

    /// Returns the seed.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Returns a copy with a different seed.
    #[inline]
    pub fn with_seed(self, seed: u64) -> Self {
        Self { seed, ..self }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if `n_trials` is 0 or greater than 10,000,000.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.n_trials == 0 || self.n_trials > MAX_TRIALS {
            return Err(ConfigError::InvalidTrialCount(self.n_trials));
        }
        Ok(())
    }
}

/// Builder for [`MonteCarloConfig`].
///
/// Provides a fluent API with validation at build time.
#[derive(Clone, Debug, Default)]
pub struct MonteCarloConfigBuilder {
    n_trials: Option<usize>,
    seed: Option<u64>,
}

impl MonteCarloConfigBuilder {
    /// Sets the number of trials.
    ///
    /// # Arguments
    ///
    /// * `n_trials` - Number of trials in [1, 10_000_000]
    #[inline]
    pub fn n_trials(mut self, n_trials: usize) -> Self {
        self.n_trials = Some(n_trials);
        self
    }

    /// Sets the seed for reproducibility.
    #[inline]
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the configuration.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if the trial count is missing or out of range.
    pub fn build(self) -> Result<MonteCarloConfig, ConfigError> {
        let config = MonteCarloConfig {
            n_trials: self.n_trials.ok_or(ConfigError::InvalidTrialCount(0))?,
            seed: self.seed.unwrap_or(DEFAULT_SEED),
        };
        config.validate()?;
        Ok(config)
    }
}
