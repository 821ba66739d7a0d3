//! Monte Carlo Aggregator.
//!
//! Runs N independent trials of the race simulator for one fixed strategy
//! and reduces them to a sample mean and unbiased standard deviation.
//!
//! # Architecture
//!
//! ```text
//! evaluate()
//! ├── MonteCarloConfig  (trial count, seed)
//! ├── SimRng            (seeded once per call)
//! ├── simulate_race_1stop() × N
//! └── SampleStats       (mean, N−1 std)
//! ```
//!
//! # Reproducibility
//!
//! Every call to [`evaluate`] seeds its own generator, so two strategies
//! evaluated with the same seed see the same underlying normal draws
//! (common random numbers). Comparisons between them then reflect the
//! strategies rather than sampling luck.

mod config;
mod error;
mod evaluator;
mod stats;

pub use config::{MonteCarloConfig, MonteCarloConfigBuilder, DEFAULT_SEED, MAX_TRIALS};
pub use error::{ConfigError, EngineError};
pub use evaluator::{evaluate, Evaluation};
pub use stats::SampleStats;
