//! Evaluate command implementation
//!
//! Evaluates a single one-stop strategy using the pitstop_engine crate.

use pitstop_core::types::Strategy1Stop;
use pitstop_engine::mc::{evaluate, MonteCarloConfig};
use tracing::info;

use crate::config::AppConfig;
use crate::report::{self, OutputFormat};
use crate::{CliError, Result};

/// Run the evaluate command
///
/// Trials and seed default to the `[search]` section.
pub fn run(
    config: &AppConfig,
    strategy: Strategy1Stop,
    trials: Option<usize>,
    seed: Option<u64>,
    lambda: f64,
    format: OutputFormat,
) -> Result<()> {
    if !(lambda.is_finite() && lambda >= 0.0) {
        return Err(CliError::invalid_argument(format!(
            "lambda must be finite and non-negative, got {}",
            lambda
        )));
    }

    let mc = MonteCarloConfig::builder()
        .n_trials(trials.unwrap_or(config.search.n_trials))
        .seed(seed.unwrap_or(config.search.seed))
        .build()?;

    info!(strategy = %strategy, n_trials = mc.n_trials(), seed = mc.seed(), "evaluating strategy");

    let evaluation = evaluate(&config.race, &config.tires, &strategy, &mc)?;
    report::print_evaluation(&strategy, &evaluation, lambda, mc.seed(), format)
}

