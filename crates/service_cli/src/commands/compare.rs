//! Compare command implementation
//!
//! Evaluates the configured list of strategies side by side.

use pitstop_engine::mc::MonteCarloConfig;
use pitstop_optimiser::compare::compare_strategies;

use crate::config::AppConfig;
use crate::report::{self, OutputFormat};
use crate::Result;

/// Run the compare command
pub fn run(config: &AppConfig, trials: Option<usize>, seed: Option<u64>, format: OutputFormat) -> Result<()> {
    let strategies = config.compare_strategies()?;
    let mc = MonteCarloConfig::builder()
        .n_trials(trials.unwrap_or(config.compare.n_trials))
        .seed(seed.unwrap_or(config.compare.seed))
        .build()?;

    let rows = compare_strategies(&config.race, &config.tires, &strategies, &mc)?;
    report::print_comparison(&rows, &config.race, format)
}
