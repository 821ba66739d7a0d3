//! Search command implementation
//!
//! Runs the risk-adjusted one-stop strategy search using the pitstop_optimiser crate.

use pitstop_engine::mc::MonteCarloConfig;
use pitstop_optimiser::search::{SearchConfig, StrategySearch};
use tracing::info;

use crate::config::AppConfig;
use crate::report::{self, OutputFormat};
use crate::Result;

/// Command-line overrides of the `[search]` section
#[derive(Debug, Default)]
pub struct SearchOverrides {
    /// Trials per candidate
    pub trials: Option<usize>,
    /// Seed shared by every candidate
    pub seed: Option<u64>,
    /// Lowest pit lap searched
    pub lap_min: Option<u32>,
    /// Highest pit lap searched
    pub lap_max: Option<u32>,
    /// Replacement risk-aversion coefficients (empty keeps the configured ones)
    pub lambdas: Vec<f64>,
    /// Ranked candidates reported per λ
    pub top: Option<usize>,
    /// Evaluate candidates on the calling thread only
    pub sequential: bool,
}

/// Applies the overrides to the `[search]` section and revalidates.
///
/// Overridden values are held to the same rules as values from the file.
pub fn resolve(config: &AppConfig, overrides: &SearchOverrides) -> Result<AppConfig> {
    let mut section = config.search.clone();
    if let Some(trials) = overrides.trials {
        section.n_trials = trials;
    }
    if let Some(seed) = overrides.seed {
        section.seed = seed;
    }
    if let Some(lap_min) = overrides.lap_min {
        section.lap_min = lap_min;
    }
    if let Some(lap_max) = overrides.lap_max {
        section.lap_max = lap_max;
    }
    if !overrides.lambdas.is_empty() {
        section.lambdas = overrides.lambdas.clone();
    }
    if let Some(top) = overrides.top {
        section.top_k = top;
    }

    let resolved = AppConfig {
        search: section,
        ..config.clone()
    };
    resolved.validate()?;
    Ok(resolved)
}

/// Run the search command
pub fn run(config: &AppConfig, overrides: SearchOverrides, format: OutputFormat) -> Result<()> {
    let resolved = resolve(config, &overrides)?;
    let space = resolved.search_space()?;
    let mc = MonteCarloConfig::builder()
        .n_trials(resolved.search.n_trials)
        .seed(resolved.search.seed)
        .build()?;

    let search = StrategySearch::new(
        &resolved.race,
        &resolved.tires,
        &space,
        SearchConfig::new(mc).with_top_k(resolved.search.top_k),
    )?;

    info!(
        track = %resolved.race.track,
        candidates = space.len(),
        lambdas = ?space.lambdas,
        n_trials = mc.n_trials(),
        seed = mc.seed(),
        sequential = overrides.sequential,
        "starting search"
    );

    let report = if overrides.sequential {
        search.run()?
    } else {
        search.run_parallel()?
    };

    report::print_search(&report, &resolved.race, format)
}
