//! Side-by-side evaluation of a fixed list of strategies.
//!
//! Every strategy is evaluated with the same seed, so the rows are directly
//! comparable.

use pitstop_core::types::{RaceParams, Strategy1Stop, TireModelSet};
use pitstop_engine::mc::{evaluate, Evaluation, MonteCarloConfig};
use tracing::info;

use crate::SearchError;

/// One evaluated strategy.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ComparisonRow {
    /// The strategy.
    pub strategy: Strategy1Stop,
    /// Its evaluation.
    pub evaluation: Evaluation,
}

/// Evaluates each strategy in order.
///
/// Unlike the search, an invalid strategy here is an error: the caller asked
/// for it by name.
///
/// # Errors
///
/// Returns `SearchError` if the race or tire parameters are invalid, or if
/// any strategy has an out-of-range pit lap.
///
/// # Examples
///
/// ```rust
/// use pitstop_core::types::{RaceParams, TireModelSet};
/// use pitstop_engine::mc::MonteCarloConfig;
/// use pitstop_optimiser::compare::compare_strategies;
///
/// let strategies = vec!["S-M@18".parse().unwrap(), "M-H@24".parse().unwrap()];
/// let mc = MonteCarloConfig::builder().n_trials(100).seed(7).build().unwrap();
///
/// let rows = compare_strategies(
///     &RaceParams::default(),
///     &TireModelSet::default(),
///     &strategies,
///     &mc,
/// )
/// .unwrap();
/// assert_eq!(rows.len(), 2);
/// ```
pub fn compare_strategies(
    params: &RaceParams,
    tires: &TireModelSet,
    strategies: &[Strategy1Stop],
    mc: &MonteCarloConfig,
) -> Result<Vec<ComparisonRow>, SearchError> {
    params.validate()?;
    tires.validate()?;

    info!(
        track = %params.track,
        laps = params.laps,
        strategies = strategies.len(),
        n_trials = mc.n_trials(),
        "comparing strategies"
    );

    strategies
        .iter()
        .map(|strategy| {
            let evaluation = evaluate(params, tires, strategy, mc)?;
            Ok(ComparisonRow {
                strategy: *strategy,
                evaluation,
            })
        })
        .collect()
}
