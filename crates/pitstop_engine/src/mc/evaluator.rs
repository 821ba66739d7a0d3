//! Monte Carlo evaluation of a single strategy.

use std::time::{Duration, Instant};

use pitstop_core::types::{RaceParams, Strategy1Stop, TireModelSet};
use tracing::debug;

use super::config::MonteCarloConfig;
use super::error::EngineError;
use super::stats::SampleStats;
use crate::race::simulate_race_1stop;
use crate::rng::SimRng;

/// Aggregate result of one strategy evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Evaluation {
    /// Mean race time over all trials (s).
    pub mean: f64,
    /// Unbiased standard deviation of race time (s).
    pub std: f64,
    /// Number of trials simulated.
    pub n_trials: usize,
    /// Wall-clock time spent simulating. Diagnostic only, never scored.
    pub elapsed: Duration,
}

impl Evaluation {
    /// Risk-adjusted score `mean + lambda·std`.
    #[inline]
    pub fn score(&self, lambda: f64) -> f64 {
        self.stats().score(lambda)
    }

    /// Mean and standard deviation as [`SampleStats`].
    #[inline]
    pub fn stats(&self) -> SampleStats {
        SampleStats {
            mean: self.mean,
            std: self.std,
        }
    }

    /// Standard error of the mean.
    #[inline]
    pub fn std_error(&self) -> f64 {
        self.std / (self.n_trials as f64).sqrt()
    }
}

/// Evaluates a strategy over `config.n_trials()` independent races.
///
/// A fresh [`SimRng`] is seeded from `config.seed()` on every call and shared
/// by all trials of the call, so the same inputs always reproduce the same
/// mean and standard deviation bit for bit.
///
/// # Errors
///
/// - [`EngineError::Config`] if the configuration is invalid
/// - [`EngineError::Strategy`] if the pit lap is outside `[1, laps)`;
///   no trial is run in that case
///
/// # Examples
///
/// ```rust
/// use pitstop_core::types::{Compound, RaceParams, Strategy1Stop, TireModelSet};
/// use pitstop_engine::mc::{evaluate, MonteCarloConfig};
///
/// let params = RaceParams::default();
/// let tires = TireModelSet::default();
/// let strategy = Strategy1Stop::new(24, Compound::Medium, Compound::Hard);
/// let config = MonteCarloConfig::builder().n_trials(100).seed(7).build().unwrap();
///
/// let a = evaluate(&params, &tires, &strategy, &config).unwrap();
/// let b = evaluate(&params, &tires, &strategy, &config).unwrap();
/// assert_eq!(a.mean, b.mean);
/// assert_eq!(a.std, b.std);
/// ```
pub fn evaluate(
    params: &RaceParams,
    tires: &TireModelSet,
    strategy: &Strategy1Stop,
    config: &MonteCarloConfig,
) -> Result<Evaluation, EngineError> {
    config.validate()?;
    strategy.validate(params.laps)?;

    let n_trials = config.n_trials();
    let mut rng = SimRng::from_seed(config.seed());
    let mut times = Vec::with_capacity(n_trials);

    let start = Instant::now();
    for _ in 0..n_trials {
        times.push(simulate_race_1stop(params, tires, strategy, &mut rng)?);
    }
    let elapsed = start.elapsed();

    let stats = SampleStats::from_samples(&times);
    debug!(
        strategy = %strategy,
        n_trials,
        seed = config.seed(),
        mean = stats.mean,
        std = stats.std,
        elapsed_ms = elapsed.as_secs_f64() * 1e3,
        "evaluated strategy"
    );

    Ok(Evaluation {
        mean: stats.mean,
        std: stats.std,
        n_trials,
        elapsed,
    })
}
