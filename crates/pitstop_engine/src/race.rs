//! Race Simulator.
//!
//! One call to [`simulate_race_1stop`] is one Monte Carlo trial:
//!
//! 1. Pit stop loss drawn from `Normal(pit_loss, pit_sigma)`, clamped to ≥ 0
//! 2. Stint 1: laps `1..=pit_lap` on `first`, tire age from 0
//! 3. Stint 2: laps `pit_lap + 1..=laps` on `second`, tire age reset to 0
//!
//! Draw order is fixed: one pit draw, then one draw per lap in lap order.
//! Two calls on generators in the same state therefore see the same draws,
//! which is what makes candidates comparable under a shared seed.

use pitstop_core::types::{RaceParams, Strategy1Stop, StrategyError, TireModel, TireModelSet};

use crate::lap::{expected_lap_time, lap_time};
use crate::rng::SimRng;

/// Simulates one full race for a one-stop strategy and returns the total time (s).
///
/// # Errors
///
/// Returns [`StrategyError::InvalidPitLap`] if `pit_lap` is outside
/// `[1, laps)`. No draws are consumed in that case.
///
/// # Examples
///
/// ```rust
/// use pitstop_core::types::{Compound, RaceParams, Strategy1Stop, TireModelSet};
/// use pitstop_engine::race::simulate_race_1stop;
/// use pitstop_engine::rng::SimRng;
///
/// let params = RaceParams::default();
/// let tires = TireModelSet::default();
/// let mut rng = SimRng::from_seed(42);
///
/// let strategy = Strategy1Stop::new(20, Compound::Soft, Compound::Hard);
/// let total = simulate_race_1stop(&params, &tires, &strategy, &mut rng).unwrap();
/// assert!(total.is_finite());
///
/// let invalid = Strategy1Stop::new(52, Compound::Soft, Compound::Hard);
/// assert!(simulate_race_1stop(&params, &tires, &invalid, &mut rng).is_err());
/// ```
pub fn simulate_race_1stop(
    params: &RaceParams,
    tires: &TireModelSet,
    strategy: &Strategy1Stop,
    rng: &mut SimRng,
) -> Result<f64, StrategyError> {
    strategy.validate(params.laps)?;

    let mut total = rng.gen_gaussian(params.pit_loss, params.pit_sigma).max(0.0);

    total += stint_time(params, tires.model(strategy.first), 1, strategy.pit_lap, rng);
    total += stint_time(
        params,
        tires.model(strategy.second),
        strategy.pit_lap + 1,
        params.laps,
        rng,
    );

    Ok(total)
}

/// Closed-form race time with both noise sources switched off.
///
/// Equals the result of [`simulate_race_1stop`] when `noise_sigma` and
/// `pit_sigma` are zero, up to floating-point summation order.
///
/// # Errors
///
/// Returns [`StrategyError::InvalidPitLap`] for an out-of-range pit lap.
pub fn expected_race_time_1stop(
    params: &RaceParams,
    tires: &TireModelSet,
    strategy: &Strategy1Stop,
) -> Result<f64, StrategyError> {
    strategy.validate(params.laps)?;

    let stint = |tire: &TireModel, from: u32, to: u32| -> f64 {
        (from..=to)
            .zip(0u32..)
            .map(|(lap, age)| expected_lap_time(params, tire, lap, age))
            .sum::<f64>()
    };

    Ok(params.pit_loss.max(0.0)
        + stint(tires.model(strategy.first), 1, strategy.pit_lap)
        + stint(tires.model(strategy.second), strategy.pit_lap + 1, params.laps))
}

#[inline]
fn stint_time(params: &RaceParams, tire: &TireModel, from: u32, to: u32, rng: &mut SimRng) -> f64 {
    let mut total = 0.0;
    let mut age = 0;
    for lap in from..=to {
        total += lap_time(params, tire, lap, age, rng);
        age += 1;
    }
    total
}
