//! Lap-Time Model.
//!
//! ```text
//! lap_time = base_lap_time − fuel_effect·(lap_index − 1) + degradation(tire_age) + noise
//! ```
//!
//! `lap_index` is 1-based across the whole race, so fuel burns monotonically
//! through both stints. `tire_age` restarts at 0 on every fresh set.
//! The lap time is not clamped.

use pitstop_core::types::{RaceParams, TireModel};

use crate::rng::SimRng;

/// Simulates one lap, drawing its noise from `rng`.
///
/// Consumes exactly one normal draw.
///
/// # Examples
///
/// ```rust
/// use pitstop_core::types::{RaceParams, TireModelSet};
/// use pitstop_engine::lap::lap_time;
/// use pitstop_engine::rng::SimRng;
///
/// let params = RaceParams { noise_sigma: 0.0, ..RaceParams::default() };
/// let mut rng = SimRng::from_seed(1);
///
/// let t = lap_time(&params, &TireModelSet::SOFT, 1, 0, &mut rng);
/// assert_eq!(t, 90.0);
/// ```
#[inline]
pub fn lap_time(
    params: &RaceParams,
    tire: &TireModel,
    lap_index: u32,
    tire_age: u32,
    rng: &mut SimRng,
) -> f64 {
    expected_lap_time(params, tire, lap_index, tire_age) + params.noise_sigma * rng.gen_normal()
}

/// Noise-free lap time.
#[inline]
pub fn expected_lap_time(params: &RaceParams, tire: &TireModel, lap_index: u32, tire_age: u32) -> f64 {
    let fuel_term = -params.fuel_effect * f64::from(lap_index.saturating_sub(1));
    params.base_lap_time + fuel_term + tire.degradation(tire_age)
}
