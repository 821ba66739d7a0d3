//! Property-based and end-to-end tests for the simulation engine.
//!
//! # Test Categories
//!
//! 1. **Finiteness**: valid strategies always produce finite race times
//! 2. **Rejection**: out-of-range pit laps are rejected deterministically
//! 3. **Common random numbers**: strategies share draws under a shared seed

use approx::assert_relative_eq;
use pitstop_core::types::{Compound, RaceParams, Strategy1Stop, StrategyError, TireModelSet};
use pitstop_engine::mc::{evaluate, EngineError, MonteCarloConfig};
use pitstop_engine::race::{expected_race_time_1stop, simulate_race_1stop};
use pitstop_engine::rng::SimRng;
use proptest::prelude::*;

fn compound() -> impl Strategy<Value = Compound> {
    prop_oneof![
        Just(Compound::Soft),
        Just(Compound::Medium),
        Just(Compound::Hard),
    ]
}

fn race_params() -> impl Strategy<Value = RaceParams> {
    (
        2u32..80,
        60.0f64..120.0,
        0.0f64..40.0,
        0.0f64..2.0,
        0.0f64..0.1,
        0.0f64..1.0,
    )
        .prop_map(
            |(laps, base_lap_time, pit_loss, pit_sigma, fuel_effect, noise_sigma)| RaceParams {
                track: "Prop".to_string(),
                laps,
                base_lap_time,
                pit_loss,
                pit_sigma,
                fuel_effect,
                noise_sigma,
            },
        )
}

proptest! {
    #[test]
    fn valid_strategies_produce_finite_totals(
        params in race_params(),
        pit_fraction in 0.0f64..1.0,
        first in compound(),
        second in compound(),
        seed in any::<u64>(),
    ) {
        let max_pit = params.laps - 1;
        let pit_lap = 1 + ((pit_fraction * max_pit as f64) as u32).min(max_pit - 1);
        let strategy = Strategy1Stop::new(pit_lap, first, second);
        let tires = TireModelSet::default();
        let mut rng = SimRng::from_seed(seed);

        let total = simulate_race_1stop(&params, &tires, &strategy, &mut rng).unwrap();
        prop_assert!(total.is_finite());
    }

    #[test]
    fn invalid_pit_laps_rejected(
        params in race_params(),
        overshoot in 0u32..10,
        first in compound(),
        second in compound(),
    ) {
        let tires = TireModelSet::default();
        let mut rng = SimRng::from_seed(0);

        for pit_lap in [0, params.laps + overshoot] {
            let strategy = Strategy1Stop::new(pit_lap, first, second);
            let result = simulate_race_1stop(&params, &tires, &strategy, &mut rng);
            prop_assert_eq!(
                result,
                Err(StrategyError::InvalidPitLap { pit_lap, laps: params.laps })
            );
        }
    }

    #[test]
    fn zero_noise_matches_closed_form(
        params in race_params(),
        first in compound(),
        second in compound(),
    ) {
        let params = RaceParams { noise_sigma: 0.0, pit_sigma: 0.0, ..params };
        let tires = TireModelSet::default();
        let strategy = Strategy1Stop::new(1, first, second);
        let mut rng = SimRng::from_seed(1);

        let simulated = simulate_race_1stop(&params, &tires, &strategy, &mut rng).unwrap();
        let analytic = expected_race_time_1stop(&params, &tires, &strategy).unwrap();
        prop_assert!((simulated - analytic).abs() < 1e-7 * analytic.max(1.0));
    }
}

#[test]
fn common_random_numbers_cancel_noise_between_identical_stints() {
    // Lap i always consumes draw i, so two pit laps on the same pairing
    // differ only in deterministic terms.
    let params = RaceParams::default();
    let tires = TireModelSet::default();
    let config = MonteCarloConfig::builder()
        .n_trials(300)
        .seed(999)
        .build()
        .unwrap();

    let early = Strategy1Stop::new(10, Compound::Medium, Compound::Medium);
    let even = Strategy1Stop::new(26, Compound::Medium, Compound::Medium);

    let a = evaluate(&params, &tires, &early, &config).unwrap();
    let b = evaluate(&params, &tires, &even, &config).unwrap();

    let analytic_gap = expected_race_time_1stop(&params, &tires, &early).unwrap()
        - expected_race_time_1stop(&params, &tires, &even).unwrap();
    assert_relative_eq!(a.mean - b.mean, analytic_gap, epsilon = 1e-6);
    assert_relative_eq!(a.std, b.std, epsilon = 1e-6);
}

#[test]
fn evaluate_rejects_pit_lap_equal_to_laps() {
    let params = RaceParams::default();
    let tires = TireModelSet::default();
    let config = MonteCarloConfig::builder().n_trials(10).build().unwrap();
    let strategy = Strategy1Stop::new(params.laps, Compound::Soft, Compound::Medium);

    let err = evaluate(&params, &tires, &strategy, &config).unwrap_err();
    assert!(matches!(err, EngineError::Strategy(_)));
}

#[test]
fn default_race_soft_medium_mean_in_expected_range() {
    let params = RaceParams::default();
    let tires = TireModelSet::default();
    let config = MonteCarloConfig::builder()
        .n_trials(2_000)
        .seed(123)
        .build()
        .unwrap();
    let strategy = Strategy1Stop::new(20, Compound::Soft, Compound::Medium);

    let evaluation = evaluate(&params, &tires, &strategy, &config).unwrap();
    // 52 laps at roughly 90 s less fuel gains, plus the stop
    assert!(evaluation.mean > 4_650.0 && evaluation.mean < 4_750.0, "mean = {}", evaluation.mean);
}
