//! Search orchestration: evaluate every candidate, then reduce per λ.

use std::time::{Duration, Instant};

use pitstop_core::types::{CompoundPair, RaceParams, TireModelSet};
use pitstop_engine::mc::{evaluate, EngineError, MonteCarloConfig};
use tracing::{debug, info, warn};

use super::score::{improvement_log, rank, select_best, CandidateScore, EvaluatedCandidate};
use super::space::{Candidate, SearchSpace};
use crate::SearchError;

/// Number of ranked candidates kept per λ by default.
pub const DEFAULT_TOP_K: usize = 5;

/// Search configuration.
///
/// Every candidate is evaluated with the same Monte Carlo configuration,
/// including the same seed, so candidates are compared on identical draws.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SearchConfig {
    mc: MonteCarloConfig,
    top_k: usize,
}

impl SearchConfig {
    /// Creates a configuration keeping the default number of ranked candidates.
    pub fn new(mc: MonteCarloConfig) -> Self {
        Self {
            mc,
            top_k: DEFAULT_TOP_K,
        }
    }

    /// Sets how many ranked candidates to keep per λ.
    pub fn with_top_k(mut self, top_k: usize) -> Self {
        self.top_k = top_k;
        self
    }

    /// Monte Carlo configuration shared by all candidates.
    #[inline]
    pub fn mc(&self) -> &MonteCarloConfig {
        &self.mc
    }

    /// Number of ranked candidates kept per λ.
    #[inline]
    pub fn top_k(&self) -> usize {
        self.top_k
    }
}

/// Outcome of one λ pass.
#[derive(Clone, Debug, PartialEq)]
pub struct LambdaResult {
    /// Risk-aversion coefficient of this pass.
    pub lambda: f64,
    /// Minimum-score candidate (ties to the earliest enumerated).
    pub best: CandidateScore,
    /// Every strictly improving candidate, in enumeration order.
    pub improvements: Vec<CandidateScore>,
    /// Lowest-scoring candidates, best first.
    pub ranked: Vec<CandidateScore>,
}

/// Outcome of a full search.
#[derive(Clone, Debug, PartialEq)]
pub struct SearchReport {
    /// One result per λ, in the order the λ values were given.
    pub results: Vec<LambdaResult>,
    /// Candidates evaluated per λ.
    pub n_candidates: usize,
    /// Trials per candidate.
    pub n_trials: usize,
    /// Seed shared by every candidate.
    pub seed: u64,
    /// Wall-clock time of the whole search.
    pub elapsed: Duration,
}

/// Risk-adjusted one-stop strategy search.
///
/// Construction validates the race, the tire models and the search space,
/// so a constructed search only fails on evaluation errors.
///
/// # Examples
///
/// ```rust
/// use pitstop_core::types::{Compound, CompoundPair, RaceParams, TireModelSet};
/// use pitstop_engine::mc::MonteCarloConfig;
/// use pitstop_optimiser::search::{SearchConfig, SearchSpace, StrategySearch};
///
/// let params = RaceParams { laps: 10, ..RaceParams::default() };
/// let tires = TireModelSet::default();
/// let space = SearchSpace::new(
///     vec![CompoundPair::new(Compound::Soft, Compound::Soft)],
///     1,
///     9,
///     vec![0.0],
/// );
/// let mc = MonteCarloConfig::builder().n_trials(100).build().unwrap();
///
/// let report = StrategySearch::new(&params, &tires, &space, SearchConfig::new(mc))
///     .unwrap()
///     .run()
///     .unwrap();
///
/// // An even split minimises quadratic wear
/// assert_eq!(report.results[0].best.strategy.pit_lap, 5);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct StrategySearch<'a> {
    params: &'a RaceParams,
    tires: &'a TireModelSet,
    space: &'a SearchSpace,
    config: SearchConfig,
}

impl<'a> StrategySearch<'a> {
    /// Creates a validated search.
    ///
    /// # Errors
    ///
    /// Returns `SearchError` if the race parameters, tire models, Monte Carlo
    /// configuration or search space are invalid.
    pub fn new(
        params: &'a RaceParams,
        tires: &'a TireModelSet,
        space: &'a SearchSpace,
        config: SearchConfig,
    ) -> Result<Self, SearchError> {
        params.validate()?;
        tires.validate()?;
        config.mc.validate()?;
        space.validate(params.laps)?;
        Ok(Self {
            params,
            tires,
            space,
            config,
        })
    }

    /// Runs the search, evaluating candidates one after another.
    ///
    /// # Errors
    ///
    /// Returns `SearchError` if an evaluation fails.
    pub fn run(&self) -> Result<SearchReport, SearchError> {
        let start = Instant::now();
        let evaluated = self.evaluate_candidates()?;
        self.report(&evaluated, start)
    }

    /// Runs the search, evaluating candidates concurrently.
    ///
    /// Each candidate seeds its own generator, so the report is identical to
    /// [`run`](Self::run) apart from timings.
    ///
    /// # Errors
    ///
    /// Returns `SearchError` if an evaluation fails.
    #[cfg(feature = "parallel")]
    pub fn run_parallel(&self) -> Result<SearchReport, SearchError> {
        let start = Instant::now();
        let evaluated = self.evaluate_candidates_parallel()?;
        self.report(&evaluated, start)
    }

    /// Evaluates every candidate sequentially, in enumeration order.
    ///
    /// # Errors
    ///
    /// Returns `SearchError` if an evaluation fails for a reason other than
    /// an invalid strategy.
    pub fn evaluate_candidates(&self) -> Result<Vec<EvaluatedCandidate>, SearchError> {
        info!(
            candidates = self.space.len(),
            n_trials = self.config.mc.n_trials(),
            seed = self.config.mc.seed(),
            "evaluating candidates"
        );
        let evaluated = self
            .space
            .candidates()
            .map(|candidate| self.evaluate_one(candidate))
            .collect::<Result<Vec<_>, _>>()?;
        Self::keep_valid(evaluated)
    }

    /// Evaluates every candidate concurrently; output is in enumeration order.
    ///
    /// # Errors
    ///
    /// Returns `SearchError` if an evaluation fails for a reason other than
    /// an invalid strategy.
    #[cfg(feature = "parallel")]
    pub fn evaluate_candidates_parallel(&self) -> Result<Vec<EvaluatedCandidate>, SearchError> {
        use rayon::prelude::*;

        info!(
            candidates = self.space.len(),
            n_trials = self.config.mc.n_trials(),
            seed = self.config.mc.seed(),
            threads = rayon::current_num_threads(),
            "evaluating candidates in parallel"
        );
        let candidates: Vec<Candidate> = self.space.candidates().collect();
        let evaluated = candidates
            .into_par_iter()
            .map(|candidate| self.evaluate_one(candidate))
            .collect::<Result<Vec<_>, _>>()?;
        Self::keep_valid(evaluated)
    }

    /// Scores all evaluations under one λ and reduces them.
    ///
    /// # Errors
    ///
    /// Returns [`SearchError::NoValidCandidates`] if `evaluated` is empty.
    pub fn score_lambda(
        &self,
        evaluated: &[EvaluatedCandidate],
        lambda: f64,
    ) -> Result<LambdaResult, SearchError> {
        let scores: Vec<CandidateScore> = evaluated
            .iter()
            .map(|e| CandidateScore::new(e, lambda))
            .collect();

        let best = *select_best(&scores).ok_or(SearchError::NoValidCandidates)?;
        let improvements = improvement_log(&scores);
        for step in &improvements {
            debug!(
                lambda,
                strategy = %step.strategy,
                score = step.score,
                mean = step.mean,
                std = step.std,
                "new best"
            );
        }
        info!(
            lambda,
            strategy = %best.strategy,
            score = best.score,
            mean = best.mean,
            std = best.std,
            "best strategy"
        );

        Ok(LambdaResult {
            lambda,
            best,
            improvements,
            ranked: rank(&scores, self.config.top_k),
        })
    }

    fn report(
        &self,
        evaluated: &[EvaluatedCandidate],
        start: Instant,
    ) -> Result<SearchReport, SearchError> {
        // Evaluations do not depend on λ: with a shared seed, re-evaluating per
        // pass would reproduce them exactly.
        let results = self
            .space
            .lambdas
            .iter()
            .map(|&lambda| self.score_lambda(evaluated, lambda))
            .collect::<Result<Vec<_>, _>>()?;

        Ok(SearchReport {
            results,
            n_candidates: evaluated.len(),
            n_trials: self.config.mc.n_trials(),
            seed: self.config.mc.seed(),
            elapsed: start.elapsed(),
        })
    }

    fn evaluate_one(&self, candidate: Candidate) -> Result<Option<EvaluatedCandidate>, SearchError> {
        match evaluate(self.params, self.tires, &candidate.strategy, &self.config.mc) {
            Ok(evaluation) => Ok(Some(EvaluatedCandidate {
                candidate,
                evaluation,
            })),
            Err(EngineError::Strategy(err)) => {
                warn!(strategy = %candidate.strategy, error = %err, "skipping invalid candidate");
                Ok(None)
            }
            Err(err) => Err(err.into()),
        }
    }

    fn keep_valid(
        evaluated: Vec<Option<EvaluatedCandidate>>,
    ) -> Result<Vec<EvaluatedCandidate>, SearchError> {
        let valid: Vec<EvaluatedCandidate> = evaluated.into_iter().flatten().collect();
        if valid.is_empty() {
            return Err(SearchError::NoValidCandidates);
        }
        Ok(valid)
    }
}

/// Finds the best pit lap for a single compound pairing by expected time (λ = 0).
///
/// # Errors
///
/// Returns `SearchError` if the inputs are invalid.
///
/// # Examples
///
/// ```rust
/// use pitstop_core::types::{Compound, CompoundPair, RaceParams, TireModelSet};
/// use pitstop_engine::mc::MonteCarloConfig;
/// use pitstop_optimiser::search::find_best_pit_lap;
///
/// let params = RaceParams::default();
/// let mc = MonteCarloConfig::builder().n_trials(100).seed(999).build().unwrap();
/// let pair = CompoundPair::new(Compound::Medium, Compound::Hard);
///
/// let result = find_best_pit_lap(&params, &TireModelSet::default(), pair, 12, 40, &mc).unwrap();
/// assert_eq!(result.lambda, 0.0);
/// assert!((12..=40).contains(&result.best.strategy.pit_lap));
/// ```
pub fn find_best_pit_lap(
    params: &RaceParams,
    tires: &TireModelSet,
    pair: CompoundPair,
    lap_min: u32,
    lap_max: u32,
    mc: &MonteCarloConfig,
) -> Result<LambdaResult, SearchError> {
    let space = SearchSpace::new(vec![pair], lap_min, lap_max, vec![0.0]);
    let search = StrategySearch::new(params, tires, &space, SearchConfig::new(*mc))?;
    let evaluated = search.evaluate_candidates()?;
    search.score_lambda(&evaluated, 0.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;
    use pitstop_core::types::{Compound, Strategy1Stop, TireModel};
    use pitstop_engine::race::expected_race_time_1stop;

    fn mc(n_trials: usize, seed: u64) -> MonteCarloConfig {
        MonteCarloConfig::builder()
            .n_trials(n_trials)
            .seed(seed)
            .build()
            .unwrap()
    }

    fn ten_lap_race() -> RaceParams {
        RaceParams {
            laps: 10,
            ..RaceParams::default()
        }
    }

    #[test]
    fn test_two_pit_laps_picks_lower_analytic_mean() {
        let params = ten_lap_race();
        let tires = TireModelSet::default();
        let space = SearchSpace::new(
            vec![CompoundPair::new(Compound::Soft, Compound::Soft)],
            4,
            5,
            vec![0.0],
        );
        let search = StrategySearch::new(&params, &tires, &space, SearchConfig::new(mc(1000, 7))).unwrap();
        let report = search.run().unwrap();
        let result = &report.results[0];

        // Soft 5/5 split: 2 × (0.06·10 + 0.002·30) = 1.32 s of wear
        // Soft 4/6 split: 0.388 + 1.01                = 1.398 s of wear
        assert_eq!(result.best.strategy.pit_lap, 5);

        let early = Strategy1Stop::new(4, Compound::Soft, Compound::Soft);
        let even = Strategy1Stop::new(5, Compound::Soft, Compound::Soft);
        let analytic_gap = expected_race_time_1stop(&params, &tires, &early).unwrap()
            - expected_race_time_1stop(&params, &tires, &even).unwrap();
        assert_relative_eq!(analytic_gap, 0.078, epsilon = 1e-9);

        let other = result.ranked.iter().find(|s| s.strategy.pit_lap == 4).unwrap();
        assert_relative_eq!(other.mean - result.best.mean, analytic_gap, epsilon = 1e-6);
    }

    #[test]
    fn test_tie_keeps_first_enumerated() {
        // No noise, no fuel, no wear: every candidate has the same race time
        let params = RaceParams {
            laps: 10,
            noise_sigma: 0.0,
            pit_sigma: 0.0,
            fuel_effect: 0.0,
            ..RaceParams::default()
        };
        let flat = TireModel::new(0.0, 0.0, 0.0);
        let tires = TireModelSet {
            soft: flat,
            medium: flat,
            hard: flat,
        };
        let space = SearchSpace::new(
            vec![
                CompoundPair::new(Compound::Medium, Compound::Hard),
                CompoundPair::new(Compound::Soft, Compound::Medium),
            ],
            3,
            7,
            vec![0.0, 1.0],
        );
        let search = StrategySearch::new(&params, &tires, &space, SearchConfig::new(mc(3, 1))).unwrap();
        let report = search.run().unwrap();

        for result in &report.results {
            assert_eq!(result.best.index, 0);
            assert_eq!(result.best.strategy, Strategy1Stop::new(3, Compound::Medium, Compound::Hard));
            assert_eq!(result.improvements.len(), 1);
        }
    }

    #[test]
    fn test_each_lambda_pass_starts_fresh() {
        let params = RaceParams::default();
        let tires = TireModelSet::default();
        let space = SearchSpace::new(CompoundPair::default_pairs(), 15, 20, vec![0.0, 0.5, 2.0]);
        let search = StrategySearch::new(&params, &tires, &space, SearchConfig::new(mc(50, 123))).unwrap();
        let report = search.run().unwrap();

        assert_eq!(report.results.len(), 3);
        assert_eq!(report.n_candidates, 5 * 6);
        for (result, lambda) in report.results.iter().zip([0.0, 0.5, 2.0]) {
            assert_eq!(result.lambda, lambda);
            assert_eq!(result.improvements[0].index, 0);
            assert_eq!(result.improvements.last().unwrap(), &result.best);
            assert_eq!(result.ranked[0], result.best);
            assert_relative_eq!(result.best.score, result.best.mean + lambda * result.best.std, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_search_deterministic_across_runs() {
        let params = RaceParams::default();
        let tires = TireModelSet::default();
        let space = SearchSpace::new(CompoundPair::default_pairs(), 18, 22, vec![1.0]);
        let search = StrategySearch::new(&params, &tires, &space, SearchConfig::new(mc(100, 5))).unwrap();

        let a = search.run().unwrap();
        let b = search.run().unwrap();
        assert_eq!(a.results[0].best.strategy, b.results[0].best.strategy);
        assert_eq!(a.results[0].best.score.to_bits(), b.results[0].best.score.to_bits());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let params = RaceParams::default();
        let tires = TireModelSet::default();
        let space = SearchSpace::new(CompoundPair::default_pairs(), 10, 30, vec![0.0, 1.0]);
        let search = StrategySearch::new(&params, &tires, &space, SearchConfig::new(mc(40, 11))).unwrap();

        let sequential = search.run().unwrap();
        let parallel = search.run_parallel().unwrap();

        let key = |r: &LambdaResult| -> Vec<(usize, u64, u64)> {
            r.improvements
                .iter()
                .map(|s| (s.index, s.mean.to_bits(), s.std.to_bits()))
                .collect()
        };
        for (s, p) in sequential.results.iter().zip(&parallel.results) {
            assert_eq!(s.best.strategy, p.best.strategy);
            assert_eq!(s.best.score.to_bits(), p.best.score.to_bits());
            assert_eq!(key(s), key(p));
        }
    }

    #[test]
    fn test_new_rejects_invalid_inputs() {
        let params = ten_lap_race();
        let tires = TireModelSet::default();
        let config = SearchConfig::new(mc(10, 1));

        let space = SearchSpace::new(CompoundPair::default_pairs(), 1, 10, vec![0.0]);
        assert!(matches!(
            StrategySearch::new(&params, &tires, &space, config),
            Err(SearchError::InvalidLapRange { .. })
        ));

        let short = RaceParams { laps: 1, ..RaceParams::default() };
        let space = SearchSpace::new(CompoundPair::default_pairs(), 1, 1, vec![0.0]);
        assert!(matches!(
            StrategySearch::new(&short, &tires, &space, config),
            Err(SearchError::Params(_))
        ));
    }

    #[test]
    fn test_top_k_truncates_ranking() {
        let params = RaceParams::default();
        let tires = TireModelSet::default();
        let space = SearchSpace::new(CompoundPair::default_pairs(), 10, 20, vec![0.0]);
        let config = SearchConfig::new(mc(20, 3)).with_top_k(3);
        let report = StrategySearch::new(&params, &tires, &space, config).unwrap().run().unwrap();

        let ranked = &report.results[0].ranked;
        assert_eq!(ranked.len(), 3);
        assert!(ranked.windows(2).all(|w| w[0].score <= w[1].score));
    }

    #[test]
    fn test_find_best_pit_lap_single_pair() {
        let params = ten_lap_race();
        let tires = TireModelSet::default();
        let pair = CompoundPair::new(Compound::Soft, Compound::Soft);

        let result = find_best_pit_lap(&params, &tires, pair, 1, 9, &mc(200, 999)).unwrap();
        assert_eq!(result.best.strategy.pit_lap, 5);
        assert_eq!(result.best.strategy.pair(), pair);
    }

    #[test]
    fn test_score_lambda_empty_is_error() {
        let params = ten_lap_race();
        let tires = TireModelSet::default();
        let space = SearchSpace::new(CompoundPair::default_pairs(), 1, 9, vec![0.0]);
        let search = StrategySearch::new(&params, &tires, &space, SearchConfig::new(mc(1, 1))).unwrap();
        assert_eq!(search.score_lambda(&[], 0.0), Err(SearchError::NoValidCandidates));
    }
}
