//! Risk-adjusted scoring and order-independent selection.

use std::cmp::Ordering;
use std::time::Duration;

use pitstop_core::types::Strategy1Stop;
use pitstop_engine::mc::Evaluation;

use super::space::Candidate;

/// A candidate together with its Monte Carlo evaluation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct EvaluatedCandidate {
    /// The enumerated candidate.
    pub candidate: Candidate,
    /// Mean, std and timing of its evaluation.
    pub evaluation: Evaluation,
}

/// A candidate scored under one risk-aversion coefficient.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CandidateScore {
    /// Enumeration index of the candidate.
    pub index: usize,
    /// The strategy.
    pub strategy: Strategy1Stop,
    /// Risk-aversion coefficient used for `score`.
    pub lambda: f64,
    /// `mean + lambda·std`.
    pub score: f64,
    /// Mean race time (s).
    pub mean: f64,
    /// Standard deviation of race time (s).
    pub std: f64,
    /// Wall-clock time of the evaluation.
    pub elapsed: Duration,
}

impl CandidateScore {
    /// Scores an evaluated candidate: `score = mean + lambda·std`.
    pub fn new(evaluated: &EvaluatedCandidate, lambda: f64) -> Self {
        let evaluation = &evaluated.evaluation;
        Self {
            index: evaluated.candidate.index,
            strategy: evaluated.candidate.strategy,
            lambda,
            score: evaluation.score(lambda),
            mean: evaluation.mean,
            std: evaluation.std,
            elapsed: evaluation.elapsed,
        }
    }

    /// Strategy label, e.g. `1-stop S->M @L18`.
    pub fn label(&self) -> String {
        self.strategy.label()
    }
}

/// Total order used for selection: score ascending, then enumeration index.
#[inline]
fn by_score_then_index(a: &CandidateScore, b: &CandidateScore) -> Ordering {
    a.score.total_cmp(&b.score).then(a.index.cmp(&b.index))
}

/// Returns the best candidate: the minimum score, ties to the lowest index.
///
/// The result does not depend on the order of `scores`.
pub fn select_best(scores: &[CandidateScore]) -> Option<&CandidateScore> {
    scores.iter().min_by(|a, b| by_score_then_index(a, b))
}

/// Every candidate that strictly improved on the running best, in
/// enumeration order. The last entry is the best candidate.
///
/// Equal scores do not replace the incumbent.
pub fn improvement_log(scores: &[CandidateScore]) -> Vec<CandidateScore> {
    let mut ordered: Vec<&CandidateScore> = scores.iter().collect();
    ordered.sort_by_key(|s| s.index);

    let mut log: Vec<CandidateScore> = Vec::new();
    for score in ordered {
        let improves = match log.last() {
            Some(best) => score.score.total_cmp(&best.score).is_lt(),
            None => true,
        };
        if improves {
            log.push(*score);
        }
    }
    log
}

/// The `top_k` lowest-scoring candidates, best first.
pub fn rank(scores: &[CandidateScore], top_k: usize) -> Vec<CandidateScore> {
    let mut ranked = scores.to_vec();
    ranked.sort_by(by_score_then_index);
    ranked.truncate(top_k);
    ranked
}
