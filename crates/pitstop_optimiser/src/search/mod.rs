//! One-stop strategy search.
//!
//! The search is decomposed into independent steps:
//!
//! ```text
//! SearchSpace::candidates()      enumeration  (pair × pit lap, indexed)
//!        │
//!        ▼
//! evaluate()                     Monte Carlo, same seed for every candidate
//!        │
//!        ▼
//! CandidateScore::new(.., λ)     score = mean + λ·std, for every λ
//!        │
//!        ▼
//! select_best() / improvement_log() / rank()
//! ```
//!
//! Selection is an order-independent minimum over `(score, index)`: the
//! lowest score wins and equal scores keep the earliest enumerated candidate.
//! Evaluation order (sequential or parallel) therefore never changes the
//! outcome.

mod runner;
mod score;
mod space;

pub use runner::{
    find_best_pit_lap, LambdaResult, SearchConfig, SearchReport, StrategySearch, DEFAULT_TOP_K,
};
pub use score::{improvement_log, rank, select_best, CandidateScore, EvaluatedCandidate};
pub use space::{Candidate, SearchSpace};
