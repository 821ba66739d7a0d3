//! # pitstop_optimiser
//!
//! Risk-adjusted strategy search for the pit strategy simulator.
//!
//! This crate sits on top of the simulation engine (L2), searching the
//! candidate space of compound pairings and pit laps for the strategy that
//! minimises `score = mean + λ·std`.
//!
//! ## Architecture Position
//!
//! Layer 3 of the pitstop workspace.
//! Depends on `pitstop_core` (L1) and `pitstop_engine` (L2).
//!
//! ## Modules
//!
//! - `search`: Candidate enumeration, evaluation, scoring and per-λ reduction
//! - `compare`: Side-by-side evaluation of a fixed list of strategies
//!
//! ## Example
//!
//! ```rust
//! use pitstop_core::types::{Compound, CompoundPair, RaceParams, TireModelSet};
//! use pitstop_engine::mc::MonteCarloConfig;
//! use pitstop_optimiser::search::{SearchConfig, SearchSpace, StrategySearch};
//!
//! let params = RaceParams::default();
//! let tires = TireModelSet::default();
//! let space = SearchSpace::new(
//!     vec![CompoundPair::new(Compound::Soft, Compound::Medium)],
//!     15,
//!     25,
//!     vec![0.0, 1.0],
//! );
//! let mc = MonteCarloConfig::builder().n_trials(200).seed(123).build().unwrap();
//!
//! let search = StrategySearch::new(&params, &tires, &space, SearchConfig::new(mc)).unwrap();
//! let report = search.run().unwrap();
//! assert_eq!(report.results.len(), 2);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel` (default): Evaluate candidates concurrently with rayon

pub mod compare;
pub mod search;

mod error;

pub use error::SearchError;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::compare::*;
    pub use crate::search::*;
    pub use crate::SearchError;
}
