//! # pitstop_engine (Layer 2: Simulation Engine)
//!
//! ## Layer 2 Role
//!
//! pitstop_engine turns the Layer 1 race description into race times:
//! - [`lap`]: Lap-Time Model (fuel, degradation and noise for one lap)
//! - [`race`]: Race Simulator (pit stop draw plus two stints for one trial)
//! - [`mc`]: Monte Carlo Aggregator (N seeded trials reduced to mean and std)
//! - [`rng`]: Seeded random number generation passed explicitly to every draw
//!
//! ## Usage Example
//!
//! ```rust
//! use pitstop_core::types::{Compound, RaceParams, Strategy1Stop, TireModelSet};
//! use pitstop_engine::mc::{evaluate, MonteCarloConfig};
//!
//! let params = RaceParams::default();
//! let tires = TireModelSet::default();
//! let strategy = Strategy1Stop::new(20, Compound::Soft, Compound::Medium);
//!
//! let config = MonteCarloConfig::builder()
//!     .n_trials(200)
//!     .seed(123)
//!     .build()
//!     .unwrap();
//!
//! let evaluation = evaluate(&params, &tires, &strategy, &config).unwrap();
//! assert!(evaluation.mean > 0.0);
//! assert!(evaluation.std > 0.0);
//! ```

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]

pub mod lap;
pub mod mc;
pub mod race;
pub mod rng;

pub use mc::{evaluate, EngineError, Evaluation, MonteCarloConfig};
pub use race::simulate_race_1stop;
pub use rng::SimRng;
