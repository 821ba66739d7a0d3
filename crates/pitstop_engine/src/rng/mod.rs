//! # Random Number Generation
//!
//! Seeded random number generation for race simulation.
//!
//! The generator is always an explicit handle (`&mut SimRng`) threaded through
//! every function that draws; there is no global generator. The same seed
//! reproduces the same sequence of draws, which makes whole Monte Carlo
//! evaluations bit-reproducible.
//!
//! ## Usage Example
//!
//! ```rust
//! use pitstop_engine::rng::SimRng;
//!
//! let mut rng = SimRng::from_seed(12345);
//!
//! // Standard normal variate (mean=0, std=1)
//! let z = rng.gen_normal();
//!
//! // Normal variate with given mean and standard deviation
//! let pit = rng.gen_gaussian(22.0, 0.6);
//! # let _ = (z, pit);
//! ```

mod prng;

pub use prng::SimRng;
