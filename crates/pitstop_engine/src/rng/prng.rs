//! Pseudo-random number generator wrapper for race simulation.

use rand::rngs::StdRng;
use rand::SeedableRng;
use rand_distr::{Distribution, StandardNormal};

/// Seeded generator for race simulation.
///
/// Wraps `rand::StdRng` and samples normals with the Ziggurat method
/// (`rand_distr::StandardNormal`).
///
/// # Examples
///
/// ```rust
/// use pitstop_engine::rng::SimRng;
///
/// let mut rng1 = SimRng::from_seed(42);
/// let mut rng2 = SimRng::from_seed(42);
///
/// // Same seed produces identical sequences
/// assert_eq!(rng1.gen_normal(), rng2.gen_normal());
/// assert_eq!(rng1.seed(), 42);
/// ```
#[derive(Clone, Debug)]
pub struct SimRng {
    inner: StdRng,
    /// The seed used for initialisation (stored for reproducibility tracking).
    seed: u64,
}

impl SimRng {
    /// Creates a new generator initialised with the given seed.
    #[inline]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: StdRng::seed_from_u64(seed),
            seed,
        }
    }

    /// Returns the seed used for initialisation.
    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Draws a standard normal variate (mean=0, std=1).
    #[inline]
    pub fn gen_normal(&mut self) -> f64 {
        StandardNormal.sample(&mut self.inner)
    }

    /// Draws from `Normal(mean, std_dev)`.
    ///
    /// Exactly one underlying draw is consumed, also when `std_dev` is zero,
    /// so the position in the sequence does not depend on the parameters.
    #[inline]
    pub fn gen_gaussian(&mut self, mean: f64, std_dev: f64) -> f64 {
        mean + std_dev * self.gen_normal()
    }
}
