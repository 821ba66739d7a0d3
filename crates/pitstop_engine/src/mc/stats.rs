//! Sample statistics over trial outcomes.

/// Sample mean and unbiased standard deviation of a set of race times.
///
/// The standard deviation uses the `N − 1` denominator. For a single sample
/// the denominator falls back to 1, giving a standard deviation of 0.
///
/// # Examples
///
/// ```rust
/// use pitstop_engine::mc::SampleStats;
///
/// let stats = SampleStats::from_samples(&[1.0, 2.0, 3.0, 4.0]);
/// assert_eq!(stats.mean, 2.5);
/// assert!((stats.std - (5.0f64 / 3.0).sqrt()).abs() < 1e-12);
///
/// let single = SampleStats::from_samples(&[7.0]);
/// assert_eq!(single.std, 0.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SampleStats {
    /// Sample mean.
    pub mean: f64,
    /// Unbiased sample standard deviation.
    pub std: f64,
}

impl SampleStats {
    /// Computes mean and standard deviation.
    ///
    /// An empty slice yields NaN for both fields; callers validate the trial
    /// count before collecting samples.
    pub fn from_samples(samples: &[f64]) -> Self {
        let n = samples.len();
        let mean = samples.iter().sum::<f64>() / n as f64;
        let sum_sq: f64 = samples.iter().map(|x| (x - mean) * (x - mean)).sum();
        let denom = if n > 1 { n - 1 } else { 1 };
        Self {
            mean,
            std: (sum_sq / denom as f64).sqrt(),
        }
    }

    /// Risk-adjusted score `mean + lambda·std`.
    #[inline]
    pub fn score(&self, lambda: f64) -> f64 {
        self.mean + lambda * self.std
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_constant_samples_have_zero_std() {
        let stats = SampleStats::from_samples(&[5.0; 10]);
        assert_eq!(stats.mean, 5.0);
        assert_eq!(stats.std, 0.0);
    }

    #[test]
    fn test_unbiased_denominator() {
        let stats = SampleStats::from_samples(&[2.0, 4.0]);
        // mean 3, squared deviations 1 + 1, / (2 - 1)
        assert_relative_eq!(stats.std, 2.0f64.sqrt(), epsilon = 1e-12);
    }

    #[test]
    fn test_single_sample() {
        let stats = SampleStats::from_samples(&[381.5]);
        assert_eq!(stats.mean, 381.5);
        assert_eq!(stats.std, 0.0);
    }

    #[test]
    fn test_score() {
        let stats = SampleStats {
            mean: 100.0,
            std: 2.0,
        };
        assert_eq!(stats.score(0.0), 100.0);
        assert_eq!(stats.score(1.5), 103.0);
    }
}
