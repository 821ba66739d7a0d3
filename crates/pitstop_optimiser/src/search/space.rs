//! Candidate space enumeration.

use pitstop_core::types::{CompoundPair, Strategy1Stop};

use crate::SearchError;

/// One enumerated strategy and its position in the enumeration.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Candidate {
    /// Enumeration index; the deterministic tie-break priority.
    pub index: usize,
    /// The strategy to evaluate.
    pub strategy: Strategy1Stop,
}

/// Cartesian product of compound pairs, an inclusive pit-lap range and a set
/// of risk-aversion coefficients.
///
/// Candidates are enumerated pair-major with pit laps ascending, in the order
/// the pairs were given.
///
/// # Examples
///
/// ```rust
/// use pitstop_core::types::{Compound, CompoundPair};
/// use pitstop_optimiser::search::SearchSpace;
///
/// let space = SearchSpace::new(
///     vec![
///         CompoundPair::new(Compound::Soft, Compound::Medium),
///         CompoundPair::new(Compound::Medium, Compound::Hard),
///     ],
///     10,
///     12,
///     vec![0.0],
/// );
/// let labels: Vec<String> = space.candidates().map(|c| c.strategy.label()).collect();
/// assert_eq!(labels[0], "1-stop S->M @L10");
/// assert_eq!(labels[3], "1-stop M->H @L10");
/// assert_eq!(space.len(), 6);
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct SearchSpace {
    /// Compound pairings, in enumeration order.
    pub pairs: Vec<CompoundPair>,
    /// Lowest pit lap searched (inclusive).
    pub lap_min: u32,
    /// Highest pit lap searched (inclusive).
    pub lap_max: u32,
    /// Risk-aversion coefficients, one independent pass each.
    pub lambdas: Vec<f64>,
}

impl Default for SearchSpace {
    /// S→M, S→H, M→H, H→M, M→M over laps 10..=40 with λ ∈ {0, 0.5, 1, 2}.
    fn default() -> Self {
        Self {
            pairs: CompoundPair::default_pairs(),
            lap_min: 10,
            lap_max: 40,
            lambdas: vec![0.0, 0.5, 1.0, 2.0],
        }
    }
}

impl SearchSpace {
    /// Creates a new search space.
    pub fn new(pairs: Vec<CompoundPair>, lap_min: u32, lap_max: u32, lambdas: Vec<f64>) -> Self {
        Self {
            pairs,
            lap_min,
            lap_max,
            lambdas,
        }
    }

    /// Checks the space against a race of `laps` laps.
    ///
    /// # Errors
    ///
    /// - [`SearchError::InvalidLapRange`] unless `1 <= lap_min <= lap_max < laps`
    /// - [`SearchError::NoPairs`] / [`SearchError::NoLambdas`] for empty sets
    /// - [`SearchError::InvalidLambda`] for a negative or non-finite λ
    pub fn validate(&self, laps: u32) -> Result<(), SearchError> {
        if self.lap_min < 1 || self.lap_min > self.lap_max || self.lap_max >= laps {
            return Err(SearchError::InvalidLapRange {
                lap_min: self.lap_min,
                lap_max: self.lap_max,
                laps,
            });
        }
        if self.pairs.is_empty() {
            return Err(SearchError::NoPairs);
        }
        if self.lambdas.is_empty() {
            return Err(SearchError::NoLambdas);
        }
        if let Some(&bad) = self.lambdas.iter().find(|l| !(l.is_finite() && **l >= 0.0)) {
            return Err(SearchError::InvalidLambda(bad));
        }
        Ok(())
    }

    /// Enumerates every (pair, pit lap) candidate with its index.
    pub fn candidates(&self) -> impl Iterator<Item = Candidate> + '_ {
        self.pairs
            .iter()
            .flat_map(move |pair| (self.lap_min..=self.lap_max).map(move |lap| pair.at_lap(lap)))
            .enumerate()
            .map(|(index, strategy)| Candidate { index, strategy })
    }

    /// Number of candidates per λ pass.
    pub fn len(&self) -> usize {
        if self.lap_min > self.lap_max {
            return 0;
        }
        self.pairs.len() * ((self.lap_max - self.lap_min) as usize + 1)
    }

    /// Returns `true` if there is nothing to enumerate.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pitstop_core::types::Compound;

    fn single_pair_space(lap_min: u32, lap_max: u32) -> SearchSpace {
        SearchSpace::new(
            vec![CompoundPair::new(Compound::Soft, Compound::Hard)],
            lap_min,
            lap_max,
            vec![0.0],
        )
    }

    #[test]
    fn test_default_space() {
        let space = SearchSpace::default();
        assert_eq!(space.len(), 5 * 31);
        assert_eq!(space.candidates().count(), space.len());
        assert!(space.validate(52).is_ok());
    }

    #[test]
    fn test_enumeration_order_pair_major() {
        let space = SearchSpace::new(
            vec![
                CompoundPair::new(Compound::Soft, Compound::Medium),
                CompoundPair::new(Compound::Hard, Compound::Medium),
            ],
            3,
            4,
            vec![0.0],
        );
        let got: Vec<(usize, u32, Compound)> = space
            .candidates()
            .map(|c| (c.index, c.strategy.pit_lap, c.strategy.first))
            .collect();
        assert_eq!(
            got,
            vec![
                (0, 3, Compound::Soft),
                (1, 4, Compound::Soft),
                (2, 3, Compound::Hard),
                (3, 4, Compound::Hard),
            ]
        );
    }

    #[test]
    fn test_validate_boundary_range_accepted() {
        assert!(single_pair_space(1, 9).validate(10).is_ok());
        assert!(single_pair_space(5, 5).validate(10).is_ok());
    }

    #[test]
    fn test_validate_lap_min_zero() {
        assert!(matches!(
            single_pair_space(0, 5).validate(10),
            Err(SearchError::InvalidLapRange { lap_min: 0, .. })
        ));
    }

    #[test]
    fn test_validate_lap_max_at_race_length() {
        assert!(matches!(
            single_pair_space(1, 10).validate(10),
            Err(SearchError::InvalidLapRange { lap_max: 10, .. })
        ));
    }

    #[test]
    fn test_validate_inverted_range() {
        let space = single_pair_space(7, 6);
        assert!(space.validate(10).is_err());
        assert!(space.is_empty());
        assert_eq!(space.candidates().count(), 0);
    }

    #[test]
    fn test_full_u32_lap_range() {
        let space = single_pair_space(0, u32::MAX);
        assert_eq!(space.len(), u32::MAX as usize + 1);
        assert!(!space.is_empty());
        assert!(matches!(
            space.validate(52),
            Err(SearchError::InvalidLapRange { lap_min: 0, lap_max: u32::MAX, laps: 52 })
        ));
    }

    #[test]
    fn test_validate_empty_sets() {
        let mut space = single_pair_space(1, 5);
        space.lambdas.clear();
        assert_eq!(space.validate(10), Err(SearchError::NoLambdas));

        let mut space = single_pair_space(1, 5);
        space.pairs.clear();
        assert_eq!(space.validate(10), Err(SearchError::NoPairs));
    }

    #[test]
    fn test_validate_bad_lambda() {
        let mut space = single_pair_space(1, 5);
        space.lambdas = vec![0.0, -0.5];
        assert_eq!(space.validate(10), Err(SearchError::InvalidLambda(-0.5)));

        space.lambdas = vec![f64::INFINITY];
        assert!(matches!(space.validate(10), Err(SearchError::InvalidLambda(_))));
    }
}
