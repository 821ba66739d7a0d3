//! One-stop strategy candidates.
//!
//! A [`Strategy1Stop`] pits once, after `pit_lap`, switching from the `first`
//! compound to the `second`. A [`CompoundPair`] is the compound part of a
//! strategy without a pit lap, used to describe a search space.

use std::fmt;
use std::str::FromStr;

use super::compound::Compound;
use super::error::{CompoundError, StrategyError};

/// Ordered compound pairing: stint 1 compound, then stint 2 compound.
///
/// Parses from `"S-M"`, `"S->M"` or `"soft-medium"`.
///
/// # Examples
///
/// ```
/// use pitstop_core::types::{Compound, CompoundPair};
///
/// let pair: CompoundPair = "S-M".parse().unwrap();
/// assert_eq!(pair, CompoundPair::new(Compound::Soft, Compound::Medium));
/// assert_eq!(pair.to_string(), "S->M");
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct CompoundPair {
    /// Stint 1 compound.
    pub first: Compound,
    /// Stint 2 compound.
    pub second: Compound,
}

impl CompoundPair {
    /// Creates a new pair.
    #[inline]
    pub const fn new(first: Compound, second: Compound) -> Self {
        Self { first, second }
    }

    /// Builds the strategy that pits after `pit_lap` with this pairing.
    #[inline]
    pub fn at_lap(&self, pit_lap: u32) -> Strategy1Stop {
        Strategy1Stop::new(pit_lap, self.first, self.second)
    }

    /// The default candidate pairings: S→M, S→H, M→H, H→M, M→M.
    pub fn default_pairs() -> Vec<CompoundPair> {
        vec![
            CompoundPair::new(Compound::Soft, Compound::Medium),
            CompoundPair::new(Compound::Soft, Compound::Hard),
            CompoundPair::new(Compound::Medium, Compound::Hard),
            CompoundPair::new(Compound::Hard, Compound::Medium),
            CompoundPair::new(Compound::Medium, Compound::Medium),
        ]
    }
}

impl FromStr for CompoundPair {
    type Err = CompoundError;

    fn from_str(s: &str) -> Result<Self, CompoundError> {
        let normalised = s.replace("->", "-");
        let (first, second) = normalised
            .split_once('-')
            .ok_or_else(|| CompoundError::Malformed(s.to_string()))?;
        Ok(Self::new(first.parse()?, second.parse()?))
    }
}

impl fmt::Display for CompoundPair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}->{}", self.first, self.second)
    }
}

/// A single-stop strategy candidate.
///
/// `pit_lap` is 1-indexed: stint 1 covers laps `1..=pit_lap` and stint 2
/// covers `pit_lap + 1..=laps`. The strategy is valid for a race of `laps`
/// laps iff `1 <= pit_lap < laps`.
///
/// Parses from `"S-M@18"`.
///
/// # Examples
///
/// ```
/// use pitstop_core::types::{Compound, Strategy1Stop, StrategyError};
///
/// let strategy: Strategy1Stop = "M-H@24".parse().unwrap();
/// assert_eq!(strategy, Strategy1Stop::new(24, Compound::Medium, Compound::Hard));
/// assert_eq!(strategy.label(), "1-stop M->H @L24");
///
/// assert!(strategy.validate(52).is_ok());
/// assert_eq!(
///     strategy.validate(24),
///     Err(StrategyError::InvalidPitLap { pit_lap: 24, laps: 24 })
/// );
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Strategy1Stop {
    /// Lap after which the car pits (1-indexed).
    pub pit_lap: u32,
    /// Stint 1 compound.
    pub first: Compound,
    /// Stint 2 compound.
    pub second: Compound,
}

impl Strategy1Stop {
    /// Creates a new strategy.
    #[inline]
    pub const fn new(pit_lap: u32, first: Compound, second: Compound) -> Self {
        Self {
            pit_lap,
            first,
            second,
        }
    }

    /// Returns the compound pairing of this strategy.
    #[inline]
    pub fn pair(&self) -> CompoundPair {
        CompoundPair::new(self.first, self.second)
    }

    /// Checks that the pit lap lies in `[1, laps)`.
    ///
    /// # Errors
    ///
    /// Returns [`StrategyError::InvalidPitLap`] otherwise.
    pub fn validate(&self, laps: u32) -> Result<(), StrategyError> {
        if self.pit_lap >= 1 && self.pit_lap < laps {
            Ok(())
        } else {
            Err(StrategyError::InvalidPitLap {
                pit_lap: self.pit_lap,
                laps,
            })
        }
    }

    /// Human-readable label, e.g. `1-stop S->M @L18`.
    pub fn label(&self) -> String {
        format!("1-stop {} @L{}", self.pair(), self.pit_lap)
    }
}

impl FromStr for Strategy1Stop {
    type Err = CompoundError;

    fn from_str(s: &str) -> Result<Self, CompoundError> {
        let (pair, lap) = s
            .split_once('@')
            .ok_or_else(|| CompoundError::Malformed(s.to_string()))?;
        let pair: CompoundPair = pair.parse()?;
        let lap = lap.trim().trim_start_matches(['L', 'l']);
        let pit_lap = lap
            .parse::<u32>()
            .map_err(|_| CompoundError::Malformed(s.to_string()))?;
        Ok(pair.at_lap(pit_lap))
    }
}

impl fmt::Display for Strategy1Stop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label())
    }
}
