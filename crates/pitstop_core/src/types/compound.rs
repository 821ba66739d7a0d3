//! Tire compound types.
//!
//! This module provides [`Compound`], the closed set of dry-weather tire
//! compounds available to a one-stop strategy.

use std::fmt;
use std::str::FromStr;

use super::error::CompoundError;

/// Dry-weather tire compound.
///
/// The variant set is closed: each compound maps to exactly one
/// [`TireModel`](super::TireModel) through [`TireModelSet`](super::TireModelSet).
///
/// # Examples
///
/// ```
/// use pitstop_core::types::Compound;
///
/// assert_eq!(Compound::Soft.code(), "S");
///
/// // Parse from code or name (case-insensitive)
/// let medium: Compound = "medium".parse().unwrap();
/// assert_eq!(medium, Compound::Medium);
/// let hard: Compound = "h".parse().unwrap();
/// assert_eq!(hard, Compound::Hard);
/// ```
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Compound {
    /// Softest compound: fastest when new, degrades quickest.
    Soft,
    /// Middle compound.
    Medium,
    /// Hardest compound: slowest when new, most durable.
    Hard,
}

impl Compound {
    /// All compounds in softest-to-hardest order.
    pub const ALL: [Compound; 3] = [Compound::Soft, Compound::Medium, Compound::Hard];

    /// Returns the single-letter code used in strategy labels.
    pub fn code(&self) -> &'static str {
        match self {
            Compound::Soft => "S",
            Compound::Medium => "M",
            Compound::Hard => "H",
        }
    }

    /// Returns the full lowercase compound name.
    pub fn name(&self) -> &'static str {
        match self {
            Compound::Soft => "soft",
            Compound::Medium => "medium",
            Compound::Hard => "hard",
        }
    }
}

impl FromStr for Compound {
    type Err = CompoundError;

    /// Parses a compound code (`S`, `M`, `H`) or name, case-insensitive.
    fn from_str(s: &str) -> Result<Self, CompoundError> {
        match s.trim().to_lowercase().as_str() {
            "s" | "soft" => Ok(Compound::Soft),
            "m" | "medium" => Ok(Compound::Medium),
            "h" | "hard" => Ok(Compound::Hard),
            _ => Err(CompoundError::UnknownCompound(s.to_string())),
        }
    }
}

impl fmt::Display for Compound {
    /// Formats as the single-letter code.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
