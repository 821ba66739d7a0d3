//! Tire degradation models.
//!
//! Lap-time penalty as a function of tire age (laps since the last change):
//!
//! ```text
//! degradation(age) = base + linear·age + quadratic·age²
//! ```

use super::compound::Compound;
use super::error::ParamError;

/// Quadratic tire degradation curve for one compound.
///
/// All coefficients are non-negative seconds (per lap, per lap²).
///
/// # Examples
///
/// ```
/// use pitstop_core::types::TireModel;
///
/// let model = TireModel::new(0.18, 0.045, 0.0012);
/// assert_eq!(model.degradation(0), 0.18);
/// assert!((model.degradation(10) - (0.18 + 0.45 + 0.12)).abs() < 1e-12);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TireModel {
    /// Constant offset of the compound on fresh tires (s).
    pub base: f64,
    /// Linear wear coefficient (s/lap).
    pub linear: f64,
    /// Quadratic wear coefficient (s/lap²).
    pub quadratic: f64,
}

impl TireModel {
    /// Creates a new degradation model.
    #[inline]
    pub const fn new(base: f64, linear: f64, quadratic: f64) -> Self {
        Self {
            base,
            linear,
            quadratic,
        }
    }

    /// Returns the lap-time penalty for a tire of the given age.
    #[inline]
    pub fn degradation(&self, tire_age: u32) -> f64 {
        let age = f64::from(tire_age);
        self.base + self.linear * age + self.quadratic * age * age
    }

    /// Validates that every coefficient is finite and non-negative.
    ///
    /// # Errors
    ///
    /// Returns [`ParamError::InvalidParameter`] naming the first bad coefficient.
    pub fn validate(&self) -> Result<(), ParamError> {
        check_non_negative("base", self.base)?;
        check_non_negative("linear", self.linear)?;
        check_non_negative("quadratic", self.quadratic)?;
        Ok(())
    }
}

/// Degradation curves for every [`Compound`].
///
/// The default table reproduces the reference calibration:
///
/// | Compound | base | linear | quadratic |
/// |----------|------|--------|-----------|
/// | Soft     | 0.00 | 0.060  | 0.0020    |
/// | Medium   | 0.18 | 0.045  | 0.0012    |
/// | Hard     | 0.35 | 0.030  | 0.0008    |
///
/// # Examples
///
/// ```
/// use pitstop_core::types::{Compound, TireModelSet};
///
/// let tires = TireModelSet::default();
/// assert_eq!(tires.model(Compound::Hard).base, 0.35);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TireModelSet {
    /// Soft compound curve.
    pub soft: TireModel,
    /// Medium compound curve.
    pub medium: TireModel,
    /// Hard compound curve.
    pub hard: TireModel,
}

impl TireModelSet {
    /// Default soft compound curve.
    pub const SOFT: TireModel = TireModel::new(0.00, 0.060, 0.0020);
    /// Default medium compound curve.
    pub const MEDIUM: TireModel = TireModel::new(0.18, 0.045, 0.0012);
    /// Default hard compound curve.
    pub const HARD: TireModel = TireModel::new(0.35, 0.030, 0.0008);

    /// Looks up the degradation curve for a compound.
    #[inline]
    pub fn model(&self, compound: Compound) -> &TireModel {
        match compound {
            Compound::Soft => &self.soft,
            Compound::Medium => &self.medium,
            Compound::Hard => &self.hard,
        }
    }

    /// Validates every curve in the set.
    ///
    /// # Errors
    ///
    /// Returns the first [`ParamError`] found, checking soft, medium, then hard.
    pub fn validate(&self) -> Result<(), ParamError> {
        for compound in Compound::ALL {
            self.model(compound).validate()?;
        }
        Ok(())
    }
}

impl Default for TireModelSet {
    fn default() -> Self {
        Self {
            soft: Self::SOFT,
            medium: Self::MEDIUM,
            hard: Self::HARD,
        }
    }
}

pub(crate) fn check_non_negative(name: &'static str, value: f64) -> Result<(), ParamError> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(ParamError::InvalidParameter { name, value })
    }
}
