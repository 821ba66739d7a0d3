//! Race-level constants.

use super::error::ParamError;
use super::tire::check_non_negative;

/// Race constants shared by every simulated trial.
///
/// All time-scale fields are in seconds and must be finite and non-negative;
/// `laps` must be at least 2 so that a single stop leaves both stints non-empty.
///
/// # Examples
///
/// ```
/// use pitstop_core::types::RaceParams;
///
/// let params = RaceParams {
///     laps: 4,
///     noise_sigma: 0.0,
///     pit_sigma: 0.0,
///     ..RaceParams::default()
/// };
/// assert!(params.validate().is_ok());
/// assert!(params.is_valid_pit_lap(3));
/// assert!(!params.is_valid_pit_lap(4));
/// ```
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RaceParams {
    /// Track name (cosmetic only).
    pub track: String,
    /// Race distance in laps.
    pub laps: u32,
    /// Lap time on fresh reference tires with a full tank (s).
    pub base_lap_time: f64,
    /// Mean time lost to a pit stop (s).
    pub pit_loss: f64,
    /// Standard deviation of the pit stop time loss (s).
    pub pit_sigma: f64,
    /// Lap-time gain per lap of fuel burnt (s/lap).
    pub fuel_effect: f64,
    /// Standard deviation of per-lap noise (s).
    pub noise_sigma: f64,
}

impl Default for RaceParams {
    fn default() -> Self {
        Self {
            track: "Silverstone".to_string(),
            laps: 52,
            base_lap_time: 90.0,
            pit_loss: 22.0,
            pit_sigma: 0.60,
            fuel_effect: 0.030,
            noise_sigma: 0.35,
        }
    }
}

impl RaceParams {
    /// Validates the race constants.
    ///
    /// # Errors
    ///
    /// Returns `ParamError` if:
    /// - `laps` is less than 2
    /// - any time-scale parameter is negative, NaN or infinite
    pub fn validate(&self) -> Result<(), ParamError> {
        if self.laps < 2 {
            return Err(ParamError::InvalidLapCount(self.laps));
        }
        check_non_negative("base_lap_time", self.base_lap_time)?;
        check_non_negative("pit_loss", self.pit_loss)?;
        check_non_negative("pit_sigma", self.pit_sigma)?;
        check_non_negative("fuel_effect", self.fuel_effect)?;
        check_non_negative("noise_sigma", self.noise_sigma)?;
        Ok(())
    }

    /// Returns `true` if a stop after `pit_lap` leaves both stints non-empty.
    #[inline]
    pub fn is_valid_pit_lap(&self, pit_lap: u32) -> bool {
        pit_lap >= 1 && pit_lap < self.laps
    }
}
