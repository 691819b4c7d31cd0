//! Errors from the optional configuration and calibration checks.

use thiserror::Error;

/// Rejected threshold configuration.
///
/// Only returned by [`Thresholds::validated`](crate::Thresholds::validated);
/// the plain constructors and setters accept anything.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    #[error("{name} threshold {value} is outside [0, 1]")]
    OutOfRange { name: &'static str, value: f32 },

    #[error("white threshold {white} is above black threshold {black}")]
    Inverted { white: f32, black: f32 },
}

/// Calibration could not produce a usable range.
///
/// Returned by [`Calibrated::finish`](crate::Calibrated::finish).
#[derive(Error, Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CalibrationError {
    /// Calibration saw no spread between darkest and brightest reading.
    #[error("no usable calibration range (min {min}, max {max})")]
    NoRange { min: f32, max: f32 },
}
