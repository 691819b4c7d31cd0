//! Surface classification from the mean reading.
//!
//! Readings increase from white to black. A mean strictly below the white
//! threshold is white, strictly above the black threshold is black, and
//! anything in between (thresholds included) is a line.

use crate::error::ConfigError;

/// Default white threshold.
pub const DEFAULT_WHITE: f32 = 0.1;
/// Default black threshold.
pub const DEFAULT_BLACK: f32 = 0.9;
/// Default single line-detection threshold.
pub const DEFAULT_LINE: f32 = 0.5;

/// What the array is currently looking at.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SurfaceState {
    OnWhite,
    OnLine,
    OnBlack,
    /// No sample taken yet.
    #[default]
    OnUnknown,
}

/// Classification thresholds, in normalized reading units.
///
/// `white` and `black` bound the line band used by [`classify`](Self::classify).
/// `line` is the separate single-threshold test behind [`Qtr8a::on_line`].
///
/// [`Qtr8a::on_line`]: crate::Qtr8a::on_line
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Thresholds {
    pub white: f32,
    pub black: f32,
    pub line: f32,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self::new(DEFAULT_WHITE, DEFAULT_BLACK)
    }
}

impl Thresholds {
    /// Unchecked pair with the default line threshold of 0.5.
    /// An inverted pair is accepted as-is.
    pub const fn new(white: f32, black: f32) -> Self {
        Self {
            white,
            black,
            line: DEFAULT_LINE,
        }
    }

    /// Single-threshold configuration: `line` everywhere, so the mid-band
    /// has zero width.
    ///
    /// `mean > line` classifies black (and [`Qtr8a::on_line`] is true),
    /// `mean < line` white, and only `mean == line` lands on `OnLine`.
    ///
    /// [`Qtr8a::on_line`]: crate::Qtr8a::on_line
    pub const fn single(line: f32) -> Self {
        Self {
            white: line,
            black: line,
            line,
        }
    }

    /// Checked pair: both values finite and in [0, 1], `white <= black`.
    pub fn validated(white: f32, black: f32) -> Result<Self, ConfigError> {
        check_range("white", white)?;
        check_range("black", black)?;
        if white > black {
            return Err(ConfigError::Inverted { white, black });
        }
        Ok(Self::new(white, black))
    }

    /// Classify a mean reading. White is tested before black.
    pub fn classify(&self, mean: f32) -> SurfaceState {
        if mean < self.white {
            SurfaceState::OnWhite
        } else if mean > self.black {
            SurfaceState::OnBlack
        } else {
            SurfaceState::OnLine
        }
    }
}

fn check_range(name: &'static str, value: f32) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { name, value })
    }
}
