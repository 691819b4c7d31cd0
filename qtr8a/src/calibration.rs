//! Per-channel min/max calibration.
//!
//! Sweep the array over both surfaces while calibrating, then every read is
//! rescaled so the darkest value seen maps to 1.0 and the brightest to 0.0.

use crate::channel::AnalogIn;
use crate::error::CalibrationError;

/// Channel wrapper that learns its raw range, then rescales into it.
pub struct Calibrated<C> {
    channel: C,
    min: f32,
    max: f32,
    calibrating: bool,
}

impl<C: AnalogIn> Calibrated<C> {
    /// Start in calibrating mode with an empty range.
    pub fn new(channel: C) -> Self {
        Self {
            channel,
            min: f32::INFINITY,
            max: f32::NEG_INFINITY,
            calibrating: true,
        }
    }

    /// Forget the learned range and start calibrating again.
    pub fn reset(&mut self) {
        self.min = f32::INFINITY;
        self.max = f32::NEG_INFINITY;
        self.calibrating = true;
    }

    /// Stop calibrating and return the learned `(min, max)`.
    ///
    /// A range with no spread leaves the channel in calibrating
    /// (pass-through) mode.
    pub fn finish(&mut self) -> Result<(f32, f32), CalibrationError> {
        if !(self.max > self.min) {
            return Err(CalibrationError::NoRange {
                min: self.min,
                max: self.max,
            });
        }
        self.calibrating = false;
        debug!("calibration range [{}, {}]", self.min, self.max);
        Ok((self.min, self.max))
    }

    pub fn is_calibrating(&self) -> bool {
        self.calibrating
    }

    /// The range recorded so far, if any reading has been seen.
    pub fn bounds(&self) -> Option<(f32, f32)> {
        if self.min <= self.max {
            Some((self.min, self.max))
        } else {
            None
        }
    }

    pub fn into_inner(self) -> C {
        self.channel
    }
}

impl<C: AnalogIn> AnalogIn for Calibrated<C> {
    fn read(&mut self) -> f32 {
        let raw = self.channel.read();
        if self.calibrating {
            // NaN fails both comparisons and is never recorded.
            if raw < self.min {
                self.min = raw;
            }
            if raw > self.max {
                self.max = raw;
            }
            return raw;
        }
        ((raw - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}
