//! The QTR-8A array: sampling, mean, surface state and line position.

use crate::channel::AnalogIn;
use crate::layout::{LAYOUT, SENSOR_COUNT};
use crate::thresholds::{SurfaceState, Thresholds};

/// Normalized readings, one per sensor, left to right.
pub type SensorReadings = [f32; SENSOR_COUNT];

/// QTR-8A line sensor array driver.
///
/// Borrows its eight channels; the channels must outlive the driver.
/// Readings increase from white to black. Call [`update`](Self::update)
/// once per loop iteration before using any of the accessors; until then
/// they report the initial zeros and [`SurfaceState::OnUnknown`].
pub struct Qtr8a<'a, C> {
    channels: &'a mut [C; SENSOR_COUNT],
    readings: SensorReadings,
    mean: f32,
    thresholds: Thresholds,
    state: SurfaceState,
}

impl<'a, C: AnalogIn> Qtr8a<'a, C> {
    /// Bind the array to its ordered channels. Performs no I/O.
    pub fn new(channels: &'a mut [C; SENSOR_COUNT], thresholds: Thresholds) -> Self {
        Self {
            channels,
            readings: [0.0; SENSOR_COUNT],
            mean: 0.0,
            thresholds,
            state: SurfaceState::OnUnknown,
        }
    }

    /// White/black thresholds of 0.1 and 0.9, line threshold 0.5.
    pub fn with_defaults(channels: &'a mut [C; SENSOR_COUNT]) -> Self {
        Self::new(channels, Thresholds::default())
    }

    /// One threshold for line detection via [`on_line`](Self::on_line).
    pub fn single_threshold(channels: &'a mut [C; SENSOR_COUNT], line_thresh: f32) -> Self {
        Self::new(channels, Thresholds::single(line_thresh))
    }

    /// Read all 8 channels in order, then recompute the mean and state.
    ///
    /// Values are stored as returned; nothing is clamped. The mean is summed
    /// in `f64` on purpose: eight equal readings `v` give a mean of exactly
    /// `v`, so a mean sitting on a threshold classifies the same way every
    /// time. On single-precision FPUs this costs a few soft-float ops per
    /// update.
    pub fn update(&mut self) {
        for (reading, channel) in self.readings.iter_mut().zip(self.channels.iter_mut()) {
            *reading = channel.read();
        }

        let sum: f64 = self.readings.iter().map(|&r| f64::from(r)).sum();
        self.mean = (sum / SENSOR_COUNT as f64) as f32;

        let state = self.thresholds.classify(self.mean);
        if state != self.state {
            debug!("surface {:?} -> {:?} (mean {})", self.state, state, self.mean);
        }
        self.state = state;
        trace!("readings {:?}", self.readings);
    }

    /// Last reading from sensor `index`.
    ///
    /// # Panics
    ///
    /// If `index` is not in `0..8`.
    pub fn get_single(&self, index: usize) -> f32 {
        self.readings[index]
    }

    /// All readings from the last update.
    pub fn readings(&self) -> &SensorReadings {
        &self.readings
    }

    /// Mean of the last 8 readings.
    pub fn get_mean(&self) -> f32 {
        self.mean
    }

    /// True if the mean is strictly above the line threshold (0.5 unless
    /// configured otherwise).
    ///
    /// Independent of [`get_state`](Self::get_state), which uses the
    /// white/black band.
    pub fn on_line(&self) -> bool {
        self.mean > self.thresholds.line
    }

    /// Surface classification from the last update.
    pub fn get_state(&self) -> SurfaceState {
        self.state
    }

    pub fn thresholds(&self) -> Thresholds {
        self.thresholds
    }

    /// Takes effect on the next update. Not checked against the black threshold.
    pub fn set_white_thresh(&mut self, white: f32) {
        self.thresholds.white = white;
    }

    /// Takes effect on the next update. Not checked against the white threshold.
    pub fn set_black_thresh(&mut self, black: f32) {
        self.thresholds.black = black;
    }

    /// Applies to the next [`on_line`](Self::on_line) call.
    pub fn set_line_thresh(&mut self, line: f32) {
        self.thresholds.line = line;
    }

    pub fn set_thresholds(&mut self, thresholds: Thresholds) {
        self.thresholds = thresholds;
    }

    /// Line position relative to the array centre [m].
    ///
    /// Zero is exactly between sensors 3 and 4; negative values approach
    /// sensor 0 and positive values sensor 7. Only meaningful while
    /// [`get_state`](Self::get_state) is `OnLine`, which is not checked.
    /// A zero reading sum yields NaN (or infinity), not a guarded value.
    pub fn line_pos(&self) -> f32 {
        let mut num = 0.0f32;
        let mut den = 0.0f32;
        for (reading, slot) in self.readings.iter().zip(LAYOUT.iter()) {
            num += reading * slot.offset_m;
            den += reading;
        }
        num / den
    }

    /// Bitmask of sensors reading strictly above `threshold`.
    /// Bit 0 is sensor 0.
    pub fn line_mask(&self, threshold: f32) -> u8 {
        self.readings
            .iter()
            .enumerate()
            .filter(|&(_, &r)| r > threshold)
            .fold(0u8, |mask, (i, _)| mask | (1 << i))
    }
}
