//! Driver for the Pololu QTR-8A analog line sensor array.
//!
//! The QTR-8A is a linear array of 8 analog phototransistors used for
//! line following. This crate reads the array through any [`AnalogIn`]
//! channel, averages the readings, classifies the surface under the array
//! as white, line or black, and estimates the line's lateral position by
//! centre of mass.
//!
//! # Features
//!
//! - `defmt`: log through `defmt` and derive `defmt::Format`
//! - `log`: log through the `log` facade
//! - `serde`: (de)serialize [`Thresholds`] and [`SurfaceState`]
//!
//! # Example
//!
//! ```
//! use qtr8a::{AnalogIn, Qtr8a, SurfaceState};
//!
//! struct Fixed(f32);
//!
//! impl AnalogIn for Fixed {
//!     fn read(&mut self) -> f32 {
//!         self.0
//!     }
//! }
//!
//! let mut channels = [0.0, 0.0, 0.0, 1.0, 1.0, 0.0, 0.0, 0.0].map(Fixed);
//! let mut sensor = Qtr8a::with_defaults(&mut channels);
//!
//! sensor.update();
//! assert_eq!(sensor.get_state(), SurfaceState::OnLine);
//! assert_eq!(sensor.get_mean(), 0.25);
//! assert!(sensor.line_pos().abs() < 1e-7);
//! ```

#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
mod fmt;

pub mod array;
pub mod calibration;
pub mod channel;
pub mod error;
pub mod layout;
pub mod thresholds;

pub use array::{Qtr8a, SensorReadings};
pub use calibration::Calibrated;
pub use channel::{AnalogIn, OneShotInput};
pub use error::{CalibrationError, ConfigError};
pub use layout::{LAYOUT, PITCH_M, SENSOR_COUNT, SensorSlot};
pub use thresholds::{SurfaceState, Thresholds};
