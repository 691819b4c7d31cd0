//! Physical layout of the QTR-8A phototransistors.
//!
//! Sensors sit on a 0.375" (9.525 mm) pitch, centred on the board. Offsets
//! are in meters; negative toward channel 0, positive toward channel 7.

/// Number of sensors in the array.
pub const SENSOR_COUNT: usize = 8;

/// Distance between adjacent sensors [m].
pub const PITCH_M: f32 = 0.009525;

/// One entry of the layout table: a channel index and where it sits.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorSlot {
    /// Channel index, matching the order of the channel array.
    pub index: usize,
    /// Lateral offset from the array centre [m].
    pub offset_m: f32,
}

impl SensorSlot {
    const fn new(index: usize, offset_m: f32) -> Self {
        Self { index, offset_m }
    }
}

/// Channel index to physical offset, left to right.
pub const LAYOUT: [SensorSlot; SENSOR_COUNT] = [
    SensorSlot::new(0, -0.0333375),
    SensorSlot::new(1, -0.0238125),
    SensorSlot::new(2, -0.0142875),
    SensorSlot::new(3, -0.0047625),
    SensorSlot::new(4, 0.0047625),
    SensorSlot::new(5, 0.0142875),
    SensorSlot::new(6, 0.0238125),
    SensorSlot::new(7, 0.0333375),
];

/// Offset of the sensor at `index` [m].
pub const fn offset(index: usize) -> f32 {
    LAYOUT[index].offset_m
}
