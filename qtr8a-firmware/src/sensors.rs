//! QTR-8A channel bindings on ADC1.
//!
//! Lower values = more light reflected (white surface)
//! Higher values = less light reflected (black surface)
//!
//! Pin Mapping (ADC1 channels):
//! - Line 1: PA0 (ADC1_IN0)
//! - Line 2: PA1 (ADC1_IN1)
//! - Line 3: PA4 (ADC1_IN4)
//! - Line 4: PB0 (ADC1_IN8)
//! - Line 5: PC1 (ADC1_IN11)
//! - Line 6: PC0 (ADC1_IN10)
//! - Line 7: PC3 (ADC1_IN13)
//! - Line 8: PC2 (ADC1_IN12)

use core::cell::RefCell;

use embassy_stm32::adc::{Adc, AdcChannel, AnyAdcChannel};
use embassy_stm32::peripherals::{ADC1, PA0, PA1, PA4, PB0, PC0, PC1, PC2, PC3};
use qtr8a::{AnalogIn, SENSOR_COUNT};

/// Raw value of a full-scale 12-bit conversion.
pub const FULL_SCALE: f32 = 4095.0;

/// One sensor line, sharing ADC1 with the other seven.
pub struct AdcInput<'a, 'd> {
    adc: &'a RefCell<Adc<'d, ADC1>>,
    channel: AnyAdcChannel<ADC1>,
}

impl<'a, 'd> AdcInput<'a, 'd> {
    pub fn new(adc: &'a RefCell<Adc<'d, ADC1>>, pin: impl AdcChannel<ADC1>) -> Self {
        Self {
            adc,
            channel: pin.degrade_adc(),
        }
    }
}

impl AnalogIn for AdcInput<'_, '_> {
    fn read(&mut self) -> f32 {
        let raw = self.adc.borrow_mut().blocking_read(&mut self.channel);
        raw as f32 / FULL_SCALE
    }
}

/// Bind the eight lines in physical order, left to right.
pub fn line_inputs<'a, 'd>(
    adc: &'a RefCell<Adc<'d, ADC1>>,
    pa0: PA0,
    pa1: PA1,
    pa4: PA4,
    pb0: PB0,
    pc1: PC1,
    pc0: PC0,
    pc3: PC3,
    pc2: PC2,
) -> [AdcInput<'a, 'd>; SENSOR_COUNT] {
    [
        AdcInput::new(adc, pa0),
        AdcInput::new(adc, pa1),
        AdcInput::new(adc, pa4),
        AdcInput::new(adc, pb0),
        AdcInput::new(adc, pc1),
        AdcInput::new(adc, pc0),
        AdcInput::new(adc, pc3),
        AdcInput::new(adc, pc2),
    ]
}
