//! Analog channel abstraction consumed by the array.

use core::cell::RefCell;
use core::marker::PhantomData;

use embedded_hal::adc::{Channel, OneShot};

/// A single analog input producing a normalized reading.
///
/// Readings are nominally in [0, 1]. There is no error channel: an input
/// that cannot produce a value should return NaN, which the array
/// propagates untouched.
pub trait AnalogIn {
    fn read(&mut self) -> f32;
}

impl<T: AnalogIn + ?Sized> AnalogIn for &mut T {
    fn read(&mut self) -> f32 {
        (**self).read()
    }
}

/// One pin of an `embedded-hal` one-shot ADC, normalized to full scale.
///
/// The converter is shared between the eight inputs through a `RefCell`;
/// reads are sequential so the borrow never overlaps.
pub struct OneShotInput<'a, ADC, CONV, PIN, WORD> {
    adc: &'a RefCell<CONV>,
    pin: PIN,
    full_scale: f32,
    _marker: PhantomData<(ADC, WORD)>,
}

impl<'a, ADC, CONV, PIN, WORD> OneShotInput<'a, ADC, CONV, PIN, WORD>
where
    CONV: OneShot<ADC, WORD, PIN>,
    PIN: Channel<ADC>,
    WORD: Into<f32>,
{
    /// `full_scale` is the raw value that maps to 1.0 (4095 for 12 bits).
    pub fn new(adc: &'a RefCell<CONV>, pin: PIN, full_scale: f32) -> Self {
        Self {
            adc,
            pin,
            full_scale,
            _marker: PhantomData,
        }
    }

    /// Give the pin back.
    pub fn release(self) -> PIN {
        self.pin
    }
}

impl<ADC, CONV, PIN, WORD> AnalogIn for OneShotInput<'_, ADC, CONV, PIN, WORD>
where
    CONV: OneShot<ADC, WORD, PIN>,
    PIN: Channel<ADC>,
    WORD: Into<f32>,
{
    fn read(&mut self) -> f32 {
        let mut adc = self.adc.borrow_mut();
        match nb::block!(adc.read(&mut self.pin)) {
            Ok(raw) => raw.into() / self.full_scale,
            Err(_) => {
                warn!("ADC conversion failed, reporting NaN");
                f32::NAN
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use embedded_hal_mock::eh0::MockError;
    use embedded_hal_mock::eh0::adc::{Mock, MockChan0, MockChan1, Transaction};
    use std::io::ErrorKind;

    struct Fixed(f32);

    impl AnalogIn for Fixed {
        fn read(&mut self) -> f32 {
            self.0
        }
    }

    #[test]
    fn test_mut_ref_forwards() {
        let mut input = Fixed(0.25);
        let mut by_ref = &mut input;
        assert_eq!(AnalogIn::read(&mut by_ref), 0.25);
    }

    #[test]
    fn test_one_shot_normalizes() {
        let expectations = [
            Transaction::read(0, 4095u16),
            Transaction::read(1, 0u16),
            Transaction::read(0, 2048u16),
        ];
        let adc = RefCell::new(Mock::new(&expectations));

        let mut left: OneShotInput<'_, _, _, _, u16> =
            OneShotInput::new(&adc, MockChan0 {}, 4095.0);
        let mut right: OneShotInput<'_, _, _, _, u16> =
            OneShotInput::new(&adc, MockChan1 {}, 4095.0);

        assert_eq!(left.read(), 1.0);
        assert_eq!(right.read(), 0.0);
        assert!((left.read() - 2048.0 / 4095.0).abs() < 1e-6);

        adc.borrow_mut().done();
    }

    #[test]
    fn test_one_shot_error_is_nan() {
        let expectations =
            [Transaction::read(0, 0u16).with_error(MockError::Io(ErrorKind::Other))];
        let adc = RefCell::new(Mock::new(&expectations));

        let mut input: OneShotInput<'_, _, _, _, u16> =
            OneShotInput::new(&adc, MockChan0 {}, 4095.0);
        assert!(input.read().is_nan());

        adc.borrow_mut().done();
    }
}
