//! Debug-pin tests for systime-core

use std::convert::Infallible;

use embedded_hal::digital::{ErrorType, OutputPin};
use systime_core::{DebugPin, HalPin, NullPin};

/// HAL pin recording every level written to it
#[derive(Default)]
struct RecordingPin {
    levels: Vec<bool>,
}

impl ErrorType for RecordingPin {
    type Error = Infallible;
}

impl OutputPin for RecordingPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.levels.push(false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.levels.push(true);
        Ok(())
    }
}

#[test]
fn test_null_pin_is_inert() {
    let mut pin = NullPin;
    pin.set_high();
    pin.set_low();
}

#[test]
fn test_hal_pin_forwards_levels() {
    let mut pin = HalPin::new(RecordingPin::default());
    pin.set_high();
    pin.set_low();
    pin.set_high();

    let inner = pin.release();
    assert_eq!(inner.levels, vec![true, false, true]);
}
