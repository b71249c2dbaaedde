//! Debug-pin abstraction
//!
//! The tick service routine raises a digital output just before advancing the
//! counter and lowers it just after, so the tick period and handler duration
//! are visible on an oscilloscope. The pin is driven from interrupt context;
//! implementations must not block and have no failure path to report into.

use embedded_hal::digital::OutputPin;

/// Digital output toggled around each counter increment
pub trait DebugPin {
    /// Drive the pin high
    fn set_high(&mut self);

    /// Drive the pin low
    fn set_low(&mut self);
}

/// No-op pin for targets without timing instrumentation
pub struct NullPin;

impl DebugPin for NullPin {
    fn set_high(&mut self) {}

    fn set_low(&mut self) {}
}

/// Adapter driving any [`embedded_hal::digital::OutputPin`] as a debug pin
///
/// HAL pin errors are discarded; a debug output has nowhere to report them
/// from interrupt context.
pub struct HalPin<P> {
    pin: P,
}

impl<P> HalPin<P> {
    /// Wrap a HAL output pin
    pub fn new(pin: P) -> Self {
        Self { pin }
    }

    /// Give the underlying pin back
    pub fn release(self) -> P {
        self.pin
    }
}

impl<P: OutputPin> DebugPin for HalPin<P> {
    fn set_high(&mut self) {
        let _ = self.pin.set_high();
    }

    fn set_low(&mut self) {
        let _ = self.pin.set_low();
    }
}
