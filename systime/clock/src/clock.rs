//! Tick counter and tick service routine

use core::cell::RefCell;
use core::sync::atomic::{AtomicU32, Ordering};

use critical_section::Mutex;
use systime_core::{DebugPin, Microseconds, PeriodicTask};

/// Microsecond system clock
///
/// Owns the process-wide tick counter and the optional debug pin. The counter
/// is atomic: a foreground [`clear`] or [`read`] racing an interrupt-context
/// [`on_tick`] never observes a torn value. The pin lives behind a
/// critical-section mutex because attachment happens in the foreground while
/// the interrupt drives the transitions.
///
/// Ports declare one instance as a `static` and bind their tick interrupt to
/// [`on_tick`]:
///
/// ```ignore
/// static SYS_CLOCK: SysClock<DebugPinB3> = SysClock::new();
///
/// #[exception]
/// fn SysTick() {
///     SYS_CLOCK.on_tick();
/// }
/// ```
///
/// [`clear`]: SysClock::clear
/// [`read`]: SysClock::read
/// [`on_tick`]: SysClock::on_tick
pub struct SysClock<P: DebugPin> {
    micros: AtomicU32,
    pin: Mutex<RefCell<Option<P>>>,
}

impl<P: DebugPin> SysClock<P> {
    /// Create a clock with the counter at zero and no debug pin attached
    pub const fn new() -> Self {
        Self {
            micros: AtomicU32::new(0),
            pin: Mutex::new(RefCell::new(None)),
        }
    }

    /// Install the debug output toggled around each increment
    ///
    /// Ticks delivered before attachment advance the counter without pin
    /// transitions. Attaching again replaces the previous pin.
    pub fn attach_debug_pin(&self, pin: P) {
        critical_section::with(|cs| {
            self.pin.borrow_ref_mut(cs).replace(pin);
        });
    }

    /// Tick service routine
    ///
    /// Raises the debug pin, advances the counter by one microsecond
    /// (wrapping at the 32-bit boundary), and lowers the pin. Runs in bounded
    /// time and never blocks; invoked only from a port's tick interrupt.
    pub fn on_tick(&self) {
        critical_section::with(|cs| {
            let mut pin = self.pin.borrow_ref_mut(cs);
            if let Some(p) = pin.as_mut() {
                p.set_high();
            }
            self.micros.fetch_add(1, Ordering::Relaxed);
            if let Some(p) = pin.as_mut() {
                p.set_low();
            }
        });
    }

    /// Reset the counter to zero
    pub fn clear(&self) {
        self.micros.store(0, Ordering::Relaxed);
    }

    /// Current counter value in microseconds
    pub fn read(&self) -> u32 {
        self.micros.load(Ordering::Relaxed)
    }

    /// Current counter value as a typed quantity
    pub fn read_micros(&self) -> Microseconds {
        Microseconds(self.read())
    }

    /// Register a periodic thread
    ///
    /// Declared extension point for running `task` every `period` at the
    /// given `priority`. The current implementation is inert: nothing is
    /// validated or stored, `task` is never invoked, and the call
    /// unconditionally returns `1`. Callers must not read more into the
    /// returned value than equality with `1`.
    pub fn add_periodic_thread(
        &self,
        _task: PeriodicTask,
        _period: Microseconds,
        _priority: u32,
    ) -> i32 {
        1
    }
}

impl<P: DebugPin> Default for SysClock<P> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use systime_core::NullPin;

    #[test]
    fn counter_wraps_past_max() {
        let clock: SysClock<NullPin> = SysClock::new();
        clock.micros.store(u32::MAX, Ordering::Relaxed);
        clock.on_tick();
        assert_eq!(clock.read(), 0);
        clock.on_tick();
        assert_eq!(clock.read(), 1);
    }

    #[test]
    fn clear_between_ticks_restarts_count() {
        let clock: SysClock<NullPin> = SysClock::new();
        clock.on_tick();
        clock.clear();
        clock.on_tick();
        assert_eq!(clock.read(), 1);
    }
}
