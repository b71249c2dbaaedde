//! Time quantities and tick-rate configuration

use core::fmt;

use crate::{SysTimeError, SysTimeResult};

/// Largest reload value the 24-bit SysTick reload register accepts
pub const SYSTICK_MAX_RELOAD: u32 = 0x00FF_FFFF;

/// Periodic-thread entry point
pub type PeriodicTask = fn();

/// Elapsed microseconds since the counter was last cleared
///
/// Arithmetic wraps on the native 32-bit width; overflow is never detected or
/// signaled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct Microseconds(pub u32);

impl Microseconds {
    /// Zero microseconds
    pub const ZERO: Self = Self(0);

    /// Maximum representable value before wrap
    pub const MAX: Self = Self(u32::MAX);

    /// Create a new microsecond quantity
    pub const fn new(us: u32) -> Self {
        Self(us)
    }

    /// Get the raw microsecond count
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Check if the quantity is zero
    pub const fn is_zero(self) -> bool {
        self.0 == 0
    }

    /// Advance by one microsecond, wrapping at the 32-bit boundary
    pub fn increment(&mut self) {
        self.0 = self.0.wrapping_add(1);
    }

    /// Add microseconds, wrapping at the 32-bit boundary
    pub const fn wrapping_add(self, us: u32) -> Self {
        Self(self.0.wrapping_add(us))
    }

    /// Microseconds elapsed since an earlier reading (handles wraparound)
    pub const fn elapsed_since(self, earlier: Microseconds) -> u32 {
        self.0.wrapping_sub(earlier.0)
    }
}

impl fmt::Display for Microseconds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}us", self.0)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for Microseconds {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}us", self.0);
    }
}

/// Countdown-timer configuration for a port
///
/// Derives the hardware reload value from the input clock frequency and the
/// desired tick rate. Ports with a fixed clock evaluate [`reload`] in a
/// constant; runtime-constructed configurations go through
/// [`checked_reload`].
///
/// [`reload`]: TickConfig::reload
/// [`checked_reload`]: TickConfig::checked_reload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TickConfig {
    clock_hz: u32,
    tick_hz: u32,
}

impl TickConfig {
    /// Create a configuration from an input clock and a tick rate, both in Hz
    pub const fn new(clock_hz: u32, tick_hz: u32) -> Self {
        Self { clock_hz, tick_hz }
    }

    /// Input clock frequency in Hz
    pub const fn clock_hz(&self) -> u32 {
        self.clock_hz
    }

    /// Tick rate in Hz
    pub const fn tick_hz(&self) -> u32 {
        self.tick_hz
    }

    /// Countdown reload value producing one interrupt per tick period
    ///
    /// Callers must hold a configuration that passes [`validate`]; a zero
    /// tick rate divides by zero here. Constant evaluation turns that into a
    /// compile error.
    ///
    /// [`validate`]: TickConfig::validate
    pub const fn reload(&self) -> u32 {
        self.clock_hz / self.tick_hz - 1
    }

    /// Tick period in microseconds
    ///
    /// Same precondition as [`reload`](TickConfig::reload).
    pub const fn tick_period(&self) -> Microseconds {
        Microseconds(1_000_000 / self.tick_hz)
    }

    /// Check that the tick rate is usable and the reload value fits the
    /// 24-bit reload register
    pub const fn validate(&self) -> SysTimeResult<()> {
        if self.tick_hz == 0 || self.tick_hz > self.clock_hz {
            return Err(SysTimeError::InvalidTickRate);
        }
        if self.clock_hz / self.tick_hz - 1 > SYSTICK_MAX_RELOAD {
            return Err(SysTimeError::ReloadOutOfRange);
        }
        Ok(())
    }

    /// Validate, then derive the reload value
    pub const fn checked_reload(&self) -> SysTimeResult<u32> {
        match self.validate() {
            Ok(()) => Ok(self.reload()),
            Err(e) => Err(e),
        }
    }
}

impl fmt::Display for TickConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Hz tick @ {}Hz clock", self.tick_hz, self.clock_hz)
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for TickConfig {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{}Hz tick @ {}Hz clock", self.tick_hz, self.clock_hz);
    }
}
