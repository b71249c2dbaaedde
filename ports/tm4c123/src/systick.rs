//! SysTick configuration and the tick exception

use cortex_m::peripheral::syst::SystClkSource;
use cortex_m::peripheral::SYST;
use cortex_m_rt::exception;

use systime_clock::SysClock;
use systime_core::{Microseconds, PeriodicTask, TickConfig};

use crate::gpio::DebugPinB3;

/// Core clock frequency this port assumes
pub const CLOCK_HZ: u32 = 80_000_000;

/// Tick rate giving the counter a 1 us resolution
pub const TICK_HZ: u32 = 1_000_000;

const CONFIG: TickConfig = TickConfig::new(CLOCK_HZ, TICK_HZ);
const RELOAD: u32 = CONFIG.reload();

/// Clock instance advanced by the SysTick exception
pub static SYS_CLOCK: SysClock<DebugPinB3> = SysClock::new();

/// One-time setup: program SysTick for the 1 us tick and attach the PB3
/// debug output
///
/// The counter starts advancing as soon as SysTick is enabled, which may be
/// a few ticks before the pin attaches; those ticks count without pin
/// transitions. Must be called before relying on
/// [`read_periodic_time`].
pub fn init_sys_time(syst: &mut SYST) {
    syst.set_reload(RELOAD);
    syst.clear_current();
    syst.set_clock_source(SystClkSource::Core);
    syst.enable_interrupt();
    syst.enable_counter();

    if let Some(pin) = DebugPinB3::take() {
        SYS_CLOCK.attach_debug_pin(pin);
    }
}

/// Reset the microsecond counter to zero
pub fn clear_periodic_time() {
    SYS_CLOCK.clear();
}

/// Current microsecond counter value
pub fn read_periodic_time() -> u32 {
    SYS_CLOCK.read()
}

/// Inert periodic-thread registration; see
/// [`SysClock::add_periodic_thread`]
pub fn add_periodic_thread(task: PeriodicTask, period: Microseconds, priority: u32) -> i32 {
    SYS_CLOCK.add_periodic_thread(task, period, priority)
}

#[exception]
fn SysTick() {
    SYS_CLOCK.on_tick();
}
