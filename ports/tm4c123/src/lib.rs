#![no_std]

//! # systime TM4C123 port
//!
//! Binds the system clock service to the TM4C123 (Cortex-M4F) SysTick
//! peripheral: an 80 MHz core clock divided down to one interrupt per
//! microsecond, with GPIO PB3 toggled around each counter increment for
//! oscilloscope observation.

mod gpio;
mod systick;

pub use gpio::DebugPinB3;
pub use systick::{
    add_periodic_thread, clear_periodic_time, init_sys_time, read_periodic_time, CLOCK_HZ,
    SYS_CLOCK, TICK_HZ,
};
