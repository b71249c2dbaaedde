#![no_std]
#![forbid(unsafe_code)]

//! # System Clock Service
//!
//! The timekeeping service driven by a port's periodic tick interrupt. Each
//! tick raises the debug pin, advances the microsecond counter by one, and
//! lowers the pin again; foreground code reads or clears the counter at any
//! time. A declared periodic-thread registration entry point exists but is
//! intentionally inert (see [`SysClock::add_periodic_thread`]).

mod clock;

pub use clock::SysClock;
