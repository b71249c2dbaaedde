#![no_std]
#![forbid(unsafe_code)]

//! # systime-core
//!
//! Core types, traits, and abstractions for the systime microsecond
//! timekeeping service. This crate provides the foundation shared by the
//! clock service and the hardware ports: time quantities, tick-rate
//! configuration, and the debug-pin seam used for oscilloscope
//! instrumentation.

use core::fmt;

pub mod pin;
pub mod time;

pub use pin::*;
pub use time::*;

/// systime framework version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Result type used throughout the systime crates
pub type SysTimeResult<T> = Result<T, SysTimeError>;

/// Error types for systime configuration operations
///
/// The running service itself cannot fail: tick delivery, counter reset, and
/// counter reads are unconditional. Errors only arise when a port validates a
/// runtime-constructed tick configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SysTimeError {
    /// Tick rate is zero or exceeds the input clock
    InvalidTickRate,
    /// Derived reload value does not fit the 24-bit reload register
    ReloadOutOfRange,
}

impl fmt::Display for SysTimeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SysTimeError::InvalidTickRate => {
                write!(f, "tick rate must be nonzero and at most the input clock")
            }
            SysTimeError::ReloadOutOfRange => {
                write!(f, "derived reload value exceeds the 24-bit reload register")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for SysTimeError {}

#[cfg(feature = "defmt")]
impl defmt::Format for SysTimeError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SysTimeError::InvalidTickRate => defmt::write!(fmt, "InvalidTickRate"),
            SysTimeError::ReloadOutOfRange => defmt::write!(fmt, "ReloadOutOfRange"),
        }
    }
}
