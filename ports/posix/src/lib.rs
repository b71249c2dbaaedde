//! # systime POSIX port
//!
//! Host-side tick source. A dedicated ticker thread stands in for the
//! hardware timer interrupt: it fires at a configurable rate using drift-free
//! absolute deadlines on a monotonic clock and advances the same clock
//! service the embedded ports drive, so the service can be exercised and
//! demonstrated off target.

mod ticker;

pub use ticker::{
    set_tick_rate, start_ticker, stop_ticker, sys_clock, tick_rate, TickerError,
};
