//! Clock tick service for POSIX hosts
//!
//! Provides periodic clock tick generation using a dedicated thread.
//! Implements drift-free timing by sleeping until absolute deadlines on a
//! monotonic clock.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};
use std::sync::Mutex;
use std::thread::{self, JoinHandle};
use std::time::{Duration, Instant};

use systime_clock::SysClock;
use systime_core::NullPin;
use thiserror::Error;

/// Default tick rate in Hz
const DEFAULT_TICKS_PER_SEC: u32 = 1_000;

/// Highest rate the host ticker will attempt
const MAX_TICKS_PER_SEC: u32 = 10_000;

/// Nanoseconds per second
const NSEC_PER_SEC: u64 = 1_000_000_000;

/// Global ticker state
static TICKER_RUNNING: AtomicBool = AtomicBool::new(false);
static TICK_RATE_HZ: AtomicU32 = AtomicU32::new(DEFAULT_TICKS_PER_SEC);
static TICKER_THREAD: Mutex<Option<JoinHandle<()>>> = Mutex::new(None);

/// Clock service advanced by the ticker thread
static SYS_CLOCK: SysClock<NullPin> = SysClock::new();

/// Errors from ticker lifecycle operations
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickerError {
    /// Rate is zero or beyond what a host thread can sustain
    #[error("tick rate out of range: {0} Hz (supported: 1..=10000)")]
    InvalidRate(u32),
    /// The ticker thread is already running
    #[error("ticker thread is already running")]
    AlreadyRunning,
}

/// The clock service this port drives
///
/// Reads and clears go through the returned reference, exactly as they would
/// against an embedded port's static instance.
pub fn sys_clock() -> &'static SysClock<NullPin> {
    &SYS_CLOCK
}

/// Set the clock tick rate for the next ticker start
///
/// # Examples
///
/// ```
/// use systime_posix::set_tick_rate;
///
/// set_tick_rate(100).unwrap(); // 100 Hz tick rate
/// ```
pub fn set_tick_rate(ticks_per_sec: u32) -> Result<(), TickerError> {
    if ticks_per_sec == 0 || ticks_per_sec > MAX_TICKS_PER_SEC {
        return Err(TickerError::InvalidRate(ticks_per_sec));
    }
    TICK_RATE_HZ.store(ticks_per_sec, Ordering::SeqCst);
    Ok(())
}

/// Get the current tick rate in Hz
pub fn tick_rate() -> u32 {
    TICK_RATE_HZ.load(Ordering::SeqCst)
}

/// Start the ticker thread
///
/// Spawns a dedicated thread that advances the clock service at the
/// configured rate. Uses monotonic time to avoid drift.
pub fn start_ticker() -> Result<(), TickerError> {
    if TICKER_RUNNING.swap(true, Ordering::SeqCst) {
        return Err(TickerError::AlreadyRunning);
    }

    let rate_hz = TICK_RATE_HZ.load(Ordering::SeqCst);
    let tick_period = Duration::from_nanos(NSEC_PER_SEC / rate_hz as u64);
    log::debug!("starting ticker thread at {rate_hz} Hz");

    let handle = thread::spawn(move || {
        ticker_thread(tick_period);
    });

    let mut thread_guard = TICKER_THREAD.lock().unwrap();
    *thread_guard = Some(handle);
    Ok(())
}

/// Stop the ticker thread
///
/// Signals shutdown and waits for the thread to finish. The counter keeps
/// its value; no further ticks arrive until the next start.
pub fn stop_ticker() {
    TICKER_RUNNING.store(false, Ordering::SeqCst);

    let mut thread_guard = TICKER_THREAD.lock().unwrap();
    if let Some(handle) = thread_guard.take() {
        drop(thread_guard);
        let _ = handle.join();
        log::debug!("ticker thread stopped");
    }
}

/// Ticker thread implementation
///
/// Sleeps until the next tick time (absolute) rather than sleeping for a
/// relative duration, so tick delivery does not drift.
fn ticker_thread(tick_period: Duration) {
    let start = Instant::now();
    let mut next_tick = start;

    while TICKER_RUNNING.load(Ordering::Relaxed) {
        next_tick += tick_period;

        let now = Instant::now();
        if next_tick > now {
            thread::sleep(next_tick - now);
        }

        SYS_CLOCK.on_tick();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_rate_bounds() {
        assert_eq!(set_tick_rate(0), Err(TickerError::InvalidRate(0)));
        assert_eq!(set_tick_rate(20_000), Err(TickerError::InvalidRate(20_000)));
        assert_eq!(set_tick_rate(500), Ok(()));
        assert_eq!(tick_rate(), 500);
    }

    #[test]
    fn test_ticker_advances_and_stops() {
        start_ticker().expect("ticker should start");
        assert_eq!(start_ticker(), Err(TickerError::AlreadyRunning));

        // Let it run for ~100ms
        thread::sleep(Duration::from_millis(100));
        stop_ticker();

        let counted = sys_clock().read();
        assert!(counted > 0, "ticker should have delivered ticks");

        // No ticks arrive after shutdown
        thread::sleep(Duration::from_millis(20));
        assert_eq!(sys_clock().read(), counted);

        sys_clock().clear();
        assert_eq!(sys_clock().read(), 0);
    }
}
