//! Host demonstration of the systime clock service
//!
//! Runs the POSIX ticker at 1 kHz and walks through the service surface:
//! the counter advances with ticks, clearing rearms it from zero, and
//! periodic-thread registration returns its constant without ever invoking
//! the callback.

use std::sync::atomic::{AtomicU32, Ordering};
use std::thread;
use std::time::Duration;

use systime_posix::{set_tick_rate, start_ticker, stop_ticker, sys_clock};

static TASK_CALLS: AtomicU32 = AtomicU32::new(0);

fn periodic_task() {
    TASK_CALLS.fetch_add(1, Ordering::SeqCst);
}

fn main() {
    set_tick_rate(1_000).expect("rate within host limits");
    start_ticker().expect("ticker not yet running");
    println!("ticker running at 1 kHz");

    thread::sleep(Duration::from_millis(100));
    println!("after 100 ms: counter = {}", sys_clock().read_micros());

    sys_clock().clear();
    println!("after clear:  counter = {}", sys_clock().read_micros());

    thread::sleep(Duration::from_millis(50));
    println!("after 50 ms:  counter = {}", sys_clock().read_micros());

    let status = sys_clock().add_periodic_thread(
        periodic_task,
        systime_core::Microseconds::new(1_000),
        3,
    );
    thread::sleep(Duration::from_millis(20));
    println!(
        "add_periodic_thread returned {status}; callback ran {} times",
        TASK_CALLS.load(Ordering::SeqCst)
    );

    stop_ticker();
    println!("ticker stopped; final counter = {}", sys_clock().read_micros());
}
