//! Time type tests for systime-core
//! These tests run on x86 host with std for testing, but verify no_std compatible code

use systime_core::{Microseconds, SysTimeError, TickConfig, SYSTICK_MAX_RELOAD};

#[test]
fn test_microseconds_increment() {
    let mut us = Microseconds::ZERO;
    us.increment();
    us.increment();
    assert_eq!(us, Microseconds::new(2));
}

#[test]
fn test_microseconds_wraps_at_max() {
    let mut us = Microseconds::MAX;
    us.increment();
    assert_eq!(us, Microseconds::ZERO);
}

#[test]
fn test_microseconds_elapsed_since() {
    let earlier = Microseconds::new(100);
    let later = Microseconds::new(350);
    assert_eq!(later.elapsed_since(earlier), 250);
}

#[test]
fn test_microseconds_elapsed_across_wrap() {
    let earlier = Microseconds::new(u32::MAX - 4);
    let later = earlier.wrapping_add(10);
    assert_eq!(later.elapsed_since(earlier), 10);
}

#[test]
fn test_microseconds_display() {
    assert_eq!(format!("{}", Microseconds::new(79)), "79us");
}

#[test]
fn test_reload_for_one_microsecond_tick() {
    // 80 MHz core clock, 1 MHz tick
    let cfg = TickConfig::new(80_000_000, 1_000_000);
    assert_eq!(cfg.reload(), 79);
    assert_eq!(cfg.tick_period(), Microseconds::new(1));
    assert_eq!(cfg.checked_reload(), Ok(79));
}

#[test]
fn test_reload_is_const_evaluable() {
    const CFG: TickConfig = TickConfig::new(80_000_000, 1_000_000);
    const RELOAD: u32 = CFG.reload();
    assert_eq!(RELOAD, 79);
}

#[test]
fn test_zero_tick_rate_rejected() {
    let cfg = TickConfig::new(80_000_000, 0);
    assert_eq!(cfg.validate(), Err(SysTimeError::InvalidTickRate));
}

#[test]
fn test_tick_rate_above_clock_rejected() {
    let cfg = TickConfig::new(1_000, 2_000);
    assert_eq!(cfg.validate(), Err(SysTimeError::InvalidTickRate));
}

#[test]
fn test_reload_beyond_register_width_rejected() {
    // 80 MHz clock at 1 Hz would need a reload of 79,999,999
    let cfg = TickConfig::new(80_000_000, 1);
    assert_eq!(cfg.checked_reload(), Err(SysTimeError::ReloadOutOfRange));
}

#[test]
fn test_reload_register_boundary() {
    let cfg = TickConfig::new(SYSTICK_MAX_RELOAD + 1, 1);
    assert_eq!(cfg.checked_reload(), Ok(SYSTICK_MAX_RELOAD));
}
