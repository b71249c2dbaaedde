//! PB3 debug output

use core::ptr;
use core::sync::atomic::{AtomicBool, Ordering};

use systime_core::DebugPin;

const SYSCTL_RCGCGPIO: *mut u32 = 0x400F_E608 as *mut u32;
const GPIO_PORTB_DIR: *mut u32 = 0x4000_5400 as *mut u32;
const GPIO_PORTB_DEN: *mut u32 = 0x4000_551C as *mut u32;
// Bit-masked data alias covering PB3 only (base + (mask << 2)), so each
// level change is a single store with no read-modify-write of other pins.
const GPIO_PORTB_DATA_PB3: *mut u32 = 0x4000_5020 as *mut u32;

const RCGCGPIO_PORTB: u32 = 1 << 1;
const PB3: u32 = 1 << 3;

static TAKEN: AtomicBool = AtomicBool::new(false);

/// GPIO PB3 configured as the debug timing output
pub struct DebugPinB3 {
    _private: (),
}

impl DebugPinB3 {
    /// Enable the Port B clock gate, configure PB3 as a digital output, and
    /// hand out the pin. Returns `None` once the pin has already been taken.
    pub fn take() -> Option<Self> {
        if TAKEN.swap(true, Ordering::AcqRel) {
            return None;
        }

        unsafe {
            let rcgc = ptr::read_volatile(SYSCTL_RCGCGPIO);
            ptr::write_volatile(SYSCTL_RCGCGPIO, rcgc | RCGCGPIO_PORTB);
            // The port ignores accesses for a few cycles after ungating;
            // the read-back covers that window.
            let _ = ptr::read_volatile(SYSCTL_RCGCGPIO);

            let dir = ptr::read_volatile(GPIO_PORTB_DIR);
            ptr::write_volatile(GPIO_PORTB_DIR, dir | PB3);
            let den = ptr::read_volatile(GPIO_PORTB_DEN);
            ptr::write_volatile(GPIO_PORTB_DEN, den | PB3);
        }

        Some(Self { _private: () })
    }
}

impl DebugPin for DebugPinB3 {
    fn set_high(&mut self) {
        unsafe { ptr::write_volatile(GPIO_PORTB_DATA_PB3, PB3) }
    }

    fn set_low(&mut self) {
        unsafe { ptr::write_volatile(GPIO_PORTB_DATA_PB3, 0) }
    }
}
