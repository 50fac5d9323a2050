//! Tick clock
//!
//! The RP2040 TIMER peripheral counts microseconds on a 64-bit counter,
//! exposed through the embassy time driver. The camera only needs the low
//! 32 bits: exposure arithmetic is wrap-safe (see `linescan_core::timing`).

use embassy_time::{Instant, TICK_HZ};
use linescan_core::traits::TickClock;

/// Tick clock backed by `embassy_time::Instant`
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemTicks;

impl SystemTicks {
    pub const fn new() -> Self {
        Self
    }
}

impl TickClock for SystemTicks {
    fn now(&self) -> u32 {
        Instant::now().as_ticks() as u32
    }

    fn ticks_per_us(&self) -> u32 {
        // Zero for drivers slower than 1 MHz; rejected when the engine is built
        (TICK_HZ / 1_000_000) as u32
    }
}
