//! Exposure timing
//!
//! The hardware tick counter is 32 bits wide and wraps. Elapsed time is
//! always computed with wrapping subtraction, which is exact as long as the
//! measured interval is shorter than one full counter period. Exposure
//! windows are capped at half the counter range so a busy-wait that polls
//! the counter continuously can never observe an ambiguous value.

use crate::config::ConfigError;
use crate::traits::TickClock;

/// Ticks elapsed from `start` to `now`, tolerating one counter wrap
#[inline]
pub const fn elapsed_ticks(start: u32, now: u32) -> u32 {
    now.wrapping_sub(start)
}

/// Exposure duration and its tick-count equivalent
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ExposureWindow {
    duration_us: u32,
    ticks: u32,
}

impl ExposureWindow {
    /// Longest accepted exposure, in ticks (exclusive bound)
    pub const MAX_TICKS: u32 = 1 << 31;

    /// Convert a duration to ticks at `ticks_per_us`
    pub const fn new(duration_us: u32, ticks_per_us: u32) -> Result<Self, ConfigError> {
        if ticks_per_us == 0 {
            return Err(ConfigError::ZeroTickRate);
        }
        let ticks = duration_us as u64 * ticks_per_us as u64;
        if ticks >= Self::MAX_TICKS as u64 {
            return Err(ConfigError::ExposureTooLong);
        }
        Ok(Self {
            duration_us,
            ticks: ticks as u32,
        })
    }

    /// Configured duration in microseconds
    pub const fn duration_us(&self) -> u32 {
        self.duration_us
    }

    /// Duration in hardware ticks
    pub const fn ticks(&self) -> u32 {
        self.ticks
    }

    /// Deadline for an exposure that started at tick `start`
    pub const fn deadline_from(&self, start: u32) -> Deadline {
        Deadline::new(start, self.ticks)
    }
}

/// A point in tick time, expressed relative to a start tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Deadline {
    start: u32,
    ticks: u32,
}

impl Deadline {
    pub const fn new(start: u32, ticks: u32) -> Self {
        Self { start, ticks }
    }

    /// Check whether the deadline has passed at tick `now`
    pub const fn has_passed(&self, now: u32) -> bool {
        elapsed_ticks(self.start, now) >= self.ticks
    }

    /// Spin on the tick counter until the deadline has passed
    ///
    /// This is the only blocking point in the acquisition loop. It never
    /// yields: scheduler latency would stretch the exposure. Returns the
    /// ticks elapsed since `start` when the spin ended.
    pub fn block_until<C: TickClock>(&self, clock: &C) -> u32 {
        loop {
            let elapsed = elapsed_ticks(self.start, clock.now());
            if elapsed >= self.ticks {
                return elapsed;
            }
            core::hint::spin_loop();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::cell::Cell;
    use proptest::prelude::*;

    /// Clock that advances a fixed step on every read
    struct SteppingClock {
        now: Cell<u32>,
        step: u32,
        reads: Cell<u32>,
    }

    impl SteppingClock {
        fn new(start: u32, step: u32) -> Self {
            Self {
                now: Cell::new(start),
                step,
                reads: Cell::new(0),
            }
        }
    }

    impl TickClock for SteppingClock {
        fn now(&self) -> u32 {
            let now = self.now.get();
            self.now.set(now.wrapping_add(self.step));
            self.reads.set(self.reads.get() + 1);
            now
        }

        fn ticks_per_us(&self) -> u32 {
            1
        }
    }

    #[test]
    fn test_exposure_conversion() {
        let window = ExposureWindow::new(300_000, 80).unwrap();
        assert_eq!(window.duration_us(), 300_000);
        assert_eq!(window.ticks(), 24_000_000);
    }

    #[test]
    fn test_exposure_limits() {
        assert_eq!(ExposureWindow::new(1000, 0), Err(ConfigError::ZeroTickRate));
        // 30 s at 80 MHz is past half of a 32-bit counter
        assert_eq!(
            ExposureWindow::new(30_000_000, 80),
            Err(ConfigError::ExposureTooLong)
        );
        assert!(ExposureWindow::new(26_000_000, 80).is_ok());
    }

    #[test]
    fn test_deadline_across_wrap() {
        let deadline = Deadline::new(u32::MAX - 10, 100);
        assert!(!deadline.has_passed(u32::MAX));
        assert!(!deadline.has_passed(88));
        assert!(deadline.has_passed(89));
        assert!(deadline.has_passed(500));
    }

    #[test]
    fn test_block_until_waits_full_period() {
        let clock = SteppingClock::new(1_000, 7);
        let deadline = Deadline::new(1_000, 100);

        let elapsed = deadline.block_until(&clock);
        assert!(elapsed >= 100);
        assert!(elapsed < 107);
        // Reads at 0, 7, ..., 105 ticks
        assert_eq!(clock.reads.get(), 16);
    }

    #[test]
    fn test_block_until_expired_deadline_returns_at_once() {
        let clock = SteppingClock::new(5_000, 1);
        let deadline = Deadline::new(1_000, 100);

        assert_eq!(deadline.block_until(&clock), 4_000);
        assert_eq!(clock.reads.get(), 1);
    }

    #[test]
    fn test_block_until_wrapping_counter() {
        let clock = SteppingClock::new(u32::MAX - 50, 10);
        let deadline = Deadline::new(u32::MAX - 50, 200);

        assert!(deadline.block_until(&clock) >= 200);
        assert!(clock.now.get() < 1_000);
    }

    proptest! {
        #[test]
        fn prop_deadline_matches_offset(
            start in any::<u32>(),
            ticks in 0u32..ExposureWindow::MAX_TICKS,
            offset in any::<u32>(),
        ) {
            let deadline = Deadline::new(start, ticks);
            prop_assert_eq!(deadline.has_passed(start.wrapping_add(offset)), offset >= ticks);
        }

        #[test]
        fn prop_block_until_never_early(
            start in any::<u32>(),
            ticks in 0u32..10_000,
            step in 1u32..500,
        ) {
            let clock = SteppingClock::new(start, step);
            let elapsed = Deadline::new(start, ticks).block_until(&clock);
            prop_assert!(elapsed >= ticks);
            prop_assert!(elapsed < ticks + step);
        }
    }
}
