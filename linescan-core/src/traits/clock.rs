//! Hardware tick counter trait

/// Free-running hardware tick counter
///
/// `now` wraps at `u32::MAX`; see [`crate::timing`] for how elapsed time is
/// measured across a wrap.
pub trait TickClock {
    /// Current counter value
    fn now(&self) -> u32;

    /// Counter ticks per microsecond (fixed for the platform)
    fn ticks_per_us(&self) -> u32;
}
