//! Sensor link trait
//!
//! The sensor is wired with two digital inputs (SI strobe, CLK) and one
//! analog output (AO). Everything the acquisition engine does to the
//! sensor goes through this trait.

/// Digital line driven by the controller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SensorLine {
    /// SI: starts a new scan / exposure cycle
    Strobe,
    /// CLK: rising edge shifts the next pixel onto the analog line
    Clock,
}

/// Logic level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Level {
    Low,
    High,
}

impl Level {
    pub fn is_high(self) -> bool {
        self == Level::High
    }
}

/// Physical connection to the line-scan sensor
///
/// Pulse timing depends on `set` taking effect immediately, so
/// implementations must not buffer writes.
pub trait SensorLink {
    /// Drive a digital line
    fn set(&mut self, line: SensorLine, level: Level);

    /// Sample the analog pixel line
    ///
    /// Returns the raw converter value (0..=4094 for a valid pixel). Pixels
    /// near or past the ends of the shift register may read tri-stated noise.
    fn read_pixel(&mut self) -> u16;
}
