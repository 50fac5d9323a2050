//! TAOS TSL1401 128-pixel line-scan sensor
//!
//! Wiring:
//! - SI  (digital in)  - strobe, latched on the next CLK rising edge
//! - CLK (digital in)  - each rising edge shifts one pixel onto AO
//! - AO  (analog out)  - pixel intensity, tri-stated after pixel 128
//!
//! The acquisition engine owns the pulse sequence; this driver only maps
//! line/level commands onto pins and reads AO.

use linescan_core::traits::{Level, SensorLine, SensorLink};
use linescan_hal::{AnalogInput, OutputPin};

/// TSL1401 driven through two GPIO outputs and one ADC channel
pub struct Tsl1401<SI, CLK, AO> {
    si: SI,
    clk: CLK,
    ao: AO,
    /// Failed conversions since the last `take_conversion_errors`
    conversion_errors: u32,
}

impl<SI: OutputPin, CLK: OutputPin, AO: AnalogInput> Tsl1401<SI, CLK, AO> {
    /// Create the driver with both control lines low
    pub fn new(si: SI, clk: CLK, ao: AO) -> Self {
        let mut sensor = Self {
            si,
            clk,
            ao,
            conversion_errors: 0,
        };
        sensor.si.set_low();
        sensor.clk.set_low();
        sensor
    }

    /// Return and reset the failed-conversion counter
    ///
    /// Failures are counted rather than reported inline so nothing slows
    /// down the pulse loop.
    pub fn take_conversion_errors(&mut self) -> u32 {
        core::mem::take(&mut self.conversion_errors)
    }

    /// Release the pins and ADC channel
    pub fn release(self) -> (SI, CLK, AO) {
        (self.si, self.clk, self.ao)
    }
}

impl<SI: OutputPin, CLK: OutputPin, AO: AnalogInput> SensorLink for Tsl1401<SI, CLK, AO> {
    fn set(&mut self, line: SensorLine, level: Level) {
        match line {
            SensorLine::Strobe => self.si.set_state(level.is_high()),
            SensorLine::Clock => self.clk.set_state(level.is_high()),
        }
    }

    fn read_pixel(&mut self) -> u16 {
        match self.ao.read() {
            Ok(value) => value.min(AO::MAX_VALUE),
            Err(_) => {
                // A lost conversion reads as a dark pixel
                self.conversion_errors = self.conversion_errors.saturating_add(1);
                0
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use linescan_hal::AdcError;

    /// Mock GPIO pin for testing
    struct MockPin {
        high: bool,
        edges: u32,
    }

    impl MockPin {
        fn new(high: bool) -> Self {
            Self { high, edges: 0 }
        }
    }

    impl OutputPin for MockPin {
        fn set_high(&mut self) {
            if !self.high {
                self.edges += 1;
            }
            self.high = true;
        }

        fn set_low(&mut self) {
            if self.high {
                self.edges += 1;
            }
            self.high = false;
        }

        fn is_set_high(&self) -> bool {
            self.high
        }
    }

    /// ADC returning a scripted sequence, `None` meaning a failed conversion
    struct ScriptedAdc {
        script: &'static [Option<u16>],
        next: usize,
    }

    impl AnalogInput for ScriptedAdc {
        const MAX_VALUE: u16 = 4095;

        fn read(&mut self) -> Result<u16, AdcError> {
            let value = self.script[self.next % self.script.len()];
            self.next += 1;
            value.ok_or(AdcError::Conversion)
        }
    }

    fn sensor(script: &'static [Option<u16>]) -> Tsl1401<MockPin, MockPin, ScriptedAdc> {
        Tsl1401::new(
            MockPin::new(true),
            MockPin::new(true),
            ScriptedAdc { script, next: 0 },
        )
    }

    #[test]
    fn test_lines_start_low() {
        let sensor = sensor(&[Some(0)]);
        let (si, clk, _) = sensor.release();
        assert!(si.is_set_low());
        assert!(clk.is_set_low());
    }

    #[test]
    fn test_lines_map_to_pins() {
        let mut sensor = sensor(&[Some(0)]);

        sensor.set(SensorLine::Strobe, Level::High);
        assert!(sensor.si.is_set_high());
        assert!(sensor.clk.is_set_low());

        sensor.set(SensorLine::Clock, Level::High);
        sensor.set(SensorLine::Strobe, Level::Low);
        sensor.set(SensorLine::Clock, Level::Low);
        assert!(sensor.si.is_set_low());
        assert!(sensor.clk.is_set_low());

        // Construction low + one pulse each
        assert_eq!(sensor.si.edges, 3);
        assert_eq!(sensor.clk.edges, 3);
    }

    #[test]
    fn test_read_pixel_passes_values() {
        let mut sensor = sensor(&[Some(120), Some(3900), Some(2500)]);
        assert_eq!(sensor.read_pixel(), 120);
        assert_eq!(sensor.read_pixel(), 3900);
        assert_eq!(sensor.read_pixel(), 2500);
        assert_eq!(sensor.take_conversion_errors(), 0);
    }

    #[test]
    fn test_failed_conversion_reads_dark() {
        let mut sensor = sensor(&[Some(3000), None, None]);
        assert_eq!(sensor.read_pixel(), 3000);
        assert_eq!(sensor.read_pixel(), 0);
        assert_eq!(sensor.read_pixel(), 0);

        assert_eq!(sensor.take_conversion_errors(), 2);
        assert_eq!(sensor.take_conversion_errors(), 0);
    }
}
