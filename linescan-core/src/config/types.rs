//! Configuration type definitions
//!
//! These types describe the sensor geometry, the decimated sampling window
//! and the exposure/threshold settings. Defaults match a TSL1401 sensor
//! driving a 21-column serial LCD.

/// Number of pixels shifted out by the sensor per scan
pub const PIXEL_COUNT: usize = 128;

/// Clock pulses after strobe before the exposure period can start
pub const CLOCKS_UNTIL_EXPOSURE: usize = 18;

/// First sampled pixel (and distance of the last one from the far edge)
pub const SAMPLING_START: usize = 34;

/// Distance between sampled pixels
pub const SAMPLING_STRIDE: usize = 3;

/// Intensity above which a sample is drawn as bright
pub const INTENSITY_THRESHOLD: u16 = 2500;

/// Exposure duration in microseconds
pub const EXPOSURE_US: u32 = 300_000;

/// Characters per LCD line, and therefore frame buffer capacity
pub const LINE_WIDTH: usize = 21;

/// Configuration errors
///
/// All of these are contract violations in the build-time configuration;
/// none can occur once an engine has been constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ConfigError {
    /// More pixels selected than the frame buffer holds
    SamplingOverflow { samples: usize, capacity: usize },
    /// Sampling window selects no pixel at all
    EmptySamplingWindow,
    /// Sampling stride of zero
    ZeroStride,
    /// Exposure latency is not reached within one scan
    LatencyBeyondScan,
    /// Exposure does not fit in half the tick counter range
    ExposureTooLong,
    /// Platform reports less than one tick per microsecond
    ZeroTickRate,
}

/// Sensor geometry and protocol latency
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SensorConfig {
    /// Pixels (clock pulses) per scan
    pub pixel_count: usize,
    /// Pulse index at which the exposure period starts
    pub clocks_until_exposure: usize,
}

impl SensorConfig {
    pub const DEFAULT: Self = Self {
        pixel_count: PIXEL_COUNT,
        clocks_until_exposure: CLOCKS_UNTIL_EXPOSURE,
    };
}

impl Default for SensorConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Decimated subset of pixel positions that get digitised
///
/// Position `j` is sampled iff `start <= j <= end` and
/// `(j - start) % stride == 0`. The edges of the shift register are left
/// out because the analog output is unreliable there.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct SamplingWindow {
    /// First sampled position
    pub start: usize,
    /// Last position that may be sampled (inclusive)
    pub end: usize,
    /// Distance between sampled positions
    pub stride: usize,
}

impl SamplingWindow {
    pub const DEFAULT: Self = Self::symmetric(PIXEL_COUNT, SAMPLING_START, SAMPLING_STRIDE);

    /// Window trimming `margin` pixels from the start and ending at
    /// `pixel_count - margin`
    pub const fn symmetric(pixel_count: usize, margin: usize, stride: usize) -> Self {
        Self {
            start: margin,
            end: pixel_count.saturating_sub(margin),
            stride,
        }
    }

    /// Check whether pixel position `j` is sampled
    pub const fn contains(&self, j: usize) -> bool {
        if j < self.start || j > self.end {
            return false;
        }
        matches!((j - self.start).checked_rem(self.stride), Some(0))
    }

    /// Number of sampled positions within a scan of `pixel_count` pixels
    pub const fn count(&self, pixel_count: usize) -> usize {
        if self.stride == 0 || pixel_count == 0 || self.start > self.end {
            return 0;
        }
        let last = if self.end < pixel_count - 1 {
            self.end
        } else {
            pixel_count - 1
        };
        if self.start > last {
            return 0;
        }
        (last - self.start) / self.stride + 1
    }

    /// Sampled positions within a scan of `pixel_count` pixels, in order
    pub fn positions(&self, pixel_count: usize) -> impl Iterator<Item = usize> + '_ {
        (0..pixel_count).filter(move |&j| self.contains(j))
    }
}

impl Default for SamplingWindow {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// Complete camera configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CameraConfig {
    /// Sensor geometry
    pub sensor: SensorConfig,
    /// Which pixels are digitised
    pub sampling: SamplingWindow,
    /// Exposure duration in microseconds
    pub exposure_us: u32,
    /// Bright/dark threshold for rendering
    pub threshold: u16,
}

impl CameraConfig {
    pub const DEFAULT: Self = Self {
        sensor: SensorConfig::DEFAULT,
        sampling: SamplingWindow::DEFAULT,
        exposure_us: EXPOSURE_US,
        threshold: INTENSITY_THRESHOLD,
    };

    /// Number of samples stored per captured frame
    pub const fn samples_per_frame(&self) -> usize {
        self.sampling.count(self.sensor.pixel_count)
    }

    /// Check the static invariants against a frame buffer of `capacity`
    ///
    /// `const` so firmware can reject a bad configuration at compile time.
    /// Exposure length is checked separately because it depends on the
    /// platform tick rate, see [`crate::timing::ExposureWindow::new`].
    pub const fn validate(&self, capacity: usize) -> Result<(), ConfigError> {
        if self.sampling.stride == 0 {
            return Err(ConfigError::ZeroStride);
        }
        if self.sensor.clocks_until_exposure >= self.sensor.pixel_count {
            return Err(ConfigError::LatencyBeyondScan);
        }
        let samples = self.samples_per_frame();
        if samples == 0 {
            return Err(ConfigError::EmptySamplingWindow);
        }
        if samples > capacity {
            return Err(ConfigError::SamplingOverflow { samples, capacity });
        }
        Ok(())
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self::DEFAULT
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_default_window_fills_line() {
        let window = SamplingWindow::default();
        assert_eq!(window.start, 34);
        assert_eq!(window.end, 94);
        assert_eq!(window.count(PIXEL_COUNT), LINE_WIDTH);

        let expected: Vec<usize> = (0..21).map(|i| 34 + 3 * i).collect();
        let actual: Vec<usize> = window.positions(PIXEL_COUNT).collect();
        assert_eq!(actual, expected);
        assert_eq!(actual.last(), Some(&94));
    }

    #[test]
    fn test_contains_edges() {
        let window = SamplingWindow::default();
        assert!(!window.contains(0));
        assert!(!window.contains(33));
        assert!(window.contains(34));
        assert!(!window.contains(35));
        assert!(window.contains(37));
        assert!(window.contains(94));
        assert!(!window.contains(97));
        assert!(!window.contains(127));
    }

    #[test]
    fn test_zero_stride_selects_nothing() {
        let window = SamplingWindow::symmetric(PIXEL_COUNT, 34, 0);
        assert!(!window.contains(34));
        assert_eq!(window.count(PIXEL_COUNT), 0);
    }

    #[test]
    fn test_default_config_is_valid() {
        assert_eq!(CameraConfig::default().validate(LINE_WIDTH), Ok(()));
    }

    #[test]
    fn test_validate_overflow() {
        let config = CameraConfig {
            sampling: SamplingWindow::symmetric(PIXEL_COUNT, 34, 2),
            ..CameraConfig::DEFAULT
        };
        assert_eq!(
            config.validate(LINE_WIDTH),
            Err(ConfigError::SamplingOverflow {
                samples: 31,
                capacity: LINE_WIDTH
            })
        );
    }

    #[test]
    fn test_validate_rejects_bad_windows() {
        let zero_stride = CameraConfig {
            sampling: SamplingWindow::symmetric(PIXEL_COUNT, 34, 0),
            ..CameraConfig::DEFAULT
        };
        assert_eq!(zero_stride.validate(LINE_WIDTH), Err(ConfigError::ZeroStride));

        let empty = CameraConfig {
            sampling: SamplingWindow::symmetric(PIXEL_COUNT, 100, 3),
            ..CameraConfig::DEFAULT
        };
        assert_eq!(empty.validate(LINE_WIDTH), Err(ConfigError::EmptySamplingWindow));

        let late = CameraConfig {
            sensor: SensorConfig {
                pixel_count: PIXEL_COUNT,
                clocks_until_exposure: PIXEL_COUNT,
            },
            ..CameraConfig::DEFAULT
        };
        assert_eq!(late.validate(LINE_WIDTH), Err(ConfigError::LatencyBeyondScan));
    }

    #[test]
    fn test_validate_is_const() {
        const CHECKED: Result<(), ConfigError> = CameraConfig::DEFAULT.validate(LINE_WIDTH);
        assert!(CHECKED.is_ok());
    }

    proptest! {
        #[test]
        fn prop_count_matches_positions(
            pixels in 1usize..256,
            margin in 0usize..140,
            stride in 1usize..10,
        ) {
            let window = SamplingWindow::symmetric(pixels, margin, stride);
            prop_assert_eq!(window.count(pixels), window.positions(pixels).count());
        }

        #[test]
        fn prop_positions_respect_predicate(
            margin in 0usize..64,
            stride in 1usize..10,
        ) {
            let window = SamplingWindow::symmetric(PIXEL_COUNT, margin, stride);
            for j in window.positions(PIXEL_COUNT) {
                prop_assert!(j >= margin);
                prop_assert!(j <= PIXEL_COUNT - margin);
                prop_assert_eq!((j - margin) % stride, 0);
            }
        }

        #[test]
        fn prop_valid_config_fits_buffer(
            margin in 0usize..64,
            stride in 1usize..10,
            capacity in 1usize..64,
        ) {
            let config = CameraConfig {
                sampling: SamplingWindow::symmetric(PIXEL_COUNT, margin, stride),
                ..CameraConfig::DEFAULT
            };
            if config.validate(capacity).is_ok() {
                prop_assert!(config.samples_per_frame() <= capacity);
                prop_assert!(config.samples_per_frame() > 0);
            }
        }
    }
}
