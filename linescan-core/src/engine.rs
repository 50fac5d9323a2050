//! Acquisition engine
//!
//! Drives the sensor through one 128-pulse scan per iteration and runs the
//! two-phase camera cycle:
//!
//! ```text
//!   ┌──────────────────────┐   scan: start exposure at pulse 18
//!   │   AwaitingExposure   │   then render last frame, spin until
//!   └──────────┬───────────┘   the exposure period has elapsed
//!              │
//!              ▼
//!   ┌──────────────────────┐   scan: digitise the sampling window
//!   │      Capturing       │   into the frame buffer
//!   └──────────┬───────────┘
//!              │
//!              └──────────► back to AwaitingExposure
//! ```
//!
//! A captured frame is displayed one iteration later, during the next
//! exposure wait.

use crate::config::{CameraConfig, ConfigError, SamplingWindow, SensorConfig, LINE_WIDTH};
use crate::frame::FrameBuffer;
use crate::render::DisplayRenderer;
use crate::state::CameraState;
use crate::timing::ExposureWindow;
use crate::traits::{DisplayError, GlyphDisplay, Level, SensorLine, SensorLink, TickClock};

/// Outcome of one engine iteration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum CycleReport {
    /// Exposure scan finished: the previous frame was rendered and the
    /// exposure period has elapsed
    Exposed {
        /// Result of drawing the previous frame
        render: Result<(), DisplayError>,
        /// Ticks from exposure start to the end of the wait
        elapsed_ticks: u32,
    },
    /// Capture scan finished
    Captured {
        /// Samples stored in the frame buffer
        samples: usize,
    },
}

/// Line-scan acquisition engine
///
/// Owns the sensor link, the tick clock, the renderer and the frame buffer.
/// Rendering only ever borrows the buffer between scans.
pub struct AcquisitionEngine<L, C, D, const W: usize = LINE_WIDTH> {
    link: L,
    clock: C,
    renderer: DisplayRenderer<D>,
    sensor: SensorConfig,
    sampling: SamplingWindow,
    exposure: ExposureWindow,
    state: CameraState,
    frame: FrameBuffer<W>,
    /// Tick recorded at pulse `clocks_until_exposure` of the last exposure scan
    exposure_start: u32,
    cycles: u32,
}

impl<L, C, D, const W: usize> AcquisitionEngine<L, C, D, W>
where
    L: SensorLink,
    C: TickClock,
    D: GlyphDisplay,
{
    /// Create an engine in the `AwaitingExposure` state
    ///
    /// Fails if the sampling window does not fit a `W`-sample frame, or if
    /// the exposure cannot be measured on this clock.
    pub fn new(link: L, clock: C, display: D, config: &CameraConfig) -> Result<Self, ConfigError> {
        config.validate(W)?;
        let exposure = ExposureWindow::new(config.exposure_us, clock.ticks_per_us())?;

        Ok(Self {
            link,
            clock,
            renderer: DisplayRenderer::new(display, config.threshold),
            sensor: config.sensor,
            sampling: config.sampling,
            exposure,
            state: CameraState::default(),
            frame: FrameBuffer::new(),
            exposure_start: 0,
            cycles: 0,
        })
    }

    /// Current state (phase of the next scan)
    pub fn state(&self) -> CameraState {
        self.state
    }

    /// Most recently captured frame
    pub fn frame(&self) -> &FrameBuffer<W> {
        &self.frame
    }

    /// Exposure window in effect
    pub fn exposure(&self) -> ExposureWindow {
        self.exposure
    }

    /// Completed iterations (wrapping)
    pub fn cycles(&self) -> u32 {
        self.cycles
    }

    /// Get access to the sensor link
    pub fn link(&self) -> &L {
        &self.link
    }

    /// Get mutable access to the sensor link
    pub fn link_mut(&mut self) -> &mut L {
        &mut self.link
    }

    /// Get access to the renderer
    pub fn renderer(&self) -> &DisplayRenderer<D> {
        &self.renderer
    }

    /// Run the camera loop forever
    pub fn run(&mut self) -> ! {
        loop {
            self.run_cycle();
        }
    }

    /// Run one iteration: a full scan followed by the phase transition
    pub fn run_cycle(&mut self) -> CycleReport {
        let phase = self.state;
        self.scan(phase);

        let report = match phase {
            CameraState::AwaitingExposure => {
                // Frame is stale by one iteration: it was captured on the
                // previous Capturing pass.
                let render = self.renderer.render(&self.frame);
                let elapsed_ticks = self
                    .exposure
                    .deadline_from(self.exposure_start)
                    .block_until(&self.clock);
                CycleReport::Exposed {
                    render,
                    elapsed_ticks,
                }
            }
            CameraState::Capturing => CycleReport::Captured {
                samples: self.frame.written(),
            },
        };

        self.state = phase.transition();
        self.cycles = self.cycles.wrapping_add(1);
        report
    }

    /// Clock one full scan out of the sensor
    fn scan(&mut self, phase: CameraState) {
        let capturing = phase.samples_pixels();
        let records_exposure = phase.starts_exposure();
        if capturing {
            self.frame.rewind();
        }

        self.link.set(SensorLine::Strobe, Level::High);

        for j in 0..self.sensor.pixel_count {
            self.link.set(SensorLine::Clock, Level::High);

            if j == 0 {
                self.link.set(SensorLine::Strobe, Level::Low);
            }

            if records_exposure && j == self.sensor.clocks_until_exposure {
                self.exposure_start = self.clock.now();
            }

            if capturing && self.sampling.contains(j) {
                let stored = self.frame.push(self.link.read_pixel());
                // Window size was checked against W in `new`
                debug_assert!(stored.is_ok(), "sampling window overflows frame");
            }

            self.link.set(SensorLine::Clock, Level::Low);
        }
    }
}
