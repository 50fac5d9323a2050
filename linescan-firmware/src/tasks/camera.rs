//! Camera acquisition task
//!
//! Runs the acquisition engine forever. The exposure wait is a busy spin on
//! the tick counter, so this task never returns control to the executor;
//! nothing else may be spawned alongside it.

use defmt::*;

use linescan_core::{AcquisitionEngine, CycleReport};
use linescan_drivers::display::SerialLcd;
use linescan_drivers::sensor::Tsl1401;
use linescan_hal_rp2040::{RpAnalogInput, RpOutput, RpUartTx, SystemTicks};

/// Concrete engine for this board
pub type Camera = AcquisitionEngine<
    Tsl1401<RpOutput<'static>, RpOutput<'static>, RpAnalogInput<'static>>,
    SystemTicks,
    SerialLcd<RpUartTx<'static>>,
>;

/// Camera task - scans, captures and draws frames forever
#[embassy_executor::task]
pub async fn camera_task(mut camera: Camera) {
    info!(
        "Camera task started (exposure {} us = {} ticks)",
        camera.exposure().duration_us(),
        camera.exposure().ticks()
    );

    loop {
        match camera.run_cycle() {
            CycleReport::Exposed {
                render,
                elapsed_ticks,
            } => {
                // The frame just drawn; raw values for bench calibration
                debug!(
                    "Frame {}: {} (exposed {} ticks)",
                    camera.cycles(),
                    camera.frame().as_slice(),
                    elapsed_ticks
                );
                if let Err(e) = render {
                    warn!("LCD render failed: {:?}", e);
                }
            }
            CycleReport::Captured { samples } => {
                trace!("Captured {} samples", samples);
                let failed = camera.link_mut().take_conversion_errors();
                if failed > 0 {
                    warn!("{} ADC conversions failed during capture", failed);
                }
            }
        }
    }
}
