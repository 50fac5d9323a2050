//! GPIO outputs
//!
//! embassy-rp outputs implement the embedded-hal 1.0 pin traits, so the
//! shared adapter from `linescan-hal` is used as-is.

use embassy_rp::gpio::{Level, Output, Pin};
use embassy_rp::Peri;
use linescan_hal::EhOutput;

/// RP2040 push-pull output
pub type RpOutput<'d> = EhOutput<Output<'d>>;

/// Configure `pin` as an output driven low
pub fn output<'d>(pin: Peri<'d, impl Pin>) -> RpOutput<'d> {
    EhOutput::new(Output::new(pin, Level::Low), false)
}
