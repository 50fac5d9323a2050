//! ADC channel
//!
//! RP2040 has a single 12-bit SAR ADC shared by GPIO26-29 and the internal
//! temperature sensor. The camera uses blocking one-shot conversions: a
//! conversion takes ~2 µs, well inside one clock pulse.

use embassy_rp::adc::{Adc, Blocking, Channel};
use linescan_hal::{AdcError, AnalogInput};

/// One ADC channel with exclusive use of the converter
pub struct RpAnalogInput<'d> {
    adc: Adc<'d, Blocking>,
    channel: Channel<'d>,
}

impl<'d> RpAnalogInput<'d> {
    pub fn new(adc: Adc<'d, Blocking>, channel: Channel<'d>) -> Self {
        Self { adc, channel }
    }
}

impl AnalogInput for RpAnalogInput<'_> {
    const MAX_VALUE: u16 = 4095;

    fn read(&mut self) -> Result<u16, AdcError> {
        self.adc
            .blocking_read(&mut self.channel)
            .map_err(|_| AdcError::Conversion)
    }
}
