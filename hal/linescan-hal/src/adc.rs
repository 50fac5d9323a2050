//! Analog input abstraction
//!
//! One trait object per physical channel: the camera reads a single analog
//! line and never switches channels mid-scan.

/// Errors reported by an ADC conversion
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum AdcError {
    /// Conversion did not complete or was flagged invalid by the peripheral
    Conversion,
}

/// Single ADC channel bound to one input pin
pub trait AnalogInput {
    /// Full-scale reading of the converter (4095 for 12-bit)
    const MAX_VALUE: u16;

    /// Perform one blocking conversion
    fn read(&mut self) -> Result<u16, AdcError>;
}
