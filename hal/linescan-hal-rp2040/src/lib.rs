//! RP2040-specific HAL for the line-scan camera firmware
//!
//! This crate provides RP2040 implementations of the shared `linescan-hal`
//! traits, plus the tick clock used for exposure timing:
//!
//! - GPIO outputs for the sensor SI/CLK lines
//! - Blocking ADC channel for the sensor AO line
//! - Blocking UART transmitter for the serial LCD
//! - Tick clock backed by the embassy time driver

#![no_std]

pub mod adc;
pub mod gpio;
pub mod timer;
pub mod uart;

pub use adc::RpAnalogInput;
pub use gpio::{output, RpOutput};
pub use timer::SystemTicks;
pub use uart::{rp_uart_config, RpUartTx};
