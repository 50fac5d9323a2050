//! Linescan Hardware Abstraction Layer
//!
//! This crate defines the hardware abstraction traits the camera drivers are
//! written against. Chip-specific HALs (currently RP2040) implement them, so
//! the sensor and display drivers stay host-testable.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  Drivers (linescan-drivers)             │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  linescan-hal (this crate - traits)     │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//!             ┌───────────────┐
//!             │ linescan-hal- │
//!             │    rp2040     │
//!             └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`gpio::OutputPin`] - Digital outputs (sensor SI / CLK lines)
//! - [`adc::AnalogInput`] - Single ADC channel (sensor AO line)
//! - [`uart::UartTx`] - Serial transmit (LCD link)

#![no_std]
#![deny(unsafe_code)]

pub mod adc;
pub mod gpio;
pub mod uart;

// Re-export key traits at crate root for convenience
pub use adc::{AdcError, AnalogInput};
pub use gpio::{EhOutput, OutputPin};
pub use uart::{UartConfig, UartTx};
