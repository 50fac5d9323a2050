//! Hardware driver implementations
//!
//! This crate provides concrete implementations of the collaborator traits
//! defined in linescan-core, built on the linescan-hal pin/ADC/UART traits:
//!
//! - TSL1401 line-scan sensor (bit-banged SI/CLK, analog AO)
//! - Serial character LCD (glyph output over UART)

#![no_std]
#![deny(unsafe_code)]

pub mod display;
pub mod sensor;
