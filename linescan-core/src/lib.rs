//! Board-agnostic core logic for the line-scan camera firmware
//!
//! This crate contains all acquisition logic that does not depend on
//! specific hardware implementations:
//!
//! - Collaborator traits (sensor link, tick clock, glyph display)
//! - Two-phase camera state machine
//! - Acquisition engine (strobe/clock protocol, decimated sampling)
//! - Exposure timing with wrap-safe tick arithmetic
//! - Frame buffer and threshold renderer
//! - Configuration type definitions

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod config;
pub mod engine;
pub mod frame;
pub mod render;
pub mod state;
pub mod timing;
pub mod traits;

pub use config::{CameraConfig, ConfigError, SamplingWindow, SensorConfig, LINE_WIDTH};
pub use engine::{AcquisitionEngine, CycleReport};
pub use frame::FrameBuffer;
pub use render::DisplayRenderer;
pub use state::CameraState;
pub use timing::{Deadline, ExposureWindow};
