//! Configuration types
//!
//! Camera configuration is fixed at build time. The firmware embeds a
//! validated [`CameraConfig`] generated from `camera.toml`.

pub mod types;

pub use types::*;
