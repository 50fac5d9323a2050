//! Camera state machine
//!
//! The camera alternates between two scan phases forever: one scan that
//! starts an exposure and waits it out, one scan that digitises pixels.

pub mod machine;

pub use machine::CameraState;
