//! Embassy tasks
//!
//! The camera is the only task: its loop never yields.

pub mod camera;

pub use camera::{camera_task, Camera};
