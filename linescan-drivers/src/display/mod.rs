//! Display drivers

pub mod serial_lcd;

pub use serial_lcd::{SerialLcd, CLEAR_COMMAND};
