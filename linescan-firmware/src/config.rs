//! Camera configuration
//!
//! Constants are generated by build.rs from `camera.toml`. The build script
//! already validated them; the assertion below re-checks the window against
//! the real frame buffer width so the two can never drift apart.

use linescan_core::config::LINE_WIDTH;
use linescan_hal::UartConfig;

include!(concat!(env!("OUT_DIR"), "/camera_config.rs"));

const _: () = assert!(
    CAMERA.validate(LINE_WIDTH).is_ok(),
    "camera.toml sampling window does not fit the LCD line"
);

/// Serial LCD link settings (8N1)
pub const LCD_UART: UartConfig = UartConfig::with_baudrate(LCD_BAUDRATE);
