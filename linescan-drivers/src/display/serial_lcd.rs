//! Serial character LCD
//!
//! Backpack-style LCD on a TX-only UART. Characters are printed at the
//! cursor; the escape byte `0x7C` introduces a command, and command `0x00`
//! clears the screen and homes the cursor.

use linescan_core::traits::{DisplayError, Glyph, GlyphDisplay};
use linescan_hal::UartTx;

/// Command prefix byte
pub const COMMAND_PREFIX: u8 = 0x7C;

/// Clear screen + home cursor
pub const CLEAR_COMMAND: [u8; 2] = [COMMAND_PREFIX, 0x00];

/// Glyph display over a serial LCD link
pub struct SerialLcd<U> {
    uart: U,
    /// Glyphs written since the last clear
    column: u8,
    /// Characters per line
    width: u8,
}

impl<U: UartTx> SerialLcd<U> {
    /// Create a driver for an LCD with `width` columns
    pub fn new(uart: U, width: u8) -> Self {
        Self {
            uart,
            column: 0,
            width,
        }
    }

    /// Current cursor column
    pub fn column(&self) -> u8 {
        self.column
    }

    /// Get access to the underlying UART
    pub fn uart(&self) -> &U {
        &self.uart
    }

    /// Release the UART
    pub fn release(self) -> U {
        self.uart
    }
}

impl<U: UartTx> GlyphDisplay for SerialLcd<U> {
    fn clear(&mut self) -> Result<(), DisplayError> {
        self.uart
            .write_blocking(&CLEAR_COMMAND)
            .map_err(|_| DisplayError::Communication)?;
        self.column = 0;
        Ok(())
    }

    fn write_glyph(&mut self, glyph: Glyph) -> Result<(), DisplayError> {
        // Past the last column the LCD wraps onto the next line
        if self.column >= self.width {
            return Err(DisplayError::BufferOverflow);
        }
        self.uart
            .write_byte(glyph.as_byte())
            .map_err(|_| DisplayError::Communication)?;
        self.column += 1;
        Ok(())
    }

    fn flush(&mut self) -> Result<(), DisplayError> {
        self.uart.flush().map_err(|_| DisplayError::Communication)
    }
}
