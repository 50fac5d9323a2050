//! Glyph display trait
//!
//! The display is a character LCD driven one glyph at a time. Frames are
//! drawn as a single line of bright/dark glyphs.

/// Errors that can occur with display communication
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// Transport failed to send
    Communication,
    /// More glyphs written than the line holds
    BufferOverflow,
}

/// One rendered pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Glyph {
    /// Intensity above threshold
    High,
    /// Intensity at or below threshold
    Low,
}

impl Glyph {
    /// Classify an intensity against `threshold`
    pub const fn from_intensity(value: u16, threshold: u16) -> Self {
        if value > threshold {
            Glyph::High
        } else {
            Glyph::Low
        }
    }

    /// Character drawn for this glyph
    pub const fn as_char(self) -> char {
        match self {
            Glyph::High => '-',
            Glyph::Low => '_',
        }
    }

    /// ASCII byte sent to the display
    pub const fn as_byte(self) -> u8 {
        self.as_char() as u8
    }
}

/// Trait for glyph-oriented displays
pub trait GlyphDisplay {
    /// Clear the display and home the cursor
    fn clear(&mut self) -> Result<(), DisplayError>;

    /// Write one glyph at the cursor and advance it
    fn write_glyph(&mut self, glyph: Glyph) -> Result<(), DisplayError>;

    /// Push a completed line out to the panel
    fn flush(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }
}
