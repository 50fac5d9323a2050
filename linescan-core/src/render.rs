//! Threshold renderer
//!
//! Turns a frame into one line of bright/dark glyphs. The LCD is cleared
//! before every line so the cursor always starts at column 0.

use crate::frame::FrameBuffer;
use crate::traits::{DisplayError, Glyph, GlyphDisplay};

/// Classify samples against `threshold`, in order
pub fn threshold_line(samples: &[u16], threshold: u16) -> impl Iterator<Item = Glyph> + '_ {
    samples
        .iter()
        .map(move |&value| Glyph::from_intensity(value, threshold))
}

/// Renders frames to a glyph display
pub struct DisplayRenderer<D> {
    display: D,
    threshold: u16,
}

impl<D: GlyphDisplay> DisplayRenderer<D> {
    /// Create a renderer with the given intensity threshold
    pub fn new(display: D, threshold: u16) -> Self {
        Self { display, threshold }
    }

    /// Intensity threshold in raw ADC counts
    pub fn threshold(&self) -> u16 {
        self.threshold
    }

    /// Clear the display, draw one glyph per frame slot, then flush
    ///
    /// Stops at the first transport error. Rendering never modifies the
    /// frame, so repeating it draws the same line.
    pub fn render<const W: usize>(&mut self, frame: &FrameBuffer<W>) -> Result<(), DisplayError> {
        self.display.clear()?;
        for glyph in threshold_line(frame.as_slice(), self.threshold) {
            self.display.write_glyph(glyph)?;
        }
        self.display.flush()
    }

    /// Get access to the underlying display
    pub fn display(&self) -> &D {
        &self.display
    }

    /// Get mutable access to the underlying display
    pub fn display_mut(&mut self) -> &mut D {
        &mut self.display
    }
}
