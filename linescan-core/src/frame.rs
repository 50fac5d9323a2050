//! Frame buffer
//!
//! Holds the decimated samples of the most recent capture scan, in pixel
//! order. Every slot maps to one display column. Slots start at zero and are
//! overwritten in place on each capture; no history is kept.

use crate::config::LINE_WIDTH;

/// Fixed-size sample buffer, one slot per display column
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FrameBuffer<const W: usize = LINE_WIDTH> {
    samples: [u16; W],
    /// Next slot written by `push`
    cursor: usize,
}

impl<const W: usize> FrameBuffer<W> {
    /// Create a buffer with every slot at zero
    pub const fn new() -> Self {
        Self {
            samples: [0; W],
            cursor: 0,
        }
    }

    /// Start overwriting from the first slot
    ///
    /// Slots keep their old values until written again.
    pub fn rewind(&mut self) {
        self.cursor = 0;
    }

    /// Store a sample in the next slot
    ///
    /// Returns the sample back if every slot was already written since the
    /// last rewind.
    pub fn push(&mut self, sample: u16) -> Result<(), u16> {
        let slot = self.samples.get_mut(self.cursor).ok_or(sample)?;
        *slot = sample;
        self.cursor += 1;
        Ok(())
    }

    /// All slots in pixel order
    pub fn as_slice(&self) -> &[u16] {
        &self.samples
    }

    /// Iterate over all slots in pixel order
    pub fn iter(&self) -> core::slice::Iter<'_, u16> {
        self.samples.iter()
    }

    /// Slots written since the last rewind
    pub fn written(&self) -> usize {
        self.cursor
    }

    /// Number of slots
    pub const fn capacity(&self) -> usize {
        W
    }
}

impl<const W: usize> Default for FrameBuffer<W> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const W: usize> IntoIterator for &'a FrameBuffer<W> {
    type Item = &'a u16;
    type IntoIter = core::slice::Iter<'a, u16>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
