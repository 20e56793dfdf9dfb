//! Cyclic cursor over an animation's frame table.

use super::catalog::FrameMask;

/// Walks the ordered frame table, wrapping unconditionally.
///
/// The cursor never stops on its own: the last frame of a cycle reports
/// `remaining == 0` and the next call starts over at frame 0. Stopping a
/// one-shot animation is the caller's job.
#[derive(Debug, Clone)]
pub(crate) struct FrameCursor {
    frames: &'static [FrameMask],
    index: usize,
}

impl FrameCursor {
    pub(crate) const fn new(frames: &'static [FrameMask]) -> Self {
        Self { frames, index: 0 }
    }

    /// Return the current frame and how many frames remain in this cycle,
    /// then advance.
    pub(crate) fn next(&mut self) -> (usize, FrameMask) {
        let remaining = self.frames.len() - self.index - 1;
        let mask = self.frames[self.index];

        self.index += 1;
        if self.index >= self.frames.len() {
            self.index = 0;
        }

        (remaining, mask)
    }
}
