//! Pixel buffer over the physical LED bus.
//!
//! The surface exclusively owns its buffer; pixels change only through
//! `fill`/`set_pixel`/`paint_mask` and reach the hardware only through
//! `show`, the single operation with bus latency.

use crate::animation::FrameMask;
use crate::{LedBus, Rgb};

/// Error returned for a pixel index outside the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutOfRange(pub usize);

/// Fixed-size pixel surface flushed to a [`LedBus`].
pub struct Surface<B: LedBus, const CELLS: usize> {
    bus: B,
    buffer: [Rgb; CELLS],
}

impl<B: LedBus, const CELLS: usize> Surface<B, CELLS> {
    pub fn new(bus: B) -> Self {
        Self {
            bus,
            buffer: [Rgb::default(); CELLS],
        }
    }

    /// Set every pixel to one color.
    pub fn fill(&mut self, color: Rgb) {
        self.buffer.fill(color);
    }

    /// Set one cell.
    pub fn set_pixel(&mut self, index: usize, color: Rgb) -> Result<(), OutOfRange> {
        let pixel = self.buffer.get_mut(index).ok_or(OutOfRange(index))?;
        *pixel = color;
        Ok(())
    }

    /// Paint a frame bitmask: lit bits get `on`, the rest get `off`.
    ///
    /// Bit `CELLS - 1 - i` of the mask drives cell `i`.
    pub fn paint_mask(&mut self, mask: FrameMask, on: Rgb, off: Rgb) {
        for (index, pixel) in self.buffer.iter_mut().enumerate() {
            let lit = mask >> (CELLS - 1 - index) & 1 == 1;
            *pixel = if lit { on } else { off };
        }
    }

    /// Flush the buffer to the physical bus.
    pub fn show(&mut self) {
        self.bus.write(&self.buffer);
    }

    /// Number of cells on the surface.
    pub const fn cell_count(&self) -> usize {
        CELLS
    }

    /// Current buffer contents.
    pub fn pixels(&self) -> &[Rgb] {
        &self.buffer
    }

    /// Get a reference to the underlying bus.
    pub fn bus(&self) -> &B {
        &self.bus
    }
}
