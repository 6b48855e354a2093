//! Drawing a [`SymbolMatrix`] onto an output surface.
//!
//! The matrix itself knows nothing about pixels; a [`Canvas`] receives one
//! call per module with its screen position and cell size.

pub mod raster;
pub mod text;

use crate::generator::SymbolMatrix;

/// Modules of light border required around a symbol.
pub const QUIET_ZONE: u32 = 4;

pub trait Canvas {
    /// Paints the `cell_size` square whose top-left corner is at (`x`, `y`).
    fn fill_cell(&mut self, x: u32, y: u32, cell_size: u32, dark: bool);
}

impl SymbolMatrix {
    /// Paints every module, the top-left module at `origin`.
    pub fn draw<C: Canvas + ?Sized>(&self, canvas: &mut C, origin: (u32, u32), cell_size: u32) {
        for (y, row) in self.rows().enumerate() {
            for (x, &dark) in row.iter().enumerate() {
                canvas.fill_cell(
                    origin.0 + x as u32 * cell_size,
                    origin.1 + y as u32 * cell_size,
                    cell_size,
                    dark,
                );
            }
        }
    }

    /// Side length in cells including the quiet zone on both sides.
    pub fn bordered_size(&self) -> u32 {
        self.size() as u32 + 2 * QUIET_ZONE
    }
}
