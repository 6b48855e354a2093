use std::fmt;

use super::{Canvas, QUIET_ZONE};
use crate::generator::SymbolMatrix;

/// Character grid for terminals. One cell is two characters wide so modules
/// come out roughly square.
#[derive(Debug, Clone)]
pub struct TextCanvas {
    width: usize,
    cells: Vec<bool>,
    invert: bool,
}

impl TextCanvas {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width as usize,
            cells: vec![false; width as usize * height as usize],
            invert: false,
        }
    }

    /// Draws light modules as blocks, for dark terminal backgrounds.
    pub fn inverted(mut self) -> Self {
        self.invert = true;
        self
    }
}

impl Canvas for TextCanvas {
    fn fill_cell(&mut self, x: u32, y: u32, cell_size: u32, dark: bool) {
        for cy in y..y + cell_size {
            for cx in x..x + cell_size {
                let (cx, cy) = (cx as usize, cy as usize);
                if cx < self.width {
                    if let Some(cell) = self.cells.get_mut(cy * self.width + cx) {
                        *cell = dark;
                    }
                }
            }
        }
    }
}

impl fmt::Display for TextCanvas {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width.max(1)) {
            for &dark in row {
                f.write_str(if dark != self.invert { "██" } else { "  " })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Terminal rendering of `matrix` with its quiet zone.
pub fn render(matrix: &SymbolMatrix, invert: bool) -> TextCanvas {
    let side = matrix.bordered_size();
    let mut canvas = TextCanvas::new(side, side);
    if invert {
        canvas = canvas.inverted();
    }
    matrix.draw(&mut canvas, (QUIET_ZONE, QUIET_ZONE), 1);
    canvas
}
