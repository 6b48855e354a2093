use tracing::trace;

use super::{
    bitstream::bits,
    data::{DATA_BITS, FORMAT_BITS, SIZE, TIMING, TOTAL_CODEWORDS},
    mask::Masker,
};

/// A finished 21x21 symbol. `true` is a dark module.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SymbolMatrix {
    mat: [[bool; SIZE]; SIZE],
}

impl SymbolMatrix {
    pub const fn size(&self) -> usize {
        SIZE
    }

    /// Module at column `x`, row `y`.
    pub fn get(&self, x: usize, y: usize) -> bool {
        self.mat[y][x]
    }

    pub fn rows(&self) -> impl Iterator<Item = &[bool; SIZE]> {
        self.mat.iter()
    }

    /// Data region modules in placement order.
    pub fn data_modules(&self) -> impl Iterator<Item = bool> + '_ {
        Traversal::new().map(|(x, y)| self.mat[y][x])
    }
}

/// True for modules owned by finder patterns, separators, timing patterns,
/// format strips and the dark module.
pub fn is_occupied(x: usize, y: usize) -> bool {
    if x >= SIZE || y >= SIZE {
        return true; //out of bounds
    }

    if y == TIMING || x == TIMING {
        return true; //timing
    }

    //finder & format
    if x < 9 && y < 9 {
        return true;
    }

    if x >= SIZE - 8 && y < 9 {
        return true;
    }

    x < 9 && y >= SIZE - 8
}

/// Zigzag walk over the data region: column pairs from the right edge to the
/// left, alternating upward and downward, right module of a pair first.
#[derive(Debug, Clone)]
pub struct Traversal {
    col: usize,
    row: usize,
    upward: bool,
    right: bool,
    finished: bool,
}

impl Traversal {
    pub fn new() -> Self {
        Self {
            col: SIZE - 1,
            row: SIZE - 1,
            upward: true,
            right: true,
            finished: false,
        }
    }

    fn current(&self) -> (usize, usize) {
        let x = if self.right { self.col } else { self.col - 1 };
        (x, self.row)
    }

    fn advance(&mut self) {
        if self.right {
            self.right = false;
            return;
        }
        self.right = true;

        let at_edge = if self.upward {
            self.row == 0
        } else {
            self.row == SIZE - 1
        };

        if !at_edge {
            if self.upward {
                self.row -= 1;
            } else {
                self.row += 1;
            }
            return;
        }

        if self.col < 2 {
            self.finished = true;
            return;
        }

        self.col -= 2;
        if self.col == TIMING {
            self.col -= 1;
        }
        self.upward = !self.upward;
    }
}

impl Default for Traversal {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Traversal {
    type Item = (usize, usize);

    fn next(&mut self) -> Option<Self::Item> {
        while !self.finished {
            let (x, y) = self.current();
            self.advance();
            if !is_occupied(x, y) {
                return Some((x, y));
            }
        }
        None
    }
}

/// Working grid while patterns and data are being laid down.
pub struct QRCode {
    mat: [[bool; SIZE]; SIZE],
}

impl QRCode {
    pub fn new(codewords: &[u8; TOTAL_CODEWORDS], masker: &Masker) -> Self {
        let mut qr_code = Self {
            mat: [[false; SIZE]; SIZE],
        };

        qr_code.add_find_pattern();
        qr_code.add_timing_pattern();
        qr_code.add_format_symbols();
        qr_code.generate_matrix(codewords, masker);

        qr_code
    }

    pub fn finish(self) -> SymbolMatrix {
        SymbolMatrix { mat: self.mat }
    }

    fn set_bit(&mut self, x: usize, y: usize, flag: bool) {
        self.mat[y][x] = flag;
    }

    fn add_find_pattern(&mut self) {
        for x in 0..7 {
            for y in 0..7 {
                if ((y == 1 || y == 5) && (1..=5).contains(&x))
                    || ((x == 1 || x == 5) && (1..=5).contains(&y))
                {
                    continue;
                }

                self.set_bit(x, y, true);
                self.set_bit(x, y + SIZE - 7, true);
                self.set_bit(x + SIZE - 7, y, true);
            }
        }
    }

    fn add_timing_pattern(&mut self) {
        for i in 8..(SIZE - 8) {
            self.set_bit(i, TIMING, i % 2 == 0);
            self.set_bit(TIMING, i, i % 2 == 0);
        }
    }

    fn add_format_symbols(&mut self) {
        let fmt = FORMAT_BITS;
        let bit = |i: usize| (fmt >> i) & 1 == 1;

        //top left
        for y in 0..=5 {
            self.set_bit(8, y, bit(y));
        }

        self.set_bit(8, 7, bit(6));
        self.set_bit(8, 8, bit(7));
        self.set_bit(7, 8, bit(8));

        for i in 9..15 {
            self.set_bit(14 - i, 8, bit(i));
        }

        //top right
        for x in 0..=7 {
            self.set_bit(SIZE - x - 1, 8, bit(x));
        }

        //bottom left
        for i in 8..15 {
            self.set_bit(8, SIZE - 15 + i, bit(i));
        }

        //the single compulsory dark module
        self.set_bit(8, SIZE - 8, true);
    }

    fn generate_matrix(&mut self, codewords: &[u8; TOTAL_CODEWORDS], masker: &Masker) {
        let mut placed = 0;
        for (index, ((x, y), bit)) in Traversal::new().zip(bits(codewords)).enumerate() {
            self.set_bit(x, y, masker.apply(index, x, y, bit));
            placed += 1;
        }

        debug_assert_eq!(placed, DATA_BITS);
        trace!(placed, scope = ?masker.scope(), "placed data modules");
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;
    use crate::generator::mask::MaskScope;

    fn blank() -> SymbolMatrix {
        QRCode::new(&[0; TOTAL_CODEWORDS], &Masker::new(MaskScope::Uniform, 1)).finish()
    }

    #[test]
    fn traversal_covers_data_region_once() {
        let visited: Vec<_> = Traversal::new().collect();
        assert_eq!(visited.len(), DATA_BITS);

        let unique: HashSet<_> = visited.iter().copied().collect();
        assert_eq!(unique.len(), DATA_BITS);

        let free = (0..SIZE)
            .flat_map(|y| (0..SIZE).map(move |x| (x, y)))
            .filter(|&(x, y)| !is_occupied(x, y))
            .count();
        assert_eq!(free, DATA_BITS);
    }

    #[test]
    fn traversal_order() {
        let visited: Vec<_> = Traversal::new().collect();
        assert_eq!(&visited[..4], &[(20, 20), (19, 20), (20, 19), (19, 19)]);
        // first column pair runs up to row 9, then the next pair runs down
        assert_eq!(visited[22], (20, 9));
        assert_eq!(visited[23], (19, 9));
        assert_eq!(visited[24], (18, 9));
        assert_eq!(&visited[DATA_BITS - 2..], &[(1, 12), (0, 12)]);
        assert!(visited.iter().all(|&(x, y)| x != TIMING && y != TIMING));
    }

    #[test]
    fn finder_patterns() {
        let m = blank();
        for (ox, oy) in [(0, 0), (SIZE - 7, 0), (0, SIZE - 7)] {
            for i in 0..7 {
                assert!(m.get(ox + i, oy));
                assert!(m.get(ox + i, oy + 6));
                assert!(m.get(ox, oy + i));
                assert!(m.get(ox + 6, oy + i));
            }
            for i in 1..6 {
                assert!(!m.get(ox + i, oy + 1));
                assert!(!m.get(ox + 1, oy + i));
            }
            for dy in 2..5 {
                for dx in 2..5 {
                    assert!(m.get(ox + dx, oy + dy));
                }
            }
        }

        // separators
        for i in 0..8 {
            assert!(!m.get(7, i));
            assert!(!m.get(i, 7));
            assert!(!m.get(SIZE - 8, i));
            assert!(!m.get(7, SIZE - 1 - i));
        }
    }

    #[test]
    fn timing_patterns_and_dark_module() {
        let m = blank();
        for i in 8..SIZE - 8 {
            assert_eq!(m.get(i, TIMING), i % 2 == 0);
            assert_eq!(m.get(TIMING, i), i % 2 == 0);
        }
        assert!(m.get(8, SIZE - 8));
    }

    #[test]
    fn format_strips_hold_both_copies() {
        let m = blank();
        let word = |read: &dyn Fn(usize) -> bool| {
            (0..15).fold(0u16, |acc, i| acc | (u16::from(read(i)) << i))
        };

        let first = word(&|i| match i {
            0..=5 => m.get(8, i),
            6 => m.get(8, 7),
            7 => m.get(8, 8),
            8 => m.get(7, 8),
            _ => m.get(14 - i, 8),
        });
        let second = word(&|i| {
            if i < 8 {
                m.get(SIZE - 1 - i, 8)
            } else {
                m.get(8, SIZE - 15 + i)
            }
        });

        assert_eq!(first, FORMAT_BITS);
        assert_eq!(second, FORMAT_BITS);
    }

    #[test]
    fn zero_codewords_show_the_mask() {
        let m = blank();
        for (x, y) in Traversal::new() {
            assert_eq!(m.get(x, y), (x + y) % 2 == 0);
        }
    }

    #[test]
    fn data_modules_unmask_to_codewords() {
        let mut codewords = [0u8; TOTAL_CODEWORDS];
        for (i, c) in codewords.iter_mut().enumerate() {
            *c = (i as u8).wrapping_mul(37) ^ 0x5A;
        }

        for scope in [MaskScope::Uniform, MaskScope::ExemptModeAndTerminator] {
            let masker = Masker::new(scope, 7);
            let m = QRCode::new(&codewords, &masker).finish();
            let unmasked: Vec<bool> = Traversal::new()
                .zip(m.data_modules())
                .enumerate()
                .map(|(i, ((x, y), module))| masker.apply(i, x, y, module))
                .collect();
            let expected: Vec<bool> = bits(&codewords).collect();
            assert_eq!(unmasked, expected);
        }
    }
}
