use std::ops::Range;

use super::data::{MODE_INDICATOR_BITS, TERMINATOR_BITS};
use super::encoder::terminator_offset;

/// Which data bits the checkerboard mask applies to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MaskScope {
    /// Leave the mode indicator and terminator bits unmasked. Readers recover
    /// them through error correction.
    #[default]
    ExemptModeAndTerminator,
    /// Mask every data and ECC bit, as readers expect.
    Uniform,
}

/// Mask pattern 000.
pub fn checkerboard(x: usize, y: usize) -> bool {
    (x + y) % 2 == 0
}

#[derive(Debug, Clone)]
pub struct Masker {
    scope: MaskScope,
    terminator: Range<usize>,
}

impl Masker {
    pub fn new(scope: MaskScope, message_len: usize) -> Self {
        let start = terminator_offset(message_len);
        Self {
            scope,
            terminator: start..start + TERMINATOR_BITS as usize,
        }
    }

    pub fn scope(&self) -> MaskScope {
        self.scope
    }

    /// Whether the bit at `index` in placement order is never inverted.
    pub fn is_exempt(&self, index: usize) -> bool {
        match self.scope {
            MaskScope::Uniform => false,
            MaskScope::ExemptModeAndTerminator => {
                index < MODE_INDICATOR_BITS as usize || self.terminator.contains(&index)
            }
        }
    }

    /// Value to store for the `index`-th data bit placed at (x, y). Applying it
    /// twice gives back the original bit.
    pub fn apply(&self, index: usize, x: usize, y: usize, bit: bool) -> bool {
        if !self.is_exempt(index) && checkerboard(x, y) {
            !bit
        } else {
            bit
        }
    }
}
