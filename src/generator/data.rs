//! Fixed parameters of the one symbol this crate produces: version 1, error
//! correction level M, mask pattern 000.

/// Modules per side of a version 1 symbol.
pub const SIZE: usize = 21;

pub const DATA_CODEWORDS: usize = 16;
pub const ECC_CODEWORDS: usize = 10;
pub const TOTAL_CODEWORDS: usize = DATA_CODEWORDS + ECC_CODEWORDS;
pub const DATA_BITS: usize = TOTAL_CODEWORDS * 8;

/// Byte mode capacity of version 1-M.
pub const MAX_MESSAGE_LEN: usize = 14;

pub const MODE_BYTE: u16 = 0b0100;
pub const MODE_INDICATOR_BITS: u8 = 4;
pub const CHAR_COUNT_BITS: u8 = 8;
pub const TERMINATOR_BITS: u8 = 4;

pub const PAD_BYTES: [u8; 2] = [0b1110_1100, 0b0001_0001];

/// Row and column holding the timing patterns.
pub const TIMING: usize = 6;

pub const ECC_LEVEL_M: u8 = 0b00;
pub const MASK_CHECKERBOARD: u8 = 0b000;

/// x^10 + x^8 + x^5 + x^4 + x^2 + x + 1
pub const FORMAT_GENERATOR: u16 = 0b101_0011_0111;
pub const FORMAT_MASK: u16 = 0b101_0100_0001_0010;

/// Builds the 15-bit format word for an (ecc level, mask) pair: the 5 data bits
/// followed by their BCH(15,5) remainder, XOR-ed with [`FORMAT_MASK`].
pub const fn format_bits(ecc_level: u8, mask: u8) -> u16 {
    let data = (((ecc_level & 0b11) as u16) << 3) | (mask & 0b111) as u16;
    let mut rem = data << 10;
    let mut i: u32 = 14;
    while i >= 10 {
        if (rem >> i) & 1 == 1 {
            rem ^= FORMAT_GENERATOR << (i - 10);
        }
        i -= 1;
    }

    ((data << 10) | rem) ^ FORMAT_MASK
}

pub const FORMAT_BITS: u16 = format_bits(ECC_LEVEL_M, MASK_CHECKERBOARD);
