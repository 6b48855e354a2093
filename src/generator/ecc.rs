use super::data::{DATA_CODEWORDS, ECC_CODEWORDS, TOTAL_CODEWORDS};

pub const GENERATOR_LEN: usize = ECC_CODEWORDS + 1;

/// Carryless multiplication in GF(256) reduced by x^8 + x^4 + x^3 + x^2 + 1 (0x11D).
pub const fn multiply(x: u8, y: u8) -> u8 {
    let mut a = x;
    let mut b = y;
    let mut res = 0;

    while b != 0 {
        if b & 1 != 0 {
            res ^= a;
        }

        let carry = a & 0x80;
        a <<= 1;

        if carry != 0 {
            a ^= 0x1D;
        }

        b >>= 1;
    }

    res
}

pub const fn exponentiate(base: u8, power: u32) -> u8 {
    let mut res = 1;
    let mut i = 0;
    while i < power {
        res = multiply(res, base);
        i += 1;
    }
    res
}

/// g(x) = (x - a^0)(x - a^1)...(x - a^9), leading coefficient first.
const fn generator_poly() -> [u8; GENERATOR_LEN] {
    let mut gen = [0u8; GENERATOR_LEN];
    gen[0] = 1;

    let mut root = 1u8;
    let mut degree = 0;
    while degree < ECC_CODEWORDS {
        degree += 1;
        let mut j = degree;
        while j > 0 {
            gen[j] ^= multiply(gen[j - 1], root);
            j -= 1;
        }
        root = multiply(root, 2);
    }

    gen
}

pub const GENERATOR: [u8; GENERATOR_LEN] = generator_poly();

/// Remainder of `block * x^10` divided by `generator`.
pub fn remainder(
    block: &[u8; DATA_CODEWORDS],
    generator: &[u8; GENERATOR_LEN],
) -> [u8; ECC_CODEWORDS] {
    let mut data = [0u8; TOTAL_CODEWORDS];
    data[..DATA_CODEWORDS].copy_from_slice(block);

    for i in 0..DATA_CODEWORDS {
        let coef = data[i];
        if coef != 0 {
            for (j, &g) in generator.iter().enumerate() {
                data[i + j] ^= multiply(g, coef);
            }
        }
    }

    let mut ecc = [0u8; ECC_CODEWORDS];
    ecc.copy_from_slice(&data[DATA_CODEWORDS..]);
    ecc
}

pub fn full_codeword(
    block: &[u8; DATA_CODEWORDS],
    ecc: &[u8; ECC_CODEWORDS],
) -> [u8; TOTAL_CODEWORDS] {
    let mut out = [0u8; TOTAL_CODEWORDS];
    out[..DATA_CODEWORDS].copy_from_slice(block);
    out[DATA_CODEWORDS..].copy_from_slice(ecc);
    out
}
