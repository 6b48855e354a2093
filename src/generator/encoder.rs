use crate::error::EncodeError;

use super::bitstream::BitStream;
use super::data::{
    CHAR_COUNT_BITS, DATA_CODEWORDS, MAX_MESSAGE_LEN, MODE_BYTE, MODE_INDICATOR_BITS, PAD_BYTES,
    TERMINATOR_BITS,
};

pub type CodewordBlock = [u8; DATA_CODEWORDS];

//[mode indicator] [char count indicator] [message bytes] [terminator] [pad bytes]
pub fn encode(message: &[u8]) -> Result<CodewordBlock, EncodeError> {
    let len = message.len();
    if len == 0 || len > MAX_MESSAGE_LEN {
        return Err(EncodeError::InvalidLength {
            len,
            max: MAX_MESSAGE_LEN,
        });
    }

    let mut stream = BitStream::with_capacity(DATA_CODEWORDS);
    stream.push_bits(MODE_BYTE, MODE_INDICATOR_BITS);
    stream.push_bits(len as u16, CHAR_COUNT_BITS);
    for &byte in message {
        stream.push(byte);
    }
    stream.push_bits(0, TERMINATOR_BITS);
    debug_assert_eq!(stream.len(), terminator_offset(len) + TERMINATOR_BITS as usize);
    debug_assert!(stream.is_aligned());

    let bytes = stream.consume();
    let mut block = [0u8; DATA_CODEWORDS];
    block[..bytes.len()].copy_from_slice(&bytes);
    for (slot, pad) in block[bytes.len()..].iter_mut().zip(PAD_BYTES.iter().cycle()) {
        *slot = *pad;
    }

    Ok(block)
}

/// Bit offset of the terminator within the data bitstream.
pub const fn terminator_offset(len: usize) -> usize {
    (MODE_INDICATOR_BITS + CHAR_COUNT_BITS) as usize + 8 * len
}
