pub struct BitStream {
	bytes: Vec<u8>,
	offset: u8
}

impl BitStream {
	pub fn with_capacity(bytes: usize) -> Self {
		Self {
			bytes: Vec::with_capacity(bytes),
			offset: 0
		}
	}

	pub fn push_bit(&mut self, bit: bool) {
		if self.offset == 0 {
			self.bytes.push(0);
		}

		if let Some(last) = self.bytes.last_mut() {
			*last |= (bit as u8) << (7 - self.offset);
		}

		self.offset = (self.offset + 1) % 8;
	}

	/// @param number number to push, most significant bit first
	/// @param size number of low bits of `number` to push
	pub fn push_bits(&mut self, number: u16, size: u8) {
		debug_assert!(size <= 16, "BitStream: push_bits size, {size} > 16.");

		for i in (0..size.min(16)).rev() {
			self.push_bit((number >> i) & 1 == 1);
		}
	}

	pub fn push(&mut self, byte: u8) {
		if self.offset == 0 {
			self.bytes.push(byte);
		} else {
			self.push_bits(byte as u16, 8);
		}
	}

	pub fn len(&self) -> usize {
		let sub_size = if self.offset == 0 { 0 } else { 8 - self.offset } as usize;
		8 * self.bytes.len() - sub_size
	}

	pub fn is_aligned(&self) -> bool {
		self.offset == 0
	}

	pub fn consume(self) -> Vec<u8> {
		self.bytes
	}
}

/// Bits of `bytes`, most significant bit of each byte first.
pub fn bits(bytes: &[u8]) -> impl Iterator<Item = bool> + '_ {
	bytes
		.iter()
		.flat_map(|byte| (0..8).rev().map(move |i| (byte >> i) & 1 == 1))
}
