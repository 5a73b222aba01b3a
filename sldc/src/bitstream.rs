//! MSB-first bit view over a compressed SLDC buffer
//!
//! SLDC packs symbols at arbitrary bit offsets, most significant bit first.
//! The reader is a pure view: it never moves a cursor of its own, every read
//! takes an absolute bit index. Reads that would run past the end yield
//! `None` so the decoder can report truncation instead of panicking.

/// Bit-addressed view of a byte buffer.
#[derive(Debug, Clone, Copy)]
pub struct BitReader<'a> {
    data: &'a [u8],
}

impl<'a> BitReader<'a> {
    /// Wrap a compressed buffer.
    pub fn new(data: &'a [u8]) -> Self {
        Self { data }
    }

    /// The underlying bytes.
    pub fn bytes(&self) -> &'a [u8] {
        self.data
    }

    /// Total number of addressable bits.
    #[inline]
    pub fn bit_len(&self) -> usize {
        self.data.len() * 8
    }

    /// Value of the bit at `index`.
    #[inline]
    pub fn test(&self, index: usize) -> Option<bool> {
        let byte = *self.data.get(index / 8)?;
        Some(byte & (0x80 >> (index % 8)) != 0)
    }

    /// Read `width` bits (at most 32) starting at `index` as a big-endian value.
    pub fn bits_at(&self, index: usize, width: u32) -> Option<u32> {
        debug_assert!(width <= 32);
        let end = index.checked_add(width as usize)?;
        if end > self.bit_len() {
            return None;
        }

        let mut value = 0u32;
        for i in index..end {
            let byte = self.data[i / 8];
            let bit = (byte >> (7 - i % 8)) & 1;
            value = (value << 1) | u32::from(bit);
        }
        Some(value)
    }

    /// The 8 bits spanning `[index, index + 8)`.
    ///
    /// When `index` is byte aligned this is just the byte; otherwise it
    /// stitches the tail of one byte to the head of the next.
    #[inline]
    pub fn byte_at(&self, index: usize) -> Option<u8> {
        let shift = index % 8;
        let first = *self.data.get(index / 8)?;
        if shift == 0 {
            return Some(first);
        }
        let second = *self.data.get(index / 8 + 1)?;
        Some((first << shift) | (second >> (8 - shift)))
    }

    /// The 4 bits spanning `[index, index + 4)`.
    #[inline]
    pub fn nibble_at(&self, index: usize) -> Option<u8> {
        self.bits_at(index, 4).map(|v| v as u8)
    }
}
