//! Bitstream builder for assembling SLDC records in tests

#![allow(dead_code)]

use sldc::ControlSymbol;

const MATCH_DIGITS: [u32; 5] = [1, 2, 3, 4, 8];

/// MSB-first bit writer with helpers for each SLDC unit type.
#[derive(Default)]
pub struct StreamBuilder {
    bits: Vec<bool>,
}

impl StreamBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the low `width` bits of `value`, most significant first.
    pub fn bits(mut self, value: u32, width: u32) -> Self {
        for i in (0..width).rev() {
            self.bits.push((value >> i) & 1 == 1);
        }
        self
    }

    pub fn zeros(self, count: u32) -> Self {
        (0..count).fold(self, |b, _| b.bits(0, 1))
    }

    /// Escape prefix plus a raw 4-bit control code.
    pub fn control_code(self, code: u8) -> Self {
        self.bits(0xFF, 8).bits(1, 1).bits(u32::from(code), 4)
    }

    pub fn control(self, symbol: ControlSymbol) -> Self {
        self.control_code(symbol.code())
    }

    /// SCHEME1 literal unit.
    pub fn literal(self, byte: u8) -> Self {
        self.bits(0, 1).bits(u32::from(byte), 8)
    }

    pub fn literals(self, bytes: &[u8]) -> Self {
        bytes.iter().fold(self, |b, &byte| b.literal(byte))
    }

    /// SCHEME1 back-reference with the shortest encoding for `count`.
    pub fn back_ref(self, count: u32, displacement: u32) -> Self {
        let prefix = (0..5)
            .find(|&p| {
                let min = 1u32 << (p + 1);
                count >= min && count - min < (1 << MATCH_DIGITS[p])
            })
            .expect("match count not encodable");
        self.raw_back_ref(prefix, count - (1 << (prefix + 1)), displacement)
    }

    /// SCHEME1 back-reference from its raw fields.
    pub fn raw_back_ref(self, prefix: usize, base: u32, displacement: u32) -> Self {
        let mut b = self.bits(1, 1);
        for _ in 0..prefix {
            b = b.bits(1, 1);
        }
        if prefix < 4 {
            b = b.bits(0, 1);
        }
        b.bits(base, MATCH_DIGITS[prefix]).bits(displacement, 10)
    }

    /// SCHEME2 byte, padded to 9 bits when it is 0xFF.
    pub fn passthrough(self, byte: u8) -> Self {
        let b = self.bits(u32::from(byte), 8);
        if byte == 0xFF { b.bits(0, 1) } else { b }
    }

    /// The 4 trailing bytes every record carries, as SCHEME1 literals.
    pub fn trailer(self) -> Self {
        self.literals(&[0xDE, 0xAD, 0xBE, 0xEF])
    }

    /// The 4 trailing bytes as SCHEME2 passthrough.
    pub fn passthrough_trailer(self) -> Self {
        [0xDE, 0xAD, 0xBE, 0xEF]
            .into_iter()
            .fold(self, StreamBuilder::passthrough)
    }

    pub fn end(self) -> Self {
        self.control(ControlSymbol::End)
    }

    pub fn bit_len(&self) -> usize {
        self.bits.len()
    }

    /// Pack into bytes, zero-padding the last one.
    pub fn build(self) -> Vec<u8> {
        self.bits
            .chunks(8)
            .map(|chunk| {
                chunk
                    .iter()
                    .enumerate()
                    .fold(0u8, |acc, (i, &bit)| acc | (u8::from(bit) << (7 - i)))
            })
            .collect()
    }
}
