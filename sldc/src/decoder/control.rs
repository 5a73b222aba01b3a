//! Inline control symbols
//!
//! A control symbol is introduced by the escape pattern `0xFF` followed by a
//! set bit, then carries a 4-bit code. The whole unit is 13 bits long.

use serde::Serialize;

/// Byte value that leads both escaped literals and control escapes.
pub const ESCAPE_BYTE: u8 = 0xFF;

/// Bits consumed by escape byte, disambiguation bit and 4-bit code.
pub const CONTROL_BITS: usize = 13;

/// Known control symbols and their 4-bit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ControlSymbol {
    Flush,
    Scheme1,
    Scheme2,
    FileMark,
    EndOfRecord,
    Reset1,
    Reset2,
    End,
}

impl ControlSymbol {
    /// Decode a 4-bit control code, `None` for unassigned codes.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            0b0000 => Some(Self::Flush),
            0b0001 => Some(Self::Scheme1),
            0b0010 => Some(Self::Scheme2),
            0b0011 => Some(Self::FileMark),
            0b0100 => Some(Self::EndOfRecord),
            0b0101 => Some(Self::Reset1),
            0b0110 => Some(Self::Reset2),
            0b1111 => Some(Self::End),
            _ => None,
        }
    }

    /// The 4-bit code for this symbol.
    pub fn code(self) -> u8 {
        match self {
            Self::Flush => 0b0000,
            Self::Scheme1 => 0b0001,
            Self::Scheme2 => 0b0010,
            Self::FileMark => 0b0011,
            Self::EndOfRecord => 0b0100,
            Self::Reset1 => 0b0101,
            Self::Reset2 => 0b0110,
            Self::End => 0b1111,
        }
    }

    /// Whether this symbol clears the history buffer.
    pub fn resets_history(self) -> bool {
        matches!(self, Self::Reset1 | Self::Reset2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_codes_round_trip() {
        for code in 0..16u8 {
            if let Some(symbol) = ControlSymbol::from_code(code) {
                assert_eq!(symbol.code(), code);
            }
        }
    }

    #[test]
    fn test_unassigned_codes() {
        for code in [0b0111, 0b1000, 0b1010, 0b1110] {
            assert_eq!(ControlSymbol::from_code(code), None);
        }
    }

    #[test]
    fn test_resets_history() {
        assert!(ControlSymbol::Reset1.resets_history());
        assert!(ControlSymbol::Reset2.resets_history());
        assert!(!ControlSymbol::Scheme1.resets_history());
        assert!(!ControlSymbol::End.resets_history());
    }
}
