//! Decode results, statistics and anomalies

use std::fmt;

use serde::Serialize;

use super::DecodeState;
use super::control::ControlSymbol;

/// Lowest match count a SCHEME1 back-reference may encode.
pub const MIN_MATCH_COUNT: u32 = 2;

/// Highest match count a SCHEME1 back-reference may encode.
pub const MAX_MATCH_COUNT: u32 = 271;

/// Whether `count` is a legal SCHEME1 match length.
pub fn match_count_in_range(count: u32) -> bool {
    (MIN_MATCH_COUNT..=MAX_MATCH_COUNT).contains(&count)
}

/// A suspicious but non-fatal condition found while decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Anomaly {
    /// A back-reference length outside `[2, 271]`.
    MatchCountOutOfRange { bit: usize, count: u32 },

    /// A control escape carrying an unassigned code.
    UnknownControlSymbol {
        bit: usize,
        code: u8,
        state: DecodeState,
        last_valid_state: Option<DecodeState>,
    },

    /// A back-reference into history that has not been written since the last reset.
    UnwrittenHistory { bit: usize, slot: usize },
}

impl Anomaly {
    /// Bit position the anomaly was detected at.
    pub fn bit(&self) -> usize {
        match self {
            Self::MatchCountOutOfRange { bit, .. }
            | Self::UnknownControlSymbol { bit, .. }
            | Self::UnwrittenHistory { bit, .. } => *bit,
        }
    }
}

impl fmt::Display for Anomaly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MatchCountOutOfRange { bit, count } => {
                write!(f, "match count {count} out of range at bit {bit}")
            }
            Self::UnknownControlSymbol {
                bit,
                code,
                state,
                last_valid_state,
            } => write!(
                f,
                "unknown control symbol {code:#06b} at bit {bit} (state {state:?}, last valid {last_valid_state:?})"
            ),
            Self::UnwrittenHistory { bit, slot } => {
                write!(f, "back-reference to unwritten history slot {slot} at bit {bit}")
            }
        }
    }
}

/// Counters gathered over one decode call.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct DecodeStats {
    /// SCHEME1 literal units.
    pub literals: usize,
    /// SCHEME1 back-references.
    pub matches: usize,
    /// Bytes produced by back-references.
    pub matched_bytes: usize,
    /// SCHEME2 passthrough bytes.
    pub passthrough_bytes: usize,
    /// Control symbols recognized, known or not.
    pub control_symbols: usize,
    /// History resets requested by RESET1/RESET2.
    pub resets: usize,
    /// Bits stepped over while skipping.
    pub skipped_bits: usize,
    /// Control symbols seen, in stream order.
    pub symbols: Vec<ControlSymbol>,
}

/// Output of a successful decode call.
#[derive(Debug, Clone, Serialize)]
pub struct Decoded {
    /// Reconstructed bytes with the trailer removed.
    #[serde(skip)]
    pub data: Vec<u8>,
    /// Size of `data`, for serialized reports.
    pub len: usize,
    pub anomalies: Vec<Anomaly>,
    pub stats: DecodeStats,
    /// State the decode loop stopped in (`End` or `Skip`).
    pub final_state: DecodeState,
    /// The last scheme selected by a control symbol.
    pub last_valid_state: Option<DecodeState>,
}

impl Decoded {
    /// Whether decoding completed without any anomaly.
    pub fn is_clean(&self) -> bool {
        self.anomalies.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_count_bounds() {
        assert!(!match_count_in_range(1));
        assert!(match_count_in_range(2));
        assert!(match_count_in_range(271));
        assert!(!match_count_in_range(272));
    }

    #[test]
    fn test_anomaly_display() {
        let anomaly = Anomaly::MatchCountOutOfRange { bit: 40, count: 280 };
        assert_eq!(anomaly.to_string(), "match count 280 out of range at bit 40");
        assert_eq!(anomaly.bit(), 40);
    }

    #[test]
    fn test_anomaly_serializes_with_kind() {
        let anomaly = Anomaly::UnwrittenHistory { bit: 9, slot: 3 };
        let json = serde_json::to_value(&anomaly).unwrap();
        assert_eq!(json["kind"], "unwritten_history");
        assert_eq!(json["slot"], 3);
    }
}
