//! Error types for `sldc`

use thiserror::Error;

use crate::decoder::{Anomaly, DecodeState};

/// The error type for SLDC decode operations.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum Error {
    // ==================== Stream Structure Errors ====================
    /// The stream ended in the middle of a unit while a scheme was active.
    #[error("insufficient data at bit {bit} of {bit_len} (state {state:?})")]
    InsufficientData {
        /// Cursor position where the unit began.
        bit: usize,
        /// Total number of bits in the stream.
        bit_len: usize,
        /// Decode state at the time the data ran out.
        state: DecodeState,
    },

    /// A control escape was found but its 4-bit symbol runs past the end of the stream.
    #[error("control symbol truncated at bit {bit}")]
    TruncatedControl {
        /// Cursor position of the escape byte.
        bit: usize,
    },

    /// Literal or match data appeared before any SCHEME control symbol.
    #[error("no compression scheme selected at bit {bit}")]
    NoSchemeSelected {
        /// Cursor position of the offending unit.
        bit: usize,
    },

    /// Decoded output is shorter than the fixed record trailer.
    #[error("decoded output too short for trailer: {len} bytes (need {trailer})")]
    TruncatedTrailer {
        /// Number of bytes decoded.
        len: usize,
        /// Trailer length that must be stripped.
        trailer: usize,
    },

    /// Strict mode promoted a reportable anomaly into a failure.
    #[error("anomaly in strict mode: {0}")]
    StrictAnomaly(Anomaly),
}

/// A specialized Result type for `sldc` operations.
pub type Result<T> = std::result::Result<T, Error>;
