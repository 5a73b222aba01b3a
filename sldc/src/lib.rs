//! # sldc
//!
//! A pure-Rust decoder for SLDC (Streaming Lossless Data Compression), the
//! scheme tape drives use to compress records on the medium.
//!
//! An SLDC record is a bitstream that mixes two encodings:
//!
//! - **Scheme 1** - literals and back-references into a 1024-byte history buffer
//! - **Scheme 2** - near-literal byte passthrough
//!
//! Inline control symbols switch between them, reset the history buffer,
//! mark file boundaries, and end the record.
//!
//! ## Quick Start
//!
//! ```
//! // SCHEME2, 0x41, escaped 0xFF, 4-byte trailer, END
//! let record = [0xFF, 0x92, 0x0F, 0xF8, 0x00, 0x00, 0x00, 0x03, 0xFF, 0xE0];
//! assert_eq!(sldc::decompress(&record)?, [0x41, 0xFF]);
//! # Ok::<(), sldc::Error>(())
//! ```
//!
//! ```no_run
//! let compressed = std::fs::read("record.sldc")?;
//! let data = sldc::decompress(&compressed)?;
//! println!("Decoded {} bytes", data.len());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! Use [`Decoder`] directly to get anomaly reports and statistics alongside
//! the data, or to reject suspicious streams with [`DecodeOptions::strict`].
//!
//! ## Feature Flags
//!
//! - `cli` - Enables the `sldc` command-line binary

pub mod bitstream;
pub mod decoder;
pub mod dump;
pub mod error;
pub mod history;

// Re-exports for convenience
pub use decoder::{
    Anomaly, ControlSymbol, DecodeOptions, DecodeState, DecodeStats, Decoded, Decoder, decompress,
};
pub use error::{Error, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

// CLI module (feature-gated)
#[cfg(feature = "cli")]
pub mod cli;
