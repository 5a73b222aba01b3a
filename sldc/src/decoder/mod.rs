//! SLDC decode engine
//!
//! Walks the compressed bitstream unit by unit. Before every unit the
//! engine checks for a control escape (`0xFF` followed by a set bit); if
//! there is none, the unit is decoded according to the active state:
//!
//! - **SCHEME1**: a `0` flag bit and 8 literal bits, or a `1` flag bit
//!   followed by a unary-prefixed match count and a 10-bit displacement
//!   into the history buffer.
//! - **SCHEME2**: one byte per unit, `0xFF` padded to 9 bits.
//! - **SKIP**: one bit at a time until the next control symbol.
//!
//! Every record ends with a 4-byte trailer that is stripped from the output.

pub mod control;
pub mod options;
pub mod report;

use serde::Serialize;

use crate::bitstream::BitReader;
use crate::dump::render_bits;
use crate::error::{Error, Result};
use crate::history::{HISTORY_SIZE, HistoryBuffer};

pub use control::{CONTROL_BITS, ControlSymbol, ESCAPE_BYTE};
pub use options::DecodeOptions;
pub use report::{
    Anomaly, DecodeStats, Decoded, MAX_MATCH_COUNT, MIN_MATCH_COUNT, match_count_in_range,
};

/// Bytes appended to every record that carry no data.
pub const TRAILER_LEN: usize = 4;

/// Payload bits that follow each unary match-count prefix, indexed by prefix length.
const MATCH_DIGITS: [u32; 5] = [1, 2, 3, 4, 8];

/// Terminating zero consumed after each prefix; the four-ones prefix has none.
const MATCH_SKIP: [usize; 5] = [1, 1, 1, 1, 0];

/// Longest unary prefix.
const MAX_PREFIX: usize = 4;

/// Width of the SCHEME1 displacement field.
const DISPLACEMENT_BITS: u32 = 10;

/// Where the decode loop currently is in the stream's mode protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DecodeState {
    /// No scheme selected yet.
    Unknown,
    Scheme1,
    Scheme2,
    /// Consuming bits without output until the next control symbol.
    Skip,
    End,
}

/// Reusable SLDC decoder.
///
/// Each call to [`Decoder::decode`] starts from a cleared history buffer,
/// so calls are independent of each other.
#[derive(Debug, Clone, Default)]
pub struct Decoder {
    options: DecodeOptions,
    history: HistoryBuffer,
}

impl Decoder {
    pub fn new() -> Self {
        Self::with_options(DecodeOptions::new())
    }

    pub fn with_options(options: DecodeOptions) -> Self {
        Self {
            options,
            history: HistoryBuffer::new(),
        }
    }

    pub fn options(&self) -> &DecodeOptions {
        &self.options
    }

    /// Decode one compressed record.
    ///
    /// # Errors
    /// Returns an error if the stream is truncated while a scheme is active,
    /// if data appears before any scheme is selected, if the output is shorter
    /// than the trailer, or (in strict mode) on the first anomaly.
    pub fn decode(&mut self, data: &[u8]) -> Result<Decoded> {
        tracing::debug!("SLDC decode: {} bytes ({} bits)", data.len(), data.len() * 8);

        self.history.reset();
        let mut pass = Pass {
            reader: BitReader::new(data),
            history: &mut self.history,
            options: self.options,
            pos: 0,
            unit_start: 0,
            state: DecodeState::Unknown,
            last_valid_state: None,
            output: Vec::with_capacity(data.len() * 2),
            anomalies: Vec::new(),
            stats: DecodeStats::default(),
        };
        pass.run()?;
        pass.finish()
    }
}

/// Decompress one SLDC record with default options.
///
/// # Errors
/// Returns an error if the stream is structurally invalid.
pub fn decompress(data: &[u8]) -> Result<Vec<u8>> {
    Decoder::new().decode(data).map(|decoded| decoded.data)
}

/// State of a single decode call.
struct Pass<'a, 'h> {
    reader: BitReader<'a>,
    history: &'h mut HistoryBuffer,
    options: DecodeOptions,
    /// Bit cursor.
    pos: usize,
    /// Cursor at the start of the unit being decoded, for error reporting.
    unit_start: usize,
    state: DecodeState,
    last_valid_state: Option<DecodeState>,
    output: Vec<u8>,
    anomalies: Vec<Anomaly>,
    stats: DecodeStats,
}

impl Pass<'_, '_> {
    fn run(&mut self) -> Result<()> {
        let bit_len = self.reader.bit_len();

        loop {
            // A unit needs the escape byte plus its disambiguation bit in view
            if self.pos + 8 >= bit_len || self.state == DecodeState::End {
                if !matches!(self.state, DecodeState::End | DecodeState::Skip) {
                    tracing::warn!(
                        "Ran out of data at bit {} of {} (state {:?})",
                        self.pos,
                        bit_len,
                        self.state
                    );
                    return Err(Error::InsufficientData {
                        bit: self.pos,
                        bit_len,
                        state: self.state,
                    });
                }
                return Ok(());
            }

            self.unit_start = self.pos;

            if self.at_control_escape() {
                // An escape cut off by the end of a skipped tail is just padding
                if self.state == DecodeState::Skip && self.pos + CONTROL_BITS > bit_len {
                    return Ok(());
                }
                self.apply_control()?;
                continue;
            }

            match self.state {
                DecodeState::Scheme1 => self.decode_scheme1()?,
                DecodeState::Scheme2 => self.decode_scheme2(),
                DecodeState::Skip => {
                    self.pos += 1;
                    self.stats.skipped_bits += 1;
                }
                DecodeState::End => return Ok(()),
                DecodeState::Unknown => {
                    tracing::warn!("Data before any scheme selection at bit {}", self.pos);
                    self.dump(self.pos);
                    return Err(Error::NoSchemeSelected { bit: self.pos });
                }
            }
        }
    }

    fn finish(mut self) -> Result<Decoded> {
        if self.output.len() < TRAILER_LEN {
            return Err(Error::TruncatedTrailer {
                len: self.output.len(),
                trailer: TRAILER_LEN,
            });
        }
        self.output.truncate(self.output.len() - TRAILER_LEN);

        tracing::debug!(
            "SLDC decode complete: {} bytes, {} literals, {} matches, {} anomalies",
            self.output.len(),
            self.stats.literals,
            self.stats.matches,
            self.anomalies.len()
        );

        Ok(Decoded {
            len: self.output.len(),
            data: self.output,
            anomalies: self.anomalies,
            stats: self.stats,
            final_state: self.state,
            last_valid_state: self.last_valid_state,
        })
    }

    fn at_control_escape(&self) -> bool {
        self.reader.byte_at(self.pos) == Some(ESCAPE_BYTE)
            && self.reader.test(self.pos + 8) == Some(true)
    }

    fn apply_control(&mut self) -> Result<()> {
        let code = self
            .reader
            .nibble_at(self.pos + 9)
            .ok_or(Error::TruncatedControl { bit: self.pos })?;
        self.stats.control_symbols += 1;

        let Some(symbol) = ControlSymbol::from_code(code) else {
            self.report(Anomaly::UnknownControlSymbol {
                bit: self.pos,
                code,
                state: self.state,
                last_valid_state: self.last_valid_state,
            })?;
            self.state = DecodeState::Skip;
            self.pos += CONTROL_BITS;
            return Ok(());
        };

        tracing::debug!("Control symbol {:?} at bit {}", symbol, self.pos);
        self.stats.symbols.push(symbol);
        if symbol.resets_history() {
            self.history.reset();
            self.stats.resets += 1;
        }
        self.state = match symbol {
            ControlSymbol::Scheme1 | ControlSymbol::Reset1 => DecodeState::Scheme1,
            ControlSymbol::Scheme2 | ControlSymbol::Reset2 => DecodeState::Scheme2,
            ControlSymbol::Flush | ControlSymbol::FileMark => DecodeState::Skip,
            ControlSymbol::EndOfRecord | ControlSymbol::End => DecodeState::End,
        };
        if matches!(self.state, DecodeState::Scheme1 | DecodeState::Scheme2) {
            self.last_valid_state = Some(self.state);
        }

        self.pos += CONTROL_BITS;
        Ok(())
    }

    fn decode_scheme1(&mut self) -> Result<()> {
        if !self.take_bit()? {
            let byte = self.take_bits(8)? as u8;
            self.emit(byte);
            self.stats.literals += 1;
            return Ok(());
        }

        // Unary size class, then the class's payload bits
        let mut prefix = 0;
        while prefix < MAX_PREFIX && self.peek_bit()? {
            prefix += 1;
            self.pos += 1;
        }
        self.pos += MATCH_SKIP[prefix];
        let base = self.take_bits(MATCH_DIGITS[prefix])?;
        let count = (1u32 << (prefix + 1)) + base;

        if !match_count_in_range(count) {
            self.report(Anomaly::MatchCountOutOfRange {
                bit: self.pos,
                count,
            })?;
        }

        let displacement = self.take_bits(DISPLACEMENT_BITS)? as usize;
        self.copy_match(displacement, count as usize)?;
        self.stats.matches += 1;
        self.stats.matched_bytes += count as usize;
        Ok(())
    }

    /// Copy `count` bytes from history one at a time, so a copy can read
    /// bytes it has itself just written.
    fn copy_match(&mut self, displacement: usize, count: usize) -> Result<()> {
        let mut reported = false;
        for j in 0..count {
            let slot = displacement + j;
            let byte = self.history.get(slot);
            if byte.is_none() && !reported {
                reported = true;
                self.report(Anomaly::UnwrittenHistory {
                    bit: self.unit_start,
                    slot: slot % HISTORY_SIZE,
                })?;
            }
            self.emit(byte.unwrap_or(0));
        }
        Ok(())
    }

    fn decode_scheme2(&mut self) {
        // The loop guard leaves at least 9 bits in view and the escape check
        // has already run, so an 0xFF here is an escaped literal
        let byte = self.reader.byte_at(self.pos).unwrap_or_default();
        self.pos += if byte == ESCAPE_BYTE { 9 } else { 8 };
        self.emit(byte);
        self.stats.passthrough_bytes += 1;
    }

    #[inline]
    fn emit(&mut self, byte: u8) {
        self.history.add(byte);
        self.output.push(byte);
    }

    fn peek_bit(&self) -> Result<bool> {
        self.reader.test(self.pos).ok_or_else(|| self.truncated())
    }

    fn take_bit(&mut self) -> Result<bool> {
        let bit = self.peek_bit()?;
        self.pos += 1;
        Ok(bit)
    }

    fn take_bits(&mut self, width: u32) -> Result<u32> {
        let value = self
            .reader
            .bits_at(self.pos, width)
            .ok_or_else(|| self.truncated())?;
        self.pos += width as usize;
        Ok(value)
    }

    fn truncated(&self) -> Error {
        Error::InsufficientData {
            bit: self.unit_start,
            bit_len: self.reader.bit_len(),
            state: self.state,
        }
    }

    fn report(&mut self, anomaly: Anomaly) -> Result<()> {
        tracing::warn!("SLDC anomaly: {}", anomaly);
        self.dump(anomaly.bit());
        if self.options.strict {
            return Err(Error::StrictAnomaly(anomaly));
        }
        self.anomalies.push(anomaly);
        Ok(())
    }

    fn dump(&self, bit: usize) {
        if self.options.dump_on_anomaly && tracing::enabled!(tracing::Level::DEBUG) {
            tracing::debug!("{}", render_bits(&self.reader, bit));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_match_classes_are_contiguous() {
        let mut next = MIN_MATCH_COUNT;
        for (prefix, digits) in MATCH_DIGITS.iter().enumerate() {
            let min = 1u32 << (prefix + 1);
            assert_eq!(min, next, "prefix {prefix}");
            next = min + (1 << digits);
        }
        // 272..=287 are encodable but collide with the control escape
        assert_eq!(next, 288);
    }

    #[test]
    fn test_only_longest_prefix_has_no_terminator() {
        assert_eq!(MATCH_SKIP[MAX_PREFIX], 0);
        assert!(MATCH_SKIP[..MAX_PREFIX].iter().all(|&s| s == 1));
    }

    #[test]
    fn test_decoder_uses_given_options() {
        let decoder = Decoder::with_options(DecodeOptions::strict());
        assert!(decoder.options().strict);
        assert!(!Decoder::new().options().strict);
    }
}
