//! Bit-level dumps for diagnosing malformed streams

use std::fmt::Write;

use crate::bitstream::BitReader;

/// Bits shown on each side of the marked position.
pub const DUMP_RADIUS: usize = 48;

/// Render up to 96 bits around `bit`, grouped by source byte, with the bit
/// itself wrapped in `|`.
///
/// The window is clamped to the stream, so positions near either end show
/// fewer bits rather than reading past the buffer.
pub fn render_bits(reader: &BitReader<'_>, bit: usize) -> String {
    let start = bit.saturating_sub(DUMP_RADIUS);
    let end = (start + 2 * DUMP_RADIUS).min(reader.bit_len());

    let mut out = format!("bit={bit} --");
    for j in start..end {
        if j == start || j % 8 == 0 {
            out.push(' ');
        }
        let value = u8::from(reader.test(j).unwrap_or(false));
        if j == bit {
            let _ = write!(out, "|{value}|");
        } else {
            let _ = write!(out, "{value}");
        }
    }
    out
}
