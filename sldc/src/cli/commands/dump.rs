//! Dump command

use std::path::Path;

use anyhow::{Context, bail};

use crate::bitstream::BitReader;
use crate::dump::render_bits;

/// Print the bit window around `bit` in `source`.
pub fn execute(source: &Path, bit: usize) -> anyhow::Result<()> {
    let data = std::fs::read(source)
        .with_context(|| format!("failed to read {}", source.display()))?;

    let reader = BitReader::new(&data);
    if bit >= reader.bit_len() {
        bail!("bit {bit} is past the end of the record ({} bits)", reader.bit_len());
    }

    println!("{}", render_bits(&reader, bit));
    Ok(())
}
