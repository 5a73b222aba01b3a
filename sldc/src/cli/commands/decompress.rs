//! Decompress command

use std::path::Path;

use anyhow::Context;

use crate::decoder::{DecodeOptions, Decoder};

/// Decode `source` and write the reconstructed bytes to `destination`.
pub fn execute(source: &Path, destination: &Path, strict: bool) -> anyhow::Result<()> {
    let compressed = std::fs::read(source)
        .with_context(|| format!("failed to read {}", source.display()))?;

    let mut decoder = Decoder::with_options(DecodeOptions::new().with_strict(strict));
    let decoded = decoder
        .decode(&compressed)
        .with_context(|| format!("failed to decode {}", source.display()))?;

    std::fs::write(destination, &decoded.data)
        .with_context(|| format!("failed to write {}", destination.display()))?;

    println!(
        "Decompressed {} -> {} bytes: {}",
        compressed.len(),
        decoded.data.len(),
        destination.display()
    );
    if !decoded.is_clean() {
        println!("Warning: {} anomalies (run inspect for details)", decoded.anomalies.len());
    }

    Ok(())
}
