//! Inspect command

use std::path::Path;

use anyhow::Context;

use crate::decoder::{Decoded, Decoder};

/// Decode `source` and print what was found in it.
pub fn execute(source: &Path, json: bool) -> anyhow::Result<()> {
    let compressed = std::fs::read(source)
        .with_context(|| format!("failed to read {}", source.display()))?;

    let decoded = Decoder::new()
        .decode(&compressed)
        .with_context(|| format!("failed to decode {}", source.display()))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&decoded)?);
    } else {
        print_report(source, compressed.len(), &decoded);
    }

    Ok(())
}

fn print_report(source: &Path, compressed_len: usize, decoded: &Decoded) {
    let stats = &decoded.stats;

    println!("SLDC record: {}", source.display());
    println!("==========================");
    println!("Compressed:    {compressed_len} bytes");
    println!("Decompressed:  {} bytes", decoded.len);
    if compressed_len > 0 {
        println!("Ratio:         {:.2}x", decoded.len as f64 / compressed_len as f64);
    }
    println!("Final state:   {:?}", decoded.final_state);
    match decoded.last_valid_state {
        Some(state) => println!("Last scheme:   {state:?}"),
        None => println!("Last scheme:   none"),
    }
    println!();

    println!("Units:");
    println!("------");
    println!("  literals           {:>10}", stats.literals);
    println!("  matches            {:>10} ({} bytes)", stats.matches, stats.matched_bytes);
    println!("  passthrough bytes  {:>10}", stats.passthrough_bytes);
    println!("  control symbols    {:>10}", stats.control_symbols);
    println!("  history resets     {:>10}", stats.resets);
    println!("  skipped bits       {:>10}", stats.skipped_bits);

    if decoded.anomalies.is_empty() {
        return;
    }
    println!();
    println!("Anomalies ({}):", decoded.anomalies.len());
    for anomaly in &decoded.anomalies {
        println!("  - {anomaly}");
    }
}
