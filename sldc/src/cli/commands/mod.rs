use clap::Subcommand;
use std::path::PathBuf;

pub mod decompress;
pub mod dump;
pub mod execute;
pub mod inspect;

#[derive(Subcommand)]
pub enum Commands {
    /// Decompress an SLDC record to a file
    Decompress {
        /// Compressed record
        #[arg(short, long)]
        source: PathBuf,

        /// Output file
        #[arg(short, long)]
        destination: PathBuf,

        /// Fail on the first anomaly instead of decoding best-effort
        #[arg(long)]
        strict: bool,
    },

    /// Decode a record and report statistics and anomalies
    Inspect {
        /// Compressed record
        #[arg(short, long)]
        source: PathBuf,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the bits surrounding a position in a record
    Dump {
        /// Compressed record
        #[arg(short, long)]
        source: PathBuf,

        /// Bit offset to center the dump on
        #[arg(short, long)]
        bit: usize,
    },
}
