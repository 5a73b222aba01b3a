//! Command execution implementations

use super::Commands;
use super::{decompress, dump, inspect};

impl Commands {
    /// Execute the selected command.
    ///
    /// # Errors
    /// Returns an error if the underlying command fails.
    pub fn execute(&self) -> anyhow::Result<()> {
        match self {
            Commands::Decompress {
                source,
                destination,
                strict,
            } => decompress::execute(source, destination, *strict),
            Commands::Inspect { source, json } => inspect::execute(source, *json),
            Commands::Dump { source, bit } => dump::execute(source, *bit),
        }
    }
}
