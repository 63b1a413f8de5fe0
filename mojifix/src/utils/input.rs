//! Reading command input from a file or stdin.

use anyhow::{Context, Result};
use log::debug;
use std::io::Read;
use std::path::Path;

/// Reads the whole input as raw bytes; UTF-8 validation is left to the core.
pub fn read_input(input_file: Option<&Path>) -> Result<Vec<u8>> {
    match input_file {
        Some(path) => {
            debug!("Reading input from file: {}", path.display());
            std::fs::read(path)
                .with_context(|| format!("Failed to read input file: {}", path.display()))
        }
        None => {
            debug!("Reading input from stdin...");
            let mut buffer = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buffer)
                .context("Failed to read from stdin")?;
            Ok(buffer)
        }
    }
}
