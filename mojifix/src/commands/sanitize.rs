//! The `sanitize` command: full pipeline over a file or stdin.

use anyhow::{Context, Result};
use log::{debug, info};
use std::fs;
use std::io::{self, Write};

use crate::cli::SanitizeCommand;
use crate::utils::input::read_input;
use crate::utils::mapping_config::build_sanitizer;
use crate::utils::output::info_msg;

pub fn run_sanitize(opts: &SanitizeCommand, quiet: bool) -> Result<()> {
    info!("Starting sanitize operation.");

    let sanitizer = build_sanitizer(&opts.mappings)?;
    let input = read_input(opts.input_file.as_deref())?;

    let sanitized = sanitizer
        .sanitize_bytes(&input)
        .context("Sanitization failed")?;

    debug!(
        "Content sanitized. Original bytes: {}, sanitized bytes: {}",
        input.len(),
        sanitized.len()
    );

    match &opts.output {
        Some(path) => {
            fs::write(path, sanitized.as_bytes())
                .with_context(|| format!("Failed to write output file: {}", path.display()))?;
            if !quiet {
                info_msg(format!("Sanitized output written to {}", path.display()));
            }
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            handle
                .write_all(sanitized.as_bytes())
                .context("Failed to write to stdout")?;
            handle.flush().context("Failed to flush stdout")?;
        }
    }

    if !quiet && input.len() != sanitized.len() {
        info_msg(format!("{} -> {} bytes after sanitation.", input.len(), sanitized.len()));
    }
    Ok(())
}
