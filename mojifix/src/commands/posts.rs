//! The `posts` command: splits an LLM response and sanitizes each post.

use anyhow::{Context, Result};
use log::info;
use std::io::{self, Write};

use mojifix_core::{sanitize_posts, MojifixError};

use crate::cli::PostsCommand;
use crate::utils::input::read_input;
use crate::utils::mapping_config::build_sanitizer;

pub fn run_posts(opts: &PostsCommand) -> Result<()> {
    let sanitizer = build_sanitizer(&opts.mappings)?;
    let input = read_input(opts.input_file.as_deref())?;
    let response = std::str::from_utf8(&input)
        .map_err(|e| MojifixError::invalid_input(format!("input is not valid UTF-8: {}", e)))?;

    let posts = sanitize_posts(&sanitizer, response, &opts.separator);
    info!("Extracted {} post(s).", posts.len());

    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if opts.json_stdout {
        serde_json::to_writer_pretty(&mut handle, &posts).context("Failed to serialize posts")?;
        writeln!(handle)?;
    } else if !posts.is_empty() {
        let joined = posts.join(&format!("\n{}\n", opts.separator));
        writeln!(handle, "{}", joined).context("Failed to write to stdout")?;
    }
    Ok(())
}
