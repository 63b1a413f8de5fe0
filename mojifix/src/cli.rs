// mojifix/src/cli.rs
//! This file defines the command-line interface (CLI) for the mojifix
//! application, including all available commands and their arguments.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Top-level CLI definition.
#[derive(Parser, Debug)]
#[command(
    name = "mojifix",
    version = env!("CARGO_PKG_VERSION"),
    about = "Repair mojibake and normalize Unicode in LLM output",
    long_about = "mojifix repairs known character-encoding corruption (mojibake) in text produced by LLM providers, applies NFKC normalization, replaces typographic characters with plain equivalents and tidies control characters and whitespace.",
    arg_required_else_help = true,
)]
pub struct Cli {
    /// Suppress all informational and debug messages.
    #[arg(long, short = 'q', global = true)]
    pub quiet: bool,

    /// Enable debug logging (overrides RUST_LOG).
    #[arg(long, short = 'd', global = true, conflicts_with = "quiet")]
    pub debug: bool,

    /// The subcommand to run
    #[command(subcommand)]
    pub command: Commands,
}

/// All available commands for the `mojifix` CLI.
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Sanitizes an input file or stdin.
    Sanitize(SanitizeCommand),

    /// Reports encoding problems without changing the input.
    Scan(ScanCommand),

    /// Splits an LLM response into posts and sanitizes each one.
    Posts(PostsCommand),
}

/// Mapping options shared by commands that sanitize.
#[derive(clap::Args, Debug, Clone, Default)]
pub struct MappingArgs {
    /// Path to a YAML file with extra character mappings.
    #[arg(long = "config", value_name = "FILE", env = "MOJIFIX_CONFIG")]
    pub config: Option<PathBuf>,

    /// Adds a custom mapping, e.g. `--map '§=section'`. Repeatable.
    #[arg(long = "map", value_name = "SRC=TGT", value_parser = parse_mapping)]
    pub map: Vec<(String, String)>,
}

/// Arguments for the `sanitize` command.
#[derive(Parser, Debug)]
pub struct SanitizeCommand {
    /// Read input from a file instead of stdin.
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Write sanitized output to a file instead of stdout.
    #[arg(long, short = 'o', value_name = "FILE")]
    pub output: Option<PathBuf>,

    #[command(flatten)]
    pub mappings: MappingArgs,
}

/// Arguments for the `scan` command.
#[derive(Parser, Debug)]
pub struct ScanCommand {
    /// Read input from a file instead of stdin.
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Print the report as JSON to stdout.
    #[arg(long = "json-stdout")]
    pub json_stdout: bool,

    /// Exit with a non-zero code if any problem is found.
    #[arg(long = "fail-on-problems")]
    pub fail_on_problems: bool,
}

/// Arguments for the `posts` command.
#[derive(Parser, Debug)]
pub struct PostsCommand {
    /// Read input from a file instead of stdin.
    #[arg(long, short = 'i', value_name = "FILE")]
    pub input_file: Option<PathBuf>,

    /// Literal separator between posts.
    #[arg(long, default_value = mojifix_core::POST_SEPARATOR)]
    pub separator: String,

    /// Print the posts as a JSON array to stdout.
    #[arg(long = "json-stdout")]
    pub json_stdout: bool,

    #[command(flatten)]
    pub mappings: MappingArgs,
}

/// Parses a `SRC=TGT` mapping. The target may be empty; the source may not.
pub fn parse_mapping(raw: &str) -> Result<(String, String), String> {
    let (source, target) = raw
        .split_once('=')
        .ok_or_else(|| format!("expected SRC=TGT, got '{}'", raw))?;
    if source.is_empty() {
        return Err("mapping source must not be empty".to_string());
    }
    Ok((source.to_string(), target.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_mapping() {
        assert_eq!(parse_mapping("§=section"), Ok(("§".to_string(), "section".to_string())));
        assert_eq!(parse_mapping("•="), Ok(("•".to_string(), String::new())));
        assert_eq!(parse_mapping("a=b=c"), Ok(("a".to_string(), "b=c".to_string())));
        assert!(parse_mapping("=x").is_err());
        assert!(parse_mapping("nothing").is_err());
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
