//! The `scan` command: reports encoding problems without rewriting anything.

use anyhow::{Context, Result};
use log::{debug, warn};
use serde::Serialize;
use std::io::{self, Write};
use std::process::ExitCode;

use mojifix_core::{EncodingValidator, Problem, Validator};

use crate::cli::ScanCommand;
use crate::utils::input::read_input;
use crate::utils::output::{info_msg, warn_msg};

/// JSON shape printed by `scan --json-stdout`.
#[derive(Debug, Serialize)]
pub struct ScanReport {
    pub valid: bool,
    pub utf8: bool,
    pub problems: Vec<Problem>,
}

/// Builds a report for raw input. Bytes that are not UTF-8 are decoded
/// lossily so the remaining problems can still be listed.
pub fn scan_bytes(validator: &EncodingValidator, input: &[u8]) -> ScanReport {
    let utf8 = validator.validate_bytes(input);
    if !utf8 {
        warn!("Input is not valid UTF-8; scanning a lossy decoding.");
    }
    let text = String::from_utf8_lossy(input);
    let valid = utf8 && validator.validate_encoding(&text);
    let problems = validator.diagnose(&text);
    debug!("Scan found {} problem(s).", problems.len());
    ScanReport { valid, utf8, problems }
}

pub fn run_scan(opts: &ScanCommand, quiet: bool) -> Result<ExitCode> {
    let input = read_input(opts.input_file.as_deref())?;
    let report = scan_bytes(&EncodingValidator::new(), &input);

    if opts.json_stdout {
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        serde_json::to_writer_pretty(&mut handle, &report)
            .context("Failed to serialize scan report")?;
        writeln!(handle).context("Failed to write to stdout")?;
    } else {
        print_report(&report, quiet)?;
    }

    if opts.fail_on_problems && !report.valid {
        return Ok(ExitCode::FAILURE);
    }
    Ok(ExitCode::SUCCESS)
}

fn print_report(report: &ScanReport, quiet: bool) -> Result<()> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    if !report.utf8 {
        writeln!(handle, "Input is not valid UTF-8")?;
    }
    for problem in &report.problems {
        writeln!(handle, "{}", problem)?;
    }
    if !quiet {
        if report.valid {
            info_msg("No encoding problems found.");
        } else {
            warn_msg(format!("{} problem(s) found.", report.problems.len()));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_clean_input() {
        let report = scan_bytes(&EncodingValidator::new(), "plain — text".as_bytes());
        assert!(report.valid);
        assert!(report.utf8);
        assert!(report.problems.is_empty());
    }

    #[test]
    fn test_scan_reports_corruption() {
        let report = scan_bytes(&EncodingValidator::new(), "bad窶覇dash".as_bytes());
        assert!(!report.valid);
        assert!(!report.problems.is_empty());
    }

    #[test]
    fn test_scan_invalid_utf8() {
        let report = scan_bytes(&EncodingValidator::new(), &[b'a', 0xff, b'b']);
        assert!(!report.utf8);
        assert!(!report.valid);
    }
}
