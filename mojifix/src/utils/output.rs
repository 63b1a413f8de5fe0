//! Status messages on stderr, colored when stderr is a terminal.

use is_terminal::IsTerminal;
use owo_colors::OwoColorize;
use std::io::{self, Write};

fn write_message(label: &str, msg: &str, paint: fn(&str) -> String) {
    let stderr = io::stderr();
    let mut handle = stderr.lock();
    let label = if stderr.is_terminal() { paint(label) } else { label.to_string() };
    let _ = writeln!(handle, "{} {}", label, msg);
}

/// Prints an informational message to stderr.
pub fn info_msg(msg: impl AsRef<str>) {
    write_message("[info]", msg.as_ref(), |s| s.cyan().to_string());
}

/// Prints a warning to stderr.
pub fn warn_msg(msg: impl AsRef<str>) {
    write_message("[warn]", msg.as_ref(), |s| s.yellow().to_string());
}

/// Prints an error to stderr.
pub fn error_msg(msg: impl AsRef<str>) {
    write_message("[error]", msg.as_ref(), |s| s.red().bold().to_string());
}
