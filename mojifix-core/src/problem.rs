// mojifix-core/src/problem.rs
//! Data structures for the diagnostic report produced by the encoding
//! validator. Each [`Problem`] is one class of issue; its `Display` output is
//! the human-readable line returned by `detect_problems`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// How many occurrences a problem keeps for display.
pub const MAX_REPORTED_OCCURRENCES: usize = 3;

/// A single suspicious character and where it sits in the text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CharOccurrence {
    /// Index in code points (not bytes) from the start of the text.
    pub position: usize,
    pub code_point: u32,
}

impl fmt::Display for CharOccurrence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "U+{:04X} at position {}", self.code_point, self.position)
    }
}

/// One class of encoding problem found in a text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Problem {
    /// A known mojibake signature is still present.
    Corruption {
        pattern: String,
        description: String,
    },
    /// Control characters other than `\n`, `\t` and `\r`.
    ControlCharacters {
        count: usize,
        samples: Vec<CharOccurrence>,
    },
    /// Code points from the private use areas.
    PrivateUse {
        count: usize,
        samples: Vec<CharOccurrence>,
    },
}

impl Problem {
    /// Short machine-friendly name of the problem class.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Corruption { .. } => "corruption",
            Self::ControlCharacters { .. } => "control_characters",
            Self::PrivateUse { .. } => "private_use",
        }
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Corruption { description, .. } => f.write_str(description),
            Self::ControlCharacters { count, samples } => {
                f.write_str("Control characters found: ")?;
                write_samples(f, *count, samples)
            }
            Self::PrivateUse { count, samples } => {
                f.write_str("Unusual Unicode characters (private use): ")?;
                write_samples(f, *count, samples)
            }
        }
    }
}

fn write_samples(f: &mut fmt::Formatter<'_>, count: usize, samples: &[CharOccurrence]) -> fmt::Result {
    let listed = samples
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ");
    f.write_str(&listed)?;
    if count > samples.len() {
        write!(f, " (and {} more)", count - samples.len())?;
    }
    Ok(())
}

/// Collects occurrences, keeping the first few and counting the rest.
#[derive(Debug, Default)]
pub(crate) struct OccurrenceCollector {
    count: usize,
    samples: Vec<CharOccurrence>,
}

impl OccurrenceCollector {
    pub(crate) fn record(&mut self, position: usize, c: char) {
        self.count += 1;
        if self.samples.len() < MAX_REPORTED_OCCURRENCES {
            self.samples.push(CharOccurrence {
                position,
                code_point: c as u32,
            });
        }
    }

    pub(crate) fn finish(self) -> Option<(usize, Vec<CharOccurrence>)> {
        (self.count > 0).then_some((self.count, self.samples))
    }
}
