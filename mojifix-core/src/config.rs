//! Configuration management for `mojifix-core`.
//!
//! This module defines the character-mapping table consumed by the
//! [`CharacterMapper`](crate::sanitizers::mapper::CharacterMapper). The table is
//! an ordered list: entries are applied in the order they appear, which keeps
//! overlapping sources deterministic. User tables are loaded from YAML and
//! merged over the built-in defaults.
//!
//! License: MIT OR Apache-2.0

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

use crate::errors::MojifixError;

/// Built-in mappings as `(source, target, description)`.
///
/// Corruption literals come first so they win over the single-character
/// entries that follow.
const DEFAULT_MAPPINGS: &[(&str, &str, &str)] = &[
    ("窶覇", "—", "em dash corruption"),
    ("竊会", "\"", "quote corruption"),
    ("窶忤", "\"", "left quote corruption"),
    ("窶", "\"", "right quote corruption"),
    ("\u{2014}", "—", "em dash"),
    ("\u{2013}", "–", "en dash"),
    ("\u{2012}", "–", "figure dash"),
    ("\u{2015}", "—", "horizontal bar"),
    ("\u{201c}", "\"", "left double quotation mark"),
    ("\u{201d}", "\"", "right double quotation mark"),
    ("\u{2018}", "'", "left single quotation mark"),
    ("\u{2019}", "'", "right single quotation mark"),
    ("\u{201a}", "'", "single low-9 quotation mark"),
    ("\u{201e}", "\"", "double low-9 quotation mark"),
    ("\u{00a0}", " ", "non-breaking space"),
    ("\u{2009}", " ", "thin space"),
    ("\u{200a}", " ", "hair space"),
    ("\u{200b}", "", "zero-width space"),
    ("\u{200c}", "", "zero-width non-joiner"),
    ("\u{200d}", "", "zero-width joiner"),
    ("\u{2060}", "", "word joiner"),
    ("\u{feff}", "", "zero-width no-break space (BOM)"),
    ("\u{2026}", "...", "horizontal ellipsis"),
    ("\u{00b7}", "·", "middle dot"),
    ("\u{2022}", "•", "bullet"),
    ("\u{2023}", "▸", "triangular bullet"),
    ("\u{00a2}", "¢", "cent sign"),
    ("\u{00a3}", "£", "pound sign"),
    ("\u{00a5}", "¥", "yen sign"),
    ("\u{20ac}", "€", "euro sign"),
];

/// A single source-to-target replacement.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize, Serialize)]
pub struct CharacterMapping {
    /// The substring to replace. Must not be empty.
    pub source: String,
    /// The replacement. May be empty, which removes the source.
    #[serde(default)]
    pub target: String,
    /// Human-readable note on what the entry handles.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl CharacterMapping {
    pub fn new(source: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            description: None,
        }
    }
}

/// Ordered mapping table used by the character mapper.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SanitizationConfig {
    /// Mappings in application order. Sources are unique.
    #[serde(default)]
    pub mappings: Vec<CharacterMapping>,
}

impl Default for SanitizationConfig {
    fn default() -> Self {
        Self::load_default_mappings()
    }
}

impl SanitizationConfig {
    /// Creates a table with no entries.
    pub fn empty() -> Self {
        Self { mappings: Vec::new() }
    }

    /// Builds the built-in mapping table.
    pub fn load_default_mappings() -> Self {
        debug!("Loading {} built-in character mappings.", DEFAULT_MAPPINGS.len());
        let mappings = DEFAULT_MAPPINGS
            .iter()
            .map(|(source, target, description)| CharacterMapping {
                source: (*source).to_string(),
                target: (*target).to_string(),
                description: Some((*description).to_string()),
            })
            .collect();
        Self { mappings }
    }

    /// Loads a mapping table from a YAML file.
    ///
    /// The file has a single `mappings` list whose items carry `source`,
    /// `target` and an optional `description`.
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading custom mappings from: {}", path.display());
        let text = std::fs::read_to_string(path)
            .map_err(MojifixError::from)
            .with_context(|| format!("Failed to read mapping file {}", path.display()))?;
        let config = Self::from_yaml_str(&text)
            .with_context(|| format!("Failed to load mapping file {}", path.display()))?;
        info!("Loaded {} mappings from file {}.", config.mappings.len(), path.display());
        Ok(config)
    }

    /// Parses and validates a mapping table from YAML text.
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        let config: SanitizationConfig =
            serde_yml::from_str(text).context("Failed to parse mapping YAML")?;
        validate_mappings(&config.mappings)?;
        Ok(config)
    }

    /// Returns the target registered for `source`, if any.
    pub fn get(&self, source: &str) -> Option<&str> {
        self.mappings
            .iter()
            .find(|m| m.source == source)
            .map(|m| m.target.as_str())
    }

    /// Inserts a mapping, overwriting the target of an existing source in place.
    pub fn insert(&mut self, mapping: CharacterMapping) {
        match self.mappings.iter_mut().find(|m| m.source == mapping.source) {
            Some(existing) => *existing = mapping,
            None => self.mappings.push(mapping),
        }
    }

    pub fn sources(&self) -> impl Iterator<Item = &str> {
        self.mappings.iter().map(|m| m.source.as_str())
    }

    pub fn len(&self) -> usize {
        self.mappings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mappings.is_empty()
    }
}

/// Merges a user table over the defaults.
///
/// A user entry replaces the default with the same source at the default's
/// position; entries with new sources are appended in user order.
pub fn merge_mappings(
    default_config: SanitizationConfig,
    user_config: Option<SanitizationConfig>,
) -> SanitizationConfig {
    debug!(
        "merge_mappings called. Initial default mappings count: {}",
        default_config.mappings.len()
    );
    let mut merged = default_config;

    if let Some(user_cfg) = user_config {
        debug!("User config provided. Merging {} user mappings.", user_cfg.mappings.len());
        for mapping in user_cfg.mappings {
            merged.insert(mapping);
        }
    }

    debug!("Final total mappings after merge: {}", merged.mappings.len());
    merged
}

/// Checks that every source is non-empty and unique.
fn validate_mappings(mappings: &[CharacterMapping]) -> Result<()> {
    let mut seen = HashSet::new();
    let mut errors = Vec::new();

    for (index, mapping) in mappings.iter().enumerate() {
        if mapping.source.is_empty() {
            errors.push(format!("Mapping #{} has an empty `source` field.", index + 1));
        } else if !seen.insert(mapping.source.as_str()) {
            errors.push(format!("Duplicate mapping source found: {:?}.", mapping.source));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(MojifixError::Config(errors.join("\n")).into())
    }
}
