//! mapper.rs - Table-driven replacement of unwanted characters.
//!
//! The default table is shared read-only between mappers; each mapper owns its
//! custom overrides.
//!
//! License: MIT OR APACHE 2.0

use anyhow::Result;
use log::debug;
use std::sync::Arc;

use crate::config::{CharacterMapping, SanitizationConfig};
use crate::engine::Mapper;
use crate::errors::MojifixError;

/// Replaces typographic characters (smart quotes, special spaces, zero-width
/// characters and the like) according to a [`SanitizationConfig`].
#[derive(Debug, Clone)]
pub struct CharacterMapper {
    config: Arc<SanitizationConfig>,
    custom: SanitizationConfig,
}

impl Default for CharacterMapper {
    fn default() -> Self {
        Self::new(SanitizationConfig::default())
    }
}

impl CharacterMapper {
    pub fn new(config: SanitizationConfig) -> Self {
        Self::with_shared_config(Arc::new(config))
    }

    /// Builds a mapper that reads a default table shared with other mappers.
    pub fn with_shared_config(config: Arc<SanitizationConfig>) -> Self {
        Self {
            config,
            custom: SanitizationConfig::empty(),
        }
    }

    /// Custom mappings added with [`Mapper::add_mapping`], in insertion order.
    pub fn custom_mappings(&self) -> &[CharacterMapping] {
        &self.custom.mappings
    }
}

impl Mapper for CharacterMapper {
    fn map_characters(&self, text: &str) -> Result<String> {
        let mut mapped = text.to_string();

        for mapping in &self.config.mappings {
            // A custom entry for the same source replaces the default outright.
            if self.custom.get(&mapping.source).is_some() {
                continue;
            }
            if mapped.contains(mapping.source.as_str()) {
                mapped = mapped.replace(mapping.source.as_str(), &mapping.target);
            }
        }

        for mapping in &self.custom.mappings {
            if mapped.contains(mapping.source.as_str()) {
                mapped = mapped.replace(mapping.source.as_str(), &mapping.target);
            }
        }

        Ok(mapped)
    }

    fn add_mapping(&mut self, source: &str, target: &str) -> crate::Result<()> {
        if source.is_empty() {
            return Err(MojifixError::invalid_input("mapping source must not be empty"));
        }
        debug!("Adding custom mapping {:?} -> {:?}", source, target);
        self.custom.insert(CharacterMapping::new(source, target));
        Ok(())
    }
}
