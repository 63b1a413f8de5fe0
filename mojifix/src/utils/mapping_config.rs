//! Resolution of the character-mapping table used by the CLI.

use anyhow::{Context, Result};
use log::{debug, info};
use std::path::{Path, PathBuf};

use mojifix_core::{merge_mappings, SanitizationConfig, TextSanitizer};

use crate::cli::MappingArgs;

const MAPPING_FILE_NAME: &str = "mappings.yaml";

/// Locations searched for a user mapping file, in priority order.
pub fn mapping_candidate_paths() -> Vec<PathBuf> {
    let base_dirs = vec![
        dirs::home_dir().map(|p| p.join(".mojifix")),
        dirs::config_dir().map(|p| p.join("mojifix")),
        Some(PathBuf::from("./config")),
    ];

    base_dirs
        .into_iter()
        .flatten()
        .map(|dir| dir.join(MAPPING_FILE_NAME))
        .collect()
}

/// Loads the mapping table: defaults merged with the explicit file if given,
/// otherwise with the first candidate file that exists.
pub fn load_mapping_config(explicit: Option<&Path>) -> Result<SanitizationConfig> {
    let defaults = SanitizationConfig::load_default_mappings();

    let user_path = match explicit {
        Some(path) => Some(path.to_path_buf()),
        None => mapping_candidate_paths().into_iter().find(|p| p.is_file()),
    };

    let user_config = match user_path {
        Some(path) => {
            info!("Using mapping file: {}", path.display());
            Some(SanitizationConfig::load_from_file(&path)?)
        }
        None => {
            debug!("No user mapping file found; using built-in mappings only.");
            None
        }
    };

    Ok(merge_mappings(defaults, user_config))
}

/// Builds a sanitizer from the mapping file and the `--map` overrides.
pub fn build_sanitizer(args: &MappingArgs) -> Result<TextSanitizer> {
    let config = load_mapping_config(args.config.as_deref())?;
    let mut sanitizer = TextSanitizer::with_config(config);
    for (source, target) in &args.map {
        sanitizer
            .add_mapping(source, target)
            .with_context(|| format!("Invalid --map entry '{}={}'", source, target))?;
    }
    Ok(sanitizer)
}
