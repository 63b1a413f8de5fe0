//! Helpers shared by the `mojifix` commands.

pub mod input;
pub mod mapping_config;
pub mod output;
