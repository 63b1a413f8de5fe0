// mojifix/src/logger.rs
//! Logger setup for the `mojifix` binary and its tests.

use env_logger::{Builder, Env};
use log::LevelFilter;

/// Initializes `env_logger` once.
///
/// `RUST_LOG` is honoured (defaulting to `warn`) unless `level` overrides it.
/// Later calls are no-ops, so tests can call this freely.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = Builder::from_env(Env::default().default_filter_or("warn"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp(None).try_init().ok();
}
