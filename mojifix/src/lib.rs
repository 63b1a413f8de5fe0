// mojifix/src/lib.rs
//! # mojifix CLI Application
//!
//! Command-line front end for `mojifix-core`: sanitizes text from a file or
//! stdin, reports remaining encoding problems, and splits LLM responses into
//! cleaned posts.

pub mod cli;
pub mod commands;
pub mod logger;
pub mod utils;
