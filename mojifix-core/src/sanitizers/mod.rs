//! The two transforming stages of the pipeline.
//!
//! `normalizer` repairs known mojibake signatures and applies NFKC;
//! `mapper` swaps typographic characters for their plain equivalents using the
//! table from `config`. Both are reached through the traits in `engine`.

pub mod mapper;
pub mod normalizer;
