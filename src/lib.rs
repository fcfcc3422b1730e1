//! # Thesaurize
//!
//! A slash-command bot that rewrites phrases word-by-word with synonyms
//! fetched from a thesaurus.
//!
//! ## Features
//!
//! - Tokenization that preserves punctuation across arbitrary input
//! - Concurrent per-word synonym lookup with per-word fallback
//! - Order-preserving reassembly with natural spacing rules
//! - Pluggable synonym providers (HTTP thesaurus API, offline dictionary)

pub mod analysis;
pub mod bot;
pub mod cli;
pub mod error;
pub mod rewrite;
pub mod thesaurus;

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
