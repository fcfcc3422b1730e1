//! Phrase rewriting pipeline for Thesaurize.
//!
//! Ties the stages together: tokenize the phrase, fan out one concurrent
//! synonym lookup per word token, join all lookups, and reassemble the
//! results in their original order.

pub mod assembler;
pub mod rewriter;

// Re-export commonly used types
pub use assembler::*;
pub use rewriter::*;
