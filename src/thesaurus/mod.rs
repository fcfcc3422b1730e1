//! Synonym resolution for Thesaurize.
//!
//! A [`SynonymProvider`] maps a single word to a replacement word. The
//! rewrite pipeline treats providers as black boxes obeying one contract:
//!
//! - on success with at least one candidate, the FIRST candidate in the
//!   provider's order is returned (no ranking is applied);
//! - on success with zero candidates, the original word is returned as a
//!   fallback, not an error;
//! - failures are transport or parse errors only.
//!
//! # Available Providers
//!
//! - [`api_ninjas::ApiNinjasThesaurus`] - HTTP lookup against the API Ninjas
//!   thesaurus endpoint
//! - [`dictionary::DictionaryThesaurus`] - in-memory synonym groups, for
//!   offline use and deterministic tests

use async_trait::async_trait;

use crate::error::Result;

/// Trait for synonym providers.
///
/// Requires `Send + Sync` so lookups can be fanned out concurrently.
#[async_trait]
pub trait SynonymProvider: Send + Sync {
    /// Resolve a single word (no internal whitespace) to a replacement.
    ///
    /// Returns the first synonym candidate, or the word itself when the
    /// provider knows no synonym for it. Errors signal transport or parse
    /// failures only.
    async fn resolve(&self, word: &str) -> Result<String>;

    /// Get the name of this provider (for diagnostics and configuration).
    fn name(&self) -> &'static str;
}

// Individual provider modules
pub mod api_ninjas;
pub mod dictionary;

pub use api_ninjas::ApiNinjasThesaurus;
pub use dictionary::DictionaryThesaurus;
