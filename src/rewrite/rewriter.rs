//! Concurrent phrase rewriter.
//!
//! Dispatches one synonym lookup per word token, all concurrently, and joins
//! them before reassembly. Lookup failures degrade to the original word, so
//! a rewrite always produces a phrase; the worst case is the input echoed
//! back with only the words that did resolve replaced.

use std::sync::Arc;

use futures::future::join_all;
use log::warn;

use crate::analysis::token::Token;
use crate::analysis::tokenizer::WordPunctTokenizer;
use crate::rewrite::assembler::assemble;
use crate::thesaurus::SynonymProvider;

/// A token's resolved text paired with its original position.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct IndexedResult {
    /// Position of the source token in the phrase (0-based)
    pub position: usize,
    /// Final rendered text for that position
    pub text: String,
}

/// Rewrites phrases by replacing each eligible word with a synonym.
///
/// Punctuation tokens and standalone apostrophes pass through untouched.
/// Lookups for the remaining word tokens are issued concurrently; the output
/// order is determined by token positions, never by lookup completion order.
///
/// # Examples
///
/// ```no_run
/// use std::sync::Arc;
/// use thesaurize::rewrite::PhraseRewriter;
/// use thesaurize::thesaurus::DictionaryThesaurus;
///
/// # async fn example() {
/// let dictionary = DictionaryThesaurus::from_synonym_groups(vec![
///     vec!["hello".to_string(), "greetings".to_string()],
/// ]);
/// let rewriter = PhraseRewriter::new(Arc::new(dictionary));
///
/// let rewritten = rewriter.rewrite("hello, world!").await;
/// assert_eq!(rewritten, "greetings, world!");
/// # }
/// ```
pub struct PhraseRewriter {
    tokenizer: WordPunctTokenizer,
    provider: Arc<dyn SynonymProvider>,
}

impl std::fmt::Debug for PhraseRewriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PhraseRewriter")
            .field("provider", &self.provider.name())
            .finish()
    }
}

impl PhraseRewriter {
    /// Create a new rewriter backed by the given synonym provider.
    pub fn new(provider: Arc<dyn SynonymProvider>) -> Self {
        PhraseRewriter {
            tokenizer: WordPunctTokenizer::new(),
            provider,
        }
    }

    /// Rewrite a phrase, replacing each eligible word with a synonym.
    ///
    /// Never fails: individual lookup errors fall back to the original word
    /// and are logged. An empty phrase rewrites to an empty phrase.
    pub async fn rewrite(&self, phrase: &str) -> String {
        let tokens = self.tokenizer.tokenize(phrase);
        if tokens.is_empty() {
            return String::new();
        }

        // Fan out one lookup per token and wait for all of them.
        let lookups = tokens.iter().map(|token| self.resolve_token(token));
        let results = join_all(lookups).await;

        // Each position is written exactly once.
        let mut slots: Vec<String> = vec![String::new(); tokens.len()];
        for result in results {
            slots[result.position] = result.text;
        }

        assemble(slots.iter().map(String::as_str))
    }

    /// Resolve one token to its final rendered text.
    async fn resolve_token(&self, token: &Token) -> IndexedResult {
        if token.is_punctuation() || token.is_apostrophe() {
            return IndexedResult {
                position: token.position,
                text: token.text.clone(),
            };
        }

        let text = match self.provider.resolve(&token.text).await {
            Ok(synonym) => synonym,
            Err(e) => {
                warn!("synonym lookup for '{}' failed: {e}", token.text);
                token.text.clone()
            }
        };

        IndexedResult {
            position: token.position,
            text,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::thesaurus::DictionaryThesaurus;

    fn dictionary_rewriter(groups: Vec<Vec<&str>>) -> PhraseRewriter {
        let groups = groups
            .into_iter()
            .map(|group| group.into_iter().map(String::from).collect())
            .collect();
        PhraseRewriter::new(Arc::new(DictionaryThesaurus::from_synonym_groups(groups)))
    }

    #[test]
    fn test_rewrite_with_dictionary() {
        let rewriter = dictionary_rewriter(vec![
            vec!["hello", "greetings"],
            vec!["world", "earth"],
        ]);

        let rewritten = tokio_test::block_on(rewriter.rewrite("hello, world!"));
        assert_eq!(rewritten, "greetings, earth!");
    }

    #[test]
    fn test_empty_phrase() {
        let rewriter = dictionary_rewriter(vec![]);
        assert_eq!(tokio_test::block_on(rewriter.rewrite("")), "");
    }

    #[test]
    fn test_punctuation_passes_through_without_lookup() {
        // A dictionary entry for "!" must never be consulted
        let rewriter = dictionary_rewriter(vec![vec!["!", "BANG"]]);
        assert_eq!(tokio_test::block_on(rewriter.rewrite("stop!")), "stop!");
    }

    #[test]
    fn test_apostrophe_token_skips_lookup() {
        let rewriter = dictionary_rewriter(vec![vec!["'", "APOSTROPHE"]]);
        assert_eq!(tokio_test::block_on(rewriter.rewrite("can't")), "can't");
    }
}
