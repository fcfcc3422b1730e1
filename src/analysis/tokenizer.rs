//! Word/punctuation tokenizer for phrase rewriting.
//!
//! Splits text into maximal runs of word characters and maximal runs of
//! non-whitespace, non-word characters, scanning left to right. Whitespace
//! separates tokens and is not itself represented as a token, so
//! concatenating the token texts in order recovers exactly the
//! non-whitespace content of the input.

use lazy_static::lazy_static;
use regex::Regex;

use crate::analysis::token::{Token, TokenKind};

lazy_static! {
    static ref TOKEN_PATTERN: Regex =
        Regex::new(r"(?P<word>\w+)|(?P<punct>[^\s\w]+)").expect("token pattern is valid");
}

/// Tokenizer that splits a phrase into word and punctuation runs.
///
/// Tokenization is total: any input, including the empty string, produces a
/// well-formed (possibly empty) token sequence.
///
/// # Examples
///
/// ```
/// use thesaurize::analysis::tokenizer::WordPunctTokenizer;
///
/// let tokenizer = WordPunctTokenizer::new();
/// let tokens = tokenizer.tokenize("Hello, world!");
///
/// assert_eq!(tokens.len(), 4);
/// assert_eq!(tokens[0].text, "Hello");
/// assert_eq!(tokens[1].text, ",");
/// assert_eq!(tokens[2].text, "world");
/// assert_eq!(tokens[3].text, "!");
/// ```
#[derive(Clone, Debug, Default)]
pub struct WordPunctTokenizer;

impl WordPunctTokenizer {
    /// Create a new tokenizer.
    pub fn new() -> Self {
        WordPunctTokenizer
    }

    /// Tokenize the given text into an ordered sequence of tokens.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        TOKEN_PATTERN
            .captures_iter(text)
            .enumerate()
            .map(|(position, caps)| {
                if let Some(mat) = caps.name("word") {
                    Token::new(mat.as_str(), position, TokenKind::Word)
                } else {
                    // The alternation is exhaustive: a capture that is not a
                    // word run is a punctuation run.
                    let mat = caps.name("punct").expect("punct branch matched");
                    Token::new(mat.as_str(), position, TokenKind::Punctuation)
                }
            })
            .collect()
    }

    /// Get the name of this tokenizer (for debugging and configuration).
    pub fn name(&self) -> &'static str {
        "word_punct"
    }
}
