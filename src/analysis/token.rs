//! Token types for phrase analysis.
//!
//! A token is a substring of the input phrase paired with its 0-based
//! position. Tokens carry no identity beyond their text and position; they
//! are created at the start of one rewrite invocation and discarded after
//! reassembly.
//!
//! # Examples
//!
//! ```
//! use thesaurize::analysis::token::{Token, TokenKind};
//!
//! let token = Token::new("hello", 0, TokenKind::Word);
//! assert_eq!(token.text, "hello");
//! assert_eq!(token.position, 0);
//! assert!(token.is_word());
//! ```

use std::fmt;

use serde::{Deserialize, Serialize};

/// ASCII punctuation characters, as classified by the reassembly rules.
///
/// Note that `_` appears here even though it is a word character for the
/// tokenizer: a word token like `snake_case` still renders without a
/// preceding space. This asymmetry is deliberate.
pub const PUNCTUATION_CHARS: &str = "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

/// Check whether the text contains any ASCII punctuation character.
///
/// # Examples
///
/// ```
/// use thesaurize::analysis::token::contains_punctuation;
///
/// assert!(contains_punctuation("!?!"));
/// assert!(contains_punctuation("snake_case"));
/// assert!(!contains_punctuation("hello"));
/// ```
pub fn contains_punctuation(text: &str) -> bool {
    text.chars().any(|c| PUNCTUATION_CHARS.contains(c))
}

/// Classification of a token by the tokenizer branch that matched it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TokenKind {
    /// Maximal run of word characters (letters, digits, underscore)
    Word,
    /// Maximal run of characters that are neither whitespace nor word characters
    Punctuation,
}

/// A single unit of a tokenized phrase.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    /// The text content of the token
    pub text: String,

    /// The position of the token in the phrase (0-based)
    pub position: usize,

    /// Which tokenizer branch matched this token
    pub kind: TokenKind,
}

impl Token {
    /// Create a new token with the given text, position, and kind.
    pub fn new<S: Into<String>>(text: S, position: usize, kind: TokenKind) -> Self {
        Token {
            text: text.into(),
            position,
            kind,
        }
    }

    /// Check if this token is a word token.
    pub fn is_word(&self) -> bool {
        self.kind == TokenKind::Word
    }

    /// Check if this token is a punctuation token.
    pub fn is_punctuation(&self) -> bool {
        self.kind == TokenKind::Punctuation
    }

    /// Check if this token is exactly a single apostrophe.
    ///
    /// Apostrophe tokens are passed through the pipeline untouched so that
    /// contractions such as `can't` survive a rewrite.
    pub fn is_apostrophe(&self) -> bool {
        self.text == "'"
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_creation() {
        let token = Token::new("hello", 0, TokenKind::Word);
        assert_eq!(token.text, "hello");
        assert_eq!(token.position, 0);
        assert!(token.is_word());
        assert!(!token.is_punctuation());
        assert!(!token.is_apostrophe());
    }

    #[test]
    fn test_apostrophe_detection() {
        let token = Token::new("'", 2, TokenKind::Punctuation);
        assert!(token.is_apostrophe());

        // An apostrophe inside a longer run is not a standalone apostrophe
        let token = Token::new("')", 2, TokenKind::Punctuation);
        assert!(!token.is_apostrophe());
    }

    #[test]
    fn test_contains_punctuation() {
        assert!(contains_punctuation(","));
        assert!(contains_punctuation("...!"));
        assert!(contains_punctuation("foo_bar"));
        assert!(!contains_punctuation("plain"));
        assert!(!contains_punctuation(""));
        // Non-ASCII punctuation is not in the set
        assert!(!contains_punctuation("—"));
    }

    #[test]
    fn test_token_display() {
        let token = Token::new("hello", 0, TokenKind::Word);
        assert_eq!(format!("{token}"), "hello");
    }
}
