//! Reassembly of resolved tokens into the output phrase.

use crate::analysis::token::contains_punctuation;

/// Join resolved token texts into a phrase, applying natural spacing rules.
///
/// Iterates the texts in order and carries a single "suppress next space"
/// flag between iterations:
///
/// - a standalone apostrophe is appended with no preceding space and sets
///   the flag, so the following word attaches to it (`can` + `'` + `t`);
/// - a text containing any ASCII punctuation character is appended with no
///   preceding space and leaves the flag untouched;
/// - any other text is a word: it gets a single preceding space unless the
///   flag is set, and clears the flag.
///
/// Punctuation deliberately does not reset the flag the way a word does;
/// this matches how trailing punctuation attaches to the preceding word.
///
/// # Examples
///
/// ```
/// use thesaurize::rewrite::assembler::assemble;
///
/// let parts = ["Greetings", ",", "earth", "!"];
/// assert_eq!(assemble(parts), "Greetings, earth!");
///
/// let parts = ["I", "may", "'", "t", "stop", "."];
/// assert_eq!(assemble(parts), "I may't stop.");
/// ```
pub fn assemble<'a, I>(parts: I) -> String
where
    I: IntoIterator<Item = &'a str>,
{
    let mut rendered = String::new();
    let mut suppress_space = true;

    for part in parts {
        if part == "'" {
            rendered.push('\'');
            suppress_space = true;
        } else if contains_punctuation(part) {
            rendered.push_str(part);
        } else {
            if !suppress_space {
                rendered.push(' ');
            }
            rendered.push_str(part);
            suppress_space = false;
        }
    }

    rendered
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_words_get_single_spaces() {
        assert_eq!(assemble(["hello", "there", "world"]), "hello there world");
    }

    #[test]
    fn test_no_space_before_punctuation() {
        assert_eq!(assemble(["hello", ",", "world", "!"]), "hello, world!");
    }

    #[test]
    fn test_apostrophe_suppresses_following_space() {
        assert_eq!(assemble(["can", "'", "t"]), "can't");
    }

    #[test]
    fn test_leading_punctuation() {
        assert_eq!(assemble(["...", "well", "?"]), "...well?");
    }

    #[test]
    fn test_word_with_embedded_punctuation_attaches() {
        // '_' counts as punctuation for rendering, so the text attaches to
        // the previous part without a space
        assert_eq!(assemble(["run", "snake_case"]), "runsnake_case");
    }

    #[test]
    fn test_empty_input() {
        let parts: [&str; 0] = [];
        assert_eq!(assemble(parts), "");
    }

    #[test]
    fn test_punctuation_only() {
        assert_eq!(assemble(["?!?"]), "?!?");
    }
}
