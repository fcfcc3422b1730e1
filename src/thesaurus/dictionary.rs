//! Offline synonym dictionary provider.
//!
//! Maps terms to synonyms from in-memory synonym groups, optionally loaded
//! from a JSON file. Useful when no API credential is available, and for
//! deterministic tests.

use std::collections::HashMap;
use std::path::Path;

use async_trait::async_trait;

use crate::error::{Result, ThesaurizeError};
use crate::thesaurus::SynonymProvider;

/// Synonym provider backed by an in-memory dictionary.
///
/// # Examples
///
/// ```
/// use thesaurize::thesaurus::DictionaryThesaurus;
///
/// let dictionary = DictionaryThesaurus::from_synonym_groups(vec![
///     vec!["big".to_string(), "large".to_string(), "huge".to_string()],
/// ]);
/// assert_eq!(dictionary.len(), 3);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DictionaryThesaurus {
    /// term -> synonym candidates in dictionary order
    synonyms: HashMap<String, Vec<String>>,
}

impl DictionaryThesaurus {
    /// Create an empty dictionary. Every word resolves to itself.
    pub fn new() -> Self {
        DictionaryThesaurus {
            synonyms: HashMap::new(),
        }
    }

    /// Load a dictionary from a JSON file of synonym groups.
    ///
    /// The file should contain an array of groups, where each group is an
    /// array of terms that are synonyms of each other:
    ///
    /// ```json
    /// [
    ///   ["big", "large", "huge"],
    ///   ["fast", "quick"]
    /// ]
    /// ```
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            ThesaurizeError::config(format!(
                "failed to read synonym dictionary '{}': {}",
                path.display(),
                e
            ))
        })?;

        let groups: Vec<Vec<String>> = serde_json::from_str(&content).map_err(|e| {
            ThesaurizeError::config(format!(
                "failed to parse synonym dictionary '{}': {}",
                path.display(),
                e
            ))
        })?;

        Ok(Self::from_synonym_groups(groups))
    }

    /// Build a dictionary from synonym groups.
    ///
    /// Each term in a group maps to the other members of its group, in group
    /// order.
    pub fn from_synonym_groups(groups: Vec<Vec<String>>) -> Self {
        let mut synonyms: HashMap<String, Vec<String>> = HashMap::new();

        for group in groups {
            for (i, term) in group.iter().enumerate() {
                let others = group
                    .iter()
                    .enumerate()
                    .filter(|(j, _)| *j != i)
                    .map(|(_, other)| other.clone());
                synonyms.entry(term.clone()).or_default().extend(others);
            }
        }

        DictionaryThesaurus { synonyms }
    }

    /// Number of terms with at least one synonym.
    pub fn len(&self) -> usize {
        self.synonyms.len()
    }

    /// Check if the dictionary has no entries.
    pub fn is_empty(&self) -> bool {
        self.synonyms.is_empty()
    }
}

#[async_trait]
impl SynonymProvider for DictionaryThesaurus {
    async fn resolve(&self, word: &str) -> Result<String> {
        Ok(self
            .synonyms
            .get(word)
            .and_then(|candidates| candidates.first())
            .cloned()
            .unwrap_or_else(|| word.to_string()))
    }

    fn name(&self) -> &'static str {
        "dictionary"
    }
}
