use std::collections::HashSet;

use crate::error::{Error, Result};
use crate::tokenizer::{tokenize, validate_word};

/// Terms to be discarded during query parsing and document ingestion.
/// Immutable once built; the engine never mutates it after construction.
#[derive(Debug, Clone, Default)]
pub struct StopWords {
    words: HashSet<String>,
}

impl StopWords {
    pub fn empty() -> Self {
        StopWords {
            words: HashSet::new(),
        }
    }

    /// Builds a stop-word set from a single space-separated string.
    pub fn from_str(text: &str) -> Result<Self> {
        Self::from_iter(tokenize(text).into_iter())
    }

    /// Builds a stop-word set from a collection of strings. Empty elements
    /// are silently ignored; any element failing [`validate_word`] fails
    /// the whole construction.
    pub fn from_iter<'a, I>(words: I) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut set = HashSet::new();
        for word in words {
            if word.is_empty() {
                continue;
            }
            if !validate_word(word) {
                return Err(Error::invalid_argument(format!(
                    "stop word {{{word}}} contains illegal characters"
                )));
            }
            set.insert(word.to_string());
        }
        Ok(StopWords { words: set })
    }

    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
    }
}
