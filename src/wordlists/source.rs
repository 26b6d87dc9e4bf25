//! Root word pool
//!
//! A [`WordSource`] can only be built from a non-empty list, so picking a
//! root word never fails.

use super::loader::{load_from_file, words_from_slice};
use super::{START_WORDS, WordListError};
use crate::core::normalize;
use rand::Rng;
use std::path::Path;
use tracing::debug;

/// Immutable pool of candidate root words
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordSource {
    words: Vec<String>,
}

impl WordSource {
    /// Root words compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::Empty`] if the embedded list holds no usable
    /// words, which indicates a broken build.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::new(words_from_slice(START_WORDS), "embedded start words")
    }

    /// Load root words from a newline-delimited file
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or empty.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, WordListError> {
        let path = path.as_ref();
        Self::new(load_from_file(path)?, &path.display().to_string())
    }

    /// Build a pool from in-memory words
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::Empty`] if no non-blank word is given.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::wordlists::WordSource;
    ///
    /// let source = WordSource::from_words(["roadworks", "absolute"]).unwrap();
    /// assert_eq!(source.len(), 2);
    /// assert!(WordSource::from_words(Vec::<String>::new()).is_err());
    /// ```
    pub fn from_words<I, S>(words: I) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| normalize(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();
        Self::new(words, "in-memory word list")
    }

    fn new(words: Vec<String>, name: &str) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty(name.to_string()));
        }
        debug!(source = name, count = words.len(), "Root word pool ready");
        Ok(Self { words })
    }

    /// Pick a root word uniformly at random
    pub fn pick_random<R: Rng + ?Sized>(&self, rng: &mut R) -> &str {
        let index = rng.random_range(0..self.words.len());
        &self.words[index]
    }

    #[must_use]
    pub fn words(&self) -> &[String] {
        &self.words
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.iter().any(|w| w == word)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.words.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}
