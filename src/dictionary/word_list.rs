//! Word-list backed dictionary

use super::Dictionary;
use crate::core::{DEFAULT_LANGUAGE, normalize};
use crate::wordlists::loader::{load_from_file, words_from_slice};
use crate::wordlists::{DICTIONARY, WordListError};
use rustc_hash::FxHashSet;
use std::path::Path;
use tracing::debug;

/// Set of known words for a single language
///
/// Lookups for any other language tag answer `false`.
#[derive(Debug, Clone)]
pub struct WordListDictionary {
    language: String,
    words: FxHashSet<String>,
}

impl WordListDictionary {
    /// English dictionary compiled into the binary
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::Empty`] if the embedded list holds no words.
    pub fn embedded() -> Result<Self, WordListError> {
        Self::new(
            words_from_slice(DICTIONARY),
            DEFAULT_LANGUAGE,
            "embedded dictionary",
        )
    }

    /// Load a dictionary for `language` from a newline-delimited file
    ///
    /// # Errors
    ///
    /// Returns an error if the file is missing, unreadable or empty.
    pub fn from_file<P: AsRef<Path>>(
        path: P,
        language: impl Into<String>,
    ) -> Result<Self, WordListError> {
        let path = path.as_ref();
        Self::new(
            load_from_file(path)?,
            language,
            &path.display().to_string(),
        )
    }

    /// Build a dictionary from in-memory words
    ///
    /// # Errors
    ///
    /// Returns [`WordListError::Empty`] if no non-blank word is given.
    ///
    /// # Examples
    /// ```
    /// use word_scramble::dictionary::{Dictionary, WordListDictionary};
    ///
    /// let dictionary = WordListDictionary::from_words(["road", "Work"], "en").unwrap();
    /// assert!(dictionary.is_known_word("work", "en"));
    /// assert!(!dictionary.is_known_word("work", "de"));
    /// assert!(!dictionary.is_known_word("zzqx", "en"));
    /// ```
    pub fn from_words<I, S>(words: I, language: impl Into<String>) -> Result<Self, WordListError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let words = words
            .into_iter()
            .map(|word| normalize(word.as_ref()))
            .filter(|word| !word.is_empty())
            .collect();
        Self::new(words, language, "in-memory dictionary")
    }

    fn new(
        words: Vec<String>,
        language: impl Into<String>,
        name: &str,
    ) -> Result<Self, WordListError> {
        if words.is_empty() {
            return Err(WordListError::Empty(name.to_string()));
        }

        let language = language.into();
        let words: FxHashSet<String> = words.into_iter().collect();
        debug!(source = name, %language, count = words.len(), "Dictionary ready");

        Ok(Self { language, words })
    }

    #[must_use]
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Iterate over every known word, in no particular order
    pub fn words(&self) -> impl Iterator<Item = &str> {
        self.words.iter().map(String::as_str)
    }

    #[must_use]
    pub fn contains(&self, word: &str) -> bool {
        self.words.contains(word)
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

impl Dictionary for WordListDictionary {
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        language.eq_ignore_ascii_case(&self.language) && self.words.contains(word)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embedded_dictionary_is_english() {
        let dictionary = WordListDictionary::embedded().unwrap();
        assert_eq!(dictionary.language(), "en");
        assert!(dictionary.len() > 1000);
    }

    #[test]
    fn embedded_dictionary_knows_common_words() {
        let dictionary = WordListDictionary::embedded().unwrap();
        for word in ["road", "sword", "work", "elephant"] {
            assert!(dictionary.is_known_word(word, "en"), "'{word}' unknown");
        }
    }

    #[test]
    fn embedded_dictionary_rejects_gibberish() {
        let dictionary = WordListDictionary::embedded().unwrap();
        assert!(!dictionary.is_known_word("zzqx", "en"));
        assert!(!dictionary.is_known_word("rdoa", "en"));
    }

    #[test]
    fn language_tag_must_match() {
        let dictionary = WordListDictionary::from_words(["road"], "en").unwrap();
        assert!(dictionary.is_known_word("road", "en"));
        assert!(dictionary.is_known_word("road", "EN"));
        assert!(!dictionary.is_known_word("road", "fr"));
    }

    #[test]
    fn lookup_is_exact() {
        let dictionary = WordListDictionary::from_words(["Road"], "en").unwrap();
        assert!(dictionary.is_known_word("road", "en"));
        assert!(!dictionary.is_known_word("Road", "en")); // Callers normalize first
        assert!(!dictionary.is_known_word("roads", "en"));
    }

    #[test]
    fn duplicates_collapse() {
        let dictionary = WordListDictionary::from_words(["road", "road", "work"], "en").unwrap();
        assert_eq!(dictionary.len(), 2);
        assert!(dictionary.contains("work"));
    }

    #[test]
    fn empty_dictionary_is_rejected() {
        let result = WordListDictionary::from_words(Vec::<&str>::new(), "en");
        assert!(matches!(result, Err(WordListError::Empty(_))));
    }

    #[test]
    fn missing_file_is_rejected() {
        let result = WordListDictionary::from_file("/no/such/dictionary.txt", "en");
        assert!(matches!(result, Err(WordListError::Io { .. })));
    }
}
