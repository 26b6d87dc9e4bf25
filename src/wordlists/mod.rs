//! Word lists for Word Scramble
//!
//! Provides embedded word lists compiled into the binary, file loading for
//! custom lists, and the root word pool a session draws from.

mod embedded;
mod error;
pub mod loader;
mod source;

pub use embedded::{DICTIONARY, DICTIONARY_COUNT, START_WORDS, START_WORDS_COUNT};
pub use error::WordListError;
pub use source::WordSource;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_words_count_matches_const() {
        assert_eq!(START_WORDS.len(), START_WORDS_COUNT);
    }

    #[test]
    fn dictionary_count_matches_const() {
        assert_eq!(DICTIONARY.len(), DICTIONARY_COUNT);
    }

    #[test]
    fn start_words_are_lowercase_letters() {
        for &word in START_WORDS {
            assert!(!word.is_empty());
            assert!(
                word.chars().all(|c| c.is_ascii_lowercase()),
                "Start word '{word}' contains non-lowercase chars"
            );
        }
    }

    #[test]
    fn start_words_are_dictionary_words() {
        // Every root word should itself be a real word
        let dictionary: std::collections::HashSet<_> = DICTIONARY.iter().collect();

        for word in START_WORDS {
            assert!(
                dictionary.contains(word),
                "Start word '{word}' not in dictionary"
            );
        }
    }

    #[test]
    fn dictionary_has_roadworks_words() {
        for word in ["road", "work", "works", "sword", "roadworks"] {
            assert!(DICTIONARY.contains(&word), "'{word}' missing");
        }
    }
}
