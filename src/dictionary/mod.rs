//! Dictionary oracle
//!
//! The session asks a [`Dictionary`] whether a candidate is a real word in a
//! given language. The production oracle is a word-list lookup; tests plug
//! in their own fakes.

mod word_list;

pub use word_list::WordListDictionary;

/// Answers whether a word is recognized in a language
pub trait Dictionary {
    /// `true` if `word` is a known word for the `language` tag (e.g. `"en"`)
    fn is_known_word(&self, word: &str, language: &str) -> bool;
}

impl<D: Dictionary + ?Sized> Dictionary for &D {
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        (**self).is_known_word(word, language)
    }
}

impl<D: Dictionary + ?Sized> Dictionary for Box<D> {
    fn is_known_word(&self, word: &str, language: &str) -> bool {
        (**self).is_known_word(word, language)
    }
}
