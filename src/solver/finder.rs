//! Exhaustive word search for a root word
//!
//! Lists every dictionary word a player could score with in a fresh round.

use crate::core::{GameRules, LetterPool, letter_count};
use crate::dictionary::{Dictionary, WordListDictionary};
use rayon::prelude::*;
use std::cmp::Reverse;

/// Every word that would be accepted as the first submission of a round
///
/// Sorted longest first, then alphabetically. The root word itself is never
/// included.
///
/// # Examples
/// ```
/// use word_scramble::core::GameRules;
/// use word_scramble::dictionary::WordListDictionary;
/// use word_scramble::solver::possible_words;
///
/// let dictionary =
///     WordListDictionary::from_words(["road", "sword", "zoo", "roadworks"], "en").unwrap();
/// let words = possible_words("roadworks", &dictionary, &GameRules::default());
/// assert_eq!(words, vec!["sword", "road"]);
/// ```
#[must_use]
pub fn possible_words<'d>(
    root_word: &str,
    dictionary: &'d WordListDictionary,
    rules: &GameRules,
) -> Vec<&'d str> {
    let pool = LetterPool::new(root_word);
    let candidates: Vec<&str> = dictionary.words().collect();

    let mut words: Vec<&str> = candidates
        .par_iter()
        .copied()
        .filter(|&word| {
            letter_count(word) >= rules.min_length
                && word != root_word
                && pool.can_spell(word)
                && dictionary.is_known_word(word, &rules.language)
        })
        .collect();

    words.sort_unstable_by_key(|&word| (Reverse(letter_count(word)), word));
    words
}

/// How much of a root word a player uncovered
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSummary<'d> {
    pub root_word: String,
    pub found: usize,
    pub possible: usize,
    /// Possible words the player never submitted, longest first
    pub missed: Vec<&'d str>,
}

impl RoundSummary<'_> {
    /// Share of possible words found, from 0.0 to 1.0
    #[must_use]
    pub fn coverage(&self) -> f64 {
        if self.possible == 0 {
            return 0.0;
        }
        self.found as f64 / self.possible as f64
    }
}

/// Compare a round's accepted words with everything the dictionary allows
///
/// Only accepted words that `dictionary` also lists count as found, so
/// `found + missed.len() == possible` even when the session judged words
/// with a different oracle.
#[must_use]
pub fn summarize_round<'d>(
    root_word: &str,
    accepted: &[String],
    dictionary: &'d WordListDictionary,
    rules: &GameRules,
) -> RoundSummary<'d> {
    let possible = possible_words(root_word, dictionary, rules);
    let (found, missed): (Vec<&str>, Vec<&str>) = possible
        .iter()
        .copied()
        .partition(|word| accepted.iter().any(|found| found == word));

    RoundSummary {
        root_word: root_word.to_string(),
        found: found.len(),
        possible: possible.len(),
        missed,
    }
}
