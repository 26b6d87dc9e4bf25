//! Word finding for a root word
//!
//! Answers "what could I have played?" by scanning the whole dictionary.

mod finder;

pub use finder::{RoundSummary, possible_words, summarize_round};
