//! Word Scramble
//!
//! A word-anagram game: make as many words as possible from the letters of a
//! random root word, one point per accepted word.
//!
//! # Quick Start
//!
//! ```rust
//! use word_scramble::core::{Rejection, SubmissionResult};
//! use word_scramble::dictionary::WordListDictionary;
//! use word_scramble::game::GameSession;
//! use word_scramble::wordlists::WordSource;
//!
//! let source = WordSource::embedded().unwrap();
//! let dictionary = WordListDictionary::embedded().unwrap();
//! let mut session = GameSession::seeded(&source, &dictionary, 7).with_root_word("roadworks");
//!
//! assert_eq!(session.submit("road"), Some(SubmissionResult::Accepted("road".into())));
//! assert_eq!(session.submit("road"), Some(SubmissionResult::Rejected(Rejection::AlreadyUsed)));
//! assert_eq!(session.score(), 1);
//! ```

// Core domain types
pub mod core;

// Dictionary oracle
pub mod dictionary;

// Round state and submission checks
pub mod game;

// Finding every playable word
pub mod solver;

// Word lists
pub mod wordlists;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;

// Interactive TUI interface
pub mod interactive;
