//! Core domain types for Word Scramble
//!
//! Pure, dependency-light types shared by the session, the solver and the
//! front ends: word normalization, letter multisets, rejection reasons and
//! round rules.

mod rejection;
mod rules;
mod word;

pub use rejection::{Rejection, SubmissionResult};
pub use rules::{DEFAULT_LANGUAGE, DEFAULT_MIN_LENGTH, GameRules};
pub use word::{LetterPool, letter_count, normalize};
