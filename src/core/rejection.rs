//! Submission outcomes
//!
//! A rejection is an expected outcome, not a failure of the program, so it is
//! returned as a value and never mutates the session.

use super::GameRules;
use std::fmt;
use thiserror::Error;

/// Why a submitted word was turned down
///
/// Variants are listed in the order the checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Error)]
pub enum Rejection {
    #[error("Word is too short")]
    TooShort,
    #[error("Word is similar to start word")]
    EqualsRoot,
    #[error("Word used already")]
    AlreadyUsed,
    #[error("Word not possible")]
    NotSubsettable,
    #[error("Word not recognized")]
    NotARealWord,
}

impl Rejection {
    /// Every rejection reason, in check order
    pub const ALL: [Self; 5] = [
        Self::TooShort,
        Self::EqualsRoot,
        Self::AlreadyUsed,
        Self::NotSubsettable,
        Self::NotARealWord,
    ];

    /// Short headline shown to the player
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TooShort => "Word is too short",
            Self::EqualsRoot => "Word is similar to start word",
            Self::AlreadyUsed => "Word used already",
            Self::NotSubsettable => "Word not possible",
            Self::NotARealWord => "Word not recognized",
        }
    }

    /// Longer explanation shown under the title
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::{GameRules, Rejection};
    ///
    /// let rules = GameRules::default();
    /// assert_eq!(
    ///     Rejection::NotSubsettable.message("roadworks", &rules),
    ///     "You can't spell that word from 'roadworks'!"
    /// );
    /// ```
    #[must_use]
    pub fn message(self, root_word: &str, rules: &GameRules) -> String {
        match self {
            Self::TooShort => format!(
                "Try to use a word at least {} letters long",
                rules.min_length
            ),
            Self::EqualsRoot => "Do not use start word".to_string(),
            Self::AlreadyUsed => "Be more original".to_string(),
            Self::NotSubsettable => format!("You can't spell that word from '{root_word}'!"),
            Self::NotARealWord => "You can't just make them up, you know!".to_string(),
        }
    }
}

/// Result of running a non-empty submission through the checks
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmissionResult {
    /// The word passed every check and now heads the accepted list
    Accepted(String),
    /// The word failed a check; the session is unchanged
    Rejected(Rejection),
}

impl SubmissionResult {
    #[inline]
    #[must_use]
    pub const fn is_accepted(&self) -> bool {
        matches!(self, Self::Accepted(_))
    }

    /// The rejection reason, if any
    #[inline]
    #[must_use]
    pub const fn rejection(&self) -> Option<Rejection> {
        match self {
            Self::Accepted(_) => None,
            Self::Rejected(reason) => Some(*reason),
        }
    }
}

impl fmt::Display for SubmissionResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Accepted(word) => write!(f, "Accepted '{word}'"),
            Self::Rejected(reason) => write!(f, "Rejected: {reason}"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn titles_match_display() {
        for reason in Rejection::ALL {
            assert_eq!(reason.to_string(), reason.title());
        }
    }

    #[test]
    fn titles() {
        assert_eq!(Rejection::TooShort.title(), "Word is too short");
        assert_eq!(
            Rejection::EqualsRoot.title(),
            "Word is similar to start word"
        );
        assert_eq!(Rejection::AlreadyUsed.title(), "Word used already");
        assert_eq!(Rejection::NotSubsettable.title(), "Word not possible");
        assert_eq!(Rejection::NotARealWord.title(), "Word not recognized");
    }

    #[test]
    fn too_short_message_uses_rules() {
        let rules = GameRules::new(4, "en");
        assert_eq!(
            Rejection::TooShort.message("roadworks", &rules),
            "Try to use a word at least 4 letters long"
        );
    }

    #[test]
    fn messages_are_non_empty() {
        let rules = GameRules::default();
        for reason in Rejection::ALL {
            assert!(!reason.message("absolute", &rules).is_empty());
        }
    }

    #[test]
    fn submission_result_accessors() {
        let accepted = SubmissionResult::Accepted("road".to_string());
        assert!(accepted.is_accepted());
        assert_eq!(accepted.rejection(), None);
        assert_eq!(accepted.to_string(), "Accepted 'road'");

        let rejected = SubmissionResult::Rejected(Rejection::AlreadyUsed);
        assert!(!rejected.is_accepted());
        assert_eq!(rejected.rejection(), Some(Rejection::AlreadyUsed));
        assert_eq!(rejected.to_string(), "Rejected: Word used already");
    }
}
