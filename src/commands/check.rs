//! Single-word check command
//!
//! Runs one submission against a chosen root word and reports the verdict.

use super::CommandError;
use crate::core::{GameRules, SubmissionResult, normalize};
use crate::dictionary::Dictionary;
use crate::game::GameSession;
use crate::wordlists::WordSource;

/// Result of checking a word
pub struct CheckResult {
    pub root_word: String,
    pub word: String,
    /// `None` when the word was blank
    pub outcome: Option<SubmissionResult>,
    pub rules: GameRules,
}

impl CheckResult {
    /// Title and message for a rejection, if there was one
    #[must_use]
    pub fn explanation(&self) -> Option<(&'static str, String)> {
        self.outcome
            .as_ref()
            .and_then(SubmissionResult::rejection)
            .map(|reason| (reason.title(), reason.message(&self.root_word, &self.rules)))
    }
}

/// Check `word` as the first submission of a round rooted at `root_word`
///
/// # Errors
///
/// Returns [`CommandError::EmptyRootWord`] if the root word is blank.
pub fn check_word<D: Dictionary>(
    root_word: &str,
    word: &str,
    source: &WordSource,
    dictionary: D,
    rules: &GameRules,
) -> Result<CheckResult, CommandError> {
    let root_word = normalize(root_word);
    if root_word.is_empty() {
        return Err(CommandError::EmptyRootWord);
    }

    let mut session = GameSession::seeded(source, dictionary, 0)
        .with_root_word(&root_word)
        .with_rules(rules.clone());
    let outcome = session.submit(word);

    Ok(CheckResult {
        root_word,
        word: normalize(word),
        outcome,
        rules: rules.clone(),
    })
}
