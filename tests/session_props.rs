//! Property tests for the submission pipeline.
//!
//! The oracle here knows every string, so acceptance depends only on the
//! length, root, duplicate and letter checks.

use proptest::prelude::*;
use std::collections::HashSet;
use word_scramble::core::{LetterPool, Rejection, SubmissionResult};
use word_scramble::dictionary::Dictionary;
use word_scramble::game::GameSession;
use word_scramble::wordlists::{START_WORDS, WordSource};

struct KnowsEverything;

impl Dictionary for KnowsEverything {
    fn is_known_word(&self, _word: &str, _language: &str) -> bool {
        true
    }
}

/// Random submissions: plain letters, mixed case with spaces, and common letters
fn submission() -> impl Strategy<Value = String> {
    prop_oneof![
        "[a-z]{0,10}",
        "[A-Za-z ]{0,12}",
        "[aeiorstdnlw]{2,9}",
    ]
}

fn root_word() -> impl Strategy<Value = &'static str> {
    prop::sample::select(START_WORDS)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(128))]

    /// Property: accepted words are long enough, differ from the root,
    /// are unique and can be spelled from the root's letters
    #[test]
    fn prop_accepted_words_are_valid(
        root in root_word(),
        submissions in prop::collection::vec(submission(), 1..40),
    ) {
        let source = WordSource::from_words([root]).unwrap();
        let mut session = GameSession::seeded(&source, KnowsEverything, 0);
        let pool = LetterPool::new(root);

        for raw in &submissions {
            session.submit(raw);
        }

        let mut seen = HashSet::new();
        for word in session.accepted_words() {
            prop_assert!(word.chars().count() >= 3);
            prop_assert_ne!(word.as_str(), root);
            prop_assert!(pool.can_spell(word), "'{}' not spellable from '{}'", word, root);
            prop_assert!(seen.insert(word.clone()), "'{}' accepted twice", word);
        }
        prop_assert_eq!(session.score(), session.accepted_words().len());
    }

    /// Property: a rejected word is rejected again for the same reason and
    /// never changes the session
    #[test]
    fn prop_rejections_are_stable(
        root in root_word(),
        submissions in prop::collection::vec(submission(), 1..30),
    ) {
        let source = WordSource::from_words([root]).unwrap();
        let mut session = GameSession::seeded(&source, KnowsEverything, 0);

        for raw in &submissions {
            let before = session.accepted_words().to_vec();
            match session.submit(raw) {
                None => prop_assert_eq!(session.accepted_words(), before.as_slice()),
                Some(SubmissionResult::Accepted(word)) => {
                    prop_assert_eq!(session.accepted_words().first(), Some(&word));
                    prop_assert_eq!(session.score(), before.len() + 1);
                    prop_assert_eq!(
                        session.submit(raw),
                        Some(SubmissionResult::Rejected(Rejection::AlreadyUsed))
                    );
                }
                Some(SubmissionResult::Rejected(reason)) => {
                    prop_assert_eq!(session.accepted_words(), before.as_slice());
                    prop_assert_eq!(
                        session.submit(raw),
                        Some(SubmissionResult::Rejected(reason))
                    );
                    prop_assert_eq!(session.accepted_words(), before.as_slice());
                }
            }
            prop_assert_eq!(session.root_word(), root);
        }
    }

    /// Property: a new round is empty and its root comes from the word list
    #[test]
    fn prop_start_round_resets(
        seed in any::<u64>(),
        submissions in prop::collection::vec("[a-z]{3,8}", 0..20),
    ) {
        let source = WordSource::embedded().unwrap();
        let mut session = GameSession::seeded(&source, KnowsEverything, seed);
        for raw in &submissions {
            session.submit(raw);
        }

        session.start_round();

        prop_assert!(session.accepted_words().is_empty());
        prop_assert!(source.contains(session.root_word()));
    }
}
