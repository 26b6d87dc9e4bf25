//! End-to-end rounds against the embedded word lists, with the root word
//! pinned to "roadworks".

use word_scramble::core::{Rejection, SubmissionResult};
use word_scramble::dictionary::WordListDictionary;
use word_scramble::game::GameSession;
use word_scramble::solver::possible_words;
use word_scramble::wordlists::WordSource;

fn accepted(word: &str) -> Option<SubmissionResult> {
    Some(SubmissionResult::Accepted(word.to_string()))
}

fn rejected(reason: Rejection) -> Option<SubmissionResult> {
    Some(SubmissionResult::Rejected(reason))
}

#[test]
fn roadworks_round() {
    let source = WordSource::embedded().unwrap();
    let dictionary = WordListDictionary::embedded().unwrap();
    let mut session = GameSession::seeded(&source, &dictionary, 2024).with_root_word("roadworks");

    assert_eq!(session.submit("road"), accepted("road"));
    assert_eq!(session.accepted_words(), &["road"]);

    assert_eq!(session.submit("roadworks"), rejected(Rejection::EqualsRoot));
    assert_eq!(session.submit("a"), rejected(Rejection::TooShort));
    assert_eq!(session.submit("road"), rejected(Rejection::AlreadyUsed));
    assert_eq!(session.submit("sword"), accepted("sword"));
    assert_eq!(session.submit("zzqx"), rejected(Rejection::NotSubsettable));
    assert_eq!(session.submit("dwork"), rejected(Rejection::NotARealWord));

    assert_eq!(session.accepted_words(), &["sword", "road"]);
    assert_eq!(session.score(), 2);
}

#[test]
fn every_solved_word_is_accepted_in_order() {
    let source = WordSource::embedded().unwrap();
    let dictionary = WordListDictionary::embedded().unwrap();
    let mut session = GameSession::seeded(&source, &dictionary, 1).with_root_word("roadworks");

    let words = possible_words("roadworks", &dictionary, session.rules());
    assert!(words.len() > 10);

    for word in &words {
        assert_eq!(session.submit(word), accepted(word), "'{word}' should be playable");
    }
    assert_eq!(session.score(), words.len());

    // A full round leaves nothing new to find
    for word in &words {
        assert_eq!(session.submit(word), rejected(Rejection::AlreadyUsed));
    }
}

#[test]
fn new_round_draws_from_start_words() {
    let source = WordSource::embedded().unwrap();
    let dictionary = WordListDictionary::embedded().unwrap();
    let mut session = GameSession::seeded(&source, &dictionary, 11).with_root_word("roadworks");
    session.submit("road");

    for _ in 0..20 {
        session.start_round();
        assert!(session.accepted_words().is_empty());
        assert!(source.contains(session.root_word()));
    }
}
