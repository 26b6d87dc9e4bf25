//! Game session: round state and the submission pipeline

use crate::core::{GameRules, LetterPool, Rejection, SubmissionResult, letter_count, normalize};
use crate::dictionary::Dictionary;
use crate::wordlists::WordSource;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, info, instrument};

/// One player's game
///
/// A session always has an active round: construction draws the first root
/// word. Accepted words are kept most-recent-first and every one of them can
/// be spelled from the root word's letters.
pub struct GameSession<'a, D: Dictionary, R: Rng = StdRng> {
    source: &'a WordSource,
    dictionary: D,
    rng: R,
    rules: GameRules,
    root_word: String,
    root_letters: LetterPool,
    accepted: Vec<String>,
    round: usize,
}

impl<'a, D: Dictionary> GameSession<'a, D> {
    /// Create a session seeded from the operating system and start round one
    pub fn new(source: &'a WordSource, dictionary: D) -> Self {
        Self::with_rng(source, dictionary, StdRng::from_os_rng())
    }

    /// Create a session with a fixed seed, for reproducible rounds
    pub fn seeded(source: &'a WordSource, dictionary: D, seed: u64) -> Self {
        Self::with_rng(source, dictionary, StdRng::seed_from_u64(seed))
    }
}

impl<'a, D: Dictionary, R: Rng> GameSession<'a, D, R> {
    /// Create a session drawing root words with `rng` and start round one
    pub fn with_rng(source: &'a WordSource, dictionary: D, rng: R) -> Self {
        let mut session = Self {
            source,
            dictionary,
            rng,
            rules: GameRules::default(),
            root_word: String::new(),
            root_letters: LetterPool::default(),
            accepted: Vec::new(),
            round: 0,
        };
        session.start_round();
        session
    }

    /// Replace the current round with one built around `root_word`
    ///
    /// The word does not have to come from the source; this is how a caller
    /// pins a round for a check or a test.
    #[must_use]
    pub fn with_root_word(mut self, root_word: &str) -> Self {
        self.set_root_word(normalize(root_word));
        self
    }

    #[must_use]
    pub fn with_rules(mut self, rules: GameRules) -> Self {
        self.rules = rules;
        self
    }

    /// Begin a new round with a random root word and no accepted words
    pub fn start_round(&mut self) {
        let root_word = self.source.pick_random(&mut self.rng).to_string();
        self.set_root_word(root_word);
        info!(round = self.round, root_word = %self.root_word, "Round started");
    }

    fn set_root_word(&mut self, root_word: String) {
        self.root_letters = LetterPool::new(&root_word);
        self.root_word = root_word;
        self.accepted.clear();
        self.round += 1;
    }

    /// Submit a raw guess
    ///
    /// Input is trimmed and lowercased first. Blank input is ignored and
    /// yields `None`. Anything else runs through [`Self::judge`]; an accepted
    /// word is placed at the front of [`Self::accepted_words`].
    #[instrument(skip(self), fields(root_word = %self.root_word))]
    pub fn submit(&mut self, raw: &str) -> Option<SubmissionResult> {
        let word = normalize(raw);
        if word.is_empty() {
            return None;
        }

        let result = match self.judge(&word) {
            Ok(()) => {
                self.accepted.insert(0, word.clone());
                SubmissionResult::Accepted(word)
            }
            Err(reason) => SubmissionResult::Rejected(reason),
        };

        debug!(%result, score = self.score(), "Submission judged");
        Some(result)
    }

    /// Run the checks against an already-normalized word without changing state
    ///
    /// Checks run cheapest first and stop at the first failure, so a word
    /// that cannot be spelled from the root is never sent to the dictionary.
    ///
    /// # Errors
    ///
    /// Returns the [`Rejection`] of the first failing check.
    pub fn judge(&self, word: &str) -> Result<(), Rejection> {
        if !self.is_long_enough(word) {
            return Err(Rejection::TooShort);
        }
        if !self.is_not_root_word(word) {
            return Err(Rejection::EqualsRoot);
        }
        if !self.is_original(word) {
            return Err(Rejection::AlreadyUsed);
        }
        if !self.is_possible(word) {
            return Err(Rejection::NotSubsettable);
        }
        if !self.is_real(word) {
            return Err(Rejection::NotARealWord);
        }
        Ok(())
    }

    fn is_long_enough(&self, word: &str) -> bool {
        letter_count(word) >= self.rules.min_length
    }

    fn is_not_root_word(&self, word: &str) -> bool {
        word != self.root_word
    }

    fn is_original(&self, word: &str) -> bool {
        !self.accepted.iter().any(|used| used == word)
    }

    fn is_possible(&self, word: &str) -> bool {
        self.root_letters.can_spell(word)
    }

    fn is_real(&self, word: &str) -> bool {
        self.dictionary.is_known_word(word, &self.rules.language)
    }

    #[must_use]
    pub fn root_word(&self) -> &str {
        &self.root_word
    }

    /// Accepted words, most recent first
    #[must_use]
    pub fn accepted_words(&self) -> &[String] {
        &self.accepted
    }

    /// One point per accepted word
    #[must_use]
    pub fn score(&self) -> usize {
        self.accepted.len()
    }

    /// 1-based number of the current round
    #[must_use]
    pub const fn round(&self) -> usize {
        self.round
    }

    #[must_use]
    pub const fn rules(&self) -> &GameRules {
        &self.rules
    }
}
