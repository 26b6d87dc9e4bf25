//! Root word solving command
//!
//! Lists every word that can be made from a root word.

use super::CommandError;
use crate::core::{GameRules, normalize};
use crate::dictionary::WordListDictionary;
use crate::solver::possible_words;

/// Configuration for solving a root word
pub struct SolveConfig {
    pub root_word: String,
    /// Maximum number of words to keep; `None` keeps all
    pub limit: Option<usize>,
}

impl SolveConfig {
    #[must_use]
    pub const fn new(root_word: String) -> Self {
        Self {
            root_word,
            limit: None,
        }
    }

    #[must_use]
    pub const fn with_limit(mut self, limit: Option<usize>) -> Self {
        self.limit = limit;
        self
    }
}

/// Result of solving a root word
pub struct SolveResult {
    pub root_word: String,
    /// Words found, longest first, truncated to the configured limit
    pub words: Vec<String>,
    /// Number of words found before truncation
    pub total: usize,
}

/// Find every playable word for a root word
///
/// # Errors
///
/// Returns [`CommandError::EmptyRootWord`] if the root word is blank.
pub fn solve_root(
    config: SolveConfig,
    dictionary: &WordListDictionary,
    rules: &GameRules,
) -> Result<SolveResult, CommandError> {
    let root_word = normalize(&config.root_word);
    if root_word.is_empty() {
        return Err(CommandError::EmptyRootWord);
    }

    let found = possible_words(&root_word, dictionary, rules);
    let total = found.len();
    let words = found
        .into_iter()
        .take(config.limit.unwrap_or(usize::MAX))
        .map(str::to_string)
        .collect();

    Ok(SolveResult {
        root_word,
        words,
        total,
    })
}
