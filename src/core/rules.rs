//! Round configuration

/// Default minimum number of letters a submission must have
pub const DEFAULT_MIN_LENGTH: usize = 3;

/// Default dictionary language tag
pub const DEFAULT_LANGUAGE: &str = "en";

/// Rules applied to every submission in a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameRules {
    /// Shortest accepted word, in letters
    pub min_length: usize,
    /// Language tag passed to the dictionary oracle
    pub language: String,
}

impl GameRules {
    #[must_use]
    pub fn new(min_length: usize, language: impl Into<String>) -> Self {
        Self {
            min_length,
            language: language.into(),
        }
    }
}

impl Default for GameRules {
    fn default() -> Self {
        Self::new(DEFAULT_MIN_LENGTH, DEFAULT_LANGUAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_rules() {
        let rules = GameRules::default();
        assert_eq!(rules.min_length, 3);
        assert_eq!(rules.language, "en");
    }

    #[test]
    fn custom_rules() {
        let rules = GameRules::new(4, "fr");
        assert_eq!(rules.min_length, 4);
        assert_eq!(rules.language, "fr");
    }
}
