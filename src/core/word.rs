//! Word normalization and letter accounting
//!
//! A [`LetterPool`] is the multiset of letters in a word. Spelling a candidate
//! from a pool consumes one matching letter per character, so a word that
//! needs two `e`s cannot be spelled from a pool holding only one.

use rustc_hash::FxHashMap;

/// Normalize raw player input: trim surrounding whitespace and lowercase
///
/// # Examples
/// ```
/// use word_scramble::core::normalize;
///
/// assert_eq!(normalize("  Road\n"), "road");
/// assert_eq!(normalize("   "), "");
/// ```
#[must_use]
pub fn normalize(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Number of letters in a word, counted as characters rather than bytes
#[inline]
#[must_use]
pub fn letter_count(word: &str) -> usize {
    word.chars().count()
}

/// Multiset of letters available for spelling
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LetterPool {
    counts: FxHashMap<char, usize>,
    total: usize,
}

impl LetterPool {
    /// Build a pool holding every letter of `word`
    ///
    /// # Examples
    /// ```
    /// use word_scramble::core::LetterPool;
    ///
    /// let pool = LetterPool::new("roadworks");
    /// assert_eq!(pool.count('o'), 2);
    /// assert_eq!(pool.count('z'), 0);
    /// assert!(pool.can_spell("sword"));
    /// assert!(!pool.can_spell("doors"));
    /// ```
    #[must_use]
    pub fn new(word: &str) -> Self {
        word.chars().collect()
    }

    /// How many copies of `letter` remain
    #[inline]
    #[must_use]
    pub fn count(&self, letter: char) -> usize {
        self.counts.get(&letter).copied().unwrap_or(0)
    }

    /// Total letters remaining
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.total
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.total == 0
    }

    /// Remove one copy of `letter`, returning `false` if none is left
    pub fn take(&mut self, letter: char) -> bool {
        match self.counts.get_mut(&letter) {
            Some(count) if *count > 0 => {
                *count -= 1;
                self.total -= 1;
                true
            }
            _ => false,
        }
    }

    /// Check whether `word` can be spelled without reusing any letter
    ///
    /// Works on a scratch copy; the pool itself is untouched.
    #[must_use]
    pub fn can_spell(&self, word: &str) -> bool {
        if letter_count(word) > self.total {
            return false;
        }

        let mut remaining = self.clone();
        word.chars().all(|letter| remaining.take(letter))
    }
}

impl FromIterator<char> for LetterPool {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut pool = Self::default();
        for letter in iter {
            *pool.counts.entry(letter).or_insert(0) += 1;
            pool.total += 1;
        }
        pool
    }
}
