//! Word list loading utilities
//!
//! Provides functions to load word lists from files or use embedded constants.

use super::WordListError;
use crate::core::normalize;
use std::fs;
use std::path::Path;
use tracing::debug;

/// Split newline-delimited text into normalized words
///
/// Surrounding whitespace (including a `\r` from CRLF files) is trimmed and
/// blank lines are skipped.
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::parse_words;
///
/// let words = parse_words("Roadworks\r\nabsolute\n\n");
/// assert_eq!(words, vec!["roadworks", "absolute"]);
/// ```
#[must_use]
pub fn parse_words(content: &str) -> Vec<String> {
    content
        .lines()
        .map(normalize)
        .filter(|word| !word.is_empty())
        .collect()
}

/// Load words from a file
///
/// # Errors
///
/// Returns [`WordListError::Io`] if the file cannot be read and
/// [`WordListError::Empty`] if it holds no words.
///
/// # Examples
/// ```no_run
/// use word_scramble::wordlists::loader::load_from_file;
///
/// let words = load_from_file("data/start.txt").unwrap();
/// println!("Loaded {} words", words.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Vec<String>, WordListError> {
    let path = path.as_ref();
    let content = fs::read_to_string(path).map_err(|source| WordListError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    let words = parse_words(&content);
    if words.is_empty() {
        return Err(WordListError::Empty(path.display().to_string()));
    }

    debug!(path = %path.display(), count = words.len(), "Loaded word list");
    Ok(words)
}

/// Convert embedded string slice to owned, normalized words
///
/// # Examples
/// ```
/// use word_scramble::wordlists::loader::words_from_slice;
/// use word_scramble::wordlists::START_WORDS;
///
/// let words = words_from_slice(START_WORDS);
/// assert_eq!(words.len(), START_WORDS.len());
/// ```
#[must_use]
pub fn words_from_slice(slice: &[&str]) -> Vec<String> {
    slice
        .iter()
        .map(|word| normalize(word))
        .filter(|word| !word.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn temp_file(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "word_scramble_{}_{name}.txt",
            std::process::id()
        ));
        let mut file = fs::File::create(&path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        path
    }

    #[test]
    fn parse_words_skips_blank_lines() {
        let words = parse_words("road\n\n  \nworks\n");
        assert_eq!(words, vec!["road", "works"]);
    }

    #[test]
    fn parse_words_discards_trailing_entry() {
        let words = parse_words("alpha\nbeta\n");
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn parse_words_normalizes_case_and_crlf() {
        let words = parse_words("ELEPHANT\r\n  Kangaroo  \r\n");
        assert_eq!(words, vec!["elephant", "kangaroo"]);
    }

    #[test]
    fn parse_words_empty_input() {
        assert!(parse_words("").is_empty());
        assert!(parse_words("\n\n").is_empty());
    }

    #[test]
    fn words_from_slice_converts_words() {
        let words = words_from_slice(&["roadworks", "Absolute", ""]);
        assert_eq!(words, vec!["roadworks", "absolute"]);
    }

    #[test]
    fn load_from_file_reads_words() {
        let path = temp_file("load_ok", "roadworks\nabsolute\n");
        let words = load_from_file(&path).unwrap();
        assert_eq!(words, vec!["roadworks", "absolute"]);
        fs::remove_file(path).ok();
    }

    #[test]
    fn load_from_file_missing() {
        let result = load_from_file("/definitely/not/here/start.txt");
        assert!(matches!(result, Err(WordListError::Io { .. })));
    }

    #[test]
    fn load_from_file_empty() {
        let path = temp_file("load_empty", "\n   \n");
        let result = load_from_file(&path);
        assert!(matches!(result, Err(WordListError::Empty(_))));
        fs::remove_file(path).ok();
    }
}
