//! Word list loading errors

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// A word list that cannot back a game
///
/// Both variants are startup failures: without root words there is no round
/// to play, and without a dictionary no submission can be judged.
#[derive(Debug, Error)]
pub enum WordListError {
    #[error("failed to read word list {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("word list '{0}' contains no words")]
    Empty(String),
}
