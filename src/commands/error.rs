//! Command errors

use std::io;
use thiserror::Error;

/// Failure running a front-end command
#[derive(Debug, Error)]
pub enum CommandError {
    #[error("root word must not be empty")]
    EmptyRootWord,
    #[error("terminal I/O failed: {0}")]
    Io(#[from] io::Error),
}
