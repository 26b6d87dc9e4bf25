//! Game session management
//!
//! A [`GameSession`] owns the root word and accepted words for the current
//! round and judges each submission.

mod session;

pub use session::GameSession;
