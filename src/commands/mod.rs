//! Command implementations

pub mod check;
mod error;
pub mod simple;
pub mod solve;

pub use check::{CheckResult, check_word};
pub use error::CommandError;
pub use simple::{run_simple, run_simple_with};
pub use solve::{SolveConfig, SolveResult, solve_root};
