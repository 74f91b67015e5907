//! Error types for password generation.

use thiserror::Error;

/// Errors surfaced by the generation pipeline.
///
/// `InvalidLength` and `InvalidCount` are request-validation failures and are
/// raised before any sampling begins. `AlphabetExhausted` guards the draw loop
/// itself; with validation in place it is unreachable and indicates a bug.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum Error {
    #[error("invalid length {requested}: must be between 1 and {max}")]
    InvalidLength { requested: usize, max: usize },

    #[error("invalid count {0}: must be at least 1")]
    InvalidCount(usize),

    #[error("alphabet exhausted: {requested} draws requested, {remaining} characters remaining")]
    AlphabetExhausted { requested: usize, remaining: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
