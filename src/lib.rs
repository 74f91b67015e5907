//! entropass generates random passwords from a constrained character set and
//! scores each with an entropy estimate mapped to a strength tier.
//!
//! The character set excludes visually ambiguous glyphs, and sampling never
//! repeats a character within one password, which caps password length at
//! the alphabet size (57 without symbols, 76 with).
//!
//! Not a cryptographically secure generator: the score is a
//! strength-illustration aid, not a resistance claim.

pub mod error;
pub mod pass;

pub use error::{Error, Result};
