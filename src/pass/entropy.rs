//! Entropy estimation and strength classification.
//!
//! The score is an illustration of guess-space size, not Shannon entropy:
//! the first sighting of a lowercase, uppercase, or digit character brings
//! that whole class into play (its full size joins the pool estimate), while
//! each symbol occurrence counts as a single extra candidate.

use super::charset::CharClass;

/// Estimate the bit-entropy of a realized password.
///
/// One pass over the characters, first matching class wins (lowercase, then
/// uppercase, then digit, then symbol). Characters outside all four classes
/// contribute nothing. The result is `floor(len * log2(n))` where `n` is the
/// accumulated pool size.
///
/// Edge cases: an empty password returns the sentinel `1`; `n == 0` (no
/// classifiable characters at all) returns `0` without touching the
/// logarithm, since `log2(0)` is undefined.
pub fn estimate(password: &str) -> u32 {
    let mut n: usize = 0;

    let mut saw_lower = false;
    let mut saw_upper = false;
    let mut saw_digit = false;

    for c in password.chars() {
        if !saw_lower && CharClass::Lowercase.contains(c) {
            n += CharClass::Lowercase.size();
            saw_lower = true;
        } else if !saw_upper && CharClass::Uppercase.contains(c) {
            n += CharClass::Uppercase.size();
            saw_upper = true;
        } else if !saw_digit && CharClass::Digit.contains(c) {
            n += CharClass::Digit.size();
            saw_digit = true;
        } else if CharClass::Symbol.contains(c) {
            n += 1;
        }
    }

    // Sampling forbids repeats, so the character count is also the unique
    // character count.
    let length = password.chars().count();

    let raw = if n == 0 {
        0
    } else {
        (length as f64 * (n as f64).log2()).floor() as u32
    };

    if raw == 0 && password.is_empty() { 1 } else { raw }
}

/// Discrete strength tier for an entropy score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Strength {
    VeryWeak,
    Weak,
    Reasonable,
    Strong,
    VeryStrong,
}

impl Strength {
    /// Classify an entropy score. Thresholds are checked top down; the first
    /// match wins.
    pub fn classify(entropy: u32) -> Self {
        match entropy {
            128.. => Self::VeryStrong,
            60..=127 => Self::Strong,
            36..=59 => Self::Reasonable,
            28..=35 => Self::Weak,
            _ => Self::VeryWeak,
        }
    }

    /// Display label for terminal output.
    pub fn label(self) -> &'static str {
        match self {
            Self::VeryWeak => "Very Weak",
            Self::Weak => "Weak",
            Self::Reasonable => "Reasonable",
            Self::Strong => "Strong",
            Self::VeryStrong => "Very Strong",
        }
    }
}
