//! Character classes and alphabet building for password sampling.
//!
//! The class sets deliberately exclude glyphs that are easy to misread when a
//! password is transcribed by hand: `l`/`o`, `I`/`O`, `0`, and `|`.

const LOWERCASE: &str = "abcdefghijkmnpqrstuvwxyz";
const UPPERCASE: &str = "ABCDEFGHJKLMNPQRSTUVWXYZ";
const DIGITS: &str = "123456789";
const SYMBOLS: &str = "!@#$%^&*()_+-=[]{}'";

/// One of the four character classes a password character can belong to.
///
/// Each class has a fixed canonical member set; the class size weights the
/// entropy estimate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    Lowercase,
    Uppercase,
    Digit,
    Symbol,
}

impl CharClass {
    /// Canonical member set of this class.
    pub const fn members(self) -> &'static str {
        match self {
            Self::Lowercase => LOWERCASE,
            Self::Uppercase => UPPERCASE,
            Self::Digit => DIGITS,
            Self::Symbol => SYMBOLS,
        }
    }

    /// Number of characters in this class (24, 24, 9, 19).
    pub fn size(self) -> usize {
        self.members().len()
    }

    pub fn contains(self, c: char) -> bool {
        self.members().contains(c)
    }
}

/// The pool of candidate characters for one password's sampling.
///
/// Owned by a single `sample` call: characters are removed as they are drawn,
/// so the pool shrinks monotonically and never grows. Classes are disjoint,
/// so the pool holds no duplicates by construction.
#[derive(Debug, Clone)]
pub struct Alphabet {
    chars: Vec<char>,
}

impl Alphabet {
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Remove and return the character at `index`.
    ///
    /// Order of the remaining pool is not preserved; uniform index selection
    /// does not depend on it.
    pub(crate) fn take(&mut self, index: usize) -> char {
        self.chars.swap_remove(index)
    }
}

/// Build a fresh alphabet: lowercase + uppercase + digits, plus symbols when
/// requested. Size 57 without symbols, 76 with.
pub fn build(with_symbols: bool) -> Alphabet {
    let mut chars: Vec<char> = Vec::with_capacity(size(with_symbols));

    chars.extend(LOWERCASE.chars());
    chars.extend(UPPERCASE.chars());
    chars.extend(DIGITS.chars());

    if with_symbols {
        chars.extend(SYMBOLS.chars());
    }

    Alphabet { chars }
}

/// The alphabet size for a symbol setting, without building the pool.
/// Used for request validation and for display.
pub fn size(with_symbols: bool) -> usize {
    let mut size = LOWERCASE.len() + UPPERCASE.len() + DIGITS.len();
    if with_symbols {
        size += SYMBOLS.len();
    }
    size
}
