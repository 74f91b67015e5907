//! Generation service: the entry point the CLI layer drives.

use rand::Rng;

use super::{charset, entropy, sample};
use crate::error::{Error, Result};

/// One generation run: `count` passwords of `length` characters each, with or
/// without symbols. Immutable once built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GenerationRequest {
    pub length: usize,
    pub count: usize,
    pub with_symbols: bool,
}

impl GenerationRequest {
    /// Reject impossible requests before any sampling happens.
    ///
    /// Length is capped by the alphabet size because sampling never repeats a
    /// character within one password.
    pub fn validate(&self) -> Result<()> {
        if self.count == 0 {
            return Err(Error::InvalidCount(self.count));
        }

        let max = charset::size(self.with_symbols);
        if self.length == 0 || self.length > max {
            return Err(Error::InvalidLength {
                requested: self.length,
                max,
            });
        }

        Ok(())
    }
}

/// A generated password with its entropy score.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Password {
    pub value: String,
    pub entropy: u32,
}

/// Generate `request.count` passwords in draw order.
///
/// Each iteration builds its own fresh alphabet, so earlier draws never
/// shrink the pool a later password samples from. The whole run is rejected
/// up front when the request is invalid; no partial output.
pub fn generate(request: &GenerationRequest, rng: &mut impl Rng) -> Result<Vec<Password>> {
    request.validate()?;

    log::debug!(
        "generating {} password(s), length {}, symbols: {}",
        request.count,
        request.length,
        request.with_symbols
    );

    let mut passwords = Vec::with_capacity(request.count);
    for _ in 0..request.count {
        let mut pool = charset::build(request.with_symbols);
        let value = sample::sample(&mut pool, request.length, rng)?;
        let entropy = entropy::estimate(&value);
        passwords.push(Password { value, entropy });
    }

    Ok(passwords)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;

    fn request(length: usize, count: usize, with_symbols: bool) -> GenerationRequest {
        GenerationRequest {
            length,
            count,
            with_symbols,
        }
    }

    #[test]
    fn returns_count_passwords_of_requested_length() {
        let mut rng = StdRng::seed_from_u64(1);
        let passwords = generate(&request(10, 3, false), &mut rng).unwrap();

        assert_eq!(passwords.len(), 3);
        for p in &passwords {
            assert_eq!(p.value.chars().count(), 10);
        }
    }

    #[test]
    fn each_password_draws_from_a_fresh_pool() {
        // 57 draws consume the whole symbol-free alphabet; a second password
        // of the same length is only possible if the pool was rebuilt.
        let mut rng = StdRng::seed_from_u64(2);
        let passwords = generate(&request(57, 2, false), &mut rng).unwrap();
        assert_eq!(passwords.len(), 2);
        assert_eq!(passwords[0].value.chars().count(), 57);
        assert_eq!(passwords[1].value.chars().count(), 57);
    }

    #[test]
    fn zero_count_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate(&request(10, 0, false), &mut rng).unwrap_err();
        assert_eq!(err, Error::InvalidCount(0));
    }

    #[test]
    fn zero_length_is_rejected() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate(&request(0, 1, false), &mut rng).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLength {
                requested: 0,
                max: 57
            }
        );
    }

    #[test]
    fn over_long_request_is_rejected_before_sampling() {
        let mut rng = StdRng::seed_from_u64(0);
        let err = generate(&request(100, 1, false), &mut rng).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLength {
                requested: 100,
                max: 57
            }
        );
    }

    #[test]
    fn symbol_setting_raises_the_length_cap() {
        let mut rng = StdRng::seed_from_u64(3);
        assert!(generate(&request(76, 1, true), &mut rng).is_ok());

        let err = generate(&request(76, 1, false), &mut rng).unwrap_err();
        assert_eq!(
            err,
            Error::InvalidLength {
                requested: 76,
                max: 57
            }
        );
    }

    #[test]
    fn entropy_matches_estimator() {
        let mut rng = StdRng::seed_from_u64(4);
        let passwords = generate(&request(12, 5, true), &mut rng).unwrap();
        for p in passwords {
            assert_eq!(p.entropy, crate::pass::entropy::estimate(&p.value));
        }
    }
}
