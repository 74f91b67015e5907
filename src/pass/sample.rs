//! Password sampling: draws from a shrinking alphabet without replacement.

use rand::Rng;

use super::charset::Alphabet;
use crate::error::{Error, Result};

/// Draw `length` characters uniformly at random from `alphabet`, without
/// replacement: each drawn character is removed from the pool, so no
/// character value can recur within one password. This caps `length` at the
/// alphabet size (57 or 76).
///
/// Returns `AlphabetExhausted` when the pool is too small for the request.
/// The check happens before any draw; a partially built password is never
/// returned.
pub fn sample(alphabet: &mut Alphabet, length: usize, rng: &mut impl Rng) -> Result<String> {
    if length > alphabet.len() {
        return Err(Error::AlphabetExhausted {
            requested: length,
            remaining: alphabet.len(),
        });
    }

    let mut result = String::with_capacity(length);
    for _ in 0..length {
        let index = rng.gen_range(0..alphabet.len());
        result.push(alphabet.take(index));
    }

    Ok(result)
}

#[cfg(test)]
mod tests {
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    use super::*;
    use crate::pass::charset;

    #[test]
    fn sampled_length_matches_request() {
        let mut rng = StdRng::seed_from_u64(7);
        let mut pool = charset::build(false);
        let password = sample(&mut pool, 10, &mut rng).unwrap();
        assert_eq!(password.chars().count(), 10);
        assert_eq!(pool.len(), 47);
    }

    #[test]
    fn no_character_repeats() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut pool = charset::build(true);
        let password = sample(&mut pool, 76, &mut rng).unwrap();

        let mut seen = std::collections::HashSet::new();
        for c in password.chars() {
            assert!(seen.insert(c), "character {c:?} drawn twice");
        }
    }

    #[test]
    fn zero_length_draws_nothing() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut pool = charset::build(false);
        assert_eq!(sample(&mut pool, 0, &mut rng).unwrap(), "");
        assert_eq!(pool.len(), 57);
    }

    #[test]
    fn over_length_is_rejected_up_front() {
        let mut rng = StdRng::seed_from_u64(0);
        let mut pool = charset::build(false);
        let err = sample(&mut pool, 58, &mut rng).unwrap_err();
        assert_eq!(
            err,
            Error::AlphabetExhausted {
                requested: 58,
                remaining: 57
            }
        );
        // Nothing was consumed.
        assert_eq!(pool.len(), 57);
    }

    #[test]
    fn full_pool_drain_is_a_permutation() {
        let mut rng = StdRng::seed_from_u64(123);
        let mut pool = charset::build(false);
        let password = sample(&mut pool, 57, &mut rng).unwrap();
        assert!(pool.is_empty());

        use crate::pass::charset::CharClass;

        let mut drawn: Vec<char> = password.chars().collect();
        let mut expected: Vec<char> = [CharClass::Lowercase, CharClass::Uppercase, CharClass::Digit]
            .iter()
            .flat_map(|class| class.members().chars())
            .collect();
        drawn.sort_unstable();
        expected.sort_unstable();
        assert_eq!(drawn, expected);
    }

    #[test]
    fn seeded_rng_is_reproducible() {
        let a = sample(&mut charset::build(true), 12, &mut StdRng::seed_from_u64(9)).unwrap();
        let b = sample(&mut charset::build(true), 12, &mut StdRng::seed_from_u64(9)).unwrap();
        assert_eq!(a, b);
    }
}
