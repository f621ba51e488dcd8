//! Password generation from configurable character pools.
//!
//! Sampling uses whatever [`rand::Rng`] the caller injects; the convenience
//! entry points fall back to the thread-local generator. This is a
//! convenience tool for interactive use, not a vetted security-credential
//! generator.

use rand::Rng;
use thiserror::Error;

use crate::types::{CharacterClass, ClassSet, GenerationOptions};

#[derive(Error, Debug, PartialEq, Eq)]
pub enum GeneratorError {
    /// The replacement index points outside the password. A caller bug,
    /// not bad user input.
    #[error("replacement index {index} out of range for password of length {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Builds the sampling pool by concatenating the enabled alphabets in the
/// fixed order uppercase, lowercase, digits, special. An empty selection
/// yields the full four-class pool.
pub fn build_pool(classes: &ClassSet) -> Vec<u8> {
    let classes = classes.effective();
    let mut pool = Vec::new();
    for class in CharacterClass::ALL {
        if classes.contains(class) {
            pool.extend_from_slice(class.alphabet());
        }
    }
    pool
}

/// Generates a password of exactly `options.length` characters, sampled
/// uniformly with replacement from the enabled classes.
pub fn generate_password(options: &GenerationOptions) -> String {
    generate_password_with(&mut rand::rng(), options)
}

/// Like [`generate_password`], with an injected RNG (seedable in tests).
pub fn generate_password_with<R: Rng + ?Sized>(rng: &mut R, options: &GenerationOptions) -> String {
    let pool = build_pool(&options.classes);
    (0..options.length)
        .map(|_| pool[rng.random_range(0..pool.len())] as char)
        .collect()
}

/// Replaces the single character at `index` with a fresh sample from the
/// same pool, leaving every other character untouched.
pub fn replace_at(
    password: &str,
    index: usize,
    classes: &ClassSet,
) -> Result<String, GeneratorError> {
    replace_at_with(&mut rand::rng(), password, index, classes)
}

/// Like [`replace_at`], with an injected RNG.
pub fn replace_at_with<R: Rng + ?Sized>(
    rng: &mut R,
    password: &str,
    index: usize,
    classes: &ClassSet,
) -> Result<String, GeneratorError> {
    let mut chars: Vec<char> = password.chars().collect();
    let len = chars.len();

    let Some(slot) = chars.get_mut(index) else {
        return Err(GeneratorError::IndexOutOfRange { index, len });
    };

    let pool = build_pool(classes);
    *slot = pool[rng.random_range(0..pool.len())] as char;

    Ok(chars.into_iter().collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn full_pool() -> Vec<u8> {
        build_pool(&ClassSet::ALL)
    }

    #[test]
    fn test_build_pool_fixed_order() {
        let classes = ClassSet {
            uppercase: true,
            numbers: true,
            ..ClassSet::NONE
        };
        let pool = build_pool(&classes);
        assert_eq!(pool, b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789");
    }

    #[test]
    fn test_build_pool_empty_selection_uses_all_classes() {
        assert_eq!(build_pool(&ClassSet::NONE), full_pool());
        assert_eq!(full_pool().len(), 94);
    }

    #[test]
    fn test_generate_exact_length() {
        for length in [1, 4, 12, 32, 100] {
            let options = GenerationOptions {
                length,
                classes: ClassSet::ALL,
            };
            assert_eq!(generate_password(&options).chars().count(), length);
        }
    }

    #[test]
    fn test_generate_respects_class_selection() {
        let options = GenerationOptions {
            length: 200,
            classes: ClassSet {
                lowercase: true,
                numbers: true,
                ..ClassSet::NONE
            },
        };
        let password = generate_password(&options);
        assert!(
            password
                .chars()
                .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit())
        );
    }

    #[test]
    fn test_generate_empty_selection_draws_from_full_pool() {
        let options = GenerationOptions {
            length: 64,
            classes: ClassSet::NONE,
        };
        let pool = full_pool();
        let password = generate_password(&options);
        assert_eq!(password.len(), 64);
        assert!(password.bytes().all(|b| pool.contains(&b)));
    }

    #[test]
    fn test_generate_deterministic_with_seeded_rng() {
        let options = GenerationOptions::default();
        let a = generate_password_with(&mut StdRng::seed_from_u64(42), &options);
        let b = generate_password_with(&mut StdRng::seed_from_u64(42), &options);
        assert_eq!(a, b);
        assert_eq!(a.len(), 12);
    }

    #[test]
    fn test_replace_at_changes_only_target_index() {
        let mut rng = StdRng::seed_from_u64(7);
        let original = "abcdefgh";
        let replaced = replace_at_with(&mut rng, original, 3, &ClassSet::ALL).unwrap();

        assert_eq!(replaced.len(), original.len());
        for (i, (old, new)) in original.chars().zip(replaced.chars()).enumerate() {
            if i != 3 {
                assert_eq!(old, new, "index {i} should be untouched");
            }
        }
    }

    #[test]
    fn test_replace_at_samples_from_selected_classes() {
        let mut rng = StdRng::seed_from_u64(7);
        let classes = ClassSet {
            numbers: true,
            ..ClassSet::NONE
        };
        let replaced = replace_at_with(&mut rng, "abc", 1, &classes).unwrap();
        assert!(replaced.chars().nth(1).unwrap().is_ascii_digit());
    }

    #[test]
    fn test_replace_at_out_of_range() {
        let result = replace_at("abc", 3, &ClassSet::ALL);
        assert_eq!(
            result,
            Err(GeneratorError::IndexOutOfRange { index: 3, len: 3 })
        );
    }
}
