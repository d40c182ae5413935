//! Verification token generation
//!
//! Tokens are drawn uniformly from `[A-Za-z0-9]` using the OS-provided CSPRNG.

use std::num::NonZeroUsize;

use mv_shared::config::verification::DEFAULT_TOKEN_LENGTH;
use rand::{distributions::Alphanumeric, rngs::OsRng, Rng};

use crate::errors::{DomainError, DomainResult};

/// Generate `length` characters, each drawn independently from the 62-symbol
/// alphanumeric alphabet
pub fn generate_alphanumeric(length: NonZeroUsize) -> String {
    OsRng
        .sample_iter(&Alphanumeric)
        .take(length.get())
        .map(char::from)
        .collect()
}

/// Source of verification tokens
pub trait TokenGenerator: Send + Sync {
    fn generate(&self) -> String;
}

/// Fixed-length alphanumeric token generator
#[derive(Debug, Clone, Copy)]
pub struct AlphanumericTokenGenerator {
    length: NonZeroUsize,
}

impl AlphanumericTokenGenerator {
    /// Create a generator, rejecting a zero length
    pub fn new(length: usize) -> DomainResult<Self> {
        NonZeroUsize::new(length)
            .map(|length| Self { length })
            .ok_or_else(|| DomainError::validation("token length must be a positive integer"))
    }

    pub fn length(&self) -> usize {
        self.length.get()
    }
}

impl Default for AlphanumericTokenGenerator {
    fn default() -> Self {
        Self {
            length: NonZeroUsize::new(DEFAULT_TOKEN_LENGTH).unwrap_or(NonZeroUsize::MIN),
        }
    }
}

impl TokenGenerator for AlphanumericTokenGenerator {
    fn generate(&self) -> String {
        generate_alphanumeric(self.length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generates_requested_length() {
        for length in [1, 6, 32] {
            let token = generate_alphanumeric(NonZeroUsize::new(length).unwrap());
            assert_eq!(token.len(), length);
        }
    }

    #[test]
    fn test_only_alphanumeric_characters() {
        for _ in 0..200 {
            let token = AlphanumericTokenGenerator::default().generate();
            assert_eq!(token.len(), 6);
            assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_zero_length_rejected() {
        let err = AlphanumericTokenGenerator::new(0).unwrap_err();
        assert!(matches!(err, DomainError::Validation { .. }));
        assert_eq!(AlphanumericTokenGenerator::new(8).unwrap().length(), 8);
    }

    #[test]
    fn test_tokens_are_not_repeated() {
        let generator = AlphanumericTokenGenerator::new(12).unwrap();
        let tokens: HashSet<String> = (0..1000).map(|_| generator.generate()).collect();
        assert_eq!(tokens.len(), 1000);
    }

    #[test]
    fn test_alphabet_is_covered() {
        // 62 symbols over 20k draws: every class shows up
        let sample = generate_alphanumeric(NonZeroUsize::new(20_000).unwrap());
        assert!(sample.chars().any(|c| c.is_ascii_uppercase()));
        assert!(sample.chars().any(|c| c.is_ascii_lowercase()));
        assert!(sample.chars().any(|c| c.is_ascii_digit()));
        let distinct: HashSet<char> = sample.chars().collect();
        assert_eq!(distinct.len(), 62);
    }
}
