//! Short code generation and format checks.
//!
//! Codes are drawn uniformly from the 62-symbol alphanumeric alphabet. The
//! generator makes no uniqueness promise; the store's unique constraint does,
//! and [`crate::application::services::LinkService`] regenerates on collision.

use rand::Rng;
use rand::distr::Alphanumeric;
use regex::Regex;
use std::sync::LazyLock;

/// Shortest code the service will generate or resolve.
pub const MIN_CODE_LENGTH: usize = 6;

/// Longest code the service will generate or resolve.
pub const MAX_CODE_LENGTH: usize = 10;

/// Default generated code length (62^8 possible codes).
pub const DEFAULT_CODE_LENGTH: usize = 8;

static SHORT_CODE_REGEX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[a-zA-Z0-9]{6,10}$").unwrap());

/// Random alphanumeric short code generator with a fixed length.
#[derive(Debug, Clone, Copy)]
pub struct CodeGenerator {
    length: usize,
}

impl CodeGenerator {
    /// Creates a generator producing codes of `length` characters.
    ///
    /// The length is clamped into `MIN_CODE_LENGTH..=MAX_CODE_LENGTH`.
    pub fn new(length: usize) -> Self {
        Self {
            length: length.clamp(MIN_CODE_LENGTH, MAX_CODE_LENGTH),
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Generates a fresh random code.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let code = CodeGenerator::default().generate();
    /// assert_eq!(code.len(), 8);
    /// assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    /// ```
    pub fn generate(&self) -> String {
        rand::rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect()
    }
}

impl Default for CodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

/// Returns true if `code` has the shape of a short code (6-10 alphanumerics).
pub fn is_valid_short_code(code: &str) -> bool {
    SHORT_CODE_REGEX.is_match(code)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generate_code_has_default_length() {
        let code = CodeGenerator::default().generate();
        assert_eq!(code.len(), 8);
    }

    #[test]
    fn test_generate_code_alphanumeric_only() {
        let generator = CodeGenerator::default();
        for _ in 0..200 {
            let code = generator.generate();
            assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
        }
    }

    #[test]
    fn test_generate_code_passes_format_check() {
        for length in MIN_CODE_LENGTH..=MAX_CODE_LENGTH {
            let code = CodeGenerator::new(length).generate();
            assert_eq!(code.len(), length);
            assert!(is_valid_short_code(&code));
        }
    }

    #[test]
    fn test_generator_length_is_clamped() {
        assert_eq!(CodeGenerator::new(2).length(), MIN_CODE_LENGTH);
        assert_eq!(CodeGenerator::new(64).length(), MAX_CODE_LENGTH);
        assert_eq!(CodeGenerator::new(7).length(), 7);
    }

    #[test]
    fn test_generate_code_produces_unique_codes() {
        let generator = CodeGenerator::default();
        let codes: HashSet<String> = (0..1000).map(|_| generator.generate()).collect();

        assert_eq!(codes.len(), 1000);
    }

    #[test]
    fn test_generate_code_uses_mixed_alphabet() {
        let generator = CodeGenerator::new(MAX_CODE_LENGTH);
        let joined: String = (0..200).map(|_| generator.generate()).collect();

        assert!(joined.chars().any(|c| c.is_ascii_lowercase()));
        assert!(joined.chars().any(|c| c.is_ascii_uppercase()));
        assert!(joined.chars().any(|c| c.is_ascii_digit()));
    }

    #[test]
    fn test_is_valid_short_code() {
        assert!(is_valid_short_code("abc123"));
        assert!(is_valid_short_code("AbC123xYz0"));
        assert!(!is_valid_short_code("abc12"));
        assert!(!is_valid_short_code("abcdefghijk"));
        assert!(!is_valid_short_code("abc-123"));
        assert!(!is_valid_short_code("favicon.ico"));
        assert!(!is_valid_short_code(""));
    }
}
