//! Seed token normalization
//!
//! Seed vocabularies are trusted but noisy: mixed case, stray punctuation,
//! digits. Tokens that don't normalize cleanly are dropped, never reported as
//! failures.

use super::{MAX_LENGTH, MIN_LENGTH};
use tracing::trace;

/// Reason a seed token was rejected
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TokenError {
    #[error("Token is empty after trimming")]
    Empty,

    #[error("Token must contain only ASCII letters")]
    NonAlphabetic,

    #[error("Token must be {min}-{max} letters, got {0}", min = MIN_LENGTH, max = MAX_LENGTH)]
    OutOfRange(usize),
}

/// Normalize a single seed token
///
/// Trims surrounding whitespace and lowercases. The result must be purely
/// ASCII alphabetic and 2-10 letters long.
///
/// # Errors
/// Returns `TokenError` if the token is empty, contains anything other than
/// letters, or has an unsupported length.
///
/// # Examples
/// ```
/// use wordle_lists::core::normalize;
///
/// assert_eq!(normalize("  Fox ").unwrap(), "fox");
/// assert!(normalize("dog!").is_err());
/// assert!(normalize("x").is_err());
/// ```
pub fn normalize(raw: &str) -> Result<String, TokenError> {
    let token = raw.trim().to_lowercase();

    if token.is_empty() {
        return Err(TokenError::Empty);
    }

    if !token.chars().all(|c| c.is_ascii_lowercase()) {
        return Err(TokenError::NonAlphabetic);
    }

    // ASCII only from here, so byte length is letter count
    if !(MIN_LENGTH..=MAX_LENGTH).contains(&token.len()) {
        return Err(TokenError::OutOfRange(token.len()));
    }

    Ok(token)
}

/// Clean a raw seed collection
///
/// Returns the tokens that normalize successfully, in input order. Duplicates
/// are kept; deduplication and sorting belong to the caller.
#[must_use]
pub fn clean<S: AsRef<str>>(raw: &[S]) -> Vec<String> {
    raw.iter()
        .filter_map(|token| {
            let token = token.as_ref();
            normalize(token)
                .inspect_err(|reason| trace!(token, %reason, "dropping seed token"))
                .ok()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_lowercases() {
        assert_eq!(normalize("Cat").unwrap(), "cat");
        assert_eq!(normalize("  Fox ").unwrap(), "fox");
        assert_eq!(normalize("\tOWL\n").unwrap(), "owl");
    }

    #[test]
    fn normalize_rejects_empty() {
        assert_eq!(normalize(""), Err(TokenError::Empty));
        assert_eq!(normalize("   "), Err(TokenError::Empty));
    }

    #[test]
    fn normalize_rejects_non_alphabetic() {
        assert_eq!(normalize("dog!"), Err(TokenError::NonAlphabetic));
        assert_eq!(normalize("cr4ne"), Err(TokenError::NonAlphabetic));
        assert_eq!(normalize("ice cream"), Err(TokenError::NonAlphabetic));
        assert_eq!(normalize("café"), Err(TokenError::NonAlphabetic));
    }

    #[test]
    fn normalize_rejects_out_of_range() {
        assert_eq!(normalize("x"), Err(TokenError::OutOfRange(1)));
        assert_eq!(
            normalize("toolongwordover"),
            Err(TokenError::OutOfRange(15))
        );
    }

    #[test]
    fn normalize_accepts_bounds() {
        assert_eq!(normalize("an").unwrap(), "an");
        assert_eq!(normalize("waterfalls").unwrap(), "waterfalls");
    }

    #[test]
    fn clean_drops_malformed_tokens() {
        let raw = ["Cat", "dog!", " owl ", "x"];
        assert_eq!(clean(&raw), vec!["cat", "owl"]);
    }

    #[test]
    fn clean_keeps_duplicates_and_order() {
        let raw = ["an", "AS", "at", "an"];
        assert_eq!(clean(&raw), vec!["an", "as", "at", "an"]);
    }

    #[test]
    fn clean_does_not_filter_by_bucket() {
        // Only the global 2-10 bound applies here
        let raw = ["Cat", "ab", "toolongwordover10chars"];
        assert_eq!(clean(&raw), vec!["cat", "ab"]);
    }

    #[test]
    fn clean_empty_input() {
        let raw: [&str; 0] = [];
        assert!(clean(&raw).is_empty());
    }

    #[test]
    fn token_error_display() {
        assert_eq!(
            TokenError::OutOfRange(1).to_string(),
            "Token must be 2-10 letters, got 1"
        );
        assert_eq!(
            TokenError::NonAlphabetic.to_string(),
            "Token must contain only ASCII letters"
        );
    }

    #[test]
    fn token_error_is_std_error() {
        let err: Box<dyn std::error::Error> = Box::new(TokenError::Empty);
        assert_eq!(err.to_string(), "Token is empty after trimming");
        assert!(err.source().is_none());
    }
}
