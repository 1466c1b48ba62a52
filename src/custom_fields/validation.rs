//! Fragment validation for custom-field declarations.
//!
//! Validation is deliberately coarse. It does not parse GraphQL; it only
//! rejects text that is empty, that looks like a write operation, or whose
//! braces do not balance. Braces inside string literals are counted like any
//! other brace.

use thiserror::Error;

/// Keywords that must never appear in a read-side selection fragment.
const FORBIDDEN_KEYWORDS: [&str; 2] = ["mutation", "subscription"];

/// Reason a fragment was rejected by [`validate_fragment`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FragmentError {
    /// The fragment is empty or whitespace only.
    #[error("Fragment is empty.")]
    Empty,

    /// The fragment contains a write-operation keyword.
    #[error("Fragment contains the forbidden keyword '{keyword}'.")]
    ForbiddenKeyword {
        /// The keyword that was found.
        keyword: &'static str,
    },

    /// The fragment has a different number of opening and closing braces.
    #[error("Fragment has unbalanced braces ({open} '{{' vs {close} '}}').")]
    UnbalancedBraces {
        /// Number of `{` characters.
        open: usize,
        /// Number of `}` characters.
        close: usize,
    },
}

/// Checks that `fragment` is safe to splice into a generated document.
///
/// # Errors
///
/// Returns the first [`FragmentError`] that applies, checked in order:
/// empty text, forbidden keyword, brace mismatch.
///
/// # Example
///
/// ```rust
/// use vendure_api::custom_fields::{validate_fragment, FragmentError};
///
/// assert!(validate_fragment("mainUsdzAsset { id name source }").is_ok());
/// assert_eq!(
///     validate_fragment("foo { bar"),
///     Err(FragmentError::UnbalancedBraces { open: 1, close: 0 })
/// );
/// ```
pub fn validate_fragment(fragment: &str) -> Result<(), FragmentError> {
    let trimmed = fragment.trim();
    if trimmed.is_empty() {
        return Err(FragmentError::Empty);
    }

    let lowered = trimmed.to_lowercase();
    if let Some(keyword) = FORBIDDEN_KEYWORDS
        .iter()
        .copied()
        .find(|keyword| lowered.contains(keyword))
    {
        return Err(FragmentError::ForbiddenKeyword { keyword });
    }

    let open = trimmed.matches('{').count();
    let close = trimmed.matches('}').count();
    if open != close {
        return Err(FragmentError::UnbalancedBraces { open, close });
    }

    Ok(())
}

/// Returns `true` if [`validate_fragment`] accepts `fragment`.
#[must_use]
pub fn is_valid_fragment(fragment: &str) -> bool {
    validate_fragment(fragment).is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_simple_and_nested_fragments() {
        assert!(is_valid_fragment("loyaltyPoints"));
        assert!(is_valid_fragment("foo { bar }"));
        assert!(is_valid_fragment(
            "reviews { items { id rating author { name } } totalItems }"
        ));
    }

    #[test]
    fn test_rejects_empty_and_whitespace() {
        assert_eq!(validate_fragment(""), Err(FragmentError::Empty));
        assert_eq!(validate_fragment("  \n\t "), Err(FragmentError::Empty));
    }

    #[test]
    fn test_rejects_write_keywords_case_insensitively() {
        assert_eq!(
            validate_fragment("mutation { doThing }"),
            Err(FragmentError::ForbiddenKeyword {
                keyword: "mutation"
            })
        );
        assert_eq!(
            validate_fragment("Subscription { ticks }"),
            Err(FragmentError::ForbiddenKeyword {
                keyword: "subscription"
            })
        );
        // Substring match, not token match
        assert!(!is_valid_fragment("lastMutationDate"));
    }

    #[test]
    fn test_rejects_unbalanced_braces() {
        assert_eq!(
            validate_fragment("foo { bar"),
            Err(FragmentError::UnbalancedBraces { open: 1, close: 0 })
        );
        assert_eq!(
            validate_fragment("foo { bar } }"),
            Err(FragmentError::UnbalancedBraces { open: 1, close: 2 })
        );
    }

    #[test]
    fn test_braces_in_string_literals_are_counted() {
        // Known limitation: the check does not understand GraphQL strings
        assert!(!is_valid_fragment(r#"label(format: "{") { value }"#));
    }

    #[test]
    fn test_error_messages() {
        let error = FragmentError::UnbalancedBraces { open: 2, close: 1 };
        assert_eq!(
            error.to_string(),
            "Fragment has unbalanced braces (2 '{' vs 1 '}')."
        );
    }
}
