//! Resolution error types.

use thiserror::Error;

/// Error from single-match entity resolution.
///
/// Merging and criteria scoring never fail; resolution is the only core
/// operation with error outcomes, and it always returns exactly one of
/// {entity, `NotFound`, `Ambiguous`, `EmptySelector`}.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ResolveError {
    /// No selector criteria were set; single-match resolution refuses to
    /// treat this as "match everything".
    #[error("selector has no criteria set")]
    EmptySelector,

    /// No candidate satisfied the selector.
    #[error("no entity matched the selector")]
    NotFound,

    /// More than one candidate satisfied the selector; the criteria
    /// under-specify the target.
    #[error("selector matched {count} entities, expected exactly one")]
    Ambiguous {
        /// Number of candidates that satisfied the selector.
        count: usize,
    },
}

impl ResolveError {
    /// Get an error code for classification.
    pub fn error_code(&self) -> &'static str {
        match self {
            ResolveError::EmptySelector => "EMPTY_SELECTOR",
            ResolveError::NotFound => "NOT_FOUND",
            ResolveError::Ambiguous { .. } => "AMBIGUOUS_MATCH",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            ResolveError::Ambiguous { count: 3 }.to_string(),
            "selector matched 3 entities, expected exactly one"
        );
        assert_eq!(
            ResolveError::NotFound.to_string(),
            "no entity matched the selector"
        );
    }

    #[test]
    fn test_error_codes() {
        assert_eq!(ResolveError::EmptySelector.error_code(), "EMPTY_SELECTOR");
        assert_eq!(ResolveError::NotFound.error_code(), "NOT_FOUND");
        assert_eq!(
            ResolveError::Ambiguous { count: 2 }.error_code(),
            "AMBIGUOUS_MATCH"
        );
    }
}
