use std::fmt;

/// Result type for extdata operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error taxonomy shared by every adapter.
///
/// All three variants end up in the same `{"error": "..."}` envelope with
/// exit status 1; the split exists so tests and callers can tell which
/// pipeline stage rejected the invocation. Messages are formatted at the
/// point of failure and must name the offending field or operation, and
/// must never contain a fetched secret value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Input payload was absent, not valid JSON, or not a JSON object
    Input(String),

    /// A declared field was missing or failed its coercion rule, including
    /// missing environment configuration
    Validation(String),

    /// The downstream provider call failed: authorization, not-found,
    /// network, non-zero subprocess exit, or malformed subprocess output
    Provider(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Input(msg) | Error::Validation(msg) | Error::Provider(msg) => {
                write!(f, "{}", msg)
            }
        }
    }
}

impl std::error::Error for Error {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_passes_message_through() {
        let err = Error::Validation("Missing devName in query".to_string());
        assert_eq!(err.to_string(), "Missing devName in query");
    }

    #[test]
    fn test_variants_compare_by_kind_and_message() {
        assert_ne!(
            Error::Input("boom".to_string()),
            Error::Provider("boom".to_string())
        );
    }
}
