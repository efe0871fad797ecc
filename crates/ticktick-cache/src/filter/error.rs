//! Error types for saved-filter rules.

use thiserror::Error;

/// A specialized Result type for filter rule operations.
pub type FilterResult<T> = Result<T, FilterError>;

/// Errors that can occur while reading a filter rule.
#[derive(Debug, Error)]
pub enum FilterError {
    /// The rule string is not valid JSON, or not shaped like a rule tree.
    #[error("invalid filter rule: {source}")]
    InvalidRule {
        /// The underlying JSON error.
        #[source]
        source: serde_json::Error,
    },
}

impl FilterError {
    /// Creates an invalid rule error.
    pub fn invalid_rule(source: serde_json::Error) -> Self {
        FilterError::InvalidRule { source }
    }
}
