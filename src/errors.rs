//! Error types for movie lookup operations.

use thiserror::Error;

/// Errors that can occur during movie lookup operations.
///
/// Only detail lookups propagate these to callers; search and trending
/// swallow them per the client's fault-tolerance policy.
#[derive(Debug, Error)]
pub enum MovieLookupError {
    /// Upstream has no record for the requested identifier.
    #[error("No title found for '{id}': {reason}")]
    NotFound {
        /// The identifier that failed to resolve
        id: String,
        /// Upstream's error message
        reason: String,
    },

    /// Network communication error occurred during a lookup.
    #[error("Network error: {reason}")]
    NetworkError {
        /// The reason for the network error
        reason: String,
    },

    /// Failed to parse an upstream response body.
    #[error("Parse error: {reason}")]
    ParseError {
        /// The reason for the parse error
        reason: String,
    },
}
