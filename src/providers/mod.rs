//! Source implementations for movie lookups.

use async_trait::async_trait;

use crate::errors::MovieLookupError;
use crate::types::{MovieDetails, MovieSummary};

pub mod mock;
pub mod omdb;

pub use omdb::OmdbSource;

#[cfg(test)]
pub use mock::MockSource;

/// Trait for live movie data sources.
///
/// Implementations answer search and detail queries against a concrete
/// backend; the client layers degraded-mode and fault-tolerance policies on
/// top.
#[async_trait]
pub trait MovieDataSource: Send + Sync + std::fmt::Debug {
    /// Searches the catalog for titles matching `query`.
    ///
    /// An upstream "no matches" response is an empty list, not an error.
    ///
    /// # Errors
    /// - `MovieLookupError::NetworkError` - Transport failure
    /// - `MovieLookupError::ParseError` - Malformed response body
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, MovieLookupError>;

    /// Fetches the full detail record for `external_id`.
    ///
    /// # Errors
    /// - `MovieLookupError::NotFound` - Upstream has no record for the id
    /// - `MovieLookupError::NetworkError` - Transport failure
    /// - `MovieLookupError::ParseError` - Malformed response body
    async fn details(&self, external_id: &str) -> Result<MovieDetails, MovieLookupError>;
}
