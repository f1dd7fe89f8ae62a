//! CineScout - Movie search and discovery client
//!
//! Wraps an OMDb-shaped movie metadata API with search, detail-fetch, and
//! trending-aggregation operations. Without a configured API credential the
//! client runs in degraded mode, serving every operation from an embedded
//! demo catalog so a consuming UI stays populated.

#![deny(missing_docs)]
#![deny(clippy::missing_errors_doc)]
#![deny(clippy::missing_panics_doc)]
#![warn(clippy::too_many_lines)]

pub mod client;
pub mod config;
mod demo;
pub mod errors;
pub mod providers;
pub mod types;

// Re-export main types
pub use client::MovieLookupClient;
pub use config::LookupConfig;
pub use errors::MovieLookupError;
pub use types::{MediaType, MovieDetails, MovieSummary, NOT_AVAILABLE, Rating, SearchResponse};

/// Convenience type alias for Results with MovieLookupError.
pub type Result<T> = std::result::Result<T, MovieLookupError>;
