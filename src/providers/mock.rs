//! Mock source implementation for testing.

#[cfg(test)]
use std::collections::HashMap;
#[cfg(test)]
use std::sync::{Arc, Mutex};

#[cfg(test)]
use async_trait::async_trait;

#[cfg(test)]
use super::MovieDataSource;
#[cfg(test)]
use crate::errors::MovieLookupError;
#[cfg(test)]
use crate::types::{MovieDetails, MovieSummary};

/// Scripted source for exercising live-mode policies without a network.
#[cfg(test)]
#[derive(Debug, Default)]
pub struct MockSource {
    search_results: HashMap<String, Vec<MovieSummary>>,
    detail_record: Option<MovieDetails>,
    fail: bool,
    queries: Arc<Mutex<Vec<String>>>,
}

#[cfg(test)]
impl MockSource {
    /// Creates a mock that answers every query with an empty result page.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a mock that fails every call with a network error.
    pub fn failing() -> Self {
        Self {
            fail: true,
            ..Self::default()
        }
    }

    /// Scripts the result page returned for `query`.
    pub fn with_search_results(mut self, query: &str, results: Vec<MovieSummary>) -> Self {
        self.search_results.insert(query.to_string(), results);
        self
    }

    /// Scripts the record returned for any detail lookup.
    pub fn with_details(mut self, details: MovieDetails) -> Self {
        self.detail_record = Some(details);
        self
    }

    /// Handle onto the log of received search queries, in call order.
    pub fn query_log(&self) -> Arc<Mutex<Vec<String>>> {
        Arc::clone(&self.queries)
    }
}

#[cfg(test)]
#[async_trait]
impl MovieDataSource for MockSource {
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, MovieLookupError> {
        self.queries.lock().unwrap().push(query.to_string());

        if self.fail {
            return Err(MovieLookupError::NetworkError {
                reason: "simulated transport failure".to_string(),
            });
        }

        Ok(self.search_results.get(query).cloned().unwrap_or_default())
    }

    async fn details(&self, external_id: &str) -> Result<MovieDetails, MovieLookupError> {
        if self.fail {
            return Err(MovieLookupError::NetworkError {
                reason: "simulated transport failure".to_string(),
            });
        }

        self.detail_record
            .clone()
            .ok_or_else(|| MovieLookupError::NotFound {
                id: external_id.to_string(),
                reason: "Movie not found!".to_string(),
            })
    }
}
