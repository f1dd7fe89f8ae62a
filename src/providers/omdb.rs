//! Production movie source backed by the OMDb HTTP API.

use async_trait::async_trait;
use serde::Deserialize;
use tracing::debug;

use super::MovieDataSource;
use crate::errors::MovieLookupError;
use crate::types::{MovieDetails, MovieSummary, SearchResponse};

/// Movie source backed by an OMDb-shaped REST endpoint.
///
/// Issues plain GET requests with query-string parameters; no retries,
/// backoff, or client-side timeouts. An HTTP error status still carries a
/// JSON envelope upstream, so status handling happens at the envelope level.
#[derive(Debug, Clone)]
pub struct OmdbSource {
    client: reqwest::Client,
    base_url: String,
    api_key: String,
}

/// Detail response envelope; the record fields arrive flattened next to the
/// status field.
#[derive(Debug, Deserialize)]
struct DetailEnvelope {
    #[serde(rename = "Response")]
    response: String,
    #[serde(rename = "Error")]
    error: Option<String>,
    #[serde(flatten)]
    details: MovieDetails,
}

impl OmdbSource {
    /// Creates a source for the given endpoint and credential.
    pub fn new(base_url: impl Into<String>, api_key: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            base_url: base_url.into(),
            api_key: api_key.into(),
        }
    }
}

#[async_trait]
impl MovieDataSource for OmdbSource {
    async fn search(&self, query: &str) -> Result<Vec<MovieSummary>, MovieLookupError> {
        let url = format!(
            "{}?apikey={}&s={}&type=movie",
            self.base_url,
            self.api_key,
            urlencoding::encode(query)
        );
        debug!(%query, "issuing search request");

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| MovieLookupError::NetworkError {
                    reason: format!("HTTP request failed: {e}"),
                })?;

        let envelope: SearchResponse =
            response
                .json()
                .await
                .map_err(|e| MovieLookupError::ParseError {
                    reason: format!("JSON parsing failed: {e}"),
                })?;

        Ok(envelope.into_results())
    }

    async fn details(&self, external_id: &str) -> Result<MovieDetails, MovieLookupError> {
        let url = format!(
            "{}?apikey={}&i={}&plot=full",
            self.base_url,
            self.api_key,
            urlencoding::encode(external_id)
        );
        debug!(%external_id, "issuing detail request");

        let response =
            self.client
                .get(&url)
                .send()
                .await
                .map_err(|e| MovieLookupError::NetworkError {
                    reason: format!("HTTP request failed: {e}"),
                })?;

        let envelope: DetailEnvelope =
            response
                .json()
                .await
                .map_err(|e| MovieLookupError::ParseError {
                    reason: format!("JSON parsing failed: {e}"),
                })?;

        if envelope.response != "True" {
            return Err(MovieLookupError::NotFound {
                id: external_id.to_string(),
                reason: envelope
                    .error
                    .unwrap_or_else(|| "Unknown error".to_string()),
            });
        }

        Ok(envelope.details)
    }
}
