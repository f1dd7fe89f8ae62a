//! Movie lookup client: search, detail fetch, and trending aggregation.

use std::collections::HashSet;

use tracing::{debug, error, warn};

use crate::config::LookupConfig;
use crate::demo;
use crate::errors::MovieLookupError;
use crate::providers::{MovieDataSource, OmdbSource};
use crate::types::{MovieDetails, MovieSummary};

/// Proxy queries used to simulate a trending feed. The upstream API has no
/// popularity concept, so trending aggregates these fixed popular searches;
/// determinism comes from the fixed list and first-occurrence dedup.
const TRENDING_QUERIES: [&str; 4] = ["batman", "marvel", "star wars", "avengers"];

/// Results taken from each proxy query before deduplication.
const TRENDING_PER_QUERY: usize = 2;

/// Maximum entries in a trending result.
const TRENDING_LIMIT: usize = 8;

/// Entries served when a degraded-mode search matches nothing, keeping the
/// caller's result grid populated.
const DEGRADED_FALLBACK_LEN: usize = 4;

/// Client for the upstream movie catalog.
///
/// Constructed once from resolved [`LookupConfig`]; without a usable
/// credential the client runs permanently degraded, serving every operation
/// from the embedded demo catalog and never touching the network.
///
/// Each operation is a stateless, independently awaitable call: no session,
/// pagination cursor, or retry loop.
#[derive(Debug)]
pub struct MovieLookupClient {
    source: Option<Box<dyn MovieDataSource>>,
}

impl MovieLookupClient {
    /// Creates a client from resolved configuration.
    pub fn new(config: &LookupConfig) -> Self {
        match config.credential() {
            Some(api_key) => Self {
                source: Some(Box::new(OmdbSource::new(config.base_url.as_str(), api_key))),
            },
            None => {
                warn!("no API credential configured, serving demo data");
                Self { source: None }
            }
        }
    }

    /// Creates a client over an injected source, for exercising live-mode
    /// behavior in tests.
    #[cfg(test)]
    fn with_source(source: Box<dyn MovieDataSource>) -> Self {
        Self { source: Some(source) }
    }

    /// Whether the client is serving demo data instead of live results.
    pub fn is_degraded(&self) -> bool {
        self.source.is_none()
    }

    /// Searches for movies matching `query`.
    ///
    /// Never fails: live transport or parse problems are logged and mapped to
    /// an empty result. Degraded mode matches the query case-insensitively
    /// against demo titles and falls back to a fixed slice of the catalog
    /// when nothing matches. Blank queries are passed through unchanged;
    /// filtering them is the caller's concern.
    pub async fn search(&self, query: &str) -> Vec<MovieSummary> {
        let Some(source) = &self.source else {
            return Self::demo_search(query);
        };

        match source.search(query).await {
            Ok(results) => results,
            Err(e) => {
                warn!(%query, error = %e, "search failed, returning no results");
                Vec::new()
            }
        }
    }

    /// Fetches the full detail record for `external_id`.
    ///
    /// Unlike [`search`](Self::search) and [`trending`](Self::trending),
    /// failures here surface to the caller, which is expected to decline to
    /// open a detail view.
    ///
    /// # Errors
    /// - `MovieLookupError::NotFound` - Upstream has no record for the id
    /// - `MovieLookupError::NetworkError` - Transport failure
    /// - `MovieLookupError::ParseError` - Malformed response body
    pub async fn details(&self, external_id: &str) -> Result<MovieDetails, MovieLookupError> {
        let Some(source) = &self.source else {
            // The demo record stands in for every id.
            return Ok(demo::details().clone());
        };

        source.details(external_id).await.inspect_err(|e| {
            error!(%external_id, error = %e, "detail lookup failed");
        })
    }

    /// Returns a trending selection.
    ///
    /// Never fails: if the live aggregation does, the demo catalog is served
    /// instead. Degraded mode returns the entire demo catalog.
    pub async fn trending(&self) -> Vec<MovieSummary> {
        let Some(source) = &self.source else {
            return demo::catalog().to_vec();
        };

        match Self::aggregate_trending(source.as_ref()).await {
            Ok(results) => results,
            Err(e) => {
                warn!(error = %e, "trending aggregation failed, serving demo catalog");
                demo::catalog().to_vec()
            }
        }
    }

    /// Runs the proxy queries sequentially and merges their head entries.
    ///
    /// Sequential on purpose: worst-case latency is bounded at four times a
    /// single search, and result order stays deterministic.
    async fn aggregate_trending(
        source: &dyn MovieDataSource,
    ) -> Result<Vec<MovieSummary>, MovieLookupError> {
        let mut collected = Vec::new();
        for query in TRENDING_QUERIES {
            let batch = source.search(query).await?;
            collected.extend(batch.into_iter().take(TRENDING_PER_QUERY));
        }

        // Dedup by external id, keeping the first occurrence in encounter order.
        let mut seen = HashSet::new();
        collected.retain(|movie| seen.insert(movie.external_id.clone()));
        collected.truncate(TRENDING_LIMIT);

        Ok(collected)
    }

    /// Case-insensitive substring match over demo titles, with a fixed
    /// catalog slice as fallback so the result is never empty.
    fn demo_search(query: &str) -> Vec<MovieSummary> {
        debug!(%query, "serving search from demo catalog");

        let needle = query.to_lowercase();
        let matched: Vec<MovieSummary> = demo::catalog()
            .iter()
            .filter(|movie| movie.title.to_lowercase().contains(&needle))
            .cloned()
            .collect();

        if matched.is_empty() {
            demo::catalog()[..DEGRADED_FALLBACK_LEN].to_vec()
        } else {
            matched
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::providers::MockSource;
    use crate::types::MediaType;

    fn degraded_client() -> MovieLookupClient {
        MovieLookupClient::new(&LookupConfig::default())
    }

    fn summary(title: &str, external_id: &str) -> MovieSummary {
        MovieSummary {
            title: title.to_string(),
            year: "2024".to_string(),
            external_id: external_id.to_string(),
            media_type: MediaType::Movie,
            poster_url: "N/A".to_string(),
        }
    }

    #[test]
    fn test_placeholder_credential_degrades() {
        assert!(degraded_client().is_degraded());
        assert!(MovieLookupClient::new(&LookupConfig::with_api_key("YOUR_OMDB_API_KEY")).is_degraded());
        assert!(!MovieLookupClient::new(&LookupConfig::with_api_key("abcd1234")).is_degraded());
    }

    #[tokio::test]
    async fn test_degraded_search_matches_substring_case_insensitive() {
        let client = degraded_client();

        let results = client.search("MATRIX").await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].title, "The Matrix");

        let results = client.search("the").await;
        assert!(results.iter().all(|m| m.title.to_lowercase().contains("the")));
        assert!(results.len() > 1);
    }

    #[tokio::test]
    async fn test_degraded_search_empty_query_returns_full_catalog() {
        let results = degraded_client().search("").await;
        assert_eq!(results, demo_catalog());
    }

    #[tokio::test]
    async fn test_degraded_search_unmatched_returns_fixed_slice() {
        let client = degraded_client();

        // "batman" matches no demo title; the fallback keeps the grid populated.
        for query in ["batman", "no such movie"] {
            let results = client.search(query).await;
            assert_eq!(results, demo_catalog()[..4].to_vec());
        }
    }

    #[tokio::test]
    async fn test_degraded_details_ignores_id() {
        let client = degraded_client();

        for id in ["tt0468569", "tt9999999", ""] {
            let details = client.details(id).await.unwrap();
            assert_eq!(details.title, "The Dark Knight");
        }
    }

    #[tokio::test]
    async fn test_degraded_trending_returns_entire_catalog() {
        let results = degraded_client().trending().await;
        assert_eq!(results, demo_catalog());
        assert_eq!(results.len(), 8);
    }

    #[tokio::test]
    async fn test_live_search_returns_scripted_results() {
        let mock = MockSource::new()
            .with_search_results("matrix", vec![summary("The Matrix", "tt0133093")]);
        let client = MovieLookupClient::with_source(Box::new(mock));

        let results = client.search("matrix").await;
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].external_id, "tt0133093");
    }

    #[tokio::test]
    async fn test_live_search_failure_yields_empty() {
        let client = MovieLookupClient::with_source(Box::new(MockSource::failing()));
        assert!(client.search("matrix").await.is_empty());
    }

    #[tokio::test]
    async fn test_live_details_failure_raises() {
        let client = MovieLookupClient::with_source(Box::new(MockSource::failing()));

        let err = client.details("tt0133093").await.unwrap_err();
        assert!(matches!(err, MovieLookupError::NetworkError { .. }));
    }

    #[tokio::test]
    async fn test_live_details_not_found_raises() {
        let client = MovieLookupClient::with_source(Box::new(MockSource::new()));

        let err = client.details("tt0000000").await.unwrap_err();
        assert!(matches!(err, MovieLookupError::NotFound { ref id, .. } if id == "tt0000000"));
    }

    #[tokio::test]
    async fn test_live_details_returns_record() {
        let mut record = crate::demo::details().clone();
        record.title = "Inception".to_string();
        let client =
            MovieLookupClient::with_source(Box::new(MockSource::new().with_details(record)));

        let details = client.details("tt1375666").await.unwrap();
        assert_eq!(details.title, "Inception");
    }

    #[tokio::test]
    async fn test_trending_issues_proxy_queries_in_fixed_order() {
        let mock = MockSource::new();
        let log = mock.query_log();
        let client = MovieLookupClient::with_source(Box::new(mock));

        client.trending().await;

        assert_eq!(
            *log.lock().unwrap(),
            vec!["batman", "marvel", "star wars", "avengers"]
        );
    }

    #[tokio::test]
    async fn test_trending_takes_two_per_query_dedups_keeping_first() {
        let mock = MockSource::new()
            .with_search_results(
                "batman",
                vec![
                    summary("Batman Begins", "tt0372784"),
                    summary("The Batman", "tt1877830"),
                    summary("Batman Forever", "tt0112462"), // beyond the per-query cut
                ],
            )
            .with_search_results(
                "marvel",
                vec![
                    summary("The Batman", "tt1877830"), // duplicate of an earlier entry
                    summary("Captain Marvel", "tt4154664"),
                ],
            )
            .with_search_results("star wars", vec![summary("Star Wars", "tt0076759")])
            .with_search_results(
                "avengers",
                vec![
                    summary("The Avengers", "tt0848228"),
                    summary("Avengers: Endgame", "tt4154796"),
                ],
            );
        let client = MovieLookupClient::with_source(Box::new(mock));

        let results = client.trending().await;
        let ids: Vec<&str> = results.iter().map(|m| m.external_id.as_str()).collect();

        assert_eq!(
            ids,
            vec![
                "tt0372784", // batman #1
                "tt1877830", // batman #2, first occurrence wins
                "tt4154664", // marvel #2 (its #1 was a duplicate)
                "tt0076759", // star wars
                "tt0848228", // avengers #1
                "tt4154796", // avengers #2
            ]
        );
    }

    #[tokio::test]
    async fn test_trending_caps_at_limit_with_distinct_ids() {
        let mut mock = MockSource::new();
        for (i, query) in ["batman", "marvel", "star wars", "avengers"].into_iter().enumerate() {
            mock = mock.with_search_results(
                query,
                vec![
                    summary("A", &format!("tt000000{}", i * 2)),
                    summary("B", &format!("tt000000{}", i * 2 + 1)),
                ],
            );
        }
        let client = MovieLookupClient::with_source(Box::new(mock));

        let results = client.trending().await;
        assert!(results.len() <= 8);

        let mut ids: Vec<&str> = results.iter().map(|m| m.external_id.as_str()).collect();
        let ordered = ids.clone();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), ordered.len());
    }

    #[tokio::test]
    async fn test_trending_failure_falls_back_to_catalog() {
        let client = MovieLookupClient::with_source(Box::new(MockSource::failing()));
        assert_eq!(client.trending().await, demo_catalog());
    }

    fn demo_catalog() -> Vec<MovieSummary> {
        crate::demo::catalog().to_vec()
    }
}
