//! Client configuration resolved once at startup.
//!
//! The configuration is an explicitly constructed, immutable object injected
//! into the client at construction, never a hidden global. A missing, empty,
//! or placeholder credential puts the client into degraded mode for the
//! lifetime of the process.

/// Default public endpoint of the upstream movie database.
pub const DEFAULT_BASE_URL: &str = "http://www.omdbapi.com/";

/// Sample credential shipped in example configs; counts as unconfigured.
const PLACEHOLDER_API_KEY: &str = "YOUR_OMDB_API_KEY";

/// Movie lookup configuration.
///
/// Supports environment variable resolution for runtime customization.
#[derive(Debug, Clone)]
pub struct LookupConfig {
    /// API credential for the upstream endpoint, if configured.
    pub api_key: Option<String>,
    /// Base URL of the upstream endpoint.
    pub base_url: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl LookupConfig {
    /// Creates configuration from environment variables.
    ///
    /// Reads `OMDB_API_KEY` and `OMDB_BASE_URL`, keeping defaults for
    /// anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(api_key) = std::env::var("OMDB_API_KEY") {
            config.api_key = Some(api_key);
        }

        if let Ok(base_url) = std::env::var("OMDB_BASE_URL") {
            config.base_url = base_url;
        }

        config
    }

    /// Creates configuration with an explicit API key and the default
    /// endpoint.
    pub fn with_api_key(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Some(api_key.into()),
            ..Self::default()
        }
    }

    /// Returns the usable credential, if one is configured.
    ///
    /// An empty value or the sample placeholder counts as unconfigured; the
    /// client treats `None` here as the signal to run degraded.
    pub fn credential(&self) -> Option<&str> {
        self.api_key
            .as_deref()
            .filter(|key| !key.is_empty() && *key != PLACEHOLDER_API_KEY)
    }
}
