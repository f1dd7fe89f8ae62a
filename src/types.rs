//! Data types for movie lookup results.
//!
//! Wire structs map the upstream API's PascalCase field names directly;
//! fields the upstream may omit default to the [`NOT_AVAILABLE`] sentinel so
//! "not available" reads the same whether the field was absent or sent as
//! `"N/A"`.

use serde::{Deserialize, Serialize};

/// Upstream's marker for a field with no available value.
///
/// Callers must treat this sentinel as absence, not as a display string;
/// [`available`] maps it to `None`.
pub const NOT_AVAILABLE: &str = "N/A";

/// Maps the upstream "N/A" sentinel to `None`.
pub fn available(value: &str) -> Option<&str> {
    if value == NOT_AVAILABLE {
        None
    } else {
        Some(value)
    }
}

fn not_available() -> String {
    NOT_AVAILABLE.to_string()
}

/// Media type classification reported by the upstream catalog.
#[derive(Debug, Clone, Copy, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MediaType {
    /// Feature film.
    #[default]
    Movie,
    /// Television series; the year field may hold a range.
    Series,
    /// Single episode of a series.
    Episode,
    /// Unrecognized upstream classification.
    Other,
}

impl MediaType {
    /// Parses the upstream `Type` field value.
    pub fn from_upstream(raw: &str) -> Self {
        match raw {
            "movie" => MediaType::Movie,
            "series" => MediaType::Series,
            "episode" => MediaType::Episode,
            _ => MediaType::Other,
        }
    }
}

impl<'de> Deserialize<'de> for MediaType {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Ok(MediaType::from_upstream(&raw))
    }
}

/// Single entry in a search or trending result list.
///
/// Immutable once constructed; identity is the external id, never the title
/// (titles collide).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieSummary {
    /// Display title.
    #[serde(rename = "Title")]
    pub title: String,
    /// Release year as reported upstream; a range like "2019-2021" for
    /// series.
    #[serde(rename = "Year")]
    pub year: String,
    /// Stable opaque identifier in the upstream catalog; the only safe join
    /// key.
    #[serde(rename = "imdbID")]
    pub external_id: String,
    /// Upstream media classification.
    #[serde(rename = "Type", default)]
    pub media_type: MediaType,
    /// Poster image URL, or the "N/A" sentinel when none exists.
    #[serde(rename = "Poster", default = "not_available")]
    pub poster_url: String,
}

impl MovieSummary {
    /// Poster URL with the "N/A" sentinel mapped to `None`.
    pub fn poster(&self) -> Option<&str> {
        available(&self.poster_url)
    }
}

/// Single critic or aggregator rating attached to a detail record.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rating {
    /// Rating source, e.g. "Internet Movie Database".
    #[serde(rename = "Source")]
    pub source: String,
    /// Source-specific rating value, e.g. "9.0/10" or "94%".
    #[serde(rename = "Value")]
    pub value: String,
}

/// Full detail record for a single title, fetched by external id.
///
/// Any field may hold the "N/A" sentinel meaning "not available".
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MovieDetails {
    /// Display title.
    #[serde(rename = "Title", default = "not_available")]
    pub title: String,
    /// Release year; a range for series.
    #[serde(rename = "Year", default = "not_available")]
    pub year: String,
    /// Stable opaque identifier in the upstream catalog.
    #[serde(rename = "imdbID", default = "not_available")]
    pub external_id: String,
    /// Upstream media classification.
    #[serde(rename = "Type", default)]
    pub media_type: MediaType,
    /// Poster image URL.
    #[serde(rename = "Poster", default = "not_available")]
    pub poster_url: String,
    /// Content rating, e.g. "PG-13".
    #[serde(rename = "Rated", default = "not_available")]
    pub rated: String,
    /// Release date, e.g. "18 Jul 2008".
    #[serde(rename = "Released", default = "not_available")]
    pub released: String,
    /// Runtime, e.g. "152 min".
    #[serde(rename = "Runtime", default = "not_available")]
    pub runtime: String,
    /// Comma-joined genre list.
    #[serde(rename = "Genre", default = "not_available")]
    pub genre: String,
    /// Director name(s).
    #[serde(rename = "Director", default = "not_available")]
    pub director: String,
    /// Writer name(s).
    #[serde(rename = "Writer", default = "not_available")]
    pub writer: String,
    /// Main cast, comma-joined.
    #[serde(rename = "Actors", default = "not_available")]
    pub actors: String,
    /// Plot summary.
    #[serde(rename = "Plot", default = "not_available")]
    pub plot: String,
    /// Spoken languages, comma-joined.
    #[serde(rename = "Language", default = "not_available")]
    pub language: String,
    /// Production countries, comma-joined.
    #[serde(rename = "Country", default = "not_available")]
    pub country: String,
    /// Awards summary.
    #[serde(rename = "Awards", default = "not_available")]
    pub awards: String,
    /// Ordered critic/aggregator ratings.
    #[serde(rename = "Ratings", default)]
    pub ratings: Vec<Rating>,
    /// Metacritic score.
    #[serde(rename = "Metascore", default = "not_available")]
    pub metascore: String,
    /// IMDb rating, e.g. "9.0".
    #[serde(rename = "imdbRating", default = "not_available")]
    pub imdb_rating: String,
    /// IMDb vote count, e.g. "2,758,436".
    #[serde(rename = "imdbVotes", default = "not_available")]
    pub imdb_votes: String,
    /// DVD release date.
    #[serde(rename = "DVD", default = "not_available")]
    pub dvd: String,
    /// Box office gross, e.g. "$534,858,444".
    #[serde(rename = "BoxOffice", default = "not_available")]
    pub box_office: String,
    /// Production companies, comma-joined.
    #[serde(rename = "Production", default = "not_available")]
    pub production: String,
    /// Official website URL.
    #[serde(rename = "Website", default = "not_available")]
    pub website: String,
}

impl MovieDetails {
    /// Poster URL with the "N/A" sentinel mapped to `None`.
    pub fn poster(&self) -> Option<&str> {
        available(&self.poster_url)
    }
}

/// Wire envelope returned by the upstream search endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchResponse {
    /// "True" when the search succeeded and `results` is present.
    #[serde(rename = "Response")]
    pub response: String,
    /// Result page for a successful search.
    #[serde(rename = "Search")]
    pub results: Option<Vec<MovieSummary>>,
    /// Total match count reported upstream (string-typed on the wire).
    #[serde(rename = "totalResults")]
    pub total_results: Option<String>,
    /// Upstream error message for a failed search.
    #[serde(rename = "Error")]
    pub error: Option<String>,
}

impl SearchResponse {
    /// Flattens the envelope: the result page on success, empty otherwise.
    ///
    /// An upstream failure envelope ("Response": "False") is a normal
    /// zero-result outcome, not an error.
    pub fn into_results(self) -> Vec<MovieSummary> {
        if self.response == "True" {
            self.results.unwrap_or_default()
        } else {
            Vec::new()
        }
    }
}
