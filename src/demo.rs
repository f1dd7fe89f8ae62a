//! Embedded demo catalog served in degraded mode.
//!
//! Seeded once at first use and never mutated afterwards, so unsynchronized
//! concurrent reads are safe.

use std::sync::LazyLock;

use crate::types::{MediaType, MovieDetails, MovieSummary, Rating};

static CATALOG: LazyLock<Vec<MovieSummary>> = LazyLock::new(|| {
    vec![
        summary("The Dark Knight", "2008", "tt0468569", "https://images.pexels.com/photos/7991579/pexels-photo-7991579.jpeg?auto=compress&cs=tinysrgb&w=300&h=450&fit=crop"),
        summary("Inception", "2010", "tt1375666", "https://images.pexels.com/photos/7991319/pexels-photo-7991319.jpeg?auto=compress&cs=tinysrgb&w=300&h=450&fit=crop"),
        summary("Interstellar", "2014", "tt0816692", "https://images.pexels.com/photos/7991225/pexels-photo-7991225.jpeg?auto=compress&cs=tinysrgb&w=300&h=450&fit=crop"),
        summary("The Matrix", "1999", "tt0133093", "https://images.pexels.com/photos/7991664/pexels-photo-7991664.jpeg?auto=compress&cs=tinysrgb&w=300&h=450&fit=crop"),
        summary("Pulp Fiction", "1994", "tt0110912", "https://images.pexels.com/photos/7991448/pexels-photo-7991448.jpeg?auto=compress&cs=tinysrgb&w=300&h=450&fit=crop"),
        summary("The Godfather", "1972", "tt0068646", "https://images.pexels.com/photos/7991502/pexels-photo-7991502.jpeg?auto=compress&cs=tinysrgb&w=300&h=450&fit=crop"),
        summary("Forrest Gump", "1994", "tt0109830", "https://images.pexels.com/photos/7991386/pexels-photo-7991386.jpeg?auto=compress&cs=tinysrgb&w=300&h=450&fit=crop"),
        summary("Fight Club", "1999", "tt0137523", "https://images.pexels.com/photos/7991340/pexels-photo-7991340.jpeg?auto=compress&cs=tinysrgb&w=300&h=450&fit=crop"),
    ]
});

static DETAILS: LazyLock<MovieDetails> = LazyLock::new(|| MovieDetails {
    title: "The Dark Knight".to_string(),
    year: "2008".to_string(),
    external_id: "tt0468569".to_string(),
    media_type: MediaType::Movie,
    poster_url: "https://images.pexels.com/photos/7991579/pexels-photo-7991579.jpeg?auto=compress&cs=tinysrgb&w=300&h=450&fit=crop".to_string(),
    rated: "PG-13".to_string(),
    released: "18 Jul 2008".to_string(),
    runtime: "152 min".to_string(),
    genre: "Action, Crime, Drama".to_string(),
    director: "Christopher Nolan".to_string(),
    writer: "Jonathan Nolan, Christopher Nolan, David S. Goyer".to_string(),
    actors: "Christian Bale, Heath Ledger, Aaron Eckhart".to_string(),
    plot: "When the menace known as the Joker wreaks havoc and chaos on the people of Gotham, Batman must accept one of the greatest psychological and physical tests of his ability to fight injustice.".to_string(),
    language: "English, Mandarin".to_string(),
    country: "United States, United Kingdom".to_string(),
    awards: "Won 2 Oscars. 156 wins & 163 nominations total".to_string(),
    ratings: vec![
        rating("Internet Movie Database", "9.0/10"),
        rating("Rotten Tomatoes", "94%"),
        rating("Metacritic", "84/100"),
    ],
    metascore: "84".to_string(),
    imdb_rating: "9.0".to_string(),
    imdb_votes: "2,758,436".to_string(),
    dvd: "09 Dec 2008".to_string(),
    box_office: "$534,858,444".to_string(),
    production: "Warner Bros., Legendary Entertainment".to_string(),
    website: "N/A".to_string(),
});

fn summary(title: &str, year: &str, external_id: &str, poster_url: &str) -> MovieSummary {
    MovieSummary {
        title: title.to_string(),
        year: year.to_string(),
        external_id: external_id.to_string(),
        media_type: MediaType::Movie,
        poster_url: poster_url.to_string(),
    }
}

fn rating(source: &str, value: &str) -> Rating {
    Rating {
        source: source.to_string(),
        value: value.to_string(),
    }
}

/// The full demo catalog, in its fixed presentation order.
pub(crate) fn catalog() -> &'static [MovieSummary] {
    &CATALOG
}

/// The single demo detail record; stands in for every id in degraded mode.
pub(crate) fn details() -> &'static MovieDetails {
    &DETAILS
}
