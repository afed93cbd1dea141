use super::normalizer::normalize;
use super::similarity::{closest_match, DEFAULT_CUTOFF};
use crate::catalog::types::Catalog;

/// How a query was resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchKind {
    Exact,
    Fuzzy,
}

/// A resolved catalog entry for a query.
#[derive(Debug, Clone, PartialEq)]
pub struct MovieMatch {
    /// The catalog title that matched: the normalized query on an exact hit, the closest
    /// catalog title on a fuzzy hit.
    pub title: String,
    pub year: String,
    pub link: String,
    pub kind: MatchKind,
}

/// Resolves a raw title and year to a catalog link.
///
/// The normalized title is first looked up exactly under the given year. On a miss, the
/// closest catalog title (ignoring year, ratio >= 0.5) is tried under the same year. The year
/// itself is never matched approximately.
pub fn find(query_title: &str, query_year: &str, catalog: &Catalog) -> Option<MovieMatch> {
    let title = normalize(query_title);
    let year = query_year.trim();

    tracing::info!("Searching for: ({}, {})", title, year);

    if let Some(link) = catalog.get(&title, year) {
        tracing::info!("Found exact match");
        return Some(MovieMatch {
            link: link.to_string(),
            title,
            year: year.to_string(),
            kind: MatchKind::Exact,
        });
    }

    let candidate = closest_match(
        &title,
        catalog.titles().iter().map(String::as_str),
        DEFAULT_CUTOFF,
    );
    tracing::info!("Closest match found: {:?}", candidate.map(|c| c.value));

    let found = candidate.and_then(|c| {
        catalog.get(c.value, year).map(|link| MovieMatch {
            title: c.value.to_string(),
            year: year.to_string(),
            link: link.to_string(),
            kind: MatchKind::Fuzzy,
        })
    });

    if found.is_none() {
        tracing::info!("Movie not found");
    }

    found
}
