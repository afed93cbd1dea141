use serde::{Deserialize, Serialize};

use super::matcher::MovieMatch;

/// Path of the lookup endpoint.
pub const ENDPOINT_GET_MOVIE_LINK: &str = "/get_movie_link";

/// Body returned when no catalog entry answers a query.
pub const NOT_FOUND_MESSAGE: &str = "Movie not found";

/// Query string of the lookup endpoint. Both parameters are required.
#[derive(Debug, Deserialize)]
pub struct MovieLinkParams {
    pub name: String,
    pub year: String,
}

/// Lookup response: either the resolved movie or an error message, never both.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MovieLinkResponse {
    Found {
        title: String,
        year: String,
        link: String,
    },
    NotFound {
        error: String,
    },
}

impl MovieLinkResponse {
    pub fn not_found() -> Self {
        Self::NotFound {
            error: NOT_FOUND_MESSAGE.to_string(),
        }
    }
}

impl From<Option<MovieMatch>> for MovieLinkResponse {
    fn from(found: Option<MovieMatch>) -> Self {
        match found {
            Some(m) => Self::Found {
                title: m.title,
                year: m.year,
                link: m.link,
            },
            None => Self::not_found(),
        }
    }
}
