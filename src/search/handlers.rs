use super::matcher::find;
use super::types::{MovieLinkParams, MovieLinkResponse};
use crate::catalog::types::Catalog;
use axum::extract::Query;
use axum::{Extension, Json};
use std::sync::Arc;

/// `GET /get_movie_link?name=..&year=..`
///
/// Always answers 200; a miss is reported in the body.
pub async fn handle_get_movie_link(
    Query(params): Query<MovieLinkParams>,
    Extension(catalog): Extension<Arc<Catalog>>,
) -> Json<MovieLinkResponse> {
    Json(find(&params.name, &params.year, &catalog).into())
}
