//! HTTP server assembly: routes, CORS and the serve loop.

use crate::catalog::loader::load;
use crate::catalog::types::Catalog;
use crate::config::Config;
use crate::search::handlers::handle_get_movie_link;
use crate::search::types::ENDPOINT_GET_MOVIE_LINK;
use axum::{routing::get, Extension, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::cors::CorsLayer;

/// Builds the application router around an already loaded catalog.
///
/// Cross-origin requests are accepted from any origin, with any method and header.
pub fn build_router(catalog: Arc<Catalog>) -> Router {
    Router::new()
        .route(ENDPOINT_GET_MOVIE_LINK, get(handle_get_movie_link))
        .layer(Extension(catalog))
        .layer(CorsLayer::very_permissive())
}

/// Serves the router on an already bound listener until the process stops.
pub async fn serve(listener: TcpListener, catalog: Arc<Catalog>) -> std::io::Result<()> {
    axum::serve(listener, build_router(catalog)).await
}

/// Loads the catalog once, then serves lookups on the configured address.
pub async fn run(config: Config) -> anyhow::Result<()> {
    let catalog = Arc::new(load(&config.catalog_path));

    let listener = TcpListener::bind(config.bind_addr).await?;
    tracing::info!("HTTP server listening on {}", listener.local_addr()?);
    tracing::info!("Press Ctrl+C to shutdown");

    serve(listener, catalog).await?;

    Ok(())
}
