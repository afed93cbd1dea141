//! HTTP API Integration Tests
//!
//! Binds the real router on an ephemeral port and drives it over the network.

use movie_links::catalog::loader::{load, parse_catalog};
use movie_links::catalog::types::Catalog;
use movie_links::search::types::MovieLinkResponse;
use movie_links::server::serve;
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;

const CATALOG: &str = "\
Inception (2010) - http://example.com/inception
The Matrix (1999) - http://example.com/the-matrix
malformed line without a year
";

async fn spawn_server(catalog: Catalog) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        serve(listener, Arc::new(catalog)).await.unwrap();
    });

    addr
}

async fn query(addr: SocketAddr, name: &str, year: &str) -> (u16, serde_json::Value) {
    let resp = reqwest::Client::new()
        .get(format!("http://{}/get_movie_link", addr))
        .query(&[("name", name), ("year", year)])
        .send()
        .await
        .unwrap();

    let status = resp.status().as_u16();
    (status, resp.json().await.unwrap())
}

// ============================================================
// LOOKUP SCENARIOS
// ============================================================

#[tokio::test]
async fn test_exact_match() {
    let addr = spawn_server(parse_catalog(CATALOG)).await;
    let (status, body) = query(addr, "Inception", "2010").await;

    assert_eq!(status, 200);
    assert_eq!(
        body,
        serde_json::json!({
            "title": "inception",
            "year": "2010",
            "link": "http://example.com/inception",
        })
    );
}

#[tokio::test]
async fn test_fuzzy_match_with_release_noise() {
    let addr = spawn_server(parse_catalog(CATALOG)).await;
    let (status, body) = query(addr, "inceptoin 1080p BluRay", "2010").await;

    assert_eq!(status, 200);
    assert_eq!(body["title"], "inception");
    assert_eq!(body["link"], "http://example.com/inception");
}

#[tokio::test]
async fn test_wrong_year_is_not_found() {
    let addr = spawn_server(parse_catalog(CATALOG)).await;
    let (status, body) = query(addr, "Inception", "1999").await;

    assert_eq!(status, 200);
    assert_eq!(body, serde_json::json!({ "error": "Movie not found" }));
}

#[tokio::test]
async fn test_dissimilar_title_is_not_found() {
    let addr = spawn_server(parse_catalog(CATALOG)).await;
    let (status, body) = query(addr, "Xyzzyqux", "2010").await;

    assert_eq!(status, 200);
    let parsed: MovieLinkResponse = serde_json::from_value(body).unwrap();
    assert_eq!(parsed, MovieLinkResponse::not_found());
}

#[tokio::test]
async fn test_missing_catalog_file_answers_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let addr = spawn_server(load(dir.path().join("final_cleaned_links.txt"))).await;
    let (status, body) = query(addr, "Inception", "2010").await;

    assert_eq!(status, 200);
    assert_eq!(body, serde_json::json!({ "error": "Movie not found" }));
}

#[tokio::test]
async fn test_missing_parameter_is_rejected() {
    let addr = spawn_server(parse_catalog(CATALOG)).await;
    let resp = reqwest::Client::new()
        .get(format!("http://{}/get_movie_link?name=Inception", addr))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 400);
}

// ============================================================
// CORS
// ============================================================

#[tokio::test]
async fn test_cors_allows_any_origin() {
    let addr = spawn_server(parse_catalog(CATALOG)).await;
    let resp = reqwest::Client::new()
        .get(format!("http://{}/get_movie_link", addr))
        .query(&[("name", "Inception"), ("year", "2010")])
        .header("Origin", "http://frontend.example")
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status().as_u16(), 200);
    assert_eq!(
        resp.headers()["access-control-allow-origin"],
        "http://frontend.example"
    );
    assert_eq!(resp.headers()["access-control-allow-credentials"], "true");
}

#[tokio::test]
async fn test_cors_preflight() {
    let addr = spawn_server(parse_catalog(CATALOG)).await;
    let resp = reqwest::Client::new()
        .request(
            reqwest::Method::OPTIONS,
            format!("http://{}/get_movie_link", addr),
        )
        .header("Origin", "http://frontend.example")
        .header("Access-Control-Request-Method", "GET")
        .header("Access-Control-Request-Headers", "x-custom-header")
        .send()
        .await
        .unwrap();

    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers()["access-control-allow-origin"],
        "http://frontend.example"
    );
    assert!(resp.headers()["access-control-allow-methods"]
        .to_str()
        .unwrap()
        .contains("GET"));
    assert!(resp.headers()["access-control-allow-headers"]
        .to_str()
        .unwrap()
        .contains("x-custom-header"));
}
