//! Router-level tests driven through `tower::ServiceExt::oneshot`.

use super::common::*;
use axum::body::{to_bytes, Body};
use axum::http::{header, Request, StatusCode};
use axum::Router;
use shakesearch::server::{router, MISSING_QUERY_BODY};
use shakesearch::{SearchResponse, Searcher};
use std::sync::Arc;
use tower::ServiceExt;

fn app() -> Router {
    router(Arc::new(sample_searcher()), None)
}

async fn get(app: Router, uri: &str) -> (StatusCode, Option<String>, Vec<u8>) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let content_type = response
        .headers()
        .get(header::CONTENT_TYPE)
        .map(|v| v.to_str().unwrap().to_string());
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, content_type, body.to_vec())
}

async fn search(uri: &str) -> SearchResponse {
    let (status, content_type, body) = get(app(), uri).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(content_type.as_deref(), Some("application/json"));
    serde_json::from_slice(&body).unwrap()
}

#[tokio::test]
async fn missing_query_is_rejected() {
    let (status, _, body) = get(app(), "/search").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, MISSING_QUERY_BODY.as_bytes());
}

#[tokio::test]
async fn empty_query_is_rejected() {
    let (status, _, body) = get(app(), "/search?q=").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, MISSING_QUERY_BODY.as_bytes());
}

#[tokio::test]
async fn repeated_query_uses_the_first_value() {
    let response = search("/search?q=romeo&q=juliet").await;
    assert_eq!(response.results, SAMPLE.search("romeo").snippets);

    let response = search("/search?q=romeo&q=").await;
    assert_eq!(response.results, SAMPLE.search("romeo").snippets);
}

#[tokio::test]
async fn empty_first_query_is_rejected() {
    let (status, _, body) = get(app(), "/search?q=&q=romeo").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, MISSING_QUERY_BODY.as_bytes());
}

#[tokio::test]
async fn unrelated_parameters_are_ignored() {
    let response = search("/search?page=2&q=romeo").await;
    assert_eq!(response.results, SAMPLE.search("romeo").snippets);

    let (status, _, body) = get(app(), "/search?page=2").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, MISSING_QUERY_BODY.as_bytes());
}

#[tokio::test]
async fn results_match_the_library() {
    let response = search("/search?q=romeo").await;
    assert_eq!(response.results, SAMPLE.search("romeo").snippets);
    assert!(!response.results.is_empty());
    assert_eq!(response.time.len(), 1);
    assert!(response.replaced.is_empty());
}

#[tokio::test]
async fn encoded_multi_term_query() {
    let response = search("/search?q=fair%20sun").await;
    assert_eq!(response.results, SAMPLE.search("fair sun").snippets);
    assert_eq!(response.results.len(), 1);
}

#[tokio::test]
async fn corrections_are_reported_flat() {
    let response = search("/search?q=julet").await;
    assert_eq!(response.replaced, vec!["julet".to_string(), "juliet".to_string()]);
    assert_eq!(response.results.len(), 2);
}

#[tokio::test]
async fn no_match_omits_results() {
    let (status, _, body) = get(app(), "/search?q=xylophonic").await;
    assert_eq!(status, StatusCode::OK);

    let json: serde_json::Value = serde_json::from_slice(&body).unwrap();
    assert!(json.get("results").is_none());
    assert_eq!(json["replaced"], serde_json::json!([]));
    assert!(json["time"][0].is_string());
}

#[tokio::test]
async fn short_query_is_ok_but_empty() {
    let response = search("/search?q=a").await;
    assert!(response.results.is_empty());
    assert!(response.replaced.is_empty());
}

#[tokio::test]
async fn unknown_paths_without_static_dir_are_not_found() {
    let (status, _, _) = get(app(), "/nope").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn static_files_are_served() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("index.html"), "<h1>shakesearch</h1>").unwrap();
    let app = router(
        Arc::new(Searcher::new("to be or not to be\n")),
        Some(dir.path().to_path_buf()),
    );

    let (status, _, body) = get(app.clone(), "/").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, b"<h1>shakesearch</h1>");

    let (status, _, body) = get(app, "/search?q=not").await;
    assert_eq!(status, StatusCode::OK);
    let response: SearchResponse = serde_json::from_slice(&body).unwrap();
    assert_eq!(response.results.len(), 1);
}
