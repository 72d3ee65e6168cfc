// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! HTTP surface: `GET /search?q=…` plus static files for everything else.
//!
//! The handler is thin. It validates the query parameter, runs the search on
//! the blocking pool (it is pure CPU work), and serializes the result. All
//! failures become plain-text responses with fixed bodies; nothing a client
//! sends can take the process down.

mod error;

pub use error::*;

use crate::searcher::Searcher;
use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::info;

/// Query string of `/search`.
///
/// Decoded from raw pairs so a repeated `q` is not a rejection; the first
/// value wins.
#[derive(Debug, Default, Deserialize)]
#[serde(from = "Vec<(String, String)>")]
pub struct SearchParams {
    pub q: Option<String>,
}

impl From<Vec<(String, String)>> for SearchParams {
    fn from(pairs: Vec<(String, String)>) -> Self {
        let q = pairs
            .into_iter()
            .find(|(key, _)| key == "q")
            .map(|(_, value)| value);
        Self { q }
    }
}

/// Where and what to serve.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub addr: SocketAddr,
    /// Directory served for every path other than `/search`.
    pub static_dir: Option<PathBuf>,
}

/// Build the application router around a shared searcher.
pub fn router(searcher: Arc<Searcher>, static_dir: Option<PathBuf>) -> Router {
    let api = Router::new()
        .route("/search", get(handle_search))
        .with_state(searcher);

    let app = match static_dir {
        Some(dir) => api.fallback_service(ServeDir::new(dir)),
        None => api,
    };
    app.layer(TraceLayer::new_for_http())
}

async fn handle_search(
    State(searcher): State<Arc<Searcher>>,
    Query(params): Query<SearchParams>,
) -> Result<Response, ServerError> {
    let query = params
        .q
        .filter(|q| !q.is_empty())
        .ok_or(ServerError::MissingQuery)?;

    let result = tokio::task::spawn_blocking(move || searcher.search(&query))
        .await
        .map_err(|e| ServerError::Search(e.to_string()))?;

    let body = serde_json::to_vec(&result.to_response()).map_err(ServerError::Encoding)?;
    Ok(([(header::CONTENT_TYPE, "application/json")], body).into_response())
}

/// Bind `config.addr` and serve until Ctrl-C.
pub async fn serve(config: ServerConfig, searcher: Arc<Searcher>) -> std::io::Result<()> {
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!(addr = %listener.local_addr()?, "listening");
    axum::serve(listener, router(searcher, config.static_dir))
        .with_graceful_shutdown(shutdown_signal())
        .await
}

async fn shutdown_signal() {
    if let Err(error) = tokio::signal::ctrl_c().await {
        tracing::error!(%error, "failed to listen for shutdown signal");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
