// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Request failures and the fixed responses they map to.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

/// Body sent when `q` is missing or empty.
pub const MISSING_QUERY_BODY: &str = "missing search query in URL params";
/// Body sent when the result cannot be serialized.
pub const ENCODING_FAILURE_BODY: &str = "encoding failure";
/// Body sent when the search task itself failed.
pub const SEARCH_FAILURE_BODY: &str = "search failure";

#[derive(Debug, Error)]
pub enum ServerError {
    #[error("missing search query")]
    MissingQuery,

    #[error("failed to encode search result: {0}")]
    Encoding(#[from] serde_json::Error),

    #[error("search task failed: {0}")]
    Search(String),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::MissingQuery => StatusCode::BAD_REQUEST,
            ServerError::Encoding(_) | ServerError::Search(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn body(&self) -> &'static str {
        match self {
            ServerError::MissingQuery => MISSING_QUERY_BODY,
            ServerError::Encoding(_) => ENCODING_FAILURE_BODY,
            ServerError::Search(_) => SEARCH_FAILURE_BODY,
        }
    }
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            tracing::error!(error = %self, "search request failed");
        }
        (status, self.body()).into_response()
    }
}
