//! Application error types and HTTP response mapping.
//!
//! `UpstreamError` classifies everything that can go wrong talking to the
//! GitHub API. `AppError` is what reaches the HTTP boundary; it implements
//! Axum's `IntoResponse` and always renders a JSON body `{"error": ...}`.
//!
//! Error mappings:
//! - `Upstream` (repository listing failed) → 500

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpstreamError {
    #[error("request to {url} timed out")]
    Timeout { url: String },

    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    #[error("GitHub API error: {status} {status_text} - {body}")]
    Api {
        status: u16,
        status_text: String,
        body: String,
    },

    #[error("failed to decode GitHub API response: {0}")]
    Decode(#[from] serde_json::Error),
}

impl UpstreamError {
    pub fn from_reqwest(url: &str, source: reqwest::Error) -> Self {
        if source.is_timeout() {
            UpstreamError::Timeout {
                url: url.to_string(),
            }
        } else {
            UpstreamError::Transport {
                url: url.to_string(),
                source,
            }
        }
    }

    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            UpstreamError::Timeout { .. } | UpstreamError::Transport { .. }
        )
    }
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("failed to fetch repositories: {0}")]
    Upstream(#[from] UpstreamError),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": self.to_string(),
        }));

        (status, body).into_response()
    }
}

pub type Result<T> = std::result::Result<T, AppError>;
