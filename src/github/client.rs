//! Thin HTTP layer over the GitHub REST API.
//!
//! Knows nothing about payload shapes: it performs a GET with the required
//! headers and a bounded timeout, classifies the outcome, and hands back the
//! raw body for the caller to decode.

use std::sync::Arc;

use axum::body::Bytes;
use reqwest::header::ACCEPT;

use crate::config::Config;
use crate::error::UpstreamError;

const USER_AGENT: &str = concat!("git-history/", env!("CARGO_PKG_VERSION"));

#[derive(Debug, Clone)]
pub struct GitHubClient {
    http: reqwest::Client,
    config: Arc<Config>,
}

impl GitHubClient {
    pub fn new(config: Arc<Config>) -> Result<Self, reqwest::Error> {
        let http = reqwest::Client::builder()
            .user_agent(USER_AGENT)
            .timeout(config.request_timeout)
            .build()?;
        Ok(Self { http, config })
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// GET `url` and return the body of a 2xx response.
    ///
    /// Non-2xx responses are read to the end and returned as
    /// `UpstreamError::Api`. Nothing is retried.
    pub async fn get(&self, url: &str, accept: &str) -> Result<Bytes, UpstreamError> {
        tracing::debug!(url, "GET upstream");

        let response = self
            .http
            .get(url)
            .header(ACCEPT, accept)
            .send()
            .await
            .map_err(|e| UpstreamError::from_reqwest(url, e))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            tracing::error!(
                url,
                status_code = status.as_u16(),
                response_body = %body,
                "GitHub API returned non-success status"
            );
            return Err(UpstreamError::Api {
                status: status.as_u16(),
                status_text: status.canonical_reason().unwrap_or_default().to_string(),
                body,
            });
        }

        response
            .bytes()
            .await
            .map_err(|e| UpstreamError::from_reqwest(url, e))
    }

    /// GET `url` with the configured media type and decode the JSON body.
    pub(crate) async fn get_json<T>(&self, url: &str) -> Result<T, UpstreamError>
    where
        T: serde::de::DeserializeOwned,
    {
        let body = self.get(url, &self.config.accept).await?;
        serde_json::from_slice(&body).map_err(|e| {
            tracing::error!(url, error = %e, "Failed to decode GitHub API response");
            UpstreamError::Decode(e)
        })
    }
}
