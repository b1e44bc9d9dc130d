//! HTTP client wrapper for the catalog API
//!
//! Every call goes through [`ApiClient::request`]: JSON content type, a
//! cookie store for the session, and the `{success, message, data}` envelope
//! decoded in one place. Failures are logged with the raw response body and
//! handed back unchanged inside [`ApiError`].

use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::time::Duration;
use thiserror::Error;

use crate::models::Envelope;

/// Catalog API error types
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Server returned {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("Server rejected request: {0}")]
    Rejected(String),

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Response envelope has no data")]
    MissingData,
}

impl ApiError {
    /// Whether the failure came from the transport layer (no HTTP status)
    pub fn is_transport(&self) -> bool {
        matches!(self, ApiError::Request(_))
    }

    /// HTTP status of a non-2xx response
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            ApiError::Request(e) => e.status(),
            _ => None,
        }
    }
}

/// Thin wrapper around `reqwest::Client` bound to the catalog base URL
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    client: reqwest::Client,
}

impl ApiClient {
    /// Create a client for the given base URL (e.g. `http://localhost:3000`)
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: reqwest::Client::builder()
                .timeout(Duration::from_secs(30))
                .cookie_store(true)
                .build()
                .unwrap_or_default(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Issue a request and decode the response envelope
    ///
    /// Non-2xx statuses and `success: false` envelopes are errors. The error
    /// is logged here; callers decide how to surface it.
    pub async fn request<T, B>(
        &self,
        method: Method,
        route: &str,
        query: &[(&str, String)],
        body: Option<&B>,
    ) -> Result<Envelope<T>, ApiError>
    where
        T: DeserializeOwned,
        B: Serialize + ?Sized,
    {
        let url = format!("{}{}", self.base_url, route);
        tracing::debug!(%method, %url, "catalog request");

        let mut builder = self
            .client
            .request(method.clone(), &url)
            .header("Content-Type", "application/json")
            .header("Accept", "application/json");
        if !query.is_empty() {
            builder = builder.query(query);
        }
        if let Some(body) = body {
            builder = builder.json(body);
        }

        let response = builder.send().await.map_err(|e| {
            tracing::error!(%method, %url, error = %e, "request failed");
            ApiError::Request(e)
        })?;

        let status = response.status();
        let text = response.text().await.map_err(|e| {
            tracing::error!(%method, %url, error = %e, "reading response failed");
            ApiError::Request(e)
        })?;

        if !status.is_success() {
            tracing::error!(%method, %url, %status, body = %text, "request failed");
            return Err(ApiError::Status { status, body: text });
        }

        let envelope: Envelope<T> = serde_json::from_str(&text).map_err(|e| {
            tracing::error!(%method, %url, body = %text, "unparseable response");
            ApiError::InvalidResponse(format!("JSON parse error: {}", e))
        })?;

        if !envelope.success {
            tracing::error!(%method, %url, message = %envelope.message, "request rejected");
            return Err(ApiError::Rejected(envelope.message));
        }

        Ok(envelope)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trailing_slash_trimmed() {
        let client = ApiClient::new("http://localhost:3000/");
        assert_eq!(client.base_url(), "http://localhost:3000");
    }

    #[test]
    fn test_error_status_accessor() {
        let err = ApiError::Status {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            body: "boom".into(),
        };
        assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
        assert!(!err.is_transport());
        assert!(ApiError::MissingData.status().is_none());
    }
}
