//! Errors surfaced by the `/interests` endpoint

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

/// A failure while serving an interest search.
///
/// Every variant is rendered to the caller as `{ "error": <message> }`.
#[derive(Debug, Error)]
pub enum ProxyError {
    /// Missing or malformed caller input
    #[error("{0}")]
    Validation(String),

    /// The server is not set up to call the upstream API
    #[error("{0}")]
    Configuration(String),

    /// The Graph API answered with a non-success status
    #[error("Facebook API error {status}: {body}")]
    Upstream { status: u16, body: String },

    /// Network or decoding failure
    #[error("{0}")]
    Unexpected(String),
}

impl ProxyError {
    pub fn missing_query() -> Self {
        Self::Validation("Missing q".to_string())
    }

    pub fn missing_token() -> Self {
        Self::Configuration("No Access Token".to_string())
    }

    /// Convert the error to an HTTP status code.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Configuration(_) | Self::Upstream { .. } | Self::Unexpected(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<reqwest::Error> for ProxyError {
    fn from(err: reqwest::Error) -> Self {
        // the request URL carries the access token
        Self::Unexpected(err.without_url().to_string())
    }
}

impl From<serde_json::Error> for ProxyError {
    fn from(err: serde_json::Error) -> Self {
        Self::Unexpected(err.to_string())
    }
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let body = serde_json::json!({ "error": self.to_string() });
        (self.status_code(), Json(body)).into_response()
    }
}
