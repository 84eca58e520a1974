//! HTTP client for calls to the Graph API

use crate::config::GraphSettings;
use anyhow::Result;
use reqwest::{Client, Response};
use std::time::Duration;
use url::Url;

/// Raw upstream response
#[derive(Debug)]
pub struct UpstreamResponse {
    /// HTTP status code
    pub status: u16,
    /// Response body as text
    pub text: String,
}

impl UpstreamResponse {
    /// Parse response as JSON
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_str(&self.text)
    }

    /// Check if response is successful (2xx)
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// HTTP client wrapper shared by all requests
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Create a new HTTP client with default settings
    pub fn new() -> Result<Self> {
        Self::with_settings(&GraphSettings::default())
    }

    /// Create a new HTTP client with custom settings
    pub fn with_settings(settings: &GraphSettings) -> Result<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs_f64(settings.request_timeout))
            .user_agent(concat!("interest-proxy/", env!("CARGO_PKG_VERSION")))
            .gzip(true)
            .brotli(true)
            .build()?;

        Ok(Self { client })
    }

    /// Simple GET request
    pub async fn get(&self, url: Url) -> reqwest::Result<UpstreamResponse> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await?;

        Self::parse_response(response).await
    }

    async fn parse_response(response: Response) -> reqwest::Result<UpstreamResponse> {
        let status = response.status().as_u16();
        let text = response.text().await?;

        Ok(UpstreamResponse { status, text })
    }
}
