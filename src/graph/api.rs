//! Facebook Graph API interest search

use super::models::{NormalizedInterest, SearchQuery, UpstreamEnvelope};
use super::traits::InterestSource;
use crate::config::GraphSettings;
use crate::error::ProxyError;
use crate::network::HttpClient;
use async_trait::async_trait;
use tracing::{debug, warn};
use url::Url;

/// Graph API client for `adinterest` searches
pub struct GraphApi {
    client: HttpClient,
    base_url: String,
    version: String,
    access_token: Option<String>,
}

impl GraphApi {
    pub fn new(client: HttpClient, settings: &GraphSettings) -> Self {
        Self {
            client,
            base_url: settings.base_url.trim_end_matches('/').to_string(),
            version: settings.version.clone(),
            access_token: settings.token().map(str::to_string),
        }
    }

    /// Endpoint URL without any query parameters
    fn endpoint(&self, query: &SearchQuery) -> Result<Url, ProxyError> {
        let raw = format!("{}/{}/{}", self.base_url, self.version, query.method.path());
        Url::parse(&raw).map_err(|e| ProxyError::Unexpected(format!("Invalid URL {}: {}", raw, e)))
    }

    /// Full request URL, with the access token appended last
    pub fn build_url(&self, query: &SearchQuery, access_token: &str) -> Result<Url, ProxyError> {
        let mut url = self.endpoint(query)?;
        url.query_pairs_mut()
            .extend_pairs(query.upstream_params())
            .append_pair("access_token", access_token);
        Ok(url)
    }

    /// Request URL as written to logs, with the token masked
    pub fn redacted_url(&self, query: &SearchQuery) -> Result<Url, ProxyError> {
        self.build_url(query, "REDACTED")
    }
}

#[async_trait]
impl InterestSource for GraphApi {
    fn name(&self) -> &str {
        "facebook graph"
    }

    async fn search(&self, query: &SearchQuery) -> Result<Vec<NormalizedInterest>, ProxyError> {
        let token = self
            .access_token
            .as_deref()
            .ok_or_else(ProxyError::missing_token)?;

        let url = self.build_url(query, token)?;
        debug!(url = %self.redacted_url(query)?, "Calling Graph API");

        let response = self.client.get(url).await?;
        if !response.is_success() {
            warn!("Graph API returned {}", response.status);
            return Err(ProxyError::Upstream {
                status: response.status,
                body: response.text,
            });
        }

        let envelope: UpstreamEnvelope = response.json()?;
        Ok(envelope.into_interests())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::SearchMethod;
    use serde_json::json;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn settings(base_url: &str, token: Option<&str>) -> GraphSettings {
        GraphSettings {
            base_url: base_url.to_string(),
            access_token: token.map(str::to_string),
            ..Default::default()
        }
    }

    fn api(base_url: &str, token: Option<&str>) -> GraphApi {
        GraphApi::new(HttpClient::new().unwrap(), &settings(base_url, token))
    }

    #[test]
    fn test_build_url() {
        let api = api("https://graph.facebook.com/", Some("tok"));
        let query = SearchQuery::new("coffee").with_limit("5");
        let url = api.build_url(&query, "tok").unwrap();

        assert_eq!(
            url.as_str(),
            "https://graph.facebook.com/v20.0/search?type=adinterest&q=coffee&limit=5&locale=en_US&access_token=tok"
        );
    }

    #[test]
    fn test_redacted_url_masks_token() {
        let api = api("https://graph.facebook.com", Some("very-secret-token"));
        let url = api.redacted_url(&SearchQuery::new("coffee")).unwrap();

        assert!(!url.as_str().contains("very-secret-token"));
        assert!(url.as_str().ends_with("&access_token=REDACTED"));
        assert_eq!(url.path(), "/v20.0/search");
    }

    #[test]
    fn test_build_url_targeting_and_encoding() {
        let api = api("https://graph.facebook.com", Some("tok"));
        let query = SearchQuery::new("cold brew & co")
            .with_locale("")
            .with_method(SearchMethod::TargetingSearch);
        let url = api.build_url(&query, "tok").unwrap();

        assert_eq!(url.path(), "/v20.0/targetingsearch");
        let pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        let keys: Vec<&str> = pairs.iter().map(|(k, _)| k.as_str()).collect();
        assert_eq!(keys, vec!["type", "q", "limit", "access_token"]);
        assert_eq!(pairs[1].1, "cold brew & co");
    }

    #[tokio::test]
    async fn test_search_normalizes_response() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v20.0/search"))
            .and(query_param("type", "adinterest"))
            .and(query_param("q", "coffee"))
            .and(query_param("limit", "5"))
            .and(query_param("locale", "en_US"))
            .and(query_param("access_token", "tok"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "data": [{
                    "id": "123",
                    "name": "Coffee",
                    "path": ["Food", "Drink"],
                    "audience_size": 1000000
                }]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let api = api(&server.uri(), Some("tok"));
        let interests = api
            .search(&SearchQuery::new("coffee").with_limit("5"))
            .await
            .unwrap();

        assert_eq!(interests.len(), 1);
        assert_eq!(interests[0].id, Some(json!("123")));
        assert_eq!(interests[0].topic_path, vec!["Food", "Drink"]);
        assert_eq!(interests[0].audience_size, Some(serde_json::Number::from(1_000_000u64)));
    }

    #[tokio::test]
    async fn test_targetingsearch_route() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v20.0/targetingsearch"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"data": []})))
            .expect(1)
            .mount(&server)
            .await;

        let api = api(&server.uri(), Some("tok"));
        let query = SearchQuery::new("tea").with_method(SearchMethod::TargetingSearch);
        let interests = api.search(&query).await.unwrap();
        assert!(interests.is_empty());
    }

    #[tokio::test]
    async fn test_upstream_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/v20.0/search"))
            .respond_with(ResponseTemplate::new(400).set_body_string("Invalid parameter"))
            .expect(1)
            .mount(&server)
            .await;

        let api = api(&server.uri(), Some("tok"));
        let err = api.search(&SearchQuery::new("coffee")).await.unwrap_err();

        assert!(matches!(err, ProxyError::Upstream { status: 400, .. }));
        assert_eq!(err.to_string(), "Facebook API error 400: Invalid parameter");
    }

    #[tokio::test]
    async fn test_missing_token_skips_upstream() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let api = api(&server.uri(), None);
        let err = api.search(&SearchQuery::new("coffee")).await.unwrap_err();
        assert_eq!(err.to_string(), "No Access Token");
    }

    #[tokio::test]
    async fn test_invalid_json_is_unexpected() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
            .mount(&server)
            .await;

        let api = api(&server.uri(), Some("tok"));
        let err = api.search(&SearchQuery::new("coffee")).await.unwrap_err();
        assert!(matches!(err, ProxyError::Unexpected(_)));
    }

    #[tokio::test]
    async fn test_network_error_hides_token() {
        // nothing listens on port 9 locally
        let api = api("http://127.0.0.1:9", Some("very-secret-token"));
        let err = api.search(&SearchQuery::new("coffee")).await.unwrap_err();

        assert!(matches!(err, ProxyError::Unexpected(_)));
        assert!(!err.to_string().contains("very-secret-token"));
    }
}
