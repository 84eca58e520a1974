//! Interest search data models

use serde::{Deserialize, Serialize};
use serde_json::{Number, Value};

/// Constant `type` parameter sent with every interest search
pub const SEARCH_TYPE: &str = "adinterest";

/// Default number of records requested upstream
pub const DEFAULT_LIMIT: &str = "20";

/// Default upstream locale
pub const DEFAULT_LOCALE: &str = "en_US";

/// Upstream search endpoint
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SearchMethod {
    #[default]
    Search,
    TargetingSearch,
}

impl SearchMethod {
    /// Parse from the `method` query parameter.
    ///
    /// Only the exact string `targetingsearch` selects the targeting
    /// endpoint; anything else, including unknown values, falls back to
    /// plain search.
    pub fn from_param(value: Option<&str>) -> Self {
        match value {
            Some("targetingsearch") => Self::TargetingSearch,
            _ => Self::Search,
        }
    }

    /// Path segment of the upstream endpoint
    pub fn path(&self) -> &'static str {
        match self {
            Self::Search => "search",
            Self::TargetingSearch => "targetingsearch",
        }
    }
}

/// A validated interest search request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    /// Search text, never empty
    pub q: String,
    /// Maximum results, forwarded as-is
    pub limit: String,
    /// Locale, forwarded as-is
    pub locale: String,
    /// Endpoint to call
    pub method: SearchMethod,
}

impl SearchQuery {
    /// Create a query with default limit, locale and method
    pub fn new(q: impl Into<String>) -> Self {
        Self {
            q: q.into(),
            limit: DEFAULT_LIMIT.to_string(),
            locale: DEFAULT_LOCALE.to_string(),
            method: SearchMethod::default(),
        }
    }

    pub fn with_limit(mut self, limit: impl Into<String>) -> Self {
        self.limit = limit.into();
        self
    }

    pub fn with_locale(mut self, locale: impl Into<String>) -> Self {
        self.locale = locale.into();
        self
    }

    pub fn with_method(mut self, method: SearchMethod) -> Self {
        self.method = method;
        self
    }

    /// Upstream query parameters in request order, empty values dropped.
    /// The access token is not included.
    pub fn upstream_params(&self) -> Vec<(&'static str, &str)> {
        [
            ("type", SEARCH_TYPE),
            ("q", self.q.as_str()),
            ("limit", self.limit.as_str()),
            ("locale", self.locale.as_str()),
        ]
        .into_iter()
        .filter(|(_, v)| !v.is_empty())
        .collect()
    }
}

/// Top-level upstream response body
#[derive(Debug, Default, Deserialize)]
pub struct UpstreamEnvelope {
    #[serde(default)]
    pub data: Option<Vec<UpstreamInterestRecord>>,
}

impl UpstreamEnvelope {
    /// Normalize every record, keeping upstream order
    pub fn into_interests(self) -> Vec<NormalizedInterest> {
        self.data
            .unwrap_or_default()
            .into_iter()
            .map(NormalizedInterest::from)
            .collect()
    }
}

/// One interest as returned by the Graph API.
///
/// `id` and `name` are passed through untouched, whatever JSON type the
/// upstream used for them.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct UpstreamInterestRecord {
    #[serde(default)]
    pub id: Option<Value>,
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub path: Option<Vec<String>>,
    #[serde(default)]
    pub audience_size: Option<Number>,
}

/// Simplified interest returned to callers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NormalizedInterest {
    pub id: Option<Value>,
    pub name: Option<Value>,
    pub topic_path: Vec<String>,
    pub audience_size: Option<Number>,
}

impl From<UpstreamInterestRecord> for NormalizedInterest {
    fn from(record: UpstreamInterestRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            topic_path: record.path.unwrap_or_default(),
            // a zero audience is reported as unknown
            audience_size: record.audience_size.filter(|size| size.as_f64() != Some(0.0)),
        }
    }
}

/// Body of a successful `/interests` response
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InterestsResponse {
    pub count: usize,
    pub data: Vec<NormalizedInterest>,
}

impl InterestsResponse {
    pub fn new(data: Vec<NormalizedInterest>) -> Self {
        Self {
            count: data.len(),
            data,
        }
    }
}
