//! HTTP request handlers

use super::state::AppState;
use crate::error::ProxyError;
use crate::graph::{InterestsResponse, SearchMethod, SearchQuery, DEFAULT_LIMIT, DEFAULT_LOCALE};
use axum::{
    extract::{rejection::QueryRejection, Query, State},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

/// Query parameters for `/interests`
#[derive(Debug, Default, Deserialize)]
pub struct InterestsParams {
    /// Search text
    pub q: Option<String>,
    /// Maximum results
    pub limit: Option<String>,
    /// Locale, e.g. `en_US`
    pub locale: Option<String>,
    /// `search` or `targetingsearch`
    pub method: Option<String>,
}

impl InterestsParams {
    /// Validate and apply defaults.
    ///
    /// Defaults only fill in absent parameters; a parameter sent with an
    /// empty value stays empty and is later left out of the upstream call.
    pub fn into_query(self) -> Result<SearchQuery, ProxyError> {
        let q = match self.q {
            Some(q) if !q.is_empty() => q,
            _ => return Err(ProxyError::missing_query()),
        };

        Ok(SearchQuery::new(q)
            .with_limit(self.limit.unwrap_or_else(|| DEFAULT_LIMIT.to_string()))
            .with_locale(self.locale.unwrap_or_else(|| DEFAULT_LOCALE.to_string()))
            .with_method(SearchMethod::from_param(self.method.as_deref())))
    }
}

/// Health check response
#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub ok: bool,
    pub time: String,
}

/// Health check handler
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
    })
}

/// Interest search handler
pub async fn interests(
    State(state): State<AppState>,
    params: Result<Query<InterestsParams>, QueryRejection>,
) -> Result<Json<InterestsResponse>, ProxyError> {
    let Query(params) = params.map_err(|e| ProxyError::Validation(e.body_text()))?;
    let query = params.into_query()?;

    let data = state.source.search(&query).await.map_err(|e| {
        warn!("Interest search for {:?} via {} failed: {}", query.q, state.source.name(), e);
        e
    })?;

    info!("Interest search for {:?} returned {} results", query.q, data.len());
    Ok(Json(InterestsResponse::new(data)))
}
