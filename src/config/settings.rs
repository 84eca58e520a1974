//! Settings structures for the interest proxy

use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;

/// Main settings structure, read once at startup
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub graph: GraphSettings,
}

impl Settings {
    /// Load settings from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        let settings: Settings = serde_yaml::from_str(&content)?;
        Ok(settings)
    }

    /// Merge with process environment variables
    pub fn merge_env(&mut self) {
        self.merge_vars(|key| std::env::var(key).ok());
    }

    /// Merge with variables resolved by `lookup`
    pub fn merge_vars<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(val) = lookup("FB_GRAPH_VERSION") {
            self.graph.version = val;
        }
        if let Some(val) = lookup("FB_ACCESS_TOKEN") {
            self.graph.access_token = Some(val).filter(|t| !t.is_empty());
        }
        if let Some(val) = lookup("FB_GRAPH_BASE_URL") {
            self.graph.base_url = val;
        }
        if let Some(val) = lookup("FB_REQUEST_TIMEOUT") {
            if let Ok(timeout) = val.parse() {
                self.graph.request_timeout = timeout;
            }
        }
        if let Some(val) = lookup("PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Some(val) = lookup("BIND_ADDRESS") {
            self.server.bind_address = val;
        }
    }
}

/// Listener settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Server port
    pub port: u16,
    /// Bind address
    pub bind_address: String,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: 3000,
            bind_address: "0.0.0.0".to_string(),
        }
    }
}

/// Upstream Graph API settings
#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphSettings {
    /// API version path segment, e.g. `v20.0`
    pub version: String,
    /// Server-held credential appended to every upstream call
    pub access_token: Option<String>,
    /// Scheme and host of the Graph API
    pub base_url: String,
    /// Upstream request timeout in seconds
    pub request_timeout: f64,
}

impl GraphSettings {
    /// The configured token, if any and non-empty
    pub fn token(&self) -> Option<&str> {
        self.access_token.as_deref().filter(|t| !t.is_empty())
    }
}

impl Default for GraphSettings {
    fn default() -> Self {
        Self {
            version: "v20.0".to_string(),
            access_token: None,
            base_url: "https://graph.facebook.com".to_string(),
            request_timeout: 10.0,
        }
    }
}

// Keeps the token out of logs.
impl fmt::Debug for GraphSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphSettings")
            .field("version", &self.version)
            .field("access_token", &self.token().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("request_timeout", &self.request_timeout)
            .finish()
    }
}
