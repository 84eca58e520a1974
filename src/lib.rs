//! Interest Proxy: a small HTTP front for ad interest search
//!
//! Accepts `/interests` queries, forwards them to the Facebook Graph API
//! with a server-held access token and returns a simplified list of
//! interest records.

pub mod config;
pub mod error;
pub mod graph;
pub mod network;
pub mod web;

pub use config::Settings;
pub use error::ProxyError;
pub use graph::{GraphApi, InterestSource, NormalizedInterest, SearchQuery};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
