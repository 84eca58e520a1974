//! HTTP networking module
//!
//! Provides the outbound client used to reach the Graph API.

mod client;

pub use client::{HttpClient, UpstreamResponse};
