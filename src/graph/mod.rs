//! Interest search against the Facebook Graph API
//!
//! Holds the request and response models, the [`InterestSource`] seam the
//! web layer calls through, and [`GraphApi`], the upstream implementation.

mod api;
mod models;
mod traits;

pub use api::GraphApi;
pub use models::*;
pub use traits::InterestSource;
