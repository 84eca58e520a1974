//! Web server module
//!
//! Provides the HTTP API of the interest proxy.

mod handlers;
mod routes;
mod state;

pub use handlers::{HealthResponse, InterestsParams};
pub use routes::create_router;
pub use state::AppState;
