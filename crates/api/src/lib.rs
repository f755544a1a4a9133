//! NBNexus HTTP API.
//!
//! Accounts, the fleet registry, the service facility directory, and the
//! incident classifier, served as JSON over axum.

pub mod config;
pub mod error;
pub mod extract;
pub mod password;
pub mod routes;
pub mod state;

use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

pub use config::{Config, ConfigError};
pub use error::ApiError;
pub use state::AppState;

/// Build the application with middleware and state attached.
pub fn app(state: AppState) -> Router {
    routes::router()
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
