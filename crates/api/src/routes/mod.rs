//! Route handlers for the API.

pub mod auth;
pub mod facilities;
pub mod fleet;
pub mod health;
pub mod intel;

use axum::routing::{get, post};
use axum::Router;

use crate::state::AppState;

/// Build the router with all routes.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(health::root))
        .route("/health", get(health::health))
        // Accounts
        .route("/register/", post(auth::register))
        .route("/login/", post(auth::login))
        // Fleet
        .route("/add-ship/", post(fleet::add_ship))
        .route("/my-fleet/:email", get(fleet::my_fleet))
        // Service directory
        .route("/add-facility/", post(facilities::add_facility))
        .route("/create-morocco-test/", post(facilities::create_morocco_test))
        .route("/find-service/:country", get(facilities::find_service))
        // Intelligence
        .route("/check-risk/:region", get(intel::check_risk))
        .route("/analyze-intel/", post(intel::analyze_intel))
}
