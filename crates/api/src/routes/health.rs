//! Liveness endpoints.

use axum::Json;
use serde::Serialize;

#[derive(Serialize)]
pub struct Health {
    pub status: String,
}

#[derive(Serialize)]
pub struct Banner {
    pub message: String,
}

/// Service banner.
pub async fn root() -> Json<Banner> {
    Json(Banner {
        message: "NBNexus Systems Online".to_string(),
    })
}

/// Health check endpoint.
pub async fn health() -> Json<Health> {
    Json(Health {
        status: "ok".to_string(),
    })
}
