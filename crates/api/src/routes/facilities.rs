//! Service facility directory routes.

use axum::extract::{Path, State};
use axum::Json;
use database::validation::{self, MAX_LABEL_LENGTH};
use database::{NewFacility, ServiceFacility};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::extract::JsonBody;
use crate::state::AppState;

/// Listing tiers, highest first.
pub const TIERS: &[&str] = &["platinum", "free"];

#[derive(Deserialize)]
pub struct FacilityRequest {
    pub name: String,
    pub facility_type: String,
    pub country: String,
    pub city: String,
    #[serde(default = "default_tier")]
    pub tier: String,
    #[serde(default)]
    pub is_verified: bool,
    #[serde(default)]
    pub approvals: String,
}

fn default_tier() -> String {
    "free".to_string()
}

#[derive(Serialize)]
pub struct FacilityResponse {
    pub status: &'static str,
    pub facility: String,
}

#[derive(Serialize)]
pub struct StatusResponse {
    pub status: &'static str,
}

/// List a facility in the directory.
pub async fn add_facility(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<FacilityRequest>,
) -> Result<Json<FacilityResponse>> {
    let facility = NewFacility {
        name: validation::validate_required("name", &req.name, MAX_LABEL_LENGTH)?.to_string(),
        facility_type: validation::validate_required(
            "facility_type",
            &req.facility_type,
            MAX_LABEL_LENGTH,
        )?
        .to_string(),
        country: validation::validate_required("country", &req.country, MAX_LABEL_LENGTH)?
            .to_string(),
        city: validation::validate_required("city", &req.city, MAX_LABEL_LENGTH)?.to_string(),
        tier: validation::validate_one_of("tier", &req.tier, TIERS)?.to_string(),
        is_verified: req.is_verified,
        approvals: req.approvals.trim().to_string(),
    };

    let id = database::facility::create_facility(state.db.pool(), &facility).await?;
    info!(id, name = %facility.name, country = %facility.country, "Facility added");

    Ok(Json(FacilityResponse {
        status: "Facility Added",
        facility: facility.name,
    }))
}

/// Seed the directory with the Casablanca demo subscriber.
pub async fn create_morocco_test(State(state): State<AppState>) -> Result<Json<StatusResponse>> {
    let id = database::facility::create_facility(state.db.pool(), &morocco_subscriber()).await?;
    info!(id, "Marketplace demo data loaded");

    Ok(Json(StatusResponse {
        status: "Marketplace Data Loaded",
    }))
}

/// Facilities in a country, platinum listings first.
pub async fn find_service(
    State(state): State<AppState>,
    Path(country): Path<String>,
) -> Result<Json<Vec<ServiceFacility>>> {
    let facilities = database::facility::list_facilities_by_country(state.db.pool(), &country).await?;
    Ok(Json(facilities))
}

fn morocco_subscriber() -> NewFacility {
    NewFacility {
        name: "Casablanca Marine Safety (Subscriber)".to_string(),
        facility_type: "LSA Service".to_string(),
        country: "Morocco".to_string(),
        city: "Casablanca".to_string(),
        tier: "platinum".to_string(),
        is_verified: true,
        approvals: "ABS,LR".to_string(),
    }
}
