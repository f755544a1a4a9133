//! Fleet registry routes.

use axum::extract::{Path, State};
use axum::Json;
use database::validation::{self, MAX_LABEL_LENGTH};
use database::{NewShip, Ship};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::Result;
use crate::extract::JsonBody;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct ShipRequest {
    pub name: String,
    pub imo: String,
    #[serde(rename = "type")]
    pub ship_type: String,
    pub owner_email: String,
}

#[derive(Serialize)]
pub struct ShipResponse {
    pub status: &'static str,
    pub ship: String,
}

/// Register a ship under an owner.
pub async fn add_ship(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<ShipRequest>,
) -> Result<Json<ShipResponse>> {
    validation::validate_email(&req.owner_email)?;
    let ship = NewShip {
        name: validation::validate_required("name", &req.name, MAX_LABEL_LENGTH)?.to_string(),
        imo_number: validation::validate_required("imo", &req.imo, MAX_LABEL_LENGTH)?.to_string(),
        ship_type: validation::validate_required("type", &req.ship_type, MAX_LABEL_LENGTH)?
            .to_string(),
        owner_email: req.owner_email.trim().to_string(),
    };

    let id = database::ship::create_ship(state.db.pool(), &ship).await?;
    info!(id, name = %ship.name, owner = %ship.owner_email, "Ship added");

    Ok(Json(ShipResponse {
        status: "Ship Added",
        ship: ship.name,
    }))
}

/// List ships owned by an email address.
pub async fn my_fleet(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<Ship>>> {
    let ships = database::ship::list_ships_by_owner(state.db.pool(), &email).await?;
    Ok(Json(ships))
}
