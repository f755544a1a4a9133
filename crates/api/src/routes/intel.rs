//! Intelligence routes: incident classification and regional risk lookup.

use axum::extract::{Path, State};
use axum::Json;
use database::Alert;
use intel_engine::Analysis;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::extract::JsonBody;
use crate::state::AppState;

#[derive(Deserialize)]
pub struct IntelRequest {
    pub raw_text: String,
}

#[derive(Serialize)]
pub struct IntelResponse {
    pub status: &'static str,
    pub analysis: Analysis,
}

/// Regional risk summary.
#[derive(Serialize)]
#[serde(untagged)]
pub enum RiskCheck {
    Safe {
        status: &'static str,
        message: &'static str,
    },
    Warning {
        status: &'static str,
        alerts: Vec<Alert>,
    },
}

/// Classify a free-text incident report and record it as an alert.
pub async fn analyze_intel(
    State(state): State<AppState>,
    JsonBody(req): JsonBody<IntelRequest>,
) -> Result<Json<IntelResponse>> {
    let report = state.intel.analyze(&req.raw_text).await?;

    Ok(Json(IntelResponse {
        status: "Intel Processed",
        analysis: report.analysis,
    }))
}

/// Report whether any alerts exist for a region.
pub async fn check_risk(
    State(state): State<AppState>,
    Path(region): Path<String>,
) -> Result<Json<RiskCheck>> {
    let alerts = database::alert::list_alerts_by_region(state.db.pool(), &region).await?;

    if alerts.is_empty() {
        return Ok(Json(RiskCheck::Safe {
            status: "SAFE",
            message: "No active threats detected.",
        }));
    }

    Ok(Json(RiskCheck::Warning {
        status: "WARNING",
        alerts,
    }))
}
