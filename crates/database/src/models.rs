//! Database models.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A registered operator account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct User {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Login email, unique across users.
    pub email: String,
    /// Encoded password hash (see the api crate's password module).
    #[serde(skip_serializing)]
    pub hashed_password: String,
    /// Display name.
    pub full_name: String,
    /// Whether the account is active.
    pub is_active: bool,
}

/// Fields required to register a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub hashed_password: String,
    pub full_name: String,
}

/// A ship in an owner's fleet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Ship {
    /// Auto-incrementing ID.
    pub id: i64,
    /// Ship name.
    pub name: String,
    /// IMO number as entered by the owner.
    pub imo_number: String,
    /// Vessel type (e.g., "Bulk Carrier").
    pub ship_type: String,
    /// Email of the owning user.
    pub owner_email: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShip {
    pub name: String,
    pub imo_number: String,
    pub ship_type: String,
    pub owner_email: String,
}

/// A service facility listed in the marketplace directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct ServiceFacility {
    /// Auto-incrementing ID.
    pub id: i64,
    pub name: String,
    /// Kind of service offered (e.g., "LSA Service").
    pub facility_type: String,
    pub country: String,
    pub city: String,
    /// Listing tier, "platinum" or "free".
    pub tier: String,
    /// Whether the listing has been verified.
    pub is_verified: bool,
    /// Comma-separated class society approvals (e.g., "ABS,LR").
    pub approvals: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewFacility {
    pub name: String,
    pub facility_type: String,
    pub country: String,
    pub city: String,
    pub tier: String,
    pub is_verified: bool,
    pub approvals: String,
}

/// A stored intelligence alert. Rows are never updated once written.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct Alert {
    /// Auto-incrementing ID.
    pub id: i64,
    pub headline: String,
    /// One of "LOW", "MEDIUM", "HIGH", "CRITICAL".
    pub risk_level: String,
    pub region: String,
    pub affected_country: String,
    pub ai_advice: String,
    /// Origin marker, "AI Analysis" for classifier output.
    pub source_url: String,
}

/// Fields of an alert about to be inserted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AlertRow<'a> {
    pub headline: &'a str,
    pub risk_level: &'a str,
    pub region: &'a str,
    pub affected_country: &'a str,
    pub ai_advice: &'a str,
    pub source_url: &'a str,
}
