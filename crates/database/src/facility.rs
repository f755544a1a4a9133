//! Service facility directory operations.

use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::{NewFacility, ServiceFacility};

/// List a facility, returning the assigned ID.
pub async fn create_facility(pool: &SqlitePool, facility: &NewFacility) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO facilities (name, facility_type, country, city, tier, is_verified, approvals)
        VALUES (?, ?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(&facility.name)
    .bind(&facility.facility_type)
    .bind(&facility.country)
    .bind(&facility.city)
    .bind(&facility.tier)
    .bind(facility.is_verified)
    .bind(&facility.approvals)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// List facilities in a country.
///
/// Ordered by tier descending so paid listings ("platinum") come before
/// "free" ones, then by insertion order.
pub async fn list_facilities_by_country(
    pool: &SqlitePool,
    country: &str,
) -> Result<Vec<ServiceFacility>> {
    let facilities = sqlx::query_as::<_, ServiceFacility>(
        r#"
        SELECT id, name, facility_type, country, city, tier, is_verified, approvals
        FROM facilities
        WHERE country = ?
        ORDER BY tier DESC, id
        "#,
    )
    .bind(country)
    .fetch_all(pool)
    .await?;

    Ok(facilities)
}

/// Count total facilities.
pub async fn count_facilities(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM facilities")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
