//! Fleet registry operations.

use sqlx::SqlitePool;

use crate::error::Result;
use crate::models::{NewShip, Ship};

/// Register a ship, returning the assigned ID.
pub async fn create_ship(pool: &SqlitePool, ship: &NewShip) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO ships (name, imo_number, ship_type, owner_email)
        VALUES (?, ?, ?, ?)
        "#,
    )
    .bind(&ship.name)
    .bind(&ship.imo_number)
    .bind(&ship.ship_type)
    .bind(&ship.owner_email)
    .execute(pool)
    .await?;

    Ok(result.last_insert_rowid())
}

/// List the ships owned by an email address, oldest first.
pub async fn list_ships_by_owner(pool: &SqlitePool, owner_email: &str) -> Result<Vec<Ship>> {
    let ships = sqlx::query_as::<_, Ship>(
        r#"
        SELECT id, name, imo_number, ship_type, owner_email
        FROM ships
        WHERE owner_email = ?
        ORDER BY id
        "#,
    )
    .bind(owner_email)
    .fetch_all(pool)
    .await?;

    Ok(ships)
}

/// Count total ships.
pub async fn count_ships(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM ships")
        .fetch_one(pool)
        .await?;

    Ok(count)
}
