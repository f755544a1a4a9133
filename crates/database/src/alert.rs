//! Intelligence alert storage.
//!
//! Alerts are append-only: there is no update or delete.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::{Alert, AlertRow};

/// Insert an alert, returning the assigned ID.
pub async fn insert_alert(pool: &SqlitePool, alert: &AlertRow<'_>) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO alerts (headline, risk_level, region, affected_country, ai_advice, source_url)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(alert.headline)
    .bind(alert.risk_level)
    .bind(alert.region)
    .bind(alert.affected_country)
    .bind(alert.ai_advice)
    .bind(alert.source_url)
    .execute(pool)
    .await?;

    let id = result.last_insert_rowid();
    tracing::debug!(id, region = alert.region, "Inserted alert");
    Ok(id)
}

/// Get an alert by ID.
pub async fn get_alert(pool: &SqlitePool, id: i64) -> Result<Alert> {
    sqlx::query_as::<_, Alert>(
        r#"
        SELECT id, headline, risk_level, region, affected_country, ai_advice, source_url
        FROM alerts
        WHERE id = ?
        "#,
    )
    .bind(id)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "Alert",
        id: id.to_string(),
    })
}

/// List alerts recorded for a region, oldest first.
pub async fn list_alerts_by_region(pool: &SqlitePool, region: &str) -> Result<Vec<Alert>> {
    let alerts = sqlx::query_as::<_, Alert>(
        r#"
        SELECT id, headline, risk_level, region, affected_country, ai_advice, source_url
        FROM alerts
        WHERE region = ?
        ORDER BY id
        "#,
    )
    .bind(region)
    .fetch_all(pool)
    .await?;

    Ok(alerts)
}

/// Count total alerts.
pub async fn count_alerts(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM alerts")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Database;

    async fn test_db() -> Database {
        let db = Database::connect("sqlite::memory:").await.unwrap();
        db.migrate().await.unwrap();
        db
    }

    fn red_sea() -> AlertRow<'static> {
        AlertRow {
            headline: "AERIAL THREAT DETECTED",
            risk_level: "HIGH",
            region: "Red Sea",
            affected_country: "Red Sea",
            ai_advice: "EVASIVE MANEUVERS: Alter course.",
            source_url: "AI Analysis",
        }
    }

    #[tokio::test]
    async fn test_insert_and_get_alert() {
        let db = test_db().await;

        let id = insert_alert(db.pool(), &red_sea()).await.unwrap();
        let alert = get_alert(db.pool(), id).await.unwrap();

        assert_eq!(alert.headline, "AERIAL THREAT DETECTED");
        assert_eq!(alert.risk_level, "HIGH");
        assert_eq!(alert.affected_country, alert.region);
        assert_eq!(alert.source_url, "AI Analysis");
    }

    #[tokio::test]
    async fn test_each_insert_is_a_new_row() {
        let db = test_db().await;

        let first = insert_alert(db.pool(), &red_sea()).await.unwrap();
        let second = insert_alert(db.pool(), &red_sea()).await.unwrap();

        assert_ne!(first, second);
        assert_eq!(count_alerts(db.pool()).await.unwrap(), 2);
        assert_eq!(list_alerts_by_region(db.pool(), "Red Sea").await.unwrap().len(), 2);
        assert!(list_alerts_by_region(db.pool(), "Global").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_alert() {
        let db = test_db().await;
        let result = get_alert(db.pool(), 42).await;
        assert!(matches!(result, Err(DatabaseError::NotFound { entity: "Alert", .. })));
    }
}
