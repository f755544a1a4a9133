//! User account operations.

use sqlx::SqlitePool;

use crate::error::{DatabaseError, Result};
use crate::models::{NewUser, User};

/// Create a new user, returning the assigned ID.
///
/// Fails with [`DatabaseError::AlreadyExists`] if the email is taken.
pub async fn create_user(pool: &SqlitePool, user: &NewUser) -> Result<i64> {
    let result = sqlx::query(
        r#"
        INSERT INTO users (email, hashed_password, full_name)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(&user.email)
    .bind(&user.hashed_password)
    .bind(&user.full_name)
    .execute(pool)
    .await
    .map_err(|e| {
        if let sqlx::Error::Database(ref db_err) = e {
            if db_err.is_unique_violation() {
                return DatabaseError::AlreadyExists {
                    entity: "User",
                    id: user.email.clone(),
                };
            }
        }
        DatabaseError::Sqlx(e)
    })?;

    Ok(result.last_insert_rowid())
}

/// Get a user by email.
pub async fn get_user_by_email(pool: &SqlitePool, email: &str) -> Result<User> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, email, hashed_password, full_name, is_active
        FROM users
        WHERE email = ?
        "#,
    )
    .bind(email)
    .fetch_optional(pool)
    .await?
    .ok_or_else(|| DatabaseError::NotFound {
        entity: "User",
        id: email.to_string(),
    })
}

/// Count total users.
pub async fn count_users(pool: &SqlitePool) -> Result<i64> {
    let count = sqlx::query_scalar::<_, i64>(
        r#"
        SELECT COUNT(*) FROM users
        "#,
    )
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

    fn captain() -> NewUser {
        NewUser {
            email: "captain@example.com".to_string(),
            hashed_password: "hash".to_string(),
            full_name: "Amina Haddad".to_string(),
        }
    }

    #[tokio::test]
    async fn test_create_and_get_user() {
        let db = test_db().await;

        let id = create_user(db.pool(), &captain()).await.unwrap();
        let fetched = get_user_by_email(db.pool(), "captain@example.com")
            .await
            .unwrap();

        assert_eq!(fetched.id, id);
        assert_eq!(fetched.full_name, "Amina Haddad");
        assert!(fetched.is_active);
        assert_eq!(count_users(db.pool()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_duplicate_email_rejected() {
        let db = test_db().await;

        create_user(db.pool(), &captain()).await.unwrap();
        let result = create_user(db.pool(), &captain()).await;

        assert!(matches!(
            result,
            Err(DatabaseError::AlreadyExists { entity: "User", .. })
        ));
        assert!(result.unwrap_err().is_conflict());
        assert_eq!(count_users(db.pool()).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn test_get_unknown_user() {
        let db = test_db().await;
        let result = get_user_by_email(db.pool(), "nobody@example.com").await;
        assert!(matches!(result, Err(DatabaseError::NotFound { .. })));
    }
}
