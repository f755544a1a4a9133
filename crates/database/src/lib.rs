//! SQLite persistence layer for NBNexus.
//!
//! This crate provides async database operations for user accounts, the
//! fleet registry, the service facility directory, and intelligence alerts
//! using SQLx with SQLite.
//!
//! # Example
//!
//! ```no_run
//! use database::{Database, models::NewShip, ship};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Connect and run migrations
//!     let db = Database::connect("sqlite:nbnexus.db?mode=rwc").await?;
//!     db.migrate().await?;
//!
//!     // Register a ship
//!     let ship = NewShip {
//!         name: "Atlas Star".to_string(),
//!         imo_number: "9074729".to_string(),
//!         ship_type: "Bulk Carrier".to_string(),
//!         owner_email: "ops@example.com".to_string(),
//!     };
//!     ship::create_ship(db.pool(), &ship).await?;
//!
//!     Ok(())
//! }
//! ```

pub mod alert;
pub mod error;
pub mod facility;
pub mod models;
pub mod ship;
pub mod user;
pub mod validation;

pub use error::{DatabaseError, Result};
pub use models::{
    Alert, AlertRow, NewFacility, NewShip, NewUser, ServiceFacility, Ship, User,
};
pub use validation::ValidationError;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;

/// Database connection wrapper.
#[derive(Debug, Clone)]
pub struct Database {
    pool: SqlitePool,
}

impl Database {
    /// Default pool size for database connections.
    pub const DEFAULT_POOL_SIZE: u32 = 20;

    /// Connect to a SQLite database.
    ///
    /// The URL should be in the format `sqlite:path/to/db.sqlite?mode=rwc`.
    /// Use `?mode=rwc` to create the database file if it doesn't exist.
    ///
    /// # Example
    ///
    /// ```no_run
    /// # async fn example() -> database::Result<()> {
    /// // File database
    /// let db = database::Database::connect("sqlite:data/nbnexus.db?mode=rwc").await?;
    ///
    /// // In-memory database (for testing)
    /// let db = database::Database::connect("sqlite::memory:").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        Self::connect_with_pool_size(url, Self::DEFAULT_POOL_SIZE).await
    }

    /// Connect to a SQLite database with a custom pool size.
    ///
    /// In-memory URLs (`sqlite::memory:` or `mode=memory`) are pinned to a
    /// single long-lived connection; each new connection to a private
    /// in-memory database starts empty.
    pub async fn connect_with_pool_size(url: &str, pool_size: u32) -> Result<Self> {
        let options = SqliteConnectOptions::from_str(url)?
            .create_if_missing(true)
            .foreign_keys(true);

        let in_memory = is_in_memory_url(url);
        let pool_size = if in_memory { 1 } else { pool_size };

        let mut pool_options = SqlitePoolOptions::new()
            .max_connections(pool_size)
            .acquire_timeout(std::time::Duration::from_secs(30));
        if in_memory {
            pool_options = pool_options.idle_timeout(None).max_lifetime(None);
        }

        let pool = pool_options.connect_with(options).await?;

        tracing::info!(
            "Connected to database: {} (pool size: {})",
            url,
            pool_size
        );

        Ok(Self { pool })
    }

    /// Run database migrations.
    ///
    /// This should be called once after connecting to ensure the schema is up to date.
    pub async fn migrate(&self) -> Result<()> {
        tracing::info!("Running database migrations...");

        sqlx::migrate!("./migrations").run(&self.pool).await?;

        tracing::info!("Migrations complete");
        Ok(())
    }

    /// Get a reference to the connection pool.
    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Close the database connection pool.
    pub async fn close(&self) {
        self.pool.close().await;
    }
}

/// Whether a SQLite URL names an in-memory database.
fn is_in_memory_url(url: &str) -> bool {
    if url.contains(":memory:") {
        return true;
    }

    url.split_once('?').is_some_and(|(_, query)| {
        query.split('&').any(|pair| pair == "mode=memory")
    })
}
