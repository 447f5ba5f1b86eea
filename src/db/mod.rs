pub mod account_queries;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};
use sqlx::SqlitePool;
use std::str::FromStr;
use tracing::info;

use crate::errors::AppError;
use crate::models::Entity;

/// Connect to the SQLite database named by `database_url`, creating the
/// file if it does not exist yet.
pub async fn init_pool(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);
    SqlitePoolOptions::new()
        .max_connections(5)
        .connect_with(options)
        .await
}

/// Create the schema. Idempotent, safe to run on every startup and from
/// the `db-create` admin command.
pub async fn create_schema(pool: &SqlitePool) -> Result<(), sqlx::Error> {
    info!("Initializing database schema");
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS accounts (
            id INTEGER PRIMARY KEY AUTOINCREMENT,
            name VARCHAR(64) NOT NULL,
            email VARCHAR(64) NOT NULL,
            address VARCHAR(256) NOT NULL,
            phone_number VARCHAR(32),
            date_joined DATE NOT NULL
        );
        "#,
    )
    .execute(pool)
    .await?;
    Ok(())
}

/// Identifier precondition shared by update and delete: calling either on an
/// entity the store never assigned an id to is a contract violation, caught
/// before any statement is issued.
pub fn require_id<E: Entity>(entity: &E, operation: &str) -> Result<i64, AppError> {
    entity.id().ok_or_else(|| {
        AppError::Validation(format!("{} called with empty ID field", operation))
    })
}
