use sqlx::SqlitePool;
use tracing::info;

use crate::db::require_id;
use crate::errors::AppError;
use crate::models::{Account, Entity};

/// Persists a new account. Any caller-supplied id is discarded; the store
/// assigns the identifier and it is written back into the entity.
pub async fn create(pool: &SqlitePool, account: &mut Account) -> Result<(), AppError> {
    info!("Creating {}", account.name);
    account.id = None;
    let result = sqlx::query(
        "INSERT INTO accounts (name, email, address, phone_number, date_joined)
         VALUES (?, ?, ?, ?, ?)",
    )
    .bind(&account.name)
    .bind(&account.email)
    .bind(&account.address)
    .bind(&account.phone_number)
    .bind(account.date_joined)
    .execute(pool)
    .await?;
    account.set_id(result.last_insert_rowid());
    Ok(())
}

/// Persists the current field values of an already-created account.
pub async fn update(pool: &SqlitePool, account: &Account) -> Result<(), AppError> {
    let id = require_id(account, "Update")?;
    info!("Updating {}", account.name);
    sqlx::query(
        "UPDATE accounts
         SET name = ?, email = ?, address = ?, phone_number = ?, date_joined = ?
         WHERE id = ?",
    )
    .bind(&account.name)
    .bind(&account.email)
    .bind(&account.address)
    .bind(&account.phone_number)
    .bind(account.date_joined)
    .bind(id)
    .execute(pool)
    .await?;
    Ok(())
}

/// Removes the account's row.
pub async fn delete(pool: &SqlitePool, account: &Account) -> Result<(), AppError> {
    let id = require_id(account, "Delete")?;
    info!("Deleting {}", account.name);
    sqlx::query("DELETE FROM accounts WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;
    Ok(())
}

/// Looks up one account by id. Absence is `None`, never an error.
pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Account>, AppError> {
    info!("Looking up id {} ...", id);
    let account = sqlx::query_as::<_, Account>(
        "SELECT id, name, email, address, phone_number, date_joined
         FROM accounts
         WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;
    Ok(account)
}

/// Returns every persisted account. Order is unspecified.
pub async fn all(pool: &SqlitePool) -> Result<Vec<Account>, AppError> {
    info!("Fetching all records");
    let accounts = sqlx::query_as::<_, Account>(
        "SELECT id, name, email, address, phone_number, date_joined FROM accounts",
    )
    .fetch_all(pool)
    .await?;
    Ok(accounts)
}

/// Returns every account whose name matches exactly.
pub async fn find_by_name(pool: &SqlitePool, name: &str) -> Result<Vec<Account>, AppError> {
    info!("Searching for name: {}", name);
    let accounts = sqlx::query_as::<_, Account>(
        "SELECT id, name, email, address, phone_number, date_joined
         FROM accounts
         WHERE name = ?",
    )
    .bind(name)
    .fetch_all(pool)
    .await?;
    Ok(accounts)
}
