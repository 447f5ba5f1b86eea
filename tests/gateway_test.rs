use chrono::NaiveDate;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use account_service::db::{self, account_queries};
use account_service::errors::AppError;
use account_service::models::Account;

async fn test_pool() -> SqlitePool {
    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect("sqlite::memory:")
        .await
        .unwrap();
    db::create_schema(&pool).await.unwrap();
    pool
}

fn sample_account(name: &str) -> Account {
    Account {
        id: None,
        name: name.to_string(),
        email: format!("{}@example.com", name.to_lowercase()),
        address: "123 Main St".to_string(),
        phone_number: Some("555-1212".to_string()),
        date_joined: NaiveDate::from_ymd_opt(2022, 1, 15).unwrap(),
    }
}

#[tokio::test]
async fn create_assigns_distinct_ids() {
    let pool = test_pool().await;
    let mut first = sample_account("Alice");
    let mut second = sample_account("Bob");
    account_queries::create(&pool, &mut first).await.unwrap();
    account_queries::create(&pool, &mut second).await.unwrap();
    assert!(first.id.is_some());
    assert!(second.id.is_some());
    assert_ne!(first.id, second.id);
}

#[tokio::test]
async fn create_discards_a_caller_supplied_id() {
    let pool = test_pool().await;
    let mut first = sample_account("Alice");
    account_queries::create(&pool, &mut first).await.unwrap();

    let mut second = sample_account("Bob");
    second.id = Some(9999);
    account_queries::create(&pool, &mut second).await.unwrap();
    assert_ne!(second.id, Some(9999));
    assert_eq!(account_queries::all(&pool).await.unwrap().len(), 2);
}

#[tokio::test]
async fn find_returns_the_created_account() {
    let pool = test_pool().await;
    let mut account = sample_account("Alice");
    account_queries::create(&pool, &mut account).await.unwrap();
    let found = account_queries::find(&pool, account.id.unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found, account);
}

#[tokio::test]
async fn find_miss_returns_none() {
    let pool = test_pool().await;
    let found = account_queries::find(&pool, 12345).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn all_returns_every_account() {
    let pool = test_pool().await;
    for name in ["Alice", "Bob", "Carol"] {
        let mut account = sample_account(name);
        account_queries::create(&pool, &mut account).await.unwrap();
    }
    let accounts = account_queries::all(&pool).await.unwrap();
    assert_eq!(accounts.len(), 3);
}

#[tokio::test]
async fn find_by_name_matches_exactly() {
    let pool = test_pool().await;
    let mut alice = sample_account("Alice");
    account_queries::create(&pool, &mut alice).await.unwrap();
    let mut other_alice = sample_account("Alice");
    account_queries::create(&pool, &mut other_alice).await.unwrap();
    let mut bob = sample_account("Bob");
    account_queries::create(&pool, &mut bob).await.unwrap();

    let matches = account_queries::find_by_name(&pool, "Alice").await.unwrap();
    assert_eq!(matches.len(), 2);
    assert!(matches.iter().all(|a| a.name == "Alice"));

    let empty = account_queries::find_by_name(&pool, "Mallory").await.unwrap();
    assert!(empty.is_empty());
}

#[tokio::test]
async fn update_persists_changed_fields() {
    let pool = test_pool().await;
    let mut account = sample_account("Alice");
    account_queries::create(&pool, &mut account).await.unwrap();

    account.address = "42 New Road".to_string();
    account.phone_number = None;
    account_queries::update(&pool, &account).await.unwrap();

    let found = account_queries::find(&pool, account.id.unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.address, "42 New Road");
    assert_eq!(found.phone_number, None);
}

#[tokio::test]
async fn update_without_id_fails_before_reaching_the_store() {
    let pool = test_pool().await;
    let mut stored = sample_account("Alice");
    account_queries::create(&pool, &mut stored).await.unwrap();

    let mut detached = sample_account("Alice");
    detached.address = "should never land".to_string();
    let err = account_queries::update(&pool, &detached).await.unwrap_err();
    match err {
        AppError::Validation(msg) => assert_eq!(msg, "Update called with empty ID field"),
        other => panic!("expected validation error, got {:?}", other),
    }

    let found = account_queries::find(&pool, stored.id.unwrap())
        .await
        .unwrap()
        .unwrap();
    assert_eq!(found.address, "123 Main St");
}

#[tokio::test]
async fn delete_removes_the_row() {
    let pool = test_pool().await;
    let mut account = sample_account("Alice");
    account_queries::create(&pool, &mut account).await.unwrap();
    account_queries::delete(&pool, &account).await.unwrap();
    let found = account_queries::find(&pool, account.id.unwrap()).await.unwrap();
    assert!(found.is_none());
}

#[tokio::test]
async fn delete_without_id_fails() {
    let pool = test_pool().await;
    let detached = sample_account("Alice");
    let err = account_queries::delete(&pool, &detached).await.unwrap_err();
    assert!(matches!(err, AppError::Validation(_)));
}

#[tokio::test]
async fn create_schema_is_idempotent() {
    let pool = test_pool().await;
    db::create_schema(&pool).await.unwrap();
    let mut account = sample_account("Alice");
    account_queries::create(&pool, &mut account).await.unwrap();
    assert_eq!(account_queries::all(&pool).await.unwrap().len(), 1);
}
