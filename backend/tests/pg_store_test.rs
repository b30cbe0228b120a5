//! Integration tests for the Postgres user store
//!
//! Run with: TEST_DATABASE_URL=... cargo test -- --ignored

mod common;

use std::sync::Arc;
use udagram_api::{
    config::StoreDriver,
    db,
    repositories::{NewUser, PgUserStore, StoreError, UserStore},
};

async fn pg_store() -> PgUserStore {
    let config = common::test_config();
    let pool = db::connect(&config.database)
        .await
        .expect("Failed to create test database pool");
    db::run_migrations(&pool)
        .await
        .expect("Failed to run migrations");
    PgUserStore::new(pool)
}

fn new_user(email: &str) -> NewUser {
    NewUser {
        email: email.to_string(),
        password_hash: "$2b$10$abcdefghijklmnopqrstuuABCDEFGHIJKLMNOPQRSTUVWXYZ01234".to_string(),
    }
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_insert_and_find() {
    let store = pg_store().await;
    let email = common::unique_email("pg_insert");

    let created = store.insert(new_user(&email)).await.unwrap();
    let found = store.find_by_email(&email).await.unwrap().unwrap();

    assert_eq!(created.email, found.email);
    assert_eq!(created.password_hash, found.password_hash);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_duplicate_insert_maps_to_duplicate() {
    let store = pg_store().await;
    let email = common::unique_email("pg_dup");

    store.insert(new_user(&email)).await.unwrap();
    let err = store.insert(new_user(&email)).await.unwrap_err();

    assert!(matches!(err, StoreError::Duplicate(_)));

    let count: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM users WHERE email = $1")
        .bind(&email)
        .fetch_one(store.pool())
        .await
        .unwrap();
    assert_eq!(count, 1);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_register_flow_against_postgres() {
    let store = pg_store().await;
    let mut config = common::test_config();
    config.database.driver = StoreDriver::Postgres;
    let app = common::TestApp::with_store(Arc::new(store), config);
    let email = common::unique_email("pg_flow");

    let token = app.register(&email, "pw1").await;
    let (status, _) = app
        .get_auth("/api/v0/users/auth/verification", &token)
        .await;

    assert_eq!(status, axum::http::StatusCode::OK);
}

#[tokio::test]
#[ignore = "requires database"]
async fn test_health_check() {
    let store = pg_store().await;
    assert!(store.health_check().await.is_ok());
}
