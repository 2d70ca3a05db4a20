//! Shared setup for repository integration tests.

#![allow(dead_code)]

use budgetly_db::{UserRepository, entities::users, migration::Migrator};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use uuid::Uuid;

/// Opens a fresh in-memory SQLite database with the schema applied.
///
/// A single pooled connection keeps the in-memory database alive and shared.
pub async fn setup_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    options
        .max_connections(1)
        .min_connections(1)
        .sqlx_logging(false);

    let db = Database::connect(options)
        .await
        .expect("Failed to open in-memory database");
    Migrator::up(&db, None)
        .await
        .expect("Failed to run migrations");
    db
}

/// Creates a user with a unique name and a placeholder hash.
pub async fn create_user(db: &DatabaseConnection, prefix: &str) -> users::Model {
    UserRepository::new(db.clone())
        .create(&format!("{prefix}-{}", Uuid::new_v4()), "$argon2id$test_hash")
        .await
        .expect("Failed to create user")
}
