//! Integration tests for User repository.

mod common;

use budgetly_db::{UserError, UserRepository};
use uuid::Uuid;

#[tokio::test]
async fn test_user_create_and_find_by_id() {
    let db = common::setup_db().await;
    let repo = UserRepository::new(db.clone());

    let user = repo
        .create("alice", "$argon2id$test_hash")
        .await
        .expect("Failed to create user");

    assert_eq!(user.username, "alice");
    assert_eq!(user.password_hash, "$argon2id$test_hash");

    let found = repo
        .find_by_id(user.id)
        .await
        .expect("Failed to find user")
        .expect("User should exist");

    assert_eq!(found.id, user.id);
    assert_eq!(found.username, "alice");
}

#[tokio::test]
async fn test_user_find_by_username() {
    let db = common::setup_db().await;
    let repo = UserRepository::new(db.clone());

    let user = repo.create("bob", "hash").await.unwrap();

    let found = repo
        .find_by_username("bob")
        .await
        .expect("Failed to find user")
        .expect("User should exist");
    assert_eq!(found.id, user.id);

    let missing = repo
        .find_by_username("nobody")
        .await
        .expect("Query should succeed");
    assert!(missing.is_none());
}

#[tokio::test]
async fn test_user_find_by_id_not_found() {
    let db = common::setup_db().await;
    let repo = UserRepository::new(db.clone());

    let result = repo
        .find_by_id(Uuid::new_v4())
        .await
        .expect("Query should succeed");

    assert!(result.is_none());
}

#[tokio::test]
async fn test_register_same_username_twice_fails() {
    let db = common::setup_db().await;
    let repo = UserRepository::new(db.clone());

    assert!(!repo.username_exists("carol").await.unwrap());
    repo.create("carol", "hash-1").await.unwrap();
    assert!(repo.username_exists("carol").await.unwrap());

    let second = repo.create("carol", "hash-2").await;

    assert!(matches!(second, Err(UserError::UsernameTaken(name)) if name == "carol"));
}

#[tokio::test]
async fn test_delete_user() {
    let db = common::setup_db().await;
    let repo = UserRepository::new(db.clone());
    let user = repo.create("dave", "hash").await.unwrap();

    assert!(repo.delete(user.id).await.unwrap());
    assert!(repo.find_by_id(user.id).await.unwrap().is_none());
    assert!(!repo.delete(user.id).await.unwrap());
}
