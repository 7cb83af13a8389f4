#![allow(dead_code)]

use am_core::{AccountIdentity, DvObject, DvObjectType, LegacyCredential, RoleAssignment};
use am_db::{
    AccountIdentityRepository, DvObjectRepository, LegacyCredentialRepository, MIGRATOR,
    RoleAssignmentRepository,
};

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .filename(":memory:")
        .create_if_missing(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1) // In-memory needs single connection
        .connect_with(options)
        .await
        .expect("Failed to create test pool");

    MIGRATOR
        .run(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub async fn create_test_account(pool: &SqlitePool, user_identifier: &str) -> AccountIdentity {
    let identity = AccountIdentity::new(user_identifier, &format!("{user_identifier}@example.com"));
    AccountIdentityRepository::create(pool, &identity)
        .await
        .expect("Failed to create test account")
}

pub async fn create_test_credential(pool: &SqlitePool, user_identifier: &str) -> LegacyCredential {
    LegacyCredentialRepository::create(pool, &LegacyCredential::new(user_identifier, None))
        .await
        .expect("Failed to create test credential")
}

pub async fn create_test_dataset(pool: &SqlitePool, creator_id: i64) -> DvObject {
    DvObjectRepository::create(pool, &DvObject::new(DvObjectType::Dataset, None, creator_id))
        .await
        .expect("Failed to create test dataset")
}

pub async fn grant(
    pool: &SqlitePool,
    principal: &str,
    definition_point_id: i64,
    role: &str,
) -> RoleAssignment {
    RoleAssignmentRepository::create(pool, &RoleAssignment::new(principal, definition_point_id, role))
        .await
        .expect("Failed to create grant")
}
