use am_core::{AccountIdentity, DvObject, DvObjectType, LegacyCredential};
use am_db::{AccountIdentityRepository, DvObjectRepository, LegacyCredentialRepository};

use sqlx::SqlitePool;

/// Inserts an account named `user_identifier` with a matching email
pub async fn create_test_account(pool: &SqlitePool, user_identifier: &str) -> AccountIdentity {
    let identity = AccountIdentity::new(user_identifier, &format!("{user_identifier}@example.com"));
    AccountIdentityRepository::create(pool, &identity)
        .await
        .expect("Failed to create test account")
}

/// Inserts a legacy credential linked to `user_identifier`
pub async fn create_test_credential(pool: &SqlitePool, user_identifier: &str) -> LegacyCredential {
    let credential = LegacyCredential::new(user_identifier, Some("$2a$10$hash"));
    LegacyCredentialRepository::create(pool, &credential)
        .await
        .expect("Failed to create test credential")
}

/// Inserts a dataset created by `creator_id`
pub async fn create_test_dataset(pool: &SqlitePool, creator_id: i64) -> DvObject {
    let dataset = DvObject::new(DvObjectType::Dataset, None, creator_id);
    DvObjectRepository::create(pool, &dataset)
        .await
        .expect("Failed to create test dataset")
}

/// Inserts a data file inside `dataset_id`
pub async fn create_test_file(pool: &SqlitePool, dataset_id: i64, creator_id: i64) -> DvObject {
    let file = DvObject::new(DvObjectType::DataFile, Some(dataset_id), creator_id);
    DvObjectRepository::create(pool, &file)
        .await
        .expect("Failed to create test file")
}
