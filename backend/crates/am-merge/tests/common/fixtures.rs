use am_core::{
    AccountIdentity, ApiToken, ConfirmEmailData, ConsumedAccount, DatasetLock,
    DatasetVersionUser, DvObject, DvObjectType, GuestbookResponse, IdentityLookup,
    LegacyCredential, LockReason, RoleAssignment, SavedSearch, UserNotification,
    WorkflowComment,
};
use am_db::{
    AccessRequestRepository, AccountIdentityRepository, ApiTokenRepository,
    ConfirmEmailRepository, DatasetLockRepository, DatasetVersionUserRepository,
    DvObjectRepository, GuestbookResponseRepository, IdentityLookupRepository,
    LegacyCredentialRepository, RoleAssignmentRepository, SavedSearchRepository,
    UserNotificationRepository, WorkflowCommentRepository,
};
use am_merge::MergeRequest;

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

/// Inserts a lookup, an API token and a pending email confirmation
pub async fn create_auxiliary_records(pool: &SqlitePool, account: &AccountIdentity) {
    IdentityLookupRepository::create(
        pool,
        &IdentityLookup::new("builtin", &account.user_identifier, account.id),
    )
    .await
    .expect("Failed to create lookup");
    ApiTokenRepository::create(pool, &ApiToken::new(account.id))
        .await
        .expect("Failed to create token");
    ConfirmEmailRepository::create(pool, &ConfirmEmailData::new(account.id))
        .await
        .expect("Failed to create confirmation");
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

/// Grants `role` on `definition_point_id` to `principal`
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

/// Inserts one record of every owned category for `owner_id` on `dataset`,
/// including a file access request. The dataset itself is released by the owner.
pub async fn create_owned_records(pool: &SqlitePool, owner_id: i64, dataset: &DvObject) {
    let mut released = dataset.clone();
    released.release(owner_id);
    DvObjectRepository::update_attribution(pool, &released)
        .await
        .expect("Failed to release dataset");

    DatasetVersionUserRepository::create(pool, &DatasetVersionUser::new(dataset.id, owner_id))
        .await
        .expect("Failed to create version user");
    DatasetLockRepository::create(
        pool,
        &DatasetLock::new(dataset.id, owner_id, LockReason::EditInProgress),
    )
    .await
    .expect("Failed to create lock");
    GuestbookResponseRepository::create(pool, &GuestbookResponse::new(dataset.id, Some(owner_id)))
        .await
        .expect("Failed to create guestbook response");
    UserNotificationRepository::create(
        pool,
        &UserNotification::new(owner_id, "published_ds", Some(dataset.id)),
    )
    .await
    .expect("Failed to create notification");
    SavedSearchRepository::create(pool, &SavedSearch::new("*", dataset.id, owner_id))
        .await
        .expect("Failed to create saved search");
    WorkflowCommentRepository::create(
        pool,
        &WorkflowComment::new(dataset.id, owner_id, "return_to_author", "Fix the metadata"),
    )
    .await
    .expect("Failed to create workflow comment");

    let file = create_test_file(pool, dataset.id, owner_id).await;
    AccessRequestRepository::create(pool, file.id, owner_id)
        .await
        .expect("Failed to create access request");
}

/// Loads everything a merge of `consumed` into `base` needs, the way a
/// caller would before invoking the orchestrator
pub async fn build_request(
    pool: &SqlitePool,
    base: &AccountIdentity,
    consumed: &AccountIdentity,
) -> MergeRequest {
    let credential = LegacyCredentialRepository::find_by_user_name(pool, &consumed.user_identifier)
        .await
        .expect("Failed to load credential");
    let consumed_account =
        ConsumedAccount::new(consumed.clone(), credential).expect("Credential mismatch");

    MergeRequest {
        base: base.clone(),
        consumed: consumed_account,
        base_assignments: RoleAssignmentRepository::find_by_assignee(pool, &base.principal())
            .await
            .expect("Failed to load base grants"),
        consumed_assignments: RoleAssignmentRepository::find_by_assignee(
            pool,
            &consumed.principal(),
        )
        .await
        .expect("Failed to load consumed grants"),
    }
}
