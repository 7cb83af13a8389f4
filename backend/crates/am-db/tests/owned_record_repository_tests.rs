mod common;

use common::{
    count_where, create_test_account, create_test_dataset, create_test_file, create_test_pool,
};

use am_core::{
    DatasetLock, DatasetVersionUser, DvObjectType, GuestbookResponse, LockReason, OwnedRecord,
    SavedSearch, UserNotification, WorkflowComment,
};
use am_db::{
    AccessRequestRepository, DatasetLockRepository, DatasetVersionUserRepository,
    DvObjectRepository, GuestbookResponseRepository, SavedSearchRepository,
    UserNotificationRepository, WorkflowCommentRepository,
};

use googletest::prelude::*;

#[tokio::test]
async fn given_object_released_by_other_account_when_found_by_account_then_both_roles_match() {
    // Given: alice creates one dataset, bob creates another that alice releases
    let pool = create_test_pool().await;
    let alice = create_test_account(&pool, "alice").await;
    let bob = create_test_account(&pool, "bob").await;
    let own = create_test_dataset(&pool, alice.id).await;
    let mut released = create_test_dataset(&pool, bob.id).await;
    released.release(alice.id);
    DvObjectRepository::update_attribution(&pool, &released)
        .await
        .unwrap();

    // When: Loading alice's objects
    let objects = DvObjectRepository::find_by_account(&pool, alice.id)
        .await
        .unwrap();

    // Then: Both are found, once each
    let ids: Vec<i64> = objects.iter().map(|o| o.id).collect();
    assert_that!(ids, elements_are![eq(&own.id), eq(&released.id)]);
}

#[tokio::test]
async fn given_object_when_attribution_updated_then_both_columns_persist() {
    let pool = create_test_pool().await;
    let alice = create_test_account(&pool, "alice").await;
    let bob = create_test_account(&pool, "bob").await;
    let mut dataset = create_test_dataset(&pool, alice.id).await;
    dataset.release(alice.id);
    DvObjectRepository::update_attribution(&pool, &dataset)
        .await
        .unwrap();

    // When: Re-pointing every attribution from alice to bob
    let changed = dataset.reassign_owner(alice.id, bob.id);
    DvObjectRepository::update_attribution(&pool, &dataset)
        .await
        .unwrap();

    // Then: Creator and releaser both read back as bob
    assert_that!(changed, eq(true));
    let found = DvObjectRepository::find_by_id(&pool, dataset.id)
        .await
        .unwrap()
        .unwrap();
    assert_that!(found.object_type, eq(DvObjectType::Dataset));
    assert_that!(found.creator_id, eq(bob.id));
    assert_that!(found.release_user_id, some(eq(bob.id)));
    assert_that!(found.is_released(), eq(true));
}

#[tokio::test]
async fn given_owned_records_when_owner_updated_then_they_move_accounts() {
    // Given: One record of each simple category owned by alice
    let pool = create_test_pool().await;
    let alice = create_test_account(&pool, "alice").await;
    let bob = create_test_account(&pool, "bob").await;
    let dataset = create_test_dataset(&pool, alice.id).await;

    let mut version_user = DatasetVersionUserRepository::create(
        &pool,
        &DatasetVersionUser::new(dataset.id, alice.id),
    )
    .await
    .unwrap();
    let mut lock = DatasetLockRepository::create(
        &pool,
        &DatasetLock::new(dataset.id, alice.id, LockReason::InReview),
    )
    .await
    .unwrap();
    let mut response = GuestbookResponseRepository::create(
        &pool,
        &GuestbookResponse::new(dataset.id, Some(alice.id)),
    )
    .await
    .unwrap();
    let mut notification = UserNotificationRepository::create(
        &pool,
        &UserNotification::new(alice.id, "assign_role", Some(dataset.id)),
    )
    .await
    .unwrap();
    let mut search = SavedSearchRepository::create(
        &pool,
        &SavedSearch::new("title:rust", dataset.id, alice.id),
    )
    .await
    .unwrap();
    let mut comment = WorkflowCommentRepository::create(
        &pool,
        &WorkflowComment::new(dataset.id, alice.id, "return_to_author", "Needs a README"),
    )
    .await
    .unwrap();

    // When: Re-pointing and persisting each
    version_user.reassign_owner(alice.id, bob.id);
    lock.reassign_owner(alice.id, bob.id);
    response.reassign_owner(alice.id, bob.id);
    notification.reassign_owner(alice.id, bob.id);
    search.reassign_owner(alice.id, bob.id);
    comment.reassign_owner(alice.id, bob.id);
    DatasetVersionUserRepository::update_owner(&pool, &version_user)
        .await
        .unwrap();
    DatasetLockRepository::update_owner(&pool, &lock).await.unwrap();
    GuestbookResponseRepository::update_owner(&pool, &response)
        .await
        .unwrap();
    UserNotificationRepository::update_owner(&pool, &notification)
        .await
        .unwrap();
    SavedSearchRepository::update_owner(&pool, &search)
        .await
        .unwrap();
    WorkflowCommentRepository::update_owner(&pool, &comment)
        .await
        .unwrap();

    // Then: Nothing is left on alice and bob holds one of each
    assert_that!(
        DatasetVersionUserRepository::find_by_owner(&pool, alice.id)
            .await
            .unwrap(),
        is_empty()
    );
    let locks = DatasetLockRepository::find_by_owner(&pool, bob.id)
        .await
        .unwrap();
    assert_that!(locks.len(), eq(1));
    assert_that!(locks[0].reason, eq(LockReason::InReview));
    assert_that!(
        GuestbookResponseRepository::find_by_owner(&pool, bob.id)
            .await
            .unwrap()
            .len(),
        eq(1)
    );
    assert_that!(
        UserNotificationRepository::find_by_owner(&pool, bob.id)
            .await
            .unwrap()
            .len(),
        eq(1)
    );
    assert_that!(
        SavedSearchRepository::find_by_owner(&pool, bob.id)
            .await
            .unwrap()
            .len(),
        eq(1)
    );
    let comments = WorkflowCommentRepository::find_by_owner(&pool, bob.id)
        .await
        .unwrap();
    assert_that!(comments.len(), eq(1));
    assert_that!(comments[0].message.as_str(), eq("Needs a README"));
}

#[tokio::test]
async fn given_anonymous_guestbook_response_when_found_by_owner_then_it_is_not_returned() {
    let pool = create_test_pool().await;
    let alice = create_test_account(&pool, "alice").await;
    let dataset = create_test_dataset(&pool, alice.id).await;
    GuestbookResponseRepository::create(&pool, &GuestbookResponse::new(dataset.id, None))
        .await
        .unwrap();

    let responses = GuestbookResponseRepository::find_by_owner(&pool, alice.id)
        .await
        .unwrap();

    assert_that!(responses, is_empty());
    assert_that!(count_where(&pool, "guestbook_responses", "dataset_id", dataset.id).await, eq(1));
}

#[tokio::test]
async fn given_access_requests_when_reassigned_then_all_move_in_one_statement() {
    // Given: alice requested two files, bob one other
    let pool = create_test_pool().await;
    let alice = create_test_account(&pool, "alice").await;
    let bob = create_test_account(&pool, "bob").await;
    let dataset = create_test_dataset(&pool, alice.id).await;
    let first = create_test_file(&pool, dataset.id, alice.id).await;
    let second = create_test_file(&pool, dataset.id, alice.id).await;
    let third = create_test_file(&pool, dataset.id, alice.id).await;
    AccessRequestRepository::create(&pool, first.id, alice.id)
        .await
        .unwrap();
    AccessRequestRepository::create(&pool, second.id, alice.id)
        .await
        .unwrap();
    AccessRequestRepository::create(&pool, third.id, bob.id)
        .await
        .unwrap();

    // When: Moving alice's requests to bob
    let moved = AccessRequestRepository::reassign_identity(&pool, alice.id, bob.id)
        .await
        .unwrap();

    // Then: Two rows moved and bob now holds all three
    assert_that!(moved, eq(2));
    let alice_files = AccessRequestRepository::find_by_identity(&pool, alice.id)
        .await
        .unwrap();
    let bob_files = AccessRequestRepository::find_by_identity(&pool, bob.id)
        .await
        .unwrap();
    assert_that!(alice_files, is_empty());
    assert_that!(bob_files, elements_are![eq(&first.id), eq(&second.id), eq(&third.id)]);
}

#[tokio::test]
async fn given_both_accounts_requested_same_file_when_reassigned_then_key_collision_errors() {
    let pool = create_test_pool().await;
    let alice = create_test_account(&pool, "alice").await;
    let bob = create_test_account(&pool, "bob").await;
    let dataset = create_test_dataset(&pool, alice.id).await;
    let file = create_test_file(&pool, dataset.id, alice.id).await;
    AccessRequestRepository::create(&pool, file.id, alice.id)
        .await
        .unwrap();
    AccessRequestRepository::create(&pool, file.id, bob.id)
        .await
        .unwrap();

    let result = AccessRequestRepository::reassign_identity(&pool, alice.id, bob.id).await;

    assert_that!(result, err(anything()));
}
