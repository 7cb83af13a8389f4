mod common;

use common::{create_test_account, create_test_dataset, create_test_pool, grant, grants_of};

use am_core::RoleAssignment;
use am_db::UnitOfWork;
use am_merge::{MergeError, RoleAssignmentReconciler};

use googletest::prelude::*;

#[tokio::test]
async fn given_overlapping_grants_when_reconciled_then_base_keeps_one_of_each() {
    // Given: base holds (first, admin); consumed holds (first, admin) and (second, curator)
    let pool = create_test_pool().await;
    let base = create_test_account(&pool, "base").await;
    create_test_account(&pool, "consumed").await;
    let first = create_test_dataset(&pool, base.id).await;
    let second = create_test_dataset(&pool, base.id).await;
    let base_admin = grant(&pool, "@base", first.id, "admin").await;
    grant(&pool, "@consumed", first.id, "admin").await;
    let consumed_curator = grant(&pool, "@consumed", second.id, "curator").await;

    let base_grants = grants_of(&pool, "@base").await;
    let consumed_grants = grants_of(&pool, "@consumed").await;

    // When: Reconciling
    let mut uow = UnitOfWork::begin(&pool).await.unwrap();
    let outcome = RoleAssignmentReconciler
        .reconcile(&mut uow, "base", "consumed", &base_grants, &consumed_grants)
        .await
        .unwrap();
    uow.commit().await.unwrap();

    // Then: The duplicate is dropped, the other grant moves, consumed holds nothing
    assert_that!(outcome.repointed, eq(1));
    assert_that!(outcome.dropped, eq(1));
    assert_that!(outcome.deleted, eq(1));

    let after: Vec<(i64, i64, String)> = grants_of(&pool, "@base")
        .await
        .into_iter()
        .map(|a| (a.id, a.definition_point_id, a.role))
        .collect();
    assert_that!(
        after,
        elements_are![
            eq(&(base_admin.id, first.id, "admin".to_string())),
            eq(&(consumed_curator.id, second.id, "curator".to_string()))
        ]
    );
    assert_that!(grants_of(&pool, "@consumed").await, is_empty());
}

#[tokio::test]
async fn given_consumed_holds_same_grant_twice_when_reconciled_then_base_ends_with_one() {
    let pool = create_test_pool().await;
    let base = create_test_account(&pool, "base").await;
    let dataset = create_test_dataset(&pool, base.id).await;
    grant(&pool, "@consumed", dataset.id, "member").await;
    grant(&pool, "@consumed", dataset.id, "member").await;
    let consumed_grants = grants_of(&pool, "@consumed").await;

    let mut uow = UnitOfWork::begin(&pool).await.unwrap();
    let outcome = RoleAssignmentReconciler
        .reconcile(&mut uow, "base", "consumed", &[], &consumed_grants)
        .await
        .unwrap();
    uow.commit().await.unwrap();

    assert_that!(outcome.repointed, eq(1));
    assert_that!(outcome.dropped, eq(1));
    assert_that!(grants_of(&pool, "@base").await.len(), eq(1));
    assert_that!(grants_of(&pool, "@consumed").await, is_empty());
}

#[tokio::test]
async fn given_grants_differing_only_by_private_url_token_when_reconciled_then_base_wins() {
    // Given: Same (definition point, role), only the consumed grant carries a token
    let pool = create_test_pool().await;
    let base = create_test_account(&pool, "base").await;
    let dataset = create_test_dataset(&pool, base.id).await;
    grant(&pool, "@base", dataset.id, "member").await;
    let mut richer = RoleAssignment::new("@consumed", dataset.id, "member");
    richer.private_url_token = Some("token".to_string());
    am_db::RoleAssignmentRepository::create(&pool, &richer)
        .await
        .unwrap();
    let base_grants = grants_of(&pool, "@base").await;
    let consumed_grants = grants_of(&pool, "@consumed").await;

    // When: Reconciling
    let mut uow = UnitOfWork::begin(&pool).await.unwrap();
    let outcome = RoleAssignmentReconciler
        .reconcile(&mut uow, "base", "consumed", &base_grants, &consumed_grants)
        .await
        .unwrap();
    uow.commit().await.unwrap();

    // Then: The base grant is untouched and no token is carried over
    assert_that!(outcome.dropped, eq(1));
    let after = grants_of(&pool, "@base").await;
    assert_that!(after, eq(&base_grants));
}

#[tokio::test]
async fn given_no_consumed_grants_when_reconciled_then_nothing_changes() {
    let pool = create_test_pool().await;
    let base = create_test_account(&pool, "base").await;
    let dataset = create_test_dataset(&pool, base.id).await;
    grant(&pool, "@base", dataset.id, "admin").await;
    let base_grants = grants_of(&pool, "@base").await;

    let mut uow = UnitOfWork::begin(&pool).await.unwrap();
    let outcome = RoleAssignmentReconciler
        .reconcile(&mut uow, "base", "consumed", &base_grants, &[])
        .await
        .unwrap();
    uow.commit().await.unwrap();

    assert_that!(outcome.repointed, eq(0));
    assert_that!(outcome.dropped, eq(0));
    assert_that!(outcome.deleted, eq(0));
    assert_that!(grants_of(&pool, "@base").await, eq(&base_grants));
}

#[test]
fn given_group_assignee_when_checked_then_invalid_assignee_kind() {
    let assignments = vec![
        RoleAssignment::new("@consumed", 1, "admin"),
        RoleAssignment::new("&explicit/group", 1, "member"),
    ];

    let result = RoleAssignmentReconciler::ensure_account_assignees(&assignments);

    assert!(matches!(
        result,
        Err(MergeError::InvalidAssigneeKind { ref assignee, .. }) if assignee == "&explicit/group"
    ));
}

#[test]
fn given_only_account_assignees_when_checked_then_ok() {
    let assignments = vec![
        RoleAssignment::new("@consumed", 1, "admin"),
        RoleAssignment::new("@consumed", 2, "curator"),
    ];

    let result = RoleAssignmentReconciler::ensure_account_assignees(&assignments);

    assert_that!(result, ok(anything()));
}
