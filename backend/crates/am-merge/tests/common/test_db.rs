use am_db::{MIGRATOR, RoleAssignmentRepository};
use am_core::RoleAssignment;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

/// Every column that points at an account, as `(table, column)`.
pub const ACCOUNT_REFERENCES: &[(&str, &str)] = &[
    ("identity_lookups", "identity_id"),
    ("api_tokens", "identity_id"),
    ("confirm_email_data", "identity_id"),
    ("dv_objects", "creator_id"),
    ("dv_objects", "release_user_id"),
    ("dataset_version_users", "identity_id"),
    ("dataset_locks", "identity_id"),
    ("guestbook_responses", "identity_id"),
    ("user_notifications", "recipient_id"),
    ("saved_searches", "creator_id"),
    ("workflow_comments", "identity_id"),
    ("file_access_requests", "identity_id"),
];

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

/// Counts rows in `table` where `column = value`
pub async fn count_where(pool: &SqlitePool, table: &str, column: &str, value: i64) -> i64 {
    // Use sqlx::query (not query!) to avoid offline mode issues in tests
    sqlx::query_scalar::<_, i64>(&format!("SELECT COUNT(*) FROM {table} WHERE {column} = ?"))
        .bind(value)
        .fetch_one(pool)
        .await
        .expect("Failed to count rows")
}

/// Per-column reference counts for an account, in `ACCOUNT_REFERENCES` order
pub async fn reference_counts(pool: &SqlitePool, identity_id: i64) -> Vec<i64> {
    let mut counts = Vec::with_capacity(ACCOUNT_REFERENCES.len());
    for (table, column) in ACCOUNT_REFERENCES {
        counts.push(count_where(pool, table, column, identity_id).await);
    }
    counts
}

/// Total number of rows anywhere that still point at an account
pub async fn total_references(pool: &SqlitePool, identity_id: i64) -> i64 {
    reference_counts(pool, identity_id).await.iter().sum()
}

/// Grants addressed to `principal`, ordered by id
pub async fn grants_of(pool: &SqlitePool, principal: &str) -> Vec<RoleAssignment> {
    RoleAssignmentRepository::find_by_assignee(pool, principal)
        .await
        .expect("Failed to load grants")
}

/// Observable state around two accounts, for before/after comparisons
#[derive(Debug, PartialEq)]
pub struct Snapshot {
    pub base_references: Vec<i64>,
    pub consumed_references: Vec<i64>,
    pub base_grants: Vec<RoleAssignment>,
    pub consumed_grants: Vec<RoleAssignment>,
    pub accounts: i64,
    pub legacy_credentials: i64,
}

pub async fn snapshot(
    pool: &SqlitePool,
    base_id: i64,
    base_principal: &str,
    consumed_id: i64,
    consumed_principal: &str,
) -> Snapshot {
    let accounts = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM account_identities")
        .fetch_one(pool)
        .await
        .expect("Failed to count accounts");
    let legacy_credentials = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM legacy_credentials")
        .fetch_one(pool)
        .await
        .expect("Failed to count credentials");

    Snapshot {
        base_references: reference_counts(pool, base_id).await,
        consumed_references: reference_counts(pool, consumed_id).await,
        base_grants: grants_of(pool, base_principal).await,
        consumed_grants: grants_of(pool, consumed_principal).await,
        accounts,
        legacy_credentials,
    }
}
