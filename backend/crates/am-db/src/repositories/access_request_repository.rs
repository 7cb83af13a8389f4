//! File access requests are bare `(data_file_id, identity_id)` rows with no
//! entity of their own, so they are only ever rewritten with set-based
//! statements.

use crate::DbErrorResult;

use sqlx::Sqlite;

pub struct AccessRequestRepository;

impl AccessRequestRepository {
    pub async fn create<'e, E>(executor: E, data_file_id: i64, identity_id: i64) -> DbErrorResult<()>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        sqlx::query("INSERT INTO file_access_requests (data_file_id, identity_id) VALUES (?, ?)")
            .bind(data_file_id)
            .bind(identity_id)
            .execute(executor)
            .await?;

        Ok(())
    }

    /// Ids of the files the account has requested access to.
    pub async fn find_by_identity<'e, E>(executor: E, identity_id: i64) -> DbErrorResult<Vec<i64>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let file_ids = sqlx::query_scalar::<_, i64>(
            r#"
                SELECT data_file_id
                FROM file_access_requests
                WHERE identity_id = ?
                ORDER BY data_file_id ASC
                "#,
        )
        .bind(identity_id)
        .fetch_all(executor)
        .await?;

        Ok(file_ids)
    }

    /// Move every request from one account to another in a single statement.
    /// Returns the number of rows rewritten.
    pub async fn reassign_identity<'e, E>(executor: E, from: i64, to: i64) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE file_access_requests
                SET identity_id = ?
                WHERE identity_id = ?
                "#,
        )
        .bind(to)
        .bind(from)
        .execute(executor)
        .await?;

        Ok(result.rows_affected())
    }
}
