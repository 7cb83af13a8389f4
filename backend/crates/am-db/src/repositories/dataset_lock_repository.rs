use crate::DbErrorResult;
use crate::decode::timestamp;

use am_core::{DatasetLock, LockReason};

use std::str::FromStr;

use sqlx::{FromRow, Sqlite};

const TABLE: &str = "dataset_locks";

#[derive(FromRow)]
struct DatasetLockRow {
    id: i64,
    dataset_id: i64,
    identity_id: i64,
    reason: String,
    info: Option<String>,
    started_at: i64,
}

impl DatasetLockRow {
    fn into_model(self) -> DbErrorResult<DatasetLock> {
        Ok(DatasetLock {
            id: self.id,
            dataset_id: self.dataset_id,
            identity_id: self.identity_id,
            reason: LockReason::from_str(&self.reason)?,
            info: self.info,
            started_at: timestamp(TABLE, "started_at", self.started_at)?,
        })
    }
}

pub struct DatasetLockRepository;

impl DatasetLockRepository {
    pub async fn create<'e, E>(executor: E, lock: &DatasetLock) -> DbErrorResult<DatasetLock>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let reason = lock.reason.as_str();
        let started_at = lock.started_at.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO dataset_locks (dataset_id, identity_id, reason, info, started_at)
                VALUES (?, ?, ?, ?, ?)
                "#,
        )
        .bind(lock.dataset_id)
        .bind(lock.identity_id)
        .bind(reason)
        .bind(&lock.info)
        .bind(started_at)
        .execute(executor)
        .await?;

        Ok(DatasetLock {
            id: result.last_insert_rowid(),
            ..lock.clone()
        })
    }

    pub async fn find_by_owner<'e, E>(executor: E, identity_id: i64) -> DbErrorResult<Vec<DatasetLock>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let rows = sqlx::query_as::<_, DatasetLockRow>(
            r#"
                SELECT id, dataset_id, identity_id, reason, info, started_at
                FROM dataset_locks
                WHERE identity_id = ?
                ORDER BY id ASC
                "#,
        )
        .bind(identity_id)
        .fetch_all(executor)
        .await?;

        rows.into_iter()
            .map(DatasetLockRow::into_model)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    pub async fn update_owner<'e, E>(executor: E, lock: &DatasetLock) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("UPDATE dataset_locks SET identity_id = ? WHERE id = ?")
            .bind(lock.identity_id)
            .bind(lock.id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
