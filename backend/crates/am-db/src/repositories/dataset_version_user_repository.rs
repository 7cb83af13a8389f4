use crate::DbErrorResult;
use crate::decode::timestamp;

use am_core::DatasetVersionUser;

use sqlx::{FromRow, Sqlite};

const TABLE: &str = "dataset_version_users";

#[derive(FromRow)]
struct DatasetVersionUserRow {
    id: i64,
    dataset_version_id: i64,
    identity_id: i64,
    last_updated_at: i64,
}

impl DatasetVersionUserRow {
    fn into_model(self) -> DbErrorResult<DatasetVersionUser> {
        Ok(DatasetVersionUser {
            id: self.id,
            dataset_version_id: self.dataset_version_id,
            identity_id: self.identity_id,
            last_updated_at: timestamp(TABLE, "last_updated_at", self.last_updated_at)?,
        })
    }
}

pub struct DatasetVersionUserRepository;

impl DatasetVersionUserRepository {
    pub async fn create<'e, E>(
        executor: E,
        record: &DatasetVersionUser,
    ) -> DbErrorResult<DatasetVersionUser>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let last_updated_at = record.last_updated_at.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO dataset_version_users (dataset_version_id, identity_id, last_updated_at)
                VALUES (?, ?, ?)
                "#,
        )
        .bind(record.dataset_version_id)
        .bind(record.identity_id)
        .bind(last_updated_at)
        .execute(executor)
        .await?;

        Ok(DatasetVersionUser {
            id: result.last_insert_rowid(),
            ..record.clone()
        })
    }

    pub async fn find_by_owner<'e, E>(
        executor: E,
        identity_id: i64,
    ) -> DbErrorResult<Vec<DatasetVersionUser>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let rows = sqlx::query_as::<_, DatasetVersionUserRow>(
            r#"
                SELECT id, dataset_version_id, identity_id, last_updated_at
                FROM dataset_version_users
                WHERE identity_id = ?
                ORDER BY id ASC
                "#,
        )
        .bind(identity_id)
        .fetch_all(executor)
        .await?;

        rows.into_iter()
            .map(DatasetVersionUserRow::into_model)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    pub async fn update_owner<'e, E>(executor: E, record: &DatasetVersionUser) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("UPDATE dataset_version_users SET identity_id = ? WHERE id = ?")
            .bind(record.identity_id)
            .bind(record.id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
