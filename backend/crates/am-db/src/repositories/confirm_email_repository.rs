use crate::DbErrorResult;
use crate::decode::timestamp;

use am_core::ConfirmEmailData;

use sqlx::{FromRow, Sqlite};

const TABLE: &str = "confirm_email_data";

#[derive(FromRow)]
struct ConfirmEmailRow {
    id: i64,
    token: String,
    identity_id: i64,
    created_at: i64,
    expires_at: i64,
}

impl ConfirmEmailRow {
    fn into_model(self) -> DbErrorResult<ConfirmEmailData> {
        Ok(ConfirmEmailData {
            id: self.id,
            token: self.token,
            identity_id: self.identity_id,
            created_at: timestamp(TABLE, "created_at", self.created_at)?,
            expires_at: timestamp(TABLE, "expires_at", self.expires_at)?,
        })
    }
}

pub struct ConfirmEmailRepository;

impl ConfirmEmailRepository {
    pub async fn create<'e, E>(executor: E, data: &ConfirmEmailData) -> DbErrorResult<ConfirmEmailData>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let created_at = data.created_at.timestamp();
        let expires_at = data.expires_at.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO confirm_email_data (token, identity_id, created_at, expires_at)
                VALUES (?, ?, ?, ?)
                "#,
        )
        .bind(&data.token)
        .bind(data.identity_id)
        .bind(created_at)
        .bind(expires_at)
        .execute(executor)
        .await?;

        Ok(ConfirmEmailData {
            id: result.last_insert_rowid(),
            ..data.clone()
        })
    }

    pub async fn find_by_identity<'e, E>(
        executor: E,
        identity_id: i64,
    ) -> DbErrorResult<Vec<ConfirmEmailData>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let rows = sqlx::query_as::<_, ConfirmEmailRow>(
            r#"
                SELECT id, token, identity_id, created_at, expires_at
                FROM confirm_email_data
                WHERE identity_id = ?
                ORDER BY id ASC
                "#,
        )
        .bind(identity_id)
        .fetch_all(executor)
        .await?;

        rows.into_iter()
            .map(ConfirmEmailRow::into_model)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    pub async fn delete<'e, E>(executor: E, id: i64) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM confirm_email_data WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
