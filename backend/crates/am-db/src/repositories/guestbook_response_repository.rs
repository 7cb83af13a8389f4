use crate::DbErrorResult;
use crate::decode::timestamp;

use am_core::GuestbookResponse;

use sqlx::{FromRow, Sqlite};

const TABLE: &str = "guestbook_responses";

#[derive(FromRow)]
struct GuestbookResponseRow {
    id: i64,
    dataset_id: i64,
    identity_id: Option<i64>,
    name: Option<String>,
    email: Option<String>,
    responded_at: i64,
}

impl GuestbookResponseRow {
    fn into_model(self) -> DbErrorResult<GuestbookResponse> {
        Ok(GuestbookResponse {
            id: self.id,
            dataset_id: self.dataset_id,
            identity_id: self.identity_id,
            name: self.name,
            email: self.email,
            responded_at: timestamp(TABLE, "responded_at", self.responded_at)?,
        })
    }
}

pub struct GuestbookResponseRepository;

impl GuestbookResponseRepository {
    pub async fn create<'e, E>(
        executor: E,
        response: &GuestbookResponse,
    ) -> DbErrorResult<GuestbookResponse>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let responded_at = response.responded_at.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO guestbook_responses (
                    dataset_id, identity_id, name, email, responded_at
                ) VALUES (?, ?, ?, ?, ?)
                "#,
        )
        .bind(response.dataset_id)
        .bind(response.identity_id)
        .bind(&response.name)
        .bind(&response.email)
        .bind(responded_at)
        .execute(executor)
        .await?;

        Ok(GuestbookResponse {
            id: result.last_insert_rowid(),
            ..response.clone()
        })
    }

    pub async fn find_by_owner<'e, E>(
        executor: E,
        identity_id: i64,
    ) -> DbErrorResult<Vec<GuestbookResponse>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let rows = sqlx::query_as::<_, GuestbookResponseRow>(
            r#"
                SELECT id, dataset_id, identity_id, name, email, responded_at
                FROM guestbook_responses
                WHERE identity_id = ?
                ORDER BY id ASC
                "#,
        )
        .bind(identity_id)
        .fetch_all(executor)
        .await?;

        rows.into_iter()
            .map(GuestbookResponseRow::into_model)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    pub async fn update_owner<'e, E>(executor: E, response: &GuestbookResponse) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("UPDATE guestbook_responses SET identity_id = ? WHERE id = ?")
            .bind(response.identity_id)
            .bind(response.id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
