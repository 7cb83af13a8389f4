use crate::DbErrorResult;
use crate::decode::timestamp;

use am_core::ApiToken;

use sqlx::{FromRow, Sqlite};

const TABLE: &str = "api_tokens";

#[derive(FromRow)]
struct ApiTokenRow {
    id: i64,
    token_string: String,
    identity_id: i64,
    created_at: i64,
    expires_at: i64,
    disabled: bool,
}

impl ApiTokenRow {
    fn into_model(self) -> DbErrorResult<ApiToken> {
        Ok(ApiToken {
            id: self.id,
            token_string: self.token_string,
            identity_id: self.identity_id,
            created_at: timestamp(TABLE, "created_at", self.created_at)?,
            expires_at: timestamp(TABLE, "expires_at", self.expires_at)?,
            disabled: self.disabled,
        })
    }
}

pub struct ApiTokenRepository;

impl ApiTokenRepository {
    pub async fn create<'e, E>(executor: E, token: &ApiToken) -> DbErrorResult<ApiToken>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let created_at = token.created_at.timestamp();
        let expires_at = token.expires_at.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO api_tokens (
                    token_string, identity_id, created_at, expires_at, disabled
                ) VALUES (?, ?, ?, ?, ?)
                "#,
        )
        .bind(&token.token_string)
        .bind(token.identity_id)
        .bind(created_at)
        .bind(expires_at)
        .bind(token.disabled)
        .execute(executor)
        .await?;

        Ok(ApiToken {
            id: result.last_insert_rowid(),
            ..token.clone()
        })
    }

    pub async fn find_by_identity<'e, E>(executor: E, identity_id: i64) -> DbErrorResult<Vec<ApiToken>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let rows = sqlx::query_as::<_, ApiTokenRow>(
            r#"
                SELECT id, token_string, identity_id, created_at, expires_at, disabled
                FROM api_tokens
                WHERE identity_id = ?
                ORDER BY id ASC
                "#,
        )
        .bind(identity_id)
        .fetch_all(executor)
        .await?;

        rows.into_iter()
            .map(ApiTokenRow::into_model)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    pub async fn delete<'e, E>(executor: E, id: i64) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM api_tokens WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
