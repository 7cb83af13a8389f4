use crate::DbErrorResult;

use am_core::IdentityLookup;

use sqlx::{FromRow, Sqlite};

#[derive(FromRow)]
struct IdentityLookupRow {
    id: i64,
    authentication_provider_id: String,
    persistent_user_id: String,
    identity_id: i64,
}

impl From<IdentityLookupRow> for IdentityLookup {
    fn from(row: IdentityLookupRow) -> Self {
        IdentityLookup {
            id: row.id,
            authentication_provider_id: row.authentication_provider_id,
            persistent_user_id: row.persistent_user_id,
            identity_id: row.identity_id,
        }
    }
}

pub struct IdentityLookupRepository;

impl IdentityLookupRepository {
    pub async fn create<'e, E>(executor: E, lookup: &IdentityLookup) -> DbErrorResult<IdentityLookup>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            r#"
                INSERT INTO identity_lookups (
                    authentication_provider_id, persistent_user_id, identity_id
                ) VALUES (?, ?, ?)
                "#,
        )
        .bind(&lookup.authentication_provider_id)
        .bind(&lookup.persistent_user_id)
        .bind(lookup.identity_id)
        .execute(executor)
        .await?;

        Ok(IdentityLookup {
            id: result.last_insert_rowid(),
            ..lookup.clone()
        })
    }

    /// All lookups for an account. More than one is a data fault the caller decides on.
    pub async fn find_by_identity<'e, E>(
        executor: E,
        identity_id: i64,
    ) -> DbErrorResult<Vec<IdentityLookup>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let rows = sqlx::query_as::<_, IdentityLookupRow>(
            r#"
                SELECT id, authentication_provider_id, persistent_user_id, identity_id
                FROM identity_lookups
                WHERE identity_id = ?
                ORDER BY id ASC
                "#,
        )
        .bind(identity_id)
        .fetch_all(executor)
        .await?;

        Ok(rows.into_iter().map(IdentityLookup::from).collect())
    }

    pub async fn delete<'e, E>(executor: E, id: i64) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM identity_lookups WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
