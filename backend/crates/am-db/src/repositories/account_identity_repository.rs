use crate::DbErrorResult;
use crate::decode::{optional_timestamp, timestamp};

use am_core::AccountIdentity;

use sqlx::{FromRow, Sqlite};

const TABLE: &str = "account_identities";

#[derive(FromRow)]
struct AccountIdentityRow {
    id: i64,
    user_identifier: String,
    email: String,
    first_name: Option<String>,
    last_name: Option<String>,
    affiliation: Option<String>,
    superuser: bool,
    created_at: i64,
    last_login_at: Option<i64>,
}

impl AccountIdentityRow {
    fn into_model(self) -> DbErrorResult<AccountIdentity> {
        Ok(AccountIdentity {
            id: self.id,
            user_identifier: self.user_identifier,
            email: self.email,
            first_name: self.first_name,
            last_name: self.last_name,
            affiliation: self.affiliation,
            superuser: self.superuser,
            created_at: timestamp(TABLE, "created_at", self.created_at)?,
            last_login_at: optional_timestamp(TABLE, "last_login_at", self.last_login_at)?,
        })
    }
}

pub struct AccountIdentityRepository;

impl AccountIdentityRepository {
    /// Insert and return the stored account with its assigned id.
    pub async fn create<'e, E>(
        executor: E,
        identity: &AccountIdentity,
    ) -> DbErrorResult<AccountIdentity>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let created_at = identity.created_at.timestamp();
        let last_login_at = identity.last_login_at.map(|dt| dt.timestamp());

        let result = sqlx::query(
            r#"
                INSERT INTO account_identities (
                    user_identifier, email, first_name, last_name, affiliation,
                    superuser, created_at, last_login_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
                "#,
        )
        .bind(&identity.user_identifier)
        .bind(&identity.email)
        .bind(&identity.first_name)
        .bind(&identity.last_name)
        .bind(&identity.affiliation)
        .bind(identity.superuser)
        .bind(created_at)
        .bind(last_login_at)
        .execute(executor)
        .await?;

        Ok(AccountIdentity {
            id: result.last_insert_rowid(),
            ..identity.clone()
        })
    }

    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> DbErrorResult<Option<AccountIdentity>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let row = sqlx::query_as::<_, AccountIdentityRow>(
            r#"
                SELECT id, user_identifier, email, first_name, last_name, affiliation,
                       superuser, created_at, last_login_at
                FROM account_identities
                WHERE id = ?
                "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        row.map(AccountIdentityRow::into_model).transpose()
    }

    /// Look up by bare user identifier (no `@`).
    pub async fn find_by_identifier<'e, E>(
        executor: E,
        user_identifier: &str,
    ) -> DbErrorResult<Option<AccountIdentity>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let row = sqlx::query_as::<_, AccountIdentityRow>(
            r#"
                SELECT id, user_identifier, email, first_name, last_name, affiliation,
                       superuser, created_at, last_login_at
                FROM account_identities
                WHERE user_identifier = ?
                "#,
        )
        .bind(user_identifier)
        .fetch_optional(executor)
        .await?;

        row.map(AccountIdentityRow::into_model).transpose()
    }

    pub async fn delete<'e, E>(executor: E, id: i64) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM account_identities WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
