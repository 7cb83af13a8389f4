use crate::DbErrorResult;

use am_core::LegacyCredential;

use sqlx::{FromRow, Sqlite};

#[derive(FromRow)]
struct LegacyCredentialRow {
    id: i64,
    user_name: String,
    encrypted_password: Option<String>,
    password_encryption_version: i32,
}

impl From<LegacyCredentialRow> for LegacyCredential {
    fn from(row: LegacyCredentialRow) -> Self {
        LegacyCredential {
            id: row.id,
            user_name: row.user_name,
            encrypted_password: row.encrypted_password,
            password_encryption_version: row.password_encryption_version,
        }
    }
}

pub struct LegacyCredentialRepository;

impl LegacyCredentialRepository {
    pub async fn create<'e, E>(
        executor: E,
        credential: &LegacyCredential,
    ) -> DbErrorResult<LegacyCredential>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            r#"
                INSERT INTO legacy_credentials (
                    user_name, encrypted_password, password_encryption_version
                ) VALUES (?, ?, ?)
                "#,
        )
        .bind(&credential.user_name)
        .bind(&credential.encrypted_password)
        .bind(credential.password_encryption_version)
        .execute(executor)
        .await?;

        Ok(LegacyCredential {
            id: result.last_insert_rowid(),
            ..credential.clone()
        })
    }

    pub async fn find_by_user_name<'e, E>(
        executor: E,
        user_name: &str,
    ) -> DbErrorResult<Option<LegacyCredential>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let row = sqlx::query_as::<_, LegacyCredentialRow>(
            r#"
                SELECT id, user_name, encrypted_password, password_encryption_version
                FROM legacy_credentials
                WHERE user_name = ?
                "#,
        )
        .bind(user_name)
        .fetch_optional(executor)
        .await?;

        Ok(row.map(LegacyCredential::from))
    }

    pub async fn delete<'e, E>(executor: E, id: i64) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM legacy_credentials WHERE id = ?")
            .bind(id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
