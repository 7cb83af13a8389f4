use crate::DbErrorResult;
use crate::decode::{optional_timestamp, timestamp};

use am_core::{DvObject, DvObjectType};

use std::str::FromStr;

use sqlx::{FromRow, Sqlite};

const TABLE: &str = "dv_objects";

#[derive(FromRow)]
struct DvObjectRow {
    id: i64,
    object_type: String,
    owner_id: Option<i64>,
    identifier: Option<String>,
    creator_id: i64,
    release_user_id: Option<i64>,
    created_at: i64,
    published_at: Option<i64>,
}

impl DvObjectRow {
    fn into_model(self) -> DbErrorResult<DvObject> {
        Ok(DvObject {
            id: self.id,
            object_type: DvObjectType::from_str(&self.object_type)?,
            owner_id: self.owner_id,
            identifier: self.identifier,
            creator_id: self.creator_id,
            release_user_id: self.release_user_id,
            created_at: timestamp(TABLE, "created_at", self.created_at)?,
            published_at: optional_timestamp(TABLE, "published_at", self.published_at)?,
        })
    }
}

pub struct DvObjectRepository;

impl DvObjectRepository {
    pub async fn create<'e, E>(executor: E, object: &DvObject) -> DbErrorResult<DvObject>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let object_type = object.object_type.as_str();
        let created_at = object.created_at.timestamp();
        let published_at = object.published_at.map(|dt| dt.timestamp());

        let result = sqlx::query(
            r#"
                INSERT INTO dv_objects (
                    object_type, owner_id, identifier, creator_id, release_user_id,
                    created_at, published_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?)
                "#,
        )
        .bind(object_type)
        .bind(object.owner_id)
        .bind(&object.identifier)
        .bind(object.creator_id)
        .bind(object.release_user_id)
        .bind(created_at)
        .bind(published_at)
        .execute(executor)
        .await?;

        Ok(DvObject {
            id: result.last_insert_rowid(),
            ..object.clone()
        })
    }

    pub async fn find_by_id<'e, E>(executor: E, id: i64) -> DbErrorResult<Option<DvObject>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let row = sqlx::query_as::<_, DvObjectRow>(
            r#"
                SELECT id, object_type, owner_id, identifier, creator_id, release_user_id,
                       created_at, published_at
                FROM dv_objects
                WHERE id = ?
                "#,
        )
        .bind(id)
        .fetch_optional(executor)
        .await?;

        row.map(DvObjectRow::into_model).transpose()
    }

    /// Objects attributed to the account in either role (creator or releaser).
    pub async fn find_by_account<'e, E>(executor: E, identity_id: i64) -> DbErrorResult<Vec<DvObject>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let rows = sqlx::query_as::<_, DvObjectRow>(
            r#"
                SELECT id, object_type, owner_id, identifier, creator_id, release_user_id,
                       created_at, published_at
                FROM dv_objects
                WHERE creator_id = ?1 OR release_user_id = ?1
                ORDER BY id ASC
                "#,
        )
        .bind(identity_id)
        .fetch_all(executor)
        .await?;

        rows.into_iter()
            .map(DvObjectRow::into_model)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    /// Persist both attribution columns of `object`.
    pub async fn update_attribution<'e, E>(executor: E, object: &DvObject) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE dv_objects
                SET creator_id = ?, release_user_id = ?
                WHERE id = ?
                "#,
        )
        .bind(object.creator_id)
        .bind(object.release_user_id)
        .bind(object.id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }
}
