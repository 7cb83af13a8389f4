use crate::DbErrorResult;

use am_core::SavedSearch;

use sqlx::{FromRow, Sqlite};

#[derive(FromRow)]
struct SavedSearchRow {
    id: i64,
    query: String,
    definition_point_id: i64,
    creator_id: i64,
}

impl From<SavedSearchRow> for SavedSearch {
    fn from(row: SavedSearchRow) -> Self {
        SavedSearch {
            id: row.id,
            query: row.query,
            definition_point_id: row.definition_point_id,
            creator_id: row.creator_id,
        }
    }
}

pub struct SavedSearchRepository;

impl SavedSearchRepository {
    pub async fn create<'e, E>(executor: E, search: &SavedSearch) -> DbErrorResult<SavedSearch>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            r#"
                INSERT INTO saved_searches (query, definition_point_id, creator_id)
                VALUES (?, ?, ?)
                "#,
        )
        .bind(&search.query)
        .bind(search.definition_point_id)
        .bind(search.creator_id)
        .execute(executor)
        .await?;

        Ok(SavedSearch {
            id: result.last_insert_rowid(),
            ..search.clone()
        })
    }

    pub async fn find_by_owner<'e, E>(executor: E, creator_id: i64) -> DbErrorResult<Vec<SavedSearch>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let rows = sqlx::query_as::<_, SavedSearchRow>(
            r#"
                SELECT id, query, definition_point_id, creator_id
                FROM saved_searches
                WHERE creator_id = ?
                ORDER BY id ASC
                "#,
        )
        .bind(creator_id)
        .fetch_all(executor)
        .await?;

        Ok(rows.into_iter().map(SavedSearch::from).collect())
    }

    pub async fn update_owner<'e, E>(executor: E, search: &SavedSearch) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("UPDATE saved_searches SET creator_id = ? WHERE id = ?")
            .bind(search.creator_id)
            .bind(search.id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
