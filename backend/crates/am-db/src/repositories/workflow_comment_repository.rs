use crate::DbErrorResult;
use crate::decode::timestamp;

use am_core::WorkflowComment;

use sqlx::{FromRow, Sqlite};

const TABLE: &str = "workflow_comments";

#[derive(FromRow)]
struct WorkflowCommentRow {
    id: i64,
    dataset_version_id: i64,
    identity_id: i64,
    comment_type: String,
    message: String,
    created_at: i64,
}

impl WorkflowCommentRow {
    fn into_model(self) -> DbErrorResult<WorkflowComment> {
        Ok(WorkflowComment {
            id: self.id,
            dataset_version_id: self.dataset_version_id,
            identity_id: self.identity_id,
            comment_type: self.comment_type,
            message: self.message,
            created_at: timestamp(TABLE, "created_at", self.created_at)?,
        })
    }
}

pub struct WorkflowCommentRepository;

impl WorkflowCommentRepository {
    pub async fn create<'e, E>(executor: E, comment: &WorkflowComment) -> DbErrorResult<WorkflowComment>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let created_at = comment.created_at.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO workflow_comments (
                    dataset_version_id, identity_id, comment_type, message, created_at
                ) VALUES (?, ?, ?, ?, ?)
                "#,
        )
        .bind(comment.dataset_version_id)
        .bind(comment.identity_id)
        .bind(&comment.comment_type)
        .bind(&comment.message)
        .bind(created_at)
        .execute(executor)
        .await?;

        Ok(WorkflowComment {
            id: result.last_insert_rowid(),
            ..comment.clone()
        })
    }

    pub async fn find_by_owner<'e, E>(
        executor: E,
        identity_id: i64,
    ) -> DbErrorResult<Vec<WorkflowComment>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let rows = sqlx::query_as::<_, WorkflowCommentRow>(
            r#"
                SELECT id, dataset_version_id, identity_id, comment_type, message, created_at
                FROM workflow_comments
                WHERE identity_id = ?
                ORDER BY created_at ASC, id ASC
                "#,
        )
        .bind(identity_id)
        .fetch_all(executor)
        .await?;

        rows.into_iter()
            .map(WorkflowCommentRow::into_model)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    pub async fn update_owner<'e, E>(executor: E, comment: &WorkflowComment) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("UPDATE workflow_comments SET identity_id = ? WHERE id = ?")
            .bind(comment.identity_id)
            .bind(comment.id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
