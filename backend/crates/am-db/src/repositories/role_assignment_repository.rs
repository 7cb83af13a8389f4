use crate::DbErrorResult;

use am_core::RoleAssignment;

use sqlx::{FromRow, Sqlite};

#[derive(FromRow)]
struct RoleAssignmentRow {
    id: i64,
    assignee_identifier: String,
    definition_point_id: i64,
    role: String,
    private_url_token: Option<String>,
}

impl From<RoleAssignmentRow> for RoleAssignment {
    fn from(row: RoleAssignmentRow) -> Self {
        RoleAssignment {
            id: row.id,
            assignee_identifier: row.assignee_identifier,
            definition_point_id: row.definition_point_id,
            role: row.role,
            private_url_token: row.private_url_token,
        }
    }
}

pub struct RoleAssignmentRepository;

impl RoleAssignmentRepository {
    pub async fn create<'e, E>(executor: E, assignment: &RoleAssignment) -> DbErrorResult<RoleAssignment>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            r#"
                INSERT INTO role_assignments (
                    assignee_identifier, definition_point_id, role, private_url_token
                ) VALUES (?, ?, ?, ?)
                "#,
        )
        .bind(&assignment.assignee_identifier)
        .bind(assignment.definition_point_id)
        .bind(&assignment.role)
        .bind(&assignment.private_url_token)
        .execute(executor)
        .await?;

        Ok(RoleAssignment {
            id: result.last_insert_rowid(),
            ..assignment.clone()
        })
    }

    /// Every grant addressed to `assignee_identifier` (full principal, e.g. `@alice`).
    pub async fn find_by_assignee<'e, E>(
        executor: E,
        assignee_identifier: &str,
    ) -> DbErrorResult<Vec<RoleAssignment>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let rows = sqlx::query_as::<_, RoleAssignmentRow>(
            r#"
                SELECT id, assignee_identifier, definition_point_id, role, private_url_token
                FROM role_assignments
                WHERE assignee_identifier = ?
                ORDER BY id ASC
                "#,
        )
        .bind(assignee_identifier)
        .fetch_all(executor)
        .await?;

        Ok(rows.into_iter().map(RoleAssignment::from).collect())
    }

    /// Re-address one grant. Only the assignee column changes.
    pub async fn update_assignee<'e, E>(executor: E, assignment: &RoleAssignment) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query(
            r#"
                UPDATE role_assignments
                SET assignee_identifier = ?
                WHERE id = ?
                "#,
        )
        .bind(&assignment.assignee_identifier)
        .bind(assignment.id)
        .execute(executor)
        .await?;

        Ok(result.rows_affected() > 0)
    }

    /// Remove every grant still addressed to `assignee_identifier`.
    pub async fn delete_by_assignee<'e, E>(executor: E, assignee_identifier: &str) -> DbErrorResult<u64>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("DELETE FROM role_assignments WHERE assignee_identifier = ?")
            .bind(assignee_identifier)
            .execute(executor)
            .await?;

        Ok(result.rows_affected())
    }
}
