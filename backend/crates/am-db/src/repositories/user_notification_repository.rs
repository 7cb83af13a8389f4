use crate::DbErrorResult;
use crate::decode::timestamp;

use am_core::UserNotification;

use sqlx::{FromRow, Sqlite};

const TABLE: &str = "user_notifications";

#[derive(FromRow)]
struct UserNotificationRow {
    id: i64,
    recipient_id: i64,
    notification_type: String,
    object_id: Option<i64>,
    sent_at: i64,
    read: bool,
    emailed: bool,
}

impl UserNotificationRow {
    fn into_model(self) -> DbErrorResult<UserNotification> {
        Ok(UserNotification {
            id: self.id,
            recipient_id: self.recipient_id,
            notification_type: self.notification_type,
            object_id: self.object_id,
            sent_at: timestamp(TABLE, "sent_at", self.sent_at)?,
            read: self.read,
            emailed: self.emailed,
        })
    }
}

pub struct UserNotificationRepository;

impl UserNotificationRepository {
    pub async fn create<'e, E>(
        executor: E,
        notification: &UserNotification,
    ) -> DbErrorResult<UserNotification>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let sent_at = notification.sent_at.timestamp();

        let result = sqlx::query(
            r#"
                INSERT INTO user_notifications (
                    recipient_id, notification_type, object_id, sent_at, read, emailed
                ) VALUES (?, ?, ?, ?, ?, ?)
                "#,
        )
        .bind(notification.recipient_id)
        .bind(&notification.notification_type)
        .bind(notification.object_id)
        .bind(sent_at)
        .bind(notification.read)
        .bind(notification.emailed)
        .execute(executor)
        .await?;

        Ok(UserNotification {
            id: result.last_insert_rowid(),
            ..notification.clone()
        })
    }

    pub async fn find_by_owner<'e, E>(
        executor: E,
        recipient_id: i64,
    ) -> DbErrorResult<Vec<UserNotification>>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let rows = sqlx::query_as::<_, UserNotificationRow>(
            r#"
                SELECT id, recipient_id, notification_type, object_id, sent_at, read, emailed
                FROM user_notifications
                WHERE recipient_id = ?
                ORDER BY sent_at DESC, id DESC
                "#,
        )
        .bind(recipient_id)
        .fetch_all(executor)
        .await?;

        rows.into_iter()
            .map(UserNotificationRow::into_model)
            .collect::<DbErrorResult<Vec<_>>>()
    }

    pub async fn update_owner<'e, E>(executor: E, notification: &UserNotification) -> DbErrorResult<bool>
    where
        E: sqlx::Executor<'e, Database = Sqlite>,
    {
        let result = sqlx::query("UPDATE user_notifications SET recipient_id = ? WHERE id = ?")
            .bind(notification.recipient_id)
            .bind(notification.id)
            .execute(executor)
            .await?;

        Ok(result.rows_affected() > 0)
    }
}
