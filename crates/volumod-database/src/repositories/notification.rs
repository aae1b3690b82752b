//! Notification repository implementation.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use volumod_core::error::{AppError, ErrorKind};
use volumod_core::result::AppResult;
use volumod_core::types::{NotificationId, UserId};
use volumod_entity::notification::{
    EntityReference, NewNotification, Notification, NotificationType, Priority,
};

const SELECT_COLUMNS: &str = "id, user_id, notification_type, entity_type, entity_id, \
     title, message, priority, created_at, read_at";

/// Raw `notifications` row.
#[derive(Debug, FromRow)]
struct NotificationRow {
    id: i64,
    user_id: String,
    notification_type: String,
    entity_type: String,
    entity_id: String,
    title: String,
    message: String,
    priority: String,
    created_at: DateTime<Utc>,
    read_at: Option<DateTime<Utc>>,
}

impl From<NotificationRow> for Notification {
    fn from(row: NotificationRow) -> Self {
        Self {
            id: NotificationId(row.id),
            recipient: UserId::from(row.user_id),
            notification_type: NotificationType::from(row.notification_type),
            reference: EntityReference::new(row.entity_type, row.entity_id),
            title: row.title,
            message: row.message,
            priority: Priority::from_str_value(&row.priority),
            created_at: row.created_at,
            read_at: row.read_at,
        }
    }
}

/// Repository for notification records.
///
/// Every method is a single SQL statement, so each is atomic at the row
/// level without an explicit transaction.
#[derive(Debug, Clone)]
pub struct NotificationRepository {
    pool: SqlitePool,
}

impl NotificationRepository {
    /// Create a new notification repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a rendered notification and return the stored record.
    pub async fn create(&self, data: &NewNotification) -> AppResult<Notification> {
        let sql = format!(
            "INSERT INTO notifications (user_id, notification_type, entity_type, entity_id, \
             title, message, priority, created_at) \
             VALUES (?, ?, ?, ?, ?, ?, ?, ?) RETURNING {SELECT_COLUMNS}"
        );
        sqlx::query_as::<_, NotificationRow>(&sql)
            .bind(data.recipient.as_str())
            .bind(data.notification_type.as_str())
            .bind(&data.reference.entity_type)
            .bind(&data.reference.entity_id)
            .bind(&data.title)
            .bind(&data.message)
            .bind(data.priority.as_str())
            .bind(data.created_at)
            .fetch_one(&self.pool)
            .await
            .map(Notification::from)
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to create notification", e)
            })
    }

    /// Find a notification by ID.
    pub async fn find_by_id(&self, id: NotificationId) -> AppResult<Option<Notification>> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM notifications WHERE id = ?");
        sqlx::query_as::<_, NotificationRow>(&sql)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map(|row| row.map(Notification::from))
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find notification", e)
            })
    }

    /// List notifications for a user, newest first.
    ///
    /// Ties on `created_at` are broken by descending id, i.e. the most
    /// recently inserted row comes first. `None` means no limit.
    pub async fn find_by_user(
        &self,
        user_id: &UserId,
        limit: Option<u32>,
        include_read: bool,
    ) -> AppResult<Vec<Notification>> {
        let filter = if include_read {
            "user_id = ?"
        } else {
            "user_id = ? AND read_at IS NULL"
        };
        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM notifications WHERE {filter} \
             ORDER BY created_at DESC, id DESC LIMIT ?"
        );
        // SQLite treats a negative LIMIT as unbounded.
        let limit = limit.map(i64::from).unwrap_or(-1);

        let rows = sqlx::query_as::<_, NotificationRow>(&sql)
            .bind(user_id.as_str())
            .bind(limit)
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to list notifications", e)
            })?;

        Ok(rows.into_iter().map(Notification::from).collect())
    }

    /// Count unread notifications for a user.
    pub async fn count_unread(&self, user_id: &UserId) -> AppResult<u64> {
        let count: i64 = sqlx::query_scalar(
            "SELECT COUNT(*) FROM notifications WHERE user_id = ? AND read_at IS NULL",
        )
        .bind(user_id.as_str())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to count unread", e))?;
        Ok(count.max(0) as u64)
    }

    /// Mark a notification as read if it is still unread.
    ///
    /// Returns `true` when this call performed the transition; an already
    /// read or missing notification is left untouched.
    pub async fn mark_read(&self, id: NotificationId, at: DateTime<Utc>) -> AppResult<bool> {
        let result =
            sqlx::query("UPDATE notifications SET read_at = ? WHERE id = ? AND read_at IS NULL")
                .bind(at)
                .bind(id.get())
                .execute(&self.pool)
                .await
                .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark read", e))?;
        Ok(result.rows_affected() > 0)
    }

    /// Mark every unread notification of a user as read in one statement.
    pub async fn mark_all_read(&self, user_id: &UserId, at: DateTime<Utc>) -> AppResult<u64> {
        let result = sqlx::query(
            "UPDATE notifications SET read_at = ? WHERE user_id = ? AND read_at IS NULL",
        )
        .bind(at)
        .bind(user_id.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark all read", e))?;
        Ok(result.rows_affected())
    }

    /// Delete all read notifications of a user.
    pub async fn delete_read(&self, user_id: &UserId) -> AppResult<u64> {
        let result =
            sqlx::query("DELETE FROM notifications WHERE user_id = ? AND read_at IS NOT NULL")
                .bind(user_id.as_str())
                .execute(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(
                        ErrorKind::Database,
                        "Failed to delete read notifications",
                        e,
                    )
                })?;
        Ok(result.rows_affected())
    }

    /// Delete a single notification. Returns `true` if a row was removed.
    pub async fn delete(&self, id: NotificationId) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM notifications WHERE id = ?")
            .bind(id.get())
            .execute(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to delete notification", e)
            })?;
        Ok(result.rows_affected() > 0)
    }
}
