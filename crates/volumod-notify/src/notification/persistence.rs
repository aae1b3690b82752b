//! Storage seam for notifications.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use volumod_core::result::AppResult;
use volumod_core::types::{NotificationId, UserId};
use volumod_database::NotificationRepository;
use volumod_entity::notification::{NewNotification, Notification};

/// Durable notification storage.
///
/// Each operation must be atomic at the row level. The bulk operations must
/// run as one statement so concurrent callers converge on the same state.
#[async_trait]
pub trait NotificationPersistence: Send + Sync + std::fmt::Debug {
    /// Persist a rendered notification and return it with its id.
    async fn insert(&self, data: &NewNotification) -> AppResult<Notification>;

    /// Fetch one notification.
    async fn find_by_id(&self, id: NotificationId) -> AppResult<Option<Notification>>;

    /// A user's notifications, newest first.
    async fn list(
        &self,
        user_id: &UserId,
        limit: Option<u32>,
        include_read: bool,
    ) -> AppResult<Vec<Notification>>;

    /// Number of unread notifications for a user.
    async fn count_unread(&self, user_id: &UserId) -> AppResult<u64>;

    /// Set `read_at` if still unread. Returns whether a row changed.
    async fn mark_read(&self, id: NotificationId, at: DateTime<Utc>) -> AppResult<bool>;

    /// Set `read_at` on every unread row of a user.
    async fn mark_all_read(&self, user_id: &UserId, at: DateTime<Utc>) -> AppResult<u64>;

    /// Delete a user's read notifications.
    async fn delete_read(&self, user_id: &UserId) -> AppResult<u64>;

    /// Delete one notification.
    async fn delete(&self, id: NotificationId) -> AppResult<bool>;
}

#[async_trait]
impl NotificationPersistence for NotificationRepository {
    async fn insert(&self, data: &NewNotification) -> AppResult<Notification> {
        self.create(data).await
    }

    async fn find_by_id(&self, id: NotificationId) -> AppResult<Option<Notification>> {
        NotificationRepository::find_by_id(self, id).await
    }

    async fn list(
        &self,
        user_id: &UserId,
        limit: Option<u32>,
        include_read: bool,
    ) -> AppResult<Vec<Notification>> {
        self.find_by_user(user_id, limit, include_read).await
    }

    async fn count_unread(&self, user_id: &UserId) -> AppResult<u64> {
        NotificationRepository::count_unread(self, user_id).await
    }

    async fn mark_read(&self, id: NotificationId, at: DateTime<Utc>) -> AppResult<bool> {
        NotificationRepository::mark_read(self, id, at).await
    }

    async fn mark_all_read(&self, user_id: &UserId, at: DateTime<Utc>) -> AppResult<u64> {
        NotificationRepository::mark_all_read(self, user_id, at).await
    }

    async fn delete_read(&self, user_id: &UserId) -> AppResult<u64> {
        NotificationRepository::delete_read(self, user_id).await
    }

    async fn delete(&self, id: NotificationId) -> AppResult<bool> {
        NotificationRepository::delete(self, id).await
    }
}
