//! Read-state transitions and deletion.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{debug, info};

use volumod_core::result::AppResult;
use volumod_core::types::{NotificationId, UserId};

use super::persistence::NotificationPersistence;
use crate::audit::AuditLog;

/// Moves notifications from unread to read, and removes them.
#[derive(Debug, Clone)]
pub struct ReadStateTracker {
    /// Notification storage.
    persistence: Arc<dyn NotificationPersistence>,
    /// Audit sink for state changes.
    audit: AuditLog,
}

impl ReadStateTracker {
    /// Creates a new tracker.
    pub fn new(persistence: Arc<dyn NotificationPersistence>, audit: AuditLog) -> Self {
        Self { persistence, audit }
    }

    /// A copy of this tracker auditing through `audit`.
    pub fn with_audit(&self, audit: AuditLog) -> Self {
        Self {
            persistence: Arc::clone(&self.persistence),
            audit,
        }
    }

    /// Mark one notification as read.
    ///
    /// Safe to repeat: an already read or unknown id is `Ok(false)` and the
    /// original `read_at` is kept.
    pub async fn mark_read(&self, id: NotificationId) -> AppResult<bool> {
        let changed = self.persistence.mark_read(id, Utc::now()).await?;

        if changed {
            let entity_id = id.to_string();
            self.audit
                .record_current("notification.read", "notification", Some(&entity_id), None)
                .await;
        } else {
            debug!(notification_id = %id, "Notification already read or missing");
        }

        Ok(changed)
    }

    /// Mark every unread notification of a user as read.
    pub async fn mark_all_read(&self, user_id: &UserId) -> AppResult<u64> {
        let affected = self.persistence.mark_all_read(user_id, Utc::now()).await?;

        if affected > 0 {
            info!(user_id = %user_id, affected, "Marked notifications read");
            self.audit
                .record_current(
                    "notification.read_all",
                    "notification",
                    None,
                    Some(json!({ "user_id": user_id.as_str(), "affected": affected })),
                )
                .await;
        }

        Ok(affected)
    }

    /// Delete a user's read notifications. Unread ones are kept.
    pub async fn purge_read(&self, user_id: &UserId) -> AppResult<u64> {
        let deleted = self.persistence.delete_read(user_id).await?;

        if deleted > 0 {
            info!(user_id = %user_id, deleted, "Purged read notifications");
            self.audit
                .record_current(
                    "notification.purge_read",
                    "notification",
                    None,
                    Some(json!({ "user_id": user_id.as_str(), "deleted": deleted })),
                )
                .await;
        }

        Ok(deleted)
    }

    /// Delete one notification regardless of its read state.
    pub async fn delete(&self, id: NotificationId) -> AppResult<bool> {
        let removed = self.persistence.delete(id).await?;

        if removed {
            let entity_id = id.to_string();
            self.audit
                .record_current("notification.delete", "notification", Some(&entity_id), None)
                .await;
        }

        Ok(removed)
    }
}
