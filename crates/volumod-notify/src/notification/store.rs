//! Notification creation and queries.

use std::sync::Arc;

use chrono::Utc;
use serde_json::json;
use tracing::{error, info};

use volumod_core::result::AppResult;
use volumod_core::types::UserId;
use volumod_entity::notification::{
    EntityReference, NewNotification, Notification, NotificationType, Priority,
};

use super::persistence::NotificationPersistence;
use super::registry::NotificationTypeRegistry;
use crate::audit::AuditLog;

/// Creates and lists per-recipient notifications.
#[derive(Debug, Clone)]
pub struct NotificationStore {
    /// Notification storage.
    persistence: Arc<dyn NotificationPersistence>,
    /// Template lookup.
    registry: NotificationTypeRegistry,
    /// Audit sink for creations.
    audit: AuditLog,
}

impl NotificationStore {
    /// Creates a new notification store.
    pub fn new(persistence: Arc<dyn NotificationPersistence>, audit: AuditLog) -> Self {
        Self {
            persistence,
            registry: NotificationTypeRegistry::new(),
            audit,
        }
    }

    /// A copy of this store auditing through `audit`.
    pub fn with_audit(&self, audit: AuditLog) -> Self {
        Self {
            persistence: Arc::clone(&self.persistence),
            registry: self.registry,
            audit,
        }
    }

    /// The underlying storage.
    pub fn persistence(&self) -> &Arc<dyn NotificationPersistence> {
        &self.persistence
    }

    /// Create a notification for one recipient.
    ///
    /// Title and message are rendered here, once, and stored as text. Later
    /// template changes do not alter existing notifications.
    pub async fn create(
        &self,
        recipient: &UserId,
        notification_type: NotificationType,
        reference: EntityReference,
        details: Option<&str>,
        priority: Priority,
    ) -> AppResult<Notification> {
        let (title, message) = self.registry.render(&notification_type, details);

        let data = NewNotification {
            recipient: recipient.clone(),
            notification_type,
            reference,
            title,
            message,
            priority,
            created_at: Utc::now(),
        };

        let notification = self.persistence.insert(&data).await.map_err(|e| {
            error!(
                recipient = %recipient,
                notification_type = %data.notification_type,
                error = %e,
                "Failed to store notification"
            );
            e
        })?;

        info!(
            notification_id = %notification.id,
            recipient = %notification.recipient,
            notification_type = %notification.notification_type,
            "Notification created"
        );

        let entity_id = notification.id.to_string();
        self.audit
            .record_current(
                "notification.create",
                "notification",
                Some(&entity_id),
                Some(json!({
                    "recipient": notification.recipient.as_str(),
                    "type": notification.notification_type.as_str(),
                    "reference": notification.reference.to_string(),
                    "priority": notification.priority.as_str(),
                })),
            )
            .await;

        Ok(notification)
    }

    /// List a user's notifications, newest first. `None` means no limit.
    pub async fn list(
        &self,
        user_id: &UserId,
        limit: Option<u32>,
        include_read: bool,
    ) -> AppResult<Vec<Notification>> {
        self.persistence.list(user_id, limit, include_read).await
    }

    /// Number of unread notifications for a user.
    pub async fn unread_count(&self, user_id: &UserId) -> AppResult<u64> {
        self.persistence.count_unread(user_id).await
    }
}
