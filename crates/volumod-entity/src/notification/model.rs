//! Notification entity model.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use volumod_core::types::{NotificationId, UserId};

use super::kind::NotificationType;
use super::priority::Priority;

/// Weak reference to the domain object a notification concerns.
///
/// The referenced entity may be deleted later; the notification keeps the
/// dangling reference and display code must tolerate failed lookups.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityReference {
    /// Kind of entity (`"task"`, `"issue"`, `"project"`).
    pub entity_type: String,
    /// Identifier of the entity within its kind.
    pub entity_id: String,
}

impl EntityReference {
    /// Create a reference.
    pub fn new(entity_type: impl Into<String>, entity_id: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            entity_id: entity_id.into(),
        }
    }
}

impl fmt::Display for EntityReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.entity_type, self.entity_id)
    }
}

/// A notification delivered to exactly one recipient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    /// Store-assigned identifier.
    pub id: NotificationId,
    /// The user who owns this notification.
    pub recipient: UserId,
    /// Event category.
    pub notification_type: NotificationType,
    /// The entity this notification is about.
    pub reference: EntityReference,
    /// Title rendered at creation time.
    pub title: String,
    /// Body rendered at creation time.
    pub message: String,
    /// Advisory priority.
    pub priority: Priority,
    /// When the notification was created.
    pub created_at: DateTime<Utc>,
    /// When the recipient acknowledged it; `None` while unread.
    pub read_at: Option<DateTime<Utc>>,
}

impl Notification {
    /// Check if the notification has not been read yet.
    pub fn is_unread(&self) -> bool {
        self.read_at.is_none()
    }
}

/// A fully rendered notification that has not been persisted yet.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewNotification {
    /// The recipient user.
    pub recipient: UserId,
    /// Event category.
    pub notification_type: NotificationType,
    /// The entity this notification is about.
    pub reference: EntityReference,
    /// Rendered title.
    pub title: String,
    /// Rendered message.
    pub message: String,
    /// Advisory priority.
    pub priority: Priority,
    /// Creation timestamp.
    pub created_at: DateTime<Utc>,
}
