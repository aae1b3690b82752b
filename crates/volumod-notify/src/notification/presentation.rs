//! Display shaping for the presentation layer.

use chrono::{DateTime, Utc};
use serde::Serialize;

use volumod_core::types::NotificationId;
use volumod_entity::notification::{EntityReference, Notification, Priority};

use super::registry::NotificationTypeRegistry;

/// A notification ready to be shown.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DisplayNotification {
    pub id: NotificationId,
    pub title: String,
    pub message: String,
    pub priority: Priority,
    pub reference: EntityReference,
    pub created_at: DateTime<Utc>,
    /// Human relative time, e.g. `"5m ago"` or `"Mar 04"`.
    pub time: String,
    /// Mirrors `read_at.is_some()`.
    pub seen: bool,
    pub icon: &'static str,
    pub color: &'static str,
}

impl DisplayNotification {
    /// Build the display form of `notification` as seen at `now`.
    pub fn from_notification(notification: &Notification, now: DateTime<Utc>) -> Self {
        let info = NotificationTypeRegistry::new().lookup(&notification.notification_type);
        Self {
            id: notification.id,
            title: notification.title.clone(),
            message: notification.message.clone(),
            priority: notification.priority,
            reference: notification.reference.clone(),
            created_at: notification.created_at,
            time: relative_time(notification.created_at, now),
            seen: notification.read_at.is_some(),
            icon: info.icon,
            color: info.color,
        }
    }
}

/// Format `created_at` relative to `now`.
///
/// Timestamps in the future render as `"0m ago"`.
pub fn relative_time(created_at: DateTime<Utc>, now: DateTime<Utc>) -> String {
    let elapsed = now - created_at;

    if elapsed.num_days() == 1 {
        return "Yesterday".to_string();
    }
    if elapsed.num_days() > 1 {
        return created_at.format("%b %d").to_string();
    }

    let hours = elapsed.num_hours();
    if hours >= 1 {
        format!("{hours}h ago")
    } else {
        format!("{}m ago", elapsed.num_minutes().max(0))
    }
}
