//! Fan-out of one event to many recipients.

use std::collections::HashSet;
use std::sync::Arc;

use tracing::{info, warn};

use volumod_core::types::{NotificationId, UserId};
use volumod_entity::notification::{EntityReference, Notification, NotificationType, Priority};
use volumod_entity::user::UserRole;

use super::error::DispatchError;
use super::store::NotificationStore;
use crate::directory::RoleDirectory;

/// Outcome of a fully successful fan-out.
#[derive(Debug, Clone, Default)]
pub struct DispatchReport {
    /// One stored notification per recipient, in attempt order.
    pub delivered: Vec<Notification>,
}

impl DispatchReport {
    /// Number of recipients that received the notification.
    pub fn recipient_count(&self) -> usize {
        self.delivered.len()
    }

    /// Whether nobody was notified.
    pub fn is_empty(&self) -> bool {
        self.delivered.is_empty()
    }

    /// IDs of the stored notifications.
    pub fn ids(&self) -> Vec<NotificationId> {
        self.delivered.iter().map(|n| n.id).collect()
    }
}

/// Delivers one logical event as independent per-recipient notifications.
///
/// There is no all-or-nothing semantics: every recipient is attempted and
/// stored notifications stay stored when another recipient fails. Nothing
/// is retried.
#[derive(Debug, Clone)]
pub struct NotificationDispatcher {
    /// Store used for each recipient.
    store: NotificationStore,
    /// Role membership lookup.
    directory: Arc<dyn RoleDirectory>,
}

impl NotificationDispatcher {
    /// Creates a new dispatcher.
    pub fn new(store: NotificationStore, directory: Arc<dyn RoleDirectory>) -> Self {
        Self { store, directory }
    }

    /// The store this dispatcher writes through.
    pub fn store(&self) -> &NotificationStore {
        &self.store
    }

    /// Notify a single user.
    pub async fn notify_user(
        &self,
        user_id: &UserId,
        notification_type: &NotificationType,
        reference: &EntityReference,
        details: Option<&str>,
        priority: Priority,
    ) -> Result<Notification, DispatchError> {
        let notification = self
            .store
            .create(
                user_id,
                notification_type.clone(),
                reference.clone(),
                details,
                priority,
            )
            .await?;
        Ok(notification)
    }

    /// Notify an explicit list of users.
    ///
    /// Duplicate IDs are notified once. An empty list succeeds with an empty
    /// report. If every write fails the result is
    /// [`DispatchError::Undelivered`]; if only some fail it is
    /// [`DispatchError::PartialFailure`]. Both carry the failed recipients.
    pub async fn notify_users(
        &self,
        user_ids: &[UserId],
        notification_type: &NotificationType,
        reference: &EntityReference,
        details: Option<&str>,
        priority: Priority,
    ) -> Result<DispatchReport, DispatchError> {
        let mut seen = HashSet::with_capacity(user_ids.len());
        let mut delivered = Vec::with_capacity(user_ids.len());
        let mut failed = Vec::new();
        let mut last_error = None;

        for user_id in user_ids {
            if !seen.insert(user_id) {
                continue;
            }

            match self
                .store
                .create(
                    user_id,
                    notification_type.clone(),
                    reference.clone(),
                    details,
                    priority,
                )
                .await
            {
                Ok(notification) => delivered.push(notification),
                Err(e) => {
                    warn!(
                        recipient = %user_id,
                        notification_type = %notification_type,
                        reference = %reference,
                        error = %e,
                        "Notification delivery failed for recipient"
                    );
                    failed.push(user_id.clone());
                    last_error = Some(e);
                }
            }
        }

        match last_error {
            None => Ok(DispatchReport { delivered }),
            Some(last_error) if delivered.is_empty() => Err(DispatchError::Undelivered {
                failed,
                last_error,
            }),
            Some(_) => {
                warn!(
                    delivered = delivered.len(),
                    failed = failed.len(),
                    notification_type = %notification_type,
                    "Partial notification delivery"
                );
                Err(DispatchError::PartialFailure {
                    delivered: delivered.iter().map(|n| n.id).collect(),
                    failed,
                })
            }
        }
    }

    /// Notify every user holding `role` at call time.
    ///
    /// Membership is a snapshot: users who gain the role later are not
    /// notified retroactively. A role with no members is not an error.
    pub async fn notify_role(
        &self,
        role: UserRole,
        notification_type: &NotificationType,
        reference: &EntityReference,
        details: Option<&str>,
        priority: Priority,
    ) -> Result<DispatchReport, DispatchError> {
        let members = self.directory.members_of(role).await?;

        if members.is_empty() {
            info!(role = %role, notification_type = %notification_type, "No users hold role; nothing to notify");
            return Ok(DispatchReport::default());
        }

        self.notify_users(&members, notification_type, reference, details, priority)
            .await
    }
}
