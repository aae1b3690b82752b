//! Single entry point for callers of the notification subsystem.

use std::sync::Arc;

use chrono::Utc;

use volumod_core::config::NotificationsConfig;
use volumod_core::error::AppError;
use volumod_core::result::AppResult;
use volumod_core::types::{NotificationId, UserId};
use volumod_database::{AuditLogRepository, DatabasePool, NotificationRepository, UserRepository};
use volumod_entity::notification::{EntityReference, Notification, NotificationType, Priority};
use volumod_entity::user::UserRole;

use crate::audit::{AuditLog, AuditPersistence};
use crate::context::CurrentUserResolver;
use crate::directory::RoleDirectory;
use crate::notification::{
    DispatchError, DispatchReport, DisplayNotification, DomainNotifier, NotificationDispatcher,
    NotificationPersistence, NotificationStore, ReadStateTracker,
};

/// Wires the store, dispatcher, read-state tracker, and audit log together.
///
/// Cloning is cheap; every component shares the same storage handles.
#[derive(Debug, Clone)]
pub struct NotificationCenter {
    store: NotificationStore,
    dispatcher: NotificationDispatcher,
    events: DomainNotifier,
    read_state: ReadStateTracker,
    audit: AuditLog,
    directory: Arc<dyn RoleDirectory>,
    default_list_limit: u32,
    panel_limit: u32,
}

impl NotificationCenter {
    /// Build a center backed by the SQLite repositories.
    pub fn new(db: &DatabasePool, config: &NotificationsConfig) -> AppResult<Self> {
        let pool = db.pool().clone();
        Self::from_parts(
            Arc::new(NotificationRepository::new(pool.clone())),
            Arc::new(AuditLogRepository::new(pool.clone())),
            Arc::new(UserRepository::new(pool)),
            config,
        )
    }

    /// Build a center from explicit storage implementations.
    pub fn from_parts(
        notifications: Arc<dyn NotificationPersistence>,
        audit_sink: Arc<dyn AuditPersistence>,
        directory: Arc<dyn RoleDirectory>,
        config: &NotificationsConfig,
    ) -> AppResult<Self> {
        let manager_role: UserRole = config.manager_role.parse().map_err(|_| {
            AppError::configuration(format!(
                "Unknown manager role '{}' in notifications config",
                config.manager_role
            ))
        })?;

        let audit = AuditLog::new(audit_sink, config.audit_enabled);
        let store = NotificationStore::new(notifications, audit.clone());
        let read_state = ReadStateTracker::new(Arc::clone(store.persistence()), audit.clone());
        let dispatcher = NotificationDispatcher::new(store.clone(), Arc::clone(&directory));
        let events = DomainNotifier::new(dispatcher.clone(), manager_role);

        Ok(Self {
            store,
            dispatcher,
            events,
            read_state,
            audit,
            directory,
            default_list_limit: config.default_list_limit,
            panel_limit: config.panel_limit,
        })
    }

    /// A handle whose audit entries are attributed to `resolver`'s user.
    pub fn with_actor(&self, resolver: Arc<dyn CurrentUserResolver>) -> Self {
        let audit = self.audit.with_resolver(resolver);
        let store = self.store.with_audit(audit.clone());
        let dispatcher = NotificationDispatcher::new(store.clone(), Arc::clone(&self.directory));
        let events = DomainNotifier::new(dispatcher.clone(), self.events.manager_role());

        Self {
            read_state: self.read_state.with_audit(audit.clone()),
            store,
            dispatcher,
            events,
            audit,
            directory: Arc::clone(&self.directory),
            default_list_limit: self.default_list_limit,
            panel_limit: self.panel_limit,
        }
    }

    /// Create one notification for one recipient.
    pub async fn create_notification(
        &self,
        recipient: &UserId,
        notification_type: NotificationType,
        reference: EntityReference,
        details: Option<&str>,
        priority: Priority,
    ) -> AppResult<Notification> {
        self.store
            .create(recipient, notification_type, reference, details, priority)
            .await
    }

    /// See [`NotificationDispatcher::notify_user`].
    pub async fn notify_user(
        &self,
        user_id: &UserId,
        notification_type: &NotificationType,
        reference: &EntityReference,
        details: Option<&str>,
        priority: Priority,
    ) -> Result<Notification, DispatchError> {
        self.dispatcher
            .notify_user(user_id, notification_type, reference, details, priority)
            .await
    }

    /// See [`NotificationDispatcher::notify_users`].
    pub async fn notify_users(
        &self,
        user_ids: &[UserId],
        notification_type: &NotificationType,
        reference: &EntityReference,
        details: Option<&str>,
        priority: Priority,
    ) -> Result<DispatchReport, DispatchError> {
        self.dispatcher
            .notify_users(user_ids, notification_type, reference, details, priority)
            .await
    }

    /// See [`NotificationDispatcher::notify_role`].
    pub async fn notify_role(
        &self,
        role: UserRole,
        notification_type: &NotificationType,
        reference: &EntityReference,
        details: Option<&str>,
        priority: Priority,
    ) -> Result<DispatchReport, DispatchError> {
        self.dispatcher
            .notify_role(role, notification_type, reference, details, priority)
            .await
    }

    /// Task, issue, and project event helpers.
    pub fn events(&self) -> &DomainNotifier {
        &self.events
    }

    /// A user's notifications in display form, newest first.
    ///
    /// `None` uses the configured default limit.
    pub async fn list_notifications(
        &self,
        user_id: &UserId,
        limit: Option<u32>,
        include_read: bool,
    ) -> AppResult<Vec<DisplayNotification>> {
        let limit = limit.unwrap_or(self.default_list_limit);
        let notifications = self.store.list(user_id, Some(limit), include_read).await?;
        let now = Utc::now();
        Ok(notifications
            .iter()
            .map(|n| DisplayNotification::from_notification(n, now))
            .collect())
    }

    /// Unread notifications for the header panel.
    pub async fn panel_notifications(&self, user_id: &UserId) -> AppResult<Vec<DisplayNotification>> {
        self.list_notifications(user_id, Some(self.panel_limit), false)
            .await
    }

    /// Fetch one stored notification.
    pub async fn get_notification(&self, id: NotificationId) -> AppResult<Option<Notification>> {
        self.store.persistence().find_by_id(id).await
    }

    /// Number of unread notifications for a user.
    pub async fn get_unread_count(&self, user_id: &UserId) -> AppResult<u64> {
        self.store.unread_count(user_id).await
    }

    /// See [`ReadStateTracker::mark_read`].
    pub async fn mark_read(&self, id: NotificationId) -> AppResult<bool> {
        self.read_state.mark_read(id).await
    }

    /// See [`ReadStateTracker::mark_all_read`].
    pub async fn mark_all_read(&self, user_id: &UserId) -> AppResult<u64> {
        self.read_state.mark_all_read(user_id).await
    }

    /// See [`ReadStateTracker::purge_read`].
    pub async fn purge_read(&self, user_id: &UserId) -> AppResult<u64> {
        self.read_state.purge_read(user_id).await
    }

    /// See [`ReadStateTracker::delete`].
    pub async fn delete_notification(&self, id: NotificationId) -> AppResult<bool> {
        self.read_state.delete(id).await
    }

    /// The audit log.
    pub fn audit(&self) -> &AuditLog {
        &self.audit
    }

    /// The underlying store, for unbounded queries.
    pub fn store(&self) -> &NotificationStore {
        &self.store
    }
}
