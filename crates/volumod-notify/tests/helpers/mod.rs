//! Shared test helpers for integration tests.

#![allow(dead_code)]

use std::collections::HashSet;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use volumod_core::AppError;
use volumod_core::config::NotificationsConfig;
use volumod_core::result::AppResult;
use volumod_core::types::{NotificationId, UserId};
use volumod_database::{AuditLogRepository, DatabasePool, NotificationRepository, UserRepository};
use volumod_entity::audit::{AuditEntry, AuditQuery, NewAuditEntry};
use volumod_entity::notification::{NewNotification, Notification};
use volumod_entity::user::{User, UserRole};
use volumod_notify::{AuditPersistence, NotificationCenter, NotificationPersistence};

/// Test context over a fresh in-memory database.
pub struct TestCenter {
    /// Database pool for direct queries.
    pub db: DatabasePool,
    /// Center wired to the SQL repositories.
    pub center: NotificationCenter,
    /// User records, for seeding roles.
    pub users: UserRepository,
}

impl TestCenter {
    /// Create a center with default settings.
    pub async fn new() -> Self {
        let db = DatabasePool::in_memory()
            .await
            .expect("Failed to open test database");
        let center = NotificationCenter::new(&db, &NotificationsConfig::default())
            .expect("Failed to build notification center");
        let users = UserRepository::new(db.pool().clone());
        Self { db, center, users }
    }

    /// Create a center whose notification writes fail for `rejected`.
    pub async fn rejecting(rejected: &[&str]) -> Self {
        let base = Self::new().await;
        let pool = base.db.pool().clone();
        let center = NotificationCenter::from_parts(
            Arc::new(RejectingStore::new(
                NotificationRepository::new(pool.clone()),
                rejected,
            )),
            Arc::new(AuditLogRepository::new(pool.clone())),
            Arc::new(UserRepository::new(pool)),
            &NotificationsConfig::default(),
        )
        .expect("Failed to build notification center");
        Self { center, ..base }
    }

    /// Create a center whose audit writes always fail.
    pub async fn failing_audit() -> Self {
        let base = Self::new().await;
        let pool = base.db.pool().clone();
        let center = NotificationCenter::from_parts(
            Arc::new(NotificationRepository::new(pool.clone())),
            Arc::new(FailingAudit),
            Arc::new(UserRepository::new(pool)),
            &NotificationsConfig::default(),
        )
        .expect("Failed to build notification center");
        Self { center, ..base }
    }

    /// Insert a user holding `role`.
    pub async fn seed_user(&self, id: &str, role: UserRole) {
        self.users
            .create(&User {
                user_id: UserId::from(id),
                username: id.to_lowercase(),
                full_name: format!("Test {id}"),
                role,
                created_at: Utc::now(),
            })
            .await
            .expect("Failed to seed user");
    }

    /// Audit entries with the given action, newest first.
    pub async fn audit_actions(&self, action: &str) -> Vec<AuditEntry> {
        self.center
            .audit()
            .search(&AuditQuery {
                action: Some(action.to_string()),
                ..Default::default()
            })
            .await
            .expect("Failed to search audit log")
    }
}

/// Shorthand for a user ID.
pub fn uid(id: &str) -> UserId {
    UserId::from(id)
}

/// Notification storage that refuses writes for selected recipients.
#[derive(Debug)]
pub struct RejectingStore {
    inner: NotificationRepository,
    rejected: HashSet<UserId>,
}

impl RejectingStore {
    pub fn new(inner: NotificationRepository, rejected: &[&str]) -> Self {
        Self {
            inner,
            rejected: rejected.iter().map(|id| UserId::from(*id)).collect(),
        }
    }
}

#[async_trait]
impl NotificationPersistence for RejectingStore {
    async fn insert(&self, data: &NewNotification) -> AppResult<Notification> {
        if self.rejected.contains(&data.recipient) {
            return Err(AppError::database(format!(
                "write rejected for {}",
                data.recipient
            )));
        }
        self.inner.create(data).await
    }

    async fn find_by_id(&self, id: NotificationId) -> AppResult<Option<Notification>> {
        self.inner.find_by_id(id).await
    }

    async fn list(
        &self,
        user_id: &UserId,
        limit: Option<u32>,
        include_read: bool,
    ) -> AppResult<Vec<Notification>> {
        self.inner.find_by_user(user_id, limit, include_read).await
    }

    async fn count_unread(&self, user_id: &UserId) -> AppResult<u64> {
        self.inner.count_unread(user_id).await
    }

    async fn mark_read(&self, id: NotificationId, at: DateTime<Utc>) -> AppResult<bool> {
        self.inner.mark_read(id, at).await
    }

    async fn mark_all_read(&self, user_id: &UserId, at: DateTime<Utc>) -> AppResult<u64> {
        self.inner.mark_all_read(user_id, at).await
    }

    async fn delete_read(&self, user_id: &UserId) -> AppResult<u64> {
        self.inner.delete_read(user_id).await
    }

    async fn delete(&self, id: NotificationId) -> AppResult<bool> {
        self.inner.delete(id).await
    }
}

/// Audit sink that is always unavailable.
#[derive(Debug)]
pub struct FailingAudit;

#[async_trait]
impl AuditPersistence for FailingAudit {
    async fn append(&self, _entry: &NewAuditEntry) -> AppResult<AuditEntry> {
        Err(AppError::database("audit store unavailable"))
    }

    async fn search(&self, _query: &AuditQuery) -> AppResult<Vec<AuditEntry>> {
        Ok(Vec::new())
    }
}
