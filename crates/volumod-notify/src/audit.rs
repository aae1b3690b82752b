//! Best-effort audit logging.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use tracing::{debug, warn};

use volumod_core::result::AppResult;
use volumod_core::types::UserId;
use volumod_database::AuditLogRepository;
use volumod_entity::audit::{AuditEntry, AuditQuery, NewAuditEntry};

use crate::context::{CurrentUserResolver, SystemActor};

/// Durable sink for audit entries.
#[async_trait]
pub trait AuditPersistence: Send + Sync + std::fmt::Debug {
    /// Append one entry.
    async fn append(&self, entry: &NewAuditEntry) -> AppResult<AuditEntry>;

    /// Read entries back, newest first.
    async fn search(&self, query: &AuditQuery) -> AppResult<Vec<AuditEntry>>;
}

#[async_trait]
impl AuditPersistence for AuditLogRepository {
    async fn append(&self, entry: &NewAuditEntry) -> AppResult<AuditEntry> {
        self.create(entry).await
    }

    async fn search(&self, query: &AuditQuery) -> AppResult<Vec<AuditEntry>> {
        AuditLogRepository::search(self, query).await
    }
}

/// Append-only audit log.
///
/// Writes are best effort. A failed audit write is logged at `warn` and
/// swallowed: [`AuditLog::record`] returns `None` and the caller carries on.
/// Audit is not a transactional participant, so it must never fail or roll
/// back the notification or domain write it describes. Do not turn this
/// into a propagated error.
#[derive(Debug, Clone)]
pub struct AuditLog {
    sink: Arc<dyn AuditPersistence>,
    resolver: Arc<dyn CurrentUserResolver>,
    enabled: bool,
}

impl AuditLog {
    /// Create an audit log writing to `sink`, with no acting user.
    pub fn new(sink: Arc<dyn AuditPersistence>, enabled: bool) -> Self {
        Self {
            sink,
            resolver: Arc::new(SystemActor),
            enabled,
        }
    }

    /// A copy of this log that tags entries with `resolver`'s user.
    pub fn with_resolver(&self, resolver: Arc<dyn CurrentUserResolver>) -> Self {
        Self {
            sink: Arc::clone(&self.sink),
            resolver,
            enabled: self.enabled,
        }
    }

    /// The acting user, if any.
    pub fn current_actor(&self) -> Option<UserId> {
        self.resolver.current_user().map(|identity| identity.user_id)
    }

    /// Append an entry. Returns `None` when auditing is disabled or the
    /// write failed.
    pub async fn record(
        &self,
        actor: Option<&UserId>,
        action: &str,
        entity_type: &str,
        entity_id: Option<&str>,
        details: Option<serde_json::Value>,
    ) -> Option<AuditEntry> {
        if !self.enabled {
            return None;
        }

        let entry = NewAuditEntry {
            actor: actor.cloned(),
            action: action.to_string(),
            entity_type: entity_type.to_string(),
            entity_id: entity_id.map(String::from),
            details,
            created_at: Utc::now(),
        };

        match self.sink.append(&entry).await {
            Ok(stored) => {
                debug!(action, entity_type, audit_id = %stored.id, "Audit entry recorded");
                Some(stored)
            }
            Err(e) => {
                warn!(
                    action,
                    entity_type,
                    entity_id = entity_id.unwrap_or("-"),
                    error = %e,
                    "Audit write failed; continuing without audit entry"
                );
                None
            }
        }
    }

    /// Append an entry attributed to the current user.
    pub async fn record_current(
        &self,
        action: &str,
        entity_type: &str,
        entity_id: Option<&str>,
        details: Option<serde_json::Value>,
    ) -> Option<AuditEntry> {
        let actor = self.current_actor();
        self.record(actor.as_ref(), action, entity_type, entity_id, details)
            .await
    }

    /// Search the audit log. Unlike writes, read failures are returned.
    pub async fn search(&self, query: &AuditQuery) -> AppResult<Vec<AuditEntry>> {
        self.sink.search(query).await
    }
}
