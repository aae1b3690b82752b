//! Audit log entry entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use volumod_core::types::{AuditEntryId, UserId};

/// An immutable audit log entry recording an action against an entity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    /// Unique audit entry identifier.
    pub id: AuditEntryId,
    /// The user who performed the action; `None` for system-initiated actions.
    pub actor: Option<UserId>,
    /// The action that was performed (e.g., `"notification.read"`).
    pub action: String,
    /// The type of target entity (e.g., `"notification"`, `"task"`).
    pub entity_type: String,
    /// The target entity ID; `None` for bulk actions.
    pub entity_id: Option<String>,
    /// Additional details about the action (JSON).
    pub details: Option<serde_json::Value>,
    /// When the action occurred.
    pub created_at: DateTime<Utc>,
}

/// Data required to append a new audit log entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewAuditEntry {
    /// The acting user, if any.
    pub actor: Option<UserId>,
    /// The action performed.
    pub action: String,
    /// Target entity type.
    pub entity_type: String,
    /// Target entity ID.
    pub entity_id: Option<String>,
    /// Additional details.
    pub details: Option<serde_json::Value>,
    /// When the action occurred.
    pub created_at: DateTime<Utc>,
}

/// Filters for reading back the audit log. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AuditQuery {
    /// Only entries by this actor.
    pub actor: Option<UserId>,
    /// Only entries with this action.
    pub action: Option<String>,
    /// Only entries against this entity type.
    pub entity_type: Option<String>,
    /// Only entries against this entity id.
    pub entity_id: Option<String>,
    /// Maximum number of entries, newest first; `None` for all.
    pub limit: Option<u32>,
}
