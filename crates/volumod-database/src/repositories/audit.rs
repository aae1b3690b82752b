//! Audit log repository implementation.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use volumod_core::error::{AppError, ErrorKind};
use volumod_core::result::AppResult;
use volumod_core::types::{AuditEntryId, UserId};
use volumod_entity::audit::{AuditEntry, AuditQuery, NewAuditEntry};

const SELECT_COLUMNS: &str =
    "id, actor_user_id, action, entity_type, entity_id, details, created_at";

/// Raw `audit_log` row. `details` is stored as JSON text.
#[derive(Debug, FromRow)]
struct AuditRow {
    id: i64,
    actor_user_id: Option<String>,
    action: String,
    entity_type: String,
    entity_id: Option<String>,
    details: Option<String>,
    created_at: DateTime<Utc>,
}

impl TryFrom<AuditRow> for AuditEntry {
    type Error = AppError;

    fn try_from(row: AuditRow) -> Result<Self, Self::Error> {
        let details = row
            .details
            .as_deref()
            .map(serde_json::from_str::<serde_json::Value>)
            .transpose()?;

        Ok(Self {
            id: AuditEntryId(row.id),
            actor: row.actor_user_id.map(UserId::from),
            action: row.action,
            entity_type: row.entity_type,
            entity_id: row.entity_id,
            details,
            created_at: row.created_at,
        })
    }
}

/// Repository for audit log entries. Insert and read only.
#[derive(Debug, Clone)]
pub struct AuditLogRepository {
    pool: SqlitePool,
}

impl AuditLogRepository {
    /// Create a new audit log repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Append an audit log entry.
    pub async fn create(&self, data: &NewAuditEntry) -> AppResult<AuditEntry> {
        let details = data
            .details
            .as_ref()
            .map(serde_json::to_string)
            .transpose()?;

        let sql = format!(
            "INSERT INTO audit_log (actor_user_id, action, entity_type, entity_id, details, created_at) \
             VALUES (?, ?, ?, ?, ?, ?) RETURNING {SELECT_COLUMNS}"
        );
        let row = sqlx::query_as::<_, AuditRow>(&sql)
            .bind(data.actor.as_ref().map(UserId::as_str))
            .bind(&data.action)
            .bind(&data.entity_type)
            .bind(data.entity_id.as_deref())
            .bind(details)
            .bind(data.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to create audit entry", e)
            })?;

        AuditEntry::try_from(row)
    }

    /// Find an audit entry by ID.
    pub async fn find_by_id(&self, id: AuditEntryId) -> AppResult<Option<AuditEntry>> {
        let sql = format!("SELECT {SELECT_COLUMNS} FROM audit_log WHERE id = ?");
        let row = sqlx::query_as::<_, AuditRow>(&sql)
            .bind(id.get())
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find audit entry", e)
            })?;

        row.map(AuditEntry::try_from).transpose()
    }

    /// Search the audit log, newest first.
    pub async fn search(&self, query: &AuditQuery) -> AppResult<Vec<AuditEntry>> {
        let mut conditions = Vec::new();
        if query.actor.is_some() {
            conditions.push("actor_user_id = ?");
        }
        if query.action.is_some() {
            conditions.push("action = ?");
        }
        if query.entity_type.is_some() {
            conditions.push("entity_type = ?");
        }
        if query.entity_id.is_some() {
            conditions.push("entity_id = ?");
        }

        let where_clause = if conditions.is_empty() {
            String::new()
        } else {
            format!("WHERE {}", conditions.join(" AND "))
        };

        let sql = format!(
            "SELECT {SELECT_COLUMNS} FROM audit_log {where_clause} \
             ORDER BY created_at DESC, id DESC LIMIT ?"
        );

        let mut select = sqlx::query_as::<_, AuditRow>(&sql);
        if let Some(actor) = &query.actor {
            select = select.bind(actor.as_str());
        }
        if let Some(action) = &query.action {
            select = select.bind(action.as_str());
        }
        if let Some(entity_type) = &query.entity_type {
            select = select.bind(entity_type.as_str());
        }
        if let Some(entity_id) = &query.entity_id {
            select = select.bind(entity_id.as_str());
        }

        let rows = select
            .bind(query.limit.map(i64::from).unwrap_or(-1))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to search audit log", e)
            })?;

        rows.into_iter().map(AuditEntry::try_from).collect()
    }
}
