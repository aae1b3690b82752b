//! Audit log domain entities.

pub mod model;

pub use model::{AuditEntry, AuditQuery, NewAuditEntry};
