//! # volumod-database
//!
//! SQLite connection management and concrete repository implementations
//! for notifications, audit entries, and role membership.

pub mod connection;
pub mod migration;
pub mod repositories;

pub use connection::DatabasePool;
pub use repositories::{AuditLogRepository, NotificationRepository, UserRepository};
