//! Repository implementations for Volumod entities.

pub mod audit;
pub mod notification;
pub mod user;

pub use audit::AuditLogRepository;
pub use notification::NotificationRepository;
pub use user::UserRepository;
