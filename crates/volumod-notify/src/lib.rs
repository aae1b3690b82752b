//! # volumod-notify
//!
//! Notification and audit layer for the Volumod production tracker. Domain
//! events fan out into one durable notification per recipient; recipients
//! read and clear them; state changes leave an append-only audit trail.
//!
//! Components follow constructor injection: storage, role membership, and
//! the acting user are all provided as `Arc<dyn Trait>` handles at
//! construction time. [`NotificationCenter`] wires them together.

pub mod audit;
pub mod center;
pub mod context;
pub mod directory;
pub mod notification;

pub use audit::{AuditLog, AuditPersistence};
pub use center::NotificationCenter;
pub use context::{CurrentUserResolver, RequestContext, SystemActor};
pub use directory::RoleDirectory;
pub use notification::{
    DispatchError, DispatchReport, DisplayNotification, DomainNotifier, NotificationDispatcher,
    NotificationPersistence, NotificationStore, NotificationTypeRegistry, ReadStateTracker,
    TypeInfo,
};
