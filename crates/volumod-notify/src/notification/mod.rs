//! Notification creation, fan-out, read state, and display.

pub mod dispatcher;
pub mod error;
pub mod events;
pub mod persistence;
pub mod presentation;
pub mod read_state;
pub mod registry;
pub mod store;

pub use dispatcher::{DispatchReport, NotificationDispatcher};
pub use error::DispatchError;
pub use events::DomainNotifier;
pub use persistence::NotificationPersistence;
pub use presentation::DisplayNotification;
pub use read_state::ReadStateTracker;
pub use registry::{NotificationTypeRegistry, TypeInfo};
pub use store::NotificationStore;
