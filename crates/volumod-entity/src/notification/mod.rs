//! Notification domain entities.

pub mod kind;
pub mod model;
pub mod priority;

pub use kind::NotificationType;
pub use model::{EntityReference, NewNotification, Notification};
pub use priority::Priority;
