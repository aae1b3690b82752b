//! User domain entities.

pub mod model;
pub mod role;

pub use model::{User, UserIdentity};
pub use role::UserRole;
