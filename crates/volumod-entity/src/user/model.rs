//! User entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use volumod_core::types::UserId;

use super::role::UserRole;

/// A user of the production tracker, as far as notification routing needs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier.
    pub user_id: UserId,
    /// Unique login name.
    pub username: String,
    /// Human-readable display name.
    pub full_name: String,
    /// Role used for role-based fan-out.
    pub role: UserRole,
    /// When the user was created.
    pub created_at: DateTime<Utc>,
}

/// The acting user as reported by the authentication layer.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct UserIdentity {
    /// The user's ID.
    pub user_id: UserId,
    /// The user's role.
    pub role: UserRole,
}
