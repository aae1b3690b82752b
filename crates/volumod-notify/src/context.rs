//! Acting-user resolution.
//!
//! The subsystem never reads an ambient session. Whoever drives a request
//! supplies a [`CurrentUserResolver`]; it is consulted only to tag audit
//! entries, never to decide who receives a notification.

use serde::{Deserialize, Serialize};

use volumod_core::types::UserId;
use volumod_entity::user::{UserIdentity, UserRole};

/// Resolves the user on whose behalf the current operation runs.
pub trait CurrentUserResolver: Send + Sync + std::fmt::Debug {
    /// The acting user, or `None` for system-initiated work.
    fn current_user(&self) -> Option<UserIdentity>;
}

/// Context for the current authenticated request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RequestContext {
    /// The authenticated user's ID.
    pub user_id: UserId,
    /// The user's role at login time.
    pub role: UserRole,
}

impl RequestContext {
    /// Creates a new request context.
    pub fn new(user_id: impl Into<UserId>, role: UserRole) -> Self {
        Self {
            user_id: user_id.into(),
            role,
        }
    }
}

impl CurrentUserResolver for RequestContext {
    fn current_user(&self) -> Option<UserIdentity> {
        Some(UserIdentity {
            user_id: self.user_id.clone(),
            role: self.role,
        })
    }
}

/// Resolver for background or system-initiated work: there is no actor.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemActor;

impl CurrentUserResolver for SystemActor {
    fn current_user(&self) -> Option<UserIdentity> {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_request_context_resolves_itself() {
        let ctx = RequestContext::new("U3", UserRole::Supervisor);
        let identity = ctx.current_user().expect("identity");
        assert_eq!(identity.user_id, UserId::from("U3"));
        assert_eq!(identity.role, UserRole::Supervisor);
    }

    #[test]
    fn test_system_actor_has_no_identity() {
        assert!(SystemActor.current_user().is_none());
    }
}
