//! Role membership resolution for role-based fan-out.

use async_trait::async_trait;

use volumod_core::result::AppResult;
use volumod_core::types::UserId;
use volumod_database::UserRepository;
use volumod_entity::user::UserRole;

/// Resolves which users currently hold a role.
///
/// Membership is read at dispatch time; nothing is cached, since roles can
/// change between events.
#[async_trait]
pub trait RoleDirectory: Send + Sync + std::fmt::Debug {
    /// IDs of every user holding `role` right now.
    async fn members_of(&self, role: UserRole) -> AppResult<Vec<UserId>>;
}

#[async_trait]
impl RoleDirectory for UserRepository {
    async fn members_of(&self, role: UserRole) -> AppResult<Vec<UserId>> {
        self.find_ids_by_role(role).await
    }
}
