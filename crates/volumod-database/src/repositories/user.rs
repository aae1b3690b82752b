//! User repository implementation.
//!
//! Only what notification routing needs: user records and role membership.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, SqlitePool};

use volumod_core::error::{AppError, ErrorKind};
use volumod_core::result::AppResult;
use volumod_core::types::UserId;
use volumod_entity::user::{User, UserRole};

/// Raw `users` row.
#[derive(Debug, FromRow)]
struct UserRow {
    user_id: String,
    username: String,
    full_name: String,
    role: String,
    created_at: DateTime<Utc>,
}

impl TryFrom<UserRow> for User {
    type Error = AppError;

    fn try_from(row: UserRow) -> Result<Self, Self::Error> {
        Ok(Self {
            user_id: UserId::from(row.user_id),
            username: row.username,
            full_name: row.full_name,
            role: row.role.parse::<UserRole>()?,
            created_at: row.created_at,
        })
    }
}

/// Repository for user records.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Insert a user.
    pub async fn create(&self, user: &User) -> AppResult<()> {
        sqlx::query(
            "INSERT INTO users (user_id, username, full_name, role, created_at) \
             VALUES (?, ?, ?, ?, ?)",
        )
        .bind(user.user_id.as_str())
        .bind(&user.username)
        .bind(&user.full_name)
        .bind(user.role.as_str())
        .bind(user.created_at)
        .execute(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create user", e))?;
        Ok(())
    }

    /// Find a user by ID.
    pub async fn find_by_id(&self, user_id: &UserId) -> AppResult<Option<User>> {
        let row = sqlx::query_as::<_, UserRow>(
            "SELECT user_id, username, full_name, role, created_at FROM users WHERE user_id = ?",
        )
        .bind(user_id.as_str())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find user", e))?;

        row.map(User::try_from).transpose()
    }

    /// IDs of every user currently holding `role`, in a stable order.
    pub async fn find_ids_by_role(&self, role: UserRole) -> AppResult<Vec<UserId>> {
        let ids: Vec<String> =
            sqlx::query_scalar("SELECT user_id FROM users WHERE role = ? ORDER BY user_id")
                .bind(role.as_str())
                .fetch_all(&self.pool)
                .await
                .map_err(|e| {
                    AppError::with_source(ErrorKind::Database, "Failed to list users by role", e)
                })?;
        Ok(ids.into_iter().map(UserId::from).collect())
    }

    /// Change a user's role. Returns `false` if the user does not exist.
    pub async fn update_role(&self, user_id: &UserId, role: UserRole) -> AppResult<bool> {
        let result = sqlx::query("UPDATE users SET role = ? WHERE user_id = ?")
            .bind(role.as_str())
            .bind(user_id.as_str())
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update role", e))?;
        Ok(result.rows_affected() > 0)
    }
}
