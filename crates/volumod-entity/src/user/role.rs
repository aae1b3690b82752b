//! User role enumeration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Roles held by production tracker users.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    /// Shop-floor operator.
    Operator,
    /// Quality inspector.
    Inspector,
    /// Line supervisor.
    Supervisor,
    /// Production manager; receives issue and project notifications.
    Manager,
    /// System administrator.
    Admin,
}

impl UserRole {
    /// Return the role as a lowercase string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Operator => "operator",
            Self::Inspector => "inspector",
            Self::Supervisor => "supervisor",
            Self::Manager => "manager",
            Self::Admin => "admin",
        }
    }
}

impl fmt::Display for UserRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for UserRole {
    type Err = volumod_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "operator" => Ok(Self::Operator),
            "inspector" => Ok(Self::Inspector),
            "supervisor" => Ok(Self::Supervisor),
            "manager" => Ok(Self::Manager),
            "admin" => Ok(Self::Admin),
            _ => Err(volumod_core::AppError::validation(format!(
                "Invalid user role: '{s}'. Expected one of: operator, inspector, supervisor, manager, admin"
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_str() {
        assert_eq!("manager".parse::<UserRole>().unwrap(), UserRole::Manager);
        assert_eq!("INSPECTOR".parse::<UserRole>().unwrap(), UserRole::Inspector);
        assert!("viewer".parse::<UserRole>().is_err());
    }
}
