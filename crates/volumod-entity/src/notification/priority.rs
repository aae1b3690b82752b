//! Notification priority levels.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Notification priority levels.
///
/// Advisory only: used for ordering and emphasis in the presentation layer,
/// never for delivery guarantees.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    /// Background events.
    Low,
    /// Standard events.
    #[default]
    Normal,
    /// Important events.
    High,
    /// Requires immediate attention.
    Urgent,
}

impl Priority {
    /// Parse from string. Unknown values fall back to `Normal`.
    pub fn from_str_value(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "low" => Self::Low,
            "high" => Self::High,
            "urgent" => Self::Urgent,
            _ => Self::Normal,
        }
    }

    /// Convert to string.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Normal => "normal",
            Self::High => "high",
            Self::Urgent => "urgent",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
