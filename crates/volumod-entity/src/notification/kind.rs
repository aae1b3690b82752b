//! Notification type enumeration.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// The domain event category a notification was raised for.
///
/// Callers may introduce new event keys before the registry knows about
/// them; those are carried in [`NotificationType::Other`] so that creation
/// never fails on an unrecognised type.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum NotificationType {
    /// A task was assigned to the recipient.
    TaskAssigned,
    /// A task the recipient cares about changed.
    TaskUpdated,
    /// A task was marked complete.
    TaskCompleted,
    /// A new quality issue was reported.
    IssueReported,
    /// A quality issue changed.
    IssueUpdated,
    /// A quality issue was resolved.
    IssueResolved,
    /// A production stage (or whole project) completed.
    StageCompleted,
    /// A product unit needs inspection.
    InspectionRequired,
    /// An inspection finished.
    InspectionCompleted,
    /// The recipient was mentioned.
    Mention,
    /// System-level message.
    System,
    /// A type key the registry does not know.
    Other(String),
}

impl NotificationType {
    /// All known notification types.
    pub const KNOWN: [NotificationType; 11] = [
        Self::TaskAssigned,
        Self::TaskUpdated,
        Self::TaskCompleted,
        Self::IssueReported,
        Self::IssueUpdated,
        Self::IssueResolved,
        Self::StageCompleted,
        Self::InspectionRequired,
        Self::InspectionCompleted,
        Self::Mention,
        Self::System,
    ];

    /// Return the storage key for this type.
    pub fn as_str(&self) -> &str {
        match self {
            Self::TaskAssigned => "task_assigned",
            Self::TaskUpdated => "task_updated",
            Self::TaskCompleted => "task_completed",
            Self::IssueReported => "issue_reported",
            Self::IssueUpdated => "issue_updated",
            Self::IssueResolved => "issue_resolved",
            Self::StageCompleted => "stage_completed",
            Self::InspectionRequired => "inspection_required",
            Self::InspectionCompleted => "inspection_completed",
            Self::Mention => "mention",
            Self::System => "system",
            Self::Other(key) => key,
        }
    }

    /// Whether this is one of the known types.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl fmt::Display for NotificationType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for NotificationType {
    fn from(key: &str) -> Self {
        match key {
            "task_assigned" => Self::TaskAssigned,
            "task_updated" => Self::TaskUpdated,
            "task_completed" => Self::TaskCompleted,
            "issue_reported" => Self::IssueReported,
            "issue_updated" => Self::IssueUpdated,
            "issue_resolved" => Self::IssueResolved,
            "stage_completed" => Self::StageCompleted,
            "inspection_required" => Self::InspectionRequired,
            "inspection_completed" => Self::InspectionCompleted,
            "mention" => Self::Mention,
            "system" => Self::System,
            other => Self::Other(other.to_string()),
        }
    }
}

impl From<String> for NotificationType {
    fn from(key: String) -> Self {
        match Self::from(key.as_str()) {
            Self::Other(_) => Self::Other(key),
            known => known,
        }
    }
}

impl From<NotificationType> for String {
    fn from(kind: NotificationType) -> Self {
        match kind {
            NotificationType::Other(key) => key,
            known => known.as_str().to_string(),
        }
    }
}

impl FromStr for NotificationType {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::from(s))
    }
}
