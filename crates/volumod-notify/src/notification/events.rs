//! Production-domain notification events.
//!
//! Each method maps one domain event onto an audience and a message, then
//! hands off to the dispatcher. No state is kept here.

use volumod_core::types::UserId;
use volumod_entity::notification::{EntityReference, Notification, NotificationType, Priority};
use volumod_entity::user::UserRole;

use super::dispatcher::{DispatchReport, NotificationDispatcher};
use super::error::DispatchError;

/// Shown when the caller cannot resolve a module's name.
pub const UNKNOWN_MODULE: &str = "Unknown module";

/// Raises notifications for task, issue, and project events.
#[derive(Debug, Clone)]
pub struct DomainNotifier {
    dispatcher: NotificationDispatcher,
    /// Role notified about issues and project completion.
    manager_role: UserRole,
}

impl DomainNotifier {
    /// Creates a notifier that escalates to `manager_role`.
    pub fn new(dispatcher: NotificationDispatcher, manager_role: UserRole) -> Self {
        Self {
            dispatcher,
            manager_role,
        }
    }

    /// The role that receives escalations.
    pub fn manager_role(&self) -> UserRole {
        self.manager_role
    }

    /// A task was assigned: notify the assignee.
    pub async fn task_assigned(
        &self,
        task_id: &str,
        description: &str,
        assignee: &UserId,
        due_date: &str,
    ) -> Result<Notification, DispatchError> {
        let details = format!("Task: {description}. Due: {due_date}");
        self.dispatcher
            .notify_user(
                assignee,
                &NotificationType::TaskAssigned,
                &EntityReference::new("task", task_id),
                Some(&details),
                Priority::Normal,
            )
            .await
    }

    /// A task is nearly due: notify the assignee, urgently on the last day.
    pub async fn task_due_soon(
        &self,
        task_id: &str,
        description: &str,
        assignee: &UserId,
        days_remaining: i64,
    ) -> Result<Notification, DispatchError> {
        let unit = if days_remaining == 1 { "day" } else { "days" };
        let details = format!("Task '{description}' is due in {days_remaining} {unit}!");
        self.dispatcher
            .notify_user(
                assignee,
                &NotificationType::TaskUpdated,
                &EntityReference::new("task", task_id),
                Some(&details),
                due_soon_priority(days_remaining),
            )
            .await
    }

    /// A quality issue was reported: notify all managers.
    pub async fn issue_reported(
        &self,
        issue_id: &str,
        module_name: Option<&str>,
        severity: &str,
        description: &str,
    ) -> Result<DispatchReport, DispatchError> {
        let details = format!(
            "{} issue on {}: {description}",
            capitalize(severity),
            module_name.unwrap_or(UNKNOWN_MODULE)
        );
        self.dispatcher
            .notify_role(
                self.manager_role,
                &NotificationType::IssueReported,
                &EntityReference::new("issue", issue_id),
                Some(&details),
                severity_priority(severity),
            )
            .await
    }

    /// A quality issue was resolved: notify all managers.
    pub async fn issue_resolved(
        &self,
        issue_id: &str,
        module_name: Option<&str>,
    ) -> Result<DispatchReport, DispatchError> {
        let details = format!(
            "Quality issue on {} has been resolved.",
            module_name.unwrap_or(UNKNOWN_MODULE)
        );
        self.dispatcher
            .notify_role(
                self.manager_role,
                &NotificationType::IssueResolved,
                &EntityReference::new("issue", issue_id),
                Some(&details),
                Priority::Normal,
            )
            .await
    }

    /// A project was completed: notify all managers.
    pub async fn project_completed(
        &self,
        project_id: &str,
        project_name: &str,
    ) -> Result<DispatchReport, DispatchError> {
        let details = format!("Project '{project_name}' has been marked as complete.");
        self.dispatcher
            .notify_role(
                self.manager_role,
                &NotificationType::StageCompleted,
                &EntityReference::new("project", project_id),
                Some(&details),
                Priority::Normal,
            )
            .await
    }
}

/// `urgent` with a day or less left, `high` otherwise.
pub fn due_soon_priority(days_remaining: i64) -> Priority {
    if days_remaining <= 1 {
        Priority::Urgent
    } else {
        Priority::High
    }
}

/// Priority for an issue of the given severity.
pub fn severity_priority(severity: &str) -> Priority {
    match severity.trim().to_lowercase().as_str() {
        "critical" => Priority::Urgent,
        "major" | "high" => Priority::High,
        _ => Priority::Normal,
    }
}

/// First character upper case, the rest lower case.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.flat_map(char::to_lowercase)).collect(),
        None => String::new(),
    }
}
