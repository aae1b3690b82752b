//! Display metadata and message templates per notification type.

use volumod_entity::notification::NotificationType;

/// Placeholder substituted with the caller's details.
const DETAILS_PLACEHOLDER: &str = "{details}";

/// Presentation metadata for one notification type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeInfo {
    /// Icon glyph shown next to the notification.
    pub icon: &'static str,
    /// Accent colour as a hex string.
    pub color: &'static str,
    /// Title, used as is.
    pub title_template: &'static str,
    /// Message body with a `{details}` placeholder.
    pub message_template: &'static str,
}

impl TypeInfo {
    /// Render the title.
    pub fn render_title(&self) -> String {
        self.title_template.to_string()
    }

    /// Render the message. Absent details render as an empty string.
    pub fn render_message(&self, details: Option<&str>) -> String {
        self.message_template
            .replace(DETAILS_PLACEHOLDER, details.unwrap_or_default())
    }
}

const TASK_ASSIGNED: TypeInfo = TypeInfo {
    icon: "📋",
    color: "#4CAF50",
    title_template: "New Task Assigned",
    message_template: "You have been assigned a new task: {details}",
};

const TASK_UPDATED: TypeInfo = TypeInfo {
    icon: "🔄",
    color: "#2196F3",
    title_template: "Task Updated",
    message_template: "Task has been updated: {details}",
};

const TASK_COMPLETED: TypeInfo = TypeInfo {
    icon: "✅",
    color: "#4CAF50",
    title_template: "Task Completed",
    message_template: "Task has been marked as complete: {details}",
};

const ISSUE_REPORTED: TypeInfo = TypeInfo {
    icon: "⚠️",
    color: "#FF9800",
    title_template: "New Quality Issue",
    message_template: "A new quality issue has been reported: {details}",
};

const ISSUE_UPDATED: TypeInfo = TypeInfo {
    icon: "🔄",
    color: "#2196F3",
    title_template: "Quality Issue Updated",
    message_template: "A quality issue has been updated: {details}",
};

const ISSUE_RESOLVED: TypeInfo = TypeInfo {
    icon: "✅",
    color: "#4CAF50",
    title_template: "Quality Issue Resolved",
    message_template: "A quality issue has been resolved: {details}",
};

const STAGE_COMPLETED: TypeInfo = TypeInfo {
    icon: "🏁",
    color: "#4CAF50",
    title_template: "Production Stage Completed",
    message_template: "Production stage has been completed: {details}",
};

const INSPECTION_REQUIRED: TypeInfo = TypeInfo {
    icon: "🔍",
    color: "#FF9800",
    title_template: "Inspection Required",
    message_template: "Product unit requires inspection: {details}",
};

const INSPECTION_COMPLETED: TypeInfo = TypeInfo {
    icon: "✓",
    color: "#4CAF50",
    title_template: "Inspection Completed",
    message_template: "Product inspection has been completed: {details}",
};

const MENTION: TypeInfo = TypeInfo {
    icon: "@",
    color: "#9C27B0",
    title_template: "You were mentioned",
    message_template: DETAILS_PLACEHOLDER,
};

const SYSTEM: TypeInfo = TypeInfo {
    icon: "🔔",
    color: "#607D8B",
    title_template: "System Notification",
    message_template: DETAILS_PLACEHOLDER,
};

/// Entry used for type keys the registry does not know.
pub const FALLBACK: TypeInfo = TypeInfo {
    icon: "🔔",
    color: "#607D8B",
    title_template: "Notification",
    message_template: DETAILS_PLACEHOLDER,
};

/// Maps notification types to their display metadata.
///
/// Lookups never fail: unknown keys resolve to [`FALLBACK`], so a caller
/// introducing a new event type is never blocked on a registry update.
#[derive(Debug, Clone, Copy, Default)]
pub struct NotificationTypeRegistry;

impl NotificationTypeRegistry {
    /// Creates the registry.
    pub fn new() -> Self {
        Self
    }

    /// Metadata for `kind`.
    pub fn lookup(&self, kind: &NotificationType) -> &'static TypeInfo {
        match kind {
            NotificationType::TaskAssigned => &TASK_ASSIGNED,
            NotificationType::TaskUpdated => &TASK_UPDATED,
            NotificationType::TaskCompleted => &TASK_COMPLETED,
            NotificationType::IssueReported => &ISSUE_REPORTED,
            NotificationType::IssueUpdated => &ISSUE_UPDATED,
            NotificationType::IssueResolved => &ISSUE_RESOLVED,
            NotificationType::StageCompleted => &STAGE_COMPLETED,
            NotificationType::InspectionRequired => &INSPECTION_REQUIRED,
            NotificationType::InspectionCompleted => &INSPECTION_COMPLETED,
            NotificationType::Mention => &MENTION,
            NotificationType::System => &SYSTEM,
            NotificationType::Other(_) => &FALLBACK,
        }
    }

    /// Render `(title, message)` for a type and details.
    pub fn render(&self, kind: &NotificationType, details: Option<&str>) -> (String, String) {
        let info = self.lookup(kind);
        (info.render_title(), info.render_message(details))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_known_type_has_its_own_entry() {
        let registry = NotificationTypeRegistry::new();
        for kind in NotificationType::KNOWN {
            let info = registry.lookup(&kind);
            assert_ne!(info.title_template, FALLBACK.title_template, "{kind}");
            assert!(info.message_template.contains("{details}"), "{kind}");
        }
    }

    #[test]
    fn test_render_substitutes_details() {
        let registry = NotificationTypeRegistry::new();
        let (title, message) =
            registry.render(&NotificationType::TaskAssigned, Some("Weld frame T1"));
        assert_eq!(title, "New Task Assigned");
        assert_eq!(message, "You have been assigned a new task: Weld frame T1");
    }

    #[test]
    fn test_mention_echoes_details() {
        let (_, message) =
            NotificationTypeRegistry::new().render(&NotificationType::Mention, Some("@ana check"));
        assert_eq!(message, "@ana check");
    }

    #[test]
    fn test_unknown_type_falls_back() {
        let registry = NotificationTypeRegistry::new();
        let kind = NotificationType::from("shipment_delayed");
        assert_eq!(registry.lookup(&kind), &FALLBACK);

        let (title, message) = registry.render(&kind, Some("Truck 4 late"));
        assert_eq!(title, "Notification");
        assert_eq!(message, "Truck 4 late");
    }

    #[test]
    fn test_missing_details_render_empty() {
        let (_, message) = NotificationTypeRegistry::new().render(&NotificationType::System, None);
        assert_eq!(message, "");
    }
}
