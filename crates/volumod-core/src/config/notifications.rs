//! Notification subsystem configuration.

use serde::{Deserialize, Serialize};

/// Notification delivery and audit settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationsConfig {
    /// Number of notifications returned when the caller gives no limit.
    #[serde(default = "default_list_limit")]
    pub default_list_limit: u32,
    /// Number of notifications shown in the header panel.
    #[serde(default = "default_panel_limit")]
    pub panel_limit: u32,
    /// Role whose members receive issue and project notifications.
    #[serde(default = "default_manager_role")]
    pub manager_role: String,
    /// Whether audit entries are written at all.
    #[serde(default = "default_true")]
    pub audit_enabled: bool,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            default_list_limit: default_list_limit(),
            panel_limit: default_panel_limit(),
            manager_role: default_manager_role(),
            audit_enabled: true,
        }
    }
}

fn default_list_limit() -> u32 {
    20
}

fn default_panel_limit() -> u32 {
    10
}

fn default_manager_role() -> String {
    "manager".to_string()
}

fn default_true() -> bool {
    true
}
