//! Integration tests for task, issue, and project notifications.

mod helpers;

use volumod_core::config::NotificationsConfig;
use volumod_database::DatabasePool;
use volumod_entity::notification::{NotificationType, Priority};
use volumod_entity::user::UserRole;
use volumod_notify::NotificationCenter;

use helpers::{TestCenter, uid};

#[tokio::test]
async fn test_task_assigned_notifies_assignee() {
    let t = TestCenter::new().await;
    let n = t
        .center
        .events()
        .task_assigned("T004", "Weld frame", &uid("U1"), "2024-03-12")
        .await
        .unwrap();

    assert_eq!(n.notification_type, NotificationType::TaskAssigned);
    assert_eq!(n.reference.to_string(), "task:T004");
    assert_eq!(
        n.message,
        "You have been assigned a new task: Task: Weld frame. Due: 2024-03-12"
    );
    assert_eq!(n.priority, Priority::Normal);
}

#[tokio::test]
async fn test_task_due_soon_scales_priority() {
    let t = TestCenter::new().await;
    let events = t.center.events();

    let last_day = events
        .task_due_soon("T1", "Paint panels", &uid("U1"), 1)
        .await
        .unwrap();
    assert_eq!(last_day.priority, Priority::Urgent);
    assert!(last_day.message.ends_with("is due in 1 day!"));

    let later = events
        .task_due_soon("T2", "Paint panels", &uid("U1"), 3)
        .await
        .unwrap();
    assert_eq!(later.priority, Priority::High);
    assert!(later.message.ends_with("is due in 3 days!"));
    assert_eq!(later.notification_type, NotificationType::TaskUpdated);
}

#[tokio::test]
async fn test_issue_reported_reaches_managers_only() {
    let t = TestCenter::new().await;
    t.seed_user("M1", UserRole::Manager).await;
    t.seed_user("M2", UserRole::Manager).await;
    t.seed_user("Q1", UserRole::Inspector).await;

    let report = t
        .center
        .events()
        .issue_reported("I9", Some("Module M-204"), "critical", "Crack in weld seam")
        .await
        .unwrap();
    assert_eq!(report.recipient_count(), 2);

    let stored = t.center.store().list(&uid("M2"), None, true).await.unwrap();
    assert_eq!(stored[0].priority, Priority::Urgent);
    assert_eq!(
        stored[0].message,
        "A new quality issue has been reported: Critical issue on Module M-204: Crack in weld seam"
    );
    assert_eq!(t.center.get_unread_count(&uid("Q1")).await.unwrap(), 0);
}

#[tokio::test]
async fn test_issue_resolved_with_unknown_module() {
    let t = TestCenter::new().await;
    t.seed_user("M1", UserRole::Manager).await;

    t.center
        .events()
        .issue_resolved("I9", None)
        .await
        .unwrap();

    let stored = t.center.store().list(&uid("M1"), None, true).await.unwrap();
    assert_eq!(
        stored[0].message,
        "A quality issue has been resolved: Quality issue on Unknown module has been resolved."
    );
}

#[tokio::test]
async fn test_project_completed_without_managers() {
    let t = TestCenter::new().await;
    let report = t
        .center
        .events()
        .project_completed("P2", "Riverside Block B")
        .await
        .unwrap();
    assert!(report.is_empty());
}

#[tokio::test]
async fn test_escalation_role_comes_from_config() {
    let db = DatabasePool::in_memory().await.unwrap();
    let config = NotificationsConfig {
        manager_role: "supervisor".to_string(),
        ..Default::default()
    };
    let center = NotificationCenter::new(&db, &config).unwrap();
    assert_eq!(center.events().manager_role(), UserRole::Supervisor);

    let bad = NotificationsConfig {
        manager_role: "foreman".to_string(),
        ..Default::default()
    };
    assert!(NotificationCenter::new(&db, &bad).is_err());
}
