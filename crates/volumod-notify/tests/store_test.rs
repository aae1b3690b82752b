//! Integration tests for notification creation and listing.

mod helpers;

use std::sync::Arc;

use volumod_entity::notification::{EntityReference, NotificationType, Priority};
use volumod_entity::user::UserRole;
use volumod_notify::RequestContext;

use helpers::{TestCenter, uid};

#[tokio::test]
async fn test_create_then_list_round_trip() {
    let t = TestCenter::new().await;
    let created = t
        .center
        .create_notification(
            &uid("U1"),
            NotificationType::TaskAssigned,
            EntityReference::new("task", "T1"),
            Some("x"),
            Priority::Normal,
        )
        .await
        .unwrap();

    assert!(created.is_unread());
    assert_eq!(created.title, "New Task Assigned");

    let listed = t.center.store().list(&uid("U1"), None, true).await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].id, created.id);
    assert_eq!(listed[0].reference, EntityReference::new("task", "T1"));
    assert!(listed[0].message.contains('x'));
}

#[tokio::test]
async fn test_unknown_type_uses_fallback_template() {
    let t = TestCenter::new().await;
    let created = t
        .center
        .create_notification(
            &uid("U1"),
            NotificationType::from("shipment_delayed"),
            EntityReference::new("shipment", "S4"),
            Some("Truck 4 is late"),
            Priority::Low,
        )
        .await
        .unwrap();

    assert_eq!(created.title, "Notification");
    assert_eq!(created.message, "Truck 4 is late");
    assert_eq!(created.notification_type.as_str(), "shipment_delayed");

    let display = t
        .center
        .list_notifications(&uid("U1"), None, true)
        .await
        .unwrap();
    assert_eq!(display[0].icon, "🔔");
}

#[tokio::test]
async fn test_unread_count_matches_unread_list() {
    let t = TestCenter::new().await;
    let user = uid("U1");
    let mut ids = Vec::new();
    for task in ["T1", "T2", "T3", "T4"] {
        let n = t
            .center
            .create_notification(
                &user,
                NotificationType::TaskUpdated,
                EntityReference::new("task", task),
                Some(task),
                Priority::Normal,
            )
            .await
            .unwrap();
        ids.push(n.id);
    }
    t.center.mark_read(ids[1]).await.unwrap();
    t.center.mark_read(ids[3]).await.unwrap();

    let unread = t.center.store().list(&user, None, false).await.unwrap();
    assert_eq!(t.center.get_unread_count(&user).await.unwrap(), 2);
    assert_eq!(unread.len(), 2);
    assert!(unread.iter().all(|n| n.is_unread()));
}

#[tokio::test]
async fn test_list_notifications_display_form() {
    let t = TestCenter::new().await;
    let user = uid("U2");
    let first = t
        .center
        .create_notification(
            &user,
            NotificationType::IssueReported,
            EntityReference::new("issue", "I1"),
            Some("crack"),
            Priority::Urgent,
        )
        .await
        .unwrap();
    t.center
        .create_notification(
            &user,
            NotificationType::Mention,
            EntityReference::new("task", "T9"),
            Some("@u2 please check"),
            Priority::Normal,
        )
        .await
        .unwrap();
    t.center.mark_read(first.id).await.unwrap();

    let all = t.center.list_notifications(&user, None, true).await.unwrap();
    assert_eq!(all.len(), 2);
    assert_eq!(all[0].message, "@u2 please check");
    assert!(!all[0].seen);
    assert!(all[1].seen);
    assert_eq!(all[1].time, "0m ago");

    let panel = t.center.panel_notifications(&user).await.unwrap();
    assert_eq!(panel.len(), 1);

    let limited = t.center.list_notifications(&user, Some(1), true).await.unwrap();
    assert_eq!(limited.len(), 1);
}

#[tokio::test]
async fn test_audit_failure_does_not_fail_create() {
    let t = TestCenter::failing_audit().await;
    let created = t
        .center
        .create_notification(
            &uid("U1"),
            NotificationType::System,
            EntityReference::new("system", "maintenance"),
            Some("Line 2 down at 18:00"),
            Priority::High,
        )
        .await
        .unwrap();

    assert!(t.center.mark_read(created.id).await.unwrap());
    assert_eq!(t.center.get_unread_count(&uid("U1")).await.unwrap(), 0);
}

#[tokio::test]
async fn test_create_is_audited_with_actor() {
    let t = TestCenter::new().await;
    let supervisor = t
        .center
        .with_actor(Arc::new(RequestContext::new("S1", UserRole::Supervisor)));

    let created = supervisor
        .create_notification(
            &uid("U1"),
            NotificationType::InspectionRequired,
            EntityReference::new("unit", "M-204"),
            Some("Module M-204"),
            Priority::Normal,
        )
        .await
        .unwrap();

    let entries = t.audit_actions("notification.create").await;
    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].actor, Some(uid("S1")));
    assert_eq!(entries[0].entity_type, "notification");
    assert_eq!(entries[0].entity_id, Some(created.id.to_string()));
}

#[tokio::test]
async fn test_store_failure_is_surfaced() {
    let t = TestCenter::rejecting(&["U9"]).await;
    let err = t
        .center
        .create_notification(
            &uid("U9"),
            NotificationType::TaskAssigned,
            EntityReference::new("task", "T1"),
            None,
            Priority::Normal,
        )
        .await
        .unwrap_err();
    assert!(err.is_database());
    assert!(t.audit_actions("notification.create").await.is_empty());
}
