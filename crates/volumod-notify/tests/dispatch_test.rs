//! Integration tests for fan-out delivery.

mod helpers;

use volumod_entity::notification::{EntityReference, NotificationType, Priority};
use volumod_entity::user::UserRole;
use volumod_notify::DispatchError;

use helpers::{TestCenter, uid};

fn issue() -> (NotificationType, EntityReference) {
    (
        NotificationType::IssueReported,
        EntityReference::new("issue", "I9"),
    )
}

#[tokio::test]
async fn test_partial_failure_keeps_other_deliveries() {
    let t = TestCenter::rejecting(&["U2"]).await;
    let (kind, reference) = issue();

    let err = t
        .center
        .notify_users(
            &[uid("U1"), uid("U2"), uid("U3")],
            &kind,
            &reference,
            Some("Critical crack"),
            Priority::Urgent,
        )
        .await
        .unwrap_err();

    match &err {
        DispatchError::PartialFailure { delivered, failed } => {
            assert_eq!(delivered.len(), 2);
            assert_eq!(failed, &vec![uid("U2")]);
        }
        other => panic!("expected partial failure, got {other:?}"),
    }
    assert_eq!(err.failed_recipients(), &[uid("U2")]);

    for user in ["U1", "U3"] {
        let listed = t.center.store().list(&uid(user), None, true).await.unwrap();
        assert_eq!(listed.len(), 1, "{user}");
        assert_eq!(listed[0].reference, reference);
        assert!(listed[0].message.contains("Critical crack"));
    }
    assert!(t
        .center
        .store()
        .list(&uid("U2"), None, true)
        .await
        .unwrap()
        .is_empty());
}

#[tokio::test]
async fn test_all_recipients_failing_is_undelivered() {
    let t = TestCenter::rejecting(&["U1", "U2"]).await;
    let (kind, reference) = issue();

    let err = t
        .center
        .notify_users(&[uid("U1"), uid("U2")], &kind, &reference, None, Priority::High)
        .await
        .unwrap_err();
    match &err {
        DispatchError::Undelivered { failed, last_error } => {
            assert_eq!(failed, &vec![uid("U1"), uid("U2")]);
            assert!(last_error.is_database());
        }
        other => panic!("expected undelivered, got {other:?}"),
    }
}

#[tokio::test]
async fn test_notify_role_all_failing_keeps_member_snapshot() {
    let t = TestCenter::rejecting(&["M1", "M2"]).await;
    t.seed_user("M1", UserRole::Manager).await;
    t.seed_user("M2", UserRole::Manager).await;
    let (kind, reference) = issue();

    let err = t
        .center
        .notify_role(UserRole::Manager, &kind, &reference, Some("crack"), Priority::Urgent)
        .await
        .unwrap_err();
    assert!(matches!(err, DispatchError::Undelivered { .. }));
    assert_eq!(err.failed_recipients(), &[uid("M1"), uid("M2")]);
}

#[tokio::test]
async fn test_empty_and_duplicate_recipients() {
    let t = TestCenter::new().await;
    let (kind, reference) = issue();

    let empty = t
        .center
        .notify_users(&[], &kind, &reference, None, Priority::Normal)
        .await
        .unwrap();
    assert!(empty.is_empty());

    let report = t
        .center
        .notify_users(
            &[uid("U1"), uid("U1"), uid("U2")],
            &kind,
            &reference,
            Some("crack"),
            Priority::Normal,
        )
        .await
        .unwrap();
    assert_eq!(report.recipient_count(), 2);
    assert_eq!(report.ids().len(), 2);
    assert_eq!(t.center.get_unread_count(&uid("U1")).await.unwrap(), 1);
}

#[tokio::test]
async fn test_notify_role_without_members_succeeds() {
    let t = TestCenter::new().await;
    t.seed_user("O1", UserRole::Operator).await;
    let (kind, reference) = issue();

    let report = t
        .center
        .notify_role(UserRole::Manager, &kind, &reference, Some("crack"), Priority::Urgent)
        .await
        .unwrap();
    assert_eq!(report.recipient_count(), 0);
    assert_eq!(t.center.get_unread_count(&uid("O1")).await.unwrap(), 0);
}

#[tokio::test]
async fn test_notify_role_snapshots_membership() {
    let t = TestCenter::new().await;
    t.seed_user("M1", UserRole::Manager).await;
    t.seed_user("M2", UserRole::Manager).await;
    t.seed_user("I1", UserRole::Inspector).await;
    let (kind, reference) = issue();

    let report = t
        .center
        .notify_role(UserRole::Manager, &kind, &reference, Some("crack"), Priority::Urgent)
        .await
        .unwrap();
    assert_eq!(report.recipient_count(), 2);

    t.seed_user("M3", UserRole::Manager).await;
    assert_eq!(t.center.get_unread_count(&uid("M3")).await.unwrap(), 0);
    assert_eq!(t.center.get_unread_count(&uid("I1")).await.unwrap(), 0);

    let stored = t.center.store().list(&uid("M1"), None, true).await.unwrap();
    assert_eq!(stored[0].priority, Priority::Urgent);
}

#[tokio::test]
async fn test_notify_user_single_recipient() {
    let t = TestCenter::new().await;
    let n = t
        .center
        .notify_user(
            &uid("U5"),
            &NotificationType::InspectionCompleted,
            &EntityReference::new("unit", "M-7"),
            Some("passed"),
            Priority::Low,
        )
        .await
        .unwrap();
    assert_eq!(n.message, "Product inspection has been completed: passed");
    assert_eq!(
        t.center.get_notification(n.id).await.unwrap().map(|s| s.id),
        Some(n.id)
    );
}
