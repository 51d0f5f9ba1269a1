//! Scenario tests for the notification queue and its render projection.

use portal_notifications_util::{
    NotificationId, NotificationOptions, NotificationQueue, Position, Severity, SurfaceOptions,
    Variant, group_by_position, presets, project,
};

#[test]
fn test_six_info_notifications_keep_last_five() {
    let mut queue = NotificationQueue::new();
    for message in ["1", "2", "3", "4", "5", "6"] {
        queue.enqueue(NotificationOptions::new(Severity::Info, message));
    }

    let messages: Vec<_> = queue.iter().map(|n| n.message.as_str()).collect();
    assert_eq!(queue.len(), 5);
    assert_eq!(messages, vec!["2", "3", "4", "5", "6"]);
}

#[test]
fn test_persistent_notification_renders_without_dismiss_control() {
    let mut queue = NotificationQueue::new();
    let id = queue.enqueue(presets::info("Saved as draft").persistent(true));

    let stacks = project(&queue, &SurfaceOptions::default());
    let card = stacks
        .iter()
        .flat_map(|s| s.cards.iter())
        .find(|c| c.id == id)
        .expect("card for the notification");

    assert!(!card.dismissible);
}

#[test]
fn test_notification_without_position_groups_under_bottom_center() {
    let mut queue = NotificationQueue::new();
    let id = queue.enqueue(NotificationOptions::new(Severity::Success, "Password changed"));

    let groups = group_by_position(&queue);
    let bottom_center = groups
        .iter()
        .find(|g| g.position == Position::BottomCenter)
        .expect("bottom-center group");

    assert_eq!(bottom_center.notifications.len(), 1);
    assert_eq!(bottom_center.notifications[0].id, id);
}

#[test]
fn test_dismiss_nonexistent_id_leaves_queue_unchanged() {
    let mut queue = NotificationQueue::new();
    queue.info("a");
    queue.info("b");
    queue.info("c");
    let before: Vec<_> = queue.iter().cloned().collect();

    assert!(queue.dismiss(NotificationId::generate()).is_none());

    let after: Vec<_> = queue.iter().cloned().collect();
    assert_eq!(after.len(), 3);
    assert_eq!(after, before);
}

#[test]
fn test_defaults_when_unset() {
    let mut queue = NotificationQueue::new();
    let id = queue.enqueue(NotificationOptions::new(Severity::Error, "Request failed"));

    let n = queue.get(id).unwrap();
    assert_eq!(n.position, Position::BottomCenter);
    assert_eq!(n.variant, Variant::Filled);
}

#[test]
fn test_clear_always_empties() {
    let mut queue = NotificationQueue::new();
    queue.enqueue(presets::network_error("Offline"));
    queue.enqueue(presets::server_error("Internal error"));

    queue.clear();
    assert!(queue.is_empty());
    assert!(project(&queue, &SurfaceOptions::default()).is_empty());
}
