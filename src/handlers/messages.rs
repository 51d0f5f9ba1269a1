use crate::handlers::Trigger;
use portal_notifications_config::NotificationsConfig;
use portal_notifications_util::NotificationId;

/// Application message types
#[derive(Debug, Clone)]
pub enum Message {
    /// Toolbar button raising one of the categorized notifications
    Notify(Trigger),
    /// Dismiss control pressed on a card
    Dismissed(NotificationId),
    /// Auto-dismiss timer elapsed
    Timeout(NotificationId),
    /// Action button pressed on a card
    ActionClicked(NotificationId),
    /// Remove every notification
    ClearAll,
    /// Configuration updated
    Config(NotificationsConfig),
}
