use serde::{Deserialize, Serialize};

/// What happens when the action button of a notification is pressed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case", tag = "kind", content = "target")]
pub enum ActionKind {
    /// Reload the portal from its home page
    Reload,
    /// Open the given URL with the system handler
    Navigate(String),
    /// Application-defined action, reported back to the caller by name
    Custom(String),
}

/// Secondary control rendered on a notification
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct NotificationAction {
    /// User-visible label for the action button
    pub label: String,
    #[serde(rename = "onClick")]
    pub kind: ActionKind,
}

impl NotificationAction {
    pub fn new(label: impl Into<String>, kind: ActionKind) -> Self {
        Self {
            label: label.into(),
            kind,
        }
    }

    pub fn reload(label: impl Into<String>) -> Self {
        Self::new(label, ActionKind::Reload)
    }

    pub fn navigate(label: impl Into<String>, url: impl Into<String>) -> Self {
        Self::new(label, ActionKind::Navigate(url.into()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_notification_action_creation() {
        let action = NotificationAction::new("Undo", ActionKind::Custom("undo".to_string()));

        assert_eq!(action.label, "Undo");
        assert_eq!(action.kind, ActionKind::Custom("undo".to_string()));
    }

    #[test]
    fn test_reload_and_navigate_helpers() {
        assert_eq!(NotificationAction::reload("Retry").kind, ActionKind::Reload);
        assert_eq!(
            NotificationAction::navigate("Sign in", "https://portal.example.org/login").kind,
            ActionKind::Navigate("https://portal.example.org/login".to_string())
        );
    }

    #[test]
    fn test_notification_action_serialization_shape() {
        let action = NotificationAction::navigate("Sign in", "/login");

        let json = serde_json::to_value(&action).unwrap();
        assert_eq!(json["label"], "Sign in");
        assert_eq!(json["onClick"]["kind"], "navigate");
        assert_eq!(json["onClick"]["target"], "/login");

        let deserialized: NotificationAction = serde_json::from_value(json).unwrap();
        assert_eq!(action, deserialized);
    }

    #[test]
    fn test_reload_serializes_without_target() {
        let json = serde_json::to_value(ActionKind::Reload).unwrap();
        assert_eq!(json, serde_json::json!({ "kind": "reload" }));
    }
}
