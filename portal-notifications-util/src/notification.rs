use crate::{NotificationAction, Position, Severity};
use serde::{Deserialize, Serialize};
use std::{
    fmt,
    str::FromStr,
    time::{Duration, SystemTime},
};
use uuid::Uuid;

/// Identifier assigned to a notification when it is enqueued.
///
/// Backed by a UUIDv7: a millisecond timestamp followed by random bits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NotificationId(Uuid);

impl NotificationId {
    pub fn generate() -> Self {
        Self(Uuid::now_v7())
    }
}

impl fmt::Display for NotificationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

impl FromStr for NotificationId {
    type Err = uuid::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Uuid::parse_str(s).map(Self)
    }
}

/// Visual style of a notification card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    #[default]
    Filled,
    Outlined,
    Standard,
}

/// Values filled in for every field a caller leaves unset
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NotificationDefaults {
    pub position: Position,
    pub variant: Variant,
    pub elevation: u8,
    pub show_icon: bool,
}

impl Default for NotificationDefaults {
    fn default() -> Self {
        Self {
            position: Position::BottomCenter,
            variant: Variant::Filled,
            elevation: 3,
            show_icon: true,
        }
    }
}

/// A notification as held by the queue, with every default resolved
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    #[serde(rename = "type")]
    pub severity: Severity,
    pub title: Option<String>,
    pub description: Option<String>,
    pub position: Position,
    pub variant: Variant,
    pub elevation: u8,
    pub persistent: bool,
    pub show_icon: bool,
    /// Suggested auto-dismiss delay in milliseconds
    pub duration: Option<u32>,
    pub action: Option<NotificationAction>,
    pub created: SystemTime,
}

impl Notification {
    /// Build a notification from caller options, resolving every unset field
    /// from `defaults`.
    pub fn from_options(
        id: NotificationId,
        options: NotificationOptions,
        defaults: &NotificationDefaults,
    ) -> Self {
        Notification {
            id,
            message: options.message,
            severity: options.severity,
            title: options.title,
            description: options.description,
            position: options.position.unwrap_or(defaults.position),
            variant: options.variant.unwrap_or(defaults.variant),
            elevation: options.elevation.unwrap_or(defaults.elevation),
            persistent: options.persistent,
            show_icon: options.show_icon.unwrap_or(defaults.show_icon),
            duration: options.duration,
            action: options.action,
            created: SystemTime::now(),
        }
    }

    /// Whether the card offers a dismiss control
    pub fn dismissible(&self) -> bool {
        !self.persistent
    }

    /// Delay after which the render surface should expire this notification.
    ///
    /// `None` for persistent notifications. A missing `duration` falls back to
    /// the severity's default.
    pub fn timeout(&self) -> Option<Duration> {
        if self.persistent {
            return None;
        }

        Some(
            self.duration
                .map(|ms| Duration::from_millis(u64::from(ms)))
                .unwrap_or_else(|| self.severity.default_duration()),
        )
    }

    pub fn duration_since(&self) -> Option<Duration> {
        SystemTime::now().duration_since(self.created).ok()
    }

    /// Merge the set fields of `patch` into this notification
    pub fn apply(&mut self, patch: NotificationPatch) {
        let NotificationPatch {
            message,
            severity,
            title,
            description,
            position,
            variant,
            elevation,
            persistent,
            show_icon,
            duration,
            action,
        } = patch;

        if let Some(message) = message {
            self.message = message;
        }
        if let Some(severity) = severity {
            self.severity = severity;
        }
        if let Some(title) = title {
            self.title = title;
        }
        if let Some(description) = description {
            self.description = description;
        }
        if let Some(position) = position {
            self.position = position;
        }
        if let Some(variant) = variant {
            self.variant = variant;
        }
        if let Some(elevation) = elevation {
            self.elevation = elevation;
        }
        if let Some(persistent) = persistent {
            self.persistent = persistent;
        }
        if let Some(show_icon) = show_icon {
            self.show_icon = show_icon;
        }
        if let Some(duration) = duration {
            self.duration = duration;
        }
        if let Some(action) = action {
            self.action = action;
        }
    }
}

/// A notification before it is enqueued: no id, and every defaultable field
/// optional.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationOptions {
    pub message: String,
    #[serde(rename = "type", default)]
    pub severity: Severity,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub position: Option<Position>,
    #[serde(default)]
    pub variant: Option<Variant>,
    #[serde(default)]
    pub elevation: Option<u8>,
    #[serde(default)]
    pub persistent: bool,
    #[serde(default)]
    pub show_icon: Option<bool>,
    #[serde(default)]
    pub duration: Option<u32>,
    #[serde(default)]
    pub action: Option<NotificationAction>,
}

impl NotificationOptions {
    pub fn new(severity: Severity, message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            severity,
            title: None,
            description: None,
            position: None,
            variant: None,
            elevation: None,
            persistent: false,
            show_icon: None,
            duration: None,
            action: None,
        }
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn elevation(mut self, elevation: u8) -> Self {
        self.elevation = Some(elevation);
        self
    }

    pub fn persistent(mut self, persistent: bool) -> Self {
        self.persistent = persistent;
        self
    }

    pub fn show_icon(mut self, show_icon: bool) -> Self {
        self.show_icon = Some(show_icon);
        self
    }

    /// Suggested auto-dismiss delay in milliseconds
    pub fn duration(mut self, duration_ms: u32) -> Self {
        self.duration = Some(duration_ms);
        self
    }

    pub fn action(mut self, action: NotificationAction) -> Self {
        self.action = Some(action);
        self
    }
}

/// Partial field set merged into an existing notification by `update`.
///
/// `None` leaves a field untouched. Optional fields take `Some(None)` to clear
/// them.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NotificationPatch {
    pub message: Option<String>,
    pub severity: Option<Severity>,
    pub title: Option<Option<String>>,
    pub description: Option<Option<String>>,
    pub position: Option<Position>,
    pub variant: Option<Variant>,
    pub elevation: Option<u8>,
    pub persistent: Option<bool>,
    pub show_icon: Option<bool>,
    pub duration: Option<Option<u32>>,
    pub action: Option<Option<NotificationAction>>,
}

impl NotificationPatch {
    pub fn message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    pub fn severity(mut self, severity: Severity) -> Self {
        self.severity = Some(severity);
        self
    }

    pub fn title(mut self, title: Option<String>) -> Self {
        self.title = Some(title);
        self
    }

    pub fn description(mut self, description: Option<String>) -> Self {
        self.description = Some(description);
        self
    }

    pub fn position(mut self, position: Position) -> Self {
        self.position = Some(position);
        self
    }

    pub fn variant(mut self, variant: Variant) -> Self {
        self.variant = Some(variant);
        self
    }

    pub fn persistent(mut self, persistent: bool) -> Self {
        self.persistent = Some(persistent);
        self
    }

    pub fn duration(mut self, duration_ms: Option<u32>) -> Self {
        self.duration = Some(duration_ms);
        self
    }

    pub fn action(mut self, action: Option<NotificationAction>) -> Self {
        self.action = Some(action);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ActionKind;

    fn build(options: NotificationOptions) -> Notification {
        Notification::from_options(
            NotificationId::generate(),
            options,
            &NotificationDefaults::default(),
        )
    }

    #[test]
    fn test_defaults_applied() {
        let n = build(NotificationOptions::new(Severity::Info, "Saved"));

        assert_eq!(n.position, Position::BottomCenter);
        assert_eq!(n.variant, Variant::Filled);
        assert_eq!(n.elevation, 3);
        assert!(n.show_icon);
        assert!(!n.persistent);
        assert_eq!(n.duration, None);
    }

    #[test]
    fn test_explicit_fields_win_over_defaults() {
        let n = build(
            NotificationOptions::new(Severity::Warning, "Check the form")
                .position(Position::TopRight)
                .variant(Variant::Outlined)
                .elevation(6)
                .show_icon(false),
        );

        assert_eq!(n.position, Position::TopRight);
        assert_eq!(n.variant, Variant::Outlined);
        assert_eq!(n.elevation, 6);
        assert!(!n.show_icon);
    }

    #[test]
    fn test_custom_defaults_contract() {
        let defaults = NotificationDefaults {
            position: Position::TopLeft,
            ..Default::default()
        };
        let n = Notification::from_options(
            NotificationId::generate(),
            NotificationOptions::new(Severity::Info, "hello"),
            &defaults,
        );
        assert_eq!(n.position, Position::TopLeft);
        assert_eq!(n.variant, Variant::Filled);
    }

    #[test]
    fn test_timeout() {
        let n = build(NotificationOptions::new(Severity::Error, "boom"));
        assert_eq!(n.timeout(), Some(Duration::from_millis(8000)));

        let n = build(NotificationOptions::new(Severity::Error, "boom").duration(1500));
        assert_eq!(n.timeout(), Some(Duration::from_millis(1500)));

        let n = build(
            NotificationOptions::new(Severity::Error, "boom")
                .duration(1500)
                .persistent(true),
        );
        assert_eq!(n.timeout(), None);
        assert!(!n.dismissible());
    }

    #[test]
    fn test_apply_patch() {
        let mut n = build(
            NotificationOptions::new(Severity::Info, "Uploading")
                .title("Banner")
                .duration(5000),
        );
        let id = n.id;

        n.apply(
            NotificationPatch::default()
                .message("Uploaded")
                .severity(Severity::Success)
                .title(None)
                .action(Some(NotificationAction::new(
                    "View",
                    ActionKind::Custom("view-banner".to_string()),
                ))),
        );

        assert_eq!(n.id, id);
        assert_eq!(n.message, "Uploaded");
        assert_eq!(n.severity, Severity::Success);
        assert_eq!(n.title, None);
        // Untouched
        assert_eq!(n.duration, Some(5000));
        assert_eq!(n.position, Position::BottomCenter);
        assert!(n.action.is_some());
    }

    #[test]
    fn test_empty_patch_is_noop() {
        let mut n = build(NotificationOptions::new(Severity::Info, "same"));
        let before = n.clone();
        n.apply(NotificationPatch::default());
        assert_eq!(n, before);
    }

    #[test]
    fn test_id_display_and_parse() {
        let id = NotificationId::generate();
        let parsed: NotificationId = id.to_string().parse().unwrap();
        assert_eq!(parsed, id);
        assert!("nonexistent-id".parse::<NotificationId>().is_err());
    }

    #[test]
    fn test_ids_are_unique() {
        let ids: std::collections::HashSet<NotificationId> =
            (0..100).map(|_| NotificationId::generate()).collect();
        assert_eq!(ids.len(), 100);
    }

    #[test]
    fn test_serialized_field_names() {
        let n = build(NotificationOptions::new(Severity::Warning, "Careful"));
        let json = serde_json::to_value(&n).unwrap();

        assert_eq!(json["type"], "warning");
        assert_eq!(json["showIcon"], true);
        assert_eq!(json["position"], "bottom-center");
        assert_eq!(json["variant"], "filled");
    }

    #[test]
    fn test_options_from_partial_json() {
        let options: NotificationOptions =
            serde_json::from_str(r#"{ "message": "Hi", "type": "success", "position": "top-left" }"#)
                .unwrap();

        assert_eq!(options.severity, Severity::Success);
        assert_eq!(options.position, Some(Position::TopLeft));
        assert_eq!(options.variant, None);
        assert!(!options.persistent);
    }
}
