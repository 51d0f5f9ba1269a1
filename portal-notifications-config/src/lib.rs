use cosmic_config::{CosmicConfigEntry, cosmic_config_derive::CosmicConfigEntry};

pub const ID: &str = "io.github.portal.Notifications";

/// Upper bound on how many notifications may be held at once.
pub const MAX_CAPACITY: u32 = 5;

/// Screen anchor a notification stack is attached to.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum Anchor {
    TopLeft,
    TopCenter,
    TopRight,
    BottomLeft,
    #[default]
    BottomCenter,
    BottomRight,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize, PartialEq, Eq, CosmicConfigEntry)]
#[version = 1]
pub struct NotificationsConfig {
    /// The maximum number of notifications held at once, clamped to `1..=MAX_CAPACITY`.
    #[serde(default = "default_capacity")]
    pub capacity: u32,
    /// Anchor used for notifications that do not request one.
    #[serde(default)]
    pub default_anchor: Anchor,
    /// Whether non-persistent notifications are removed once their duration elapses.
    #[serde(default = "default_true")]
    pub expire_notifications: bool,
    /// Optional cap in milliseconds applied to every auto-dismiss delay.
    #[serde(default)]
    pub max_timeout: Option<u32>,
    /// Whether severity icons are drawn at all (default: true)
    #[serde(default = "default_true")]
    pub show_icons: bool,
    /// Portal home page, reopened by the "retry" action of network errors.
    #[serde(default = "default_portal_url")]
    pub portal_url: String,
    /// Login entry point used by session-expired notifications.
    #[serde(default = "default_login_url")]
    pub login_url: String,
}

impl Default for NotificationsConfig {
    fn default() -> Self {
        Self {
            capacity: default_capacity(),
            default_anchor: Anchor::default(),
            expire_notifications: default_true(),
            max_timeout: None,
            show_icons: default_true(),
            portal_url: default_portal_url(),
            login_url: default_login_url(),
        }
    }
}

impl NotificationsConfig {
    /// Capacity with the configured value forced into `1..=MAX_CAPACITY`.
    pub fn effective_capacity(&self) -> usize {
        self.capacity.clamp(1, MAX_CAPACITY) as usize
    }
}

// Default value helpers for serde
const fn default_true() -> bool {
    true
}

const fn default_capacity() -> u32 {
    MAX_CAPACITY
}

fn default_portal_url() -> String {
    String::from("https://portal.example.org/")
}

fn default_login_url() -> String {
    String::from("https://portal.example.org/login")
}
