pub mod action;
pub mod navigation;
pub mod notification;
pub mod position;
pub mod presets;
pub mod queue;
pub mod severity;
pub mod severity_style;
pub mod surface;

pub use action::{ActionKind, NotificationAction};
#[cfg(feature = "open")]
pub use navigation::open_target;
pub use navigation::is_safe_url;
pub use notification::{
    Notification, NotificationDefaults, NotificationId, NotificationOptions, NotificationPatch,
    Variant,
};
pub use position::{Position, StackDirection, UnknownPosition};
pub use queue::{DEFAULT_CAPACITY, NotificationQueue};
pub use severity::{Severity, UnknownSeverity};
pub use severity_style::{Color, severity_color, severity_colors, severity_icon, severity_icons};
pub use surface::{
    CardView, PositionGroup, StackView, SurfaceEvent, SurfaceOptions, group_by_position, project,
};

use serde::{Deserialize, Serialize};

/// Why a notification left the queue
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CloseReason {
    /// Its auto-dismiss timer elapsed
    Expired = 1,
    /// The user pressed its dismiss control
    Dismissed = 2,
    /// The user pressed its action button
    Acted = 3,
    /// Everything was cleared at once
    Cleared = 4,
    /// Pushed out by newer notifications over capacity
    Evicted = 5,
}
