//! Pure projection of the queue into what the window draws.
//!
//! Nothing here holds state: the same queue contents always produce the same
//! stacks.

use crate::{
    CloseReason, Color, Notification, NotificationAction, NotificationId, NotificationQueue,
    Position, Severity, StackDirection, Variant, severity_color, severity_icon,
    severity_style::{variant_background, variant_border},
};
use std::time::{Duration, SystemTime};

/// Notifications sharing one screen anchor, in insertion order
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PositionGroup<'a> {
    pub position: Position,
    pub notifications: Vec<&'a Notification>,
}

impl PositionGroup<'_> {
    pub fn count(&self) -> usize {
        self.notifications.len()
    }
}

fn slot(position: Position) -> usize {
    usize::from(!position.is_top()) * 3 + position.column()
}

/// Partition notifications by position.
///
/// Groups come back in [`Position::ALL`] order and empty positions are left
/// out. Within a group the input order is preserved.
pub fn group_by_position<'a, I>(notifications: I) -> Vec<PositionGroup<'a>>
where
    I: IntoIterator<Item = &'a Notification>,
{
    let mut buckets: [Vec<&'a Notification>; 6] = Default::default();
    for n in notifications {
        buckets[slot(n.position)].push(n);
    }

    Position::ALL
        .into_iter()
        .zip(buckets)
        .filter(|(_, notifications)| !notifications.is_empty())
        .map(|(position, notifications)| PositionGroup {
            position,
            notifications,
        })
        .collect()
}

/// Surface-wide switches taken from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceOptions {
    pub show_icons: bool,
}

impl Default for SurfaceOptions {
    fn default() -> Self {
        Self { show_icons: true }
    }
}

/// Everything needed to draw one notification card
#[derive(Debug, Clone, PartialEq)]
pub struct CardView {
    pub id: NotificationId,
    pub severity: Severity,
    pub variant: Variant,
    pub elevation: u8,
    pub accent: Color,
    pub background: Option<Color>,
    pub border: Option<Color>,
    pub icon: Option<&'static str>,
    pub title: Option<String>,
    pub message: String,
    pub description: Option<String>,
    pub action: Option<NotificationAction>,
    /// Whether a dismiss control is drawn; false for persistent notifications
    pub dismissible: bool,
    pub created: SystemTime,
}

impl CardView {
    pub fn from_notification(n: &Notification, options: &SurfaceOptions) -> Self {
        CardView {
            id: n.id,
            severity: n.severity,
            variant: n.variant,
            elevation: n.elevation,
            accent: severity_color(n.severity),
            background: variant_background(n.severity, n.variant),
            border: variant_border(n.severity, n.variant),
            icon: (options.show_icons && n.show_icon).then(|| severity_icon(n.severity)),
            title: n.title.clone(),
            message: n.message.clone(),
            description: n.description.clone(),
            action: n.action.clone(),
            dismissible: n.dismissible(),
            created: n.created,
        }
    }

    /// Short age caption such as "now", "5m" or "2h"
    pub fn age_caption(&self) -> Option<String> {
        SystemTime::now()
            .duration_since(self.created)
            .ok()
            .map(age_caption)
    }
}

pub fn age_caption(age: Duration) -> String {
    let secs = age.as_secs();
    if secs < 60 {
        "now".to_string()
    } else if secs < 3600 {
        format!("{}m", secs / 60)
    } else if secs < 86400 {
        format!("{}h", secs / 3600)
    } else {
        format!("{}d", secs / 86400)
    }
}

/// One anchored stack of cards
#[derive(Debug, Clone, PartialEq)]
pub struct StackView {
    pub position: Position,
    pub direction: StackDirection,
    /// Cards in insertion order
    pub cards: Vec<CardView>,
}

impl StackView {
    /// Cards in the order a top-to-bottom layout should place them.
    ///
    /// Bottom-anchored stacks grow upwards, so their oldest card is placed last
    /// (nearest the bottom edge).
    pub fn cards_top_to_bottom(&self) -> Box<dyn Iterator<Item = &CardView> + '_> {
        match self.direction {
            StackDirection::TopDown => Box::new(self.cards.iter()),
            StackDirection::BottomUp => Box::new(self.cards.iter().rev()),
        }
    }
}

/// Project the notifications into anchored stacks of cards
pub fn project<'a, I>(notifications: I, options: &SurfaceOptions) -> Vec<StackView>
where
    I: IntoIterator<Item = &'a Notification>,
{
    group_by_position(notifications)
        .into_iter()
        .map(|group| StackView {
            position: group.position,
            direction: group.position.stack_direction(),
            cards: group
                .notifications
                .into_iter()
                .map(|n| CardView::from_notification(n, options))
                .collect(),
        })
        .collect()
}

/// User or timer input coming back from the drawn surface
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceEvent {
    /// The dismiss control was pressed
    Dismissed(NotificationId),
    /// The auto-dismiss timer elapsed
    Expired(NotificationId),
    /// The action button was pressed
    Activated(NotificationId),
}

impl SurfaceEvent {
    pub fn id(self) -> NotificationId {
        match self {
            SurfaceEvent::Dismissed(id) | SurfaceEvent::Expired(id) | SurfaceEvent::Activated(id) => id,
        }
    }

    pub fn reason(self) -> CloseReason {
        match self {
            SurfaceEvent::Dismissed(_) => CloseReason::Dismissed,
            SurfaceEvent::Expired(_) => CloseReason::Expired,
            SurfaceEvent::Activated(_) => CloseReason::Acted,
        }
    }

    /// Remove the notification this event refers to.
    ///
    /// Events for notifications that are already gone are ignored, so a timer
    /// racing a manual dismissal is harmless.
    pub fn apply(self, queue: &mut NotificationQueue) -> Option<Notification> {
        queue.dismiss(self.id())
    }
}
