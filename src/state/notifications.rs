use portal_notifications_config::NotificationsConfig;
use portal_notifications_util::{
    ActionKind, CloseReason, Notification, NotificationId, NotificationOptions, NotificationQueue,
    StackView, SurfaceEvent, SurfaceOptions, project,
};
use std::time::Duration;

/// Side effect requested by a notification's action button
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ActionOutcome {
    /// Hand this URL to the system opener
    Open(String),
    /// Application-defined action; nothing to do beyond reporting it
    Custom(String),
}

/// Application-side owner of the notification queue
///
/// Wraps the queue with the configured timer policy and tags every removal
/// with a [`CloseReason`] for the logs.
pub struct NotificationState {
    queue: NotificationQueue,
    config: NotificationsConfig,
}

impl NotificationState {
    pub fn new(config: NotificationsConfig) -> Self {
        Self {
            queue: NotificationQueue::from_config(&config),
            config,
        }
    }

    pub fn queue(&self) -> &NotificationQueue {
        &self.queue
    }

    pub fn config(&self) -> &NotificationsConfig {
        &self.config
    }

    /// Enqueue a notification.
    ///
    /// Returns its id and, when it should expire, the delay after which the
    /// surface should report [`SurfaceEvent::Expired`].
    pub fn push(&mut self, options: NotificationOptions) -> (NotificationId, Option<Duration>) {
        let id = self.queue.enqueue(options);
        let timeout = self.queue.get(id).and_then(|n| self.timeout_for(n));
        (id, timeout)
    }

    /// Auto-dismiss delay for `n` under the current configuration
    pub fn timeout_for(&self, n: &Notification) -> Option<Duration> {
        if !self.config.expire_notifications {
            return None;
        }

        let timeout = n.timeout()?;
        Some(match self.config.max_timeout {
            Some(max) => timeout.min(Duration::from_millis(u64::from(max))),
            None => timeout,
        })
    }

    /// Remove the notification a surface event refers to
    pub fn handle(&mut self, event: SurfaceEvent) -> Option<Notification> {
        let removed = event.apply(&mut self.queue);
        if let Some(n) = &removed {
            tracing::debug!(id = %n.id, reason = ?event.reason(), "closed notification");
        }
        removed
    }

    /// Dismiss the notification whose action was pressed and resolve what the
    /// action asks for.
    pub fn activate(&mut self, id: NotificationId) -> Option<ActionOutcome> {
        let n = self.handle(SurfaceEvent::Activated(id))?;
        let action = n.action?;

        Some(match action.kind {
            ActionKind::Reload => {
                self.clear();
                ActionOutcome::Open(self.config.portal_url.clone())
            }
            ActionKind::Navigate(url) => ActionOutcome::Open(url),
            ActionKind::Custom(name) => ActionOutcome::Custom(name),
        })
    }

    pub fn clear(&mut self) -> usize {
        let cleared = self.queue.clear();
        for n in &cleared {
            tracing::debug!(id = %n.id, reason = ?CloseReason::Cleared, "closed notification");
        }
        cleared.len()
    }

    pub fn apply_config(&mut self, config: NotificationsConfig) {
        for n in self.queue.reconfigure(&config) {
            tracing::debug!(id = %n.id, reason = ?CloseReason::Evicted, "closed notification");
        }
        self.config = config;
    }

    /// Anchored stacks to draw for the current queue
    pub fn stacks(&self) -> Vec<StackView> {
        project(
            &self.queue,
            &SurfaceOptions {
                show_icons: self.config.show_icons,
            },
        )
    }

    pub fn is_empty(&self) -> bool {
        self.queue.is_empty()
    }
}

impl Default for NotificationState {
    fn default() -> Self {
        Self::new(NotificationsConfig::default())
    }
}
