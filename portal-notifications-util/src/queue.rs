use crate::{
    Notification, NotificationDefaults, NotificationId, NotificationOptions, NotificationPatch,
    Position, presets,
};
use portal_notifications_config::{MAX_CAPACITY, NotificationsConfig};
use std::collections::VecDeque;

/// Number of notifications held when no configuration says otherwise
pub const DEFAULT_CAPACITY: usize = MAX_CAPACITY as usize;

/// Ordered store of the notifications currently on screen.
///
/// Oldest first. Inserting past capacity evicts from the front, so the queue
/// always holds the most recently enqueued notifications in insertion order.
#[derive(Debug, Clone)]
pub struct NotificationQueue {
    items: VecDeque<Notification>,
    capacity: usize,
    defaults: NotificationDefaults,
}

impl NotificationQueue {
    /// Create an empty queue with the default capacity and defaults
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    /// Create an empty queue; `capacity` is clamped to `1..=DEFAULT_CAPACITY`
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.clamp(1, DEFAULT_CAPACITY);
        Self {
            items: VecDeque::with_capacity(capacity + 1),
            capacity,
            defaults: NotificationDefaults::default(),
        }
    }

    pub fn from_config(config: &NotificationsConfig) -> Self {
        let mut queue = Self::with_capacity(config.effective_capacity());
        queue.defaults.position = Position::from(config.default_anchor);
        queue
    }

    /// Apply a changed configuration.
    ///
    /// Returns the notifications evicted because the capacity shrank.
    pub fn reconfigure(&mut self, config: &NotificationsConfig) -> Vec<Notification> {
        self.capacity = config.effective_capacity();
        self.defaults.position = Position::from(config.default_anchor);
        self.evict_overflow()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn defaults(&self) -> &NotificationDefaults {
        &self.defaults
    }

    /// Add a notification, returning its freshly generated id
    pub fn enqueue(&mut self, options: NotificationOptions) -> NotificationId {
        let id = self.fresh_id();
        let notification = Notification::from_options(id, options, &self.defaults);
        tracing::debug!(
            %id,
            severity = %notification.severity,
            position = %notification.position,
            "enqueued notification"
        );

        self.items.push_back(notification);
        self.evict_overflow();
        id
    }

    pub fn error(&mut self, message: impl Into<String>) -> NotificationId {
        self.enqueue(presets::error(message))
    }

    pub fn success(&mut self, message: impl Into<String>) -> NotificationId {
        self.enqueue(presets::success(message))
    }

    pub fn warning(&mut self, message: impl Into<String>) -> NotificationId {
        self.enqueue(presets::warning(message))
    }

    pub fn info(&mut self, message: impl Into<String>) -> NotificationId {
        self.enqueue(presets::info(message))
    }

    /// Remove a notification by id. Unknown ids are ignored.
    pub fn dismiss(&mut self, id: NotificationId) -> Option<Notification> {
        let pos = self.items.iter().position(|n| n.id == id)?;
        let removed = self.items.remove(pos);
        if removed.is_some() {
            tracing::debug!(%id, "dismissed notification");
        }
        removed
    }

    /// Remove every notification, returning them oldest first
    pub fn clear(&mut self) -> Vec<Notification> {
        let drained: Vec<_> = self.items.drain(..).collect();
        if !drained.is_empty() {
            tracing::debug!(count = drained.len(), "cleared notifications");
        }
        drained
    }

    /// Merge `patch` into the notification with `id`.
    ///
    /// Returns `false` if no such notification is held.
    pub fn update(&mut self, id: NotificationId, patch: NotificationPatch) -> bool {
        let Some(notification) = self.items.iter_mut().find(|n| n.id == id) else {
            return false;
        };

        notification.apply(patch);
        true
    }

    pub fn get(&self, id: NotificationId) -> Option<&Notification> {
        self.items.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: NotificationId) -> bool {
        self.get(id).is_some()
    }

    /// Iterate oldest first
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Notification> + ExactSizeIterator {
        self.items.iter()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    fn fresh_id(&self) -> NotificationId {
        loop {
            let id = NotificationId::generate();
            if !self.contains(id) {
                return id;
            }
        }
    }

    fn evict_overflow(&mut self) -> Vec<Notification> {
        let overflow = self.items.len().saturating_sub(self.capacity);
        let evicted: Vec<_> = self.items.drain(..overflow).collect();
        for n in &evicted {
            tracing::debug!(id = %n.id, "evicted notification over capacity");
        }
        evicted
    }
}

impl Default for NotificationQueue {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a> IntoIterator for &'a NotificationQueue {
    type Item = &'a Notification;
    type IntoIter = std::collections::vec_deque::Iter<'a, Notification>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
