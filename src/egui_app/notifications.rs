//! Transient notifications shown in the corner overlay.

use std::time::{Duration, Instant};

use uuid::Uuid;

/// How long a notification stays up unless dismissed.
pub const NOTIFICATION_TTL: Duration = Duration::from_secs(4);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationLevel {
    Success,
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub level: NotificationLevel,
    pub message: String,
    pub expires_at: Instant,
}

#[derive(Debug)]
pub struct Notifications {
    ttl: Duration,
    entries: Vec<Notification>,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(NOTIFICATION_TTL)
    }
}

impl Notifications {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, entries: Vec::new() }
    }

    pub fn push(&mut self, level: NotificationLevel, message: impl Into<String>, now: Instant) -> Uuid {
        let notification = Notification {
            id: Uuid::new_v4(),
            level,
            message: message.into(),
            expires_at: now + self.ttl,
        };
        let id = notification.id;
        self.entries.push(notification);
        id
    }

    pub fn success(&mut self, message: impl Into<String>) -> Uuid {
        self.push(NotificationLevel::Success, message, Instant::now())
    }

    pub fn info(&mut self, message: impl Into<String>) -> Uuid {
        self.push(NotificationLevel::Info, message, Instant::now())
    }

    pub fn error(&mut self, message: impl Into<String>) -> Uuid {
        let message = message.into();
        tracing::warn!("{}", message);
        self.push(NotificationLevel::Error, message, Instant::now())
    }

    pub fn dismiss(&mut self, id: Uuid) {
        self.entries.retain(|n| n.id != id);
    }

    /// Remove expired entries.
    pub fn prune(&mut self, now: Instant) {
        self.entries.retain(|n| n.expires_at > now);
    }

    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.entries.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }
}
