use mominos_fs::time::Timestamp;
use serde::{Deserialize, Serialize};
use uuid::Uuid;
use web_time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Warning,
    Info,
}

/// A toast shown in the notification centre
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notification {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: NotificationKind,
    pub title: String,
    pub message: String,
    /// Milliseconds until the notification removes itself
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration: Option<u64>,
    pub timestamp: Timestamp,
    #[serde(default)]
    pub read: bool,
}

impl Notification {
    /// Whether the notification has outlived its duration at `now`
    pub fn is_expired(&self, now: Timestamp) -> bool {
        self.duration
            .is_some_and(|duration| now >= self.timestamp.after(Duration::from_millis(duration)))
    }
}

/// Holds the notifications of a session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NotificationCenter {
    notifications: Vec<Notification>,
    enabled: bool,
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self {
            notifications: Vec::new(),
            enabled: true,
        }
    }
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Turn delivery on or off. Existing notifications stay.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Post a notification.
    /// Returns None when notifications are turned off.
    pub fn push(
        &mut self,
        kind: NotificationKind,
        title: &str,
        message: &str,
        duration: Option<Duration>,
        now: Timestamp,
    ) -> Option<Uuid> {
        if !self.enabled {
            log::debug!("Notification suppressed: {}", title);
            return None;
        }
        let id = Uuid::new_v4();
        self.notifications.push(Notification {
            id,
            kind,
            title: title.to_string(),
            message: message.to_string(),
            duration: duration.map(|d| d.as_millis() as u64),
            timestamp: now,
            read: false,
        });
        Some(id)
    }

    pub fn success(&mut self, title: &str, message: &str) -> Option<Uuid> {
        self.push(NotificationKind::Success, title, message, None, Timestamp::now())
    }

    pub fn error(&mut self, title: &str, message: &str) -> Option<Uuid> {
        self.push(NotificationKind::Error, title, message, None, Timestamp::now())
    }

    pub fn dismiss(&mut self, id: Uuid) -> bool {
        let before = self.notifications.len();
        self.notifications.retain(|n| n.id != id);
        before != self.notifications.len()
    }

    pub fn clear(&mut self) {
        self.notifications.clear();
    }

    pub fn mark_all_read(&mut self) {
        for notification in &mut self.notifications {
            notification.read = true;
        }
    }

    pub fn unread_count(&self) -> usize {
        self.notifications.iter().filter(|n| !n.read).count()
    }

    /// Drop every notification whose duration has run out, returning how many went
    pub fn expire(&mut self, now: Timestamp) -> usize {
        let before = self.notifications.len();
        self.notifications.retain(|n| !n.is_expired(now));
        before - self.notifications.len()
    }

    /// Newest last
    pub fn notifications(&self) -> &[Notification] {
        &self.notifications
    }
}
