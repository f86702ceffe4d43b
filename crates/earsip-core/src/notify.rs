//! Transient notifications (toasts).

use std::time::{Duration, Instant};

use tracing::{info, warn};

/// How long a notification stays visible.
pub const DEFAULT_TTL: Duration = Duration::from_secs(4);

/// Notification severity.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Level {
    /// Action succeeded.
    Success,
    /// Action failed.
    Error,
}

/// One visible notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Identifier used for manual dismissal.
    pub id: u64,
    /// Severity.
    pub level: Level,
    /// Text.
    pub message: String,
    expires_at: Instant,
}

/// Stack of visible notifications, newest last.
#[derive(Debug, Clone)]
pub struct Notifications {
    items: Vec<Notification>,
    next_id: u64,
    ttl: Duration,
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl Notifications {
    /// Creates an empty stack whose entries live for `ttl`.
    #[must_use]
    pub const fn new(ttl: Duration) -> Self {
        Self {
            items: Vec::new(),
            next_id: 0,
            ttl,
        }
    }

    /// Shows a notification and returns its id.
    pub fn push(&mut self, level: Level, message: impl Into<String>, now: Instant) -> u64 {
        let message = message.into();
        match level {
            Level::Success => info!("{}", message),
            Level::Error => warn!("{}", message),
        }
        self.next_id += 1;
        self.items.push(Notification {
            id: self.next_id,
            level,
            message,
            expires_at: now + self.ttl,
        });
        self.next_id
    }

    /// Shows a success notification now.
    pub fn success(&mut self, message: impl Into<String>) -> u64 {
        self.push(Level::Success, message, Instant::now())
    }

    /// Shows an error notification now.
    pub fn error(&mut self, message: impl Into<String>) -> u64 {
        self.push(Level::Error, message, Instant::now())
    }

    /// Drops expired notifications. Returns true if any were removed.
    pub fn prune(&mut self, now: Instant) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.expires_at > now);
        self.items.len() != before
    }

    /// Removes one notification.
    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|n| n.id != id);
    }

    /// Visible notifications, oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &Notification> {
        self.items.iter()
    }

    /// Returns true if nothing is visible.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_expiry() {
        let start = Instant::now();
        let mut stack = Notifications::new(Duration::from_secs(3));
        stack.push(Level::Success, "Surat berhasil dihapus", start);
        stack.push(Level::Error, "Gagal memuat surat masuk", start + Duration::from_secs(2));

        assert!(!stack.prune(start + Duration::from_secs(1)));
        assert!(stack.prune(start + Duration::from_secs(3)));
        let left: Vec<&str> = stack.iter().map(|n| n.message.as_str()).collect();
        assert_eq!(left, vec!["Gagal memuat surat masuk"]);
        assert!(stack.prune(start + Duration::from_secs(6)));
        assert!(stack.is_empty());
    }

    #[test]
    fn test_dismiss() {
        let mut stack = Notifications::default();
        let first = stack.success("Kategori berhasil disimpan");
        let second = stack.error("Gagal menyimpan kategori");
        assert_ne!(first, second);
        stack.dismiss(first);
        assert_eq!(stack.iter().count(), 1);
        assert_eq!(stack.iter().next().map(|n| n.level), Some(Level::Error));
    }
}
