//! Transient user-facing notifications.
//!
//! Banners stack without coalescing, auto-dismiss after five seconds and
//! support manual early dismissal. There is no queue bound and no
//! persistence. Expiry is caller-driven: call [`NotificationCenter::sweep`]
//! periodically, the same discipline the timers use.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// Lifetime of a banner before auto-dismissal.
pub const DISMISS_AFTER_SECS: i64 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            NotificationKind::Success => "success",
            NotificationKind::Error => "error",
            NotificationKind::Info => "info",
        };
        f.write_str(label)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub kind: NotificationKind,
    pub posted_at: DateTime<Utc>,
}

/// Global banner overlay state.
#[derive(Debug, Default)]
pub struct NotificationCenter {
    next_id: u64,
    banners: Vec<Notification>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a banner. Returns its id for manual dismissal.
    pub fn notify(&mut self, message: impl Into<String>, kind: NotificationKind) -> u64 {
        let message = message.into();
        let id = self.next_id;
        self.next_id += 1;
        log::info!("notification [{kind:?}] {message}");
        self.banners.push(Notification {
            id,
            message,
            kind,
            posted_at: Utc::now(),
        });
        id
    }

    /// Dismiss a banner early. Unknown ids are a no-op.
    pub fn dismiss(&mut self, id: u64) {
        self.banners.retain(|n| n.id != id);
    }

    /// Drop banners older than [`DISMISS_AFTER_SECS`], returning the expired
    /// ones so a presenter can remove them from view.
    pub fn sweep(&mut self, now: DateTime<Utc>) -> Vec<Notification> {
        let cutoff = now - Duration::seconds(DISMISS_AFTER_SECS);
        let (expired, live): (Vec<_>, Vec<_>) = self
            .banners
            .drain(..)
            .partition(|n| n.posted_at <= cutoff);
        self.banners = live;
        expired
    }

    /// Live banners, oldest first.
    pub fn active(&self) -> &[Notification] {
        &self.banners
    }

    /// Drain every live banner, oldest first. For presenters that print
    /// each banner exactly once instead of tracking expiry.
    pub fn take_all(&mut self) -> Vec<Notification> {
        std::mem::take(&mut self.banners)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn banners_stack_without_dedup() {
        let mut center = NotificationCenter::new();
        center.notify("same", NotificationKind::Info);
        center.notify("same", NotificationKind::Info);
        center.notify("same", NotificationKind::Info);
        assert_eq!(center.active().len(), 3);
    }

    #[test]
    fn manual_dismissal_removes_only_target() {
        let mut center = NotificationCenter::new();
        let a = center.notify("a", NotificationKind::Success);
        let b = center.notify("b", NotificationKind::Error);
        center.dismiss(a);
        assert_eq!(center.active().len(), 1);
        assert_eq!(center.active()[0].id, b);
        // Unknown id is a no-op.
        center.dismiss(999);
        assert_eq!(center.active().len(), 1);
    }

    #[test]
    fn take_all_drains_oldest_first() {
        let mut center = NotificationCenter::new();
        center.notify("first", NotificationKind::Info);
        center.notify("second", NotificationKind::Success);
        let drained = center.take_all();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].message, "first");
        assert!(center.active().is_empty());
    }

    #[test]
    fn sweep_drops_only_expired() {
        let mut center = NotificationCenter::new();
        center.notify("old", NotificationKind::Info);
        center.banners[0].posted_at = Utc::now() - Duration::seconds(6);
        center.notify("fresh", NotificationKind::Info);

        let expired = center.sweep(Utc::now());
        assert_eq!(expired.len(), 1);
        assert_eq!(expired[0].message, "old");
        assert_eq!(center.active().len(), 1);
        assert_eq!(center.active()[0].message, "fresh");
    }
}
