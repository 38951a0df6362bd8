#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

/// How long a notification stays on screen before auto-dismissing.
pub const AUTO_DISMISS_MS: u32 = 3000;

/// Severity levels for transient notifications.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Warning,
    Danger,
}

impl Severity {
    /// CSS modifier suffix for the alert element.
    pub fn css_class(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Warning => "warning",
            Self::Danger => "danger",
        }
    }
}

/// A single on-screen notification.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

/// Notification state: at most one notification is visible at a time.
///
/// Showing a new notification replaces the current one. Ids are monotonic so
/// a dismiss scheduled for an older notification never removes a newer one.
#[derive(Clone, Debug, Default)]
pub struct NotifyState {
    pub current: Option<Notification>,
    next_id: u64,
}

impl NotifyState {
    /// Display a notification, replacing any currently visible one.
    pub fn show(&mut self, message: impl Into<String>, severity: Severity) {
        self.next_id += 1;
        self.current = Some(Notification {
            id: self.next_id,
            message: message.into(),
            severity,
        });
    }

    /// Dismiss the notification with the given id, if it is still the one
    /// being displayed. Stale ids are ignored.
    pub fn dismiss(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
        }
    }
}
