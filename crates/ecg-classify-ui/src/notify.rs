//! Transient user notifications.
//!
//! One shared notification slot: a new notification supersedes the previous
//! one. Visibility is driven by caller-supplied epoch milliseconds so the
//! timing is deterministic under test.

/// Delay between issuing a notification and showing it.
pub const NOTIFICATION_SHOW_DELAY_MS: u64 = 100;

/// Lifetime of a notification measured from issue time.
pub const NOTIFICATION_DURATION_MS: u64 = 5_000;

/// Notification severity, which selects icon and style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationSeverity {
    /// Completed action.
    Success,
    /// Failed action.
    Error,
    /// Needs attention.
    Warning,
    /// Neutral status.
    Info,
}

impl NotificationSeverity {
    /// Icon token for this severity.
    pub fn icon(self) -> &'static str {
        match self {
            NotificationSeverity::Success => "fa-check-circle",
            NotificationSeverity::Error => "fa-exclamation-circle",
            NotificationSeverity::Warning => "fa-exclamation-triangle",
            NotificationSeverity::Info => "fa-info-circle",
        }
    }

    /// Lower-case style token.
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationSeverity::Success => "success",
            NotificationSeverity::Error => "error",
            NotificationSeverity::Warning => "warning",
            NotificationSeverity::Info => "info",
        }
    }
}

/// One issued notification.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    /// Text shown to the user.
    pub message: String,
    /// Severity style.
    pub severity: NotificationSeverity,
    /// Issue time in epoch milliseconds.
    pub issued_at_ms: u64,
}

impl Notification {
    /// Icon token for this notification.
    pub fn icon(&self) -> &'static str {
        self.severity.icon()
    }

    fn show_at_ms(&self) -> u64 {
        self.issued_at_ms.saturating_add(NOTIFICATION_SHOW_DELAY_MS)
    }

    fn hide_at_ms(&self) -> u64 {
        self.issued_at_ms.saturating_add(NOTIFICATION_DURATION_MS)
    }
}

/// Visibility transition produced by [`NotificationCenter::on_tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationChange {
    /// Element should become visible.
    Show,
    /// Element should be hidden.
    Hide,
}

/// Single-slot notification timer.
#[derive(Debug, Clone, Default)]
pub struct NotificationCenter {
    current: Option<Notification>,
    visible: bool,
}

impl NotificationCenter {
    /// Creates an idle center.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the current notification and restarts its timer.
    pub fn notify(
        &mut self,
        message: impl Into<String>,
        severity: NotificationSeverity,
        now_ms: u64,
    ) -> &Notification {
        self.visible = false;
        self.current.insert(Notification {
            message: message.into(),
            severity,
            issued_at_ms: now_ms,
        })
    }

    /// Advances timers, returning at most one visibility change.
    ///
    /// Only the latest notification's deadlines are considered.
    pub fn on_tick(&mut self, now_ms: u64) -> Option<NotificationChange> {
        let current = self.current.as_ref()?;

        if now_ms >= current.hide_at_ms() {
            self.current = None;
            return std::mem::take(&mut self.visible).then_some(NotificationChange::Hide);
        }

        if !self.visible && now_ms >= current.show_at_ms() {
            self.visible = true;
            return Some(NotificationChange::Show);
        }

        None
    }

    /// Notification currently held, visible or pending.
    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    /// Returns `true` while the element is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }
}
