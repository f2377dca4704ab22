//! Transient toast notifications.
//!
//! DESIGN
//! ======
//! At most one notification exists at a time. `show` supersedes whatever is
//! visible and hands back a fresh `NotificationToken`; the dwell and exit
//! timers scheduled by the browser layer carry that token, so a timer that
//! outlives its notification finds a different token and does nothing.
//!
//! Lifecycle: `show` (Entering) -> dwell elapses -> `begin_exit` (Exiting)
//! -> exit animation elapses -> `dismiss`.

#[cfg(test)]
#[path = "notification_test.rs"]
mod notification_test;

pub const DEFAULT_DWELL_MS: u32 = 5000;
pub const DEFAULT_EXIT_MS: u32 = 400;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

impl NotificationKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Error => "error",
        }
    }

    /// Material icon shown in front of the message.
    pub fn icon(self) -> &'static str {
        match self {
            Self::Success => "check_circle",
            Self::Error => "error",
        }
    }

    pub fn background(self) -> &'static str {
        match self {
            Self::Success => "#10b981",
            Self::Error => "#ef4444",
        }
    }

    pub fn class_name(self) -> &'static str {
        match self {
            Self::Success => "notification notification-success",
            Self::Error => "notification notification-error",
        }
    }
}

/// Identifies one shown notification.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct NotificationToken(u64);

impl NotificationToken {
    pub fn get(self) -> u64 {
        self.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum NotificationPhase {
    /// Entry animation running or fully visible.
    #[default]
    Entering,
    /// Exit animation running; removal follows.
    Exiting,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Notification {
    pub token: NotificationToken,
    pub message: String,
    pub kind: NotificationKind,
    pub created_at_ms: f64,
    pub phase: NotificationPhase,
}

/// The single notification slot.
#[derive(Clone, Debug, Default)]
pub struct NotificationState {
    current: Option<Notification>,
    next_token: u64,
}

impl NotificationState {
    /// Replace any visible notification with a new one.
    pub fn show(&mut self, message: impl Into<String>, kind: NotificationKind, now_ms: f64) -> &Notification {
        self.next_token += 1;
        let token = NotificationToken(self.next_token);
        if let Some(old) = self.current.take() {
            log::debug!("notification {} superseded by {}", old.token.get(), token.get());
        }
        self.current.insert(Notification {
            token,
            message: message.into(),
            kind,
            created_at_ms: now_ms,
            phase: NotificationPhase::Entering,
        })
    }

    pub fn current(&self) -> Option<&Notification> {
        self.current.as_ref()
    }

    pub fn visible_count(&self) -> usize {
        usize::from(self.current.is_some())
    }

    /// Start the exit animation. Returns `false` for a stale token.
    pub fn begin_exit(&mut self, token: NotificationToken) -> bool {
        match self.current.as_mut() {
            Some(n) if n.token == token && n.phase == NotificationPhase::Entering => {
                n.phase = NotificationPhase::Exiting;
                true
            }
            _ => false,
        }
    }

    /// Remove the notification. Returns `false` for a stale token.
    pub fn dismiss(&mut self, token: NotificationToken) -> bool {
        if self.current.as_ref().is_some_and(|n| n.token == token) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
