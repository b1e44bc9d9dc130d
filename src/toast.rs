//! Transient notifications
//!
//! One toast at a time; a newer one replaces the older. The UI loop calls
//! [`Toaster::tick`] and expired toasts disappear on their own.

use std::time::{Duration, Instant};

/// How long a toast stays on screen
pub const DEFAULT_TTL: Duration = Duration::from_millis(3500);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub kind: ToastKind,
    pub message: String,
    pub shown_at: Instant,
}

/// Holder for the current toast
#[derive(Debug, Clone)]
pub struct Toaster {
    ttl: Duration,
    current: Option<Toast>,
}

impl Default for Toaster {
    fn default() -> Self {
        Self::new(DEFAULT_TTL)
    }
}

impl Toaster {
    pub fn new(ttl: Duration) -> Self {
        Self { ttl, current: None }
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.show(ToastKind::Success, message, Instant::now());
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.show(ToastKind::Error, message, Instant::now());
    }

    pub fn show(&mut self, kind: ToastKind, message: impl Into<String>, now: Instant) {
        self.current = Some(Toast {
            kind,
            message: message.into(),
            shown_at: now,
        });
    }

    /// Dismiss the current toast once its time is up
    pub fn tick(&mut self, now: Instant) {
        let expired = self
            .current
            .as_ref()
            .is_some_and(|t| now.saturating_duration_since(t.shown_at) >= self.ttl);
        if expired {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }
}
