//! Debounce primitive
//!
//! Holds back a rapidly-changing value until it has been stable for a fixed
//! delay. The caller owns the clock: every input goes through [`update`],
//! and the event loop calls [`poll`] on each tick. Only the final value of a
//! burst is ever emitted.
//!
//! [`update`]: Debouncer::update
//! [`poll`]: Debouncer::poll

use std::time::{Duration, Instant};

/// Default quiet period for search input
pub const DEFAULT_DELAY: Duration = Duration::from_millis(500);

/// Debounced view of a value
#[derive(Debug, Clone)]
pub struct Debouncer<T> {
    delay: Duration,
    /// Latest emitted value
    value: T,
    /// Latest input and the instant its timer was (re)started
    pending: Option<(T, Instant)>,
}

impl<T: Clone> Debouncer<T> {
    /// Create a debouncer whose emitted value starts at `initial`
    pub fn new(initial: T, delay: Duration) -> Self {
        Self {
            delay,
            value: initial,
            pending: None,
        }
    }

    /// Record a new input, superseding any pending one and restarting the timer
    pub fn update(&mut self, value: T, now: Instant) {
        self.pending = Some((value, now));
    }

    /// Emit the pending value if its timer fired without being superseded
    pub fn poll(&mut self, now: Instant) -> Option<T> {
        let fired = matches!(
            &self.pending,
            Some((_, started)) if now.saturating_duration_since(*started) >= self.delay
        );
        if !fired {
            return None;
        }

        let (value, _) = self.pending.take()?;
        self.value = value.clone();
        Some(value)
    }

    /// Drop the pending timer without emitting
    pub fn cancel(&mut self) {
        self.pending = None;
    }

    /// Last emitted value
    pub fn value(&self) -> &T {
        &self.value
    }

    /// Whether a timer is currently running
    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Time left until the pending timer fires
    pub fn remaining(&self, now: Instant) -> Option<Duration> {
        self.pending
            .as_ref()
            .map(|(_, started)| self.delay.saturating_sub(now.saturating_duration_since(*started)))
    }
}
