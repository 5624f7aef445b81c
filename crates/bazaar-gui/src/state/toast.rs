//! The toast channel.
//!
//! At most one toast is observable at a time: a new `show` replaces the
//! pending one and re-arms the single auto-dismiss deadline. The channel is
//! driven by a once-per-second tick subscription that only runs while a
//! toast is visible.

use std::time::{Duration, Instant};

/// How long a toast stays up without interaction.
pub const TOAST_DURATION: Duration = Duration::from_millis(4000);

/// Severity of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Warning,
    Error,
}

/// One visible toast.
#[derive(Debug, Clone)]
pub struct Toast {
    pub message: String,
    pub kind: ToastKind,
    deadline: Instant,
}

/// The single-slot toast channel.
#[derive(Debug, Default)]
pub struct ToastChannel {
    current: Option<Toast>,
}

impl ToastChannel {
    /// Show a toast, replacing any pending one and resetting the timer.
    pub fn show(&mut self, message: impl Into<String>, kind: ToastKind) {
        self.show_at(Instant::now(), message, kind);
    }

    /// Clock-injected variant of [`Self::show`].
    pub fn show_at(&mut self, now: Instant, message: impl Into<String>, kind: ToastKind) {
        self.current = Some(Toast {
            message: message.into(),
            kind,
            deadline: now + TOAST_DURATION,
        });
    }

    /// Dismiss immediately.
    pub fn dismiss(&mut self) {
        self.current = None;
    }

    /// Advance the clock; dismisses once the deadline has passed.
    pub fn tick(&mut self, now: Instant) {
        if self.current.as_ref().is_some_and(|t| now >= t.deadline) {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Toast> {
        self.current.as_ref()
    }

    pub fn is_visible(&self) -> bool {
        self.current.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_new_show_replaces_the_pending_toast() {
        let start = Instant::now();
        let mut channel = ToastChannel::default();

        channel.show_at(start, "ok", ToastKind::Success);
        channel.show_at(start + Duration::from_millis(1000), "fail", ToastKind::Error);

        let toast = channel.current().expect("toast visible");
        assert_eq!(toast.message, "fail");
        assert_eq!(toast.kind, ToastKind::Error);

        // The first toast's deadline has been superseded: at start+4s the
        // replacement is still up ...
        channel.tick(start + Duration::from_millis(4100));
        assert!(channel.is_visible(), "timer must have been reset by show");

        // ... and it clears at its own deadline.
        channel.tick(start + Duration::from_millis(5100));
        assert!(!channel.is_visible());
    }

    #[test]
    fn explicit_dismiss_clears_immediately() {
        let mut channel = ToastChannel::default();
        channel.show("saved", ToastKind::Success);
        channel.dismiss();
        assert!(!channel.is_visible());
    }

    #[test]
    fn tick_before_deadline_keeps_the_toast() {
        let start = Instant::now();
        let mut channel = ToastChannel::default();
        channel.show_at(start, "hello", ToastKind::Warning);
        channel.tick(start + Duration::from_millis(3999));
        assert!(channel.is_visible());
        channel.tick(start + TOAST_DURATION);
        assert!(!channel.is_visible());
    }
}
