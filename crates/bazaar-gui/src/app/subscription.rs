//! Application subscriptions.
//!
//! Conditional subscriptions return `Subscription::none()` when their
//! condition is not met, avoiding unnecessary polling.
//!
//! | Subscription  | Interval | Condition     | Purpose                  |
//! |---------------|----------|---------------|--------------------------|
//! | Toast Dismiss | 1 second | Toast visible | Auto-dismiss after 4s    |

use std::time::Duration;

use iced::Subscription;
use iced::time;

use crate::message::{Message, ToastMessage};
use crate::state::AppState;

/// Create all application subscriptions.
pub fn create_subscription(state: &AppState) -> Subscription<Message> {
    Subscription::batch([toast_subscription(state)])
}

/// Toast auto-dismiss subscription.
///
/// While a toast is visible, ticks once per second; the handler compares
/// against the toast's deadline (set by `show`, re-armed on replacement)
/// and dismisses once it passes. No toast, no polling.
fn toast_subscription(state: &AppState) -> Subscription<Message> {
    if state.toast.is_visible() {
        time::every(Duration::from_secs(1)).map(|_| Message::Toast(ToastMessage::Tick))
    } else {
        Subscription::none()
    }
}

#[cfg(test)]
mod tests {
    // Note: Subscription testing requires an Iced runtime, which is not
    // available in unit tests. The toast deadline logic itself is covered
    // in `state::toast`.
}
