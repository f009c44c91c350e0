//! Desktop toast notifications.

use notify_rust::Notification;
use tracing::warn;

/// Application name shown by the notification daemon.
pub const APP_NAME: &str = "pastebind";

/// Fire-and-forget desktop toast. A failed toast is only a logged warning;
/// notification delivery is never load-bearing.
pub fn notify(summary: &str, body: &str) {
    let result = Notification::new()
        .appname(APP_NAME)
        .summary(summary)
        .body(body)
        .show();

    if let Err(err) = result {
        warn!("failed to show notification '{summary}': {err}");
    }
}
