use notify_rust::Notification;
use pomodoro_core::Notice;
use tracing::{debug, warn};

/// Desktop notifications for interval completion.
///
/// Delivery is best effort: failures are logged and otherwise ignored.
#[derive(Debug, Clone, Copy)]
pub struct Notifier {
    enabled: bool,
}

impl Notifier {
    pub fn new(enabled: bool) -> Self {
        Self { enabled }
    }

    /// Show `notice` on a blocking thread. Must be called within a tokio runtime.
    pub fn notify(&self, notice: &Notice) {
        if !self.enabled {
            debug!(title = %notice.title, "desktop notifications disabled");
            return;
        }
        let notice = notice.clone();
        tokio::task::spawn_blocking(move || {
            if let Err(e) = Notification::new()
                .appname("pomodoro")
                .summary(&notice.title)
                .body(&notice.message)
                .show()
            {
                warn!(error = %e, "failed to show desktop notification");
            }
        });
    }
}
