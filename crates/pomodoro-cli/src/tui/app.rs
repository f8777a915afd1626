use pomodoro_core::{Event, Notice, TimerRunner, TimerView};
use tokio::sync::mpsc;
use tracing::debug;

use crate::notify::Notifier;

/// TUI state: the runner plus whatever notice is on screen.
pub struct App {
    runner: TimerRunner,
    events: mpsc::UnboundedReceiver<Event>,
    notifier: Notifier,
    /// Completion notice awaiting dismissal.
    pub notice: Option<Notice>,
}

impl App {
    pub fn new(
        runner: TimerRunner,
        events: mpsc::UnboundedReceiver<Event>,
        notifier: Notifier,
    ) -> Self {
        Self {
            runner,
            events,
            notifier,
            notice: None,
        }
    }

    pub fn view(&self) -> TimerView {
        self.runner.with_engine(TimerView::from_engine)
    }

    /// Pull pending runner events; completions raise the notice.
    pub fn drain_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            debug!(?event, "runner event");
            if let Some(notice) = event.notice() {
                self.notifier.notify(notice);
                self.notice = Some(notice.clone());
            }
        }
    }

    pub fn toggle(&mut self) {
        self.runner.toggle();
    }

    pub fn reset(&mut self) {
        self.notice = None;
        self.runner.reset();
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }
}
