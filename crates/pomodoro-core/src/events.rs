use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::timer::{Mode, Notice, TimerState};

/// Every state change of the timer produces an Event.
/// The view renders from them; the notifier reacts to completions.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    TimerStarted {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerPaused {
        mode: Mode,
        remaining_secs: u64,
        at: DateTime<Utc>,
    },
    TimerReset {
        at: DateTime<Utc>,
    },
    /// The countdown hit zero. The engine has already switched to `next`
    /// and halted.
    IntervalCompleted {
        completed: Mode,
        next: Mode,
        notice: Notice,
        at: DateTime<Utc>,
    },
    StateSnapshot {
        state: TimerState,
        mode: Mode,
        remaining_secs: u64,
        total_secs: u64,
        at: DateTime<Utc>,
    },
}

impl Event {
    /// The notice to present, if this event carries one.
    pub fn notice(&self) -> Option<&Notice> {
        match self {
            Event::IntervalCompleted { notice, .. } => Some(notice),
            _ => None,
        }
    }
}
