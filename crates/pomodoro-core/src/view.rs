//! Display model for the timer.
//!
//! [`TimerView`] is a pure projection of a [`TimerEngine`]: renderers read it
//! after every event and never touch the engine directly.

use serde::Serialize;

use crate::timer::{Mode, TimerEngine};

/// Format seconds as `MM:SS`. Minutes are not wrapped at 60.
pub fn format_mm_ss(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// What the single start/pause control offers next.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Control {
    Start,
    Pause,
}

impl Control {
    pub fn label(self) -> &'static str {
        match self {
            Control::Start => "Start",
            Control::Pause => "Pause",
        }
    }
}

/// Per-mode accent color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Accent {
    Blue,
    Green,
}

impl From<Mode> for Accent {
    fn from(mode: Mode) -> Self {
        match mode {
            Mode::Work => Accent::Blue,
            Mode::Break => Accent::Green,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TimerView {
    pub mode: Mode,
    pub mode_label: &'static str,
    pub time_text: String,
    /// Fraction of the interval remaining; the bar drains toward 0.
    pub progress: f64,
    pub control: Control,
    pub accent: Accent,
}

impl TimerView {
    pub fn from_engine(engine: &TimerEngine) -> Self {
        let mode = engine.mode();
        Self {
            mode,
            mode_label: mode.label(),
            time_text: format_mm_ss(engine.remaining_secs()),
            progress: engine.progress(),
            control: if engine.is_running() {
                Control::Pause
            } else {
                Control::Start
            },
            accent: mode.into(),
        }
    }

    /// One-line rendering for plain terminals and logs.
    pub fn status_line(&self) -> String {
        const WIDTH: usize = 20;
        let filled = (self.progress * WIDTH as f64).round() as usize;
        let filled = filled.min(WIDTH);
        format!(
            "{:<5} {} [{}{}]",
            self.mode_label,
            self.time_text,
            "#".repeat(filled),
            "-".repeat(WIDTH - filled)
        )
    }
}
