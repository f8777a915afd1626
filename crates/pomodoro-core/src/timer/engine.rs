//! Timer engine implementation.
//!
//! The engine is a pure state machine counting whole seconds. It owns no
//! thread and no clock: the caller invokes `tick()` once per elapsed second
//! while the timer is running (see [`super::TimerRunner`]).
//!
//! ## State Transitions
//!
//! ```text
//! Idle --start--> Running --pause--> Idle
//! Running --tick reaching 0--> Idle (mode flipped, full duration loaded)
//! ```
//!
//! ## Usage
//!
//! ```
//! use pomodoro_core::{Event, IntervalDurations, TimerEngine};
//!
//! let mut engine = TimerEngine::new(IntervalDurations::new(2, 1).unwrap());
//! engine.start();
//! assert!(engine.tick().is_none());
//! assert!(matches!(engine.tick(), Some(Event::IntervalCompleted { .. })));
//! assert!(!engine.is_running());
//! ```

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::mode::{IntervalDurations, Mode};
use crate::events::Event;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimerState {
    Idle,
    Running,
}

/// Core timer engine.
#[derive(Debug, Clone)]
pub struct TimerEngine {
    durations: IntervalDurations,
    state: TimerState,
    mode: Mode,
    remaining_secs: u64,
}

impl TimerEngine {
    /// Create an idle engine in work mode with the full work interval loaded.
    pub fn new(durations: IntervalDurations) -> Self {
        Self {
            durations,
            state: TimerState::Idle,
            mode: Mode::Work,
            remaining_secs: durations.work_secs(),
        }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn state(&self) -> TimerState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == TimerState::Running
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn is_work_mode(&self) -> bool {
        self.mode == Mode::Work
    }

    pub fn remaining_secs(&self) -> u64 {
        self.remaining_secs
    }

    pub fn durations(&self) -> IntervalDurations {
        self.durations
    }

    /// Full length of the interval for the current mode.
    pub fn current_duration_secs(&self) -> u64 {
        self.durations.for_mode(self.mode)
    }

    /// Fraction of the current interval still remaining, 1.0 .. 0.0.
    pub fn progress(&self) -> f64 {
        let total = self.current_duration_secs();
        if total == 0 {
            return 0.0;
        }
        (self.remaining_secs as f64 / total as f64).clamp(0.0, 1.0)
    }

    /// Build a full state snapshot event.
    pub fn snapshot(&self) -> Event {
        Event::StateSnapshot {
            state: self.state,
            mode: self.mode,
            remaining_secs: self.remaining_secs,
            total_secs: self.current_duration_secs(),
            at: Utc::now(),
        }
    }

    // ── Commands ─────────────────────────────────────────────────────

    pub fn start(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Running => None,
            TimerState::Idle => {
                self.state = TimerState::Running;
                info!(mode = %self.mode, remaining_secs = self.remaining_secs, "timer started");
                Some(Event::TimerStarted {
                    mode: self.mode,
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
        }
    }

    pub fn pause(&mut self) -> Option<Event> {
        match self.state {
            TimerState::Idle => None,
            TimerState::Running => {
                self.state = TimerState::Idle;
                info!(mode = %self.mode, remaining_secs = self.remaining_secs, "timer paused");
                Some(Event::TimerPaused {
                    mode: self.mode,
                    remaining_secs: self.remaining_secs,
                    at: Utc::now(),
                })
            }
        }
    }

    /// Start when idle, pause when running.
    pub fn toggle(&mut self) -> Option<Event> {
        if self.is_running() {
            self.pause()
        } else {
            self.start()
        }
    }

    pub fn reset(&mut self) -> Option<Event> {
        self.state = TimerState::Idle;
        self.mode = Mode::Work;
        self.remaining_secs = self.durations.work_secs();
        info!("timer reset");
        Some(Event::TimerReset { at: Utc::now() })
    }

    /// Advance the countdown by one second.
    ///
    /// Returns `Some(Event::IntervalCompleted)` when this tick finishes the
    /// interval. Ticks while idle are ignored.
    pub fn tick(&mut self) -> Option<Event> {
        if !self.is_running() {
            return None;
        }
        self.remaining_secs = self.remaining_secs.saturating_sub(1);
        debug!(remaining_secs = self.remaining_secs, "tick");
        if self.remaining_secs == 0 {
            return Some(self.on_interval_complete());
        }
        None
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn on_interval_complete(&mut self) -> Event {
        let completed = self.mode;
        self.mode = completed.next();
        self.remaining_secs = self.durations.for_mode(self.mode);
        self.state = TimerState::Idle;
        info!(completed = %completed, next = %self.mode, "interval completed");
        Event::IntervalCompleted {
            completed,
            next: self.mode,
            notice: completed.completion_notice(),
            at: Utc::now(),
        }
    }
}

impl Default for TimerEngine {
    fn default() -> Self {
        Self::new(IntervalDurations::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn short(work: u64, brk: u64) -> TimerEngine {
        TimerEngine::new(IntervalDurations::new(work, brk).unwrap())
    }

    #[test]
    fn new_engine_is_idle_in_work_mode() {
        let engine = TimerEngine::default();
        assert_eq!(engine.state(), TimerState::Idle);
        assert!(engine.is_work_mode());
        assert_eq!(engine.remaining_secs(), 1500);
        assert_eq!(engine.progress(), 1.0);
    }

    #[test]
    fn start_pause() {
        let mut engine = TimerEngine::default();
        assert!(engine.start().is_some());
        assert_eq!(engine.state(), TimerState::Running);

        assert!(engine.pause().is_some());
        assert_eq!(engine.state(), TimerState::Idle);
        assert!(engine.pause().is_none());
    }

    #[test]
    fn start_twice_is_noop() {
        let mut engine = TimerEngine::default();
        assert!(engine.start().is_some());
        assert!(engine.start().is_none());
        engine.tick();
        assert_eq!(engine.remaining_secs(), 1499);
    }

    #[test]
    fn toggle_flips_running() {
        let mut engine = TimerEngine::default();
        assert!(matches!(engine.toggle(), Some(Event::TimerStarted { .. })));
        assert!(matches!(engine.toggle(), Some(Event::TimerPaused { .. })));
        assert!(!engine.is_running());
    }

    #[test]
    fn tick_while_idle_does_nothing() {
        let mut engine = TimerEngine::default();
        for _ in 0..10 {
            assert!(engine.tick().is_none());
        }
        assert_eq!(engine.remaining_secs(), 1500);
    }

    #[test]
    fn work_completion_switches_to_break_and_halts() {
        let mut engine = short(1, 3);
        engine.start();
        match engine.tick() {
            Some(Event::IntervalCompleted {
                completed,
                next,
                notice,
                ..
            }) => {
                assert_eq!(completed, Mode::Work);
                assert_eq!(next, Mode::Break);
                assert_eq!(notice.title, "Work finished");
            }
            other => panic!("Expected IntervalCompleted, got {other:?}"),
        }
        assert_eq!(engine.mode(), Mode::Break);
        assert_eq!(engine.remaining_secs(), 3);
        assert!(!engine.is_running());
    }

    #[test]
    fn break_completion_switches_back_to_work() {
        let mut engine = short(1, 1);
        engine.start();
        engine.tick();
        engine.start();
        let event = engine.tick().expect("break should complete");
        assert_eq!(event.notice().map(|n| n.title.as_str()), Some("Break finished"));
        assert!(engine.is_work_mode());
        assert_eq!(engine.remaining_secs(), 1);
        assert!(!engine.is_running());
    }

    #[test]
    fn reset_restores_initial_state() {
        let mut engine = short(1, 5);
        engine.start();
        engine.tick();
        engine.start();
        engine.tick();
        engine.reset();
        assert_eq!(engine.state(), TimerState::Idle);
        assert_eq!(engine.mode(), Mode::Work);
        assert_eq!(engine.remaining_secs(), 1);
    }

    #[test]
    fn progress_drains() {
        let mut engine = short(4, 1);
        engine.start();
        engine.tick();
        assert!((engine.progress() - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn snapshot_returns_valid_event() {
        let engine = TimerEngine::default();
        match engine.snapshot() {
            Event::StateSnapshot {
                state,
                mode,
                remaining_secs,
                total_secs,
                ..
            } => {
                assert_eq!(state, TimerState::Idle);
                assert_eq!(mode, Mode::Work);
                assert_eq!(remaining_secs, 1500);
                assert_eq!(total_secs, 1500);
            }
            _ => panic!("Expected StateSnapshot"),
        }
    }
}
