mod engine;
mod mode;
mod runner;

pub use engine::{TimerEngine, TimerState};
pub use mode::{IntervalDurations, Mode, Notice, DEFAULT_BREAK_SECS, DEFAULT_WORK_SECS};
pub use runner::{TimerRunner, TICK_PERIOD};
