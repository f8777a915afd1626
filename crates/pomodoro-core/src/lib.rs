//! # Pomodoro Core Library
//!
//! Core logic for a Pomodoro countdown timer: a countdown that alternates
//! between a work interval and a break interval and raises a notice each
//! time one completes. Front ends (the `pomodoro` CLI and its terminal UI)
//! are thin views over this crate.
//!
//! ## Architecture
//!
//! - **Timer Engine**: a pure state machine; the caller invokes `tick()` once
//!   per elapsed second while it runs
//! - **Timer Runner**: a single background tokio task that ticks a shared
//!   engine and publishes every state change as an [`Event`]
//! - **View**: a stateless projection of the engine for renderers
//! - **Storage**: TOML-based configuration
//!
//! ## Key Components
//!
//! - [`TimerEngine`]: Core timer state machine
//! - [`TimerRunner`]: Cancellable one-second tick driver
//! - [`TimerView`]: Display model (`MM:SS`, progress, control label)
//! - [`Config`]: Application configuration management

pub mod error;
pub mod events;
pub mod storage;
pub mod timer;
pub mod view;

pub use error::{ConfigError, CoreError, ValidationError};
pub use events::Event;
pub use storage::Config;
pub use timer::{IntervalDurations, Mode, Notice, TimerEngine, TimerRunner, TimerState};
pub use view::{format_mm_ss, Accent, Control, TimerView};
