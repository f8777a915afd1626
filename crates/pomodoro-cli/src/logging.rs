//! Tracing subscriber setup.
//!
//! The filter comes from `POMODORO_LOG` (default `warn`). The terminal UI
//! owns the screen, so in that mode logs go to `pomodoro.log` in the data
//! directory instead of stderr.

use std::fs::OpenOptions;
use std::sync::Mutex;

use pomodoro_core::storage::data_dir;
use tracing_subscriber::EnvFilter;

pub enum LogTarget {
    Stderr,
    DataDirFile,
}

pub fn init(target: LogTarget) {
    let filter = EnvFilter::try_from_env("POMODORO_LOG").unwrap_or_else(|_| EnvFilter::new("warn"));

    match target {
        LogTarget::Stderr => {
            let _ = tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(std::io::stderr)
                .try_init();
        }
        LogTarget::DataDirFile => {
            let file = data_dir().ok().and_then(|dir| {
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(dir.join("pomodoro.log"))
                    .ok()
            });
            // No log file means no logging; stderr would corrupt the UI.
            if let Some(file) = file {
                let _ = tracing_subscriber::fmt()
                    .with_env_filter(filter)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .try_init();
            }
        }
    }
}
