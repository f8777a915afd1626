use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Default work interval: 25 minutes.
pub const DEFAULT_WORK_SECS: u64 = 25 * 60;
/// Default break interval: 5 minutes.
pub const DEFAULT_BREAK_SECS: u64 = 5 * 60;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    Work,
    Break,
}

impl Mode {
    /// The mode that follows this one once its interval completes.
    pub fn next(self) -> Self {
        match self {
            Mode::Work => Mode::Break,
            Mode::Break => Mode::Work,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Mode::Work => "Work",
            Mode::Break => "Break",
        }
    }

    /// The notice raised when an interval of this mode completes.
    pub fn completion_notice(self) -> Notice {
        match self {
            Mode::Work => Notice::new("Work finished", "Time to take a break."),
            Mode::Break => Notice::new("Break finished", "Time to get back to work."),
        }
    }
}

impl std::fmt::Display for Mode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Title and message shown when an interval completes.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Notice {
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Work and break lengths, both strictly positive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalDurations {
    work_secs: u64,
    break_secs: u64,
}

impl IntervalDurations {
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if either duration is zero.
    pub fn new(work_secs: u64, break_secs: u64) -> Result<Self, ValidationError> {
        if work_secs == 0 {
            return Err(ValidationError::InvalidValue {
                field: "work_secs".into(),
                message: "work interval must be at least one second".into(),
            });
        }
        if break_secs == 0 {
            return Err(ValidationError::InvalidValue {
                field: "break_secs".into(),
                message: "break interval must be at least one second".into(),
            });
        }
        Ok(Self {
            work_secs,
            break_secs,
        })
    }

    /// Build from whole minutes, saturating on overflow.
    ///
    /// # Errors
    ///
    /// Returns a [`ValidationError`] if either duration is zero.
    pub fn from_minutes(work_min: u64, break_min: u64) -> Result<Self, ValidationError> {
        Self::new(work_min.saturating_mul(60), break_min.saturating_mul(60))
    }

    pub fn work_secs(&self) -> u64 {
        self.work_secs
    }

    pub fn break_secs(&self) -> u64 {
        self.break_secs
    }

    pub fn for_mode(&self, mode: Mode) -> u64 {
        match mode {
            Mode::Work => self.work_secs,
            Mode::Break => self.break_secs,
        }
    }
}

impl Default for IntervalDurations {
    fn default() -> Self {
        Self {
            work_secs: DEFAULT_WORK_SECS,
            break_secs: DEFAULT_BREAK_SECS,
        }
    }
}
