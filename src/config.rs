//! Session configuration.

use std::path::PathBuf;
use std::time::Duration;

use crate::data::DEFAULT_PROBLEMS_PATH;

/// Default time budget, in seconds.
pub const DEFAULT_TIME_LIMIT_SECS: u64 = 30;

/// How long the runner waits before abandoning the session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimeLimit {
    /// A countdown of this length. Zero expires immediately.
    Bounded(Duration),
    /// No countdown at all; every answer is awaited indefinitely.
    Unbounded,
}

impl TimeLimit {
    pub fn from_secs(secs: u64) -> Self {
        Self::Bounded(Duration::from_secs(secs))
    }

    pub fn duration(&self) -> Option<Duration> {
        match self {
            Self::Bounded(duration) => Some(*duration),
            Self::Unbounded => None,
        }
    }
}

impl Default for TimeLimit {
    fn default() -> Self {
        Self::from_secs(DEFAULT_TIME_LIMIT_SECS)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuizConfig {
    /// CSV or JSON file holding the problems.
    pub source_path: PathBuf,
    pub time_limit: TimeLimit,
    /// Arm a fresh full countdown after every correct answer.
    pub reset_timer_on_correct_answer: bool,
    /// Print a per-question breakdown after the score line.
    pub review: bool,
}

impl Default for QuizConfig {
    fn default() -> Self {
        Self {
            source_path: PathBuf::from(DEFAULT_PROBLEMS_PATH),
            time_limit: TimeLimit::default(),
            reset_timer_on_correct_answer: false,
            review: false,
        }
    }
}
