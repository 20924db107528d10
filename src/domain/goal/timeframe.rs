//! Timeframe classes and the windows derived from them.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::domain::foundation::{Timestamp, ValidationError};

/// Length class of a goal window.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Timeframe {
    Daily,
    Weekly,
    Monthly,
}

impl Timeframe {
    /// End of a window starting at `start`.
    ///
    /// Monthly windows end on the first of the following calendar month
    /// (same time of day), not after a fixed 30 days.
    pub fn window_end(&self, start: Timestamp) -> Timestamp {
        match self {
            Timeframe::Daily => start.add_days(1),
            Timeframe::Weekly => start.add_days(7),
            Timeframe::Monthly => start.first_of_next_month(),
        }
    }
}

impl fmt::Display for Timeframe {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Timeframe::Daily => "daily",
            Timeframe::Weekly => "weekly",
            Timeframe::Monthly => "monthly",
        };
        write!(f, "{}", s)
    }
}

impl FromStr for Timeframe {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "daily" => Ok(Timeframe::Daily),
            "weekly" => Ok(Timeframe::Weekly),
            "monthly" => Ok(Timeframe::Monthly),
            other => Err(ValidationError::invalid_format(
                "timeframe",
                format!("expected daily, weekly or monthly, got '{}'", other),
            )),
        }
    }
}

/// Closed interval `[start, end]` a goal accumulates progress over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GoalWindow {
    pub start: Timestamp,
    pub end: Timestamp,
}

impl GoalWindow {
    pub fn for_anchor(anchor: Timestamp, timeframe: Timeframe) -> Self {
        Self {
            start: anchor,
            end: timeframe.window_end(anchor),
        }
    }

    /// Upper bound actually counted: entries dated after `now` never count.
    pub fn effective_end(&self, now: Timestamp) -> Timestamp {
        self.end.min(now)
    }

    /// True if `at` counts towards progress when evaluated at `now`.
    pub fn counts(&self, at: Timestamp, now: Timestamp) -> bool {
        at >= self.start && at <= self.effective_end(now)
    }

    /// True if `at` lies inside the full window, regardless of now.
    pub fn contains(&self, at: Timestamp) -> bool {
        at >= self.start && at <= self.end
    }

    /// Window end strictly passed.
    pub fn has_elapsed(&self, now: Timestamp) -> bool {
        now > self.end
    }
}
