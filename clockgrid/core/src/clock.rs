//! Clock Readings
//!
//! Decomposes a time of day into the three labels the clock view lights up.
//! The core never samples time on its own; surfaces call [`ClockReading::now`]
//! (or build one from any [`Timelike`]) on their own cadence.

use chrono::Timelike;
use serde::{Deserialize, Serialize};

use crate::sequence::Label;

/// Hour, minute and second of a time instant, as labels
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockReading {
    /// Hour on a 12-hour dial, `01`..`12`
    pub hour: Label,
    /// Minute, `00`..`59`
    pub minute: Label,
    /// Second, `00`..`59`
    pub second: Label,
}

impl ClockReading {
    /// Read the labels off any time-of-day value
    ///
    /// Midnight and noon both show as `12`.
    #[must_use]
    pub fn from_time<T: Timelike>(time: &T) -> Self {
        let (_, hour12) = time.hour12();
        Self {
            hour: Label::saturating(hour12),
            minute: Label::saturating(time.minute()),
            second: Label::saturating(time.second()),
        }
    }

    /// Sample the local wall clock
    #[must_use]
    pub fn now() -> Self {
        Self::from_time(&chrono::Local::now())
    }
}
