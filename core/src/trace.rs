//! Evaluation trace for debugging matcher decisions.
//!
//! [`DayMatcher::evaluate_with_trace`](crate::DayMatcher::evaluate_with_trace)
//! returns the same answer as `matches()` together with the step that produced
//! it. Useful when a modifier unexpectedly applies (or doesn't) to a day.
//!
//! ```
//! use chrono::Weekday;
//! use daymatch::{DayMatcher, DaysOfWeek};
//!
//! let trace = DayMatcher::days_of_week(DaysOfWeek::weekend())
//!     .evaluate_with_trace(&Weekday::Tue);
//! assert!(!trace.matched());
//! assert_eq!(trace.to_string(), "Tue is not in {Sun,Sat}");
//! ```

use std::fmt;

use chrono::Weekday;

use crate::DaysOfWeek;

/// The step that decided a [`DayMatcher`](crate::DayMatcher) evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MatchTrace {
    /// The matcher was a flag; the day was not inspected.
    Flag {
        /// The flag value.
        matched: bool,
    },
    /// The structured matcher carried no weekday set.
    NoDaysOfWeek,
    /// The day's weekday was tested against the set.
    Membership {
        /// Weekday of the evaluated day.
        weekday: Weekday,
        /// The matcher's weekday set.
        days: DaysOfWeek,
        /// Whether `weekday` is in `days`.
        matched: bool,
    },
}

impl MatchTrace {
    /// The overall result.
    #[must_use]
    pub fn matched(&self) -> bool {
        match self {
            Self::Flag { matched } | Self::Membership { matched, .. } => *matched,
            Self::NoDaysOfWeek => false,
        }
    }
}

impl fmt::Display for MatchTrace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Flag { matched: true } => f.write_str("always matches"),
            Self::Flag { matched: false } => f.write_str("never matches"),
            Self::NoDaysOfWeek => f.write_str("no daysOfWeek set"),
            Self::Membership {
                weekday,
                days,
                matched,
            } => {
                let verb = if *matched { "is" } else { "is not" };
                write!(f, "{weekday} {verb} in {{{days}}}")
            }
        }
    }
}
