//! `DayMatcher` — The day-of-week clause of modifier matching
//!
//! A matcher is either a plain flag or a structured descriptor that may carry a
//! weekday set. Evaluation is a three-step decision:
//!
//! 1. A flag returns itself.
//! 2. A structured matcher without `days_of_week` returns `false`.
//! 3. Otherwise the day's weekday is tested against the set.

use crate::{DaysOfWeek, HasWeekday, MatchTrace};

/// Matcher for the weekday clause of a date-picker modifier.
///
/// # INV: missing `days_of_week` → false
///
/// A `Structured` matcher with `days_of_week: None` never matches. Callers that
/// need to tell "this matcher is about something else" from "no match" must look
/// at [`weekday_set`](Self::weekday_set) themselves.
///
/// # Example
///
/// ```
/// use chrono::{NaiveDate, Weekday};
/// use daymatch::{DayMatcher, DaysOfWeek};
///
/// let sunday = NaiveDate::from_ymd_opt(2024, 1, 7).unwrap();
///
/// let matcher = DayMatcher::days_of_week(DaysOfWeek::weekend());
/// assert!(matcher.matches(&sunday));
/// assert!(matcher.matches(&Weekday::Sat));
/// assert!(!matcher.matches(&Weekday::Mon));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DayMatcher {
    /// `true` matches every day; `false` matches none.
    AlwaysOrNever(bool),

    /// A structured descriptor. Only its weekday set is consulted here.
    Structured {
        /// Weekdays to match, or `None` when the descriptor has none.
        days_of_week: Option<DaysOfWeek>,
    },
}

impl DayMatcher {
    /// A matcher that accepts every day.
    #[must_use]
    pub const fn always() -> Self {
        Self::AlwaysOrNever(true)
    }

    /// A matcher that accepts no day.
    #[must_use]
    pub const fn never() -> Self {
        Self::AlwaysOrNever(false)
    }

    /// A structured matcher over `days`.
    #[must_use]
    pub const fn days_of_week(days: DaysOfWeek) -> Self {
        Self::Structured {
            days_of_week: Some(days),
        }
    }

    /// A structured matcher with no weekday set. Never matches.
    #[must_use]
    pub const fn without_days_of_week() -> Self {
        Self::Structured { days_of_week: None }
    }

    /// The weekday set, if this is a structured matcher that carries one.
    #[must_use]
    pub const fn weekday_set(&self) -> Option<DaysOfWeek> {
        match *self {
            Self::AlwaysOrNever(_) => None,
            Self::Structured { days_of_week } => days_of_week,
        }
    }

    /// Evaluate this matcher against `day`.
    ///
    /// Pure and allocation-free. A flag never inspects `day`.
    #[must_use]
    pub fn matches<D: HasWeekday + ?Sized>(&self, day: &D) -> bool {
        match *self {
            Self::AlwaysOrNever(flag) => flag,
            Self::Structured { days_of_week: None } => false,
            Self::Structured {
                days_of_week: Some(days),
            } => days.contains(day.weekday_index()),
        }
    }

    /// Evaluate with a trace of the deciding step.
    ///
    /// # INV: `trace.matched()` == `matches()` result
    #[must_use]
    pub fn evaluate_with_trace<D: HasWeekday + ?Sized>(&self, day: &D) -> MatchTrace {
        match *self {
            Self::AlwaysOrNever(matched) => MatchTrace::Flag { matched },
            Self::Structured { days_of_week: None } => MatchTrace::NoDaysOfWeek,
            Self::Structured {
                days_of_week: Some(days),
            } => {
                let weekday = day.weekday();
                MatchTrace::Membership {
                    weekday,
                    days,
                    matched: days.contains_weekday(weekday),
                }
            }
        }
    }
}

impl From<bool> for DayMatcher {
    fn from(flag: bool) -> Self {
        Self::AlwaysOrNever(flag)
    }
}

impl From<DaysOfWeek> for DayMatcher {
    fn from(days: DaysOfWeek) -> Self {
        Self::days_of_week(days)
    }
}

/// Whether `day` falls on one of the weekdays `matcher` selects.
///
/// Free-function form of [`DayMatcher::matches`], for dispatchers that OR several
/// matcher kinds together.
///
/// ```
/// use chrono::NaiveDate;
/// use daymatch::{match_days_of_week, DayMatcher};
///
/// let day = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
/// assert!(match_days_of_week(&day, &DayMatcher::always()));
/// assert!(!match_days_of_week(&day, &DayMatcher::never()));
/// ```
#[must_use]
pub fn match_days_of_week<D: HasWeekday + ?Sized>(day: &D, matcher: &DayMatcher) -> bool {
    matcher.matches(day)
}
