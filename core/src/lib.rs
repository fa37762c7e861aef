//! daymatch - day-of-week matching for date-picker modifiers
//!
//! A date-picker decides which modifiers ("disabled", "selected", ...) apply to
//! a calendar day by trying several matcher kinds in turn. This crate is the
//! day-of-week clause of that dispatch: given a day and a matcher, does the day
//! fall on one of the matcher's weekdays?
//!
//! # Architecture
//!
//! - [`HasWeekday`] — Weekday extraction, implemented for chrono's date types
//! - [`DaysOfWeek`] — 7-bit weekday set (bit `i` = weekday index `i`, `0` = Sunday)
//! - [`DayMatcher`] — Either a plain flag or a structured descriptor
//! - [`MatchTrace`] — The step that decided an evaluation
//!
//! # Key Invariants
//!
//! 1. **Flags short-circuit**: `AlwaysOrNever(b)` returns `b` without looking at the day.
//!
//! 2. **Missing `daysOfWeek` → false**: a structured matcher without a weekday set
//!    never matches here. "Not applicable" and "no match" are the same answer; other
//!    matcher kinds are evaluated elsewhere.
//!
//! 3. **Evaluation never fails**: out-of-range weekday indices are rejected when a
//!    matcher is loaded from config, so they cannot reach the hot path.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use daymatch::prelude::*;
//!
//! let wednesday = NaiveDate::from_ymd_opt(2024, 1, 3).unwrap();
//!
//! let matcher = DayMatcher::days_of_week(DaysOfWeek::from_indices([1, 3, 5])?);
//! assert!(match_days_of_week(&wednesday, &matcher));
//!
//! let weekend = DayMatcher::days_of_week(DaysOfWeek::weekend());
//! assert!(!weekend.matches(&wednesday));
//!
//! assert!(DayMatcher::always().matches(&wednesday));
//! assert!(!DayMatcher::without_days_of_week().matches(&wednesday));
//! # Ok::<(), daymatch::MatcherError>(())
//! ```
//!
//! # Config
//!
//! With the `serde` feature, matchers load from the same JSON shape date-pickers
//! use on the wire (`true`, `false`, `{ "daysOfWeek": [0, 6] }`). See
//! [`MatcherConfig`].

// ═══════════════════════════════════════════════════════════════════════════════
// Modules
// ═══════════════════════════════════════════════════════════════════════════════

mod days_of_week;
mod matcher;
mod trace;
mod weekday;

#[cfg(feature = "serde")]
mod config;

// ═══════════════════════════════════════════════════════════════════════════════
// Public API
// ═══════════════════════════════════════════════════════════════════════════════

pub use days_of_week::{DaysOfWeek, Iter};
pub use matcher::{match_days_of_week, DayMatcher};
pub use trace::MatchTrace;
pub use weekday::{weekday_from_index, weekday_index, HasWeekday, WEEKDAYS};

#[cfg(feature = "serde")]
pub use config::{load_matcher_json, load_matcher_yaml, MatcherConfig, StructuredConfig};

// ═══════════════════════════════════════════════════════════════════════════════
// Prelude
// ═══════════════════════════════════════════════════════════════════════════════

/// Prelude module for convenient imports.
///
/// ```
/// use daymatch::prelude::*;
/// ```
pub mod prelude {
    pub use crate::{
        match_days_of_week, DayMatcher, DaysOfWeek, HasWeekday, MatchTrace, MatcherError,
    };

    #[cfg(feature = "serde")]
    pub use crate::MatcherConfig;
}

// ═══════════════════════════════════════════════════════════════════════════════
// Constants
// ═══════════════════════════════════════════════════════════════════════════════

/// Largest valid weekday index (Saturday).
pub const MAX_WEEKDAY_INDEX: u8 = 6;

/// Maximum number of entries accepted in a configured `daysOfWeek` list.
///
/// Duplicates are legal, so a list can be longer than seven, but an unbounded
/// list is rejected at load time.
pub const MAX_DAYS_OF_WEEK_ENTRIES: usize = 64;

// ═══════════════════════════════════════════════════════════════════════════════
// Errors
// ═══════════════════════════════════════════════════════════════════════════════

/// Errors from matcher construction and config loading.
///
/// Evaluation itself never fails; these are raised while building a
/// [`DaysOfWeek`] or loading a [`DayMatcher`] from config.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum MatcherError {
    /// A weekday index outside `0..=6`.
    #[error("weekday index {index} is out of range, use 0 (Sunday) through 6 (Saturday)")]
    InvalidWeekday {
        /// The rejected index.
        index: i128,
    },

    /// Too many entries in a `daysOfWeek` list.
    #[error("daysOfWeek has {count} entries, but maximum allowed is {max}")]
    TooManyEntries {
        /// Actual number of entries.
        count: usize,
        /// Maximum allowed.
        max: usize,
    },

    /// Configuration parsing failed.
    #[error("invalid config: {message}")]
    InvalidConfig {
        /// The underlying parser message.
        message: String,
    },
}
