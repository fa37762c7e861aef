//! daymatch-test: Test domain for conformance testing
//!
//! Provides a calendar-cell context and the YAML fixture runner used by the
//! conformance suite. It also doubles as the reference for plugging a custom
//! date type into the matcher through [`HasWeekday`](daymatch::HasWeekday).
//!
//! # Example
//!
//! ```
//! use daymatch_test::prelude::*;
//!
//! let cell = CalendarCell::parse("2024-01-06").unwrap().outside_month(true);
//! assert!(DayMatcher::days_of_week(DaysOfWeek::weekend()).matches(&cell));
//! ```

use chrono::{NaiveDate, Weekday};
use daymatch::HasWeekday;


/// One cell of a date-picker month grid.
///
/// Grids pad the first and last rows with days from the neighbouring months;
/// those cells are flagged `outside_month` but still match on their weekday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarCell {
    date: NaiveDate,
    outside_month: bool,
}

impl CalendarCell {
    /// A cell inside the displayed month.
    #[must_use]
    pub fn new(date: NaiveDate) -> Self {
        Self {
            date,
            outside_month: false,
        }
    }

    /// Parse an ISO `YYYY-MM-DD` date into a cell.
    ///
    /// # Errors
    ///
    /// Returns chrono's parse error for anything that is not a valid date.
    pub fn parse(iso: &str) -> Result<Self, chrono::ParseError> {
        iso.trim().parse().map(Self::new)
    }

    /// Mark the cell as padding from a neighbouring month (builder pattern).
    #[must_use]
    pub fn outside_month(mut self, outside: bool) -> Self {
        self.outside_month = outside;
        self
    }

    /// The cell's date.
    #[must_use]
    pub fn date(&self) -> NaiveDate {
        self.date
    }

    /// Whether the cell pads a neighbouring month.
    #[must_use]
    pub fn is_outside_month(&self) -> bool {
        self.outside_month
    }
}

impl HasWeekday for CalendarCell {
    fn weekday(&self) -> Weekday {
        self.date.weekday()
    }
}

/// Prelude for convenient imports.
pub mod prelude {
    pub use super::CalendarCell;
    pub use daymatch::prelude::*;
}

#[cfg(test)]
mod tests {
    use super::*;
    use daymatch::{match_days_of_week, DayMatcher, DaysOfWeek};

    #[test]
    fn parse_cell() {
        let cell = CalendarCell::parse(" 2024-01-03 ").unwrap();
        assert_eq!(cell.date(), NaiveDate::from_ymd_opt(2024, 1, 3).unwrap());
        assert!(!cell.is_outside_month());
        assert_eq!(cell.weekday_index(), 3);
    }

    #[test]
    fn parse_rejects_bad_dates() {
        assert!(CalendarCell::parse("2024-02-30").is_err());
        assert!(CalendarCell::parse("Wednesday").is_err());
    }

    #[test]
    fn outside_month_cells_still_match() {
        // 2023-12-31 pads the first row of January 2024
        let cell = CalendarCell::parse("2023-12-31")
            .unwrap()
            .outside_month(true);
        let sundays = DayMatcher::days_of_week(DaysOfWeek::from_indices([0]).unwrap());
        assert!(match_days_of_week(&cell, &sundays));
    }

    #[test]
    fn full_matcher_over_grid() {
        let first = NaiveDate::from_ymd_opt(2023, 12, 31).unwrap();
        let weekend = DayMatcher::days_of_week(DaysOfWeek::weekend());
        let hits = first
            .iter_days()
            .take(42)
            .map(CalendarCell::new)
            .filter(|cell| weekend.matches(cell))
            .count();
        assert_eq!(hits, 12);
    }
}
