//! `HasWeekday` — Weekday extraction from date values
//!
//! The matcher never looks at a date beyond its weekday. This trait is the seam
//! between caller-owned date types and the matcher: anything that can name its
//! day of the week can be matched.
//!
//! Indices follow the Sunday-first convention: `0` = Sunday, `6` = Saturday.

use chrono::{DateTime, Datelike, NaiveDate, NaiveDateTime, TimeZone, Weekday};

/// Weekdays in index order, Sunday first.
pub const WEEKDAYS: [Weekday; 7] = [
    Weekday::Sun,
    Weekday::Mon,
    Weekday::Tue,
    Weekday::Wed,
    Weekday::Thu,
    Weekday::Fri,
    Weekday::Sat,
];

/// Sunday-first index of a chrono [`Weekday`].
///
/// ```
/// use chrono::Weekday;
/// assert_eq!(daymatch::weekday_index(Weekday::Sun), 0);
/// assert_eq!(daymatch::weekday_index(Weekday::Sat), 6);
/// ```
#[must_use]
pub fn weekday_index(weekday: Weekday) -> u8 {
    // num_days_from_sunday is always in 0..7
    weekday.num_days_from_sunday() as u8
}

/// The [`Weekday`] for a Sunday-first index, or `None` if `index > 6`.
#[must_use]
pub fn weekday_from_index(index: u8) -> Option<Weekday> {
    WEEKDAYS.get(usize::from(index)).copied()
}

/// A value with a day of the week.
///
/// Implemented for chrono's [`NaiveDate`], [`NaiveDateTime`], [`DateTime`] and
/// [`Weekday`]. Implement it for your own calendar type to match against it.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use daymatch::{DayMatcher, DaysOfWeek, HasWeekday};
///
/// struct Slot { weekday: Weekday }
///
/// impl HasWeekday for Slot {
///     fn weekday(&self) -> Weekday {
///         self.weekday
///     }
/// }
///
/// let matcher = DayMatcher::days_of_week(DaysOfWeek::weekend());
/// assert!(matcher.matches(&Slot { weekday: Weekday::Sun }));
/// ```
#[diagnostic::on_unimplemented(
    message = "`{Self}` does not implement `HasWeekday`",
    label = "this type cannot report its day of the week",
    note = "implement `fn weekday(&self) -> chrono::Weekday` for your date type"
)]
pub trait HasWeekday {
    /// The day of the week this value falls on.
    fn weekday(&self) -> Weekday;

    /// Sunday-first weekday index in `0..=6`.
    fn weekday_index(&self) -> u8 {
        weekday_index(self.weekday())
    }
}

impl HasWeekday for Weekday {
    fn weekday(&self) -> Weekday {
        *self
    }
}

impl HasWeekday for NaiveDate {
    fn weekday(&self) -> Weekday {
        Datelike::weekday(self)
    }
}

impl HasWeekday for NaiveDateTime {
    fn weekday(&self) -> Weekday {
        Datelike::weekday(self)
    }
}

/// Uses the local date in `Tz`, not the UTC date.
impl<Tz: TimeZone> HasWeekday for DateTime<Tz> {
    fn weekday(&self) -> Weekday {
        Datelike::weekday(self)
    }
}

impl<T: HasWeekday + ?Sized> HasWeekday for &T {
    fn weekday(&self) -> Weekday {
        (**self).weekday()
    }
}
