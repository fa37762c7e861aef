//! `DaysOfWeek` — A set of weekdays packed into seven bits
//!
//! Bit `i` is set when weekday index `i` (Sunday-first) is a member. Membership
//! is a single mask test, and the set is `Copy`, so matchers carry it by value.

use std::fmt;

use chrono::Weekday;

use crate::weekday::{weekday_from_index, weekday_index, WEEKDAYS};
use crate::{MatcherError, MAX_WEEKDAY_INDEX};

const ALL_BITS: u8 = 0b0111_1111;
const WEEKDAY_BITS: u8 = 0b0011_1110;
const WEEKEND_BITS: u8 = 0b0100_0001;

/// A set of weekdays.
///
/// Order and duplicates in the input never matter: `[5, 1, 3, 3]` and
/// `[1, 3, 5]` build the same set.
///
/// # Example
///
/// ```
/// use chrono::Weekday;
/// use daymatch::DaysOfWeek;
///
/// let days = DaysOfWeek::from_indices([5, 1, 3, 3])?;
/// assert_eq!(days.len(), 3);
/// assert!(days.contains(3));
/// assert!(days.contains_weekday(Weekday::Mon));
/// assert!(!days.contains(0));
/// assert_eq!(days.to_string(), "Mon,Wed,Fri");
/// # Ok::<(), daymatch::MatcherError>(())
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct DaysOfWeek(u8);

impl DaysOfWeek {
    /// The empty set. Matches no day.
    #[must_use]
    pub const fn empty() -> Self {
        Self(0)
    }

    /// All seven days.
    #[must_use]
    pub const fn all() -> Self {
        Self(ALL_BITS)
    }

    /// Monday through Friday.
    #[must_use]
    pub const fn weekdays() -> Self {
        Self(WEEKDAY_BITS)
    }

    /// Saturday and Sunday.
    #[must_use]
    pub const fn weekend() -> Self {
        Self(WEEKEND_BITS)
    }

    /// Build a set from a raw mask, or `None` if any bit above bit 6 is set.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Option<Self> {
        if bits & !ALL_BITS == 0 {
            Some(Self(bits))
        } else {
            None
        }
    }

    /// The raw mask.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Build a set from Sunday-first weekday indices.
    ///
    /// # Errors
    ///
    /// Returns [`MatcherError::InvalidWeekday`] for the first index outside `0..=6`.
    pub fn from_indices<I>(indices: I) -> Result<Self, MatcherError>
    where
        I: IntoIterator,
        I::Item: Into<i128>,
    {
        indices.into_iter().try_fold(Self::empty(), |set, index| {
            let index = index.into();
            u8::try_from(index)
                .ok()
                .and_then(weekday_from_index)
                .map(|day| set.with(day))
                .ok_or(MatcherError::InvalidWeekday { index })
        })
    }

    /// Whether the Sunday-first `index` is a member. Indices above 6 never are.
    #[must_use]
    pub const fn contains(self, index: u8) -> bool {
        index <= MAX_WEEKDAY_INDEX && self.0 & (1 << index) != 0
    }

    /// Whether `day` is a member.
    #[must_use]
    pub fn contains_weekday(self, day: Weekday) -> bool {
        self.contains(weekday_index(day))
    }

    /// Add `day` to the set.
    pub fn insert(&mut self, day: Weekday) {
        self.0 |= 1 << weekday_index(day);
    }

    /// Remove `day` from the set.
    pub fn remove(&mut self, day: Weekday) {
        self.0 &= !(1 << weekday_index(day));
    }

    /// Builder form of [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, day: Weekday) -> Self {
        self.insert(day);
        self
    }

    /// Number of weekdays in the set.
    #[must_use]
    pub const fn len(self) -> usize {
        self.0.count_ones() as usize
    }

    /// Whether the set is empty.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Days in either set.
    #[must_use]
    pub const fn union(self, other: Self) -> Self {
        Self(self.0 | other.0)
    }

    /// Days in both sets.
    #[must_use]
    pub const fn intersection(self, other: Self) -> Self {
        Self(self.0 & other.0)
    }

    /// Member indices in ascending order, Sunday first.
    #[must_use]
    pub fn iter(self) -> Iter {
        Iter { set: self, next: 0 }
    }

    /// Member weekdays in ascending index order.
    pub fn iter_weekdays(self) -> impl Iterator<Item = Weekday> {
        WEEKDAYS
            .into_iter()
            .filter(move |day| self.contains_weekday(*day))
    }
}

/// Iterator over the member indices of a [`DaysOfWeek`].
#[derive(Debug, Clone)]
pub struct Iter {
    set: DaysOfWeek,
    next: u8,
}

impl Iterator for Iter {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        while self.next <= MAX_WEEKDAY_INDEX {
            let index = self.next;
            self.next += 1;
            if self.set.contains(index) {
                return Some(index);
            }
        }
        None
    }
}

impl IntoIterator for DaysOfWeek {
    type Item = u8;
    type IntoIter = Iter;

    fn into_iter(self) -> Iter {
        self.iter()
    }
}

impl FromIterator<Weekday> for DaysOfWeek {
    fn from_iter<T: IntoIterator<Item = Weekday>>(iter: T) -> Self {
        iter.into_iter().fold(Self::empty(), Self::with)
    }
}

impl fmt::Debug for DaysOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DaysOfWeek({self})")
    }
}

/// Short day names joined by commas (`Mon,Wed,Fri`), or `-` when empty.
impl fmt::Display for DaysOfWeek {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for (i, day) in self.iter_weekdays().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{day}")?;
        }
        Ok(())
    }
}
