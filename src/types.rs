use crate::DateError;
use crate::calendar::length_of_month;
use crate::consts::{MAX_MONTH, MAX_YEAR};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU32;
use std::num::NonZeroU8;

/// A Coptic year guaranteed to be in the range `MIN_YEAR..=MAX_YEAR`.
/// Uses `NonZeroU32` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Year(NonZeroU32);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `DateError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u32) -> Result<Self, DateError> {
        let non_zero = NonZeroU32::new(value).ok_or(DateError::InvalidYear(i64::from(value)))?;
        if value > MAX_YEAR {
            return Err(DateError::InvalidYear(i64::from(value)));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u32
    #[inline]
    pub const fn get(self) -> u32 {
        self.0.get()
    }

    /// Checks if this is a leap year (`year mod 4 == 3`)
    pub const fn is_leap(self) -> bool {
        crate::calendar::is_leap_year(self.0.get() as i64)
    }
}

impl TryFrom<u32> for Year {
    type Error = DateError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u32 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A Coptic month guaranteed to be in the range `1..=MAX_MONTH` (1..=13)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, DateError> {
        let non_zero = NonZeroU8::new(value).ok_or(DateError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(DateError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// True for the short thirteenth month
    pub const fn is_epagomenal(self) -> bool {
        self.0.get() == MAX_MONTH
    }
}

impl TryFrom<u8> for Month {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A day value guaranteed to be valid for a given Coptic year and month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the length of the given month
    ///
    /// # Errors
    /// Returns `DateError::InvalidDay` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: Year, month: Month) -> Result<Self, DateError> {
        let invalid = DateError::InvalidDay {
            year:  year.get(),
            month: month.get(),
            day:   value,
        };
        let non_zero = NonZeroU8::new(value).ok_or_else(|| invalid.clone())?;

        if value > length_of_month(i64::from(year.get()), month.get()) {
            return Err(invalid);
        }

        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = DateError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Can't validate without year/month context, so just check non-zero
        NonZeroU8::new(value).map(Self).ok_or(DateError::InvalidDay {
            year:  0,
            month: 0,
            day:   value,
        })
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
