mod calendar;
mod chronology;
mod consts;
mod coptic;
mod local;
mod prelude;
mod range;
mod rule;
mod types;
mod units;

pub use chronology::{Chronology, ChronologyError, Field};
pub use consts::*;
pub use coptic::{CopticChronology, DayOfMonthRule, DayOfWeekRule, DayOfYearRule, MonthOfYearRule, YearRule};
pub use local::{LocalDate, LocalTime};
pub use range::{RangeError, ValueRange};
pub use rule::{FieldDescriptor, FieldRule};
pub use types::{Day, Month, Year};
pub use units::PeriodUnit;

use crate::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::trace;

/// A validated date in the Coptic calendar system.
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "CopticFields", into = "CopticFields")]
pub struct CopticDate {
    year:  Year,
    month: Month,
    day:   Day,
}

#[derive(Debug, Clone, PartialEq, Eq, Display)]
pub enum DateError {
    #[display(fmt = "Invalid year: {} (must be {}-{})", "_0", MIN_YEAR, MAX_YEAR)]
    InvalidYear(i64),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid day {day} for month {year}-{month:02}")]
    InvalidDay { year: u32, month: u8, day: u8 },
    #[display(fmt = "Invalid day-of-year {day_of_year} for year {year}")]
    InvalidDayOfYear { year: u32, day_of_year: u16 },
    #[display(fmt = "Epoch-day {_0} is before the Coptic epoch")]
    BeforeEpoch(i64),
    #[display(fmt = "Epoch-day {} is outside {}..={}", "_0", MIN_EPOCH_DAY, MAX_EPOCH_DAY)]
    EpochDayOutOfRange(i64),
    #[display(fmt = "Invalid ISO date {year}-{month:02}-{day:02}")]
    InvalidIsoDate { year: i32, month: u8, day: u8 },
    #[display(fmt = "Invalid time {hour:02}:{minute:02}:{second:02}.{nano:09}")]
    InvalidTime {
        hour:   u8,
        minute: u8,
        second: u8,
        nano:   u32,
    },
}

impl std::error::Error for DateError {}

impl CopticDate {
    /// Creates a date from its components, validating each one
    ///
    /// # Errors
    /// Returns a `DateError` naming the first invalid component.
    pub fn of(year: u32, month: u8, day: u8) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        let month = Month::new(month)?;
        let day = Day::new(day, year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates a date from a year and a one-based day-of-year
    ///
    /// # Errors
    /// Returns `DateError::InvalidDayOfYear` if the day is 0 or past the end of the year.
    pub fn of_year_day(year: u32, day_of_year: u16) -> Result<Self, DateError> {
        let year = Year::new(year)?;
        if day_of_year == 0 || day_of_year > calendar::length_of_year(i64::from(year.get())) {
            return Err(DateError::InvalidDayOfYear {
                year: year.get(),
                day_of_year,
            });
        }
        let month = Month::new(calendar::month_from_day_of_year(day_of_year))?;
        let day = Day::new(calendar::day_of_month_from_day_of_year(day_of_year), year, month)?;
        Ok(Self { year, month, day })
    }

    /// Creates the Coptic date falling on an epoch-day
    ///
    /// # Errors
    /// Returns `DateError::EpochDayOutOfRange` outside the `LocalDate` bounds, or
    /// `DateError::BeforeEpoch` before Coptic 0001-01-01.
    pub fn from_epoch_day(epoch_day: i64) -> Result<Self, DateError> {
        let date = LocalDate::of_epoch_day(epoch_day)?;
        Self::from_local_date(date)
    }

    fn from_local_date(date: LocalDate) -> Result<Self, DateError> {
        let epoch_day = date.to_epoch_day();
        let (year, month, day) = calendar::components_from_epoch_day(epoch_day);
        let Some(year) = u32::try_from(year).ok().filter(|&y| y >= MIN_YEAR) else {
            trace!(epoch_day, year, "epoch-day precedes the Coptic epoch");
            return Err(DateError::BeforeEpoch(epoch_day));
        };
        Self::of(year, month, day)
    }

    /// Returns the epoch-day of this date
    pub const fn to_epoch_day(&self) -> i64 {
        calendar::epoch_day_from_components(self.year.get() as i64, self.month.get(), self.day.get())
    }

    /// Converts to a calendar-neutral `LocalDate`
    ///
    /// # Errors
    /// Returns `DateError::EpochDayOutOfRange` for years beyond the `LocalDate` bounds.
    pub fn to_local_date(&self) -> Result<LocalDate, DateError> {
        LocalDate::of_epoch_day(self.to_epoch_day())
    }

    /// Returns the year (as u32 for convenience)
    pub const fn year(&self) -> u32 {
        self.year.get()
    }

    /// Returns the month, 1-13 (as u8 for convenience)
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Returns the day-of-month (as u8 for convenience)
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// One-based day-of-year, 1-366
    pub const fn day_of_year(&self) -> u16 {
        (self.month.get() as u16 - 1) * DAYS_IN_STANDARD_MONTH as u16 + self.day.get() as u16
    }

    /// ISO day-of-week, Monday = 1 through Sunday = 7
    pub const fn day_of_week(&self) -> u8 {
        calendar::day_of_week(self.to_epoch_day())
    }

    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Days in this date's month: 30, or 5/6 for the epagomenal month
    pub const fn length_of_month(&self) -> u8 {
        calendar::length_of_month(self.year.get() as i64, self.month.get())
    }

    /// Days in this date's year: 365 or 366
    pub const fn length_of_year(&self) -> u16 {
        calendar::length_of_year(self.year.get() as i64)
    }

    /// Reads any field through the Coptic chronology's rules
    ///
    /// # Errors
    /// Returns `ChronologyError::UnsupportedField` for clock fields, or
    /// `ChronologyError::Date` if the date lies beyond the `LocalDate` bounds.
    pub fn get(&self, field: Field) -> Result<i32, ChronologyError> {
        let rule = CopticChronology::instance().rule(field)?;
        let date = self.to_local_date()?;
        rule.value(Some(&date), None)
    }
}

impl TryFrom<LocalDate> for CopticDate {
    type Error = DateError;

    fn try_from(value: LocalDate) -> Result<Self, Self::Error> {
        Self::from_local_date(value)
    }
}

impl TryFrom<CopticDate> for LocalDate {
    type Error = DateError;

    fn try_from(value: CopticDate) -> Result<Self, Self::Error> {
        value.to_local_date()
    }
}

/// Unvalidated serde form of `CopticDate`
#[derive(Serialize, Deserialize)]
struct CopticFields {
    year:  u32,
    month: u8,
    day:   u8,
}

impl From<CopticDate> for CopticFields {
    fn from(date: CopticDate) -> Self {
        Self {
            year:  date.year(),
            month: date.month(),
            day:   date.day(),
        }
    }
}

impl TryFrom<CopticFields> for CopticDate {
    type Error = DateError;

    fn try_from(fields: CopticFields) -> Result<Self, Self::Error> {
        Self::of(fields.year, fields.month, fields.day)
    }
}
