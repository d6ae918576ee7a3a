//! The Coptic calendar system.
//!
//! Twelve months of 30 days are followed by a thirteenth month of 5 days, or 6
//! in a leap year. Years repeat on a 1461-day, four year cycle with the leap
//! year falling on `year mod 4 == 3`. Every field is derived from the epoch-day
//! alone.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use tracing::debug;

use crate::calendar;
use crate::chronology::{Chronology, ChronologyError, Field};
use crate::consts::{
    DAYS_IN_LEAP_YEAR, DAYS_IN_STANDARD_MONTH, DAYS_IN_YEAR, EPAGOMENAL_DAYS, MAX_MONTH, MAX_YEAR, MIN_YEAR,
};
use crate::local::{LocalDate, LocalTime};
use crate::rule::{FieldDescriptor, FieldRule};
use crate::units::PeriodUnit;
use crate::{CopticDate, DateError};

const NAME: &str = "Coptic";

static COPTIC: CopticChronology = CopticChronology { name: NAME };

static YEAR: YearRule = YearRule {
    descriptor: FieldDescriptor::new(
        &COPTIC,
        "Year",
        PeriodUnit::Years,
        PeriodUnit::Forever,
        MIN_YEAR as i32,
        MAX_YEAR as i32,
    ),
};

static MONTH_OF_YEAR: MonthOfYearRule = MonthOfYearRule {
    descriptor: FieldDescriptor::new(
        &COPTIC,
        "MonthOfYear",
        PeriodUnit::Months,
        PeriodUnit::Years,
        1,
        MAX_MONTH as i32,
    ),
};

static DAY_OF_MONTH: DayOfMonthRule = DayOfMonthRule {
    descriptor: FieldDescriptor::new(
        &COPTIC,
        "DayOfMonth",
        PeriodUnit::Days,
        PeriodUnit::Months,
        1,
        DAYS_IN_STANDARD_MONTH as i32,
    ),
};

static DAY_OF_YEAR: DayOfYearRule = DayOfYearRule {
    descriptor: FieldDescriptor::new(
        &COPTIC,
        "DayOfYear",
        PeriodUnit::Days,
        PeriodUnit::Years,
        1,
        DAYS_IN_LEAP_YEAR as i32,
    ),
};

static DAY_OF_WEEK: DayOfWeekRule = DayOfWeekRule {
    descriptor: FieldDescriptor::new(&COPTIC, "DayOfWeek", PeriodUnit::Days, PeriodUnit::Weeks, 1, 7),
};

/// The Coptic chronology.
///
/// There is exactly one instance, reached through [`CopticChronology::instance`].
/// It is the only source of Coptic field rules.
pub struct CopticChronology {
    name: &'static str,
}

impl CopticChronology {
    /// Returns the singleton instance
    pub fn instance() -> &'static Self {
        &COPTIC
    }

    /// Checks if the specified year is a leap year (`year mod 4 == 3`).
    ///
    /// Years below `MIN_YEAR` are treated proleptically; rejecting them is up
    /// to the caller's range validation.
    pub const fn is_leap_year(&self, year: i32) -> bool {
        calendar::is_leap_year(year as i64)
    }

    /// Number of days in a year
    pub const fn length_of_year(&self, year: i32) -> u16 {
        calendar::length_of_year(year as i64)
    }

    /// Number of days in a month of a year.
    ///
    /// # Errors
    /// Returns `DateError::InvalidMonth` if the month is not 1-13.
    pub fn length_of_month(&self, year: i32, month: u8) -> Result<u8, DateError> {
        if month == 0 || month > MAX_MONTH {
            return Err(DateError::InvalidMonth(month));
        }
        Ok(calendar::length_of_month(i64::from(year), month))
    }

    /// Creates a Coptic date from its components.
    ///
    /// # Errors
    /// Returns a `DateError` if the components do not form a valid Coptic date.
    pub fn date(&self, year: u32, month: u8, day: u8) -> Result<CopticDate, DateError> {
        CopticDate::of(year, month, day)
    }

    /// Creates a Coptic date from a year and one-based day-of-year.
    ///
    /// # Errors
    /// Returns a `DateError` if the day-of-year is past the end of the year.
    pub fn date_year_day(&self, year: u32, day_of_year: u16) -> Result<CopticDate, DateError> {
        CopticDate::of_year_day(year, day_of_year)
    }

    /// Creates a Coptic date from an epoch-day.
    ///
    /// # Errors
    /// Returns a `DateError` if the epoch-day is out of range or before the Coptic epoch.
    pub fn date_from_epoch_day(&self, epoch_day: i64) -> Result<CopticDate, DateError> {
        CopticDate::from_epoch_day(epoch_day)
    }

    /// Creates the Coptic date for a `LocalDate`.
    ///
    /// # Errors
    /// Returns `DateError::BeforeEpoch` for dates before Coptic 0001-01-01.
    pub fn date_from_local(&self, date: &LocalDate) -> Result<CopticDate, DateError> {
        CopticDate::try_from(*date)
    }

    fn unsupported(&self, field: Field) -> ChronologyError {
        debug!(chronology = self.name, %field, "unsupported field requested");
        ChronologyError::UnsupportedField {
            chronology: self.name,
            field,
        }
    }
}

impl Chronology for CopticChronology {
    fn name(&self) -> &'static str {
        self.name
    }

    fn year(&self) -> &'static dyn FieldRule {
        &YEAR
    }

    fn month_of_year(&self) -> &'static dyn FieldRule {
        &MONTH_OF_YEAR
    }

    fn day_of_month(&self) -> &'static dyn FieldRule {
        &DAY_OF_MONTH
    }

    fn day_of_year(&self) -> &'static dyn FieldRule {
        &DAY_OF_YEAR
    }

    fn day_of_week(&self) -> &'static dyn FieldRule {
        &DAY_OF_WEEK
    }

    fn hour_of_day(&self) -> Result<&'static dyn FieldRule, ChronologyError> {
        Err(self.unsupported(Field::HourOfDay))
    }

    fn minute_of_hour(&self) -> Result<&'static dyn FieldRule, ChronologyError> {
        Err(self.unsupported(Field::MinuteOfHour))
    }

    fn second_of_minute(&self) -> Result<&'static dyn FieldRule, ChronologyError> {
        Err(self.unsupported(Field::SecondOfMinute))
    }

    fn nano_of_second(&self) -> Result<&'static dyn FieldRule, ChronologyError> {
        Err(self.unsupported(Field::NanoOfSecond))
    }

    fn is_supported(&self, field: Field) -> bool {
        field.is_date_field()
    }
}

impl fmt::Debug for CopticChronology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}Chronology", self.name)
    }
}

impl fmt::Display for CopticChronology {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name)
    }
}

impl PartialEq for CopticChronology {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self, other)
    }
}

impl Eq for CopticChronology {}

impl Serialize for CopticChronology {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.name)
    }
}

/// Deserializes to the singleton rather than a fresh instance.
impl<'de> Deserialize<'de> for &'static CopticChronology {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let name = String::deserialize(deserializer)?;
        if name == NAME {
            Ok(CopticChronology::instance())
        } else {
            Err(serde::de::Error::invalid_value(
                serde::de::Unexpected::Str(&name),
                &"the Coptic chronology",
            ))
        }
    }
}

/// Year field; derived from the four year cycle.
#[derive(Debug)]
pub struct YearRule {
    descriptor: FieldDescriptor,
}

impl FieldRule for YearRule {
    fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    #[allow(clippy::cast_possible_truncation)]
    fn value_quiet(&self, date: Option<&LocalDate>, _time: Option<&LocalTime>) -> Option<i32> {
        // LocalDate's epoch-day bounds keep the year well inside i32
        date.map(|d| calendar::year_from_epoch_day(d.to_epoch_day()) as i32)
    }
}

/// Month-of-year field; month 13 holds the epagomenal days.
#[derive(Debug)]
pub struct MonthOfYearRule {
    descriptor: FieldDescriptor,
}

impl FieldRule for MonthOfYearRule {
    fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    fn value_quiet(&self, date: Option<&LocalDate>, _time: Option<&LocalTime>) -> Option<i32> {
        date.map(|d| {
            let day_of_year = calendar::day_of_year_from_epoch_day(d.to_epoch_day());
            i32::from(calendar::month_from_day_of_year(day_of_year))
        })
    }
}

/// Day-of-month field.
#[derive(Debug)]
pub struct DayOfMonthRule {
    descriptor: FieldDescriptor,
}

impl FieldRule for DayOfMonthRule {
    fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    fn value_quiet(&self, date: Option<&LocalDate>, _time: Option<&LocalTime>) -> Option<i32> {
        date.map(|d| {
            let day_of_year = calendar::day_of_year_from_epoch_day(d.to_epoch_day());
            i32::from(calendar::day_of_month_from_day_of_year(day_of_year))
        })
    }

    /// Month 13 of a common year
    fn smallest_maximum_value(&self) -> i32 {
        i32::from(EPAGOMENAL_DAYS)
    }
}

/// Day-of-year field.
#[derive(Debug)]
pub struct DayOfYearRule {
    descriptor: FieldDescriptor,
}

impl FieldRule for DayOfYearRule {
    fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    fn value_quiet(&self, date: Option<&LocalDate>, _time: Option<&LocalTime>) -> Option<i32> {
        date.map(|d| i32::from(calendar::day_of_year_from_epoch_day(d.to_epoch_day())))
    }

    /// A common year
    fn smallest_maximum_value(&self) -> i32 {
        i32::from(DAYS_IN_YEAR)
    }
}

/// Day-of-week field, Monday = 1. Shared with every calendar system.
#[derive(Debug)]
pub struct DayOfWeekRule {
    descriptor: FieldDescriptor,
}

impl FieldRule for DayOfWeekRule {
    fn descriptor(&self) -> &FieldDescriptor {
        &self.descriptor
    }

    fn value_quiet(&self, date: Option<&LocalDate>, _time: Option<&LocalTime>) -> Option<i32> {
        date.map(|d| i32::from(calendar::day_of_week(d.to_epoch_day())))
    }
}
