//! Calendar-neutral date and time values.
//!
//! `LocalDate` is nothing more than a bounded epoch-day; every chronology reads
//! its fields from that one number. `LocalTime` is carried alongside it so that
//! field rules share one signature, but date-only rules never look at it.

use serde::{Deserialize, Serialize};

use crate::DateError;
use crate::consts::{
    CENTURY_CYCLE, CIVIL_TO_EPOCH_DAYS, DAYS_IN_GREGORIAN_ERA, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    ISO_DAYS_IN_MONTH, MAX_EPOCH_DAY, MAX_ISO_YEAR, MIN_EPOCH_DAY,
};

/// A date without time-zone or calendar system, stored as days since 1970-01-01.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "i64", into = "i64")]
pub struct LocalDate {
    epoch_day: i64,
}

impl LocalDate {
    /// 1970-01-01
    pub const EPOCH: Self = Self { epoch_day: 0 };

    /// Creates a date from an epoch-day.
    ///
    /// # Errors
    /// Returns `DateError::EpochDayOutOfRange` outside `MIN_EPOCH_DAY..=MAX_EPOCH_DAY`.
    pub fn of_epoch_day(epoch_day: i64) -> Result<Self, DateError> {
        if !(MIN_EPOCH_DAY..=MAX_EPOCH_DAY).contains(&epoch_day) {
            return Err(DateError::EpochDayOutOfRange(epoch_day));
        }
        Ok(Self { epoch_day })
    }

    /// Creates a date from a proleptic ISO (Gregorian) year, month and day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidIsoDate` if the components do not name a real date.
    pub fn of(year: i32, month: u8, day: u8) -> Result<Self, DateError> {
        if !(-MAX_ISO_YEAR..=MAX_ISO_YEAR).contains(&year)
            || !(1..=12).contains(&month)
            || day == 0
            || day > iso_days_in_month(year, month)
        {
            return Err(DateError::InvalidIsoDate { year, month, day });
        }

        // Count from 0000-03-01 so the leap day falls at the end of each civil year
        let civil_year = i64::from(year) - i64::from(month <= FEBRUARY);
        let era = civil_year.div_euclid(i64::from(GREGORIAN_CYCLE));
        let year_of_era = civil_year - era * i64::from(GREGORIAN_CYCLE);
        let shifted_month = if month > FEBRUARY { i64::from(month) - 3 } else { i64::from(month) + 9 };
        let day_of_civil_year = (153 * shifted_month + 2) / 5 + i64::from(day) - 1;
        let day_of_era = year_of_era * 365 + year_of_era / 4 - year_of_era / i64::from(CENTURY_CYCLE) + day_of_civil_year;

        Self::of_epoch_day(era * DAYS_IN_GREGORIAN_ERA + day_of_era - CIVIL_TO_EPOCH_DAYS)
    }

    /// Returns the epoch-day
    #[inline]
    pub const fn to_epoch_day(self) -> i64 {
        self.epoch_day
    }
}

impl TryFrom<i64> for LocalDate {
    type Error = DateError;

    fn try_from(value: i64) -> Result<Self, Self::Error> {
        Self::of_epoch_day(value)
    }
}

impl From<LocalDate> for i64 {
    fn from(date: LocalDate) -> Self {
        date.epoch_day
    }
}

const fn is_iso_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

const fn iso_days_in_month(year: i32, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= 12);

    if month == FEBRUARY && is_iso_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        ISO_DAYS_IN_MONTH[month as usize]
    }
}

/// A time of day with nanosecond precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct LocalTime {
    hour:   u8,
    minute: u8,
    second: u8,
    nano:   u32,
}

impl LocalTime {
    /// 00:00
    pub const MIDNIGHT: Self = Self {
        hour:   0,
        minute: 0,
        second: 0,
        nano:   0,
    };
    /// 12:00
    pub const NOON: Self = Self {
        hour:   12,
        minute: 0,
        second: 0,
        nano:   0,
    };

    /// Creates a time, validating each component.
    ///
    /// # Errors
    /// Returns `DateError::InvalidTime` if any component is out of range.
    pub fn of(hour: u8, minute: u8, second: u8, nano: u32) -> Result<Self, DateError> {
        if hour > 23 || minute > 59 || second > 59 || nano > 999_999_999 {
            return Err(DateError::InvalidTime {
                hour,
                minute,
                second,
                nano,
            });
        }
        Ok(Self {
            hour,
            minute,
            second,
            nano,
        })
    }

    pub const fn hour(&self) -> u8 {
        self.hour
    }

    pub const fn minute(&self) -> u8 {
        self.minute
    }

    pub const fn second(&self) -> u8 {
        self.second
    }

    pub const fn nano(&self) -> u32 {
        self.nano
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_of_iso_cases() {
        struct TestCase {
            year:      i32,
            month:     u8,
            day:       u8,
            epoch_day: i64,
        }

        let cases = [
            TestCase {
                year:      1970,
                month:     1,
                day:       1,
                epoch_day: 0,
            },
            TestCase {
                year:      1969,
                month:     12,
                day:       31,
                epoch_day: -1,
            },
            TestCase {
                year:      2000,
                month:     3,
                day:       1,
                epoch_day: 11_017,
            },
            TestCase {
                year:      2024,
                month:     9,
                day:       11,
                epoch_day: 19_977,
            },
            TestCase {
                year:      284,
                month:     8,
                day:       29,
                epoch_day: -615_558,
            },
            TestCase {
                year:      -MAX_ISO_YEAR,
                month:     1,
                day:       1,
                epoch_day: MIN_EPOCH_DAY,
            },
            TestCase {
                year:      MAX_ISO_YEAR,
                month:     12,
                day:       31,
                epoch_day: MAX_EPOCH_DAY,
            },
        ];

        for case in &cases {
            let date = LocalDate::of(case.year, case.month, case.day).expect("failed to build ISO date");
            assert_eq!(
                date.to_epoch_day(),
                case.epoch_day,
                "{}-{:02}-{:02}",
                case.year,
                case.month,
                case.day
            );
        }
    }

    #[test]
    fn test_of_iso_invalid() {
        assert!(LocalDate::of(2023, 2, 29).is_err());
        assert!(LocalDate::of(1900, 2, 29).is_err());
        assert!(LocalDate::of(2000, 2, 29).is_ok());
        assert!(LocalDate::of(2024, 13, 1).is_err());
        assert!(LocalDate::of(2024, 4, 31).is_err());
        assert!(LocalDate::of(2024, 1, 0).is_err());
        assert!(LocalDate::of(MAX_ISO_YEAR + 1, 1, 1).is_err());
    }

    #[test]
    fn test_of_epoch_day_bounds() {
        assert!(LocalDate::of_epoch_day(MIN_EPOCH_DAY).is_ok());
        assert!(LocalDate::of_epoch_day(MAX_EPOCH_DAY).is_ok());
        assert_eq!(
            LocalDate::of_epoch_day(MAX_EPOCH_DAY + 1),
            Err(DateError::EpochDayOutOfRange(MAX_EPOCH_DAY + 1))
        );
        assert!(LocalDate::of_epoch_day(MIN_EPOCH_DAY - 1).is_err());
    }

    #[test]
    fn test_serde() {
        let date = LocalDate::of(2024, 9, 11).expect("failed to build ISO date");
        let json = serde_json::to_string(&date).expect("failed to serialize date");
        assert_eq!(json, "19977");

        let parsed: LocalDate = serde_json::from_str(&json).expect("failed to deserialize date");
        assert_eq!(parsed, date);

        let result: Result<LocalDate, _> = serde_json::from_str(&(MAX_EPOCH_DAY + 1).to_string());
        assert!(result.is_err());
    }

    #[test]
    fn test_local_time() {
        let time = LocalTime::of(23, 59, 59, 999_999_999).expect("failed to build time");
        assert_eq!(time.hour(), 23);
        assert_eq!(time.nano(), 999_999_999);
        assert!(LocalTime::of(24, 0, 0, 0).is_err());
        assert!(LocalTime::of(0, 60, 0, 0).is_err());
        assert!(LocalTime::MIDNIGHT < LocalTime::NOON);
    }
}
