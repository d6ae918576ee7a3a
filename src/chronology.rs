//! The contract a calendar system implements to expose its fields.

use std::fmt;
use std::ptr;

use serde::{Deserialize, Serialize};

use crate::DateError;
use crate::prelude::*;
use crate::range::RangeError;
use crate::rule::FieldRule;

/// The calendar fields a chronology may expose.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, Serialize, Deserialize)]
pub enum Field {
    #[display(fmt = "Year")]
    Year,
    #[display(fmt = "MonthOfYear")]
    MonthOfYear,
    #[display(fmt = "DayOfMonth")]
    DayOfMonth,
    #[display(fmt = "DayOfYear")]
    DayOfYear,
    #[display(fmt = "DayOfWeek")]
    DayOfWeek,
    #[display(fmt = "HourOfDay")]
    HourOfDay,
    #[display(fmt = "MinuteOfHour")]
    MinuteOfHour,
    #[display(fmt = "SecondOfMinute")]
    SecondOfMinute,
    #[display(fmt = "NanoOfSecond")]
    NanoOfSecond,
}

impl Field {
    pub const DATE_FIELDS: [Self; 5] = [
        Self::Year,
        Self::MonthOfYear,
        Self::DayOfMonth,
        Self::DayOfYear,
        Self::DayOfWeek,
    ];

    pub const TIME_FIELDS: [Self; 4] = [
        Self::HourOfDay,
        Self::MinuteOfHour,
        Self::SecondOfMinute,
        Self::NanoOfSecond,
    ];

    /// True for fields derived from the date alone
    pub const fn is_date_field(self) -> bool {
        matches!(
            self,
            Self::Year | Self::MonthOfYear | Self::DayOfMonth | Self::DayOfYear | Self::DayOfWeek
        )
    }
}

/// Error type for chronology and field rule operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ChronologyError {
    /// The chronology has no rule for this field. Permanent; do not retry.
    #[error("The {chronology} chronology does not support the {field} field")]
    UnsupportedField { chronology: &'static str, field: Field },

    /// A rule was asked for a value without the input it derives from.
    #[error("No value can be derived for {field}")]
    ValueNotDerivable { field: &'static str },

    #[error(transparent)]
    Range(#[from] RangeError),

    #[error(transparent)]
    Date(#[from] DateError),
}

/// A named calendar system exposing one field rule per supported field.
///
/// Chronologies are singletons; two are equal only when they are the same instance.
pub trait Chronology: fmt::Debug + Send + Sync {
    fn name(&self) -> &'static str;

    fn year(&self) -> &'static dyn FieldRule;

    fn month_of_year(&self) -> &'static dyn FieldRule;

    fn day_of_month(&self) -> &'static dyn FieldRule;

    fn day_of_year(&self) -> &'static dyn FieldRule;

    fn day_of_week(&self) -> &'static dyn FieldRule;

    /// # Errors
    /// Returns `ChronologyError::UnsupportedField` for date-only chronologies.
    fn hour_of_day(&self) -> Result<&'static dyn FieldRule, ChronologyError>;

    /// # Errors
    /// Returns `ChronologyError::UnsupportedField` for date-only chronologies.
    fn minute_of_hour(&self) -> Result<&'static dyn FieldRule, ChronologyError>;

    /// # Errors
    /// Returns `ChronologyError::UnsupportedField` for date-only chronologies.
    fn second_of_minute(&self) -> Result<&'static dyn FieldRule, ChronologyError>;

    /// # Errors
    /// Returns `ChronologyError::UnsupportedField` for date-only chronologies.
    fn nano_of_second(&self) -> Result<&'static dyn FieldRule, ChronologyError>;

    /// Looks up the rule for any field.
    ///
    /// # Errors
    /// Returns `ChronologyError::UnsupportedField` if this chronology lacks the field.
    fn rule(&self, field: Field) -> Result<&'static dyn FieldRule, ChronologyError> {
        match field {
            Field::Year => Ok(self.year()),
            Field::MonthOfYear => Ok(self.month_of_year()),
            Field::DayOfMonth => Ok(self.day_of_month()),
            Field::DayOfYear => Ok(self.day_of_year()),
            Field::DayOfWeek => Ok(self.day_of_week()),
            Field::HourOfDay => self.hour_of_day(),
            Field::MinuteOfHour => self.minute_of_hour(),
            Field::SecondOfMinute => self.second_of_minute(),
            Field::NanoOfSecond => self.nano_of_second(),
        }
    }

    /// Checks whether `rule` would succeed for this field
    fn is_supported(&self, field: Field) -> bool {
        self.rule(field).is_ok()
    }
}

impl PartialEq for dyn Chronology {
    fn eq(&self, other: &Self) -> bool {
        ptr::addr_eq(self, other)
    }
}

impl Eq for dyn Chronology {}
