//! The field-rule contract shared by every chronology.

use std::fmt;
use std::ptr;

use crate::chronology::{Chronology, ChronologyError};
use crate::local::{LocalDate, LocalTime};
use crate::range::{RangeError, ValueRange};
use crate::units::PeriodUnit;

/// The fixed description of a field: who owns it, what it is called, what it
/// counts and which values it may take.
#[derive(Clone, Copy)]
pub struct FieldDescriptor {
    chronology:   &'static dyn Chronology,
    name:         &'static str,
    period_unit:  PeriodUnit,
    period_range: PeriodUnit,
    minimum:      i32,
    maximum:      i32,
}

impl FieldDescriptor {
    pub const fn new(
        chronology: &'static dyn Chronology,
        name: &'static str,
        period_unit: PeriodUnit,
        period_range: PeriodUnit,
        minimum: i32,
        maximum: i32,
    ) -> Self {
        debug_assert!(minimum <= maximum);
        Self {
            chronology,
            name,
            period_unit,
            period_range,
            minimum,
            maximum,
        }
    }
}

impl fmt::Debug for FieldDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldDescriptor")
            .field("chronology", &self.chronology.name())
            .field("name", &self.name)
            .field("period_unit", &self.period_unit)
            .field("period_range", &self.period_range)
            .field("minimum", &self.minimum)
            .field("maximum", &self.maximum)
            .finish()
    }
}

/// A named, ranged accessor that derives one calendar field from a date/time pair.
///
/// Implementors supply a descriptor and [`FieldRule::value_quiet`]; everything
/// else has a default built on those two. Rules are singletons, so two rules are
/// equal only when they are the same instance.
pub trait FieldRule: fmt::Debug + Send + Sync {
    /// Returns the fixed description of this field
    fn descriptor(&self) -> &FieldDescriptor;

    /// Derives the field value, or `None` when the inputs do not carry it.
    ///
    /// Date fields return `None` only when `date` is absent and ignore `time`.
    fn value_quiet(&self, date: Option<&LocalDate>, time: Option<&LocalTime>) -> Option<i32>;

    /// Derives the field value, failing when it cannot be derived.
    ///
    /// # Errors
    /// Returns `ChronologyError::ValueNotDerivable` when `value_quiet` yields nothing.
    fn value(&self, date: Option<&LocalDate>, time: Option<&LocalTime>) -> Result<i32, ChronologyError> {
        self.value_quiet(date, time)
            .ok_or(ChronologyError::ValueNotDerivable { field: self.name() })
    }

    /// Lowest maximum over all instances of the field
    fn smallest_maximum_value(&self) -> i32 {
        self.maximum_value()
    }

    fn chronology(&self) -> &'static dyn Chronology {
        self.descriptor().chronology
    }

    fn name(&self) -> &'static str {
        self.descriptor().name
    }

    /// The unit this field counts
    fn period_unit(&self) -> PeriodUnit {
        self.descriptor().period_unit
    }

    /// The unit that bounds this field
    fn period_range(&self) -> PeriodUnit {
        self.descriptor().period_range
    }

    fn minimum_value(&self) -> i32 {
        self.descriptor().minimum
    }

    fn maximum_value(&self) -> i32 {
        self.descriptor().maximum
    }

    fn value_range(&self) -> ValueRange {
        ValueRange::from_ordered(self.minimum_value(), self.smallest_maximum_value(), self.maximum_value())
    }

    fn is_valid_value(&self, value: i64) -> bool {
        self.value_range().contains(value)
    }

    /// Checks that `value` lies within the field's full range.
    ///
    /// # Errors
    /// Returns `RangeError::OutOfRange` when it does not.
    fn check_value(&self, value: i64) -> Result<i32, RangeError> {
        self.value_range().check(self.name(), value)
    }
}

impl PartialEq for dyn FieldRule {
    fn eq(&self, other: &Self) -> bool {
        ptr::addr_eq(self, other)
    }
}

impl Eq for dyn FieldRule {}
