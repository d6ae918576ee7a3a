use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::{MAXIMUM_SEPARATOR, RANGE_SEPARATOR};

/// The valid values of a field (inclusive).
///
/// Fields whose upper bound varies by instance also carry a smallest maximum:
/// day-of-month runs `1 - 5/30` because the last Coptic month may have only 5 days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ValueRange {
    minimum:          i32,
    smallest_maximum: i32,
    maximum:          i32,
}

/// Error type for value range operations.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RangeError {
    /// Minimum is greater than maximum.
    #[error("Invalid value range: minimum ({minimum}) is greater than maximum ({maximum})")]
    InvalidRange { minimum: i32, maximum: i32 },

    /// Smallest maximum lies outside `minimum..=maximum`.
    #[error("Invalid smallest maximum {smallest_maximum}: must be within {minimum}-{maximum}")]
    InvalidSmallestMaximum {
        minimum:          i32,
        smallest_maximum: i32,
        maximum:          i32,
    },

    /// A field value falls outside the field's range.
    #[error("Value {value} for {field} is outside the valid range {range}")]
    OutOfRange {
        field: &'static str,
        value: i64,
        range: ValueRange,
    },

    /// Invalid range format.
    #[error("Invalid range format: {0}")]
    InvalidFormat(String),
}

impl ValueRange {
    /// Creates a range with a fixed maximum.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if minimum > maximum.
    pub fn new(minimum: i32, maximum: i32) -> Result<Self, RangeError> {
        Self::with_smallest_maximum(minimum, maximum, maximum)
    }

    /// Creates a range whose maximum varies between `smallest_maximum` and `maximum`.
    ///
    /// # Errors
    /// Returns `RangeError::InvalidRange` if minimum > maximum, or
    /// `RangeError::InvalidSmallestMaximum` if the smallest maximum is out of bounds.
    pub fn with_smallest_maximum(minimum: i32, smallest_maximum: i32, maximum: i32) -> Result<Self, RangeError> {
        if minimum > maximum {
            return Err(RangeError::InvalidRange { minimum, maximum });
        }
        if !(minimum..=maximum).contains(&smallest_maximum) {
            return Err(RangeError::InvalidSmallestMaximum {
                minimum,
                smallest_maximum,
                maximum,
            });
        }
        Ok(Self {
            minimum,
            smallest_maximum,
            maximum,
        })
    }

    /// Builds a range from bounds a field rule declared at compile time.
    pub(crate) const fn from_ordered(minimum: i32, smallest_maximum: i32, maximum: i32) -> Self {
        debug_assert!(minimum <= smallest_maximum && smallest_maximum <= maximum);
        Self {
            minimum,
            smallest_maximum,
            maximum,
        }
    }

    /// Returns the minimum value
    pub const fn minimum(&self) -> i32 {
        self.minimum
    }

    /// Returns the lowest maximum any instance of the field can have
    pub const fn smallest_maximum(&self) -> i32 {
        self.smallest_maximum
    }

    /// Returns the maximum value
    pub const fn maximum(&self) -> i32 {
        self.maximum
    }

    /// True when every instance of the field shares the same maximum
    pub const fn is_fixed(&self) -> bool {
        self.smallest_maximum == self.maximum
    }

    /// Checks if the range contains a given value
    pub fn contains(&self, value: i64) -> bool {
        (i64::from(self.minimum)..=i64::from(self.maximum)).contains(&value)
    }

    /// Checks that `value` is in range for the named field and narrows it to `i32`.
    ///
    /// # Errors
    /// Returns `RangeError::OutOfRange` if the value is outside the range.
    pub fn check(&self, field: &'static str, value: i64) -> Result<i32, RangeError> {
        let out_of_range = || RangeError::OutOfRange {
            field,
            value,
            range: *self,
        };
        if !self.contains(value) {
            return Err(out_of_range());
        }
        i32::try_from(value).map_err(|_| out_of_range())
    }
}

impl fmt::Display for ValueRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_fixed() {
            write!(f, "{}{RANGE_SEPARATOR}{}", self.minimum, self.maximum)
        } else {
            write!(
                f,
                "{}{RANGE_SEPARATOR}{}{MAXIMUM_SEPARATOR}{}",
                self.minimum, self.smallest_maximum, self.maximum
            )
        }
    }
}

impl FromStr for ValueRange {
    type Err = RangeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let parse_bound = |part: &str| {
            part.trim()
                .parse::<i32>()
                .map_err(|_| RangeError::InvalidFormat(format!("Invalid bound '{}' in: {s}", part.trim())))
        };

        // The minimum may itself be negative, so split on the spaced separator only
        let separator_count = trimmed.matches(RANGE_SEPARATOR).count();

        match separator_count {
            0 => Err(RangeError::InvalidFormat(format!(
                "No range separator found (expected '{RANGE_SEPARATOR}'): {s}"
            ))),
            1 => {
                let (lower, upper) = trimmed.split_once(RANGE_SEPARATOR).ok_or_else(|| {
                    RangeError::InvalidFormat(format!("Separator '{RANGE_SEPARATOR}' not found despite count == 1"))
                })?;
                let minimum = parse_bound(lower)?;

                match upper.split_once(MAXIMUM_SEPARATOR) {
                    Some((smallest, largest)) => {
                        Self::with_smallest_maximum(minimum, parse_bound(smallest)?, parse_bound(largest)?)
                    },
                    None => Self::new(minimum, parse_bound(upper)?),
                }
            },
            _ => Err(RangeError::InvalidFormat(format!(
                "Too many '{RANGE_SEPARATOR}' separators: expected 1, found {separator_count}"
            ))),
        }
    }
}

impl Serialize for ValueRange {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for ValueRange {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
