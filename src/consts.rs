/// Minimum valid Coptic year (inclusive)
pub const MIN_YEAR: u32 = 1;

/// Maximum valid Coptic year (inclusive)
pub const MAX_YEAR: u32 = i32::MAX as u32 - 1;

/// Maximum valid month (the short epagomenal month)
pub const MAX_MONTH: u8 = 13;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for Pi Kogi Enavot, the epagomenal month
pub const EPAGOMENAL_MONTH: u8 = 13;

/// Days in each of the first twelve months
pub const DAYS_IN_STANDARD_MONTH: u8 = 30;
/// Days in the epagomenal month for common years
pub const EPAGOMENAL_DAYS: u8 = 5;
/// Days in the epagomenal month for leap years
pub const EPAGOMENAL_DAYS_LEAP: u8 = 6;

/// Days in a common year
pub const DAYS_IN_YEAR: u16 = 365;
/// Days in a leap year
pub const DAYS_IN_LEAP_YEAR: u16 = 366;

/// Days in a full four year cycle (three common years plus one leap year)
pub const DAYS_IN_CYCLE: i64 = 365 * 4 + 1;

/// Epoch-day of Coptic 0001-01-01 (Julian 0284-08-29), counted from 1970-01-01
pub const COPTIC_EPOCH_DAY: i64 = -615_558;

/// Leap year occurs every 4 years...
pub(crate) const LEAP_YEAR_CYCLE: i64 = 4;
/// ...on the year one before the cycle boundary
pub(crate) const LEAP_YEAR_REMAINDER: i64 = 3;

/// Days in a week
pub(crate) const DAYS_PER_WEEK: i64 = 7;
/// Shifts epoch-day 0 (a Thursday) onto ISO day-of-week 4
pub(crate) const EPOCH_DAY_WEEKDAY_OFFSET: i64 = 3;

/// Smallest epoch-day a `LocalDate` may hold (ISO -999999999-01-01)
pub const MIN_EPOCH_DAY: i64 = -365_243_219_162;
/// Largest epoch-day a `LocalDate` may hold (ISO +999999999-12-31)
pub const MAX_EPOCH_DAY: i64 = 365_241_780_471;

/// Largest ISO year accepted by `LocalDate::of`
pub(crate) const MAX_ISO_YEAR: i32 = 999_999_999;

/// Month number for February
pub(crate) const FEBRUARY: u8 = 2;
/// Days in February for ISO leap years
pub(crate) const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each ISO month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub(crate) const ISO_DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_iso_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Century years are not ISO leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in a 400-year Gregorian era
pub(crate) const DAYS_IN_GREGORIAN_ERA: i64 = 146_097;
/// Days from 0000-03-01 (start of the shifted civil year) to 1970-01-01
pub(crate) const CIVIL_TO_EPOCH_DAYS: i64 = 719_468;

/// Lower/upper separator in `ValueRange` text (`"1 - 30"`)
pub const RANGE_SEPARATOR: &str = " - ";
/// Smallest-maximum/maximum separator in `ValueRange` text (`"1 - 5/30"`)
pub const MAXIMUM_SEPARATOR: char = '/';
