//! Epoch-day arithmetic for the Coptic calendar.
//!
//! Every function here works on proleptic years and epoch-days inside
//! `MIN_EPOCH_DAY..=MAX_EPOCH_DAY`. Nothing is range-checked: callers decide
//! whether a year below `MIN_YEAR` is acceptable.

use crate::consts::{
    COPTIC_EPOCH_DAY, DAYS_IN_CYCLE, DAYS_IN_LEAP_YEAR, DAYS_IN_STANDARD_MONTH, DAYS_IN_YEAR,
    DAYS_PER_WEEK, EPAGOMENAL_DAYS, EPAGOMENAL_DAYS_LEAP, EPAGOMENAL_MONTH, EPOCH_DAY_WEEKDAY_OFFSET,
    LEAP_YEAR_CYCLE, LEAP_YEAR_REMAINDER, MAX_EPOCH_DAY, MAX_MONTH, MIN_EPOCH_DAY,
};

/// Checks if a Coptic year is a leap year (`year mod 4 == 3`).
pub const fn is_leap_year(year: i64) -> bool {
    year.rem_euclid(LEAP_YEAR_CYCLE) == LEAP_YEAR_REMAINDER
}

/// Number of days in the given Coptic year.
pub const fn length_of_year(year: i64) -> u16 {
    if is_leap_year(year) {
        DAYS_IN_LEAP_YEAR
    } else {
        DAYS_IN_YEAR
    }
}

/// Number of days in the given Coptic month.
pub const fn length_of_month(year: i64, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month < EPAGOMENAL_MONTH {
        DAYS_IN_STANDARD_MONTH
    } else if is_leap_year(year) {
        EPAGOMENAL_DAYS_LEAP
    } else {
        EPAGOMENAL_DAYS
    }
}

/// Derives the Coptic year containing `epoch_day`.
///
/// The epoch-day is first re-based so that day 0 is Coptic 0001-01-01. Each
/// 1461-day cycle then advances the year by exactly four. The `+ 1461 + 2`
/// term starts year 1 at day 0 and puts the leap day at the end of years
/// congruent to 3 mod 4. Splitting into whole cycles and a remainder keeps
/// every intermediate product far from `i64` overflow.
pub const fn year_from_epoch_day(epoch_day: i64) -> i64 {
    debug_assert!(epoch_day >= MIN_EPOCH_DAY && epoch_day <= MAX_EPOCH_DAY);

    let days = epoch_day - COPTIC_EPOCH_DAY;
    let cycle = days.div_euclid(DAYS_IN_CYCLE);
    let remainder = days.rem_euclid(DAYS_IN_CYCLE);
    cycle * LEAP_YEAR_CYCLE + (remainder * LEAP_YEAR_CYCLE + DAYS_IN_CYCLE + 2) / DAYS_IN_CYCLE
}

/// Epoch-day of the first day (month 1, day 1) of a Coptic year.
pub const fn first_epoch_day_of_year(year: i64) -> i64 {
    COPTIC_EPOCH_DAY + (year - 1) * DAYS_IN_YEAR as i64 + year.div_euclid(LEAP_YEAR_CYCLE)
}

/// One-based day-of-year of `epoch_day` within its Coptic year.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn day_of_year_from_epoch_day(epoch_day: i64) -> u16 {
    let year = year_from_epoch_day(epoch_day);
    // always 1..=366
    (epoch_day - first_epoch_day_of_year(year) + 1) as u16
}

/// Month containing a one-based day-of-year.
///
/// Months hold 30 days each; month 13 takes whatever is left (days 361..=366).
#[allow(clippy::cast_possible_truncation)]
pub const fn month_from_day_of_year(day_of_year: u16) -> u8 {
    debug_assert!(day_of_year != 0 && day_of_year <= DAYS_IN_LEAP_YEAR);

    let month = ((day_of_year - 1) / DAYS_IN_STANDARD_MONTH as u16 + 1) as u8;
    if month > MAX_MONTH { MAX_MONTH } else { month }
}

/// Day-of-month for a one-based day-of-year.
#[allow(clippy::cast_possible_truncation)]
pub const fn day_of_month_from_day_of_year(day_of_year: u16) -> u8 {
    let month = month_from_day_of_year(day_of_year);
    (day_of_year - (month as u16 - 1) * DAYS_IN_STANDARD_MONTH as u16) as u8
}

/// Splits an epoch-day into proleptic Coptic (year, month, day).
pub const fn components_from_epoch_day(epoch_day: i64) -> (i64, u8, u8) {
    let year = year_from_epoch_day(epoch_day);
    let day_of_year = day_of_year_from_epoch_day(epoch_day);
    (
        year,
        month_from_day_of_year(day_of_year),
        day_of_month_from_day_of_year(day_of_year),
    )
}

/// Epoch-day of a Coptic (year, day-of-year).
pub const fn epoch_day_from_year_day(year: i64, day_of_year: u16) -> i64 {
    first_epoch_day_of_year(year) + day_of_year as i64 - 1
}

/// Epoch-day of a Coptic (year, month, day). Inverse of `components_from_epoch_day`.
pub const fn epoch_day_from_components(year: i64, month: u8, day: u8) -> i64 {
    let day_of_year = (month as u16 - 1) * DAYS_IN_STANDARD_MONTH as u16 + day as u16;
    epoch_day_from_year_day(year, day_of_year)
}

/// ISO day-of-week, Monday = 1 through Sunday = 7.
///
/// Works on the raw epoch-day: the week runs on unbroken across calendar systems.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn day_of_week(epoch_day: i64) -> u8 {
    ((epoch_day + EPOCH_DAY_WEEKDAY_OFFSET).rem_euclid(DAYS_PER_WEEK) + 1) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    /// Epoch-day of ISO 2024-09-11, the Coptic new year 1741.
    const NAYROUZ_1741: i64 = 19_977;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        i64,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        3,
                is_leap:     true,
                description: "first leap year after the epoch",
            },
            TestCase {
                year:        1,
                is_leap:     false,
                description: "epoch year",
            },
            TestCase {
                year:        4,
                is_leap:     false,
                description: "divisible by 4",
            },
            TestCase {
                year:        1739,
                is_leap:     true,
                description: "remainder 3",
            },
            TestCase {
                year:        1740,
                is_leap:     false,
                description: "remainder 0",
            },
            TestCase {
                year:        1743,
                is_leap:     true,
                description: "remainder 3",
            },
            TestCase {
                year:        -1,
                is_leap:     true,
                description: "proleptic year keeps the cycle",
            },
            TestCase {
                year:        0,
                is_leap:     false,
                description: "proleptic year zero",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({}): expected {}",
                case.year,
                case.description,
                if case.is_leap { "leap year" } else { "not leap year" }
            );
        }
    }

    #[test]
    fn test_length_of_month() {
        for month in 1..=12 {
            assert_eq!(length_of_month(1740, month), 30, "Month {month} should have 30 days");
            assert_eq!(length_of_month(1739, month), 30, "Month {month} should have 30 days");
        }
        assert_eq!(length_of_month(1740, 13), 5);
        assert_eq!(length_of_month(1739, 13), 6);
    }

    #[test]
    fn test_length_of_year() {
        assert_eq!(length_of_year(3), 366);
        assert_eq!(length_of_year(4), 365);
    }

    #[test]
    fn test_coptic_epoch_is_year_one() {
        assert_eq!(year_from_epoch_day(COPTIC_EPOCH_DAY), 1);
        assert_eq!(components_from_epoch_day(COPTIC_EPOCH_DAY), (1, 1, 1));
        assert_eq!(first_epoch_day_of_year(1), COPTIC_EPOCH_DAY);
        assert_eq!(components_from_epoch_day(COPTIC_EPOCH_DAY - 1), (0, 13, 5));
    }

    #[test]
    fn test_known_dates() {
        struct TestCase {
            epoch_day:   i64,
            coptic:      (i64, u8, u8),
            description: &'static str,
        }

        let cases = [
            TestCase {
                epoch_day:   0,
                coptic:      (1686, 4, 23),
                description: "1970-01-01",
            },
            TestCase {
                epoch_day:   NAYROUZ_1741,
                coptic:      (1741, 1, 1),
                description: "2024-09-11, new year after a common year",
            },
            TestCase {
                epoch_day:   NAYROUZ_1741 - 1,
                coptic:      (1740, 13, 5),
                description: "2024-09-10, last day of a common year",
            },
            TestCase {
                epoch_day:   19_612,
                coptic:      (1740, 1, 1),
                description: "2023-09-12, new year after a leap year",
            },
            TestCase {
                epoch_day:   19_611,
                coptic:      (1739, 13, 6),
                description: "2023-09-11, leap day",
            },
        ];

        for case in &cases {
            assert_eq!(
                components_from_epoch_day(case.epoch_day),
                case.coptic,
                "Epoch-day {} ({})",
                case.epoch_day,
                case.description
            );
            let (year, month, day) = case.coptic;
            assert_eq!(
                epoch_day_from_components(year, month, day),
                case.epoch_day,
                "Reverse conversion of {}",
                case.description
            );
        }
    }

    #[test]
    fn test_day_of_year_boundaries() {
        assert_eq!(day_of_year_from_epoch_day(first_epoch_day_of_year(3)), 1);
        assert_eq!(day_of_year_from_epoch_day(first_epoch_day_of_year(4) - 1), 366);
        assert_eq!(day_of_year_from_epoch_day(first_epoch_day_of_year(5) - 1), 365);
    }

    #[test]
    fn test_month_from_day_of_year() {
        assert_eq!(month_from_day_of_year(1), 1);
        assert_eq!(month_from_day_of_year(30), 1);
        assert_eq!(month_from_day_of_year(31), 2);
        assert_eq!(month_from_day_of_year(360), 12);
        assert_eq!(month_from_day_of_year(361), 13);
        assert_eq!(month_from_day_of_year(366), 13);
        assert_eq!(day_of_month_from_day_of_year(360), 30);
        assert_eq!(day_of_month_from_day_of_year(366), 6);
    }

    #[test]
    fn test_day_of_week_anchors() {
        assert_eq!(day_of_week(0), 4, "1970-01-01 was a Thursday");
        assert_eq!(day_of_week(COPTIC_EPOCH_DAY), 5, "Coptic epoch was a Friday");
        assert_eq!(day_of_week(NAYROUZ_1741), 3, "2024-09-11 was a Wednesday");
        assert_eq!(day_of_week(-1), 3);
    }

    #[test]
    fn test_year_at_epoch_day_bounds() {
        let low = year_from_epoch_day(MIN_EPOCH_DAY);
        let high = year_from_epoch_day(MAX_EPOCH_DAY);
        assert!(low > i64::from(i32::MIN) && low < 0);
        assert!(high < i64::from(i32::MAX) && high > 0);
    }

    proptest! {
        #[test]
        fn prop_leap_year_has_period_four(year in 1_i64..1_000_000) {
            prop_assert_eq!(is_leap_year(year), is_leap_year(year + 4));
        }

        #[test]
        fn prop_one_leap_year_per_block(start in -1_000_000_i64..1_000_000) {
            let leaps: Vec<i64> = (start..start + 4).filter(|&y| is_leap_year(y)).collect();
            prop_assert_eq!(leaps.len(), 1);
            prop_assert_eq!(leaps[0].rem_euclid(4), 3);
        }

        #[test]
        fn prop_components_round_trip(
            year in -100_000_i64..100_000,
            month in 1_u8..=13,
            day in 1_u8..=30,
        ) {
            let day = day.min(length_of_month(year, month));
            let epoch_day = epoch_day_from_components(year, month, day);
            prop_assert_eq!(components_from_epoch_day(epoch_day), (year, month, day));
        }

        #[test]
        fn prop_epoch_day_round_trip(epoch_day in MIN_EPOCH_DAY..=MAX_EPOCH_DAY) {
            let (year, month, day) = components_from_epoch_day(epoch_day);
            prop_assert!((1..=length_of_month(year, month)).contains(&day));
            prop_assert_eq!(epoch_day_from_components(year, month, day), epoch_day);
        }

        #[test]
        fn prop_day_of_year_advances_by_one(epoch_day in -10_000_000_i64..10_000_000) {
            let today = day_of_year_from_epoch_day(epoch_day);
            let tomorrow = day_of_year_from_epoch_day(epoch_day + 1);
            if today == length_of_year(year_from_epoch_day(epoch_day)) {
                prop_assert_eq!(tomorrow, 1);
            } else {
                prop_assert_eq!(tomorrow, today + 1);
            }
        }

        #[test]
        fn prop_day_of_week_has_period_seven(epoch_day in MIN_EPOCH_DAY..=MAX_EPOCH_DAY - 7) {
            prop_assert_eq!(day_of_week(epoch_day), day_of_week(epoch_day + 7));
            prop_assert!((1..=7).contains(&day_of_week(epoch_day)));
        }
    }
}
