//! Proleptic Gregorian calendar rules.

use crate::InvalidDateReason;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE, LEAP_YEAR_CYCLE,
    MAX_GREGORIAN_YEAR, MAX_MONTH, MIN_DAY,
};

/// Whether `year` has a 29 February
pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

/// Days in `month` of `year`; `month` must be in `1..=12`
pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Checks that `(year, month, day)` is a real proleptic Gregorian date in `1..=9999`.
///
/// # Errors
/// Returns the first component that is out of range.
pub const fn validate(year: u16, month: u8, day: u8) -> Result<(), InvalidDateReason> {
    if year == 0 || year > MAX_GREGORIAN_YEAR {
        return Err(InvalidDateReason::Year);
    }
    if month == 0 || month > MAX_MONTH {
        return Err(InvalidDateReason::Month);
    }
    let max = days_in_month(year, month);
    if day < MIN_DAY || day > max {
        return Err(InvalidDateReason::Day { max });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_leap_year_cases() {
        struct TestCase {
            year:        u16,
            is_leap:     bool,
            description: &'static str,
        }

        let cases = [
            TestCase {
                year:        2024,
                is_leap:     true,
                description: "divisible by 4",
            },
            TestCase {
                year:        2023,
                is_leap:     false,
                description: "not divisible by 4",
            },
            TestCase {
                year:        1900,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2100,
                is_leap:     false,
                description: "century not divisible by 400",
            },
            TestCase {
                year:        2000,
                is_leap:     true,
                description: "divisible by 400",
            },
        ];

        for case in &cases {
            assert_eq!(
                is_leap_year(case.year),
                case.is_leap,
                "Year {} ({})",
                case.year,
                case.description
            );
        }
    }

    #[test]
    fn test_days_in_month() {
        let expected = [0, 31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];
        for month in 1..=12 {
            assert_eq!(days_in_month(2023, month), expected[month as usize]);
        }
        assert_eq!(days_in_month(2024, 2), 29);
        assert_eq!(days_in_month(2000, 2), 29);
    }

    #[test]
    fn test_validate() {
        assert_eq!(validate(2010, 10, 5), Ok(()));
        assert_eq!(validate(2024, 2, 29), Ok(()));
        assert_eq!(validate(2023, 2, 29), Err(InvalidDateReason::Day { max: 28 }));
        assert_eq!(validate(2023, 4, 0), Err(InvalidDateReason::Day { max: 30 }));
        assert_eq!(validate(2023, 13, 1), Err(InvalidDateReason::Month));
        assert_eq!(validate(2023, 0, 1), Err(InvalidDateReason::Month));
        assert_eq!(validate(0, 1, 1), Err(InvalidDateReason::Year));
        assert_eq!(validate(10_000, 1, 1), Err(InvalidDateReason::Year));
    }
}
