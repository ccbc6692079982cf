//! Julian Day Number conversions.
//!
//! Both calendars are mapped onto the same integer day count, so converting
//! between them is `jdn_to_hijri(gregorian_to_jdn(..))` and back. All
//! arithmetic is integer; the functions are exact inverses over the supported
//! range `HIJRI_EPOCH_JDN..=MAX_JDN`.

use crate::consts::{
    HIJRI_COMMON_YEAR_DAYS, HIJRI_CYCLE_DAYS, HIJRI_CYCLE_YEARS, HIJRI_EPOCH_JDN,
    HIJRI_SHORT_MONTH, MAX_JDN, MAX_MONTH,
};
use crate::types::{hijri_month_length, is_hijri_leap_year, leap_years_through};

/// Julian Day Number of 1 January 1 (proleptic Gregorian)
pub const GREGORIAN_EPOCH_JDN: i32 = 1_721_426;

/// Converts a proleptic Gregorian date to its Julian Day Number.
///
/// The triple must be a valid Gregorian date in years `1..=9999`; see
/// [`gregorian::validate`](crate::gregorian::validate). Other input gives a
/// meaningless number.
///
/// ```
/// use hijri_date::jdn::gregorian_to_jdn;
///
/// assert_eq!(gregorian_to_jdn(2000, 1, 1), 2_451_545);
/// ```
pub const fn gregorian_to_jdn(year: u16, month: u8, day: u8) -> i32 {
    // Count from March so the leap day falls at the end of the year
    let a = (14 - month as i32) / 12;
    let y = year as i32 + 4800 - a;
    let m = month as i32 + 12 * a - 3;

    day as i32 + (153 * m + 2) / 5 + 365 * y + y / 4 - y / 100 + y / 400 - 32045
}

/// Converts a Julian Day Number back to a proleptic Gregorian `(year, month, day)`.
///
/// `jdn` must lie in `GREGORIAN_EPOCH_JDN..=MAX_JDN`.
///
/// # Panics
/// Debug builds assert the range; release builds return a meaningless triple.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn jdn_to_gregorian(jdn: i32) -> (u16, u8, u8) {
    debug_assert!(jdn >= GREGORIAN_EPOCH_JDN && jdn <= MAX_JDN);

    let a = jdn + 32044;
    let b = (4 * a + 3) / 146_097;
    let c = a - 146_097 * b / 4;
    let d = (4 * c + 3) / 1461;
    let e = c - 1461 * d / 4;
    let m = (5 * e + 2) / 153;

    let day = e - (153 * m + 2) / 5 + 1;
    let month = m + 3 - 12 * (m / 10);
    let year = 100 * b + d - 4800 + m / 10;

    (year as u16, month as u8, day as u8)
}

/// Days from 1 Muharram to the first day of `month`
const fn days_before_month(month: u8) -> i32 {
    let elapsed = month as i32 - 1;
    // Every second month has the extra 30th day
    HIJRI_SHORT_MONTH as i32 * elapsed + month as i32 / 2
}

/// Days from the epoch to 1 Muharram of `year`
const fn days_before_year(year: u16) -> i32 {
    let elapsed = year - 1;
    let cycles = (elapsed / HIJRI_CYCLE_YEARS) as i32;
    let position = elapsed % HIJRI_CYCLE_YEARS;

    cycles * HIJRI_CYCLE_DAYS
        + position as i32 * HIJRI_COMMON_YEAR_DAYS
        + leap_years_through(position) as i32
}

/// Converts a tabular Hijri date to its Julian Day Number.
///
/// The year and month must be non-zero and the month at most 12. Use
/// [`HijriDate::from_hijri`](crate::HijriDate::from_hijri) for unchecked input.
///
/// # Panics
/// Debug builds assert the precondition; release builds return a
/// meaningless number.
///
/// ```
/// use hijri_date::jdn::hijri_to_jdn;
///
/// assert_eq!(hijri_to_jdn(1, 1, 1), 1_948_440);
/// assert_eq!(hijri_to_jdn(1431, 10, 26), 2_455_475);
/// ```
pub const fn hijri_to_jdn(year: u16, month: u8, day: u8) -> i32 {
    debug_assert!(year != 0 && month != 0 && month <= MAX_MONTH);

    HIJRI_EPOCH_JDN - 1 + days_before_year(year) + days_before_month(month) + day as i32
}

/// Converts a Julian Day Number to a tabular Hijri `(year, month, day)`.
///
/// Whole 30-year cycles are removed first, then whole years inside the
/// cycle, then whole months.
///
/// # Panics
/// Debug builds assert that `jdn` lies in `HIJRI_EPOCH_JDN..=MAX_JDN`.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn jdn_to_hijri(jdn: i32) -> (u16, u8, u8) {
    debug_assert!(jdn >= HIJRI_EPOCH_JDN && jdn <= MAX_JDN);

    let elapsed = jdn - HIJRI_EPOCH_JDN;
    let mut year = (elapsed / HIJRI_CYCLE_DAYS) as u16 * HIJRI_CYCLE_YEARS + 1;
    let mut remaining = elapsed % HIJRI_CYCLE_DAYS;

    loop {
        let year_days = if is_hijri_leap_year(year) {
            HIJRI_COMMON_YEAR_DAYS + 1
        } else {
            HIJRI_COMMON_YEAR_DAYS
        };
        if remaining < year_days {
            break;
        }
        remaining -= year_days;
        year += 1;
    }

    let mut month = 1;
    loop {
        let month_days = hijri_month_length(year, month) as i32;
        if remaining < month_days {
            break;
        }
        remaining -= month_days;
        month += 1;
    }

    (year, month, remaining as u8 + 1)
}

/// Gregorian `(year, month, day)` of any day number, including years before 1
/// and after 9999. Years are astronomical, so 1 BC is year 0.
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub(crate) const fn gregorian_from_day_number(jdn: i64) -> (i64, u8, u8) {
    // Days since 1 March of year 0, so the leap day ends each 400-year era
    let z = jdn.saturating_sub(1_721_120);
    let era = z.div_euclid(146_097);
    let day_of_era = z.rem_euclid(146_097);
    let year_of_era =
        (day_of_era - day_of_era / 1460 + day_of_era / 36_524 - day_of_era / 146_096) / 365;
    let day_of_year = day_of_era - (365 * year_of_era + year_of_era / 4 - year_of_era / 100);
    let shifted_month = (5 * day_of_year + 2) / 153;

    let day = day_of_year - (153 * shifted_month + 2) / 5 + 1;
    let month = if shifted_month < 10 { shifted_month + 3 } else { shifted_month - 9 };
    let year = era * 400 + year_of_era + (month <= 2) as i64;

    (year, month as u8, day as u8)
}

/// Weekday index of a Julian Day Number, 0 = Sunday through 6 = Saturday
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
pub const fn weekday_index(jdn: i32) -> u8 {
    (jdn + 1).rem_euclid(7) as u8
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gregorian_to_jdn_cases() {
        struct TestCase {
            date: (u16, u8, u8),
            jdn:  i32,
        }

        let cases = [
            TestCase { date: (2000, 1, 1), jdn: 2_451_545 },
            TestCase { date: (1, 1, 1), jdn: 1_721_426 },
            TestCase { date: (622, 7, 19), jdn: 1_948_440 },
            TestCase { date: (1582, 10, 15), jdn: 2_299_161 },
            TestCase { date: (2010, 10, 5), jdn: 2_455_475 },
            TestCase { date: (9999, 12, 31), jdn: 5_373_484 },
        ];

        for case in &cases {
            let (y, m, d) = case.date;
            assert_eq!(gregorian_to_jdn(y, m, d), case.jdn, "{y}-{m}-{d}");
            assert_eq!(jdn_to_gregorian(case.jdn), case.date, "jdn {}", case.jdn);
        }
    }

    #[test]
    fn test_hijri_to_jdn_cases() {
        struct TestCase {
            date: (u16, u8, u8),
            jdn:  i32,
        }

        let cases = [
            TestCase { date: (1, 1, 1), jdn: 1_948_440 },
            TestCase { date: (1431, 10, 26), jdn: 2_455_475 },
            TestCase { date: (1420, 9, 24), jdn: 2_451_545 },
            TestCase { date: (9666, 4, 2), jdn: 5_373_484 },
        ];

        for case in &cases {
            let (y, m, d) = case.date;
            assert_eq!(hijri_to_jdn(y, m, d), case.jdn, "{y}-{m}-{d}");
            assert_eq!(jdn_to_hijri(case.jdn), case.date, "jdn {}", case.jdn);
        }
    }

    #[test]
    fn test_gregorian_from_day_number_matches_in_range() {
        let mut jdn = GREGORIAN_EPOCH_JDN;
        while jdn <= MAX_JDN {
            let (y, m, d) = jdn_to_gregorian(jdn);
            assert_eq!(
                gregorian_from_day_number(i64::from(jdn)),
                (i64::from(y), m, d),
                "jdn {jdn}"
            );
            jdn += 1009;
        }
    }

    #[test]
    fn test_gregorian_from_day_number_outside_range() {
        assert_eq!(gregorian_from_day_number(0), (-4713, 11, 24));
        assert_eq!(gregorian_from_day_number(1), (-4713, 11, 25));
        assert_eq!(gregorian_from_day_number(1_948_439), (622, 7, 18));
        assert_eq!(gregorian_from_day_number(5_373_485), (10_000, 1, 1));
        assert_eq!(gregorian_from_day_number(i64::MIN).1, 8);
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic]
    fn test_hijri_to_jdn_rejects_year_zero_in_debug() {
        let _ = hijri_to_jdn(0, 1, 1);
    }

    #[test]
    fn test_cycle_length() {
        assert_eq!(hijri_to_jdn(31, 1, 1) - hijri_to_jdn(1, 1, 1), HIJRI_CYCLE_DAYS);
        assert_eq!(
            hijri_to_jdn(1441, 1, 1) - hijri_to_jdn(1411, 1, 1),
            HIJRI_CYCLE_DAYS
        );
    }

    #[test]
    fn test_year_lengths() {
        // 1431 is a leap year, 1432 is not
        assert_eq!(hijri_to_jdn(1432, 1, 1) - hijri_to_jdn(1431, 1, 1), 355);
        assert_eq!(hijri_to_jdn(1433, 1, 1) - hijri_to_jdn(1432, 1, 1), 354);
    }

    #[test]
    fn test_last_day_of_leap_year() {
        let jdn = hijri_to_jdn(1431, 12, 30);
        assert_eq!(jdn_to_hijri(jdn), (1431, 12, 30));
        assert_eq!(jdn_to_hijri(jdn + 1), (1432, 1, 1));
    }

    #[test]
    fn test_last_day_of_cycle() {
        // Year 30 of a cycle is common; the next day starts a new cycle
        let jdn = hijri_to_jdn(1440, 12, 29);
        assert_eq!(jdn_to_hijri(jdn), (1440, 12, 29));
        assert_eq!(jdn_to_hijri(jdn + 1), (1441, 1, 1));
    }

    #[test]
    fn test_round_trip_first_cycles() {
        for jdn in HIJRI_EPOCH_JDN..HIJRI_EPOCH_JDN + 2 * HIJRI_CYCLE_DAYS {
            let (y, m, d) = jdn_to_hijri(jdn);
            assert_eq!(hijri_to_jdn(y, m, d), jdn, "{y}-{m}-{d}");
        }
    }

    #[test]
    fn test_gregorian_round_trip_sampled() {
        let mut jdn = GREGORIAN_EPOCH_JDN;
        while jdn <= MAX_JDN {
            let (y, m, d) = jdn_to_gregorian(jdn);
            assert_eq!(gregorian_to_jdn(y, m, d), jdn, "{y}-{m}-{d}");
            jdn += 997;
        }
    }

    #[test]
    fn test_weekday_index() {
        // 2000-01-01 was a Saturday, 2010-10-05 a Tuesday, the epoch a Friday
        assert_eq!(weekday_index(2_451_545), 6);
        assert_eq!(weekday_index(2_455_475), 2);
        assert_eq!(weekday_index(HIJRI_EPOCH_JDN), 5);
    }
}
