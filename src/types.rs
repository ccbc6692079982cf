use crate::InvalidDateReason;
use crate::consts::{
    DHU_AL_HIJJAH, HIJRI_CYCLE_YEARS, HIJRI_LEAP_YEARS, HIJRI_LONG_MONTH, HIJRI_SHORT_MONTH,
    MAX_HIJRI_YEAR, MAX_MONTH, MIN_DAY,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU16;
use std::num::NonZeroU8;

/// A Hijri year guaranteed to be in the range `1..=MAX_HIJRI_YEAR` (1..=9666)
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_HIJRI_YEAR`
    ///
    /// # Errors
    /// Returns `InvalidDateReason::Year` if the value is 0 or > `MAX_HIJRI_YEAR`.
    pub fn new(value: u16) -> Result<Self, InvalidDateReason> {
        let non_zero = NonZeroU16::new(value).ok_or(InvalidDateReason::Year)?;
        if value > MAX_HIJRI_YEAR {
            return Err(InvalidDateReason::Year);
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }

    /// Whether Dhu al-Hijjah has 30 days in this year
    #[inline]
    pub const fn is_leap(self) -> bool {
        is_hijri_leap_year(self.get())
    }
}

impl TryFrom<u16> for Year {
    type Error = InvalidDateReason;

    fn try_from(value: u16) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Year> for u16 {
    fn from(year: Year) -> Self {
        year.0.get()
    }
}

impl fmt::Display for Year {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A Hijri month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `InvalidDateReason::Month` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, InvalidDateReason> {
        let non_zero = NonZeroU8::new(value).ok_or(InvalidDateReason::Month)?;
        if value > MAX_MONTH {
            return Err(InvalidDateReason::Month);
        }
        Ok(Self(non_zero))
    }

    /// Returns the month value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Month {
    type Error = InvalidDateReason;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Month> for u8 {
    fn from(month: Month) -> Self {
        month.0.get()
    }
}

impl fmt::Display for Month {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A Hijri day value guaranteed to be valid for a given year and month
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Day(NonZeroU8);

impl Day {
    /// Creates a new Day, validating it against the length of the given Hijri month
    ///
    /// # Errors
    /// Returns `InvalidDateReason::Day` if the value is 0 or past the end of the month.
    pub fn new(value: u8, year: u16, month: u8) -> Result<Self, InvalidDateReason> {
        let max = hijri_month_length(year, month);
        let non_zero = NonZeroU8::new(value).ok_or(InvalidDateReason::Day { max })?;
        if value > max {
            return Err(InvalidDateReason::Day { max });
        }
        Ok(Self(non_zero))
    }

    /// Returns the day value as u8
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }
}

impl TryFrom<u8> for Day {
    type Error = InvalidDateReason;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        // Without year/month context only the longest month can be checked
        if !(MIN_DAY..=HIJRI_LONG_MONTH).contains(&value) {
            return Err(InvalidDateReason::Day {
                max: HIJRI_LONG_MONTH,
            });
        }
        NonZeroU8::new(value).map(Self).ok_or(InvalidDateReason::Day {
            max: HIJRI_LONG_MONTH,
        })
    }
}

impl From<Day> for u8 {
    fn from(day: Day) -> Self {
        day.0.get()
    }
}

impl fmt::Display for Day {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Position of `year` inside its 30-year cycle, 1-based
#[inline]
pub(crate) const fn cycle_position(year: u16) -> u16 {
    (year - 1) % HIJRI_CYCLE_YEARS + 1
}

/// Number of leap years among cycle positions `1..=position`
pub(crate) const fn leap_years_through(position: u16) -> u16 {
    let mut count = 0;
    let mut i = 0;
    while i < HIJRI_LEAP_YEARS.len() {
        if HIJRI_LEAP_YEARS[i] <= position {
            count += 1;
        }
        i += 1;
    }
    count
}

/// Whether `year` is a leap year of the tabular 30-year cycle; `year` must be non-zero
pub const fn is_hijri_leap_year(year: u16) -> bool {
    debug_assert!(year != 0);

    let position = cycle_position(year);
    let mut i = 0;
    while i < HIJRI_LEAP_YEARS.len() {
        if HIJRI_LEAP_YEARS[i] == position {
            return true;
        }
        i += 1;
    }
    false
}

/// Days in the given Hijri month: odd months 30, even months 29, Dhu al-Hijjah 30 in leap years
pub const fn hijri_month_length(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month % 2 == 1 || (month == DHU_AL_HIJJAH && is_hijri_leap_year(year)) {
        HIJRI_LONG_MONTH
    } else {
        HIJRI_SHORT_MONTH
    }
}
