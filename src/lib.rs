//! Convert between the tabular Hijri calendar and the proleptic Gregorian
//! calendar, and render either with Arabic or English names.
//!
//! The Hijri calendar used here is the arithmetic ("civil") one: months
//! alternate 30 and 29 days, and Dhu al-Hijjah gains a 30th day in years 2,
//! 5, 7, 10, 13, 16, 18, 21, 24, 26 and 29 of every 30-year cycle. 1 Muharram
//! 1 AH is Julian Day 1 948 440 (19 July 622, proleptic Gregorian). It is a
//! calculated calendar and can differ by a day or two from calendars based on
//! moon sighting.
//!
//! ```
//! use hijri_date::HijriDate;
//!
//! let date = HijriDate::from_gregorian(2010, 10, 5)?;
//! assert_eq!(date.format("%Y/%m/%d"), "1431/10/26");
//! assert_eq!(date.to_gregorian(), (2010, 10, 5));
//! assert_eq!(date.month_name_en(), "Shawwal");
//! # Ok::<(), hijri_date::DateError>(())
//! ```
//!
//! Supported dates run from 1-01-01 AH (622-07-19) to 9666-04-02 AH
//! (9999-12-31).

mod clock;
mod consts;
mod error;
pub mod format;
pub mod gregorian;
pub mod jdn;
mod names;
mod prelude;
mod types;

pub use chrono::Duration;
pub use clock::{Clock, FixedClock, SystemClock};
pub use consts::*;
pub use error::{Calendar, DateError, InvalidDateReason};
pub use names::{
    Weekday, gregorian_month_name, gregorian_month_name_en, hijri_month_name, hijri_month_name_en,
    weekday_name, weekday_name_en,
};
pub use types::{Day, Month, Year, hijri_month_length, is_hijri_leap_year};

use crate::format::{Directive, Item};
use crate::jdn::{gregorian_to_jdn, hijri_to_jdn, jdn_to_gregorian, jdn_to_hijri};
use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::ops::Sub;
use std::str::FromStr;
use tracing::{debug, trace};

/// Days between 1 January 1 (proleptic Gregorian) and its Julian Day Number, as chrono counts them
const CE_DAY_OFFSET: i32 = jdn::GREGORIAN_EPOCH_JDN - 1;

/// A day in the tabular Hijri calendar.
///
/// Only the Hijri `(year, month, day)` is stored. The Gregorian date,
/// weekday, names and month length are computed from it on each call.
/// Ordering is chronological.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct HijriDate {
    year:  Year,
    month: Month,
    day:   Day,
}

impl HijriDate {
    /// Creates a date from a Hijri `(year, month, day)`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the month is outside `1..=12`, the
    /// day is past the end of the month, or the date is outside the
    /// supported range.
    pub fn from_hijri(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        Self::validate_hijri(year, month, day)
            .inspect(|_| trace!(year, month, day, "hijri date"))
            .inspect_err(|err| debug!(%err, "rejected hijri date"))
    }

    fn validate_hijri(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let invalid =
            |reason| DateError::invalid_date(Calendar::Hijri, year, month, day, reason);

        let year_nz = Year::new(year).map_err(invalid)?;
        let month_nz = Month::new(month).map_err(invalid)?;
        let day_nz = Day::new(day, year, month).map_err(invalid)?;
        if hijri_to_jdn(year, month, day) > MAX_JDN {
            return Err(invalid(InvalidDateReason::OutOfRange));
        }

        Ok(Self {
            year:  year_nz,
            month: month_nz,
            day:   day_nz,
        })
    }

    /// Creates a date from a proleptic Gregorian `(year, month, day)`.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` if the triple is not a Gregorian
    /// date or falls before 622-07-19 (1 Muharram 1 AH).
    pub fn from_gregorian(year: u16, month: u8, day: u8) -> Result<Self, DateError> {
        let invalid =
            |reason| DateError::invalid_date(Calendar::Gregorian, year, month, day, reason);

        let result = gregorian::validate(year, month, day)
            .map_err(invalid)
            .and_then(|()| {
                let jdn = gregorian_to_jdn(year, month, day);
                if jdn < HIJRI_EPOCH_JDN {
                    return Err(invalid(InvalidDateReason::OutOfRange));
                }
                Self::from_jdn(jdn)
            });

        match &result {
            Ok(date) => trace!(year, month, day, hijri = %date.to_iso_string(), "gregorian date"),
            Err(err) => debug!(%err, "rejected gregorian date"),
        }
        result
    }

    /// Creates a date from a Julian Day Number.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` with reason `OutOfRange` outside
    /// `HIJRI_EPOCH_JDN..=MAX_JDN`.
    pub fn from_jdn(jdn: i32) -> Result<Self, DateError> {
        if !(HIJRI_EPOCH_JDN..=MAX_JDN).contains(&jdn) {
            return Err(DateError::out_of_range(i64::from(jdn)));
        }
        let (year, month, day) = jdn_to_hijri(jdn);
        Self::validate_hijri(year, month, day)
    }

    /// Today's date according to the system clock (UTC).
    ///
    /// # Errors
    /// Fails only if the clock reports a date outside the supported range.
    pub fn today() -> Result<Self, DateError> {
        Self::today_with(&SystemClock)
    }

    /// Today's date according to `clock`.
    ///
    /// # Errors
    /// Fails only if the clock reports a date outside the supported range.
    pub fn today_with<C: Clock + ?Sized>(clock: &C) -> Result<Self, DateError> {
        Self::try_from(clock.today())
    }

    /// Hijri year
    pub const fn year(&self) -> u16 {
        self.year.get()
    }

    /// Hijri month, `1..=12`
    pub const fn month(&self) -> u8 {
        self.month.get()
    }

    /// Hijri day of the month
    pub const fn day(&self) -> u8 {
        self.day.get()
    }

    /// Returns the Year type
    pub const fn year_typed(&self) -> Year {
        self.year
    }

    /// Returns the Month type
    pub const fn month_typed(&self) -> Month {
        self.month
    }

    /// Returns the Day type
    pub const fn day_typed(&self) -> Day {
        self.day
    }

    /// Number of days in the current Hijri month
    pub const fn month_len(&self) -> u8 {
        hijri_month_length(self.year(), self.month())
    }

    /// Whether the current Hijri year has 355 days
    pub const fn is_leap_year(&self) -> bool {
        self.year.is_leap()
    }

    /// Julian Day Number
    pub const fn jdn(&self) -> i32 {
        hijri_to_jdn(self.year(), self.month(), self.day())
    }

    /// Day of the week, shared by both calendars
    pub const fn weekday(&self) -> Weekday {
        Weekday::from_jdn(self.jdn())
    }

    /// Arabic weekday name
    pub const fn day_name(&self) -> &'static str {
        self.weekday().name()
    }

    /// English weekday name
    pub const fn day_name_en(&self) -> &'static str {
        self.weekday().name_en()
    }

    /// Arabic Hijri month name
    pub const fn month_name(&self) -> &'static str {
        hijri_month_name(self.month)
    }

    /// English Hijri month name
    pub const fn month_name_en(&self) -> &'static str {
        hijri_month_name_en(self.month)
    }

    /// The same day as a proleptic Gregorian `(year, month, day)`
    pub const fn to_gregorian(&self) -> (u16, u8, u8) {
        jdn_to_gregorian(self.jdn())
    }

    /// Gregorian year
    pub const fn year_gr(&self) -> u16 {
        self.to_gregorian().0
    }

    /// Gregorian month
    pub const fn month_gr(&self) -> u8 {
        self.to_gregorian().1
    }

    /// Gregorian day of the month
    pub const fn day_gr(&self) -> u8 {
        self.to_gregorian().2
    }

    /// Arabic Gregorian month name
    pub const fn month_name_gr(&self) -> &'static str {
        match gregorian_month_name(self.month_gr()) {
            Some(name) => name,
            None => "",
        }
    }

    /// English Gregorian month name
    pub const fn month_name_gr_en(&self) -> &'static str {
        match gregorian_month_name_en(self.month_gr()) {
            Some(name) => name,
            None => "",
        }
    }

    /// The same day as a chrono date
    pub fn to_naive_date(&self) -> Option<NaiveDate> {
        NaiveDate::from_num_days_from_ce_opt(self.jdn() - CE_DAY_OFFSET)
    }

    /// `YYYY-MM-DD` form of the Hijri date, as used by `FromStr` and serde
    pub fn to_iso_string(&self) -> String {
        format!(
            "{:04}{DATE_SEPARATOR}{:02}{DATE_SEPARATOR}{:02}",
            self.year(),
            self.month(),
            self.day()
        )
    }

    /// Renders the date through a pattern of literals and directives.
    ///
    /// ```text
    ///        hijri
    ///
    ///     %Y              hijri_year
    ///     %m              hijri_month
    ///     %d              hijri_day
    ///     %D              hijri_day_name
    ///     %M              hijri_month_name
    ///     %l              hijri_month_len
    ///
    ///        gregorian
    ///
    ///     %gY             gregorian_year
    ///     %gm             gregorian_month
    ///     %gd             gregorian_day
    ///     %gD             gregorian_day_name
    ///     %gM             gregorian_month_name
    /// ```
    ///
    /// Numbers are not padded. Anything else, including unknown directives,
    /// is copied unchanged.
    ///
    /// ```
    /// use hijri_date::HijriDate;
    ///
    /// let date = HijriDate::from_hijri(1431, 10, 26)?;
    /// assert_eq!(date.format("%d/%m/%Y = %gd/%gm/%gY"), "26/10/1431 = 5/10/2010");
    /// # Ok::<(), hijri_date::DateError>(())
    /// ```
    pub fn format(&self, pattern: &str) -> String {
        let mut out = String::with_capacity(pattern.len() * 2);
        for item in format::parse(pattern) {
            match item {
                Item::Literal(text) => out.push_str(text),
                Item::Directive(directive) => self.push_directive(directive, &mut out),
            }
        }
        out
    }

    fn push_directive(&self, directive: Directive, out: &mut String) {
        match directive {
            Directive::Year => out.push_str(&self.year().to_string()),
            Directive::Month => out.push_str(&self.month().to_string()),
            Directive::Day => out.push_str(&self.day().to_string()),
            Directive::DayName | Directive::GregorianDayName => out.push_str(self.day_name()),
            Directive::MonthName => out.push_str(self.month_name()),
            Directive::MonthLen => out.push_str(&self.month_len().to_string()),
            Directive::GregorianYear => out.push_str(&self.year_gr().to_string()),
            Directive::GregorianMonth => out.push_str(&self.month_gr().to_string()),
            Directive::GregorianDay => out.push_str(&self.day_gr().to_string()),
            Directive::GregorianMonthName => out.push_str(self.month_name_gr()),
        }
    }

    /// Moves the date by a number of days.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` with reason `OutOfRange` if the result
    /// leaves the supported range.
    pub fn checked_add_days(self, days: i64) -> Result<Self, DateError> {
        let target = i64::from(self.jdn()).saturating_add(days);
        let jdn = i32::try_from(target).map_err(|_| DateError::out_of_range(target))?;
        Self::from_jdn(jdn)
    }

    /// Moves the date back by a number of days.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` with reason `OutOfRange` if the result
    /// leaves the supported range.
    pub fn checked_sub_days(self, days: i64) -> Result<Self, DateError> {
        self.checked_add_days(0_i64.saturating_sub(days))
    }

    /// Adds the whole days of `duration`; any sub-day part is dropped.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` with reason `OutOfRange` if the result
    /// leaves the supported range.
    pub fn checked_add(self, duration: Duration) -> Result<Self, DateError> {
        self.checked_add_days(duration.num_days())
    }

    /// Subtracts the whole days of `duration`; any sub-day part is dropped.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` with reason `OutOfRange` if the result
    /// leaves the supported range.
    pub fn checked_sub(self, duration: Duration) -> Result<Self, DateError> {
        self.checked_sub_days(duration.num_days())
    }

    /// The following day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` with reason `OutOfRange` on the last
    /// supported day.
    pub fn succ(self) -> Result<Self, DateError> {
        self.checked_add_days(1)
    }

    /// The preceding day.
    ///
    /// # Errors
    /// Returns `DateError::InvalidDate` with reason `OutOfRange` on
    /// 1 Muharram 1 AH.
    pub fn pred(self) -> Result<Self, DateError> {
        self.checked_sub_days(1)
    }
}

impl fmt::Display for HijriDate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {}",
            self.day_name(),
            self.day(),
            self.month_name(),
            self.year()
        )
    }
}

impl Sub for HijriDate {
    type Output = Duration;

    fn sub(self, rhs: Self) -> Duration {
        Duration::days(i64::from(self.jdn() - rhs.jdn()))
    }
}

impl TryFrom<NaiveDate> for HijriDate {
    type Error = DateError;

    fn try_from(date: NaiveDate) -> Result<Self, Self::Error> {
        let (Ok(year), Ok(month), Ok(day)) = (
            u16::try_from(date.year()),
            u8::try_from(date.month()),
            u8::try_from(date.day()),
        ) else {
            return Err(DateError::out_of_range(
                i64::from(date.num_days_from_ce()) + i64::from(CE_DAY_OFFSET),
            ));
        };
        Self::from_gregorian(year, month, day)
    }
}

impl FromStr for HijriDate {
    type Err = DateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.is_empty() {
            return Err(DateError::EmptyInput);
        }

        let parts: Vec<&str> = trimmed.split(DATE_SEPARATOR).map(str::trim).collect();
        let [year, month, day] = parts.as_slice() else {
            return Err(DateError::InvalidFormat(format!(
                "expected YYYY{DATE_SEPARATOR}MM{DATE_SEPARATOR}DD, found {} {DATE_SEPARATOR} separators",
                parts.len() - 1
            )));
        };

        Self::from_hijri(parse_number(year)?, parse_number(month)?, parse_number(day)?)
    }
}

/// Helper to parse a date component with better error messages
fn parse_number<T: FromStr>(s: &str) -> Result<T, DateError> {
    s.parse::<T>()
        .map_err(|_| DateError::InvalidFormat(s.to_owned()))
}

impl serde::Serialize for HijriDate {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_str(&self.to_iso_string())
    }
}

impl<'de> serde::Deserialize<'de> for HijriDate {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = <String as serde::Deserialize>::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
