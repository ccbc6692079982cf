use crate::consts::MAX_MONTH;
use crate::jdn::gregorian_from_day_number;
use crate::prelude::*;

/// Calendar a rejected triple was interpreted in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum Calendar {
    #[display(fmt = "Hijri")]
    Hijri,
    #[display(fmt = "Gregorian")]
    Gregorian,
}

/// Which part of a date triple failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display)]
pub enum InvalidDateReason {
    #[display(fmt = "year out of range")]
    Year,
    #[display(fmt = "month must be 1-{}", MAX_MONTH)]
    Month,
    #[display(fmt = "day must be 1-{max}")]
    Day { max: u8 },
    #[display(fmt = "outside the supported range")]
    OutOfRange,
}

/// Error type for every fallible operation in the crate.
///
/// Only construction can fail; once a `HijriDate` exists all of its
/// accessors are total.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum DateError {
    /// A calendar triple that does not name a supported day.
    ///
    /// Days that leave the supported range through arithmetic, `from_jdn`
    /// or a chrono date are reported as the Gregorian triple of that day
    /// with reason `OutOfRange`.
    #[error("Invalid {calendar} date {year:04}-{month:02}-{day:02}: {reason}")]
    InvalidDate {
        calendar: Calendar,
        year:     i32,
        month:    u8,
        day:      u8,
        reason:   InvalidDateReason,
    },

    /// Text that is not a `YYYY-MM-DD` Hijri date.
    #[error("Invalid date format: {0}")]
    InvalidFormat(String),

    /// Empty input to the parser.
    #[error("Empty date string")]
    EmptyInput,
}

impl DateError {
    pub(crate) fn invalid_date(
        calendar: Calendar,
        year: u16,
        month: u8,
        day: u8,
        reason: InvalidDateReason,
    ) -> Self {
        Self::InvalidDate {
            calendar,
            year: i32::from(year),
            month,
            day,
            reason,
        }
    }

    /// `OutOfRange` error for a Julian Day Number, named by its Gregorian date
    pub(crate) fn out_of_range(jdn: i64) -> Self {
        let (year, month, day) = gregorian_from_day_number(jdn);
        Self::InvalidDate {
            calendar: Calendar::Gregorian,
            year: i32::try_from(year).unwrap_or(if year < 0 { i32::MIN } else { i32::MAX }),
            month,
            day,
            reason: InvalidDateReason::OutOfRange,
        }
    }

    /// Returns the validation reason if this is an `InvalidDate` error
    pub const fn reason(&self) -> Option<InvalidDateReason> {
        match self {
            Self::InvalidDate { reason, .. } => Some(*reason),
            Self::InvalidFormat(_) | Self::EmptyInput => None,
        }
    }
}
