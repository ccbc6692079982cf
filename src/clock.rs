//! Time sources for [`HijriDate::today_with`](crate::HijriDate::today_with).

use crate::prelude::*;
use chrono::{NaiveDate, Utc};

/// Supplies the current Gregorian calendar date.
pub trait Clock {
    /// Current date in the proleptic Gregorian calendar
    fn today(&self) -> NaiveDate;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn today(&self) -> NaiveDate {
        (**self).today()
    }
}

/// Reads the system clock; the date is taken in UTC.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}

/// Always reports the same date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, From, Into)]
pub struct FixedClock(NaiveDate);

impl FixedClock {
    /// Clock that reports `date` on every call
    pub const fn new(date: NaiveDate) -> Self {
        Self(date)
    }
}

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_clock() {
        let date = NaiveDate::from_ymd_opt(2010, 10, 5).unwrap();
        let clock = FixedClock::new(date);
        assert_eq!(clock.today(), date);
        assert_eq!((&clock).today(), date);

        let from: FixedClock = date.into();
        assert_eq!(from, clock);
        let back: NaiveDate = clock.into();
        assert_eq!(back, date);
    }

    #[test]
    fn test_system_clock_is_recent() {
        let floor = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
        assert!(SystemClock.today() >= floor);
    }

    #[test]
    fn test_clock_is_object_safe() {
        let clocks: Vec<Box<dyn Clock>> = vec![
            Box::new(SystemClock),
            Box::new(FixedClock::new(NaiveDate::from_ymd_opt(2000, 1, 1).unwrap())),
        ];
        assert_eq!(clocks.len(), 2);
    }
}
