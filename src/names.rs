//! Day and month names in Arabic ("native") and English.
//!
//! Month tables are 1-indexed through the lookup functions; weekdays are
//! numbered 0 = Sunday through 6 = Saturday, the same numbering
//! [`jdn::weekday_index`](crate::jdn::weekday_index) reports.

use crate::types::Month;
use crate::consts::MAX_MONTH;
use crate::jdn::weekday_index;
use crate::prelude::*;

const HIJRI_MONTH_NAMES: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الثاني",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

const HIJRI_MONTH_NAMES_EN: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Awwal",
    "Jumada al-Thani",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

const GREGORIAN_MONTH_NAMES: [&str; 12] = [
    "يناير",
    "فبراير",
    "مارس",
    "أبريل",
    "مايو",
    "يونيو",
    "يوليو",
    "أغسطس",
    "سبتمبر",
    "أكتوبر",
    "نوفمبر",
    "ديسمبر",
];

const GREGORIAN_MONTH_NAMES_EN: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

const WEEKDAY_NAMES: [&str; 7] = [
    "الأحد",
    "الاثنين",
    "الثلاثاء",
    "الأربعاء",
    "الخميس",
    "الجمعة",
    "السبت",
];

/// Day of the week; the discriminant is the weekday number (Sunday = 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display)]
pub enum Weekday {
    #[display(fmt = "Sunday")]
    Sunday = 0,
    #[display(fmt = "Monday")]
    Monday = 1,
    #[display(fmt = "Tuesday")]
    Tuesday = 2,
    #[display(fmt = "Wednesday")]
    Wednesday = 3,
    #[display(fmt = "Thursday")]
    Thursday = 4,
    #[display(fmt = "Friday")]
    Friday = 5,
    #[display(fmt = "Saturday")]
    Saturday = 6,
}

impl Weekday {
    /// All weekdays in numbering order
    pub const ALL: [Self; 7] = [
        Self::Sunday,
        Self::Monday,
        Self::Tuesday,
        Self::Wednesday,
        Self::Thursday,
        Self::Friday,
        Self::Saturday,
    ];

    /// Looks up a weekday by number, `None` outside `0..=6`
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 7 {
            Some(Self::ALL[index as usize])
        } else {
            None
        }
    }

    /// Weekday of a Julian Day Number
    pub const fn from_jdn(jdn: i32) -> Self {
        Self::ALL[weekday_index(jdn) as usize]
    }

    /// Weekday number, 0 = Sunday through 6 = Saturday
    #[inline]
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Arabic name
    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[self as usize]
    }

    /// English name
    pub const fn name_en(self) -> &'static str {
        match self {
            Self::Sunday => "Sunday",
            Self::Monday => "Monday",
            Self::Tuesday => "Tuesday",
            Self::Wednesday => "Wednesday",
            Self::Thursday => "Thursday",
            Self::Friday => "Friday",
            Self::Saturday => "Saturday",
        }
    }
}

/// Arabic weekday name
pub const fn weekday_name(weekday: Weekday) -> &'static str {
    weekday.name()
}

/// English weekday name
pub const fn weekday_name_en(weekday: Weekday) -> &'static str {
    weekday.name_en()
}

/// Arabic Hijri month name
pub const fn hijri_month_name(month: Month) -> &'static str {
    HIJRI_MONTH_NAMES[month.get() as usize - 1]
}

/// English transliteration of the Hijri month name
pub const fn hijri_month_name_en(month: Month) -> &'static str {
    HIJRI_MONTH_NAMES_EN[month.get() as usize - 1]
}

const fn lookup_month(table: &'static [&'static str; 12], month: u8) -> Option<&'static str> {
    if month != 0 && month <= MAX_MONTH {
        Some(table[month as usize - 1])
    } else {
        None
    }
}

/// Arabic Gregorian month name, `None` outside `1..=12`
pub const fn gregorian_month_name(month: u8) -> Option<&'static str> {
    lookup_month(&GREGORIAN_MONTH_NAMES, month)
}

/// English Gregorian month name, `None` outside `1..=12`
pub const fn gregorian_month_name_en(month: u8) -> Option<&'static str> {
    lookup_month(&GREGORIAN_MONTH_NAMES_EN, month)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_from_index() {
        for (i, day) in Weekday::ALL.iter().enumerate() {
            assert_eq!(Weekday::from_index(i as u8), Some(*day));
            assert_eq!(day.index() as usize, i);
        }
        assert_eq!(Weekday::from_index(7), None);
    }

    #[test]
    fn test_weekday_from_jdn() {
        assert_eq!(Weekday::from_jdn(2_451_545), Weekday::Saturday);
        assert_eq!(Weekday::from_jdn(2_455_475), Weekday::Tuesday);
        assert_eq!(Weekday::from_jdn(1_948_440), Weekday::Friday);
    }

    #[test]
    fn test_weekday_names() {
        assert_eq!(weekday_name(Weekday::Friday), "الجمعة");
        assert_eq!(weekday_name_en(Weekday::Friday), "Friday");
        assert_eq!(Weekday::Sunday.name(), "الأحد");
        assert_eq!(Weekday::Saturday.name(), "السبت");
    }

    #[test]
    fn test_weekday_display_matches_english_name() {
        for day in Weekday::ALL {
            assert_eq!(day.to_string(), day.name_en());
        }
    }

    #[test]
    fn test_hijri_month_names() {
        let month = |value| Month::new(value).unwrap();

        assert_eq!(hijri_month_name(month(1)), "محرم");
        assert_eq!(hijri_month_name(month(9)), "رمضان");
        assert_eq!(hijri_month_name(month(12)), "ذو الحجة");
        assert_eq!(hijri_month_name_en(month(9)), "Ramadan");
        assert_eq!(hijri_month_name_en(month(10)), "Shawwal");
    }

    #[test]
    fn test_hijri_month_names_cover_every_month() {
        for value in 1..=MAX_MONTH {
            let month = Month::new(value).unwrap();
            assert!(!hijri_month_name(month).is_empty(), "month {value}");
            assert!(!hijri_month_name_en(month).is_empty(), "month {value}");
        }
    }

    #[test]
    fn test_gregorian_month_names() {
        assert_eq!(gregorian_month_name(10), Some("أكتوبر"));
        assert_eq!(gregorian_month_name_en(1), Some("January"));
        assert_eq!(gregorian_month_name_en(12), Some("December"));
    }

    #[test]
    fn test_gregorian_month_names_outside_range() {
        for month in [0, 13, u8::MAX] {
            assert_eq!(gregorian_month_name(month), None, "month {month}");
            assert_eq!(gregorian_month_name_en(month), None, "month {month}");
        }
    }

    #[test]
    fn test_names_are_not_reversed() {
        // Stored in logical order, so the Arabic definite article comes first
        assert!(WEEKDAY_NAMES.iter().all(|name| name.starts_with("ال")));
    }
}
