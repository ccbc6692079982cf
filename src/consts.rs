/// Julian Day Number of 1 Muharram 1 AH (civil epoch, Friday 16 July 622 Julian)
pub const HIJRI_EPOCH_JDN: i32 = 1_948_440;

/// Julian Day Number of 31 December 9999 Gregorian, the last supported day
pub const MAX_JDN: i32 = 5_373_484;

/// Maximum valid Hijri year (inclusive); 9666-04-02 AH is the last supported day
pub const MAX_HIJRI_YEAR: u16 = 9666;

/// Maximum valid Gregorian year (inclusive)
pub const MAX_GREGORIAN_YEAR: u16 = 9999;

/// Maximum valid month in either calendar
pub const MAX_MONTH: u8 = 12;

/// First day of month, used for lower bounds
pub const MIN_DAY: u8 = 1;

/// Month number for February
pub const FEBRUARY: u8 = 2;
/// Month number for Dhu al-Hijjah, the month that grows in leap years
pub const DHU_AL_HIJJAH: u8 = 12;

/// Days in an odd-numbered Hijri month
pub const HIJRI_LONG_MONTH: u8 = 30;
/// Days in an even-numbered Hijri month
pub const HIJRI_SHORT_MONTH: u8 = 29;

/// Days in a common Hijri year
pub const HIJRI_COMMON_YEAR_DAYS: i32 = 354;
/// Years in one tabular leap cycle
pub const HIJRI_CYCLE_YEARS: u16 = 30;
/// Days in one tabular leap cycle (30 * 354 + 11)
pub const HIJRI_CYCLE_DAYS: i32 = 10_631;

/// Leap years within the 30-year cycle (1-based position in the cycle)
pub const HIJRI_LEAP_YEARS: [u16; 11] = [2, 5, 7, 10, 13, 16, 18, 21, 24, 26, 29];

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each Gregorian month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
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

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Date component separator for the ISO-like Hijri text form
pub const DATE_SEPARATOR: char = '-';

/// Introduces a directive in `HijriDate::format` patterns
pub const DIRECTIVE_PREFIX: char = '%';
/// Second character of the Gregorian directives (`%gY`, `%gm`, ...)
pub const GREGORIAN_DIRECTIVE: char = 'g';
