//! Tokenizer for [`HijriDate::format`](crate::HijriDate::format) patterns.
//!
//! ```text
//!        hijri
//!
//!     %Y              hijri year
//!     %m              hijri month
//!     %d              hijri day
//!     %D              hijri day name
//!     %M              hijri month name
//!     %l              hijri month length
//!
//!        gregorian
//!
//!     %gY             gregorian year
//!     %gm             gregorian month
//!     %gd             gregorian day
//!     %gD             gregorian day name
//!     %gM             gregorian month name
//! ```
//!
//! Three-character directives are matched before two-character ones. A `%`
//! that does not start a known directive is emitted as a literal and the
//! following character is scanned again.

use crate::consts::{DIRECTIVE_PREFIX, GREGORIAN_DIRECTIVE};

/// A recognised `%` directive, as listed in the module docs
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Directive {
    Year,
    Month,
    Day,
    DayName,
    MonthName,
    MonthLen,
    GregorianYear,
    GregorianMonth,
    GregorianDay,
    GregorianDayName,
    GregorianMonthName,
}

impl Directive {
    const fn hijri(c: char) -> Option<Self> {
        match c {
            'Y' => Some(Self::Year),
            'm' => Some(Self::Month),
            'd' => Some(Self::Day),
            'D' => Some(Self::DayName),
            'M' => Some(Self::MonthName),
            'l' => Some(Self::MonthLen),
            _ => None,
        }
    }

    const fn gregorian(c: char) -> Option<Self> {
        match c {
            'Y' => Some(Self::GregorianYear),
            'm' => Some(Self::GregorianMonth),
            'd' => Some(Self::GregorianDay),
            'D' => Some(Self::GregorianDayName),
            'M' => Some(Self::GregorianMonthName),
            _ => None,
        }
    }
}

/// One piece of a parsed pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Item<'a> {
    Literal(&'a str),
    Directive(Directive),
}

/// Iterator over the items of a pattern, see [`parse`]
#[derive(Debug, Clone)]
pub struct Items<'a> {
    rest: &'a str,
}

/// Splits `pattern` into literal runs and directives
pub const fn parse(pattern: &str) -> Items<'_> {
    Items { rest: pattern }
}

impl<'a> Items<'a> {
    fn advance(&mut self, len: usize) -> &'a str {
        let (head, tail) = self.rest.split_at(len);
        self.rest = tail;
        head
    }

    /// Directive at the start of `rest` and its byte length; all directive characters are ASCII
    fn directive(&self) -> Option<(Directive, usize)> {
        let mut chars = self.rest.chars();
        if chars.next() != Some(DIRECTIVE_PREFIX) {
            return None;
        }
        let second = chars.next();
        match (second, chars.next().and_then(Directive::gregorian)) {
            (Some(GREGORIAN_DIRECTIVE), Some(directive)) => Some((directive, 3)),
            _ => second.and_then(Directive::hijri).map(|directive| (directive, 2)),
        }
    }
}

impl<'a> Iterator for Items<'a> {
    type Item = Item<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.rest.is_empty() {
            return None;
        }

        if let Some((directive, len)) = self.directive() {
            self.advance(len);
            return Some(Item::Directive(directive));
        }

        // Literal run up to the next prefix; an unmatched prefix is a literal of its own
        let len = if self.rest.starts_with(DIRECTIVE_PREFIX) {
            DIRECTIVE_PREFIX.len_utf8()
        } else {
            self.rest.find(DIRECTIVE_PREFIX).unwrap_or(self.rest.len())
        };
        Some(Item::Literal(self.advance(len)))
    }
}
