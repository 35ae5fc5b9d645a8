use crate::LayoutError;
use crate::consts::{
    CENTURY_CYCLE, DAYS_IN_MONTH, DAYS_PER_WEEK, FEBRUARY, FEBRUARY_DAYS_LEAP, GREGORIAN_CYCLE,
    LEAP_YEAR_CYCLE, MAX_MONTH, MAX_YEAR, MONTH_NAMES, SATURDAY, SUNDAY, WEEKDAY_NAMES,
};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::num::NonZeroU8;
use std::num::NonZeroU16;

/// A year value guaranteed to be in the range `1..=MAX_YEAR` (1..=9999),
/// interpreted in the proleptic Gregorian calendar.
/// Uses `NonZeroU16` internally, so 0 is not a valid year.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u16", into = "u16")]
pub struct Year(NonZeroU16);

impl Year {
    /// Creates a new Year, validating that it's non-zero and <= `MAX_YEAR`
    ///
    /// # Errors
    /// Returns `LayoutError::InvalidYear` if the value is 0 or > `MAX_YEAR`.
    pub fn new(value: u16) -> Result<Self, LayoutError> {
        let non_zero = NonZeroU16::new(value).ok_or(LayoutError::InvalidYear(value))?;
        if value > MAX_YEAR {
            return Err(LayoutError::InvalidYear(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns the year value as u16
    #[inline]
    pub const fn get(self) -> u16 {
        self.0.get()
    }
}

impl TryFrom<u16> for Year {
    type Error = LayoutError;

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

/// A month value guaranteed to be in the range `1..=MAX_MONTH` (1..=12)
/// Uses `NonZeroU8` internally, so 0 is not a valid month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Month(NonZeroU8);

impl Month {
    /// Creates a new Month, validating that it's non-zero and <= `MAX_MONTH`
    ///
    /// # Errors
    /// Returns `LayoutError::InvalidMonth` if the value is 0 or > `MAX_MONTH`.
    pub fn new(value: u8) -> Result<Self, LayoutError> {
        let non_zero = NonZeroU8::new(value).ok_or(LayoutError::InvalidMonth(value))?;
        if value > MAX_MONTH {
            return Err(LayoutError::InvalidMonth(value));
        }
        Ok(Self(non_zero))
    }

    /// Returns all twelve months in calendar order (January..December)
    pub fn all() -> impl Iterator<Item = Self> {
        (1..=MAX_MONTH).filter_map(|m| Self::new(m).ok())
    }

    /// Returns the month number as u8 (1..=12)
    #[inline]
    pub const fn get(self) -> u8 {
        self.0.get()
    }

    /// Returns the zero-based month index (0 = January, 11 = December)
    #[inline]
    pub const fn index(self) -> usize {
        (self.0.get() - 1) as usize
    }

    /// Returns the canonical English name of the month
    pub const fn name(self) -> &'static str {
        MONTH_NAMES[self.index()]
    }
}

impl TryFrom<u8> for Month {
    type Error = LayoutError;

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
        write!(f, "{}", self.name())
    }
}

/// A weekday index guaranteed to be in the range `0..=6` (0 = Sunday,
/// matching the convention of the rendered grid rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u8", into = "u8")]
pub struct Weekday(u8);

impl Weekday {
    /// Creates a new Weekday, validating the index is < 7
    ///
    /// # Errors
    /// Returns `LayoutError::InvalidWeekday` if the value is >= 7.
    pub const fn new(value: u8) -> Result<Self, LayoutError> {
        if value >= DAYS_PER_WEEK {
            return Err(LayoutError::InvalidWeekday(value));
        }
        Ok(Self(value))
    }

    /// Returns the weekday index as u8 (0..=6)
    #[inline]
    pub const fn get(self) -> u8 {
        self.0
    }

    /// Returns the full English name of the weekday
    pub const fn name(self) -> &'static str {
        WEEKDAY_NAMES[self.0 as usize]
    }

    /// Returns the first letter of the weekday name
    pub const fn initial(self) -> char {
        self.name().as_bytes()[0] as char
    }

    /// True for Sunday and Saturday
    #[inline]
    pub const fn is_weekend(self) -> bool {
        self.0 == SUNDAY || self.0 == SATURDAY
    }

    /// Returns the weekday `days` days after this one, wrapping modulo 7
    pub const fn step(self, days: u8) -> Self {
        Self(((self.0 as u16 + days as u16) % DAYS_PER_WEEK as u16) as u8)
    }
}

impl TryFrom<u8> for Weekday {
    type Error = LayoutError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl From<Weekday> for u8 {
    fn from(weekday: Weekday) -> Self {
        weekday.0
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

// Helper functions

pub const fn is_leap_year(year: u16) -> bool {
    (year % LEAP_YEAR_CYCLE == 0 && year % CENTURY_CYCLE != 0) || (year % GREGORIAN_CYCLE == 0)
}

pub const fn days_in_month(year: u16, month: u8) -> u8 {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    if month == FEBRUARY && is_leap_year(year) {
        FEBRUARY_DAYS_LEAP
    } else {
        DAYS_IN_MONTH[month as usize]
    }
}

/// Weekday of the first day of the given month (Sakamoto's congruence,
/// proleptic Gregorian, anchored so that 0 = Sunday).
pub const fn first_weekday(year: u16, month: u8) -> Weekday {
    debug_assert!(month != 0 && month <= MAX_MONTH);

    const MONTH_OFFSETS: [i32; 12] = [0, 3, 2, 5, 0, 3, 5, 1, 4, 6, 2, 4];
    let y = if month < 3 {
        year as i32 - 1
    } else {
        year as i32
    };
    let index = (y + y / 4 - y / 100 + y / 400 + MONTH_OFFSETS[(month - 1) as usize] + 1) % 7;
    Weekday(index as u8)
}
