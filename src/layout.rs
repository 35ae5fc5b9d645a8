use crate::LayoutError;
use crate::consts::{DEFAULT_CELL_HEIGHT, DEFAULT_CELL_WIDTH};
use crate::prelude::*;
use crate::types::{Month, Weekday, Year, days_in_month, first_weekday};
use serde::{Deserialize, Serialize};

/// Year and cell geometry for one layout request.
///
/// Replaces the process-wide year/rect globals of ad-hoc calendar
/// scripts with an explicit value, so layouts for different years can be
/// computed independently and concurrently.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GridConfig {
    year: Year,
    cell_width: f64,
    cell_height: f64,
}

impl GridConfig {
    /// Creates a config with explicit cell geometry.
    ///
    /// # Errors
    /// Returns `LayoutError::InvalidCellSize` if either dimension is not
    /// strictly positive and finite.
    pub fn new(year: Year, cell_width: f64, cell_height: f64) -> Result<Self, LayoutError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(cell_width) || !valid(cell_height) {
            return Err(LayoutError::InvalidCellSize {
                width: cell_width,
                height: cell_height,
            });
        }
        Ok(Self {
            year,
            cell_width,
            cell_height,
        })
    }

    /// Creates a config with the default 240x36 cell geometry.
    pub const fn with_year(year: Year) -> Self {
        Self {
            year,
            cell_width: DEFAULT_CELL_WIDTH,
            cell_height: DEFAULT_CELL_HEIGHT,
        }
    }

    /// Returns the year this config lays out
    pub const fn year(&self) -> Year {
        self.year
    }

    /// Returns the width of one month column
    pub const fn cell_width(&self) -> f64 {
        self.cell_width
    }

    /// Returns the height of one day row
    pub const fn cell_height(&self) -> f64 {
        self.cell_height
    }

    /// Computes the layout for the configured year
    pub fn layout(&self) -> YearLayout {
        YearLayout::compute(self.year)
    }
}

/// The complete layout of one year: exactly twelve months in calendar
/// order, each knowing its day count and starting weekday.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct YearLayout {
    year: Year,
    months: Vec<MonthLayout>,
}

impl YearLayout {
    /// Computes the layout for a year. Pure: the same year always yields
    /// a structurally identical layout.
    pub fn compute(year: Year) -> Self {
        let months = Month::all()
            .map(|month| MonthLayout::new(year, month))
            .collect();
        Self { year, months }
    }

    /// Returns the year this layout describes
    pub const fn year(&self) -> Year {
        self.year
    }

    /// Returns the twelve months, January..December
    pub fn months(&self) -> &[MonthLayout] {
        &self.months
    }
}

/// One month block: name, day count, and the weekday its first day
/// falls on. Derived deterministically from (year, month).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonthLayout {
    month: Month,
    day_count: u8,
    first_weekday: Weekday,
}

impl MonthLayout {
    /// Derives the month block descriptor for (year, month)
    pub fn new(year: Year, month: Month) -> Self {
        Self {
            month,
            day_count: days_in_month(year.get(), month.get()),
            first_weekday: first_weekday(year.get(), month.get()),
        }
    }

    /// Returns the month this block describes
    pub const fn month(&self) -> Month {
        self.month
    }

    /// Returns the canonical English month name
    pub const fn name(&self) -> &'static str {
        self.month.name()
    }

    /// Returns the number of days in the month (28..=31)
    pub const fn day_count(&self) -> u8 {
        self.day_count
    }

    /// Returns the weekday of the first day of the month
    pub const fn first_weekday(&self) -> Weekday {
        self.first_weekday
    }

    /// Returns one cell per day, in strictly increasing day order. Day
    /// `i` falls on weekday `(first_weekday + i) mod 7`.
    pub fn days(&self) -> Vec<DayCell> {
        (0..self.day_count)
            .map(|i| {
                let weekday = self.first_weekday.step(i);
                DayCell {
                    day_number: i + 1,
                    weekday,
                    is_weekend: weekday.is_weekend(),
                    row: i + 1,
                }
            })
            .collect()
    }

    /// Top-left offset of the month block: months sit side by side
    /// horizontally, and each block is shifted down by one row per
    /// weekday index of its first day. The resulting staircase is the
    /// intended layout, not a conventional aligned grid.
    pub fn offset(&self, config: &GridConfig) -> (f64, f64) {
        let x = config.cell_width() * self.month.index() as f64;
        let y = config.cell_height() * f64::from(self.first_weekday.get());
        (x, y)
    }
}

/// One day row inside a month block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, Serialize, Deserialize)]
#[display(fmt = "{} {}", "weekday.initial()", "day_number")]
pub struct DayCell {
    day_number: u8,
    weekday: Weekday,
    is_weekend: bool,
    row: u8,
}

impl DayCell {
    /// Returns the date number within the month (1..=day_count)
    pub const fn day_number(&self) -> u8 {
        self.day_number
    }

    /// Returns the weekday this day falls on
    pub const fn weekday(&self) -> Weekday {
        self.weekday
    }

    /// True for Sunday and Saturday rows, which render inverted
    pub const fn is_weekend(&self) -> bool {
        self.is_weekend
    }

    /// Returns the row within the month block (equal to the day number;
    /// row 0 is the month header)
    pub const fn row(&self) -> u8 {
        self.row
    }

    /// Returns the row label: weekday initial, a space, and the date
    /// number (e.g. "M 5")
    pub fn label(&self) -> String {
        self.to_string()
    }

    /// Vertical offset of this row within its month block, one cell
    /// below the header row
    pub fn y_offset(&self, cell_height: f64) -> f64 {
        cell_height * f64::from(self.row)
    }
}
