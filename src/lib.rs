//! Lays out a printable yearly calendar as an SVG grid.
//!
//! Each month is one rectangular block of rows: a header row followed by
//! one row per day, labeled with the weekday initial and date number and
//! with weekend rows inverted. Month blocks sit side by side, each
//! shifted down by one row per weekday index of its first day, producing
//! a staircase across the page.
//!
//! The layout itself ([`YearLayout`]) is pure data; drawing goes through
//! the [`ShapeEmitter`] trait, with [`SvgEmitter`] as the built-in SVG
//! backend.
//!
//! ```
//! use year_grid::{GridConfig, Year, render_to_string};
//!
//! let config = GridConfig::with_year(Year::new(2024)?);
//! let svg = render_to_string(&config)?;
//! assert!(svg.starts_with("<svg"));
//! # Ok::<(), year_grid::RenderError>(())
//! ```

mod consts;
mod layout;
mod prelude;
mod svg;
mod types;

pub use consts::*;
pub use layout::{DayCell, GridConfig, MonthLayout, YearLayout};
pub use svg::{RenderError, ShapeEmitter, SvgEmitter, render, render_to_string};
pub use types::{Month, Weekday, Year, days_in_month, first_weekday, is_leap_year};

use crate::prelude::*;

/// Error type for layout inputs.
#[derive(Debug, Clone, PartialEq, Display)]
pub enum LayoutError {
    #[display(fmt = "Invalid year: {} (must be 1-{})", "_0", MAX_YEAR)]
    InvalidYear(u16),
    #[display(fmt = "Invalid month: {} (must be 1-{})", "_0", MAX_MONTH)]
    InvalidMonth(u8),
    #[display(fmt = "Invalid weekday index: {_0} (must be 0-6)")]
    InvalidWeekday(u8),
    #[display(fmt = "Invalid cell size: {width}x{height} (must be positive and finite)")]
    InvalidCellSize { width: f64, height: f64 },
}

impl std::error::Error for LayoutError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            LayoutError::InvalidYear(0).to_string(),
            "Invalid year: 0 (must be 1-9999)"
        );
        assert_eq!(
            LayoutError::InvalidMonth(13).to_string(),
            "Invalid month: 13 (must be 1-12)"
        );
        assert_eq!(
            LayoutError::InvalidWeekday(9).to_string(),
            "Invalid weekday index: 9 (must be 0-6)"
        );
    }

    #[test]
    fn test_layout_to_render_pipeline() {
        // Year in, layout out, SVG out; every step explicit
        let year = Year::new(2024).unwrap();
        let config = GridConfig::new(year, 120.0, 18.0).unwrap();
        let layout = config.layout();
        assert_eq!(layout.months().len(), 12);

        let svg = render_to_string(&config).unwrap();
        assert!(svg.contains(r#"viewBox="0 0 1440 684""#));
    }

    #[test]
    fn test_render_error_wraps_layout_error() {
        fn build(width: f64) -> Result<String, RenderError> {
            let config = GridConfig::new(Year::new(2024)?, width, 36.0)?;
            render_to_string(&config)
        }

        assert!(build(240.0).is_ok());
        assert!(matches!(
            build(0.0),
            Err(RenderError::Layout(LayoutError::InvalidCellSize { .. }))
        ));
    }

    #[test]
    fn test_full_year_walk_2024() {
        // Every day of 2024 in one pass: counts, weekday continuity
        // across the whole year, and weekend flags.
        let layout = YearLayout::compute(Year::new(2024).unwrap());
        let mut weekday = layout.months()[0].first_weekday();
        let mut total = 0;
        for month in layout.months() {
            for day in month.days() {
                assert_eq!(day.weekday(), weekday, "{} {}", month.name(), day.day_number());
                weekday = weekday.step(1);
                total += 1;
            }
        }
        assert_eq!(total, 366);
    }
}
