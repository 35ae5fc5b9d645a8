/// Maximum valid year (inclusive)
pub const MAX_YEAR: u16 = 9999;

/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Number of weekday slots in a week
pub const DAYS_PER_WEEK: u8 = 7;

/// Weekday index for Sunday (weeks start on Sunday, matching the
/// 0-based indices of `WEEKDAY_NAMES`)
pub const SUNDAY: u8 = 0;
/// Weekday index for Saturday
pub const SATURDAY: u8 = 6;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
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

/// Canonical English month names, indexed by zero-based month index
pub const MONTH_NAMES: [&str; 12] = [
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

/// Full weekday names, indexed by weekday (0 = Sunday)
pub const WEEKDAY_NAMES: [&str; 7] = [
    "Sunday",
    "Monday",
    "Tuesday",
    "Wednesday",
    "Thursday",
    "Friday",
    "Saturday",
];

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: u16 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: u16 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: u16 = 400;

/// Default width of one month column, in SVG user units
pub const DEFAULT_CELL_WIDTH: f64 = 240.0;
/// Default height of one day row, in SVG user units
pub const DEFAULT_CELL_HEIGHT: f64 = 36.0;

/// Rows of vertical extent in the rendered document: 31 day rows, one
/// header row, and up to 6 rows of first-weekday offset
pub const GRID_ROWS: f64 = 38.0;
