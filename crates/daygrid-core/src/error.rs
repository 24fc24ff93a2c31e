//! Error types for daygrid.

use thiserror::Error;

/// Smallest year a calendar can display.
pub const MIN_YEAR: i32 = 1;
/// Largest year a calendar can display.
pub const MAX_YEAR: i32 = 9999;
/// Smallest month number.
pub const MIN_MONTH: u32 = 1;
/// Largest month number.
pub const MAX_MONTH: u32 = 12;

/// The main error type for calendar operations.
///
/// Only domain and range violations are errors. Lookups that simply find
/// nothing (a point outside the grid, a date outside the displayed weeks)
/// are reported as `None` by the respective APIs instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalendarError {
    /// The year is outside `[MIN_YEAR, MAX_YEAR]`.
    #[error("year {0} is out of range [1, 9999]")]
    YearOutOfRange(i32),

    /// The month is outside `[MIN_MONTH, MAX_MONTH]`.
    #[error("month {0} is out of range [1, 12]")]
    MonthOutOfRange(u32),

    /// A flat grid index is outside `[0, len)`.
    #[error("grid index {index} is out of range [0, {len})")]
    IndexOutOfRange { index: usize, len: usize },

    /// A row/column pair does not address a grid cell.
    #[error("cell ({row}, {column}) is out of range ({rows} rows x {columns} columns)")]
    CellOutOfRange {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },

    /// A date computation left the range the date type can represent.
    #[error("date arithmetic overflowed while building {year:04}-{month:02}")]
    DateOutOfRange { year: i32, month: u32 },
}

impl CalendarError {
    /// Check a year against the supported range.
    pub fn check_year(year: i32) -> Result<i32> {
        if (MIN_YEAR..=MAX_YEAR).contains(&year) {
            Ok(year)
        } else {
            Err(Self::YearOutOfRange(year))
        }
    }

    /// Check a month against the supported range.
    pub fn check_month(month: u32) -> Result<u32> {
        if (MIN_MONTH..=MAX_MONTH).contains(&month) {
            Ok(month)
        } else {
            Err(Self::MonthOutOfRange(month))
        }
    }
}

/// A specialized Result type for calendar operations.
pub type Result<T> = std::result::Result<T, CalendarError>;
