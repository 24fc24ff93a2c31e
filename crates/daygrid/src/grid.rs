//! The 6x7 Monday-first date grid.
//!
//! A [`CalendarGrid`] always holds exactly [`CELL_COUNT`] consecutive dates.
//! The first cell is the Monday on or before the 1st of the displayed month,
//! so every month is shown as six full weeks: a few trailing days of the
//! previous month, the whole displayed month, then leading days of the next.
//!
//! # Example
//!
//! ```
//! use chrono::{Datelike, Weekday};
//! use daygrid::grid::build_grid;
//!
//! let grid = build_grid(2024, 2).unwrap();
//! assert_eq!(grid.days()[0].weekday(), Weekday::Mon);
//! assert_eq!(grid.last_of_month_index().get() - grid.first_of_month_index().get(), 28);
//! ```

use chrono::{Datelike, NaiveDate, Weekday};
use daygrid_core::logging::targets;
use daygrid_core::{CalendarError, Result};

/// Number of week rows in the grid.
pub const ROWS: usize = 6;
/// Number of day columns in the grid (Monday to Sunday).
pub const COLUMNS: usize = 7;
/// Total number of cells in the grid.
pub const CELL_COUNT: usize = ROWS * COLUMNS;

/// A position in the grid, always in `[0, CELL_COUNT)`.
///
/// Cells are numbered row by row: `index = row * 7 + column`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GridIndex(usize);

impl GridIndex {
    /// Create an index, checking it against the grid size.
    pub fn new(index: usize) -> Result<Self> {
        if index < CELL_COUNT {
            Ok(Self(index))
        } else {
            Err(CalendarError::IndexOutOfRange {
                index,
                len: CELL_COUNT,
            })
        }
    }

    /// Create an index from a row and column.
    pub fn from_cell(row: usize, column: usize) -> Result<Self> {
        if row < ROWS && column < COLUMNS {
            Ok(Self(row * COLUMNS + column))
        } else {
            Err(CalendarError::CellOutOfRange {
                row,
                column,
                rows: ROWS,
                columns: COLUMNS,
            })
        }
    }

    /// Create an index from a row and column, clamping both into range.
    pub(crate) fn clamped(row: usize, column: usize) -> Self {
        Self(row.min(ROWS - 1) * COLUMNS + column.min(COLUMNS - 1))
    }

    /// Iterate over every index in grid order.
    pub fn all() -> impl Iterator<Item = GridIndex> {
        (0..CELL_COUNT).map(GridIndex)
    }

    /// The flat index.
    #[inline]
    pub const fn get(self) -> usize {
        self.0
    }

    /// The row of this cell (0-5).
    #[inline]
    pub const fn row(self) -> usize {
        self.0 / COLUMNS
    }

    /// The column of this cell (0-6, Monday is 0).
    #[inline]
    pub const fn column(self) -> usize {
        self.0 % COLUMNS
    }
}

impl From<GridIndex> for usize {
    fn from(index: GridIndex) -> Self {
        index.0
    }
}

impl TryFrom<usize> for GridIndex {
    type Error = CalendarError;

    fn try_from(index: usize) -> Result<Self> {
        Self::new(index)
    }
}

/// Number of days in the given month.
pub fn days_in_month(year: i32, month: u32) -> Result<u32> {
    let year = CalendarError::check_year(year)?;
    let month = CalendarError::check_month(month)?;
    let first = first_of_month(year, month)?;
    let (next_year, next_month) = if month == 12 { (year + 1, 1) } else { (year, month + 1) };
    let next = first_of_month(next_year, next_month)?;
    Ok(next.signed_duration_since(first).num_days() as u32)
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::DateOutOfRange { year, month })
}

/// Build the grid for the given month.
///
/// Fails with a domain error when `year` is outside `[1, 9999]` or `month`
/// outside `[1, 12]`.
#[tracing::instrument(target = "daygrid::grid", level = "trace")]
pub fn build_grid(year: i32, month: u32) -> Result<CalendarGrid> {
    let year = CalendarError::check_year(year)?;
    let month = CalendarError::check_month(month)?;
    let overflow = || CalendarError::DateOutOfRange { year, month };

    let first = first_of_month(year, month)?;
    let mut start = first;
    let mut lead = 0;
    while start.weekday() != Weekday::Mon {
        start = start.pred_opt().ok_or_else(overflow)?;
        lead += 1;
    }

    let mut days = [start; CELL_COUNT];
    for i in 1..CELL_COUNT {
        days[i] = days[i - 1].succ_opt().ok_or_else(overflow)?;
    }

    let month_len = days_in_month(year, month)? as usize;
    let grid = CalendarGrid {
        year,
        month,
        days,
        first_of_month_index: GridIndex(lead),
        last_of_month_index: GridIndex(lead + month_len - 1),
    };

    tracing::debug!(
        target: targets::GRID,
        year,
        month,
        first_of_month_index = lead,
        start = %start,
        "built calendar grid"
    );
    Ok(grid)
}

/// The 42 dates shown for one month, plus where that month sits in them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CalendarGrid {
    year: i32,
    month: u32,
    days: [NaiveDate; CELL_COUNT],
    first_of_month_index: GridIndex,
    last_of_month_index: GridIndex,
}

impl CalendarGrid {
    /// The displayed year.
    pub fn year(&self) -> i32 {
        self.year
    }

    /// The displayed month (1-12).
    pub fn month(&self) -> u32 {
        self.month
    }

    /// All dates in grid order.
    pub fn days(&self) -> &[NaiveDate; CELL_COUNT] {
        &self.days
    }

    /// Grid index of the 1st of the displayed month.
    pub fn first_of_month_index(&self) -> GridIndex {
        self.first_of_month_index
    }

    /// Grid index of the last day of the displayed month.
    pub fn last_of_month_index(&self) -> GridIndex {
        self.last_of_month_index
    }

    /// The 1st of the displayed month.
    pub fn first_day_of_month(&self) -> NaiveDate {
        self.days[self.first_of_month_index.0]
    }

    /// The last day of the displayed month.
    pub fn last_day_of_month(&self) -> NaiveDate {
        self.days[self.last_of_month_index.0]
    }

    /// Number of days in the displayed month.
    pub fn days_in_month(&self) -> u32 {
        (self.last_of_month_index.0 - self.first_of_month_index.0 + 1) as u32
    }

    /// The date at a grid index.
    #[inline]
    pub fn date(&self, index: GridIndex) -> NaiveDate {
        self.days[index.0]
    }

    /// The date at a raw flat index; errors outside `[0, 42)`.
    pub fn date_from_index(&self, index: usize) -> Result<NaiveDate> {
        GridIndex::new(index).map(|i| self.date(i))
    }

    /// The date at a row and column; errors for `row >= 6` or `column >= 7`.
    pub fn date_at(&self, row: usize, column: usize) -> Result<NaiveDate> {
        GridIndex::from_cell(row, column).map(|i| self.date(i))
    }

    /// Whether `date` belongs to the displayed month.
    pub fn is_in_month(&self, date: NaiveDate) -> bool {
        date.year() == self.year && date.month() == self.month
    }

    /// Whether the cell at `index` belongs to the displayed month.
    pub fn is_index_in_month(&self, index: GridIndex) -> bool {
        (self.first_of_month_index..=self.last_of_month_index).contains(&index)
    }

    /// Find the grid index of `date`.
    ///
    /// Dates of the displayed month are located arithmetically. Any other
    /// date is looked up among the out-of-month cells before and after the
    /// month, so a date the grid does not show yields `None`.
    pub fn index_from_date(&self, date: NaiveDate) -> Option<GridIndex> {
        if self.is_in_month(date) {
            let index = self.first_of_month_index.0 + date.day() as usize - 1;
            return (self.days.get(index) == Some(&date)).then_some(GridIndex(index));
        }

        let leading = 0..self.first_of_month_index.0;
        let trailing = self.last_of_month_index.0 + 1..CELL_COUNT;
        leading
            .chain(trailing)
            .find(|&i| self.days[i] == date)
            .map(GridIndex)
    }

    /// Whether the grid shows `date`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.index_from_date(date).is_some()
    }

    /// The date with `day` of the displayed month, clamped to the month's
    /// last day.
    pub fn clamp_day(&self, day: u32) -> NaiveDate {
        let day = day.clamp(1, self.days_in_month());
        self.days[self.first_of_month_index.0 + day as usize - 1]
    }
}
