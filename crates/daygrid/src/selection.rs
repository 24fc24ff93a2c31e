//! Selection and hover state.

use chrono::{Datelike, NaiveDate};

use crate::grid::{CalendarGrid, GridIndex};

/// The selected day, if any.
///
/// A selection always caches the grid index of its date, and
/// `grid.date(index) == date` holds for the grid it was created against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionState {
    /// Nothing is selected.
    #[default]
    NoSelection,
    /// `date` is selected and shown at `index`.
    Selected { date: NaiveDate, index: GridIndex },
}

impl SelectionState {
    /// Select the cell at `index`.
    pub fn at(grid: &CalendarGrid, index: GridIndex) -> Self {
        Self::Selected {
            date: grid.date(index),
            index,
        }
    }

    /// Select `date` if the grid shows it, otherwise select nothing.
    pub fn for_date(grid: &CalendarGrid, date: Option<NaiveDate>) -> Self {
        date.and_then(|date| grid.index_from_date(date))
            .map_or(Self::NoSelection, |index| Self::at(grid, index))
    }

    /// Carry this selection over to a freshly built grid.
    ///
    /// The selected day-of-month is kept and clamped to the new month's
    /// length, so the 31st becomes the 29th when moving to a leap February.
    pub fn reanchor(self, grid: &CalendarGrid) -> Self {
        match self {
            Self::NoSelection => Self::NoSelection,
            Self::Selected { date, .. } => {
                Self::for_date(grid, Some(grid.clamp_day(date.day())))
            }
        }
    }

    /// The selected date.
    pub fn date(&self) -> Option<NaiveDate> {
        match self {
            Self::NoSelection => None,
            Self::Selected { date, .. } => Some(*date),
        }
    }

    /// The grid index of the selected date.
    pub fn index(&self) -> Option<GridIndex> {
        match self {
            Self::NoSelection => None,
            Self::Selected { index, .. } => Some(*index),
        }
    }

    /// Whether a day is selected.
    pub fn is_selected(&self) -> bool {
        matches!(self, Self::Selected { .. })
    }
}

/// What the pointer is currently over.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HoverState {
    /// The hovered day cell.
    pub index: Option<GridIndex>,
    /// The pointer is over the "previous month" button.
    pub prev_button: bool,
    /// The pointer is over the "next month" button.
    pub next_button: bool,
}

impl HoverState {
    /// Forget everything; the pointer left the control.
    pub fn clear(&mut self) {
        *self = Self::default();
    }
}
