//! Pixel geometry of the calendar.
//!
//! The control is split vertically into three bands:
//!
//! ```text
//! +--------------------------------------------+
//! |          [<] September 2024 [>]            |  header_height
//! | Mon  Tue  Wed  Thu  Fri  Sat  Sun          |  weekday_row_height
//! +--------------------------------------------+
//! |                                            |
//! |            6 x 7 day cells                 |  the rest
//! |                                            |
//! +--------------------------------------------+
//! ```
//!
//! [`compute_layout`] derives every rectangle from the control size and a set
//! of [`LayoutMetrics`]. The result is a plain value; callers replace their
//! previous geometry with it instead of patching it.

use daygrid_core::logging::targets;
use daygrid_render::{Point, Rect, Size};

use crate::grid::{CELL_COUNT, COLUMNS, GridIndex, ROWS};

/// Default height of the month/year header band.
pub const DEFAULT_HEADER_HEIGHT: f32 = 24.0;
/// Default height of the weekday label strip.
pub const DEFAULT_WEEKDAY_ROW_HEIGHT: f32 = 24.0;
/// Default width of each navigation button.
pub const DEFAULT_NAV_BUTTON_WIDTH: f32 = 16.0;

/// Measurements the layout depends on besides the control size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LayoutMetrics {
    /// Height of the month/year header band.
    pub header_height: f32,
    /// Height of the weekday label strip.
    pub weekday_row_height: f32,
    /// Width of each navigation button.
    pub nav_button_width: f32,
    /// Measured width of the widest "Month Year" label.
    pub label_width: f32,
}

impl Default for LayoutMetrics {
    fn default() -> Self {
        Self {
            header_height: DEFAULT_HEADER_HEIGHT,
            weekday_row_height: DEFAULT_WEEKDAY_ROW_HEIGHT,
            nav_button_width: DEFAULT_NAV_BUTTON_WIDTH,
            label_width: 0.0,
        }
    }
}

impl LayoutMetrics {
    /// Total height above the day grid.
    #[inline]
    pub fn non_client_height(&self) -> f32 {
        self.header_height + self.weekday_row_height
    }
}

/// Interactive parts of the header band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HeaderPart {
    /// The "previous month" button.
    PrevButton,
    /// The "next month" button.
    NextButton,
    /// The month/year label.
    MonthYearLabel,
}

/// Every rectangle of a laid out calendar.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutGeometry {
    /// Size of the whole control.
    pub size: Size,
    /// Header band plus weekday strip.
    pub header: Rect,
    /// The month/year label.
    pub label: Rect,
    /// The "previous month" button, left of the label.
    pub prev_button: Rect,
    /// The "next month" button, right of the label.
    pub next_button: Rect,
    /// The weekday label strip.
    pub weekday_strip: Rect,
    /// The day grid area.
    pub client: Rect,
    /// Size of one day cell.
    pub cell_size: Size,
    cells: [Rect; CELL_COUNT],
}

/// Compute the geometry for a control of `width` x `height` pixels.
///
/// Returns `None` when the size is degenerate: zero or negative width or
/// height, or no room left for the day grid below the header.
pub fn compute_layout(width: f32, height: f32, metrics: &LayoutMetrics) -> Option<LayoutGeometry> {
    if !(width > 0.0 && height > 0.0) {
        tracing::debug!(target: targets::LAYOUT, width, height, "skipping layout for empty size");
        return None;
    }

    let non_client = metrics.non_client_height();
    let client_height = height - non_client;
    if client_height <= 0.0 {
        tracing::debug!(
            target: targets::LAYOUT,
            height,
            non_client,
            "skipping layout, no room for the day grid"
        );
        return None;
    }

    let nav = metrics.nav_button_width.max(0.0);
    let label_width = metrics.label_width.clamp(0.0, (width - 2.0 * nav).max(0.0));
    let label = Rect::new((width - label_width) / 2.0, 0.0, label_width, metrics.header_height);
    let prev_button = Rect::new(label.left() - nav, 0.0, nav, metrics.header_height);
    let next_button = Rect::new(label.right(), 0.0, nav, metrics.header_height);

    let header = Rect::new(0.0, 0.0, width, non_client);
    let weekday_strip = Rect::new(0.0, metrics.header_height, width, metrics.weekday_row_height);
    let client = Rect::new(0.0, non_client, width, client_height);

    let cell_size = Size::new(client.width() / COLUMNS as f32, client.height() / ROWS as f32);
    let mut cells = [Rect::ZERO; CELL_COUNT];
    for index in GridIndex::all() {
        cells[index.get()] = Rect::new(
            client.left() + index.column() as f32 * cell_size.width,
            client.top() + index.row() as f32 * cell_size.height,
            cell_size.width,
            cell_size.height,
        );
    }

    tracing::debug!(
        target: targets::LAYOUT,
        width,
        height,
        cell_width = cell_size.width,
        cell_height = cell_size.height,
        "computed calendar layout"
    );

    Some(LayoutGeometry {
        size: Size::new(width, height),
        header,
        label,
        prev_button,
        next_button,
        weekday_strip,
        client,
        cell_size,
        cells,
    })
}

impl LayoutGeometry {
    /// Bounds of the day cell at `index`.
    #[inline]
    pub fn cell(&self, index: GridIndex) -> Rect {
        self.cells[index.get()]
    }

    /// Bounds of all day cells in grid order.
    pub fn cells(&self) -> &[Rect; CELL_COUNT] {
        &self.cells
    }

    /// Bounds of the weekday label above `column`.
    pub fn weekday_cell(&self, column: usize) -> Rect {
        let width = self.weekday_strip.width() / COLUMNS as f32;
        Rect::new(
            self.weekday_strip.left() + column as f32 * width,
            self.weekday_strip.top(),
            width,
            self.weekday_strip.height(),
        )
    }

    /// Map a point to the day cell under it.
    ///
    /// Points outside the client area map to `None`. Inside it, the computed
    /// row and column are clamped into the grid so floating point rounding at
    /// the far edges never produces an invalid index.
    pub fn index_from_point(&self, point: Point) -> Option<GridIndex> {
        if !self.client.contains(point) {
            return None;
        }
        let column = ((point.x - self.client.left()) / self.cell_size.width).floor();
        let row = ((point.y - self.client.top()) / self.cell_size.height).floor();
        Some(GridIndex::clamped(row.max(0.0) as usize, column.max(0.0) as usize))
    }

    /// Map a point to the header part under it, if any.
    pub fn header_part_at(&self, point: Point) -> Option<HeaderPart> {
        if self.prev_button.contains(point) {
            Some(HeaderPart::PrevButton)
        } else if self.next_button.contains(point) {
            Some(HeaderPart::NextButton)
        } else if self.label.contains(point) {
            Some(HeaderPart::MonthYearLabel)
        } else {
            None
        }
    }
}
