//! daygrid - a toolkit-neutral calendar / date-picker widget core.
//!
//! The widget shows one month as a Monday-first grid of 6 rows by 7 columns,
//! padded with the trailing days of the previous month and the leading days
//! of the next one. It computes its own layout, paints itself through a
//! [`Renderer`](daygrid_render::Renderer) the host provides and turns mouse
//! events into hover, selection and navigation.
//!
//! # Example
//!
//! ```no_run
//! use chrono::NaiveDate;
//! use daygrid::prelude::*;
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let date = NaiveDate::from_ymd_opt(2024, 2, 14).ok_or("invalid date")?;
//!     let mut calendar = CalendarWidget::with_date(date)?.with_size(280.0, 288.0);
//!
//!     calendar.month_changed.connect(|month| println!("now showing month {month}"));
//!     calendar.navigate_next()?;
//!
//!     let mut renderer = RecordingRenderer::new();
//!     calendar.paint(&mut renderer);
//!     Ok(())
//! }
//! ```

pub mod calendar;
pub mod config;
pub mod delegate;
pub mod events;
pub mod grid;
pub mod layout;
pub mod selection;
pub mod style;
pub mod tooltip;

pub use daygrid_core::*;

/// Geometry, colors, fonts and the renderer capability.
pub mod render {
    pub use daygrid_render::*;
}

pub use calendar::CalendarWidget;
pub use config::{CalendarBehavior, CalendarConfig, ConfigError, DEFAULT_TOOLTIP_FORMAT};
pub use delegate::{CalendarDelegate, CalendarPaintContext, DayPaintInfo, DefaultCalendarDelegate};
pub use events::{
    EnterEvent, EventBase, FontChangeEvent, LeaveEvent, MouseButton, MouseMoveEvent,
    MousePressEvent, ResizeEvent, WidgetEvent,
};
pub use grid::{CELL_COUNT, COLUMNS, CalendarGrid, GridIndex, ROWS, build_grid, days_in_month};
pub use hit_test::{DayHit, HitResult};
pub use layout::{HeaderPart, LayoutGeometry, LayoutMetrics, compute_layout};
pub use selection::{HoverState, SelectionState};
pub use style::{BorderStyle, CalendarStyle};
pub use tooltip::{RecordingToolTip, ToolTip, ToolTipRequest};

/// The types most hosts need.
pub mod prelude {
    pub use crate::render::{
        Color, Font, FontFamily, Point, Rect, RecordingRenderer, Renderer, Size, TextMeasure,
    };
    pub use crate::{
        BorderStyle, CalendarBehavior, CalendarConfig, CalendarDelegate, CalendarError,
        CalendarPaintContext, CalendarStyle, CalendarWidget, DayPaintInfo, GridIndex, HitResult,
        MouseButton, ToolTip, WidgetEvent,
    };
}
