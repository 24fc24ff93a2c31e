//! Painting of the calendar and the hooks to customize it.
//!
//! A paint pass runs in a fixed order, each step going through a
//! [`CalendarDelegate`] method:
//!
//! 1. header: month/year label, navigation glyphs, weekday labels
//! 2. every day cell ([`CalendarDelegate::paint_day`]), then
//!    [`CalendarDelegate::paint_days`] once
//! 3. the selected day
//! 4. the hovered navigation button
//! 5. the hovered day
//! 6. the separator lines between cells
//!
//! Later steps paint over earlier ones, so the border always stays visible.
//!
//! Every hook has a default implementation calling the free function of the
//! same name in this module. A delegate can replace a step entirely or call
//! the default and draw on top of it:
//!
//! ```ignore
//! struct WeekendDots;
//!
//! impl CalendarDelegate for WeekendDots {
//!     fn paint_day(&self, ctx: &mut CalendarPaintContext<'_>, day: &DayPaintInfo) {
//!         delegate::paint_day(ctx, day);
//!         if day.date.weekday().number_from_monday() >= 6 {
//!             let dot = Rect::new(day.bounds.right() - 6.0, day.bounds.top() + 2.0, 4.0, 4.0);
//!             ctx.renderer().fill_rect(dot, Color::from_rgb8(200, 40, 40));
//!         }
//!     }
//! }
//! ```

use chrono::NaiveDate;
use daygrid_core::PerfSpan;
use daygrid_render::{DashPattern, Point, Rect, Renderer, Stroke, TextAlign};

use crate::config::CalendarBehavior;
use crate::grid::{COLUMNS, CalendarGrid, GridIndex, ROWS};
use crate::layout::LayoutGeometry;
use crate::selection::{HoverState, SelectionState};
use crate::style::CalendarStyle;

/// Glyph drawn in the "previous month" button.
pub const PREV_GLYPH: &str = "<";
/// Glyph drawn in the "next month" button.
pub const NEXT_GLYPH: &str = ">";
/// Inset of the dashed focus rectangle inside the hovered selected day.
pub const FOCUS_RECT_INSET: f32 = 3.0;

/// Everything a delegate needs to know about one day cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayPaintInfo {
    pub index: GridIndex,
    pub date: NaiveDate,
    pub bounds: Rect,
    /// The date belongs to the displayed month.
    pub in_month: bool,
    pub selected: bool,
    pub hovered: bool,
}

/// State and renderer access for one paint pass.
pub struct CalendarPaintContext<'a> {
    renderer: &'a mut dyn Renderer,
    style: &'a CalendarStyle,
    behavior: &'a CalendarBehavior,
    grid: &'a CalendarGrid,
    geometry: &'a LayoutGeometry,
    selection: SelectionState,
    hover: HoverState,
}

impl<'a> CalendarPaintContext<'a> {
    /// Create a paint context.
    pub fn new(
        renderer: &'a mut dyn Renderer,
        style: &'a CalendarStyle,
        behavior: &'a CalendarBehavior,
        grid: &'a CalendarGrid,
        geometry: &'a LayoutGeometry,
        selection: SelectionState,
        hover: HoverState,
    ) -> Self {
        Self {
            renderer,
            style,
            behavior,
            grid,
            geometry,
            selection,
            hover,
        }
    }

    /// Gets the renderer for drawing.
    #[inline]
    pub fn renderer(&mut self) -> &mut dyn Renderer {
        &mut *self.renderer
    }

    #[inline]
    pub fn style(&self) -> &'a CalendarStyle {
        self.style
    }

    #[inline]
    pub fn behavior(&self) -> &'a CalendarBehavior {
        self.behavior
    }

    #[inline]
    pub fn grid(&self) -> &'a CalendarGrid {
        self.grid
    }

    #[inline]
    pub fn geometry(&self) -> &'a LayoutGeometry {
        self.geometry
    }

    #[inline]
    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    #[inline]
    pub fn hover(&self) -> HoverState {
        self.hover
    }

    /// The "Month Year" header text.
    pub fn month_year_label(&self) -> String {
        self.grid.first_day_of_month().format("%B %Y").to_string()
    }

    /// Paint information for the cell at `index`.
    pub fn day_info(&self, index: GridIndex) -> DayPaintInfo {
        let date = self.grid.date(index);
        DayPaintInfo {
            index,
            date,
            bounds: self.geometry.cell(index),
            in_month: self.grid.is_in_month(date),
            selected: self.selection.index() == Some(index),
            hovered: self.hover.index == Some(index),
        }
    }
}

/// Hooks to customize or augment the painting of a calendar.
///
/// Delegates are shared (`Arc`) and must be `Send + Sync`.
pub trait CalendarDelegate: Send + Sync {
    /// Paint the header band and the weekday labels.
    fn paint_header(&self, ctx: &mut CalendarPaintContext<'_>, label: &str) {
        paint_header(ctx, label);
    }

    /// Paint a single day cell.
    fn paint_day(&self, ctx: &mut CalendarPaintContext<'_>, day: &DayPaintInfo) {
        paint_day(ctx, day);
    }

    /// Called once after every day cell has been painted. Does nothing by
    /// default.
    fn paint_days(&self, _ctx: &mut CalendarPaintContext<'_>) {}

    /// Paint the selected day over its regular cell.
    fn paint_selected_day(&self, ctx: &mut CalendarPaintContext<'_>, day: &DayPaintInfo) {
        paint_selected_day(ctx, day);
    }

    /// Paint the hovered day over its regular cell.
    fn paint_hovered_day(&self, ctx: &mut CalendarPaintContext<'_>, day: &DayPaintInfo) {
        paint_hovered_day(ctx, day);
    }

    /// Paint the separator lines between cells.
    fn paint_border(&self, ctx: &mut CalendarPaintContext<'_>) {
        paint_border(ctx);
    }
}

/// The delegate used when none is installed: every hook paints the default.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultCalendarDelegate;

impl CalendarDelegate for DefaultCalendarDelegate {}

/// Run a complete paint pass through `delegate`.
pub fn paint_calendar(delegate: &dyn CalendarDelegate, ctx: &mut CalendarPaintContext<'_>) {
    let _perf = PerfSpan::new("paint_calendar");

    let label = ctx.month_year_label();
    delegate.paint_header(ctx, &label);

    for index in GridIndex::all() {
        let day = ctx.day_info(index);
        delegate.paint_day(ctx, &day);
    }
    delegate.paint_days(ctx);

    if let Some(index) = ctx.selection().index() {
        let day = ctx.day_info(index);
        delegate.paint_selected_day(ctx, &day);
    }

    paint_hovered_nav_buttons(ctx);

    if let Some(index) = ctx.hover().index {
        let day = ctx.day_info(index);
        delegate.paint_hovered_day(ctx, &day);
    }

    delegate.paint_border(ctx);
}

/// Draw the month/year label, the navigation glyphs and the weekday labels.
pub fn paint_header(ctx: &mut CalendarPaintContext<'_>, label: &str) {
    let style = ctx.style();
    let geometry = ctx.geometry();
    let grid = ctx.grid();
    let renderer = ctx.renderer();

    renderer.draw_text(label, &style.font, geometry.label, style.fore_color, TextAlign::CENTER);
    renderer.draw_text(
        PREV_GLYPH,
        &style.font,
        geometry.prev_button,
        style.fore_color,
        TextAlign::CENTER,
    );
    renderer.draw_text(
        NEXT_GLYPH,
        &style.font,
        geometry.next_button,
        style.fore_color,
        TextAlign::CENTER,
    );

    // The first row always runs Monday to Sunday.
    for (column, date) in grid.days().iter().take(COLUMNS).enumerate() {
        let name = date.format("%a").to_string();
        renderer.draw_text(
            &name,
            &style.font,
            geometry.weekday_cell(column),
            style.fore_color,
            TextAlign::CENTER,
        );
    }
}

/// Fill a day cell and draw its number.
///
/// Out-of-month days are skipped unless rendering them is enabled.
pub fn paint_day(ctx: &mut CalendarPaintContext<'_>, day: &DayPaintInfo) {
    let style = ctx.style();
    let (font, fore, back) = if day.in_month {
        (&style.font, style.fore_color, style.back_color)
    } else if ctx.behavior().render_out_of_month_days {
        (
            &style.out_of_month_font,
            style.out_of_month_fore_color,
            style.out_of_month_back_color,
        )
    } else {
        return;
    };

    let text = day_number(day.date);
    let renderer = ctx.renderer();
    renderer.fill_rect(day.bounds, back);
    renderer.draw_text(&text, font, day.bounds, fore, TextAlign::CENTER);
}

/// Paint the selected day with the selection colors.
pub fn paint_selected_day(ctx: &mut CalendarPaintContext<'_>, day: &DayPaintInfo) {
    let style = ctx.style();
    let text = day_number(day.date);
    let renderer = ctx.renderer();
    renderer.fill_rect(day.bounds, style.selected_back_color);
    renderer.draw_text(
        &text,
        &style.font,
        day.bounds,
        style.selected_fore_color,
        TextAlign::CENTER,
    );
}

/// Paint the hovered day.
///
/// Hovering the selected day draws a dashed focus rectangle instead of
/// repainting the cell. Out-of-month days only get a hover highlight when
/// they are both rendered and selectable.
pub fn paint_hovered_day(ctx: &mut CalendarPaintContext<'_>, day: &DayPaintInfo) {
    let style = ctx.style();
    let behavior = ctx.behavior();

    if day.selected {
        let stroke =
            Stroke::new(style.focus_rect_color(), 1.0).with_dash(DashPattern::simple(4.0, 2.0));
        ctx.renderer()
            .stroke_rect(day.bounds.deflate(FOCUS_RECT_INSET), &stroke);
        return;
    }

    if !day.in_month
        && !(behavior.allow_out_of_month_selection && behavior.render_out_of_month_days)
    {
        return;
    }

    let text = day_number(day.date);
    let renderer = ctx.renderer();
    renderer.fill_rect(day.bounds, style.highlight_back_color);
    renderer.draw_text(
        &text,
        &style.highlight_font,
        day.bounds,
        style.highlight_fore_color,
        TextAlign::CENTER,
    );
}

/// Highlight the navigation button under the pointer.
pub fn paint_hovered_nav_buttons(ctx: &mut CalendarPaintContext<'_>) {
    let style = ctx.style();
    let geometry = ctx.geometry();
    let hover = ctx.hover();

    for (hovered, bounds, glyph) in [
        (hover.prev_button, geometry.prev_button, PREV_GLYPH),
        (hover.next_button, geometry.next_button, NEXT_GLYPH),
    ] {
        if !hovered {
            continue;
        }
        let renderer = ctx.renderer();
        renderer.fill_rect(bounds, style.highlight_back_color);
        renderer.draw_text(
            glyph,
            &style.font,
            bounds,
            style.highlight_fore_color,
            TextAlign::CENTER,
        );
    }
}

/// Draw the separator lines between rows and/or columns.
///
/// The outer edges of the grid are left alone: 5 horizontal lines and 6
/// vertical lines at most.
pub fn paint_border(ctx: &mut CalendarPaintContext<'_>) {
    let style = ctx.style();
    let geometry = ctx.geometry();
    let stroke = Stroke::new(style.border_color, style.border_thickness);
    let cell = |row: usize, column: usize| geometry.cell(GridIndex::clamped(row, column));

    if style.border_style.has_horizontal() {
        for row in 0..ROWS - 1 {
            let first = cell(row, 0);
            let last = cell(row, COLUMNS - 1);
            ctx.renderer().draw_line(
                Point::new(first.left(), first.bottom()),
                Point::new(last.right(), last.bottom()),
                &stroke,
            );
        }
    }

    if style.border_style.has_vertical() {
        for column in 0..COLUMNS - 1 {
            let top = cell(0, column);
            let bottom = cell(ROWS - 1, column);
            ctx.renderer().draw_line(
                Point::new(top.right(), top.top()),
                Point::new(bottom.right(), bottom.bottom()),
                &stroke,
            );
        }
    }
}

fn day_number(date: NaiveDate) -> String {
    date.format("%-d").to_string()
}
