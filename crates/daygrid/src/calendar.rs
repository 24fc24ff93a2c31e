//! CalendarWidget: a month view date picker.
//!
//! The widget owns the displayed month, the selection and hover state and
//! the computed layout. The host feeds it [`WidgetEvent`]s, asks it to
//! [`paint`](CalendarWidget::paint) into a [`Renderer`] whenever
//! [`take_repaint_request`](CalendarWidget::take_repaint_request) says so,
//! and listens to its signals.
//!
//! # Example
//!
//! ```ignore
//! use chrono::NaiveDate;
//! use daygrid::CalendarWidget;
//!
//! let mut calendar = CalendarWidget::with_date(NaiveDate::from_ymd_opt(2024, 1, 31).unwrap())?
//!     .with_size(280.0, 288.0);
//!
//! calendar.selection_changed.connect(|date| {
//!     if let Some(d) = date {
//!         println!("Selected: {}", d);
//!     }
//! });
//!
//! calendar.set_month(2)?; // selection becomes 2024-02-29
//! ```

use std::fmt::Write as _;
use std::sync::Arc;

use chrono::{Datelike, Local, NaiveDate};
use daygrid_core::logging::targets;
use daygrid_core::{CalendarError, PerfSpan, Result, Signal};
use daygrid_render::{Font, HeuristicTextMeasure, Point, Renderer, Size, TextMeasure};

use crate::config::{
    CalendarBehavior, CalendarConfig, ConfigError, DEFAULT_TOOLTIP_FORMAT, validate_date_format,
};
use crate::delegate::{self, CalendarDelegate, CalendarPaintContext, DefaultCalendarDelegate};
use crate::events::{MouseButton, MousePressEvent, WidgetEvent};
use crate::grid::{CalendarGrid, GridIndex, build_grid};
use crate::hit_test::{self, HitResult};
use crate::layout::{HeaderPart, LayoutGeometry, compute_layout};
use crate::selection::{HoverState, SelectionState};
use crate::style::{BorderStyle, CalendarStyle};
use crate::tooltip::ToolTip;

/// A calendar widget for selecting dates.
///
/// Shows one month as a Monday-first 6x7 grid with a month/year header and
/// previous/next buttons.
///
/// # Signals
///
/// - `selection_changed(Option<NaiveDate>)`: the selected date changed
/// - `year_changed(i32)`: the displayed year changed
/// - `month_changed(u32)`: the displayed month changed
/// - `prev_clicked(())`: the "previous month" button was clicked
/// - `next_clicked(())`: the "next month" button was clicked
/// - `month_year_clicked(())`: the month/year label was clicked
///
/// The button signals fire on every click, even while the widget is frozen.
pub struct CalendarWidget {
    grid: CalendarGrid,
    /// `None` until the widget has been given a usable size.
    geometry: Option<LayoutGeometry>,
    size: Size,

    style: CalendarStyle,
    behavior: CalendarBehavior,
    enabled: bool,

    selection: SelectionState,
    hover: HoverState,

    measure: Box<dyn TextMeasure + Send + Sync>,
    delegate: Arc<dyn CalendarDelegate>,
    tooltip: Option<Box<dyn ToolTip>>,

    needs_repaint: bool,

    /// Signal emitted when the selection changes.
    pub selection_changed: Signal<Option<NaiveDate>>,
    /// Signal emitted when the displayed year changes.
    pub year_changed: Signal<i32>,
    /// Signal emitted when the displayed month changes.
    pub month_changed: Signal<u32>,
    /// Signal emitted when the "previous month" button is clicked.
    pub prev_clicked: Signal<()>,
    /// Signal emitted when the "next month" button is clicked.
    pub next_clicked: Signal<()>,
    /// Signal emitted when the month/year label is clicked.
    pub month_year_clicked: Signal<()>,
}

impl std::fmt::Debug for CalendarWidget {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CalendarWidget")
            .field("year", &self.grid.year())
            .field("month", &self.grid.month())
            .field("size", &self.size)
            .field("enabled", &self.enabled)
            .field("selection", &self.selection)
            .field("hover", &self.hover)
            .finish_non_exhaustive()
    }
}

impl CalendarWidget {
    /// Create a calendar showing and selecting today's date.
    pub fn new() -> Result<Self> {
        Self::with_date(Local::now().date_naive())
    }

    /// Create a calendar showing and selecting `date`.
    pub fn with_date(date: NaiveDate) -> Result<Self> {
        let grid = build_grid(date.year(), date.month())?;
        let selection = SelectionState::for_date(&grid, Some(date));
        Ok(Self {
            grid,
            geometry: None,
            size: Size::ZERO,
            style: CalendarStyle::default(),
            behavior: CalendarBehavior::default(),
            enabled: true,
            selection,
            hover: HoverState::default(),
            measure: Box::new(HeuristicTextMeasure::default()),
            delegate: Arc::new(DefaultCalendarDelegate),
            tooltip: None,
            needs_repaint: true,
            selection_changed: Signal::new(),
            year_changed: Signal::new(),
            month_changed: Signal::new(),
            prev_clicked: Signal::new(),
            next_clicked: Signal::new(),
            month_year_clicked: Signal::new(),
        })
    }

    /// Set the widget size using builder pattern.
    pub fn with_size(mut self, width: f32, height: f32) -> Self {
        self.resize(Size::new(width, height));
        self
    }

    /// Set the style using builder pattern.
    ///
    /// The style is taken as is; use [`set_style`](Self::set_style) to
    /// validate it.
    pub fn with_style(mut self, style: CalendarStyle) -> Self {
        self.style = style;
        self.relayout();
        self
    }

    /// Set the behavior switches using builder pattern.
    pub fn with_behavior(mut self, behavior: CalendarBehavior) -> Self {
        self.behavior = behavior;
        self
    }

    /// Apply a loaded configuration using builder pattern.
    pub fn with_config(self, config: CalendarConfig) -> Self {
        self.with_behavior(config.behavior).with_style(config.style)
    }

    /// Install a painting delegate using builder pattern.
    pub fn with_delegate(mut self, delegate: Arc<dyn CalendarDelegate>) -> Self {
        self.delegate = delegate;
        self
    }

    /// Install the tooltip used for date tooltips using builder pattern.
    pub fn with_tooltip(mut self, tooltip: impl ToolTip + 'static) -> Self {
        self.tooltip = Some(Box::new(tooltip));
        self
    }

    /// Install the text measurer used to size the month/year label.
    pub fn with_text_measure(mut self, measure: impl TextMeasure + Send + Sync + 'static) -> Self {
        self.measure = Box::new(measure);
        self.relayout();
        self
    }

    // =========================================================================
    // Displayed Month
    // =========================================================================

    /// The displayed year.
    pub fn year(&self) -> i32 {
        self.grid.year()
    }

    /// The displayed month (1 to 12).
    pub fn month(&self) -> u32 {
        self.grid.month()
    }

    /// The current date grid.
    pub fn grid(&self) -> &CalendarGrid {
        &self.grid
    }

    /// The current layout, `None` until the widget has a usable size.
    pub fn geometry(&self) -> Option<&LayoutGeometry> {
        self.geometry.as_ref()
    }

    /// The widget size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Day 1 of the displayed month.
    pub fn first_day_of_month(&self) -> NaiveDate {
        self.grid.first_day_of_month()
    }

    /// The last day of the displayed month.
    pub fn last_day_of_month(&self) -> NaiveDate {
        self.grid.last_day_of_month()
    }

    /// Grid index of day 1 of the displayed month.
    pub fn first_of_month_index(&self) -> GridIndex {
        self.grid.first_of_month_index()
    }

    /// Grid index of the last day of the displayed month.
    pub fn last_of_month_index(&self) -> GridIndex {
        self.grid.last_of_month_index()
    }

    /// The localized "Month Year" header text.
    pub fn month_year_label(&self) -> String {
        month_year_label(self.grid.first_day_of_month())
    }

    /// Show `year`, keeping the displayed month.
    ///
    /// Ignored while frozen or disabled. An out-of-range year is an error and
    /// changes nothing.
    pub fn set_year(&mut self, year: i32) -> Result<()> {
        if self.is_locked() {
            tracing::trace!(target: targets::SELECTION, year, "widget locked, ignoring set_year");
            return Ok(());
        }
        CalendarError::check_year(year)?;
        if year == self.grid.year() {
            return Ok(());
        }
        self.show_month(year, self.grid.month(), None)
    }

    /// Show `month` of the displayed year.
    ///
    /// Ignored while frozen or disabled. An out-of-range month is an error
    /// and changes nothing.
    pub fn set_month(&mut self, month: u32) -> Result<()> {
        if self.is_locked() {
            tracing::trace!(target: targets::SELECTION, month, "widget locked, ignoring set_month");
            return Ok(());
        }
        CalendarError::check_month(month)?;
        if month == self.grid.month() {
            return Ok(());
        }
        self.show_month(self.grid.year(), month, None)
    }

    /// Show the previous month, rolling January back to December of the
    /// previous year.
    pub fn navigate_prev(&mut self) -> Result<()> {
        if self.is_locked() {
            return Ok(());
        }
        let (year, month) = match self.grid.month() {
            1 => (self.grid.year() - 1, 12),
            month => (self.grid.year(), month - 1),
        };
        self.show_month(year, month, None)
    }

    /// Show the next month, rolling December over to January of the next
    /// year.
    pub fn navigate_next(&mut self) -> Result<()> {
        if self.is_locked() {
            return Ok(());
        }
        let (year, month) = match self.grid.month() {
            12 => (self.grid.year() + 1, 1),
            month => (self.grid.year(), month + 1),
        };
        self.show_month(year, month, None)
    }

    // =========================================================================
    // Selection
    // =========================================================================

    /// The selected date.
    pub fn selected_date(&self) -> Option<NaiveDate> {
        self.selection.date()
    }

    /// The grid index of the selected date.
    pub fn selected_index(&self) -> Option<GridIndex> {
        self.selection.index()
    }

    /// The selection state, with its cached grid index.
    pub fn selection(&self) -> SelectionState {
        self.selection
    }

    /// Select `date`, showing its month, or clear the selection.
    ///
    /// Ignored while frozen or disabled. A date whose year is out of range is
    /// an error and changes nothing.
    pub fn set_selected_date(&mut self, date: Option<NaiveDate>) -> Result<()> {
        if self.is_locked() {
            tracing::trace!(target: targets::SELECTION, "widget locked, ignoring set_selected_date");
            return Ok(());
        }
        let Some(date) = date else {
            self.apply_selection(SelectionState::NoSelection);
            return Ok(());
        };

        let year = CalendarError::check_year(date.year())?;
        let month = date.month();
        if (year, month) != (self.grid.year(), self.grid.month()) {
            return self.show_month(year, month, Some(date));
        }
        self.apply_selection(SelectionState::for_date(&self.grid, Some(date)));
        Ok(())
    }

    /// Select the day under `point`, as a click does.
    ///
    /// A point outside the day grid clears the selection. Days of the
    /// previous or next month are ignored unless out-of-month selection is
    /// allowed; selecting one does not change the displayed month. Returns
    /// whether the selection changed.
    pub fn select_at(&mut self, point: Point) -> bool {
        if !self.enabled {
            return false;
        }
        let selection = match self.hit_test(point) {
            HitResult::Empty => SelectionState::NoSelection,
            HitResult::Day(hit)
                if !hit.in_displayed_month && !self.behavior.allow_out_of_month_selection =>
            {
                tracing::trace!(target: targets::SELECTION, date = %hit.date, "out-of-month day not selectable");
                return false;
            }
            HitResult::Day(hit) => SelectionState::at(&self.grid, hit.index),
        };
        self.apply_selection(selection)
    }

    // =========================================================================
    // Mapping
    // =========================================================================

    /// The day cell under `point`, `None` outside the day grid.
    pub fn index_from_point(&self, point: Point) -> Option<GridIndex> {
        self.geometry.as_ref()?.index_from_point(point)
    }

    /// The date at a raw grid index.
    pub fn date_from_index(&self, index: usize) -> Result<NaiveDate> {
        self.grid.date_from_index(index)
    }

    /// The date at a row and column of the grid.
    pub fn date_at(&self, row: usize, column: usize) -> Result<NaiveDate> {
        self.grid.date_at(row, column)
    }

    /// The grid index showing `date`, if the grid shows it.
    pub fn index_from_date(&self, date: NaiveDate) -> Option<GridIndex> {
        self.grid.index_from_date(date)
    }

    /// Whether the grid shows `date`.
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.grid.contains(date)
    }

    /// Describe the day cell under `point`.
    pub fn hit_test(&self, point: Point) -> HitResult {
        match &self.geometry {
            Some(geometry) => hit_test::hit_test(&self.grid, geometry, point),
            None => HitResult::Empty,
        }
    }

    /// The hovered day cell.
    pub fn hovered_index(&self) -> Option<GridIndex> {
        self.hover.index
    }

    /// What the pointer is over: a day cell or a navigation button.
    pub fn hover(&self) -> HoverState {
        self.hover
    }

    // =========================================================================
    // Behavior & Style
    // =========================================================================

    /// Whether the widget accepts input.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable the widget. A disabled widget ignores input and
    /// every mutation of its month and selection.
    pub fn set_enabled(&mut self, enabled: bool) {
        if self.enabled == enabled {
            return;
        }
        self.enabled = enabled;
        if !enabled {
            self.hover.clear();
            self.hide_tooltip();
        }
        self.request_repaint();
    }

    /// Whether the displayed month and the selected date are frozen.
    pub fn is_frozen(&self) -> bool {
        self.behavior.freeze
    }

    /// Freeze or unfreeze the displayed month and the selected date.
    pub fn set_frozen(&mut self, frozen: bool) {
        self.behavior.freeze = frozen;
    }

    /// The behavior switches.
    pub fn behavior(&self) -> &CalendarBehavior {
        &self.behavior
    }

    /// Replace every behavior switch.
    pub fn set_behavior(
        &mut self,
        behavior: CalendarBehavior,
    ) -> std::result::Result<(), ConfigError> {
        behavior.validate()?;
        if !behavior.show_date_tooltip {
            self.hide_tooltip();
        }
        self.behavior = behavior;
        self.request_repaint();
        Ok(())
    }

    /// Allow clicking days of the previous or next month to select them.
    pub fn set_allow_out_of_month_selection(&mut self, allow: bool) {
        if self.behavior.allow_out_of_month_selection != allow {
            self.behavior.allow_out_of_month_selection = allow;
            self.request_repaint();
        }
    }

    /// Draw or hide the days of the previous and next month.
    pub fn set_render_out_of_month_days(&mut self, render: bool) {
        if self.behavior.render_out_of_month_days != render {
            self.behavior.render_out_of_month_days = render;
            self.request_repaint();
        }
    }

    /// Show or hide the date tooltip over the hovered day.
    pub fn set_show_date_tooltip(&mut self, show: bool) {
        if !show {
            self.hide_tooltip();
        }
        self.behavior.show_date_tooltip = show;
        if show {
            self.update_tooltip();
        }
    }

    /// Set the `chrono` strftime format of the date tooltip.
    pub fn set_tooltip_format(&mut self, format: &str) -> std::result::Result<(), ConfigError> {
        validate_date_format(format)?;
        self.behavior.tooltip_format = format.to_string();
        Ok(())
    }

    /// The visual style.
    pub fn style(&self) -> &CalendarStyle {
        &self.style
    }

    /// Replace the style and recompute the layout.
    pub fn set_style(&mut self, style: CalendarStyle) -> std::result::Result<(), ConfigError> {
        style.validate()?;
        self.style = style;
        self.relayout();
        self.request_repaint();
        Ok(())
    }

    /// Choose which separator lines are drawn between day cells.
    pub fn set_border_style(&mut self, border_style: BorderStyle) {
        if self.style.border_style != border_style {
            self.style.border_style = border_style;
            self.request_repaint();
        }
    }

    /// Change the main font. The month/year label is measured again and the
    /// layout recomputed.
    pub fn set_font(&mut self, font: Font) {
        self.style.font = font;
        self.relayout();
        self.request_repaint();
    }

    /// Resize the widget and recompute the layout.
    ///
    /// A degenerate size keeps the previous layout.
    pub fn resize(&mut self, size: Size) {
        self.size = size;
        self.relayout();
    }

    // =========================================================================
    // Repaint
    // =========================================================================

    /// Whether a repaint has been requested since the last
    /// [`take_repaint_request`](Self::take_repaint_request).
    pub fn needs_repaint(&self) -> bool {
        self.needs_repaint
    }

    /// Consume the pending repaint request. Any number of state changes
    /// between two calls coalesce into a single request.
    pub fn take_repaint_request(&mut self) -> bool {
        std::mem::take(&mut self.needs_repaint)
    }

    fn request_repaint(&mut self) {
        self.needs_repaint = true;
    }

    // =========================================================================
    // Event Handling
    // =========================================================================

    /// Handle an input event. Returns `true` and accepts the event when the
    /// widget handled it.
    pub fn handle_event(&mut self, event: &mut WidgetEvent) -> bool {
        let handled = match event {
            WidgetEvent::MousePress(e) => self.handle_mouse_press(e),
            WidgetEvent::MouseMove(e) => self.handle_mouse_move(e.local_pos),
            WidgetEvent::Enter(e) => self.handle_mouse_move(e.local_pos),
            WidgetEvent::Leave(_) => self.handle_leave(),
            WidgetEvent::Resize(e) => {
                self.resize(e.new_size);
                true
            }
            WidgetEvent::FontChange(e) => {
                self.set_font(e.font.clone());
                true
            }
        };
        if handled {
            event.accept();
        }
        handled
    }

    fn handle_mouse_press(&mut self, event: &MousePressEvent) -> bool {
        if !self.enabled || event.button != MouseButton::Left {
            return false;
        }
        let Some(geometry) = &self.geometry else {
            return false;
        };

        match geometry.header_part_at(event.local_pos) {
            Some(HeaderPart::PrevButton) => {
                self.prev_clicked.emit(());
                if let Err(err) = self.navigate_prev() {
                    tracing::warn!(target: targets::WIDGET, error = %err, "cannot show previous month");
                }
            }
            Some(HeaderPart::NextButton) => {
                self.next_clicked.emit(());
                if let Err(err) = self.navigate_next() {
                    tracing::warn!(target: targets::WIDGET, error = %err, "cannot show next month");
                }
            }
            Some(HeaderPart::MonthYearLabel) => {
                self.month_year_clicked.emit(());
            }
            None if geometry.client.contains(event.local_pos) => {
                self.select_at(event.local_pos);
            }
            None => {}
        }
        true
    }

    fn handle_mouse_move(&mut self, pos: Point) -> bool {
        if !self.enabled {
            return false;
        }

        let mut hover = HoverState::default();
        if let Some(geometry) = &self.geometry {
            hover.index = geometry.index_from_point(pos);
            match geometry.header_part_at(pos) {
                Some(HeaderPart::PrevButton) => hover.prev_button = true,
                Some(HeaderPart::NextButton) => hover.next_button = true,
                _ => {}
            }
        }

        if hover != self.hover {
            let index_changed = hover.index != self.hover.index;
            self.hover = hover;
            self.request_repaint();
            if index_changed {
                self.update_tooltip();
            }
        }
        true
    }

    fn handle_leave(&mut self) -> bool {
        if !self.enabled {
            return false;
        }
        if self.hover != HoverState::default() {
            self.hover.clear();
            self.request_repaint();
        }
        self.hide_tooltip();
        true
    }

    // =========================================================================
    // Painting
    // =========================================================================

    /// Paint the whole calendar through the installed delegate.
    ///
    /// Nothing is painted until the widget has a usable size.
    pub fn paint(&self, renderer: &mut dyn Renderer) {
        let Some(geometry) = &self.geometry else {
            tracing::trace!(target: targets::WIDGET, "no layout yet, skipping paint");
            return;
        };
        let mut ctx = CalendarPaintContext::new(
            renderer,
            &self.style,
            &self.behavior,
            &self.grid,
            geometry,
            self.selection,
            self.hover,
        );
        delegate::paint_calendar(self.delegate.as_ref(), &mut ctx);
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn is_locked(&self) -> bool {
        !self.enabled || self.behavior.freeze
    }

    /// Rebuild the grid for `year`/`month` and recompute the layout.
    ///
    /// The new selection is `select` when given, otherwise the current
    /// selection carried over to the new month. Signals are emitted once the
    /// new state is in place: year, then month, then selection.
    fn show_month(&mut self, year: i32, month: u32, select: Option<NaiveDate>) -> Result<()> {
        let _perf = PerfSpan::new("show_month");

        let grid = build_grid(year, month)?;
        let selection = match select {
            Some(date) => SelectionState::for_date(&grid, Some(date)),
            None => self.selection.reanchor(&grid),
        };

        let year_changed = grid.year() != self.grid.year();
        let month_changed = grid.month() != self.grid.month();
        let selection_changed = selection.date() != self.selection.date();

        self.grid = grid;
        self.selection = selection;
        self.relayout();
        self.request_repaint();

        tracing::debug!(
            target: targets::SELECTION,
            year,
            month,
            selected = ?self.selection.date(),
            "displayed month changed"
        );

        if year_changed {
            self.year_changed.emit(year);
        }
        if month_changed {
            self.month_changed.emit(month);
        }
        if selection_changed {
            self.selection_changed.emit(self.selection.date());
        }
        Ok(())
    }

    fn apply_selection(&mut self, selection: SelectionState) -> bool {
        if selection == self.selection {
            return false;
        }
        let date_changed = selection.date() != self.selection.date();
        self.selection = selection;
        self.request_repaint();
        tracing::debug!(target: targets::SELECTION, selected = ?selection.date(), "selection changed");
        if date_changed {
            self.selection_changed.emit(selection.date());
        }
        true
    }

    /// Measure the widest month/year label of the displayed year and lay the
    /// widget out again.
    fn relayout(&mut self) {
        let label_width = (1..=12)
            .filter_map(|month| NaiveDate::from_ymd_opt(self.grid.year(), month, 1))
            .map(|first| {
                self.measure
                    .measure_text(&month_year_label(first), &self.style.font)
                    .width
            })
            .fold(0.0_f32, f32::max);

        let metrics = self.style.layout_metrics(label_width);
        match compute_layout(self.size.width, self.size.height, &metrics) {
            Some(geometry) => {
                self.geometry = Some(geometry);
                self.request_repaint();
            }
            None => {
                tracing::debug!(
                    target: targets::WIDGET,
                    width = self.size.width,
                    height = self.size.height,
                    "keeping previous layout"
                );
            }
        }
    }

    fn update_tooltip(&mut self) {
        if !self.behavior.show_date_tooltip || self.tooltip.is_none() {
            return;
        }

        let request = match (self.hover.index, &self.geometry) {
            (Some(index), Some(geometry)) => {
                let date = self.grid.date(index);
                let selectable = self.grid.is_in_month(date)
                    || (self.behavior.allow_out_of_month_selection
                        && self.behavior.render_out_of_month_days);
                selectable.then(|| (self.format_tooltip(date), geometry.cell(index).bottom_left()))
            }
            _ => None,
        };

        if let Some(tooltip) = self.tooltip.as_mut() {
            match request {
                Some((text, anchor)) => tooltip.show(&text, anchor),
                None => tooltip.hide(),
            }
        }
    }

    fn hide_tooltip(&mut self) {
        if let Some(tooltip) = self.tooltip.as_mut() {
            tooltip.hide();
        }
    }

    fn format_tooltip(&self, date: NaiveDate) -> String {
        let mut text = String::new();
        if write!(text, "{}", date.format(&self.behavior.tooltip_format)).is_err() {
            tracing::warn!(
                target: targets::WIDGET,
                format = %self.behavior.tooltip_format,
                "invalid tooltip format, using the default"
            );
            text = date.format(DEFAULT_TOOLTIP_FORMAT).to_string();
        }
        text
    }
}

fn month_year_label(first: NaiveDate) -> String {
    first.format("%B %Y").to_string()
}

// Ensure CalendarWidget is Send + Sync
static_assertions::assert_impl_all!(CalendarWidget: Send, Sync);
