//! Integration tests driving the calendar through its public API and events.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::{Datelike, NaiveDate, Weekday};
use daygrid::prelude::*;
use daygrid::{
    CELL_COUNT, EnterEvent, LeaveEvent, MouseMoveEvent, MousePressEvent, ResizeEvent,
    RecordingToolTip, ToolTipRequest,
};
use parking_lot::Mutex;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn setup(selected: NaiveDate) -> CalendarWidget {
    let _ = tracing_subscriber::fmt()
        .with_env_filter("daygrid=debug")
        .with_test_writer()
        .try_init();
    CalendarWidget::with_date(selected)
        .unwrap()
        .with_size(280.0, 288.0)
}

fn cell_center(calendar: &CalendarWidget, index: usize) -> Point {
    calendar
        .geometry()
        .unwrap()
        .cell(GridIndex::new(index).unwrap())
        .center()
}

fn click(calendar: &mut CalendarWidget, pos: Point) {
    let mut event: WidgetEvent = MousePressEvent::new(MouseButton::Left, pos).into();
    assert!(calendar.handle_event(&mut event));
    assert!(event.is_accepted());
}

fn counter<T: 'static>(signal: &daygrid::Signal<T>) -> Arc<AtomicUsize> {
    let count = Arc::new(AtomicUsize::new(0));
    let count_clone = count.clone();
    signal.connect(move |_| {
        count_clone.fetch_add(1, Ordering::SeqCst);
    });
    count
}

#[test]
fn grid_is_consecutive_and_monday_first() {
    for (year, month) in [(2024, 2), (2023, 10), (2021, 2), (1, 1), (9999, 12)] {
        let calendar = setup(date(year, month, 1));
        let grid = calendar.grid();
        assert_eq!(grid.days().len(), CELL_COUNT);
        assert_eq!(grid.days()[0].weekday(), Weekday::Mon);
        for pair in grid.days().windows(2) {
            assert_eq!(pair[0].succ_opt(), Some(pair[1]));
        }
        assert_eq!(
            grid.date(calendar.first_of_month_index()),
            calendar.first_day_of_month()
        );
    }
}

#[test]
fn leap_february_spans_29_days() {
    let calendar = setup(date(2024, 2, 10));
    let first = calendar.first_of_month_index().get();
    let last = calendar.last_of_month_index().get();
    assert_eq!(last - first, 28);
}

#[test]
fn index_and_date_mapping_round_trips() {
    let calendar = setup(date(2023, 10, 5));
    for index in 0..CELL_COUNT {
        let date = calendar.date_from_index(index).unwrap();
        assert_eq!(calendar.index_from_date(date).map(GridIndex::get), Some(index));
        assert!(calendar.contains(date));
    }
    assert!(calendar.date_from_index(CELL_COUNT).is_err());
    assert!(calendar.date_at(6, 0).is_err());
    assert!(calendar.date_at(0, 7).is_err());
    assert_eq!(calendar.index_from_date(date(2023, 12, 25)), None);
}

#[test]
fn point_mapping() {
    let calendar = setup(date(2024, 2, 10));
    let geometry = calendar.geometry().unwrap();

    assert_eq!(calendar.index_from_point(Point::new(10.0, 10.0)), None);
    assert_eq!(calendar.index_from_point(Point::new(-1.0, 100.0)), None);
    assert_eq!(calendar.index_from_point(Point::new(10.0, 300.0)), None);

    let first = geometry.client.left() + 1.0;
    let top = geometry.client.top() + 1.0;
    assert_eq!(
        calendar.index_from_point(Point::new(first, top)).map(GridIndex::get),
        Some(0)
    );
    assert_eq!(
        calendar.index_from_point(cell_center(&calendar, 41)).map(GridIndex::get),
        Some(41)
    );

    let hit = calendar.hit_test(cell_center(&calendar, 31));
    let day = hit.day().unwrap();
    assert_eq!(day.date, date(2024, 2, 29));
    assert_eq!((day.row, day.column), (4, 3));
    assert!(day.in_displayed_month);
    assert!(calendar.hit_test(Point::new(10.0, 10.0)).is_empty());
}

#[test]
fn set_month_clamps_selected_day() {
    let mut calendar = setup(date(2024, 1, 31));
    calendar.set_month(2).unwrap();
    assert_eq!(calendar.selected_date(), Some(date(2024, 2, 29)));
    assert_eq!(
        calendar.grid().date(calendar.selected_index().unwrap()),
        date(2024, 2, 29)
    );

    calendar.set_year(2023).unwrap();
    assert_eq!(calendar.selected_date(), Some(date(2023, 2, 28)));
}

#[test]
fn frozen_calendar_keeps_year_and_stays_silent() {
    let mut calendar = setup(date(2024, 6, 1));
    let years = counter(&calendar.year_changed);
    let months = counter(&calendar.month_changed);

    calendar.set_frozen(true);
    calendar.set_year(2025).unwrap();
    calendar.set_month(1).unwrap();

    assert_eq!(calendar.year(), 2024);
    assert_eq!(calendar.month(), 6);
    assert_eq!(years.load(Ordering::SeqCst), 0);
    assert_eq!(months.load(Ordering::SeqCst), 0);
}

#[test]
fn navigation_rolls_over_year_boundaries() {
    let mut calendar = setup(date(2024, 1, 15));
    let years = Arc::new(Mutex::new(Vec::new()));
    let years_clone = years.clone();
    calendar.year_changed.connect(move |y| years_clone.lock().push(*y));

    calendar.navigate_prev().unwrap();
    assert_eq!((calendar.year(), calendar.month()), (2023, 12));
    calendar.navigate_next().unwrap();
    assert_eq!((calendar.year(), calendar.month()), (2024, 1));
    assert_eq!(*years.lock(), vec![2023, 2024]);
}

#[test]
fn clicking_nav_buttons_navigates() {
    let mut calendar = setup(date(2024, 12, 31));
    let next_clicks = counter(&calendar.next_clicked);

    let next = calendar.geometry().unwrap().next_button.center();
    click(&mut calendar, next);
    assert_eq!((calendar.year(), calendar.month()), (2025, 1));
    assert_eq!(calendar.selected_date(), Some(date(2025, 1, 31)));
    click(&mut calendar, next);
    assert_eq!(calendar.selected_date(), Some(date(2025, 2, 28)));
    assert_eq!(next_clicks.load(Ordering::SeqCst), 2);
}

#[test]
fn selecting_days_by_click() {
    let mut calendar = setup(date(2024, 2, 10));
    let selections = Arc::new(Mutex::new(Vec::new()));
    let selections_clone = selections.clone();
    calendar
        .selection_changed
        .connect(move |d| selections_clone.lock().push(*d));

    let point = cell_center(&calendar, 20);
    click(&mut calendar, point);
    // Trailing March day, not selectable by default.
    let point = cell_center(&calendar, 35);
    click(&mut calendar, point);
    // The weekday strip is part of the header and leaves the selection alone.
    let strip = calendar.geometry().unwrap().weekday_strip.center();
    click(&mut calendar, strip);

    assert_eq!(*selections.lock(), vec![Some(date(2024, 2, 18))]);
    assert_eq!(calendar.selected_date(), Some(date(2024, 2, 18)));
    assert_eq!(calendar.month(), 2);
}

#[test]
fn set_selected_date_moves_display() {
    let mut calendar = setup(date(2024, 2, 10));
    calendar.set_selected_date(Some(date(2025, 7, 4))).unwrap();
    assert_eq!((calendar.year(), calendar.month()), (2025, 7));
    assert_eq!(calendar.selected_date(), Some(date(2025, 7, 4)));

    calendar.set_selected_date(None).unwrap();
    assert_eq!(calendar.selected_date(), None);
    assert_eq!(calendar.selected_index(), None);

    assert!(calendar.set_selected_date(Some(date(10_000, 1, 1))).is_err());
    assert_eq!(calendar.year(), 2025);
}

#[test]
fn hover_and_tooltip_follow_pointer() {
    let tooltip = RecordingToolTip::new();
    let mut calendar = setup(date(2024, 2, 10)).with_tooltip(tooltip.clone());
    calendar.set_show_date_tooltip(true);
    calendar.set_allow_out_of_month_selection(true);

    calendar.handle_event(&mut EnterEvent::new(cell_center(&calendar, 0)).into());
    assert_eq!(calendar.hovered_index().map(GridIndex::get), Some(0));
    assert_eq!(tooltip.visible_text().as_deref(), Some("2024-01-29"));

    calendar.handle_event(&mut MouseMoveEvent::new(Point::new(5.0, 5.0)).into());
    assert_eq!(calendar.hovered_index(), None);
    assert_eq!(tooltip.last(), Some(ToolTipRequest::Hide));

    calendar.handle_event(&mut MouseMoveEvent::new(cell_center(&calendar, 3)).into());
    assert_eq!(tooltip.visible_text().as_deref(), Some("2024-02-01"));

    calendar.handle_event(&mut LeaveEvent::new().into());
    assert_eq!(calendar.hovered_index(), None);
    assert_eq!(tooltip.visible_text(), None);
}

#[test]
fn tooltip_disabled_by_default() {
    let tooltip = RecordingToolTip::new();
    let mut calendar = setup(date(2024, 2, 10)).with_tooltip(tooltip.clone());
    calendar.handle_event(&mut MouseMoveEvent::new(cell_center(&calendar, 10)).into());
    assert!(tooltip.requests().is_empty());
}

#[test]
fn resize_recomputes_cells() {
    let mut calendar = setup(date(2024, 2, 10));
    let mut event: WidgetEvent =
        ResizeEvent::new(Size::new(280.0, 288.0), Size::new(560.0, 348.0)).into();
    calendar.handle_event(&mut event);

    let geometry = calendar.geometry().unwrap();
    assert_eq!(geometry.cell_size, Size::new(80.0, 50.0));
    assert_eq!(geometry.size, Size::new(560.0, 348.0));
}

#[test]
fn disabled_calendar_ignores_everything() {
    let mut calendar = setup(date(2024, 2, 10));
    let selections = counter(&calendar.selection_changed);
    calendar.set_enabled(false);

    let mut event: WidgetEvent =
        MousePressEvent::new(MouseButton::Left, cell_center(&calendar, 20)).into();
    assert!(!calendar.handle_event(&mut event));
    calendar.navigate_next().unwrap();
    calendar.set_selected_date(None).unwrap();

    assert_eq!(calendar.month(), 2);
    assert_eq!(calendar.selected_date(), Some(date(2024, 2, 10)));
    assert_eq!(selections.load(Ordering::SeqCst), 0);
}
