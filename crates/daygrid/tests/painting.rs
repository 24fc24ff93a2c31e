//! Integration tests for painting through the recording renderer.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use chrono::NaiveDate;
use daygrid::delegate;
use daygrid::prelude::*;
use daygrid::render::DrawCommand;
use daygrid::{MouseMoveEvent, MousePressEvent};

fn setup() -> CalendarWidget {
    let date = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
    CalendarWidget::with_date(date)
        .unwrap()
        .with_size(280.0, 288.0)
}

fn paint(calendar: &CalendarWidget) -> RecordingRenderer {
    let mut renderer = RecordingRenderer::new();
    calendar.paint(&mut renderer);
    renderer
}

fn cell(calendar: &CalendarWidget, index: usize) -> Rect {
    calendar
        .geometry()
        .unwrap()
        .cell(GridIndex::new(index).unwrap())
}

#[test]
fn paints_header_then_days_then_border() {
    let calendar = setup();
    let renderer = paint(&calendar);
    let texts = renderer.texts();

    assert_eq!(texts[0], "February 2024");
    assert_eq!(&texts[3..10], &["Mon", "Tue", "Wed", "Thu", "Fri", "Sat", "Sun"]);
    // Day numbers in grid order, starting with the trailing January days.
    assert_eq!(&texts[10..14], &["29", "30", "31", "1"]);
    // The selected day is painted again on top.
    assert_eq!(texts.last().copied(), Some("14"));
    assert_eq!(renderer.line_count(), 11);
    assert!(matches!(renderer.commands().last(), Some(DrawCommand::Line { .. })));
}

#[test]
fn selected_and_hovered_cells() {
    let mut calendar = setup();
    let style = calendar.style().clone();

    let renderer = paint(&calendar);
    assert_eq!(renderer.fills_with(style.selected_back_color), vec![cell(&calendar, 16)]);

    let mut custom = style.clone();
    custom.highlight_back_color = Color::from_rgb8(0xFF, 0xF0, 0xC0);
    calendar.set_style(custom).unwrap();

    let pos = cell(&calendar, 20).center();
    calendar.handle_event(&mut MouseMoveEvent::new(pos).into());
    let renderer = paint(&calendar);
    assert_eq!(
        renderer.fills_with(Color::from_rgb8(0xFF, 0xF0, 0xC0)),
        vec![cell(&calendar, 20)]
    );
}

#[test]
fn hovering_selection_draws_dashed_focus_rect() {
    let mut calendar = setup();
    let pos = cell(&calendar, 16).center();
    calendar.handle_event(&mut MouseMoveEvent::new(pos).into());

    let renderer = paint(&calendar);
    let focus: Vec<_> = renderer
        .commands()
        .iter()
        .filter_map(|command| match command {
            DrawCommand::StrokeRect { rect, stroke } => Some((*rect, stroke.is_dashed())),
            _ => None,
        })
        .collect();
    assert_eq!(focus, vec![(cell(&calendar, 16).deflate(3.0), true)]);
}

#[test]
fn border_styles() {
    let mut calendar = setup();
    for (style, lines) in [
        (BorderStyle::Both, 11),
        (BorderStyle::Horizontal, 5),
        (BorderStyle::Vertical, 6),
        (BorderStyle::None, 0),
    ] {
        calendar.set_border_style(style);
        assert_eq!(paint(&calendar).line_count(), lines, "{style:?}");
    }
}

#[test]
fn out_of_month_days_can_be_hidden() {
    let mut calendar = setup();
    calendar.set_render_out_of_month_days(false);
    let renderer = paint(&calendar);
    // Header (10) + the 29 days of February + the selected day.
    assert_eq!(renderer.texts().len(), 10 + 29 + 1);
}

#[test]
fn custom_delegate_hooks_are_called() {
    #[derive(Default)]
    struct Counting {
        days: AtomicUsize,
        after_days: AtomicUsize,
    }

    impl CalendarDelegate for Counting {
        fn paint_day(&self, ctx: &mut CalendarPaintContext<'_>, day: &DayPaintInfo) {
            self.days.fetch_add(1, Ordering::SeqCst);
            delegate::paint_day(ctx, day);
        }

        fn paint_days(&self, ctx: &mut CalendarPaintContext<'_>) {
            self.after_days.fetch_add(1, Ordering::SeqCst);
            let bounds = ctx.geometry().client;
            ctx.renderer().stroke_rect(bounds, &daygrid::render::Stroke::default());
        }
    }

    let counting = Arc::new(Counting::default());
    let calendar = setup().with_delegate(counting.clone());
    let renderer = paint(&calendar);

    assert_eq!(counting.days.load(Ordering::SeqCst), 42);
    assert_eq!(counting.after_days.load(Ordering::SeqCst), 1);
    assert!(renderer
        .commands()
        .iter()
        .any(|command| matches!(command, DrawCommand::StrokeRect { .. })));
}

#[test]
fn nothing_painted_before_first_resize() {
    let date = NaiveDate::from_ymd_opt(2024, 2, 14).unwrap();
    let mut calendar = CalendarWidget::with_date(date).unwrap();
    assert!(paint(&calendar).commands().is_empty());

    // Clicks before layout are not handled either.
    let mut event: WidgetEvent =
        MousePressEvent::new(MouseButton::Left, Point::new(10.0, 100.0)).into();
    assert!(!calendar.handle_event(&mut event));
}
