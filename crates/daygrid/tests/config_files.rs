//! Integration tests for configuration files applied to a widget.

use chrono::NaiveDate;
use daygrid::prelude::*;
use daygrid::{ConfigError, RecordingToolTip};

const CONFIG: &str = r##"
[behavior]
allow_out_of_month_selection = true
show_date_tooltip = true
tooltip_format = "%d/%m/%Y"

[style]
border_style = "vertical"
border_thickness = 2.0
selected_back_color = "#2E7D32"
header_height = 30.0
"##;

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

#[test]
fn loaded_config_drives_widget() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("calendar.toml");
    std::fs::write(&path, CONFIG).unwrap();

    let config = CalendarConfig::load(&path).unwrap();
    let tooltip = RecordingToolTip::new();
    let mut calendar = CalendarWidget::with_date(date(2024, 2, 14))
        .unwrap()
        .with_config(config)
        .with_tooltip(tooltip.clone())
        .with_size(280.0, 294.0);

    let geometry = calendar.geometry().unwrap();
    assert_eq!(geometry.client.top(), 54.0);
    assert_eq!(geometry.cell_size, Size::new(40.0, 40.0));

    // Out-of-month days are selectable and get a tooltip.
    let leading = geometry.cell(GridIndex::new(1).unwrap()).center();
    calendar.handle_event(&mut daygrid::MouseMoveEvent::new(leading).into());
    assert_eq!(tooltip.visible_text().as_deref(), Some("30/01/2024"));
    calendar.handle_event(
        &mut daygrid::MousePressEvent::new(MouseButton::Left, leading).into(),
    );
    assert_eq!(calendar.selected_date(), Some(date(2024, 1, 30)));

    let mut renderer = RecordingRenderer::new();
    calendar.paint(&mut renderer);
    assert_eq!(renderer.line_count(), 6);
    assert_eq!(
        renderer.fills_with(Color::from_rgb8(0x2E, 0x7D, 0x32)).len(),
        1
    );
}

#[test]
fn saved_widget_settings_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("nested.toml");

    let mut config = CalendarConfig::default();
    config.behavior.freeze = true;
    config.style.border_style = BorderStyle::None;
    config.style.font = Font::new(FontFamily::Serif, 15.0);
    config.save(&path).unwrap();

    let loaded = CalendarConfig::load(&path).unwrap();
    assert_eq!(loaded, config);

    let mut calendar = CalendarWidget::with_date(date(2024, 2, 14))
        .unwrap()
        .with_config(loaded);
    assert!(calendar.is_frozen());
    calendar.set_month(3).unwrap();
    assert_eq!(calendar.month(), 2);
}

#[test]
fn invalid_style_is_rejected_by_widget() {
    let mut calendar = CalendarWidget::with_date(date(2024, 2, 14))
        .unwrap()
        .with_size(280.0, 288.0);
    let mut style = calendar.style().clone();
    style.nav_button_width = 0.0;

    let err = calendar.set_style(style).unwrap_err();
    assert!(matches!(
        err,
        ConfigError::InvalidValue {
            field: "style.nav_button_width",
            ..
        }
    ));
    assert_eq!(calendar.style().nav_button_width, 16.0);
}
