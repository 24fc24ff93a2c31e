//! Visual style of the calendar.
//!
//! [`CalendarStyle`] groups every color, font and metric the default painting
//! uses. It deserializes from the `[style]` table of a configuration file;
//! missing keys keep their defaults. Colors are written as `#RRGGBB` or
//! `#RRGGBBAA`.
//!
//! The defaults follow a light desktop palette: black on white days, an
//! accent-blue selection and a bold, pale-blue highlight for the hovered day.

use daygrid_render::{Color, Font};
use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::layout::{
    DEFAULT_HEADER_HEIGHT, DEFAULT_NAV_BUTTON_WIDTH, DEFAULT_WEEKDAY_ROW_HEIGHT, LayoutMetrics,
};

/// Which separator lines are drawn between day cells.
///
/// The outer edges of the grid are never drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BorderStyle {
    /// No separator lines.
    None,
    /// Lines between rows.
    Horizontal,
    /// Lines between columns.
    Vertical,
    /// Lines between rows and between columns.
    #[default]
    Both,
}

impl BorderStyle {
    /// Whether lines between rows are drawn.
    pub fn has_horizontal(self) -> bool {
        matches!(self, Self::Horizontal | Self::Both)
    }

    /// Whether lines between columns are drawn.
    pub fn has_vertical(self) -> bool {
        matches!(self, Self::Vertical | Self::Both)
    }
}

/// Alpha used to derive the focus rectangle color from the highlight color.
const FOCUS_RECT_ALPHA: u8 = 60;

/// Colors, fonts and metrics of the calendar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalendarStyle {
    /// Font of the header, weekday labels and in-month days.
    pub font: Font,
    pub fore_color: Color,
    pub back_color: Color,

    pub selected_fore_color: Color,
    pub selected_back_color: Color,

    /// Font of the hovered day.
    pub highlight_font: Font,
    pub highlight_fore_color: Color,
    pub highlight_back_color: Color,

    pub out_of_month_font: Font,
    pub out_of_month_fore_color: Color,
    pub out_of_month_back_color: Color,

    pub border_style: BorderStyle,
    pub border_color: Color,
    pub border_thickness: f32,

    pub header_height: f32,
    pub weekday_row_height: f32,
    pub nav_button_width: f32,
}

impl Default for CalendarStyle {
    fn default() -> Self {
        let font = Font::default();
        let fore_color = Color::BLACK;
        let back_color = Color::WHITE;
        Self {
            highlight_font: font.bold(),
            out_of_month_font: font.clone(),
            font,
            fore_color,
            back_color,
            selected_fore_color: Color::WHITE,
            selected_back_color: Color::from_rgb8(0x00, 0x78, 0xD7),
            highlight_fore_color: Color::from_rgb8(0x99, 0xB4, 0xD1),
            highlight_back_color: Color::WHITE,
            out_of_month_fore_color: Color::from_rgb8(0x6D, 0x6D, 0x6D),
            out_of_month_back_color: back_color,
            border_style: BorderStyle::Both,
            border_color: fore_color,
            border_thickness: 1.0,
            header_height: DEFAULT_HEADER_HEIGHT,
            weekday_row_height: DEFAULT_WEEKDAY_ROW_HEIGHT,
            nav_button_width: DEFAULT_NAV_BUTTON_WIDTH,
        }
    }
}

impl CalendarStyle {
    /// Color of the dashed rectangle drawn when the selected day is hovered:
    /// the highlight back color blended toward white.
    pub fn focus_rect_color(&self) -> Color {
        self.highlight_back_color
            .lighten(f32::from(FOCUS_RECT_ALPHA) / 255.0)
    }

    /// Layout metrics for a measured month/year label width.
    pub fn layout_metrics(&self, label_width: f32) -> LayoutMetrics {
        LayoutMetrics {
            header_height: self.header_height,
            weekday_row_height: self.weekday_row_height,
            nav_button_width: self.nav_button_width,
            label_width,
        }
    }

    /// Check that every metric is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_positive("style.border_thickness", self.border_thickness)?;
        check_positive("style.header_height", self.header_height)?;
        check_positive("style.weekday_row_height", self.weekday_row_height)?;
        check_positive("style.nav_button_width", self.nav_button_width)?;
        for (field, font) in [
            ("style.font.size", &self.font),
            ("style.highlight_font.size", &self.highlight_font),
            ("style.out_of_month_font.size", &self.out_of_month_font),
        ] {
            check_positive(field, font.size)?;
        }
        Ok(())
    }
}

fn check_positive(field: &'static str, value: f32) -> Result<(), ConfigError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(ConfigError::InvalidValue {
            field,
            reason: format!("expected a positive number, got {value}"),
        })
    }
}
