//! Renderer capability trait.
//!
//! This module defines the [`Renderer`] trait, the small set of drawing
//! primitives a calendar needs from its host toolkit. The trait is object
//! safe so widgets and paint delegates can work with `&mut dyn Renderer`.

use crate::paint::Stroke;
use crate::text::{Font, TextAlign, TextMeasure};
use crate::types::{Color, Point, Rect};

/// The 2D drawing interface a host provides to the calendar.
///
/// Every coordinate is in widget-local pixels with the origin at the top-left
/// corner of the control. Implementations may draw immediately or record the
/// calls for later replay (see [`RecordingRenderer`](crate::RecordingRenderer)).
///
/// # Example
///
/// ```ignore
/// renderer.fill_rect(cell, style.back_color);
/// renderer.draw_text("29", &style.font, cell, style.fore_color, TextAlign::CENTER);
/// renderer.stroke_rect(cell.deflate(3.0), &Stroke::new(focus, 1.0));
/// ```
pub trait Renderer: TextMeasure {
    // =========================================================================
    // Drawing - Rectangles
    // =========================================================================

    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Stroke the outline of a rectangle.
    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke);

    // =========================================================================
    // Drawing - Lines
    // =========================================================================

    /// Draw a line between two points.
    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke);

    // =========================================================================
    // Drawing - Text
    // =========================================================================

    /// Draw a single line of text aligned inside `bounds`.
    fn draw_text(&mut self, text: &str, font: &Font, bounds: Rect, color: Color, align: TextAlign);
}
