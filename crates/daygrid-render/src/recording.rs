//! A renderer that records draw commands instead of rasterizing them.
//!
//! Hosts without an immediate-mode canvas can paint the calendar into a
//! [`RecordingRenderer`] and replay [`DrawCommand`]s on their own surface.
//! Tests use it to assert on what a paint pass produced.

use crate::paint::Stroke;
use crate::renderer::Renderer;
use crate::text::{Font, HeuristicTextMeasure, TextAlign, TextMeasure};
use crate::types::{Color, Point, Rect, Size};

/// A single recorded drawing operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawCommand {
    FillRect {
        rect: Rect,
        color: Color,
    },
    StrokeRect {
        rect: Rect,
        stroke: Stroke,
    },
    Line {
        from: Point,
        to: Point,
        stroke: Stroke,
    },
    Text {
        text: String,
        font: Font,
        bounds: Rect,
        color: Color,
        align: TextAlign,
    },
}

/// Records every call made through the [`Renderer`] trait.
///
/// Text is measured with a [`HeuristicTextMeasure`] unless another measurer
/// is supplied with [`RecordingRenderer::with_measure`].
#[derive(Debug, Clone, Default)]
pub struct RecordingRenderer {
    commands: Vec<DrawCommand>,
    measure: HeuristicTextMeasure,
}

impl RecordingRenderer {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a recorder using a custom heuristic measurer.
    pub fn with_measure(measure: HeuristicTextMeasure) -> Self {
        Self {
            commands: Vec::new(),
            measure,
        }
    }

    /// All recorded commands, in call order.
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take the recorded commands, leaving the recorder empty.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Discard all recorded commands.
    pub fn clear(&mut self) {
        self.commands.clear();
    }

    /// Strings drawn with `draw_text`, in call order.
    pub fn texts(&self) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::Text { text, .. } => Some(text.as_str()),
                _ => None,
            })
            .collect()
    }

    /// Rectangles filled with exactly `color`.
    pub fn fills_with(&self, color: Color) -> Vec<Rect> {
        self.commands
            .iter()
            .filter_map(|cmd| match cmd {
                DrawCommand::FillRect { rect, color: c } if *c == color => Some(*rect),
                _ => None,
            })
            .collect()
    }

    /// Number of lines drawn.
    pub fn line_count(&self) -> usize {
        self.commands
            .iter()
            .filter(|cmd| matches!(cmd, DrawCommand::Line { .. }))
            .count()
    }
}

impl TextMeasure for RecordingRenderer {
    fn measure_text(&self, text: &str, font: &Font) -> Size {
        self.measure.measure_text(text, font)
    }
}

impl Renderer for RecordingRenderer {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.commands.push(DrawCommand::FillRect { rect, color });
    }

    fn stroke_rect(&mut self, rect: Rect, stroke: &Stroke) {
        self.commands.push(DrawCommand::StrokeRect {
            rect,
            stroke: stroke.clone(),
        });
    }

    fn draw_line(&mut self, from: Point, to: Point, stroke: &Stroke) {
        self.commands.push(DrawCommand::Line {
            from,
            to,
            stroke: stroke.clone(),
        });
    }

    fn draw_text(&mut self, text: &str, font: &Font, bounds: Rect, color: Color, align: TextAlign) {
        self.commands.push(DrawCommand::Text {
            text: text.to_string(),
            font: font.clone(),
            bounds,
            color,
            align,
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_order() {
        let mut renderer = RecordingRenderer::new();
        let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
        renderer.fill_rect(rect, Color::WHITE);
        renderer.draw_text("7", &Font::default(), rect, Color::BLACK, TextAlign::CENTER);
        renderer.draw_line(Point::ZERO, Point::new(10.0, 0.0), &Stroke::default());

        assert_eq!(renderer.commands().len(), 3);
        assert!(matches!(renderer.commands()[0], DrawCommand::FillRect { .. }));
        assert_eq!(renderer.texts(), vec!["7"]);
        assert_eq!(renderer.fills_with(Color::WHITE), vec![rect]);
        assert_eq!(renderer.line_count(), 1);

        let taken = renderer.take_commands();
        assert_eq!(taken.len(), 3);
        assert!(renderer.commands().is_empty());
    }

    #[test]
    fn test_usable_as_trait_object() {
        let mut recorder = RecordingRenderer::new();
        {
            let renderer: &mut dyn Renderer = &mut recorder;
            renderer.stroke_rect(Rect::new(1.0, 1.0, 5.0, 5.0), &Stroke::default());
            let size = renderer.measure_text("abc", &Font::default());
            assert!(size.width > 0.0);
        }
        assert_eq!(recorder.commands().len(), 1);
    }
}
