//! Stroke styles for outlines and lines.

use crate::types::Color;

/// A stroke style for outlining rectangles and drawing lines.
#[derive(Debug, Clone, PartialEq)]
pub struct Stroke {
    /// Stroke color.
    pub color: Color,
    /// Stroke width in pixels.
    pub width: f32,
    /// Dash pattern (lengths of dashes and gaps). `None` draws a solid line.
    pub dash_pattern: Option<DashPattern>,
}

impl Default for Stroke {
    fn default() -> Self {
        Self {
            color: Color::BLACK,
            width: 1.0,
            dash_pattern: None,
        }
    }
}

impl Stroke {
    /// Create a new solid stroke with the given color and width.
    #[inline]
    pub fn new(color: Color, width: f32) -> Self {
        Self {
            color,
            width,
            dash_pattern: None,
        }
    }

    /// Set a dash pattern.
    #[inline]
    pub fn with_dash(mut self, pattern: DashPattern) -> Self {
        self.dash_pattern = Some(pattern);
        self
    }

    /// Whether this stroke is dashed.
    #[inline]
    pub fn is_dashed(&self) -> bool {
        self.dash_pattern.is_some()
    }
}

/// Dash pattern for stroked lines.
#[derive(Debug, Clone, PartialEq)]
pub struct DashPattern {
    /// Alternating lengths of dashes and gaps.
    pub pattern: Vec<f32>,
    /// Offset into the pattern to start.
    pub offset: f32,
}

impl DashPattern {
    /// Create a new dash pattern.
    #[inline]
    pub fn new(pattern: Vec<f32>, offset: f32) -> Self {
        Self { pattern, offset }
    }

    /// Create a simple dash pattern with equal dash and gap lengths.
    #[inline]
    pub fn simple(dash_length: f32, gap_length: f32) -> Self {
        Self {
            pattern: vec![dash_length, gap_length],
            offset: 0.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stroke_builder() {
        let stroke = Stroke::new(Color::GRAY, 2.0);
        assert!(!stroke.is_dashed());

        let dashed = stroke.with_dash(DashPattern::simple(3.0, 1.0));
        assert!(dashed.is_dashed());
        assert_eq!(dashed.width, 2.0);
        assert_eq!(dashed.dash_pattern.unwrap().pattern, vec![3.0, 1.0]);
    }
}
