//! Font description, text alignment and text measurement.
//!
//! daygrid never shapes text itself. The host supplies a [`TextMeasure`]
//! implementation (usually its renderer) and the widget only asks how large a
//! string will be when drawn in a given [`Font`].

use serde::{Deserialize, Serialize};

use crate::types::Size;

/// Font weight, typically ranging from 100 (thin) to 900 (black).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FontWeight(pub u16);

impl FontWeight {
    /// Light weight (300).
    pub const LIGHT: Self = Self(300);
    /// Normal/regular weight (400).
    pub const NORMAL: Self = Self(400);
    /// Semi-bold weight (600).
    pub const SEMI_BOLD: Self = Self(600);
    /// Bold weight (700).
    pub const BOLD: Self = Self(700);

    /// Create a font weight from a numeric value (100-900).
    pub fn new(weight: u16) -> Self {
        Self(weight.clamp(100, 900))
    }

    /// Get the numeric weight value.
    pub const fn value(self) -> u16 {
        self.0
    }
}

impl Default for FontWeight {
    fn default() -> Self {
        Self::NORMAL
    }
}

/// A font family specification.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum FontFamily {
    /// A specific font family by name.
    Name(String),
    /// Generic serif family.
    Serif,
    /// Generic sans-serif family.
    #[default]
    SansSerif,
    /// Generic monospace family.
    Monospace,
}

impl FontFamily {
    /// Create a named font family.
    pub fn name(name: impl Into<String>) -> Self {
        Self::Name(name.into())
    }
}

/// A font description.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Font {
    /// The font family.
    pub family: FontFamily,
    /// Font size in pixels.
    pub size: f32,
    /// Font weight.
    pub weight: FontWeight,
    /// Italic style.
    pub italic: bool,
}

impl Default for Font {
    fn default() -> Self {
        Self::new(FontFamily::SansSerif, 12.0)
    }
}

impl Font {
    /// Create a new regular font with the given family and size.
    pub fn new(family: FontFamily, size: f32) -> Self {
        Self {
            family,
            size,
            weight: FontWeight::NORMAL,
            italic: false,
        }
    }

    /// Return a copy with the given weight.
    pub fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = weight;
        self
    }

    /// Return a bold copy of this font.
    pub fn bold(&self) -> Self {
        self.clone().with_weight(FontWeight::BOLD)
    }

    /// Whether the weight is at least semi-bold.
    pub fn is_bold(&self) -> bool {
        self.weight >= FontWeight::SEMI_BOLD
    }
}

/// Horizontal text alignment within a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical text alignment within a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VerticalAlign {
    #[default]
    Top,
    Middle,
    Bottom,
}

/// Combined text alignment inside a bounding rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct TextAlign {
    pub horizontal: HorizontalAlign,
    pub vertical: VerticalAlign,
}

impl TextAlign {
    /// Centered on both axes.
    pub const CENTER: Self = Self {
        horizontal: HorizontalAlign::Center,
        vertical: VerticalAlign::Middle,
    };

    /// Create a new alignment.
    pub const fn new(horizontal: HorizontalAlign, vertical: VerticalAlign) -> Self {
        Self {
            horizontal,
            vertical,
        }
    }
}

/// Text measurement capability.
///
/// Implementations report the size a single line of text occupies when drawn
/// with `font`. The widget uses it to size the month/year label.
pub trait TextMeasure {
    /// Measure a single line of text.
    fn measure_text(&self, text: &str, font: &Font) -> Size;
}

/// A font-metric-free [`TextMeasure`] that estimates text size from the
/// character count.
///
/// Each character is assumed to be `advance_ratio * font.size` wide (bold
/// text 10% wider) and a line `line_height_ratio * font.size` tall. Good
/// enough for headless layout and tests.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeuristicTextMeasure {
    pub advance_ratio: f32,
    pub line_height_ratio: f32,
}

impl Default for HeuristicTextMeasure {
    fn default() -> Self {
        Self {
            advance_ratio: 0.6,
            line_height_ratio: 1.2,
        }
    }
}

impl TextMeasure for HeuristicTextMeasure {
    fn measure_text(&self, text: &str, font: &Font) -> Size {
        let chars = text.chars().count() as f32;
        let bold_factor = if font.is_bold() { 1.1 } else { 1.0 };
        Size::new(
            chars * font.size * self.advance_ratio * bold_factor,
            font.size * self.line_height_ratio,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_bold() {
        let font = Font::new(FontFamily::name("Inter"), 14.0);
        assert!(!font.is_bold());
        let bold = font.bold();
        assert!(bold.is_bold());
        assert_eq!(bold.size, 14.0);
        assert_eq!(bold.family, FontFamily::Name("Inter".into()));
    }

    #[test]
    fn test_font_weight_clamped() {
        assert_eq!(FontWeight::new(50), FontWeight(100));
        assert_eq!(FontWeight::new(1000).value(), 900);
    }

    #[test]
    fn test_heuristic_measure() {
        let measure = HeuristicTextMeasure::default();
        let font = Font::new(FontFamily::SansSerif, 10.0);
        let size = measure.measure_text("abcd", &font);
        assert!((size.width - 24.0).abs() < 0.001);
        assert!((size.height - 12.0).abs() < 0.001);

        let bold = measure.measure_text("abcd", &font.bold());
        assert!(bold.width > size.width);
        assert_eq!(measure.measure_text("", &font).width, 0.0);
    }

    #[test]
    fn test_font_toml() {
        let font: Font = toml::from_str("family = \"monospace\"\nsize = 9.5\nweight = 700").unwrap();
        assert_eq!(font.family, FontFamily::Monospace);
        assert!(font.is_bold());
        assert!(!font.italic);

        let named: Font = toml::from_str("family = { name = \"Segoe UI\" }").unwrap();
        assert_eq!(named.family, FontFamily::name("Segoe UI"));
        assert_eq!(named.size, 12.0);
    }
}
