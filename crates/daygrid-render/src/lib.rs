//! Rendering capabilities for daygrid.
//!
//! This crate holds the drawing vocabulary shared between the calendar widget
//! and its host: geometry ([`Point`], [`Size`], [`Rect`]), [`Color`],
//! [`Stroke`], [`Font`] and text alignment, plus the two capability traits
//! the host implements:
//!
//! - [`Renderer`]: fill/stroke rectangles, draw lines and text
//! - [`TextMeasure`]: report the size of a line of text
//!
//! [`RecordingRenderer`] implements both by recording [`DrawCommand`]s.

mod error;
mod paint;
mod recording;
mod renderer;
mod text;
mod types;

pub use error::{RenderError, RenderResult};
pub use paint::{DashPattern, Stroke};
pub use recording::{DrawCommand, RecordingRenderer};
pub use renderer::Renderer;
pub use text::{
    Font, FontFamily, FontWeight, HeuristicTextMeasure, HorizontalAlign, TextAlign, TextMeasure,
    VerticalAlign,
};
pub use types::{Color, Point, Rect, Size};
