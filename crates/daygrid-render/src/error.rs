//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur while parsing render values.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A color string was not `#RRGGBB` or `#RRGGBBAA`.
    #[error("invalid color '{0}': expected #RRGGBB or #RRGGBBAA")]
    InvalidColor(String),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
