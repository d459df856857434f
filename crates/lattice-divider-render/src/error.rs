//! Error types for the render crate.

use thiserror::Error;

/// Errors that can occur while building paint primitives.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RenderError {
    /// A color string could not be parsed.
    #[error("invalid color '{0}': expected #RRGGBB or #AARRGGBB")]
    InvalidColor(String),
}

/// Result type for render operations.
pub type RenderResult<T> = Result<T, RenderError>;
