//! Error types for Lattice Divider.
//!
//! Divider geometry itself never fails: an empty list, a missing drawable or
//! a hidden group simply produce no inset and no paint. The errors here cover
//! the surfaces around it: layout construction and configuration loading.

use std::path::PathBuf;

use thiserror::Error;

/// The main error type for Lattice Divider operations.
#[derive(Error, Debug)]
pub enum DividerError {
    /// A grid layout was created with no spans.
    #[error("span count must be at least 1, got {0}")]
    InvalidSpanCount(usize),

    /// A dimension in the divider defaults is negative.
    #[error("dimension '{name}' must not be negative, got {value}")]
    NegativeDimension { name: &'static str, value: f32 },

    /// The display density is zero, negative or not a number.
    #[error("display density must be positive, got {0}")]
    InvalidDensity(f32),

    /// The divider configuration could not be parsed.
    #[error("invalid divider configuration: {0}")]
    Config(#[from] toml::de::Error),

    /// The divider configuration file could not be read.
    #[error("failed to read divider configuration from {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl DividerError {
    /// Wrap an I/O failure on `path`.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

/// A specialized Result type for Lattice Divider operations.
pub type DividerResult<T> = std::result::Result<T, DividerError>;
