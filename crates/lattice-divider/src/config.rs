//! Loading divider defaults from configuration files.
//!
//! ```toml
//! # dividers.toml
//! size = 1.0        # dp
//! margin = 8.0      # dp
//! color = "#CFCFCF"
//! density = 2.0
//! ```

use std::path::Path;

use lattice_divider_core::logging::targets;
use lattice_divider_core::{DividerDefaults, DividerError, DividerResult};
use tracing::debug;

/// Read and validate divider defaults from a TOML file.
pub fn load_defaults(path: impl AsRef<Path>) -> DividerResult<DividerDefaults> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path).map_err(|e| DividerError::io(path, e))?;
    let defaults = DividerDefaults::from_toml_str(&content)?;
    debug!(target: targets::CONFIG, path = %path.display(), ?defaults, "loaded divider defaults");
    Ok(defaults)
}
