//! Default divider dimensions and color.
//!
//! These are the values a divider falls back to when its options leave an
//! attribute unset. Dimensions are given in density-independent pixels (dp)
//! and converted to device pixels with the display density.

use lattice_divider_render::Color;
use serde::{Deserialize, Serialize};

use crate::error::{DividerError, DividerResult};

/// Default size, margin and color for dividers.
///
/// Can be loaded from TOML:
///
/// ```toml
/// size = 1.0
/// margin = 0.0
/// color = "#CFCFCF"
/// density = 2.0
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DividerDefaults {
    /// Divider thickness in dp.
    pub size: f32,
    /// Divider end margin in dp.
    pub margin: f32,
    /// Fill color of the default divider drawable.
    pub color: Color,
    /// Device pixels per dp.
    pub density: f32,
}

impl Default for DividerDefaults {
    fn default() -> Self {
        Self {
            size: 1.0,
            margin: 0.0,
            color: Color::from_argb(0xFFCF_CFCF),
            density: 1.0,
        }
    }
}

impl DividerDefaults {
    /// Defaults for a display with the given density.
    pub fn with_density(density: f32) -> Self {
        Self {
            density,
            ..Self::default()
        }
    }

    /// Parse and validate defaults from a TOML document.
    ///
    /// Missing keys keep their default values.
    pub fn from_toml_str(source: &str) -> DividerResult<Self> {
        let defaults: Self = toml::from_str(source)?;
        defaults.validate()?;
        Ok(defaults)
    }

    /// Check that every dimension is usable.
    pub fn validate(&self) -> DividerResult<()> {
        if !(self.density > 0.0) {
            return Err(DividerError::InvalidDensity(self.density));
        }
        for (name, value) in [("size", self.size), ("margin", self.margin)] {
            if !(value >= 0.0) {
                return Err(DividerError::NegativeDimension { name, value });
            }
        }
        Ok(())
    }

    /// Default divider thickness in device pixels.
    pub fn size_px(&self) -> i32 {
        dimension_pixel_size(self.size, self.density)
    }

    /// Default divider margin in device pixels.
    pub fn margin_px(&self) -> i32 {
        dimension_pixel_size(self.margin, self.density)
    }
}

/// Convert dp to whole device pixels.
///
/// Rounds to the nearest pixel, except that a non-zero dimension never
/// collapses to 0 px.
pub fn dimension_pixel_size(dp: f32, density: f32) -> i32 {
    let px = dp * density;
    let rounded = (px + 0.5) as i32;
    if rounded != 0 {
        rounded
    } else if px == 0.0 {
        0
    } else if px > 0.0 {
        1
    } else {
        -1
    }
}
