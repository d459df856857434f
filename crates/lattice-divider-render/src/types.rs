//! Basic geometry and color types for divider painting.
//!
//! Dividers are laid out on the integer pixel grid of the host list, so the
//! rectangle and inset types here use `i32` coordinates. Coordinates may be
//! negative (a half divider can sit left of a child that starts at `x = 0`).

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{RenderError, RenderResult};

/// A rectangle on the pixel grid, stored as its four edges.
///
/// `right` and `bottom` are exclusive, matching the host toolkit's bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct PixelRect {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl PixelRect {
    /// Create a rectangle from its four edges.
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Empty rectangle at origin.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Width of the rectangle (may be negative for inverted rectangles).
    #[inline]
    pub const fn width(&self) -> i32 {
        self.right - self.left
    }

    /// Height of the rectangle (may be negative for inverted rectangles).
    #[inline]
    pub const fn height(&self) -> i32 {
        self.bottom - self.top
    }
}

impl fmt::Display for PixelRect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}, {}, {}, {}]",
            self.left, self.top, self.right, self.bottom
        )
    }
}

/// Space reserved around each side of an item, in pixels.
///
/// Also used for the layout margins a host assigns to a child view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Insets {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Insets {
    /// Create insets from the four sides.
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// No inset on any side.
    pub const ZERO: Self = Self::new(0, 0, 0, 0);

    /// Same inset on every side.
    #[inline]
    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }
}

impl std::ops::Add for Insets {
    type Output = Insets;

    fn add(self, rhs: Insets) -> Insets {
        Insets::new(
            self.left + rhs.left,
            self.top + rhs.top,
            self.right + rhs.right,
            self.bottom + rhs.bottom,
        )
    }
}

/// A non-premultiplied 8-bit ARGB color.
///
/// The packed form ([`to_argb`](Self::to_argb)) is the `0xAARRGGBB` color
/// int used by mobile toolkits. In configuration files a color is written as
/// `"#RRGGBB"` or `"#AARRGGBB"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Color {
    pub a: u8,
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    /// Create a color from 8-bit ARGB components.
    #[inline]
    pub const fn from_argb8(a: u8, r: u8, g: u8, b: u8) -> Self {
        Self { a, r, g, b }
    }

    /// Create an opaque color from 8-bit RGB components.
    #[inline]
    pub const fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::from_argb8(255, r, g, b)
    }

    /// Create a color from a packed `0xAARRGGBB` value.
    #[inline]
    pub const fn from_argb(argb: u32) -> Self {
        Self {
            a: (argb >> 24) as u8,
            r: (argb >> 16) as u8,
            g: (argb >> 8) as u8,
            b: argb as u8,
        }
    }

    /// Pack the color into a `0xAARRGGBB` value.
    #[inline]
    pub const fn to_argb(self) -> u32 {
        ((self.a as u32) << 24) | ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }

    /// Parse `#RRGGBB` or `#AARRGGBB`.
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.trim().trim_start_matches('#');
        if !digits.is_ascii() {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            6 => Some(Self::from_argb(0xFF00_0000 | value)),
            8 => Some(Self::from_argb(value)),
            _ => None,
        }
    }

    /// Format as `#AARRGGBB`, or `#RRGGBB` when fully opaque.
    pub fn to_hex(self) -> String {
        if self.a == 255 {
            format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            format!("#{:08X}", self.to_argb())
        }
    }

    /// Return the same color with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }

    /// Source-in composite: this color's RGB, with alpha scaled by `source`.
    ///
    /// This is how a tint recolors an opaque or translucent fill.
    pub fn source_in(self, source: Color) -> Self {
        let alpha = (self.a as u32 * source.a as u32 + 127) / 255;
        self.with_alpha(alpha as u8)
    }

    // Common colors
    pub const TRANSPARENT: Self = Self::from_argb(0x0000_0000);
    pub const BLACK: Self = Self::from_argb(0xFF00_0000);
    pub const WHITE: Self = Self::from_argb(0xFFFF_FFFF);
    pub const RED: Self = Self::from_argb(0xFFFF_0000);
    pub const GREEN: Self = Self::from_argb(0xFF00_FF00);
    pub const BLUE: Self = Self::from_argb(0xFF00_00FF);
    pub const GRAY: Self = Self::from_argb(0xFF80_8080);
}

impl FromStr for Color {
    type Err = RenderError;

    fn from_str(s: &str) -> RenderResult<Self> {
        Self::from_hex(s).ok_or_else(|| RenderError::InvalidColor(s.to_string()))
    }
}

impl TryFrom<String> for Color {
    type Error = RenderError;

    fn try_from(value: String) -> RenderResult<Self> {
        value.parse()
    }
}

impl From<Color> for String {
    fn from(color: Color) -> Self {
        color.to_hex()
    }
}

impl From<u32> for Color {
    fn from(argb: u32) -> Self {
        Self::from_argb(argb)
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}
