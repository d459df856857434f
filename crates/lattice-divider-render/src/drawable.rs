//! Drawables: the graphics a divider paints into its rectangles.
//!
//! Drawables are shared behind `Arc<dyn Drawable>` and are never mutated
//! once created. Tinting wraps the original in a [`TintedDrawable`], so a
//! drawable shared by several groups keeps its own appearance no matter how
//! many tinted copies exist.

use std::fmt;
use std::sync::Arc;

use crate::painter::Painter;
use crate::types::{Color, PixelRect};

/// Returned by [`Drawable::intrinsic_width`] / [`Drawable::intrinsic_height`]
/// when the drawable has no natural size (e.g. a flat color).
pub const NO_INTRINSIC_SIZE: i32 = -1;

/// Something that can paint itself into a pixel rectangle.
pub trait Drawable: Send + Sync + fmt::Debug {
    /// Natural width in pixels, or [`NO_INTRINSIC_SIZE`].
    fn intrinsic_width(&self) -> i32 {
        NO_INTRINSIC_SIZE
    }

    /// Natural height in pixels, or [`NO_INTRINSIC_SIZE`].
    fn intrinsic_height(&self) -> i32 {
        NO_INTRINSIC_SIZE
    }

    /// Paint into `bounds`.
    fn draw(&self, painter: &mut dyn Painter, bounds: PixelRect);
}

/// A drawable that fills its bounds with one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorDrawable {
    color: Color,
}

impl ColorDrawable {
    /// Create a flat color drawable.
    pub const fn new(color: Color) -> Self {
        Self { color }
    }

    /// The fill color.
    pub const fn color(&self) -> Color {
        self.color
    }

    /// Shorthand for `Arc::new(ColorDrawable::new(color))`.
    pub fn shared(color: Color) -> Arc<dyn Drawable> {
        Arc::new(Self::new(color))
    }
}

impl Drawable for ColorDrawable {
    fn draw(&self, painter: &mut dyn Painter, bounds: PixelRect) {
        painter.fill_rect(bounds, self.color);
    }
}

/// A drawable backed by an image the host knows by key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageDrawable {
    key: String,
    width: i32,
    height: i32,
}

impl ImageDrawable {
    /// Create an image drawable with its intrinsic pixel size.
    pub fn new(key: impl Into<String>, width: i32, height: i32) -> Self {
        Self {
            key: key.into(),
            width,
            height,
        }
    }

    /// The host image key.
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Drawable for ImageDrawable {
    fn intrinsic_width(&self) -> i32 {
        self.width
    }

    fn intrinsic_height(&self) -> i32 {
        self.height
    }

    fn draw(&self, painter: &mut dyn Painter, bounds: PixelRect) {
        painter.draw_image(&self.key, bounds, None);
    }
}

/// A tinted view of another drawable.
///
/// The wrapped drawable is left untouched. Solid fills are recolored
/// source-in with the tint and images are drawn with the tint applied.
#[derive(Debug, Clone)]
pub struct TintedDrawable {
    inner: Arc<dyn Drawable>,
    tint: Color,
}

impl TintedDrawable {
    /// Wrap `inner` with a tint.
    pub fn new(inner: Arc<dyn Drawable>, tint: Color) -> Self {
        Self { inner, tint }
    }

    /// The tint color.
    pub fn tint(&self) -> Color {
        self.tint
    }

    /// The untinted drawable.
    pub fn inner(&self) -> &Arc<dyn Drawable> {
        &self.inner
    }
}

impl Drawable for TintedDrawable {
    fn intrinsic_width(&self) -> i32 {
        self.inner.intrinsic_width()
    }

    fn intrinsic_height(&self) -> i32 {
        self.inner.intrinsic_height()
    }

    fn draw(&self, painter: &mut dyn Painter, bounds: PixelRect) {
        let mut tinting = TintPainter {
            target: painter,
            tint: self.tint,
        };
        self.inner.draw(&mut tinting, bounds);
    }
}

/// Produce a tinted copy of `drawable`.
///
/// Tinting an already tinted drawable wraps it again; the outer tint is
/// the one that shows.
pub fn tint_drawable(drawable: &Arc<dyn Drawable>, tint: Color) -> Arc<dyn Drawable> {
    Arc::new(TintedDrawable::new(Arc::clone(drawable), tint))
}

/// Forwards paint calls with the tint applied.
struct TintPainter<'a> {
    target: &'a mut dyn Painter,
    tint: Color,
}

impl Painter for TintPainter<'_> {
    fn fill_rect(&mut self, rect: PixelRect, color: Color) {
        self.target.fill_rect(rect, self.tint.source_in(color));
    }

    fn draw_image(&mut self, key: &str, rect: PixelRect, _tint: Option<Color>) {
        // The outermost tint wins, as with nested tint wrappers on the host.
        self.target.draw_image(key, rect, Some(self.tint));
    }
}
