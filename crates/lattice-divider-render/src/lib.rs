//! Paint primitives for Lattice Divider.
//!
//! This crate holds the small pixel-level vocabulary shared by the divider
//! engine and its hosts:
//!
//! - [`PixelRect`] and [`Insets`]: integer rectangles and 4-sided insets
//! - [`Color`]: non-premultiplied ARGB colors, parseable from `#RRGGBB`
//! - [`Drawable`]: the graphic a divider paints, with [`ColorDrawable`],
//!   [`ImageDrawable`] and the copy-on-tint [`TintedDrawable`]
//! - [`Painter`]: the slice of the host canvas drawables paint into
//!
//! # Example
//!
//! ```
//! use lattice_divider_render::{
//!     tint_drawable, Color, ColorDrawable, Drawable, PaintOp, PixelRect, RecordingPainter,
//! };
//!
//! let gray = ColorDrawable::shared(Color::from_argb(0xFFCF_CFCF));
//! let red = tint_drawable(&gray, Color::RED);
//!
//! let mut painter = RecordingPainter::new();
//! red.draw(&mut painter, PixelRect::new(0, 10, 100, 11));
//!
//! assert_eq!(
//!     painter.ops()[0],
//!     PaintOp::Fill { rect: PixelRect::new(0, 10, 100, 11), color: Color::RED }
//! );
//! ```

mod drawable;
mod error;
mod painter;
mod types;

pub use drawable::{
    tint_drawable, ColorDrawable, Drawable, ImageDrawable, TintedDrawable, NO_INTRINSIC_SIZE,
};
pub use error::{RenderError, RenderResult};
pub use painter::{PaintOp, PaintStats, Painter, RecordingPainter};
pub use types::{Color, Insets, PixelRect};
