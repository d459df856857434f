//! Divider geometry engine for Lattice Divider.
//!
//! This crate computes, for the items of a scrolling list or grid, the
//! space each item reserves for dividers and the pixel rectangles the
//! dividers are painted into:
//!
//! - **Layout queries**: orientation, spans and item groups via [`LayoutQuery`],
//!   with the reference [`LinearLayout`] and [`GridLayout`]
//! - **Providers**: per-group visibility, drawable, tint, size and margin
//! - **Offsets**: [`OffsetCalculator`] for the measurement pass
//! - **Draw planning**: [`DrawPlanner`] for the paint pass
//! - **Decorations**: the [`Divider`] item decoration and the
//!   [`DecorationHost`] registration contract
//! - **Configuration**: [`DividerBuilder`], [`DividerOptions`] and the
//!   dp-based [`DividerDefaults`]
//!
//! # Grid Example
//!
//! ```
//! use lattice_divider_core::{ChildView, Divider, GridLayout, Orientation};
//! use lattice_divider_render::{Color, PixelRect};
//!
//! let divider = Divider::builder().color(Color::GRAY).size(4).build();
//! let layout = GridLayout::new(Orientation::Vertical, 2)?;
//!
//! // Two items sharing a line split the gap between them.
//! assert_eq!(divider.compute_inset(&layout, 0, 4).right, 2);
//! assert_eq!(divider.compute_inset(&layout, 1, 4).left, 2);
//!
//! // The first item paints a half divider to its right and one below it.
//! let children = [ChildView::new(0, PixelRect::new(0, 0, 48, 48))];
//! let rects: Vec<_> = divider.draw_rects(&layout, &children, 4).collect();
//! assert_eq!(rects.len(), 2);
//! assert_eq!(rects[1].bounds, PixelRect::new(0, 48, 48, 52));
//! # Ok::<(), lattice_divider_core::DividerError>(())
//! ```

mod builder;
mod decoration;
mod defaults;
mod divider;
mod draw;
mod error;
mod layout;
pub mod logging;
mod offsets;
pub mod provider;

pub use builder::{resolve, DividerBuilder, DividerOptions};
pub use decoration::{DecorationHost, DecorationId, ItemDecoration};
pub use defaults::{dimension_pixel_size, DividerDefaults};
pub use divider::{Divider, DividerKind, DividerStyle};
pub use draw::{DrawPlanner, DrawRect, DrawRects};
pub use error::{DividerError, DividerResult};
pub use layout::{
    ChildView, GridLayout, LayoutQuery, LinearLayout, Orientation, SingleSpanLookup,
    SpanSizeLookup,
};
pub use logging::PerfSpan;
pub use offsets::OffsetCalculator;
pub use provider::{
    DrawableProvider, MarginProvider, SizeProvider, TintProvider, VisibilityMode,
    VisibilityProvider,
};
