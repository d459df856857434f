//! Lattice Divider - dividers and spacing for list and grid views.
//!
//! This is the umbrella crate that re-exports the divider engine and its
//! paint primitives, and adds a reference list host.
//!
//! # Example
//!
//! ```
//! use lattice_divider::prelude::*;
//!
//! let mut list = RecyclerList::new(GridLayout::new(Orientation::Vertical, 3)?).with_item_count(7);
//!
//! let divider = Divider::builder().color(Color::GRAY).size(2).build();
//! divider.attach_to(&mut list);
//!
//! list.layout_items(PixelRect::new(0, 0, 300, 600), 40);
//!
//! let mut painter = RecordingPainter::new();
//! list.paint(&mut painter);
//! assert!(painter.stats().fills > 0);
//! # Ok::<(), DividerError>(())
//! ```

pub use lattice_divider_core::*;

pub mod config;
mod list;
pub mod prelude;

pub use list::RecyclerList;

/// Paint primitives: pixel geometry, colors, drawables and painters.
pub mod render {
    pub use lattice_divider_render::*;
}
