//! Prelude module for Lattice Divider.
//!
//! ```ignore
//! use lattice_divider::prelude::*;
//! ```
//!
//! This provides access to:
//! - Dividers and their builder (`Divider`, `DividerBuilder`)
//! - Layouts (`LinearLayout`, `GridLayout`, `Orientation`)
//! - The reference host (`RecyclerList`)
//! - Paint primitives (`Color`, `PixelRect`, `Insets`, drawables, painters)

// ============================================================================
// Dividers
// ============================================================================

pub use crate::{
    DecorationHost, Divider, DividerBuilder, DividerDefaults, DividerError, DividerKind,
    DividerResult, ItemDecoration,
};

// ============================================================================
// Providers
// ============================================================================

pub use crate::{
    DrawableProvider, MarginProvider, SizeProvider, TintProvider, VisibilityMode,
    VisibilityProvider,
};

// ============================================================================
// Layout
// ============================================================================

pub use crate::{ChildView, GridLayout, LayoutQuery, LinearLayout, Orientation, RecyclerList};

// ============================================================================
// Paint primitives
// ============================================================================

pub use crate::render::{
    Color, ColorDrawable, Drawable, ImageDrawable, Insets, PaintOp, Painter, PixelRect,
    RecordingPainter,
};
