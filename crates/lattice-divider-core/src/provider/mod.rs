//! Attribute providers: per-group strategies for divider appearance.
//!
//! Each divider attribute is resolved per group through its own provider:
//!
//! - [`VisibilityProvider`]: which divider components show
//! - [`DrawableProvider`]: what paints the divider
//! - [`TintProvider`]: optional recoloring of that drawable
//! - [`SizeProvider`]: thickness along the scroll axis
//! - [`MarginProvider`]: inset of the divider's ends
//!
//! Every provider is a pure function of `(group_count, group_index)` (size
//! also sees the drawable and orientation). Closures with the matching
//! signature implement the traits directly.
//!
//! Each attribute comes with a "general" provider (one fixed value for every
//! group) and, where the attribute has a default, a "default" provider
//! shared process-wide for the standard default value.

mod default_cell;
mod drawable;
mod margin;
mod size;
mod tint;
mod visibility;

pub use default_cell::DefaultCell;
pub use drawable::{
    default_drawable_provider, general_drawable_provider, DefaultDrawable, DrawableProvider,
    GeneralDrawable,
};
pub use margin::{default_margin_provider, general_margin_provider, DefaultMargin, GeneralMargin, MarginProvider};
pub use size::{default_size_provider, general_size_provider, DefaultSize, GeneralSize, SizeProvider};
pub use tint::{general_tint_provider, GeneralTint, TintProvider};
pub use visibility::{
    default_visibility_provider, last_item_invisible_provider, DefaultVisibility,
    LastItemInvisible, VisibilityMode, VisibilityProvider,
};
