//! The contract between item decorations and the list hosting them.
//!
//! A host calls [`ItemDecoration::item_offsets`] for every item while
//! measuring and [`ItemDecoration::on_draw`] once per frame while painting.
//! Decorations are registered with a [`DecorationHost`] and identified by a
//! [`DecorationId`].

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use lattice_divider_render::{Insets, Painter};

use crate::layout::{ChildView, LayoutQuery};

/// Unique identifier for an item decoration.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DecorationId(u64);

impl DecorationId {
    /// Allocate a new decoration ID.
    pub fn next() -> Self {
        static COUNTER: AtomicU64 = AtomicU64::new(1);
        Self(COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Get the raw ID value.
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DecorationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "decoration-{}", self.0)
    }
}

/// Something that reserves space around items and paints into it.
pub trait ItemDecoration: Send + Sync {
    /// The identity used for registration.
    fn id(&self) -> DecorationId;

    /// Space to reserve around the item at `position`.
    fn item_offsets(&self, layout: &dyn LayoutQuery, position: usize, list_size: usize) -> Insets;

    /// Paint for the currently visible `children`.
    fn on_draw(
        &self,
        painter: &mut dyn Painter,
        layout: &dyn LayoutQuery,
        children: &[ChildView],
        list_size: usize,
    );
}

/// A list that item decorations can be registered with.
pub trait DecorationHost {
    /// Register a decoration. Decorations draw in registration order.
    fn add_item_decoration(&mut self, decoration: Arc<dyn ItemDecoration>);

    /// Remove the decoration with `id`. Returns `false` if it was not
    /// registered.
    fn remove_item_decoration(&mut self, id: DecorationId) -> bool;

    /// Number of registered decorations.
    fn item_decoration_count(&self) -> usize;
}
