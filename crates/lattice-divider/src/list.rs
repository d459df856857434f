//! A reference list host for item decorations.
//!
//! [`RecyclerList`] plays the part of the host toolkit's list view: it owns
//! the item count and layout, lays items out into lines the way a grid
//! layout manager does, and runs its decorations' measurement and paint
//! passes.

use std::fmt;
use std::sync::Arc;

use lattice_divider_core::logging::{targets, PerfSpan};
use lattice_divider_core::{ChildView, DecorationHost, DecorationId, ItemDecoration, LayoutQuery, Orientation};
use lattice_divider_render::{Insets, Painter, PixelRect};
use tracing::{debug, trace};

/// A scrolling list or grid with item decorations.
///
/// Decorations are measured and painted in registration order. Children are
/// whatever [`layout_items`](Self::layout_items) or
/// [`set_children`](Self::set_children) last placed on screen.
pub struct RecyclerList {
    layout: Box<dyn LayoutQuery + Send + Sync>,
    item_count: usize,
    children: Vec<ChildView>,
    decorations: Vec<Arc<dyn ItemDecoration>>,
}

impl RecyclerList {
    /// Create an empty list using `layout`.
    pub fn new(layout: impl LayoutQuery + Send + Sync + 'static) -> Self {
        Self {
            layout: Box::new(layout),
            item_count: 0,
            children: Vec::new(),
            decorations: Vec::new(),
        }
    }

    /// Set the item count using builder pattern.
    pub fn with_item_count(mut self, count: usize) -> Self {
        self.set_item_count(count);
        self
    }

    /// Number of items in the adapter.
    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Change the number of items. Children past the new end are dropped.
    pub fn set_item_count(&mut self, count: usize) {
        self.item_count = count;
        self.children.retain(|child| child.position < count);
    }

    /// The layout manager.
    pub fn layout(&self) -> &dyn LayoutQuery {
        self.layout.as_ref()
    }

    /// Replace the layout manager. Children are cleared.
    pub fn set_layout(&mut self, layout: impl LayoutQuery + Send + Sync + 'static) {
        self.layout = Box::new(layout);
        self.children.clear();
    }

    /// The children currently on screen.
    pub fn children(&self) -> &[ChildView] {
        &self.children
    }

    /// Place children directly, as a host with its own layout pass would.
    pub fn set_children(&mut self, children: Vec<ChildView>) {
        self.children = children;
    }

    /// The registered decorations, in drawing order.
    pub fn decorations(&self) -> &[Arc<dyn ItemDecoration>] {
        &self.decorations
    }

    /// Total inset all decorations reserve around the item at `position`.
    pub fn item_offsets(&self, position: usize) -> Insets {
        self.decorations
            .iter()
            .fold(Insets::ZERO, |total, decoration| {
                total + decoration.item_offsets(self.layout(), position, self.item_count)
            })
    }

    /// Lay out the items that fall inside `viewport`.
    ///
    /// Each line is split into equal spans across the viewport. An item gets
    /// its spans' extent minus its decoration insets, and `item_extent`
    /// pixels along the scroll axis. A line is as long as its longest
    /// decorated item.
    pub fn layout_items(&mut self, viewport: PixelRect, item_extent: i32) {
        let orientation = self.layout.orientation();
        let span_count = self.layout.span_count().max(1);
        let (cross_extent, scroll_start, scroll_end) = match orientation {
            Orientation::Vertical => (viewport.width(), viewport.top, viewport.bottom),
            Orientation::Horizontal => (viewport.height(), viewport.left, viewport.right),
        };
        let span_extent = cross_extent / span_count as i32;

        let mut children = Vec::new();
        let mut line_start = scroll_start;
        let mut line_length = 0;
        let mut current_group = None;
        let mut span_cursor = 0;

        for position in 0..self.item_count {
            let group = self.layout.group_index(position);
            if current_group != Some(group) {
                if current_group.is_some() {
                    line_start += line_length;
                }
                if line_start >= scroll_end {
                    break;
                }
                current_group = Some(group);
                line_length = 0;
                span_cursor = 0;
            }

            let span = self.layout.span_size(position) as i32;
            let cross_from = span_cursor * span_extent;
            let cross_to = cross_from + span * span_extent;
            span_cursor += span;

            let insets = self.item_offsets(position);
            let bounds = match orientation {
                Orientation::Vertical => {
                    line_length = line_length.max(insets.top + item_extent + insets.bottom);
                    PixelRect::new(
                        viewport.left + cross_from + insets.left,
                        line_start + insets.top,
                        viewport.left + cross_to - insets.right,
                        line_start + insets.top + item_extent,
                    )
                }
                Orientation::Horizontal => {
                    line_length = line_length.max(insets.left + item_extent + insets.right);
                    PixelRect::new(
                        line_start + insets.left,
                        viewport.top + cross_from + insets.top,
                        line_start + insets.left + item_extent,
                        viewport.top + cross_to - insets.bottom,
                    )
                }
            };
            children.push(ChildView::new(position, bounds));
        }

        debug!(
            target: targets::HOST,
            items = self.item_count,
            laid_out = children.len(),
            "laid out list items"
        );
        self.children = children;
    }

    /// Run every decoration's paint pass over the current children.
    pub fn paint(&self, painter: &mut dyn Painter) {
        let _span = PerfSpan::new("list_paint");
        for decoration in &self.decorations {
            decoration.on_draw(painter, self.layout(), &self.children, self.item_count);
        }
    }
}

impl DecorationHost for RecyclerList {
    fn add_item_decoration(&mut self, decoration: Arc<dyn ItemDecoration>) {
        trace!(target: targets::HOST, id = %decoration.id(), "adding item decoration");
        self.decorations.push(decoration);
    }

    fn remove_item_decoration(&mut self, id: DecorationId) -> bool {
        let before = self.decorations.len();
        self.decorations.retain(|decoration| decoration.id() != id);
        let removed = self.decorations.len() != before;
        if removed {
            trace!(target: targets::HOST, %id, "removed item decoration");
        }
        removed
    }

    fn item_decoration_count(&self) -> usize {
        self.decorations.len()
    }
}

impl fmt::Debug for RecyclerList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RecyclerList")
            .field("orientation", &self.layout.orientation())
            .field("span_count", &self.layout.span_count())
            .field("item_count", &self.item_count)
            .field("children", &self.children.len())
            .field("decorations", &self.decorations.len())
            .finish()
    }
}
