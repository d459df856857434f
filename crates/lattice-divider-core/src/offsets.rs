//! Insets reserved around each item for its dividers.

use lattice_divider_render::Insets;
use tracing::trace;

use crate::divider::DividerStyle;
use crate::layout::{ItemGeometry, LayoutQuery, LinePosition, Orientation};
use crate::logging::targets;
use crate::provider::VisibilityMode;

/// Computes the space each item reserves for dividers during measurement.
///
/// The divider after a group takes `size` along the scroll axis. Items that
/// share a line split the gap between them, each reserving
/// `size / 2 + margin` on the shared side.
#[derive(Clone, Copy)]
pub struct OffsetCalculator<'a> {
    style: &'a DividerStyle,
}

impl<'a> OffsetCalculator<'a> {
    /// Create a calculator for `style`.
    pub fn new(style: &'a DividerStyle) -> Self {
        Self { style }
    }

    /// The inset to reserve around the item at `position` of `list_size`.
    ///
    /// Empty lists and hidden groups reserve nothing.
    pub fn compute_inset(&self, layout: &dyn LayoutQuery, position: usize, list_size: usize) -> Insets {
        if list_size == 0 {
            return Insets::ZERO;
        }

        let (group_index, group_count) = ItemGeometry::group(layout, position, list_size);
        let mode = self.style.visibility.visibility_for_item(group_count, group_index);
        if mode == VisibilityMode::ShowNone {
            trace!(target: targets::OFFSETS, position, group_index, "divider hidden");
            return Insets::ZERO;
        }

        let orientation = layout.orientation();
        let geometry = ItemGeometry::spans(layout, position, group_index, group_count);

        let drawable = self.style.drawable.drawable_for_item(group_count, group_index);
        let size = self
            .style
            .size
            .size_for_item(drawable.as_deref(), orientation, group_count, group_index);
        let margin = self.style.margin.margin_size_for_item(group_count, group_index);

        // Reservation, not paint width: each side over-reserves by the margin.
        let (size, half) = mode.apply(size, size / 2 + margin);

        let full_span = geometry.span_count == 1 || geometry.span_size == geometry.span_count;
        let (before, after) = if full_span {
            (0, 0)
        } else {
            match geometry.line_position() {
                LinePosition::First => (0, half),
                LinePosition::Last => (half, 0),
                LinePosition::Middle => (half, half),
            }
        };

        let inset = match orientation {
            Orientation::Vertical => Insets::new(before, 0, after, size),
            Orientation::Horizontal => Insets::new(0, before, size, after),
        };
        trace!(target: targets::OFFSETS, position, group_index, ?inset, "item inset");
        inset
    }
}
