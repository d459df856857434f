//! Layout queries: what the divider engine needs to know about the list.
//!
//! The host's layout manager is seen through [`LayoutQuery`]. It answers, for
//! a snapshot of the list, which way it scrolls, how many spans a line has,
//! how many spans each item takes and which line ("group") each item sits in.
//!
//! Two reference implementations are provided: [`LinearLayout`] (one item
//! per line) and [`GridLayout`] (items packed into lines of `span_count`
//! spans, with per-item span sizes from a [`SpanSizeLookup`]).

use std::fmt;
use std::sync::Arc;

use lattice_divider_render::{Insets, PixelRect};
use parking_lot::Mutex;

use crate::error::{DividerError, DividerResult};

/// The axis along which a list scrolls.
///
/// Dividers after each line run perpendicular to this axis. Half dividers
/// between items of the same line run along it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Orientation {
    /// Lines stack top to bottom; items in a line go left to right.
    #[default]
    Vertical,
    /// Lines stack left to right; items in a line go top to bottom.
    Horizontal,
}

/// Read-only view of the host layout manager.
///
/// Positions are adapter positions, `0..list_size`.
pub trait LayoutQuery {
    /// The scroll axis.
    fn orientation(&self) -> Orientation;

    /// Number of spans in a line, at least 1.
    fn span_count(&self) -> usize;

    /// Number of spans the item at `position` occupies (`1..=span_count`).
    fn span_size(&self, position: usize) -> usize;

    /// Spans used in the item's line up to and including the item.
    ///
    /// Equals `span_size` for the first item of a line and `span_count` for
    /// the item that completes a line.
    fn accumulated_span_in_line(&self, span_size: usize, position: usize, group_index: usize)
    -> usize;

    /// Index of the line the item belongs to.
    fn group_index(&self, position: usize) -> usize;

    /// Number of lines needed for `list_size` items.
    fn group_count(&self, list_size: usize) -> usize;
}

/// A child view currently laid out on screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChildView {
    /// Adapter position of the item bound to this view.
    pub position: usize,
    /// Pixel bounds of the view, excluding its layout margins.
    pub bounds: PixelRect,
    /// Layout margins the host placed around the view.
    pub margins: Insets,
}

impl ChildView {
    /// Create a child with no layout margins.
    pub fn new(position: usize, bounds: PixelRect) -> Self {
        Self {
            position,
            bounds,
            margins: Insets::ZERO,
        }
    }

    /// Set the child's layout margins.
    pub fn with_margins(mut self, margins: Insets) -> Self {
        self.margins = margins;
        self
    }
}

/// Where an item sits within its line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum LinePosition {
    First,
    Last,
    Middle,
}

impl LinePosition {
    /// Classify an item that does not fill its whole line.
    pub(crate) fn of(span_count: usize, span_size: usize, line_accumulated_span: usize) -> Self {
        if line_accumulated_span == span_size {
            Self::First
        } else if line_accumulated_span == span_count {
            Self::Last
        } else {
            Self::Middle
        }
    }
}

/// The per-item layout facts both divider passes start from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct ItemGeometry {
    pub group_index: usize,
    pub group_count: usize,
    pub span_count: usize,
    pub span_size: usize,
    pub line_accumulated_span: usize,
}

impl ItemGeometry {
    pub(crate) fn group(layout: &dyn LayoutQuery, position: usize, list_size: usize) -> (usize, usize) {
        (layout.group_index(position), layout.group_count(list_size))
    }

    pub(crate) fn spans(
        layout: &dyn LayoutQuery,
        position: usize,
        group_index: usize,
        group_count: usize,
    ) -> Self {
        let span_size = layout.span_size(position);
        Self {
            group_index,
            group_count,
            span_count: layout.span_count(),
            span_size,
            line_accumulated_span: layout.accumulated_span_in_line(span_size, position, group_index),
        }
    }

    pub(crate) fn line_position(&self) -> LinePosition {
        LinePosition::of(self.span_count, self.span_size, self.line_accumulated_span)
    }
}

// ============================================================================
// Linear layout
// ============================================================================

/// A single-span list: every item is its own line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LinearLayout {
    orientation: Orientation,
}

impl LinearLayout {
    /// Create a linear layout scrolling along `orientation`.
    pub fn new(orientation: Orientation) -> Self {
        Self { orientation }
    }

    /// A vertically scrolling list.
    pub fn vertical() -> Self {
        Self::new(Orientation::Vertical)
    }

    /// A horizontally scrolling list.
    pub fn horizontal() -> Self {
        Self::new(Orientation::Horizontal)
    }
}

impl LayoutQuery for LinearLayout {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn span_count(&self) -> usize {
        1
    }

    fn span_size(&self, _position: usize) -> usize {
        1
    }

    fn accumulated_span_in_line(&self, span_size: usize, _position: usize, _group_index: usize) -> usize {
        span_size
    }

    fn group_index(&self, position: usize) -> usize {
        position
    }

    fn group_count(&self, list_size: usize) -> usize {
        list_size
    }
}

// ============================================================================
// Grid layout
// ============================================================================

/// Supplies the number of spans each item occupies in a grid.
pub trait SpanSizeLookup: Send + Sync {
    /// Spans taken by the item at `position`.
    fn span_size(&self, position: usize) -> usize;
}

impl<F> SpanSizeLookup for F
where
    F: Fn(usize) -> usize + Send + Sync,
{
    fn span_size(&self, position: usize) -> usize {
        self(position)
    }
}

/// Every item takes one span.
#[derive(Debug, Clone, Copy, Default)]
pub struct SingleSpanLookup;

impl SpanSizeLookup for SingleSpanLookup {
    fn span_size(&self, _position: usize) -> usize {
        1
    }
}

/// Span size, line and spans used so far in that line, per position.
#[derive(Debug, Clone, Copy)]
struct SpanEntry {
    span_size: usize,
    group: usize,
    accumulated: usize,
}

/// The span-group walk from position 0, extended on demand.
#[derive(Debug, Default)]
struct SpanGroupCache {
    entries: Vec<SpanEntry>,
    line_span: usize,
    group: usize,
}

impl SpanGroupCache {
    fn push(&mut self, span_size: usize, span_count: usize) {
        if self.line_span + span_size > span_count {
            self.group += 1;
            self.line_span = 0;
        }
        self.line_span += span_size;
        self.entries.push(SpanEntry {
            span_size,
            group: self.group,
            accumulated: self.line_span,
        });
        if self.line_span == span_count {
            self.group += 1;
            self.line_span = 0;
        }
    }
}

/// A grid packing items into lines of `span_count` spans.
///
/// An item that does not fit in what is left of the current line wraps to
/// the next one, leaving the gap unfilled.
///
/// Line assignment depends on every earlier item, so the walk is cached and
/// only extended past the furthest position queried so far. Call
/// [`invalidate_span_cache`](Self::invalidate_span_cache) when the span
/// sizes the lookup returns change. Clones share the cache.
#[derive(Clone)]
pub struct GridLayout {
    orientation: Orientation,
    span_count: usize,
    lookup: Arc<dyn SpanSizeLookup>,
    cache: Arc<Mutex<SpanGroupCache>>,
}

impl GridLayout {
    /// Create a grid with `span_count` spans per line, one span per item.
    pub fn new(orientation: Orientation, span_count: usize) -> DividerResult<Self> {
        if span_count == 0 {
            return Err(DividerError::InvalidSpanCount(span_count));
        }
        Ok(Self {
            orientation,
            span_count,
            lookup: Arc::new(SingleSpanLookup),
            cache: Arc::default(),
        })
    }

    /// Use a custom span size lookup.
    pub fn with_span_size_lookup(mut self, lookup: Arc<dyn SpanSizeLookup>) -> Self {
        self.lookup = lookup;
        self.cache = Arc::default();
        self
    }

    /// Forget cached line assignments, e.g. after the adapter's data changed.
    pub fn invalidate_span_cache(&self) {
        *self.cache.lock() = SpanGroupCache::default();
    }

    fn clamped_span(&self, position: usize) -> usize {
        self.lookup.span_size(position).clamp(1, self.span_count)
    }

    fn entry(&self, position: usize) -> SpanEntry {
        let mut cache = self.cache.lock();
        while cache.entries.len() <= position {
            let span_size = self.clamped_span(cache.entries.len());
            cache.push(span_size, self.span_count);
        }
        cache.entries[position]
    }
}

impl fmt::Debug for GridLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GridLayout")
            .field("orientation", &self.orientation)
            .field("span_count", &self.span_count)
            .finish_non_exhaustive()
    }
}

impl LayoutQuery for GridLayout {
    fn orientation(&self) -> Orientation {
        self.orientation
    }

    fn span_count(&self) -> usize {
        self.span_count
    }

    fn span_size(&self, position: usize) -> usize {
        self.entry(position).span_size
    }

    fn accumulated_span_in_line(&self, span_size: usize, position: usize, group_index: usize) -> usize {
        let entry = self.entry(position);
        if entry.group == group_index {
            return span_size + entry.accumulated - entry.span_size;
        }
        let cache = self.cache.lock();
        let preceding: usize = cache.entries[..position]
            .iter()
            .filter(|e| e.group == group_index)
            .map(|e| e.span_size)
            .sum();
        span_size + preceding
    }

    fn group_index(&self, position: usize) -> usize {
        self.entry(position).group
    }

    fn group_count(&self, list_size: usize) -> usize {
        match list_size {
            0 => 0,
            n => self.group_index(n - 1) + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn grid(span_count: usize) -> GridLayout {
        GridLayout::new(Orientation::Vertical, span_count).unwrap()
    }

    #[test]
    fn test_linear_layout_groups_are_items() {
        let layout = LinearLayout::vertical();
        assert_eq!(layout.span_count(), 1);
        assert_eq!(layout.group_index(7), 7);
        assert_eq!(layout.group_count(12), 12);
        assert_eq!(layout.accumulated_span_in_line(1, 7, 7), 1);
    }

    #[test]
    fn test_grid_rejects_zero_spans() {
        assert!(matches!(
            GridLayout::new(Orientation::Vertical, 0),
            Err(DividerError::InvalidSpanCount(0))
        ));
    }

    #[test]
    fn test_grid_uniform_groups() {
        let layout = grid(4);
        let groups: Vec<usize> = (0..9).map(|p| layout.group_index(p)).collect();
        assert_eq!(groups, vec![0, 0, 0, 0, 1, 1, 1, 1, 2]);
        assert_eq!(layout.group_count(9), 3);
        assert_eq!(layout.group_count(8), 2);
        assert_eq!(layout.group_count(0), 0);
    }

    #[test]
    fn test_grid_accumulated_span() {
        let layout = grid(4);
        let acc: Vec<usize> = (0..9)
            .map(|p| layout.accumulated_span_in_line(1, p, layout.group_index(p)))
            .collect();
        assert_eq!(acc, vec![1, 2, 3, 4, 1, 2, 3, 4, 1]);
    }

    #[test]
    fn test_grid_variable_spans_wrap() {
        // Spans: 2, 1, 2, 3, 1 in a 3-span grid.
        // Line 0: [2, 1]; line 1: [2] (3 does not fit); line 2: [3]; line 3: [1].
        let spans: [usize; 5] = [2, 1, 2, 3, 1];
        let layout = grid(3).with_span_size_lookup(Arc::new(move |p: usize| spans[p]));

        let groups: Vec<usize> = (0..5).map(|p| layout.group_index(p)).collect();
        assert_eq!(groups, vec![0, 0, 1, 2, 3]);
        assert_eq!(layout.group_count(5), 4);

        let acc: Vec<usize> = (0..5)
            .map(|p| layout.accumulated_span_in_line(layout.span_size(p), p, groups[p]))
            .collect();
        assert_eq!(acc, vec![2, 3, 2, 3, 1]);
    }

    #[test]
    fn test_grid_full_width_header() {
        // A full-width header followed by two-column rows.
        let layout = grid(2).with_span_size_lookup(Arc::new(|p: usize| if p == 0 { 2 } else { 1 }));
        let groups: Vec<usize> = (0..5).map(|p| layout.group_index(p)).collect();
        assert_eq!(groups, vec![0, 1, 1, 2, 2]);
        assert_eq!(layout.accumulated_span_in_line(2, 0, 0), 2);
    }

    #[test]
    fn test_grid_clamps_span_sizes() {
        let layout = grid(3).with_span_size_lookup(Arc::new(|p: usize| if p == 0 { 0 } else { 9 }));
        assert_eq!(layout.span_size(0), 1);
        assert_eq!(layout.span_size(1), 3);
    }

    #[test]
    fn test_span_walk_is_cached_until_invalidated() {
        let calls = Arc::new(AtomicUsize::new(0));
        let counter = Arc::clone(&calls);
        let layout = grid(3).with_span_size_lookup(Arc::new(move |_: usize| -> usize {
            counter.fetch_add(1, Ordering::Relaxed);
            1
        }));

        assert_eq!(layout.group_index(9), 3);
        assert_eq!(layout.group_count(10), 4);
        assert_eq!(layout.accumulated_span_in_line(1, 4, 1), 2);
        assert_eq!(calls.load(Ordering::Relaxed), 10);

        // Clones share the walk.
        let clone = layout.clone();
        assert_eq!(clone.group_index(5), 1);
        assert_eq!(calls.load(Ordering::Relaxed), 10);

        layout.invalidate_span_cache();
        assert_eq!(layout.group_index(2), 0);
        assert_eq!(calls.load(Ordering::Relaxed), 13);
    }

    #[test]
    fn test_group_index_within_group_count() {
        let layout = grid(3).with_span_size_lookup(Arc::new(|p: usize| p % 3 + 1));
        for list_size in 1..20 {
            let count = layout.group_count(list_size);
            for position in 0..list_size {
                assert!(layout.group_index(position) < count);
            }
        }
    }

    #[test]
    fn test_line_position() {
        assert_eq!(LinePosition::of(4, 1, 1), LinePosition::First);
        assert_eq!(LinePosition::of(4, 1, 4), LinePosition::Last);
        assert_eq!(LinePosition::of(4, 1, 2), LinePosition::Middle);
    }
}
