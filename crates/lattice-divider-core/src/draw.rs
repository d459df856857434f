//! Paint rectangles for the dividers of visible children.
//!
//! Every visible child contributes the divider after it along the scroll
//! axis and, inside a multi-span line, up to two half dividers between it
//! and its neighbors. Rectangles are derived from the child's pixel bounds;
//! when no explicit margin is configured, the child's own layout margins are
//! absorbed so that dividers meet across cell gaps.

use std::sync::Arc;

use lattice_divider_render::{tint_drawable, Drawable, PixelRect};
use smallvec::SmallVec;
use tracing::trace;

use crate::divider::{DividerKind, DividerStyle};
use crate::layout::{ChildView, ItemGeometry, LayoutQuery, LinePosition, Orientation};
use crate::logging::targets;
use crate::provider::VisibilityMode;

/// One paint operation: a drawable and the rectangle it fills.
#[derive(Debug, Clone)]
pub struct DrawRect {
    /// Target rectangle in list pixel coordinates.
    pub bounds: PixelRect,
    /// The drawable to paint, already tinted.
    pub drawable: Arc<dyn Drawable>,
}

/// Plans divider paint rectangles for a frame.
#[derive(Clone, Copy)]
pub struct DrawPlanner<'a> {
    style: &'a DividerStyle,
}

impl<'a> DrawPlanner<'a> {
    /// Create a planner for `style`.
    pub fn new(style: &'a DividerStyle) -> Self {
        Self { style }
    }

    /// Lazily plan the rectangles for `children`.
    ///
    /// Nothing is planned for space dividers or empty lists. Each call starts
    /// a fresh pass; no state carries over between frames.
    pub fn compute_draw_rects<'c>(
        &self,
        layout: &'c dyn LayoutQuery,
        children: &'c [ChildView],
        list_size: usize,
    ) -> DrawRects<'c>
    where
        'a: 'c,
    {
        let children = if self.style.kind == DividerKind::Space || list_size == 0 {
            &children[..0]
        } else {
            children
        };
        DrawRects {
            style: self.style,
            layout,
            children: children.iter(),
            list_size,
            pending: SmallVec::new().into_iter(),
        }
    }
}

/// Iterator over the [`DrawRect`]s of one paint pass.
///
/// Rectangles come out child by child in the order the children were given.
/// For each child the half divider before it comes first, then the one
/// after it, then the divider after its line.
pub struct DrawRects<'a> {
    style: &'a DividerStyle,
    layout: &'a dyn LayoutQuery,
    children: std::slice::Iter<'a, ChildView>,
    list_size: usize,
    pending: smallvec::IntoIter<[DrawRect; 3]>,
}

impl Iterator for DrawRects<'_> {
    type Item = DrawRect;

    fn next(&mut self) -> Option<DrawRect> {
        loop {
            if let Some(rect) = self.pending.next() {
                return Some(rect);
            }
            let child = self.children.next()?;
            self.pending = self.plan_child(child).into_iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let pending = self.pending.len();
        (pending, Some(pending + self.children.len() * 3))
    }
}

impl DrawRects<'_> {
    fn plan_child(&self, child: &ChildView) -> SmallVec<[DrawRect; 3]> {
        let mut rects = SmallVec::new();
        let style = self.style;
        let position = child.position;

        let (group_index, group_count) = ItemGeometry::group(self.layout, position, self.list_size);
        let Some(mut drawable) = style.drawable.drawable_for_item(group_count, group_index) else {
            trace!(target: targets::DRAW, position, group_index, "no drawable");
            return rects;
        };
        let mode = style.visibility.visibility_for_item(group_count, group_index);
        if mode == VisibilityMode::ShowNone {
            trace!(target: targets::DRAW, position, group_index, "divider hidden");
            return rects;
        }

        let orientation = self.layout.orientation();
        let geometry = ItemGeometry::spans(self.layout, position, group_index, group_count);
        let margin = style.margin.margin_size_for_item(group_count, group_index);
        let size = style
            .size
            .size_for_item(Some(drawable.as_ref()), orientation, group_count, group_index);
        if let Some(tint) = &style.tint {
            drawable = tint_drawable(&drawable, tint.tint_for_item(group_count, group_index));
        }

        // A 1px divider keeps its full width on both sides of a span boundary.
        let (size, half) = mode.apply(size, if size < 2 { size } else { size / 2 });

        // Nothing follows the last item, so its trailing half takes both halves.
        let last_half = if position + 1 == self.list_size { half * 2 } else { half };

        let use_cell_margin = margin == 0;
        let bounds = child.bounds;
        let cell = child.margins;
        let mut before = 0;
        let mut after = 0;

        let mut push = |rect: PixelRect| {
            rects.push(DrawRect {
                bounds: rect,
                drawable: Arc::clone(&drawable),
            });
        };

        let splits_line = geometry.span_count > 1 && geometry.span_size < geometry.span_count;
        let line_position = geometry.line_position();
        let leading = matches!(line_position, LinePosition::Last | LinePosition::Middle);
        let trailing = matches!(line_position, LinePosition::First | LinePosition::Middle);
        let extends_past_cell = group_index + 1 < group_count || size > 0;

        match orientation {
            Orientation::Vertical => {
                if splits_line {
                    let mut top = bounds.top + margin;
                    let mut bottom = bounds.bottom - margin;
                    if use_cell_margin {
                        if group_index > 0 {
                            top -= cell.top;
                        }
                        if extends_past_cell {
                            bottom += cell.bottom;
                        }
                        // Reach into the divider below to fill the corner.
                        bottom += size;
                    }

                    if leading {
                        let right = bounds.left - margin - cell.left;
                        push(PixelRect::new(right - half, top, right, bottom));
                        if use_cell_margin {
                            before = cell.left;
                        }
                    }
                    if trailing {
                        let left = bounds.right + margin + cell.right;
                        push(PixelRect::new(left, top, left + last_half, bottom));
                        if use_cell_margin {
                            after = cell.right;
                        }
                    }
                }

                let top = bounds.bottom + cell.bottom;
                push(PixelRect::new(
                    bounds.left + margin - before,
                    top,
                    bounds.right - margin + after,
                    top + size,
                ));
            }
            Orientation::Horizontal => {
                if splits_line {
                    let mut left = bounds.left + margin;
                    let mut right = bounds.right - margin;
                    if use_cell_margin {
                        if group_index > 0 {
                            left -= cell.left;
                        }
                        if extends_past_cell {
                            right += cell.right;
                        }
                        right += size;
                    }

                    if leading {
                        let bottom = bounds.top - margin - cell.top;
                        push(PixelRect::new(left, bottom - half, right, bottom));
                        if use_cell_margin {
                            before = cell.top;
                        }
                    }
                    if trailing {
                        let top = bounds.bottom + margin + cell.bottom;
                        push(PixelRect::new(left, top, right, top + last_half));
                        if use_cell_margin {
                            after = cell.bottom;
                        }
                    }
                }

                let left = bounds.right + cell.right;
                push(PixelRect::new(
                    left,
                    bounds.top + margin - before,
                    left + size,
                    bounds.bottom - margin + after,
                ));
            }
        }

        rects
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{GridLayout, LinearLayout};
    use crate::provider::{
        default_visibility_provider, general_drawable_provider, general_margin_provider,
        general_size_provider, general_tint_provider, last_item_invisible_provider,
    };
    use lattice_divider_render::{Color, ColorDrawable, Insets, PaintOp, RecordingPainter};

    fn style(size: i32, margin: i32) -> DividerStyle {
        DividerStyle {
            kind: DividerKind::Color,
            visibility: default_visibility_provider(),
            drawable: general_drawable_provider(ColorDrawable::shared(Color::GRAY)),
            tint: None,
            size: general_size_provider(size),
            margin: general_margin_provider(margin),
        }
    }

    fn bounds_of(style: &DividerStyle, layout: &dyn LayoutQuery, children: &[ChildView], list_size: usize) -> Vec<PixelRect> {
        DrawPlanner::new(style)
            .compute_draw_rects(layout, children, list_size)
            .map(|rect| rect.bounds)
            .collect()
    }

    /// Children of a vertical grid with 20px cells on a 30px pitch.
    fn grid_children(span_count: usize, count: usize) -> Vec<ChildView> {
        (0..count)
            .map(|p| {
                let x = (p % span_count) as i32 * 30;
                let y = (p / span_count) as i32 * 30;
                ChildView::new(p, PixelRect::new(x, y, x + 20, y + 20))
            })
            .collect()
    }

    #[test]
    fn test_space_and_empty_lists_plan_nothing() {
        let mut space = style(4, 0);
        space.kind = DividerKind::Space;
        let layout = LinearLayout::vertical();
        let children = [ChildView::new(0, PixelRect::new(0, 0, 100, 40))];

        assert!(bounds_of(&space, &layout, &children, 1).is_empty());
        assert!(bounds_of(&style(4, 0), &layout, &children, 0).is_empty());
    }

    #[test]
    fn test_linear_vertical_bottom_divider() {
        let style = style(3, 2);
        let layout = LinearLayout::vertical();
        let children = [
            ChildView::new(0, PixelRect::new(0, 0, 100, 40)),
            ChildView::new(1, PixelRect::new(0, 43, 100, 83)),
        ];
        assert_eq!(
            bounds_of(&style, &layout, &children, 2),
            vec![PixelRect::new(2, 40, 98, 43), PixelRect::new(2, 83, 98, 86)]
        );
    }

    #[test]
    fn test_linear_horizontal_right_divider() {
        let style = style(3, 2);
        let layout = LinearLayout::horizontal();
        let children = [ChildView::new(0, PixelRect::new(0, 0, 40, 100))];
        assert_eq!(
            bounds_of(&style, &layout, &children, 1),
            vec![PixelRect::new(40, 2, 43, 98)]
        );
    }

    #[test]
    fn test_grid_vertical_half_dividers() {
        let style = style(4, 0);
        let layout = GridLayout::new(Orientation::Vertical, 4).unwrap();
        let children = grid_children(4, 9);
        let planner = DrawPlanner::new(&style);

        let rects_for = |position: usize| -> Vec<PixelRect> {
            planner
                .compute_draw_rects(&layout, &children[position..=position], 9)
                .map(|rect| rect.bounds)
                .collect()
        };

        // First in the first line.
        assert_eq!(
            rects_for(0),
            vec![PixelRect::new(20, 0, 22, 24), PixelRect::new(0, 20, 20, 24)]
        );
        // Middle of the second line: one half on each side.
        assert_eq!(
            rects_for(5),
            vec![
                PixelRect::new(28, 30, 30, 54),
                PixelRect::new(50, 30, 52, 54),
                PixelRect::new(30, 50, 50, 54),
            ]
        );
        // Last of the second line.
        assert_eq!(
            rects_for(7),
            vec![PixelRect::new(88, 30, 90, 54), PixelRect::new(90, 50, 110, 54)]
        );
        // First of the second line.
        assert_eq!(
            rects_for(4),
            vec![PixelRect::new(20, 30, 22, 54), PixelRect::new(0, 50, 20, 54)]
        );
    }

    #[test]
    fn test_last_item_trailing_half_is_doubled() {
        let style = style(4, 0);
        let layout = GridLayout::new(Orientation::Vertical, 4).unwrap();
        let children = grid_children(4, 9);

        let rects: Vec<DrawRect> = DrawPlanner::new(&style)
            .compute_draw_rects(&layout, &children[8..], 9)
            .collect();
        assert_eq!(rects.len(), 2);
        assert_eq!(rects[0].bounds, PixelRect::new(20, 60, 24, 84));
        assert_eq!(rects[0].bounds.width(), 4);
        assert_eq!(rects[1].bounds, PixelRect::new(0, 80, 20, 84));
    }

    #[test]
    fn test_hidden_last_divider_keeps_item_halves() {
        let mut style = style(4, 0);
        style.visibility = last_item_invisible_provider();
        let layout = GridLayout::new(Orientation::Vertical, 4).unwrap();
        let children = grid_children(4, 9);

        assert_eq!(
            bounds_of(&style, &layout, &children[8..], 9),
            vec![PixelRect::new(20, 60, 24, 80), PixelRect::new(0, 80, 20, 80)]
        );
    }

    #[test]
    fn test_one_pixel_divider_keeps_full_half() {
        let style = style(1, 0);
        let layout = GridLayout::new(Orientation::Vertical, 2).unwrap();
        let children = grid_children(2, 4);
        let rects = bounds_of(&style, &layout, &children[..1], 4);
        assert_eq!(rects[0], PixelRect::new(20, 0, 21, 21));
    }

    #[test]
    fn test_cell_margins_are_absorbed() {
        let style = style(4, 0);
        let layout = GridLayout::new(Orientation::Vertical, 2).unwrap();
        let children = [
            ChildView::new(0, PixelRect::new(3, 3, 47, 47)).with_margins(Insets::uniform(3)),
            ChildView::new(1, PixelRect::new(53, 3, 97, 47)).with_margins(Insets::uniform(3)),
        ];
        assert_eq!(
            bounds_of(&style, &layout, &children, 4),
            vec![
                PixelRect::new(50, 3, 52, 54),
                PixelRect::new(3, 50, 50, 54),
                PixelRect::new(48, 3, 50, 54),
                PixelRect::new(50, 50, 97, 54),
            ]
        );
    }

    #[test]
    fn test_explicit_margin_ignores_cell_margins() {
        let style = style(4, 2);
        let layout = GridLayout::new(Orientation::Vertical, 2).unwrap();
        let children =
            [ChildView::new(0, PixelRect::new(3, 3, 47, 47)).with_margins(Insets::uniform(3))];
        assert_eq!(
            bounds_of(&style, &layout, &children, 4),
            vec![PixelRect::new(52, 5, 54, 45), PixelRect::new(5, 50, 45, 54)]
        );
    }

    #[test]
    fn test_grid_horizontal_is_transposed() {
        let style = style(4, 0);
        let layout = GridLayout::new(Orientation::Horizontal, 2).unwrap();
        // Columns of two items stacked top to bottom.
        let children = [
            ChildView::new(0, PixelRect::new(0, 0, 20, 20)),
            ChildView::new(1, PixelRect::new(0, 30, 20, 50)),
        ];
        assert_eq!(
            bounds_of(&style, &layout, &children, 4),
            vec![
                PixelRect::new(0, 20, 24, 22),
                PixelRect::new(20, 0, 24, 20),
                PixelRect::new(0, 28, 24, 30),
                PixelRect::new(20, 30, 24, 50),
            ]
        );
    }

    #[test]
    fn test_grid_horizontal_middle_absorbs_cell_margins() {
        let style = style(4, 0);
        let layout = GridLayout::new(Orientation::Horizontal, 3).unwrap();
        // Columns of three 20px cells with 3px layout margins on a 30px pitch.
        let children = [
            ChildView::new(1, PixelRect::new(0, 30, 20, 50)).with_margins(Insets::uniform(3)),
            ChildView::new(4, PixelRect::new(30, 30, 50, 50)).with_margins(Insets::uniform(3)),
        ];

        assert_eq!(
            bounds_of(&style, &layout, &children, 6),
            vec![
                PixelRect::new(0, 25, 27, 27),
                PixelRect::new(0, 53, 27, 55),
                PixelRect::new(23, 27, 27, 53),
                // Second column: the leading edge also takes the cell margin.
                PixelRect::new(27, 25, 57, 27),
                PixelRect::new(27, 53, 57, 55),
                PixelRect::new(53, 27, 57, 53),
            ]
        );
    }

    #[test]
    fn test_grid_horizontal_first_and_last_with_cell_margins() {
        let style = style(4, 0);
        let layout = GridLayout::new(Orientation::Horizontal, 2).unwrap();
        let children = [
            ChildView::new(0, PixelRect::new(3, 3, 23, 23)).with_margins(Insets::uniform(3)),
            ChildView::new(1, PixelRect::new(3, 33, 23, 53)).with_margins(Insets::uniform(3)),
        ];

        assert_eq!(
            bounds_of(&style, &layout, &children, 4),
            vec![
                PixelRect::new(3, 26, 30, 28),
                PixelRect::new(26, 3, 30, 26),
                PixelRect::new(3, 28, 30, 30),
                PixelRect::new(26, 30, 30, 53),
            ]
        );
    }

    #[test]
    fn test_show_group_only_paints_zero_width_halves() {
        let mut style = style(4, 0);
        style.visibility = Arc::new(|_: usize, _: usize| VisibilityMode::ShowGroupOnly);
        let layout = GridLayout::new(Orientation::Vertical, 4).unwrap();
        let children = grid_children(4, 9);

        // Middle of the second line: both halves collapse, the line keeps its size.
        assert_eq!(
            bounds_of(&style, &layout, &children[5..6], 9),
            vec![
                PixelRect::new(30, 30, 30, 54),
                PixelRect::new(50, 30, 50, 54),
                PixelRect::new(30, 50, 50, 54),
            ]
        );
        // The last item has no half to double.
        assert_eq!(
            bounds_of(&style, &layout, &children[8..], 9),
            vec![PixelRect::new(20, 60, 20, 84), PixelRect::new(0, 80, 20, 84)]
        );
    }

    #[test]
    fn test_missing_drawable_and_hidden_groups_are_skipped() {
        let mut style = style(4, 0);
        style.drawable = Arc::new(|_: usize, index: usize| {
            (index != 1).then(|| ColorDrawable::shared(Color::GRAY))
        });
        style.visibility = Arc::new(|_: usize, index: usize| {
            if index == 2 {
                VisibilityMode::ShowNone
            } else {
                VisibilityMode::ShowAll
            }
        });
        let layout = LinearLayout::vertical();
        let children: Vec<ChildView> = (0..4)
            .map(|p| ChildView::new(p, PixelRect::new(0, p as i32 * 50, 100, p as i32 * 50 + 46)))
            .collect();

        assert_eq!(
            bounds_of(&style, &layout, &children, 4),
            vec![PixelRect::new(0, 46, 100, 50), PixelRect::new(0, 196, 100, 200)]
        );
    }

    #[test]
    fn test_tint_copies_per_group() {
        let base = ColorDrawable::shared(Color::GRAY);
        let mut style = style(2, 0);
        style.drawable = general_drawable_provider(Arc::clone(&base));
        style.tint = Some(Arc::new(|_: usize, index: usize| {
            if index % 2 == 0 { Color::RED } else { Color::BLUE }
        }));
        let layout = LinearLayout::vertical();
        let children = [
            ChildView::new(0, PixelRect::new(0, 0, 10, 10)),
            ChildView::new(1, PixelRect::new(0, 12, 10, 22)),
        ];

        let mut painter = RecordingPainter::new();
        for rect in DrawPlanner::new(&style).compute_draw_rects(&layout, &children, 2) {
            assert!(!Arc::ptr_eq(&rect.drawable, &base));
            rect.drawable.draw(&mut painter, rect.bounds);
        }
        base.draw(&mut painter, PixelRect::new(0, 0, 1, 1));

        let colors: Vec<Color> = painter
            .ops()
            .iter()
            .map(|op| match op {
                PaintOp::Fill { color, .. } => *color,
                PaintOp::Image { .. } => Color::TRANSPARENT,
            })
            .collect();
        assert_eq!(colors, vec![Color::RED, Color::BLUE, Color::GRAY]);
    }

    #[test]
    fn test_general_tint_applies_to_every_group() {
        let mut style = style(1, 0);
        style.tint = Some(general_tint_provider(Color::GREEN));
        let layout = LinearLayout::vertical();
        let children = [ChildView::new(0, PixelRect::new(0, 0, 10, 10))];

        let mut painter = RecordingPainter::new();
        for rect in DrawPlanner::new(&style).compute_draw_rects(&layout, &children, 1) {
            rect.drawable.draw(&mut painter, rect.bounds);
        }
        assert_eq!(
            painter.ops(),
            &[PaintOp::Fill {
                rect: PixelRect::new(0, 10, 10, 11),
                color: Color::GREEN
            }]
        );
    }

    #[test]
    fn test_passes_are_restartable() {
        let style = style(4, 0);
        let layout = GridLayout::new(Orientation::Vertical, 4).unwrap();
        let children = grid_children(4, 9);
        let planner = DrawPlanner::new(&style);

        let first = bounds_of(&style, &layout, &children, 9);
        let second: Vec<PixelRect> = planner
            .compute_draw_rects(&layout, &children, 9)
            .map(|rect| rect.bounds)
            .collect();
        assert_eq!(first, second);
        assert_eq!(first.len(), 9 + 9 + 2 * 2);
    }
}
