//! The divider item decoration.

use std::fmt;
use std::sync::Arc;

use lattice_divider_render::{Insets, Painter};
use tracing::{debug, trace};

use crate::decoration::{DecorationHost, DecorationId, ItemDecoration};
use crate::draw::{DrawPlanner, DrawRects};
use crate::layout::{ChildView, LayoutQuery};
use crate::logging::{targets, PerfSpan};
use crate::offsets::OffsetCalculator;
use crate::provider::{DrawableProvider, MarginProvider, SizeProvider, TintProvider, VisibilityProvider};

/// What a divider paints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum DividerKind {
    /// Only reserves space; nothing is painted.
    Space,
    /// A flat color.
    #[default]
    Color,
    /// A custom drawable.
    Drawable,
}

/// The resolved configuration of a divider.
///
/// Every attribute is looked up per group through its provider. A style is
/// built once and shared read-only by both divider passes.
#[derive(Clone)]
pub struct DividerStyle {
    /// What the divider paints.
    pub kind: DividerKind,
    /// Which divider components show for each group.
    pub visibility: Arc<dyn VisibilityProvider>,
    /// The drawable for each group.
    pub drawable: Arc<dyn DrawableProvider>,
    /// Optional tint applied to a copy of each group's drawable.
    pub tint: Option<Arc<dyn TintProvider>>,
    /// Thickness for each group.
    pub size: Arc<dyn SizeProvider>,
    /// End margin for each group.
    pub margin: Arc<dyn MarginProvider>,
}

impl fmt::Debug for DividerStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DividerStyle")
            .field("kind", &self.kind)
            .field("tinted", &self.tint.is_some())
            .finish_non_exhaustive()
    }
}

/// Draws dividers between the items of a list or grid.
///
/// Build one with [`DividerBuilder`](crate::DividerBuilder) and register it
/// with [`attach_to`](Divider::attach_to).
pub struct Divider {
    id: DecorationId,
    style: DividerStyle,
}

impl Divider {
    /// Create a divider from a resolved style.
    pub fn new(style: DividerStyle) -> Self {
        Self {
            id: DecorationId::next(),
            style,
        }
    }

    /// The registration ID.
    pub fn id(&self) -> DecorationId {
        self.id
    }

    /// What the divider paints.
    pub fn kind(&self) -> DividerKind {
        self.style.kind
    }

    /// The resolved style.
    pub fn style(&self) -> &DividerStyle {
        &self.style
    }

    /// Register with `host`, replacing any earlier registration of this
    /// divider.
    pub fn attach_to(self: &Arc<Self>, host: &mut dyn DecorationHost) {
        self.detach_from(host);
        host.add_item_decoration(Arc::clone(self) as Arc<dyn ItemDecoration>);
        trace!(target: targets::HOST, id = %self.id, "divider attached");
    }

    /// Unregister from `host`. Returns `false` if it was not attached.
    pub fn detach_from(&self, host: &mut dyn DecorationHost) -> bool {
        let removed = host.remove_item_decoration(self.id);
        if removed {
            trace!(target: targets::HOST, id = %self.id, "divider detached");
        }
        removed
    }

    /// The inset the item at `position` reserves.
    pub fn compute_inset(&self, layout: &dyn LayoutQuery, position: usize, list_size: usize) -> Insets {
        OffsetCalculator::new(&self.style).compute_inset(layout, position, list_size)
    }

    /// Plan the paint rectangles for `children`.
    pub fn draw_rects<'a>(
        &'a self,
        layout: &'a dyn LayoutQuery,
        children: &'a [ChildView],
        list_size: usize,
    ) -> DrawRects<'a> {
        DrawPlanner::new(&self.style).compute_draw_rects(layout, children, list_size)
    }
}

impl fmt::Debug for Divider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Divider")
            .field("id", &self.id)
            .field("style", &self.style)
            .finish()
    }
}

impl ItemDecoration for Divider {
    fn id(&self) -> DecorationId {
        self.id
    }

    fn item_offsets(&self, layout: &dyn LayoutQuery, position: usize, list_size: usize) -> Insets {
        self.compute_inset(layout, position, list_size)
    }

    fn on_draw(
        &self,
        painter: &mut dyn Painter,
        layout: &dyn LayoutQuery,
        children: &[ChildView],
        list_size: usize,
    ) {
        let _span = PerfSpan::new("divider_draw");
        let mut painted = 0usize;
        for rect in self.draw_rects(layout, children, list_size) {
            rect.drawable.draw(painter, rect.bounds);
            painted += 1;
        }
        debug!(target: targets::DRAW, id = %self.id, children = children.len(), painted, "divider pass");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::LinearLayout;
    use crate::provider::{
        default_visibility_provider, general_drawable_provider, general_margin_provider,
        general_size_provider,
    };
    use lattice_divider_render::{Color, ColorDrawable, PaintOp, PixelRect, RecordingPainter};

    #[derive(Default)]
    struct Host {
        decorations: Vec<Arc<dyn ItemDecoration>>,
    }

    impl DecorationHost for Host {
        fn add_item_decoration(&mut self, decoration: Arc<dyn ItemDecoration>) {
            self.decorations.push(decoration);
        }

        fn remove_item_decoration(&mut self, id: DecorationId) -> bool {
            let before = self.decorations.len();
            self.decorations.retain(|d| d.id() != id);
            self.decorations.len() != before
        }

        fn item_decoration_count(&self) -> usize {
            self.decorations.len()
        }
    }

    fn divider(kind: DividerKind) -> Arc<Divider> {
        Arc::new(Divider::new(DividerStyle {
            kind,
            visibility: default_visibility_provider(),
            drawable: general_drawable_provider(ColorDrawable::shared(Color::RED)),
            tint: None,
            size: general_size_provider(2),
            margin: general_margin_provider(0),
        }))
    }

    #[test]
    fn test_attach_is_idempotent() {
        let mut host = Host::default();
        let divider = divider(DividerKind::Color);

        divider.attach_to(&mut host);
        divider.attach_to(&mut host);
        assert_eq!(host.item_decoration_count(), 1);

        assert!(divider.detach_from(&mut host));
        assert!(!divider.detach_from(&mut host));
        assert_eq!(host.item_decoration_count(), 0);
    }

    #[test]
    fn test_distinct_dividers_coexist() {
        let mut host = Host::default();
        divider(DividerKind::Color).attach_to(&mut host);
        divider(DividerKind::Color).attach_to(&mut host);
        assert_eq!(host.item_decoration_count(), 2);
    }

    #[test]
    fn test_on_draw_paints_planned_rects() {
        let divider = divider(DividerKind::Color);
        let layout = LinearLayout::vertical();
        let children = [ChildView::new(0, PixelRect::new(0, 0, 50, 20))];

        let mut painter = RecordingPainter::new();
        divider.on_draw(&mut painter, &layout, &children, 1);
        assert_eq!(
            painter.ops(),
            &[PaintOp::Fill {
                rect: PixelRect::new(0, 20, 50, 22),
                color: Color::RED
            }]
        );
    }

    #[test]
    fn test_space_reserves_but_does_not_paint() {
        let divider = divider(DividerKind::Space);
        let layout = LinearLayout::vertical();
        let children = [ChildView::new(0, PixelRect::new(0, 0, 50, 20))];

        assert_eq!(divider.item_offsets(&layout, 0, 1), Insets::new(0, 0, 0, 2));

        let mut painter = RecordingPainter::new();
        divider.on_draw(&mut painter, &layout, &children, 1);
        assert!(painter.ops().is_empty());
    }
}
