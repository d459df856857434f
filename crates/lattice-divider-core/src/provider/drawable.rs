//! Which drawable paints each group's divider.

use std::sync::Arc;

use lattice_divider_render::{Color, ColorDrawable, Drawable};
use tracing::debug;

use super::default_cell::DefaultCell;
use crate::logging::targets;

/// Supplies the drawable for each group.
///
/// Returning `None` leaves the group unpainted; its space is still reserved.
pub trait DrawableProvider: Send + Sync {
    /// Drawable for the group at `group_index` of `group_count`.
    fn drawable_for_item(&self, group_count: usize, group_index: usize) -> Option<Arc<dyn Drawable>>;
}

impl<F> DrawableProvider for F
where
    F: Fn(usize, usize) -> Option<Arc<dyn Drawable>> + Send + Sync,
{
    fn drawable_for_item(&self, group_count: usize, group_index: usize) -> Option<Arc<dyn Drawable>> {
        self(group_count, group_index)
    }
}

/// The default divider: a flat fill of the default divider color.
#[derive(Debug)]
pub struct DefaultDrawable {
    color: Color,
    drawable: Arc<dyn Drawable>,
}

impl DefaultDrawable {
    fn new(color: Color) -> Self {
        Self {
            color,
            drawable: ColorDrawable::shared(color),
        }
    }
}

impl DrawableProvider for DefaultDrawable {
    fn drawable_for_item(&self, _group_count: usize, _group_index: usize) -> Option<Arc<dyn Drawable>> {
        Some(Arc::clone(&self.drawable))
    }
}

/// The same drawable for every group.
#[derive(Debug, Clone)]
pub struct GeneralDrawable {
    drawable: Arc<dyn Drawable>,
}

impl GeneralDrawable {
    /// Use `drawable` for every group.
    pub fn new(drawable: Arc<dyn Drawable>) -> Self {
        Self { drawable }
    }
}

impl DrawableProvider for GeneralDrawable {
    fn drawable_for_item(&self, _group_count: usize, _group_index: usize) -> Option<Arc<dyn Drawable>> {
        Some(Arc::clone(&self.drawable))
    }
}

static DEFAULT_DRAWABLE: DefaultCell<DefaultDrawable> = DefaultCell::new();

/// The default drawable provider for `color`.
///
/// Calls with the color the shared instance was built for get that
/// instance; any other color gets its own provider.
pub fn default_drawable_provider(color: Color) -> Arc<dyn DrawableProvider> {
    let shared = DEFAULT_DRAWABLE.get_or_init(|| {
        debug!(target: targets::PROVIDERS, %color, "creating default drawable provider");
        DefaultDrawable::new(color)
    });
    if shared.color == color {
        shared
    } else {
        Arc::new(DefaultDrawable::new(color))
    }
}

/// A provider returning `drawable` for every group.
pub fn general_drawable_provider(drawable: Arc<dyn Drawable>) -> Arc<dyn DrawableProvider> {
    Arc::new(GeneralDrawable::new(drawable))
}
