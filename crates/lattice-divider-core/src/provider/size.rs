//! Per-group divider thickness.

use std::sync::Arc;

use lattice_divider_render::{Drawable, NO_INTRINSIC_SIZE};
use tracing::debug;

use super::default_cell::DefaultCell;
use crate::layout::Orientation;
use crate::logging::targets;

/// Supplies the thickness of each group's divider, in pixels.
///
/// Thickness is the divider's height in a vertical list and its width in a
/// horizontal one.
pub trait SizeProvider: Send + Sync {
    /// Thickness for the group at `group_index` of `group_count`.
    ///
    /// `drawable` is the drawable resolved for the same group, if any.
    fn size_for_item(
        &self,
        drawable: Option<&dyn Drawable>,
        orientation: Orientation,
        group_count: usize,
        group_index: usize,
    ) -> i32;
}

impl<F> SizeProvider for F
where
    F: Fn(Option<&dyn Drawable>, Orientation, usize, usize) -> i32 + Send + Sync,
{
    fn size_for_item(
        &self,
        drawable: Option<&dyn Drawable>,
        orientation: Orientation,
        group_count: usize,
        group_index: usize,
    ) -> i32 {
        self(drawable, orientation, group_count, group_index)
    }
}

/// Uses the drawable's intrinsic size along the scroll axis, falling back to
/// the default divider size.
#[derive(Debug, Clone, Copy)]
pub struct DefaultSize {
    size: i32,
}

impl SizeProvider for DefaultSize {
    fn size_for_item(
        &self,
        drawable: Option<&dyn Drawable>,
        orientation: Orientation,
        _group_count: usize,
        _group_index: usize,
    ) -> i32 {
        let intrinsic = drawable.map_or(NO_INTRINSIC_SIZE, |d| match orientation {
            Orientation::Vertical => d.intrinsic_height(),
            Orientation::Horizontal => d.intrinsic_width(),
        });
        if intrinsic == NO_INTRINSIC_SIZE {
            self.size
        } else {
            intrinsic
        }
    }
}

/// The same thickness for every group.
#[derive(Debug, Clone, Copy)]
pub struct GeneralSize {
    size: i32,
}

impl GeneralSize {
    /// Use `size` pixels for every group.
    pub fn new(size: i32) -> Self {
        Self { size }
    }
}

impl SizeProvider for GeneralSize {
    fn size_for_item(
        &self,
        _drawable: Option<&dyn Drawable>,
        _orientation: Orientation,
        _group_count: usize,
        _group_index: usize,
    ) -> i32 {
        self.size
    }
}

static DEFAULT_SIZE: DefaultCell<DefaultSize> = DefaultCell::new();

/// The default size provider for `fallback`.
///
/// The shared instance is built for the first fallback requested. Other
/// fallbacks get their own provider.
pub fn default_size_provider(fallback: i32) -> Arc<dyn SizeProvider> {
    let shared = DEFAULT_SIZE.get_or_init(|| {
        debug!(target: targets::PROVIDERS, fallback, "creating default size provider");
        DefaultSize { size: fallback }
    });
    if shared.size == fallback {
        shared
    } else {
        Arc::new(DefaultSize { size: fallback })
    }
}

/// A provider returning `size` for every group.
pub fn general_size_provider(size: i32) -> Arc<dyn SizeProvider> {
    Arc::new(GeneralSize::new(size))
}
