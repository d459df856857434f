//! Per-group divider margins.

use std::sync::Arc;

use tracing::debug;

use super::default_cell::DefaultCell;
use crate::logging::targets;

/// Supplies the margin of each group's divider, in pixels.
///
/// The margin is applied on both ends of a divider: left and right for a
/// vertical list, top and bottom for a horizontal one. A margin of 0 makes
/// the divider follow the children's own layout margins instead.
pub trait MarginProvider: Send + Sync {
    /// Margin for the group at `group_index` of `group_count`.
    fn margin_size_for_item(&self, group_count: usize, group_index: usize) -> i32;
}

impl<F> MarginProvider for F
where
    F: Fn(usize, usize) -> i32 + Send + Sync,
{
    fn margin_size_for_item(&self, group_count: usize, group_index: usize) -> i32 {
        self(group_count, group_index)
    }
}

/// The default margin from the divider defaults.
#[derive(Debug, Clone, Copy)]
pub struct DefaultMargin {
    margin: i32,
}

impl MarginProvider for DefaultMargin {
    fn margin_size_for_item(&self, _group_count: usize, _group_index: usize) -> i32 {
        self.margin
    }
}

/// The same margin for every group.
#[derive(Debug, Clone, Copy)]
pub struct GeneralMargin {
    margin: i32,
}

impl GeneralMargin {
    /// Use `margin` pixels for every group.
    pub fn new(margin: i32) -> Self {
        Self { margin }
    }
}

impl MarginProvider for GeneralMargin {
    fn margin_size_for_item(&self, _group_count: usize, _group_index: usize) -> i32 {
        self.margin
    }
}

static DEFAULT_MARGIN: DefaultCell<DefaultMargin> = DefaultCell::new();

/// The default margin provider for `margin`.
///
/// Shared when `margin` matches the first default margin requested.
pub fn default_margin_provider(margin: i32) -> Arc<dyn MarginProvider> {
    let shared = DEFAULT_MARGIN.get_or_init(|| {
        debug!(target: targets::PROVIDERS, margin, "creating default margin provider");
        DefaultMargin { margin }
    });
    if shared.margin == margin {
        shared
    } else {
        Arc::new(DefaultMargin { margin })
    }
}

/// A provider returning `margin` for every group.
pub fn general_margin_provider(margin: i32) -> Arc<dyn MarginProvider> {
    Arc::new(GeneralMargin::new(margin))
}
