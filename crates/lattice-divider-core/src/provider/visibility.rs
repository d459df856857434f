//! Which parts of a divider are shown for each group.

use std::sync::Arc;

use tracing::debug;

use super::default_cell::DefaultCell;
use crate::logging::targets;

/// Which components of a divider are shown for a group.
///
/// A divider has two components: the full-size line after each group and
/// the half-size lines between items inside a group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum VisibilityMode {
    /// Neither component; the item reserves no space at all.
    ShowNone,
    /// Only the half dividers between items of the group.
    ShowItemsOnly,
    /// Only the divider after the group.
    ShowGroupOnly,
    /// Both components.
    #[default]
    ShowAll,
}

impl VisibilityMode {
    /// Zero the hidden components of a `(size, half_size)` pair.
    pub fn apply(self, size: i32, half_size: i32) -> (i32, i32) {
        match self {
            Self::ShowNone => (0, 0),
            Self::ShowItemsOnly => (0, half_size),
            Self::ShowGroupOnly => (size, 0),
            Self::ShowAll => (size, half_size),
        }
    }
}

/// Decides the [`VisibilityMode`] of each group.
///
/// `group_count` equals the list size and `group_index` the item position
/// when the layout has a single span.
pub trait VisibilityProvider: Send + Sync {
    /// Visibility for the group at `group_index` of `group_count`.
    fn visibility_for_item(&self, group_count: usize, group_index: usize) -> VisibilityMode;
}

impl<F> VisibilityProvider for F
where
    F: Fn(usize, usize) -> VisibilityMode + Send + Sync,
{
    fn visibility_for_item(&self, group_count: usize, group_index: usize) -> VisibilityMode {
        self(group_count, group_index)
    }
}

/// Shows every divider.
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultVisibility;

impl VisibilityProvider for DefaultVisibility {
    fn visibility_for_item(&self, _group_count: usize, _group_index: usize) -> VisibilityMode {
        VisibilityMode::ShowAll
    }
}

/// Hides the divider after the last group but keeps its item dividers.
#[derive(Debug, Clone, Copy, Default)]
pub struct LastItemInvisible;

impl VisibilityProvider for LastItemInvisible {
    fn visibility_for_item(&self, group_count: usize, group_index: usize) -> VisibilityMode {
        if group_index + 1 == group_count {
            VisibilityMode::ShowItemsOnly
        } else {
            VisibilityMode::ShowAll
        }
    }
}

static DEFAULT_VISIBILITY: DefaultCell<DefaultVisibility> = DefaultCell::new();
static LAST_ITEM_INVISIBLE: DefaultCell<LastItemInvisible> = DefaultCell::new();

/// The shared provider showing every divider.
pub fn default_visibility_provider() -> Arc<dyn VisibilityProvider> {
    DEFAULT_VISIBILITY.get_or_init(|| {
        debug!(target: targets::PROVIDERS, "creating default visibility provider");
        DefaultVisibility
    })
}

/// The shared provider hiding the divider after the last group.
pub fn last_item_invisible_provider() -> Arc<dyn VisibilityProvider> {
    LAST_ITEM_INVISIBLE.get_or_init(|| {
        debug!(target: targets::PROVIDERS, "creating last-item-invisible provider");
        LastItemInvisible
    })
}
