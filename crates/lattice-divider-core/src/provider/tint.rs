//! Per-group tint colors for divider drawables.

use std::sync::Arc;

use lattice_divider_render::Color;

/// Supplies the tint applied to each group's drawable.
///
/// Tinting is optional: a divider without a tint provider paints its
/// drawables as they are.
pub trait TintProvider: Send + Sync {
    /// Tint for the group at `group_index` of `group_count`.
    fn tint_for_item(&self, group_count: usize, group_index: usize) -> Color;
}

impl<F> TintProvider for F
where
    F: Fn(usize, usize) -> Color + Send + Sync,
{
    fn tint_for_item(&self, group_count: usize, group_index: usize) -> Color {
        self(group_count, group_index)
    }
}

/// The same tint for every group.
#[derive(Debug, Clone, Copy)]
pub struct GeneralTint {
    tint: Color,
}

impl GeneralTint {
    /// Tint every group with `tint`.
    pub fn new(tint: Color) -> Self {
        Self { tint }
    }
}

impl TintProvider for GeneralTint {
    fn tint_for_item(&self, _group_count: usize, _group_index: usize) -> Color {
        self.tint
    }
}

/// A provider returning `tint` for every group.
pub fn general_tint_provider(tint: Color) -> Arc<dyn TintProvider> {
    Arc::new(GeneralTint::new(tint))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_general_tint() {
        let provider = general_tint_provider(Color::BLUE);
        assert_eq!(provider.tint_for_item(10, 0), Color::BLUE);
        assert_eq!(provider.tint_for_item(10, 9), Color::BLUE);
    }

    #[test]
    fn test_alternating_tint() {
        let provider = |_count: usize, index: usize| {
            if index % 2 == 0 { Color::RED } else { Color::GREEN }
        };
        assert_eq!(provider.tint_for_item(4, 0), Color::RED);
        assert_eq!(provider.tint_for_item(4, 1), Color::GREEN);
    }
}
