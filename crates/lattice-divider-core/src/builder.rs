//! Divider configuration and its resolution into providers.
//!
//! [`DividerOptions`] collects what the caller set; [`resolve`] turns it into
//! a [`Divider`] by picking, for each attribute, the custom provider if one
//! was given, else a provider for the fixed value, else the shared default.

use std::fmt;
use std::sync::Arc;

use lattice_divider_render::{Color, ColorDrawable, Drawable};
use tracing::{debug, warn};

use crate::defaults::DividerDefaults;
use crate::divider::{Divider, DividerKind, DividerStyle};
use crate::logging::targets;
use crate::provider::{
    default_drawable_provider, default_margin_provider, default_size_provider,
    default_visibility_provider, general_drawable_provider, general_margin_provider,
    general_size_provider, general_tint_provider, last_item_invisible_provider, DrawableProvider,
    MarginProvider, SizeProvider, TintProvider, VisibilityProvider,
};

/// Everything a caller can set on a divider. Unset fields fall back to
/// defaults when resolved.
#[derive(Clone, Default)]
pub struct DividerOptions {
    /// What the divider paints.
    pub kind: DividerKind,
    /// Flat color, used when `kind` is [`DividerKind::Color`].
    pub color: Option<Color>,
    /// Drawable, used when `kind` is [`DividerKind::Drawable`].
    pub drawable: Option<Arc<dyn Drawable>>,
    /// Tint for every group's drawable.
    pub tint: Option<Color>,
    /// Thickness in pixels for every group.
    pub size: Option<i32>,
    /// End margin in pixels for every group.
    pub margin: Option<i32>,
    /// Hide the divider after the last group.
    pub hide_last_divider: bool,
    /// Custom visibility; overrides `hide_last_divider`.
    pub visibility_provider: Option<Arc<dyn VisibilityProvider>>,
    /// Custom drawables; overrides `color` and `drawable`.
    pub drawable_provider: Option<Arc<dyn DrawableProvider>>,
    /// Custom tints; overrides `tint`.
    pub tint_provider: Option<Arc<dyn TintProvider>>,
    /// Custom thickness; overrides `size`.
    pub size_provider: Option<Arc<dyn SizeProvider>>,
    /// Custom margins; overrides `margin`.
    pub margin_provider: Option<Arc<dyn MarginProvider>>,
}

impl fmt::Debug for DividerOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DividerOptions")
            .field("kind", &self.kind)
            .field("color", &self.color)
            .field("drawable", &self.drawable)
            .field("tint", &self.tint)
            .field("size", &self.size)
            .field("margin", &self.margin)
            .field("hide_last_divider", &self.hide_last_divider)
            .field("visibility_provider", &self.visibility_provider.is_some())
            .field("drawable_provider", &self.drawable_provider.is_some())
            .field("tint_provider", &self.tint_provider.is_some())
            .field("size_provider", &self.size_provider.is_some())
            .field("margin_provider", &self.margin_provider.is_some())
            .finish()
    }
}

/// Resolve `options` into a divider, filling gaps from `defaults`.
///
/// A tint applies to whatever drawable is resolved, including the one
/// built from a flat color.
pub fn resolve(options: &DividerOptions, defaults: &DividerDefaults) -> Divider {
    debug!(target: targets::BUILDER, ?options, "building the divider");

    let visibility = match &options.visibility_provider {
        Some(provider) => Arc::clone(provider),
        None if options.hide_last_divider => last_item_invisible_provider(),
        None => default_visibility_provider(),
    };

    let size = match &options.size_provider {
        Some(provider) => Arc::clone(provider),
        None => match non_negative("size", options.size) {
            Some(size) => general_size_provider(size),
            None => default_size_provider(defaults.size_px()),
        },
    };

    let drawable = match &options.drawable_provider {
        Some(provider) => Arc::clone(provider),
        None => match fixed_drawable(options) {
            Some(drawable) => general_drawable_provider(drawable),
            None => default_drawable_provider(defaults.color),
        },
    };

    let tint = match &options.tint_provider {
        Some(provider) => Some(Arc::clone(provider)),
        None => options.tint.map(general_tint_provider),
    };

    let margin = match &options.margin_provider {
        Some(provider) => Arc::clone(provider),
        None => match non_negative("margin", options.margin) {
            Some(margin) => general_margin_provider(margin),
            None => default_margin_provider(defaults.margin_px()),
        },
    };

    Divider::new(DividerStyle {
        kind: options.kind,
        visibility,
        drawable,
        tint,
        size,
        margin,
    })
}

/// The drawable the kind asks for, if the matching value was set.
fn fixed_drawable(options: &DividerOptions) -> Option<Arc<dyn Drawable>> {
    match options.kind {
        DividerKind::Space => None,
        DividerKind::Color => options.color.map(ColorDrawable::shared),
        DividerKind::Drawable => options.drawable.clone().inspect(|_| {
            debug!(
                target: targets::BUILDER,
                "a drawable that cannot be mirrored renders incorrectly when the span count is greater than 1"
            );
        }),
    }
}

fn non_negative(name: &'static str, value: Option<i32>) -> Option<i32> {
    match value {
        Some(value) if value < 0 => {
            warn!(target: targets::BUILDER, name, value, "ignoring negative divider dimension");
            None
        }
        value => value,
    }
}

/// Builder for [`Divider`].
///
/// # Example
///
/// ```
/// use lattice_divider_core::{Divider, LinearLayout, ItemDecoration};
/// use lattice_divider_render::{Color, Insets};
///
/// let divider = Divider::builder()
///     .color(Color::from_rgb8(0xE0, 0xE0, 0xE0))
///     .size(2)
///     .hide_last_divider()
///     .build();
///
/// let layout = LinearLayout::vertical();
/// assert_eq!(divider.item_offsets(&layout, 0, 3), Insets::new(0, 0, 0, 2));
/// assert_eq!(divider.item_offsets(&layout, 2, 3), Insets::ZERO);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DividerBuilder {
    options: DividerOptions,
    defaults: DividerDefaults,
}

impl DividerBuilder {
    /// Create a builder using the standard defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a builder falling back to `defaults`.
    pub fn with_defaults(defaults: DividerDefaults) -> Self {
        Self {
            options: DividerOptions::default(),
            defaults,
        }
    }

    /// Use the divider as blank space only.
    pub fn as_space(mut self) -> Self {
        self.options.kind = DividerKind::Space;
        self
    }

    /// Paint every divider with a flat color.
    pub fn color(mut self, color: Color) -> Self {
        self.options.color = Some(color);
        self.options.kind = DividerKind::Color;
        self
    }

    /// Paint every divider with `drawable`.
    pub fn drawable(mut self, drawable: Arc<dyn Drawable>) -> Self {
        self.options.drawable = Some(drawable);
        self.options.kind = DividerKind::Drawable;
        self
    }

    /// Tint every divider's drawable.
    pub fn tint(mut self, tint: Color) -> Self {
        self.options.tint = Some(tint);
        self
    }

    /// Set the thickness of every divider in pixels.
    pub fn size(mut self, size: i32) -> Self {
        self.options.size = Some(size);
        self
    }

    /// Set the end margin of every divider in pixels.
    pub fn margin_size(mut self, margin: i32) -> Self {
        self.options.margin = Some(margin);
        self
    }

    /// Hide the divider after the last group.
    ///
    /// In a grid the half dividers between the last group's items still
    /// show.
    pub fn hide_last_divider(mut self) -> Self {
        self.options.hide_last_divider = true;
        self
    }

    /// Decide visibility per group.
    pub fn visibility_provider(mut self, provider: Arc<dyn VisibilityProvider>) -> Self {
        self.options.visibility_provider = Some(provider);
        self
    }

    /// Pick the drawable per group.
    pub fn drawable_provider(mut self, provider: Arc<dyn DrawableProvider>) -> Self {
        self.options.drawable_provider = Some(provider);
        self
    }

    /// Pick the tint per group.
    pub fn tint_provider(mut self, provider: Arc<dyn TintProvider>) -> Self {
        self.options.tint_provider = Some(provider);
        self
    }

    /// Pick the thickness per group.
    pub fn size_provider(mut self, provider: Arc<dyn SizeProvider>) -> Self {
        self.options.size_provider = Some(provider);
        self
    }

    /// Pick the margin per group.
    pub fn margin_provider(mut self, provider: Arc<dyn MarginProvider>) -> Self {
        self.options.margin_provider = Some(provider);
        self
    }

    /// The options collected so far.
    pub fn options(&self) -> &DividerOptions {
        &self.options
    }

    /// Resolve the options into a shareable divider.
    pub fn build(self) -> Arc<Divider> {
        Arc::new(resolve(&self.options, &self.defaults))
    }
}

impl Divider {
    /// Start building a divider.
    pub fn builder() -> DividerBuilder {
        DividerBuilder::new()
    }
}
