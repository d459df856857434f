//! The paint surface dividers are drawn onto.
//!
//! Compositing is owned by the host toolkit. A [`Painter`] is the narrow
//! slice of the host canvas that divider drawables need: solid fills and
//! image blits into pixel rectangles.

use crate::types::{Color, PixelRect};

/// Statistics from a divider paint pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PaintStats {
    /// Number of solid fills issued.
    pub fills: u32,
    /// Number of image blits issued.
    pub images: u32,
}

/// The host canvas as seen by a drawable.
pub trait Painter {
    /// Fill `rect` with a solid color.
    fn fill_rect(&mut self, rect: PixelRect, color: Color);

    /// Draw the image registered under `key` stretched into `rect`.
    ///
    /// When `tint` is set, the image is recolored source-in with it.
    fn draw_image(&mut self, key: &str, rect: PixelRect, tint: Option<Color>);
}

/// A single recorded paint operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PaintOp {
    /// A solid fill.
    Fill { rect: PixelRect, color: Color },
    /// An image blit.
    Image {
        key: String,
        rect: PixelRect,
        tint: Option<Color>,
    },
}

impl PaintOp {
    /// The rectangle this operation covers.
    pub fn rect(&self) -> PixelRect {
        match self {
            Self::Fill { rect, .. } | Self::Image { rect, .. } => *rect,
        }
    }
}

/// A [`Painter`] that records every operation instead of compositing.
///
/// Useful for headless hosts, snapshot tests and debugging output.
#[derive(Debug, Clone, Default)]
pub struct RecordingPainter {
    ops: Vec<PaintOp>,
}

impl RecordingPainter {
    /// Create an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// The operations recorded so far, in paint order.
    pub fn ops(&self) -> &[PaintOp] {
        &self.ops
    }

    /// Take the recorded operations, leaving the recorder empty.
    pub fn take_ops(&mut self) -> Vec<PaintOp> {
        std::mem::take(&mut self.ops)
    }

    /// Discard all recorded operations.
    pub fn clear(&mut self) {
        self.ops.clear();
    }

    /// Count the recorded operations by kind.
    pub fn stats(&self) -> PaintStats {
        self.ops.iter().fold(PaintStats::default(), |mut stats, op| {
            match op {
                PaintOp::Fill { .. } => stats.fills += 1,
                PaintOp::Image { .. } => stats.images += 1,
            }
            stats
        })
    }
}

impl Painter for RecordingPainter {
    fn fill_rect(&mut self, rect: PixelRect, color: Color) {
        self.ops.push(PaintOp::Fill { rect, color });
    }

    fn draw_image(&mut self, key: &str, rect: PixelRect, tint: Option<Color>) {
        self.ops.push(PaintOp::Image {
            key: key.to_string(),
            rect,
            tint,
        });
    }
}
