//! Per-axis interval of valid pan offsets for a zoomed image.

use crate::types::{Axis, Offset, Size};

use super::clamp;

/// Closed interval `[lower, upper]` on a single axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisRange {
    pub lower: f32,
    pub upper: f32,
}

impl AxisRange {
    /// Symmetric range `[-half, half]`.
    fn symmetric(half: f32) -> Self {
        Self { lower: -half, upper: half }
    }

    pub fn clamp(&self, value: f32) -> f32 {
        clamp(self.lower, value, self.upper)
    }

    /// True when `value` sits on or beyond either end of the range.
    pub fn at_edge(&self, value: f32) -> bool {
        value <= self.lower || self.upper <= value
    }
}

/// Draggable range for both axes.
///
/// Computed from the fitted image size, the page viewport and the current scale:
/// `draggable = max(0, image * scale - page)` and each axis spans
/// `[-draggable / 2 / scale, draggable / 2 / scale]`. Offsets are in unscaled units, hence the
/// division by `scale`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DraggableRange {
    pub horizontal: AxisRange,
    pub vertical: AxisRange,
}

impl DraggableRange {
    pub fn compute(image_size: Size, page_size: Size, scale: f32) -> Self {
        let scaled = image_size.scaled(scale);
        let draggable_width = (scaled.width - page_size.width).max(0.0);
        let draggable_height = (scaled.height - page_size.height).max(0.0);
        Self {
            horizontal: AxisRange::symmetric(draggable_width / 2.0 / scale),
            vertical: AxisRange::symmetric(draggable_height / 2.0 / scale),
        }
    }

    pub fn axis(&self, axis: Axis) -> &AxisRange {
        match axis {
            Axis::Horizontal => &self.horizontal,
            Axis::Vertical => &self.vertical,
        }
    }

    /// Clamp each component of `offset` independently.
    pub fn clamp(&self, offset: Offset) -> Offset {
        Offset { x: self.horizontal.clamp(offset.x), y: self.vertical.clamp(offset.y) }
    }
}
