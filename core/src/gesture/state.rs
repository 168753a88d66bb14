//! Pan/zoom state machine for a single page.
//!
//! Drag samples move the image inside its draggable range. Once a drag pushes past the range
//! the overshoot is reported as an [`OverDragEvent`] instead of panning further, and the axis
//! that overshoots first is locked for the rest of the session. The lock keeps a page flip
//! (horizontal) and a dismiss (vertical) from running at the same time.

use tracing::{debug, trace, warn};

use crate::config::PagerConfig;
use crate::geometry::{DraggableRange, clamp};
use crate::types::{Axis, Offset, PageTransform, Size};

use super::event::OverDragEvent;
use super::input::GestureInput;

/// Inclusive bounds for the pinch scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleLimits {
    pub min: f32,
    pub max: f32,
}

impl Default for ScaleLimits {
    fn default() -> Self {
        Self { min: 1.0, max: 2.5 }
    }
}

impl From<&PagerConfig> for ScaleLimits {
    fn from(config: &PagerConfig) -> Self {
        Self { min: config.min_scale, max: config.max_scale }
    }
}

/// Result of feeding one [`GestureInput`] into a [`GestureState`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GestureOutput {
    /// Over-drag events in emission order. A release can emit a final `Dragging` followed by
    /// `Ended` or `Canceled`.
    pub events: Vec<OverDragEvent>,
    /// The page transform jumped and should be animated rather than applied directly.
    pub animate_transform: bool,
}

#[derive(Debug, Clone)]
pub struct GestureState {
    page_size: Size,
    image_size: Size,
    limits: ScaleLimits,
    scale: f32,
    previous_scale: f32,
    current_offset: Offset,
    unclamped_offset: Offset,
    previous_translation: Offset,
    dragging_over_axis: Option<Axis>,
}

impl GestureState {
    /// Fresh, unzoomed state. `image_size` is the fitted size inside `page_size`.
    pub fn new(page_size: Size, image_size: Size, limits: ScaleLimits) -> Self {
        Self {
            page_size,
            image_size,
            limits,
            scale: resting_scale(limits),
            previous_scale: 1.0,
            current_offset: Offset::ZERO,
            unclamped_offset: Offset::ZERO,
            previous_translation: Offset::ZERO,
            dragging_over_axis: None,
        }
    }

    pub fn scale(&self) -> f32 {
        self.scale
    }

    pub fn current_offset(&self) -> Offset {
        self.current_offset
    }

    pub fn unclamped_offset(&self) -> Offset {
        self.unclamped_offset
    }

    /// Axis currently locked by an over-drag, if any.
    pub fn dragging_over_axis(&self) -> Option<Axis> {
        self.dragging_over_axis
    }

    pub fn image_size(&self) -> Size {
        self.image_size
    }

    pub fn transform(&self) -> PageTransform {
        PageTransform { offset: self.current_offset, scale: self.scale }
    }

    pub fn draggable_range(&self) -> DraggableRange {
        DraggableRange::compute(self.image_size, self.page_size, self.scale)
    }

    /// Swap in a new fitted image size, e.g. once the image finished loading.
    pub fn set_image_size(&mut self, image_size: Size) {
        self.image_size = image_size;
        self.reclamp();
    }

    /// New viewport (rotation, window resize) together with the image size fitted to it.
    pub fn resize(&mut self, page_size: Size, image_size: Size) {
        self.page_size = page_size;
        self.set_image_size(image_size);
    }

    /// Back to the unzoomed, centred state. Used when the page is remounted.
    pub fn reset(&mut self) {
        *self = Self::new(self.page_size, self.image_size, self.limits);
    }

    pub fn handle(&mut self, input: GestureInput) -> GestureOutput {
        let mut output = GestureOutput::default();
        match input {
            GestureInput::PinchChanged { scale } => self.pinch_changed(scale),
            GestureInput::PinchEnded => {
                self.previous_scale = 1.0;
                self.reclamp();
                output.animate_transform = true;
            }
            GestureInput::DragChanged { translation } => {
                self.drag_changed(translation, &mut output.events)
            }
            GestureInput::DragEnded { translation, predicted_end_translation } => {
                self.drag_changed(translation, &mut output.events);
                self.drag_ended(predicted_end_translation, &mut output.events);
            }
            GestureInput::DragCancelled => {
                self.finish_session();
                if self.dragging_over_axis.take().is_some() {
                    output.events.push(OverDragEvent::Canceled);
                }
            }
        }
        output
    }

    fn pinch_changed(&mut self, raw_scale: f32) {
        if !(raw_scale.is_finite() && raw_scale > 0.0) {
            warn!(target: "gesture", raw_scale, "ignoring degenerate pinch sample");
            return;
        }

        let delta = raw_scale / self.previous_scale;
        self.previous_scale = raw_scale;
        self.scale = clamp(self.limits.min, self.scale * delta, self.limits.max);
        trace!(target: "gesture", scale = self.scale, "pinch");
    }

    fn drag_changed(&mut self, translation: Offset, events: &mut Vec<OverDragEvent>) {
        let delta = translation - self.previous_translation;
        self.previous_translation = translation;
        self.unclamped_offset = self.unclamped_offset + delta / self.scale;
        self.current_offset = self.draggable_range().clamp(self.unclamped_offset);

        let overshoot = self.unclamped_offset - self.current_offset;
        match self.dragging_over_axis {
            Some(axis) => {
                if overshoot.along(axis) != 0.0 {
                    events.push(OverDragEvent::Dragging { axis, delta: overshoot.project(axis) });
                } else {
                    debug!(target: "gesture", ?axis, "over-drag released inside bounds");
                    self.dragging_over_axis = None;
                    events.push(OverDragEvent::Canceled);
                }
            }
            None if overshoot != Offset::ZERO => {
                let axis = if overshoot.x.abs() > overshoot.y.abs() {
                    Axis::Horizontal
                } else {
                    Axis::Vertical
                };
                debug!(target: "gesture", ?axis, "over-drag locked");
                self.dragging_over_axis = Some(axis);
                events.push(OverDragEvent::Dragging { axis, delta: overshoot.project(axis) });
            }
            None => {}
        }
    }

    fn drag_ended(&mut self, predicted_end_translation: Offset, events: &mut Vec<OverDragEvent>) {
        self.finish_session();

        let Some(axis) = self.dragging_over_axis.take() else {
            return;
        };

        let range = self.draggable_range();
        if range.axis(axis).at_edge(self.current_offset.along(axis)) {
            events.push(OverDragEvent::Ended {
                axis,
                predicted_end_translation: predicted_end_translation.project(axis),
            });
        } else {
            events.push(OverDragEvent::Canceled);
        }
    }

    fn finish_session(&mut self) {
        self.previous_translation = Offset::ZERO;
        self.unclamped_offset = self.current_offset;
    }

    /// Pull the pan offset back into a range that may have shrunk. The raw offset follows
    /// unless an over-drag is in flight, which still needs its overshoot.
    fn reclamp(&mut self) {
        self.current_offset = self.draggable_range().clamp(self.current_offset);
        if self.dragging_over_axis.is_none() {
            self.unclamped_offset = self.current_offset;
        }
    }
}

fn resting_scale(limits: ScaleLimits) -> f32 {
    clamp(limits.min, 1.0, limits.max)
}
