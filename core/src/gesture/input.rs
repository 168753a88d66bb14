//! Raw gesture samples delivered by the host, one page and one session at a time.

use crate::types::Offset;

/// One sample from the host's gesture recognisers.
///
/// Drag translations are cumulative since the pointer went down. Samples of a session must be
/// delivered in arrival order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureInput {
    /// Raw cumulative magnification reported by the pinch recogniser.
    PinchChanged { scale: f32 },
    PinchEnded,
    DragChanged { translation: Offset },
    /// Pointer released. `predicted_end_translation` models where inertia would carry it.
    DragEnded { translation: Offset, predicted_end_translation: Offset },
    /// The system took the gesture away (incoming call, competing recogniser, ...).
    DragCancelled,
}

impl GestureInput {
    pub fn drag(x: f32, y: f32) -> Self {
        Self::DragChanged { translation: Offset::new(x, y) }
    }

    pub fn release(translation: Offset, predicted_end_translation: Offset) -> Self {
        Self::DragEnded { translation, predicted_end_translation }
    }

    pub fn pinch(scale: f32) -> Self {
        Self::PinchChanged { scale }
    }
}
