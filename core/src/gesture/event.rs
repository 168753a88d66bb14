//! Events a page's gesture state emits once a drag runs past the image edge.

use crate::types::{Axis, Offset};

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum OverDragEvent {
    /// Drag is past the edge on `axis`. `delta` carries the overshoot on that axis only.
    Dragging { axis: Axis, delta: Offset },
    /// Pointer released while still at or past the edge. `predicted_end_translation` is
    /// projected onto `axis`.
    Ended { axis: Axis, predicted_end_translation: Offset },
    /// Overshoot vanished or the session ended away from the edge.
    Canceled,
}
