//! Pure geometry: clamping, draggable ranges, and image fitting.

mod clamp;
pub mod fit;
pub mod range;

pub use clamp::clamp;
pub use fit::fit_image;
pub use range::{AxisRange, DraggableRange};
