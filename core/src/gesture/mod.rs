//! Per-page pan/zoom gesture handling and over-drag detection.

pub mod event;
pub mod input;
pub mod state;

pub use event::OverDragEvent;
pub use input::GestureInput;
pub use state::{GestureOutput, GestureState, ScaleLimits};
