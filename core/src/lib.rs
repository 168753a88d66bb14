//! Interaction core of a swipeable, pinch-zoomable full-screen image pager.
//!
//! Hosts own rendering and image loading. They feed gesture samples and load results into an
//! [`ImagePager`], apply the returned [`PagerUpdate`]s, and paint from [`ImagePager::frame`].

#![deny(missing_debug_implementations)]

pub mod config;
pub mod error;
pub mod geometry;
pub mod gesture;
pub mod log;
pub mod pager;
pub mod source;
pub mod types;

pub type Result<T> = std::result::Result<T, anyhow::Error>;

pub use config::{AnimationSpec, Easing, PagerConfig};
pub use error::PagerError;
pub use gesture::{GestureInput, GestureState, OverDragEvent};
pub use pager::{ImagePager, PagerFrame, PagerOptions, PagerState, PagerUpdate, Transition};
pub use source::{ImageLoadState, LoadedImage};
pub use types::{Axis, ImageDimensions, Offset, PageTransform, Size};

/// Returns the version of the core crate for telemetry and debugging.
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
