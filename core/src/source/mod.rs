//! Boundary with the asynchronous image loader.
//!
//! The loader fetches and decodes each page URL on its own schedule and reports completion as
//! an [`ImageLoadState`]. The pager only reads the natural dimensions of a successful load;
//! the pixel buffer is handed through to the renderer untouched.

use std::sync::Arc;

use crate::types::ImageDimensions;

/// Decoded image as produced by the loader.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedImage {
    pub dimensions: ImageDimensions,
    /// Opaque pixel payload, shared with the renderer without copying.
    pub pixels: Arc<[u8]>,
}

impl LoadedImage {
    pub fn new(dimensions: ImageDimensions, pixels: impl Into<Arc<[u8]>>) -> Self {
        Self { dimensions, pixels: pixels.into() }
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum ImageLoadState {
    #[default]
    Loading,
    Success(LoadedImage),
    Failure(String),
}

impl ImageLoadState {
    /// The decoded image, when loading succeeded.
    pub fn image(&self) -> Option<&LoadedImage> {
        match self {
            ImageLoadState::Success(image) => Some(image),
            _ => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, ImageLoadState::Loading)
    }
}

/// A page whose image the loader still owes the pager.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageRequest<'a> {
    pub index: usize,
    pub url: &'a str,
}
