//! Aspect-fit computation for a page viewport.

use crate::types::{ImageDimensions, Size};

/// Fit an image of `natural` pixel dimensions inside `viewport`, preserving aspect ratio.
///
/// The width-fit size is preferred; the height-fit size is used when the width-fit height
/// would overflow the viewport. Images with a zero dimension fit to [`Size::ZERO`].
pub fn fit_image(natural: ImageDimensions, viewport: Size) -> Size {
    if natural.width == 0 || natural.height == 0 {
        return Size::ZERO;
    }

    let natural = natural.as_size();
    let width_fit =
        Size::new(viewport.width, natural.height * (viewport.width / natural.width));
    let height_fit =
        Size::new(natural.width * (viewport.height / natural.height), viewport.height);

    if width_fit.height > viewport.height { height_fit } else { width_fit }
}
