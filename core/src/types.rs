//! Geometry types exchanged between the pager core, the renderer, and the image loader.

use std::ops::{Add, Div, Sub};

use serde::{Deserialize, Serialize};

/// Width/height pair in device-independent units.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size { width: 0.0, height: 0.0 };

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Multiply both dimensions by `factor`.
    pub fn scaled(self, factor: f32) -> Self {
        Self { width: self.width * factor, height: self.height * factor }
    }

    /// True when both dimensions are finite and strictly positive.
    pub fn is_drawable(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }
}

/// Two-dimensional offset or translation.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Offset {
    pub x: f32,
    pub y: f32,
}

impl Offset {
    pub const ZERO: Offset = Offset { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Component along `axis`.
    pub fn along(self, axis: Axis) -> f32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Keep only the component along `axis`, zeroing the other one.
    pub fn project(self, axis: Axis) -> Self {
        match axis {
            Axis::Horizontal => Self { x: self.x, y: 0.0 },
            Axis::Vertical => Self { x: 0.0, y: self.y },
        }
    }
}

impl Add for Offset {
    type Output = Offset;

    fn add(self, rhs: Offset) -> Offset {
        Offset { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl Sub for Offset {
    type Output = Offset;

    fn sub(self, rhs: Offset) -> Offset {
        Offset { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl Div<f32> for Offset {
    type Output = Offset;

    fn div(self, rhs: f32) -> Offset {
        Offset { x: self.x / rhs, y: self.y / rhs }
    }
}

/// Drag axis. Horizontal drags page, vertical drags dismiss.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// Natural pixel dimensions reported by the image collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ImageDimensions {
    pub width: u32,
    pub height: u32,
}

impl ImageDimensions {
    pub fn as_size(self) -> Size {
        Size { width: self.width as f32, height: self.height as f32 }
    }
}

/// Pan and zoom applied to a single page. The renderer translates by `offset` first and then
/// scales by `scale` around the page centre, so `offset` is expressed in unscaled units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PageTransform {
    pub offset: Offset,
    pub scale: f32,
}

impl Default for PageTransform {
    fn default() -> Self {
        Self { offset: Offset::ZERO, scale: 1.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn projection_zeroes_the_other_axis() {
        let offset = Offset::new(12.0, -7.0);
        assert_eq!(offset.project(Axis::Horizontal), Offset::new(12.0, 0.0));
        assert_eq!(offset.project(Axis::Vertical), Offset::new(0.0, -7.0));
        assert_eq!(offset.along(Axis::Vertical), -7.0);
    }

    #[test]
    fn drawable_rejects_degenerate_sizes() {
        assert!(Size::new(300.0, 600.0).is_drawable());
        assert!(!Size::new(0.0, 600.0).is_drawable());
        assert!(!Size::new(f32::NAN, 600.0).is_drawable());
        assert!(!Size::new(300.0, f32::INFINITY).is_drawable());
    }
}
