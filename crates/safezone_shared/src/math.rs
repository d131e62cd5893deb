//! Screen-space math shared with the host.
//!
//! These are the canonical representations the host hands to the mapper:
//! pixel rectangles, display resolutions, and normalized 2D points.

use std::fmt;

use bytemuck::{Pod, Zeroable};
use serde::{Deserialize, Serialize};

/// 2D Vector - anchors, offsets, pixel positions
#[repr(C)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Vec2 {
    /// X component
    pub x: f32,
    /// Y component
    pub y: f32,
}

impl Vec2 {
    /// Creates a new Vec2
    #[must_use]
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    /// Zero vector
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// One on both axes
    pub const ONE: Self = Self::new(1.0, 1.0);

    /// Component-wise product
    #[must_use]
    pub fn scale(self, other: Self) -> Self {
        Self::new(self.x * other.x, self.y * other.y)
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.5}, {:.5})", self.x, self.y)
    }
}

/// An axis-aligned rectangle in pixel coordinates.
///
/// Equality is exact and component-wise. The mapper relies on this to decide
/// whether a reported safe area is new, so no epsilon is applied.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable, Serialize, Deserialize)]
pub struct Rect {
    /// X position (left edge).
    pub x: f32,
    /// Y position.
    pub y: f32,
    /// Width.
    pub width: f32,
    /// Height.
    pub height: f32,
}

impl Rect {
    /// A zero-sized rect at the origin.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    /// Creates a new rectangle.
    #[must_use]
    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self { x, y, width, height }
    }

    /// Creates a rectangle spanning two corners.
    #[must_use]
    pub fn from_min_max(min: Vec2, max: Vec2) -> Self {
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    /// Returns the origin corner.
    #[must_use]
    pub const fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }

    /// Returns the extent.
    #[must_use]
    pub const fn size(&self) -> Vec2 {
        Vec2::new(self.width, self.height)
    }

    /// Returns the corner opposite the origin (`position + size`).
    #[must_use]
    pub fn max(&self) -> Vec2 {
        self.position() + self.size()
    }

    /// Returns the right edge.
    #[must_use]
    pub fn right(&self) -> f32 {
        self.x + self.width
    }

    /// Returns the far vertical edge.
    #[must_use]
    pub fn bottom(&self) -> f32 {
        self.y + self.height
    }

    /// Returns true if the rectangle lies entirely inside `other`.
    #[must_use]
    pub fn is_within(&self, other: &Self) -> bool {
        self.x >= other.x
            && self.y >= other.y
            && self.right() <= other.right()
            && self.bottom() <= other.bottom()
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "(x:{:.2}, y:{:.2}, width:{:.2}, height:{:.2})",
            self.x, self.y, self.width, self.height
        )
    }
}

/// Display resolution in whole pixels.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Pod, Zeroable, Serialize, Deserialize)]
pub struct Resolution {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
}

impl Resolution {
    /// Creates a new resolution.
    #[must_use]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Returns true if either axis is zero.
    #[must_use]
    pub const fn is_degenerate(self) -> bool {
        self.width == 0 || self.height == 0
    }

    /// Returns the resolution as a float vector.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_vec2(self) -> Vec2 {
        Vec2::new(self.width as f32, self.height as f32)
    }

    /// Returns the full-screen rectangle at the origin.
    #[must_use]
    pub fn full_rect(self) -> Rect {
        let size = self.as_vec2();
        Rect::new(0.0, 0.0, size.x, size.y)
    }
}

impl fmt::Display for Resolution {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_corners() {
        let rect = Rect::new(0.0, 40.0, 1080.0, 2100.0);

        assert_eq!(rect.position(), Vec2::new(0.0, 40.0));
        assert_eq!(rect.max(), Vec2::new(1080.0, 2140.0));
        assert_eq!(Rect::from_min_max(rect.position(), rect.max()), rect);
    }

    #[test]
    fn test_rect_within() {
        let screen = Resolution::new(1080, 2200).full_rect();

        assert!(Rect::new(0.0, 40.0, 1080.0, 2100.0).is_within(&screen));
        assert!(!Rect::new(10.0, 0.0, 1080.0, 2200.0).is_within(&screen));
    }

    #[test]
    fn test_resolution_display() {
        assert_eq!(Resolution::new(1170, 2532).to_string(), "1170x2532");
        assert!(Resolution::new(0, 2532).is_degenerate());
        assert!(!Resolution::new(1, 1).is_degenerate());
    }

    #[test]
    fn test_rect_bytemuck() {
        let r = Rect::new(1.0, 2.0, 3.0, 4.0);
        let bytes: &[u8] = bytemuck::bytes_of(&r);
        assert_eq!(bytes.len(), 16); // 4 * 4 bytes
    }

    #[test]
    fn test_rect_from_toml() {
        let rect: Rect = toml::from_str("x = 0.0\ny = 47.0\nwidth = 390.0\nheight = 763.0").unwrap();
        assert_eq!(rect, Rect::new(0.0, 47.0, 390.0, 763.0));
    }
}
