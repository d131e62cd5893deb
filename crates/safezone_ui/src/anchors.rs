//! Safe-area to anchor conversion.
//!
//! Converts an absolute pixel rectangle into normalized anchor coordinates
//! relative to the full display resolution.

use std::fmt;

use safezone_shared::{Rect, Resolution, Vec2};

/// Normalized anchor pair for a rectangle-transform.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Anchors {
    /// Lower corner, relative to the parent.
    pub min: Vec2,
    /// Upper corner, relative to the parent.
    pub max: Vec2,
}

impl Anchors {
    /// Anchors that stretch over the whole parent.
    pub const FULL: Self = Self {
        min: Vec2::ZERO,
        max: Vec2::ONE,
    };

    /// Creates a new anchor pair.
    #[must_use]
    pub const fn new(min: Vec2, max: Vec2) -> Self {
        Self { min, max }
    }

    /// Returns true if `0 <= min <= max <= 1` on both axes.
    ///
    /// Holds whenever the safe area lies inside the resolution. Nothing
    /// enforces it.
    #[must_use]
    pub fn is_normalized(&self) -> bool {
        let unit = |v: f32| (0.0..=1.0).contains(&v);
        unit(self.min.x)
            && unit(self.min.y)
            && unit(self.max.x)
            && unit(self.max.y)
            && self.min.x <= self.max.x
            && self.min.y <= self.max.y
    }
}

impl fmt::Display for Anchors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "min {} max {}", self.min, self.max)
    }
}

/// Maps a safe rectangle onto anchors for the given resolution.
///
/// No clamping, rounding, or zero checks: a degenerate resolution yields
/// infinite or NaN components.
#[must_use]
pub fn anchors_for(safe: Rect, resolution: Resolution) -> Anchors {
    let res = resolution.as_vec2();
    let min = safe.position();
    let max = safe.max();

    Anchors {
        min: Vec2::new(min.x / res.x, min.y / res.y),
        max: Vec2::new(max.x / res.x, max.y / res.y),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-5
    }

    #[test]
    fn test_notched_portrait() {
        let anchors = anchors_for(
            Rect::new(0.0, 40.0, 1080.0, 2100.0),
            Resolution::new(1080, 2200),
        );

        assert!(approx(anchors.min.x, 0.0));
        assert!(approx(anchors.min.y, 40.0 / 2200.0)); // 0.018181...
        assert!(approx(anchors.max.x, 1.0));
        assert!(approx(anchors.max.y, 2140.0 / 2200.0)); // 0.972727...
        assert!(anchors.is_normalized());
    }

    #[test]
    fn test_full_bleed() {
        for (w, h) in [(1, 1), (1080, 2200), (2532, 1170), (640, 480)] {
            let res = Resolution::new(w, h);
            assert_eq!(anchors_for(res.full_rect(), res), Anchors::FULL);
        }
    }

    #[test]
    fn test_landscape_cutout() {
        // Notch on the left in landscape, home indicator at the bottom.
        let anchors = anchors_for(
            Rect::new(132.0, 63.0, 2268.0, 1107.0),
            Resolution::new(2532, 1170),
        );

        assert!(approx(anchors.min.x, 132.0 / 2532.0));
        assert!(approx(anchors.min.y, 63.0 / 1170.0));
        assert!(approx(anchors.max.x, 2400.0 / 2532.0));
        assert!(approx(anchors.max.y, 1.0));
    }

    #[test]
    fn test_zero_resolution_is_unguarded() {
        let anchors = anchors_for(Rect::new(0.0, 10.0, 100.0, 100.0), Resolution::new(0, 0));

        assert!(anchors.min.x.is_nan()); // 0 / 0
        assert!(anchors.min.y.is_infinite());
        assert!(anchors.max.x.is_infinite());
        assert!(!anchors.is_normalized());
    }

    #[test]
    fn test_out_of_bounds_is_not_clamped() {
        let anchors = anchors_for(Rect::new(-10.0, 0.0, 120.0, 100.0), Resolution::new(100, 100));

        assert!(approx(anchors.min.x, -0.1));
        assert!(approx(anchors.max.x, 1.1));
        assert!(!anchors.is_normalized());
    }
}
