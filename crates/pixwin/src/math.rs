//! Math primitives for window geometry
//!
//! Provides the fundamental 2D types used throughout the windowing layer.
//! Coordinates are Y-up: a rectangle's minimum corner is its bottom-left.

pub use nalgebra::Vector2;

/// 2D vector type
///
/// `f64` because the native layer reports cursor positions and scroll
/// offsets in double precision.
pub type Vec2 = Vector2<f64>;

/// Axis-aligned rectangle defined by its minimum and maximum corners (Y-up)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    /// Bottom-left corner
    pub min: Vec2,
    /// Top-right corner
    pub max: Vec2,
}

impl Rect {
    /// Create a rectangle from two corner coordinates
    ///
    /// The corners are normalized so `min` holds the smaller coordinates
    /// on both axes.
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            min: Vec2::new(x0.min(x1), y0.min(y1)),
            max: Vec2::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Create a rectangle from its minimum corner and extent
    pub fn from_min_size(min: Vec2, width: f64, height: f64) -> Self {
        Self {
            min,
            max: Vec2::new(min.x + width, min.y + height),
        }
    }

    /// Width of the rectangle
    pub fn w(&self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle
    pub fn h(&self) -> f64 {
        self.max.y - self.min.y
    }

    /// Extent as a vector
    pub fn size(&self) -> Vec2 {
        self.max - self.min
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Vec2 {
        (self.min + self.max) / 2.0
    }

    /// Whether the point lies inside the rectangle (edges inclusive)
    pub fn contains(&self, v: Vec2) -> bool {
        v.x >= self.min.x && v.x <= self.max.x && v.y >= self.min.y && v.y <= self.max.y
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn rect_normalizes_corners() {
        let r = Rect::new(10.0, 20.0, 2.0, 4.0);
        assert_relative_eq!(r.min.x, 2.0);
        assert_relative_eq!(r.min.y, 4.0);
        assert_relative_eq!(r.max.x, 10.0);
        assert_relative_eq!(r.max.y, 20.0);
    }

    #[test]
    fn rect_extent_and_center() {
        let r = Rect::new(0.0, 0.0, 800.0, 600.0);
        assert_relative_eq!(r.w(), 800.0);
        assert_relative_eq!(r.h(), 600.0);
        assert_relative_eq!(r.center().x, 400.0);
        assert_relative_eq!(r.center().y, 300.0);
    }

    #[test]
    fn rect_contains_is_edge_inclusive() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Vec2::new(0.0, 0.0)));
        assert!(r.contains(Vec2::new(10.0, 10.0)));
        assert!(r.contains(Vec2::new(5.0, 5.0)));
        assert!(!r.contains(Vec2::new(10.1, 5.0)));
        assert!(!r.contains(Vec2::new(5.0, -0.1)));
    }

    #[test]
    fn rect_from_min_size_keeps_anchor() {
        let r = Rect::from_min_size(Vec2::new(3.0, 7.0), 100.0, 50.0);
        assert_relative_eq!(r.min.x, 3.0);
        assert_relative_eq!(r.min.y, 7.0);
        assert_relative_eq!(r.w(), 100.0);
        assert_relative_eq!(r.h(), 50.0);
    }
}
