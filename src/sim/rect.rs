//! Axis-aligned rectangle geometry for bricks and the paddle
//!
//! The playfield uses screen coordinates: x grows right, y grows down, so
//! `top < bottom` numerically.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge
    pub x: f32,
    /// Top edge
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.x + self.w
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.y
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.y + self.h
    }

    /// Center point of the rectangle
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    /// Check if a point lies inside (edges inclusive)
    pub fn contains_point(&self, point: Vec2) -> bool {
        point.x >= self.left()
            && point.x <= self.right()
            && point.y >= self.top()
            && point.y <= self.bottom()
    }

    /// Closest point on the rectangle (boundary or interior) to `point`
    pub fn closest_point(&self, point: Vec2) -> Vec2 {
        Vec2::new(
            point.x.clamp(self.left(), self.right()),
            point.y.clamp(self.top(), self.bottom()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.left(), 10.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.top(), 20.0);
        assert_eq!(rect.bottom(), 60.0);
        assert_eq!(rect.center(), Vec2::new(25.0, 40.0));
    }

    #[test]
    fn test_contains_point() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        assert!(rect.contains_point(Vec2::new(50.0, 25.0)));
        assert!(rect.contains_point(Vec2::new(0.0, 0.0))); // corner inclusive
        assert!(!rect.contains_point(Vec2::new(101.0, 25.0)));
        assert!(!rect.contains_point(Vec2::new(50.0, -1.0)));
    }

    #[test]
    fn test_closest_point_outside() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        // Directly above - clamps to top edge
        assert_eq!(
            rect.closest_point(Vec2::new(40.0, -10.0)),
            Vec2::new(40.0, 0.0)
        );
        // Past the bottom-right corner - clamps to the corner
        assert_eq!(
            rect.closest_point(Vec2::new(130.0, 80.0)),
            Vec2::new(100.0, 50.0)
        );
    }

    #[test]
    fn test_closest_point_inside_is_identity() {
        let rect = Rect::new(0.0, 0.0, 100.0, 50.0);
        let p = Vec2::new(30.0, 20.0);
        assert_eq!(rect.closest_point(p), p);
    }
}
