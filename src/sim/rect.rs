//! Axis-aligned rectangle geometry
//!
//! Screen convention: x grows right, y grows down. A rectangle is anchored at
//! its top-left corner:
//! - top = y, bottom = y + h
//! - left = x, right = x + w

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub const fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    /// Rectangle of `size` whose bottom edge is centred on `pos`
    pub fn from_midbottom(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x - size.x / 2.0, pos.y - size.y, size.x, size.y)
    }

    /// Rectangle of `size` centred on `pos`
    pub fn from_center(pos: Vec2, size: Vec2) -> Self {
        Self::new(pos.x - size.x / 2.0, pos.y - size.y / 2.0, size.x, size.y)
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

    pub fn size(&self) -> Vec2 {
        Vec2::new(self.w, self.h)
    }

    pub fn center(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.y + self.h / 2.0)
    }

    pub fn midbottom(&self) -> Vec2 {
        Vec2::new(self.x + self.w / 2.0, self.bottom())
    }

    /// Copy of this rectangle shifted by `offset`
    pub fn translate(&self, offset: Vec2) -> Self {
        Self::new(self.x + offset.x, self.y + offset.y, self.w, self.h)
    }

    /// Strict horizontal overlap (shared edges don't count)
    #[inline]
    pub fn overlaps_x(&self, other: &Rect) -> bool {
        self.left() < other.right() && self.right() > other.left()
    }

    /// Strict vertical overlap (shared edges don't count)
    #[inline]
    pub fn overlaps_y(&self, other: &Rect) -> bool {
        self.top() < other.bottom() && self.bottom() > other.top()
    }

    /// Interiors overlap. Rectangles that only share an edge do not intersect.
    pub fn intersects(&self, other: &Rect) -> bool {
        self.overlaps_x(other) && self.overlaps_y(other)
    }

    /// Closed rectangles overlap (shared edges and corners count)
    pub fn touches(&self, other: &Rect) -> bool {
        self.left() <= other.right()
            && self.right() >= other.left()
            && self.top() <= other.bottom()
            && self.bottom() >= other.top()
    }

    /// Finite origin and strictly positive, finite size
    pub fn is_valid(&self) -> bool {
        self.x.is_finite()
            && self.y.is_finite()
            && self.w.is_finite()
            && self.h.is_finite()
            && self.w > 0.0
            && self.h > 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_midbottom_anchor() {
        let rect = Rect::from_midbottom(Vec2::new(100.0, 400.0), Vec2::new(30.0, 30.0));
        assert_eq!(rect.left(), 85.0);
        assert_eq!(rect.right(), 115.0);
        assert_eq!(rect.top(), 370.0);
        assert_eq!(rect.bottom(), 400.0);
        assert_eq!(rect.midbottom(), Vec2::new(100.0, 400.0));
    }

    #[test]
    fn test_shared_edge_touches_but_does_not_intersect() {
        let floor = Rect::new(0.0, 400.0, 200.0, 20.0);
        let standing = Rect::new(50.0, 370.0, 30.0, 30.0);
        assert!(standing.touches(&floor));
        assert!(!standing.intersects(&floor));

        let sunk = standing.translate(Vec2::new(0.0, 1.0));
        assert!(sunk.intersects(&floor));
    }

    #[test]
    fn test_disjoint() {
        let a = Rect::new(0.0, 0.0, 10.0, 10.0);
        let b = Rect::new(20.0, 0.0, 10.0, 10.0);
        assert!(!a.touches(&b));
        assert!(!a.intersects(&b));
        assert!(!a.overlaps_x(&b));
        assert!(a.overlaps_y(&b));
    }

    #[test]
    fn test_validity() {
        assert!(Rect::new(0.0, 0.0, 1.0, 1.0).is_valid());
        assert!(!Rect::new(0.0, 0.0, 0.0, 1.0).is_valid());
        assert!(!Rect::new(0.0, 0.0, 1.0, -1.0).is_valid());
        assert!(!Rect::new(f32::NAN, 0.0, 1.0, 1.0).is_valid());
    }
}
