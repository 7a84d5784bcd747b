//! Geometry primitives: [`Vec2`] and [`Rect`].

use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

// ---------------------------------------------------------------------------
// Vec2
// ---------------------------------------------------------------------------

/// A 2D point with `f64` coordinates. X grows right, Y grows down.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    /// Origin (0, 0).
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Midpoint of the segment between `self` and `other`.
    #[inline]
    pub fn midpoint(self, other: Self) -> Self {
        Self::new((self.x + other.x) / 2.0, (self.y + other.y) / 2.0)
    }
}

impl fmt::Display for Vec2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl Add for Vec2 {
    type Output = Self;
    #[inline]
    fn add(self, rhs: Self) -> Self {
        Self::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Self;
    #[inline]
    fn sub(self, rhs: Self) -> Self {
        Self::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Self;
    #[inline]
    fn mul(self, rhs: f64) -> Self {
        Self::new(self.x * rhs, self.y * rhs)
    }
}

impl Div<f64> for Vec2 {
    type Output = Self;
    #[inline]
    fn div(self, rhs: f64) -> Self {
        Self::new(self.x / rhs, self.y / rhs)
    }
}

// ---------------------------------------------------------------------------
// Rect
// ---------------------------------------------------------------------------

/// An axis-aligned rectangle with **inclusive** bounds on all four edges.
///
/// `min` and `max` are corners with `min ≤ max` per axis; [`Rect::new`]
/// canonicalizes its arguments so this always holds for constructed values.
/// A rectangle with `min == max` on an axis is a degenerate but valid
/// segment (or point) — this is what two adjacent cells share.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Rect {
    pub min: Vec2,
    pub max: Vec2,
}

impl Rect {
    /// Create a new rectangle from two corners and auto-canonicalize so that
    /// `min` ≤ `max` on each axis.
    #[inline]
    pub fn new(x0: f64, y0: f64, x1: f64, y1: f64) -> Self {
        Self {
            min: Vec2::new(x0.min(x1), y0.min(y1)),
            max: Vec2::new(x0.max(x1), y0.max(y1)),
        }
    }

    /// Width of the rectangle.
    #[inline]
    pub fn width(self) -> f64 {
        self.max.x - self.min.x
    }

    /// Height of the rectangle.
    #[inline]
    pub fn height(self) -> f64 {
        self.max.y - self.min.y
    }

    /// Geometric center, the cell's representative point.
    #[inline]
    pub fn center(self) -> Vec2 {
        self.min.midpoint(self.max)
    }

    /// Whether `p` lies inside the rectangle, boundary included.
    #[inline]
    pub fn contains(self, p: Vec2) -> bool {
        p.x >= self.min.x && p.x <= self.max.x && p.y >= self.min.y && p.y <= self.max.y
    }

    /// Whether the bounds are inverted on some axis.
    ///
    /// Constructed rectangles are never empty; only [`Rect::intersect`] of
    /// disjoint rectangles produces one.
    #[inline]
    pub fn is_empty(self) -> bool {
        self.min.x > self.max.x || self.min.y > self.max.y
    }

    /// Intersection of two rectangles.
    ///
    /// For rectangles sharing only an edge the result is a degenerate
    /// segment whose [`center`](Self::center) is the midpoint of the shared
    /// boundary. For disjoint rectangles the result is empty (inverted
    /// bounds); query with [`is_empty`](Self::is_empty).
    #[inline]
    pub fn intersect(self, other: Rect) -> Self {
        Self {
            min: Vec2::new(self.min.x.max(other.min.x), self.min.y.max(other.min.y)),
            max: Vec2::new(self.max.x.min(other.max.x), self.max.y.min(other.max.y)),
        }
    }

    /// Whether the two rectangles overlap or touch.
    #[inline]
    pub fn overlaps(self, other: Rect) -> bool {
        !self.intersect(other).is_empty()
    }

    /// Smallest rectangle that contains both rectangles.
    #[inline]
    pub fn union(self, other: Rect) -> Self {
        Self {
            min: Vec2::new(self.min.x.min(other.min.x), self.min.y.min(other.min.y)),
            max: Vec2::new(self.max.x.max(other.max.x), self.max.y.max(other.max.y)),
        }
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}-{}]", self.min, self.max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn vec2_arithmetic() {
        let a = Vec2::new(1.0, 2.0);
        let b = Vec2::new(3.0, 4.0);
        assert_eq!(a + b, Vec2::new(4.0, 6.0));
        assert_eq!(b - a, Vec2::new(2.0, 2.0));
        assert_eq!(a * 3.0, Vec2::new(3.0, 6.0));
        assert_eq!(b / 2.0, Vec2::new(1.5, 2.0));
    }

    #[test]
    fn vec2_midpoint() {
        let a = Vec2::new(0.0, 0.0);
        let b = Vec2::new(2.0, 1.0);
        assert_eq!(a.midpoint(b), Vec2::new(1.0, 0.5));
    }

    #[test]
    fn rect_auto_canonicalize() {
        let r = Rect::new(3.0, 2.0, 0.0, 0.0);
        assert_eq!(r.min, Vec2::new(0.0, 0.0));
        assert_eq!(r.max, Vec2::new(3.0, 2.0));
    }

    #[test]
    fn rect_contains_is_inclusive() {
        let r = Rect::new(0.0, 0.0, 1.0, 1.0);
        assert!(r.contains(Vec2::new(0.5, 0.5)));
        // All four edges and corners count as inside.
        assert!(r.contains(Vec2::new(0.0, 0.5)));
        assert!(r.contains(Vec2::new(1.0, 0.5)));
        assert!(r.contains(Vec2::new(0.5, 0.0)));
        assert!(r.contains(Vec2::new(0.5, 1.0)));
        assert!(r.contains(Vec2::new(1.0, 1.0)));
        assert!(!r.contains(Vec2::new(1.0001, 0.5)));
        assert!(!r.contains(Vec2::new(0.5, -0.0001)));
    }

    #[test]
    fn rect_center() {
        let r = Rect::new(1.0, 2.0, 3.0, 6.0);
        assert_eq!(r.center(), Vec2::new(2.0, 4.0));
    }

    #[test]
    fn rect_intersect_overlapping() {
        let a = Rect::new(0.0, 0.0, 4.0, 4.0);
        let b = Rect::new(2.0, 2.0, 6.0, 6.0);
        assert_eq!(a.intersect(b), Rect::new(2.0, 2.0, 4.0, 4.0));
        assert!(a.overlaps(b));
    }

    #[test]
    fn rect_intersect_shared_edge_is_degenerate_segment() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(1.0, 0.0, 2.0, 1.0);
        let shared = a.intersect(b);
        assert!(!shared.is_empty());
        assert_eq!(shared.width(), 0.0);
        // Its center is the midpoint of the shared boundary segment.
        assert_eq!(shared.center(), Vec2::new(1.0, 0.5));
    }

    #[test]
    fn rect_intersect_disjoint_is_empty() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(5.0, 5.0, 6.0, 6.0);
        assert!(a.intersect(b).is_empty());
        assert!(!a.overlaps(b));
    }

    #[test]
    fn rect_union() {
        let a = Rect::new(0.0, 0.0, 1.0, 1.0);
        let b = Rect::new(2.0, -1.0, 3.0, 0.5);
        assert_eq!(a.union(b), Rect::new(0.0, -1.0, 3.0, 1.0));
    }
}
