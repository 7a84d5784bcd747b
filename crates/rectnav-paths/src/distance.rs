use rectnav_core::Vec2;

/// Euclidean (L2) distance between two points.
#[inline]
pub fn euclidean(a: Vec2, b: Vec2) -> f64 {
    (a.x - b.x).hypot(a.y - b.y)
}
