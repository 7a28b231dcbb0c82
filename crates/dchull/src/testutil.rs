//! Test-only oracle: Andrew's monotone chain with collinear points pruned.

use nalgebra::Vector2;

use crate::hull::{cross, lex_cmp, Hull};

/// Reference hull in CCW order (any rotation); a single point for degenerate input.
pub(crate) fn reference_hull(points: &[Vector2<f64>]) -> Vec<Vector2<f64>> {
    let mut pts: Vec<_> = points.to_vec();
    pts.sort_by(lex_cmp);
    pts.dedup();
    if pts.len() < 3 {
        return pts;
    }
    let mut lower: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in &pts {
        while lower.len() >= 2 && cross(lower[lower.len() - 2], lower[lower.len() - 1], *p) <= 0.0 {
            lower.pop();
        }
        lower.push(*p);
    }
    let mut upper: Vec<Vector2<f64>> = Vec::with_capacity(pts.len());
    for p in pts.iter().rev() {
        while upper.len() >= 2 && cross(upper[upper.len() - 2], upper[upper.len() - 1], *p) <= 0.0 {
            upper.pop();
        }
        upper.push(*p);
    }
    lower.pop();
    upper.pop();
    let mut hull = lower;
    hull.extend(upper);
    hull
}

pub(crate) fn same_vertex_set(a: &[Vector2<f64>], b: &[Vector2<f64>]) -> bool {
    let mut a = a.to_vec();
    let mut b = b.to_vec();
    a.sort_by(lex_cmp);
    b.sort_by(lex_cmp);
    a == b
}

/// Convex, contains every input point, and matches the oracle's vertex set.
pub(crate) fn assert_hull_of(h: &Hull, points: &[Vector2<f64>]) {
    assert!(h.is_convex(), "not convex: {:?}", h.vertices());
    for p in points {
        assert!(h.contains(*p), "{p:?} outside {:?}", h.vertices());
    }
    assert!(
        same_vertex_set(h.vertices(), &reference_hull(points)),
        "got {:?}, expected {:?}",
        h.vertices(),
        reference_hull(points)
    );
}
