//! Ephemeral values produced by the tangent search.

use nalgebra::Vector2;

/// Segment from a vertex of the left hull (`a`) to a vertex of the right hull (`b`).
///
/// `slope` is cached for reporting and drawing; tangent decisions never read it.
/// It is `±inf` for vertical edges and NaN when `a == b`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Edge {
    pub a: Vector2<f64>,
    pub b: Vector2<f64>,
    pub slope: f64,
}

impl Edge {
    #[inline]
    pub fn new(a: Vector2<f64>, b: Vector2<f64>) -> Self {
        Self {
            a,
            b,
            slope: (b.y - a.y) / (b.x - a.x),
        }
    }
}

/// Tangent contact as positions in the two hulls' vertex sequences.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Contact {
    /// Index into `left.vertices()`.
    pub i: usize,
    /// Index into `right.vertices()`.
    pub j: usize,
}
