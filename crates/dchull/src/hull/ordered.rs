//! Angle-ordered convex polygon (`Hull`).
//!
//! Invariants
//! - `vertices[0] == left_most`, the lexicographic (x, then y) minimum.
//! - Vertices run counter-clockwise, i.e. by increasing angle seen from
//!   `left_most`; cyclic reading closes the boundary.
//! - No duplicates and no collinear triples: for `len() >= 3` every
//!   consecutive triple turns strictly left.
//! - `right_most` is the lexicographic maximum and is one of the vertices.
//!
//! Code cross-refs: `util::{angular_cmp, cross}`, `tangent`, `combine`.

use nalgebra::Vector2;

use super::util::{angular_cmp, cross, lex_cmp, wrap};
use crate::error::HullError;

/// Convex polygon as a counter-clockwise vertex sequence anchored at its leftmost point.
#[derive(Clone, Debug, PartialEq)]
pub struct Hull {
    vertices: Vec<Vector2<f64>>,
    left_most: Vector2<f64>,
    right_most: Vector2<f64>,
}

/// Sort `points` counter-clockwise around `pivot` and prepend the pivot.
///
/// Copies of the pivot are dropped. Points sharing a ray from the pivot keep
/// nearer-first order; ties left after that keep their input order (stable sort).
/// Input that already consists of a few ascending runs sorts in near-linear time.
pub fn order(pivot: Vector2<f64>, points: Vec<Vector2<f64>>) -> Vec<Vector2<f64>> {
    let mut rest: Vec<Vector2<f64>> = points.into_iter().filter(|p| *p != pivot).collect();
    rest.sort_by(|p, q| angular_cmp(pivot, p, q));
    let mut out = Vec::with_capacity(rest.len() + 1);
    out.push(pivot);
    out.extend(rest);
    out
}

/// Graham pass over an angle-ordered sequence: drops duplicates, collinear and reflex points.
fn prune(ordered: Vec<Vector2<f64>>) -> Vec<Vector2<f64>> {
    let mut out: Vec<Vector2<f64>> = Vec::with_capacity(ordered.len());
    for p in ordered {
        while out.len() >= 2 && cross(out[out.len() - 2], out[out.len() - 1], p) <= 0.0 {
            out.pop();
        }
        out.push(p);
    }
    out
}

impl Hull {
    /// Build the hull of an arbitrary (unsorted, possibly duplicated) point set.
    ///
    /// Used for the solver's base case; works for any size via the Graham pass.
    pub fn from_points(points: &[Vector2<f64>]) -> Result<Self, HullError> {
        if points.is_empty() {
            return Err(HullError::InvalidInput);
        }
        if let Some(index) = points.iter().position(|p| !(p.x.is_finite() && p.y.is_finite())) {
            return Err(HullError::NonFinite { index });
        }
        let pivot = points
            .iter()
            .copied()
            .min_by(lex_cmp)
            .ok_or(HullError::InvalidInput)?;
        Ok(Self::around(pivot, points.to_vec()))
    }

    /// Order `points` around `pivot`, prune, and cache the extremes.
    ///
    /// Pre: `pivot` is the lexicographic minimum of `points ∪ {pivot}`.
    pub(crate) fn around(pivot: Vector2<f64>, points: Vec<Vector2<f64>>) -> Self {
        let vertices = prune(order(pivot, points));
        let right_most = vertices
            .iter()
            .copied()
            .max_by(lex_cmp)
            .unwrap_or(pivot);
        Self {
            vertices,
            left_most: pivot,
            right_most,
        }
    }

    /// Read-only boundary, counter-clockwise from `left_most`.
    #[inline]
    pub fn vertices(&self) -> &[Vector2<f64>] {
        &self.vertices
    }

    #[inline]
    pub fn into_vertices(self) -> Vec<Vector2<f64>> {
        self.vertices
    }

    #[inline]
    pub fn left_most(&self) -> Vector2<f64> {
        self.left_most
    }

    #[inline]
    pub fn right_most(&self) -> Vector2<f64> {
        self.right_most
    }

    /// Number of vertices (at least 1).
    #[allow(clippy::len_without_is_empty)]
    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Vertex at a cyclic position; negative indices count back from the end.
    #[inline]
    pub fn vertex_at(&self, index: isize) -> Vector2<f64> {
        self.vertices[wrap(index, self.vertices.len())]
    }

    #[inline]
    pub fn index_of(&self, p: Vector2<f64>) -> Option<usize> {
        self.vertices.iter().position(|v| *v == p)
    }

    /// Position of `right_most` in `vertices()`.
    pub(crate) fn right_most_index(&self) -> usize {
        self.index_of(self.right_most).unwrap_or(0)
    }

    /// Closed membership: boundary points count as contained.
    pub fn contains(&self, p: Vector2<f64>) -> bool {
        let v = &self.vertices;
        match v.len() {
            1 => v[0] == p,
            2 => {
                cross(v[0], v[1], p) == 0.0
                    && (p - v[0]).dot(&(v[1] - v[0])) >= 0.0
                    && (p - v[1]).dot(&(v[0] - v[1])) >= 0.0
            }
            n => (0..n).all(|k| cross(v[k], v[(k + 1) % n], p) >= 0.0),
        }
    }

    /// Every consecutive triple turns strictly left. Points and segments are convex.
    pub fn is_convex(&self) -> bool {
        let v = &self.vertices;
        let n = v.len();
        if n < 3 {
            return true;
        }
        (0..n).all(|k| cross(v[k], v[(k + 1) % n], v[(k + 2) % n]) > 0.0)
    }

    /// Enclosed area (shoelace); zero for points and segments.
    pub fn area(&self) -> f64 {
        let v = &self.vertices;
        let n = v.len();
        if n < 3 {
            return 0.0;
        }
        let twice: f64 = (0..n)
            .map(|k| {
                let (p, q) = (v[k], v[(k + 1) % n]);
                p.x * q.y - p.y * q.x
            })
            .sum();
        0.5 * twice
    }

    /// Boundary length. A segment counts both directions.
    pub fn perimeter(&self) -> f64 {
        let v = &self.vertices;
        let n = v.len();
        if n < 2 {
            return 0.0;
        }
        (0..n).map(|k| (v[(k + 1) % n] - v[k]).norm()).sum()
    }
}
