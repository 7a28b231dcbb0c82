use std::cmp::Ordering;

use nalgebra::Vector2;

/// Sign of the turn `a → b → c`, evaluated exactly.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Orientation {
    CounterClockwise,
    Clockwise,
    Collinear,
}

#[inline]
fn coord(p: Vector2<f64>) -> robust::Coord<f64> {
    robust::Coord { x: p.x, y: p.y }
}

/// Twice the signed area of triangle `(a, b, c)`; positive for a left turn.
///
/// Uses adaptive-precision arithmetic, so the sign is exact for finite input.
#[inline]
pub(crate) fn cross(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> f64 {
    robust::orient2d(coord(a), coord(b), coord(c))
}

/// Which way `c` lies from the directed line `a → b`: counter-clockwise is
/// left of it. Exact for finite input.
#[inline]
pub fn orientation(a: Vector2<f64>, b: Vector2<f64>, c: Vector2<f64>) -> Orientation {
    let d = cross(a, b, c);
    if d > 0.0 {
        Orientation::CounterClockwise
    } else if d < 0.0 {
        Orientation::Clockwise
    } else {
        Orientation::Collinear
    }
}

/// Cyclic index: maps any signed offset into `0..len`.
#[inline]
pub(crate) fn wrap(i: isize, len: usize) -> usize {
    debug_assert!(len > 0, "wrap on empty sequence");
    i.rem_euclid(len as isize) as usize
}

#[inline]
pub(crate) fn succ(i: usize, len: usize) -> usize {
    wrap(i as isize + 1, len)
}

#[inline]
pub(crate) fn pred(i: usize, len: usize) -> usize {
    wrap(i as isize - 1, len)
}

/// Order by x, then y. Total for finite coordinates.
#[inline]
pub(crate) fn lex_cmp(a: &Vector2<f64>, b: &Vector2<f64>) -> Ordering {
    match a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal) {
        Ordering::Equal => a.y.partial_cmp(&b.y).unwrap_or(Ordering::Equal),
        o => o,
    }
}

/// Counter-clockwise angular order around `pivot`, nearer first on a shared ray.
///
/// Pre: `pivot` is the lexicographic minimum of the compared set, so every
/// direction lies in the half-open half-plane (-π/2, π/2] and the orientation
/// sign alone is a consistent order.
#[inline]
pub(crate) fn angular_cmp(pivot: Vector2<f64>, p: &Vector2<f64>, q: &Vector2<f64>) -> Ordering {
    match orientation(pivot, *p, *q) {
        Orientation::CounterClockwise => Ordering::Less,
        Orientation::Clockwise => Ordering::Greater,
        Orientation::Collinear => {
            // Same ray (pivot is the minimum), so the sign of the projection decides.
            let d = (q - p).dot(&(p - pivot));
            if d > 0.0 {
                Ordering::Less
            } else if d < 0.0 {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        }
    }
}

/// True if `cand` lies strictly beyond `cur` on the ray from `from` through `cur`.
///
/// Only meaningful when the three points are collinear.
#[inline]
pub(crate) fn is_beyond(from: Vector2<f64>, cur: Vector2<f64>, cand: Vector2<f64>) -> bool {
    (cand - cur).dot(&(cur - from)) > 0.0
}
