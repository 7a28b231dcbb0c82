//! Upper and lower tangents between two separated hulls.
//!
//! Model
//! - Start at `left.right_most` and `right.left_most`. For the upper tangent
//!   the left endpoint walks counter-clockwise and the right endpoint walks
//!   clockwise; the lower tangent mirrors both directions.
//! - An endpoint moves when its neighbour lies strictly on the far side of the
//!   current line (above for upper, below for lower), or lies on the line
//!   further out. The second rule makes the tangent touch extreme contact
//!   vertices, so collinear vertices between them can be pruned later.
//! - Each endpoint can only travel across its own hull once, so the walk is
//!   bounded by `left.len() + right.len()` moves; more means a hull is not
//!   convex. Separation is checked up front (`HullError::NotSeparated`).
//!
//! Pre: both hulls satisfy the `Hull` invariants and every point of `left` is
//! lexicographically smaller than every point of `right`.

use std::cmp::Ordering;

use nalgebra::Vector2;

use super::types::{Contact, Edge};
use super::util::{is_beyond, lex_cmp, orientation, pred, succ, Orientation};
use super::Hull;
use crate::error::HullError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Side {
    Upper,
    Lower,
}

impl Side {
    #[inline]
    fn outward(self) -> Orientation {
        match self {
            Side::Upper => Orientation::CounterClockwise,
            Side::Lower => Orientation::Clockwise,
        }
    }
}

/// Should the endpoint at `cur` move to `cand`, with the other endpoint fixed at `anchor`?
///
/// The line is always oriented left-to-right, `a → b`.
#[inline]
fn improves(
    side: Side,
    (a, b): (Vector2<f64>, Vector2<f64>),
    anchor: Vector2<f64>,
    cur: Vector2<f64>,
    cand: Vector2<f64>,
) -> bool {
    let o = orientation(a, b, cand);
    o == side.outward() || (o == Orientation::Collinear && is_beyond(anchor, cur, cand))
}

fn walk(left: &Hull, right: &Hull, side: Side) -> Result<Contact, HullError> {
    let (lr, rl) = (left.right_most(), right.left_most());
    if lex_cmp(&lr, &rl) != Ordering::Less {
        return Err(HullError::NotSeparated {
            left_x: lr.x,
            left_y: lr.y,
            right_x: rl.x,
            right_y: rl.y,
        });
    }
    let l = left.vertices();
    let r = right.vertices();
    let (nl, nr) = (l.len(), r.len());
    let bound = nl + nr;
    let mut i = left.right_most_index();
    let mut j = 0usize;
    let mut steps = 0usize;

    let step_left = |i: usize| match side {
        Side::Upper => succ(i, nl),
        Side::Lower => pred(i, nl),
    };
    let step_right = |j: usize| match side {
        Side::Upper => pred(j, nr),
        Side::Lower => succ(j, nr),
    };

    loop {
        let mut moved = false;
        loop {
            let cand = step_right(j);
            if !improves(side, (l[i], r[j]), l[i], r[j], r[cand]) {
                break;
            }
            j = cand;
            moved = true;
            steps += 1;
            if steps > bound {
                return Err(HullError::TangentDiverged { steps, left: nl, right: nr });
            }
        }
        loop {
            let cand = step_left(i);
            if !improves(side, (l[i], r[j]), r[j], l[i], l[cand]) {
                break;
            }
            i = cand;
            moved = true;
            steps += 1;
            if steps > bound {
                return Err(HullError::TangentDiverged { steps, left: nl, right: nr });
            }
        }
        if !moved {
            return Ok(Contact { i, j });
        }
    }
}

#[inline]
pub(crate) fn upper_contact(left: &Hull, right: &Hull) -> Result<Contact, HullError> {
    walk(left, right, Side::Upper)
}

#[inline]
pub(crate) fn lower_contact(left: &Hull, right: &Hull) -> Result<Contact, HullError> {
    walk(left, right, Side::Lower)
}

/// Upper tangent: every vertex of both hulls lies on or below the line `a → b`.
pub fn find_upper(left: &Hull, right: &Hull) -> Result<Edge, HullError> {
    let c = upper_contact(left, right)?;
    Ok(Edge::new(left.vertices()[c.i], right.vertices()[c.j]))
}

/// Lower tangent: every vertex of both hulls lies on or above the line `a → b`.
pub fn find_lower(left: &Hull, right: &Hull) -> Result<Edge, HullError> {
    let c = lower_contact(left, right)?;
    Ok(Edge::new(left.vertices()[c.i], right.vertices()[c.j]))
}
