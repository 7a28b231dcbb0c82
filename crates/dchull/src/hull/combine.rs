use tracing::trace;

use super::tangent::{lower_contact, upper_contact};
use super::util::{lex_cmp, succ};
use super::Hull;
use crate::error::HullError;

impl Hull {
    /// Merge two separated hulls into the hull of their union.
    ///
    /// Walks `right` counter-clockwise from the lower to the upper tangent
    /// vertex, then `left` from the upper to the lower tangent vertex. Vertices
    /// off those arcs are hidden behind the tangents and are never visited.
    /// The spliced sequence is counter-clockwise but starts mid-boundary; the
    /// ordering pass re-anchors it at the leftmost vertex, sorting just two
    /// ascending runs.
    ///
    /// Pre: every point of `left` is lexicographically smaller than every point of `right`.
    pub fn combine(left: &Hull, right: &Hull) -> Result<Hull, HullError> {
        let upper = upper_contact(left, right)?;
        let lower = lower_contact(left, right)?;
        let l = left.vertices();
        let r = right.vertices();
        trace!(
            left = l.len(),
            right = r.len(),
            upper = ?(upper.i, upper.j),
            lower = ?(lower.i, lower.j),
            "combine"
        );

        let mut spliced = Vec::with_capacity(l.len() + r.len());
        let mut j = lower.j;
        loop {
            spliced.push(r[j]);
            if j == upper.j {
                break;
            }
            j = succ(j, r.len());
        }
        let mut i = upper.i;
        loop {
            spliced.push(l[i]);
            if i == lower.i {
                break;
            }
            i = succ(i, l.len());
        }

        let pivot = std::cmp::min_by(left.left_most(), right.left_most(), lex_cmp);
        Ok(Hull::around(pivot, spliced))
    }
}
