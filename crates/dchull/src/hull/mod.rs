//! Convex hulls as angle-ordered vertex sequences, with tangent-based merging.
//!
//! Purpose
//! - `Hull`: a convex polygon stored counter-clockwise from its leftmost
//!   vertex, ready for the two-pointer tangent walk.
//! - `find_upper` / `find_lower`: tangents between two separated hulls.
//! - `Hull::combine`: linear-time splice of two hulls into one.
//!
//! Numerics
//! - Every decision is an orientation sign (`util::orientation`), evaluated
//!   exactly. Slopes are only computed for reporting (`Edge::slope`), so
//!   vertical edges and equal x-coordinates need no special casing.
//! - Collinear boundary points are pruned; collinear input collapses to a
//!   segment between its two extreme points.
//!
//! Code cross-refs: `crate::solver::solve`, `crate::error::HullError`

mod combine;
mod ordered;
mod tangent;
mod types;
mod util;

pub use ordered::{order, Hull};
pub use tangent::{find_lower, find_upper};
pub use types::Edge;
pub use util::{orientation, Orientation};

pub(crate) use util::lex_cmp;
#[cfg(test)]
pub(crate) use util::cross;
