//! Planar convex hulls by divide and conquer.
//!
//! Layout
//! - `hull`: the `Hull` type (angle-ordered vertices), tangents, and merge.
//! - `solver`: recursive split/merge driver over x-sorted input.
//! - `sample`: reproducible random point clouds for tests, benches, and the CLI.
//!
//! The crate performs no I/O and installs no logging subscriber; it only
//! emits `tracing` events. Callers consume hulls through `Hull::vertices`.

pub mod error;
pub mod hull;
pub mod sample;
pub mod solver;

#[cfg(test)]
mod testutil;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::HullError;
pub use hull::{find_lower, find_upper, Edge, Hull};
pub use nalgebra::Vector2 as Vec2;
pub use solver::{solve, solve_unsorted, solve_with, SolveCfg};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::hull::{orientation, Orientation};
    pub use crate::sample::{draw_cloud, CloudCfg, Distribution, ReplayToken};
    pub use crate::{solve, solve_unsorted, solve_with, Hull, HullError, SolveCfg};
    pub use nalgebra::Vector2 as Vec2;
}
