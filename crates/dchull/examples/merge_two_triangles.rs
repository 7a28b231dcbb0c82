//! Print the tangents and merged boundary of two separated triangles.
//!
//! Usage:
//!   cargo run -p dchull --example merge_two_triangles

use dchull::{find_lower, find_upper, Hull, Vec2};

fn main() -> Result<(), dchull::HullError> {
    let left = Hull::from_points(&[Vec2::new(0.0, 0.0), Vec2::new(1.0, 3.0), Vec2::new(2.0, 1.0)])?;
    let right = Hull::from_points(&[Vec2::new(5.0, -1.0), Vec2::new(6.0, 2.0), Vec2::new(7.0, 0.0)])?;
    let upper = find_upper(&left, &right)?;
    let lower = find_lower(&left, &right)?;
    println!("upper: ({}, {}) -> ({}, {}), slope {:.3}", upper.a.x, upper.a.y, upper.b.x, upper.b.y, upper.slope);
    println!("lower: ({}, {}) -> ({}, {}), slope {:.3}", lower.a.x, lower.a.y, lower.b.x, lower.b.y, lower.slope);
    let merged = Hull::combine(&left, &right)?;
    for (k, v) in merged.vertices().iter().enumerate() {
        println!("vertex {k}: ({}, {})", v.x, v.y);
    }
    println!("area {:.3}", merged.area());
    Ok(())
}
