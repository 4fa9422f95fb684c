//! Grid distance metrics and the engine's integer cost model.
//!
//! Costs are `i32` throughout: a cardinal step costs 1 and a run of `n`
//! diagonal steps costs `trunc(n * √2)`.

use jumpgrid_core::Point;

/// Cost of one diagonal step relative to a cardinal step of 1.
pub const SQRT_2: f32 = std::f32::consts::SQRT_2;

/// Chebyshev (L∞) distance between two points.
#[inline]
pub fn chebyshev(a: Point, b: Point) -> i32 {
    (a.x - b.x).abs().max((a.y - b.y).abs())
}

/// Truncated cost of `steps` consecutive diagonal steps.
#[inline]
pub fn diagonal_cost(steps: i32) -> i32 {
    (SQRT_2 * steps as f32) as i32
}

/// Octile distance: `max + (√2 - 1) * min` over the absolute component
/// deltas, truncated to an integer.
///
/// Admissible and consistent for 8-way movement under this cost model.
#[inline]
pub fn octile(a: Point, b: Point) -> i32 {
    let dx = (a.x - b.x).abs();
    let dy = (a.y - b.y).abs();
    (dx.max(dy) as f32 + (SQRT_2 - 1.0) * dx.min(dy) as f32) as i32
}

/// Total cost of a waypoint path under the engine's cost model.
///
/// Each consecutive pair must lie on a straight cardinal or diagonal ray,
/// which holds for every path the search returns. Diagonal legs are
/// truncated individually, matching how the search accumulates cost.
pub fn path_cost(path: &[Point]) -> i32 {
    path.windows(2)
        .map(|leg| {
            let d = leg[1] - leg[0];
            if d.x == 0 || d.y == 0 {
                d.x.abs() + d.y.abs()
            } else {
                diagonal_cost(d.x.abs().max(d.y.abs()))
            }
        })
        .sum()
}
