mod reprojection;
mod spatial_filter;
mod temporal_accumulation;

use glam::{uvec2, UVec2};

pub use self::reprojection::*;
pub use self::spatial_filter::*;
pub use self::temporal_accumulation::*;

/// Returns corners (inclusive) of a `radius`-sized square window around
/// `center`, cut to the screen.
fn window(center: UVec2, radius: u32, size: UVec2) -> (UVec2, UVec2) {
    let min = uvec2(
        center.x.saturating_sub(radius),
        center.y.saturating_sub(radius),
    );

    let max = uvec2(
        center.x.saturating_add(radius).min(size.x - 1),
        center.y.saturating_add(radius).min(size.y - 1),
    );

    (min, max)
}

/// Iterates over all positions inside given window, row by row.
fn window_iter(
    center: UVec2,
    radius: u32,
    size: UVec2,
) -> impl Iterator<Item = UVec2> {
    let (min, max) = window(center, radius, size);

    (min.y..=max.y).flat_map(move |y| (min.x..=max.x).map(move |x| uvec2(x, y)))
}
