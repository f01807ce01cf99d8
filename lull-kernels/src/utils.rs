mod f32_ext;
mod vec3_ext;

use core::ops;

pub use self::f32_ext::*;
pub use self::vec3_ext::*;

/// Exponential moving average: `alpha * curr + (1 - alpha) * prev`.
///
/// Written out instead of `prev + (curr - prev) * alpha` so that `alpha = 1.0`
/// returns `curr` bit-for-bit.
pub fn blend<T>(prev: T, curr: T, alpha: f32) -> T
where
    T: ops::Add<Output = T>,
    T: ops::Mul<f32, Output = T>,
    T: Copy,
{
    curr * alpha + prev * (1.0 - alpha)
}
