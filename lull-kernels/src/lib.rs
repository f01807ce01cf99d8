//! Per-pixel algorithms used by Lull's passes.
//!
//! Nothing here owns any buffers - each function looks at a handful of
//! texels and returns a value, so that the engine is free to run them in
//! whatever order (and on however many threads) it wants.

#![allow(clippy::manual_range_contains)]

mod color_box;
mod joint_bilateral;
mod object_id;
mod reprojection;
mod utils;

pub use self::color_box::*;
pub use self::joint_bilateral::*;
pub use self::object_id::*;
pub use self::reprojection::*;
pub use self::utils::*;
