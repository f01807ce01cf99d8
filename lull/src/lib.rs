//! Lull: a temporal denoiser for noisy, path-traced frames.
//!
//! Each frame goes through a joint bilateral filter first and then gets
//! blended with the history reprojected from previous frames:
//!
//! ```no_run
//! # fn frames() -> Vec<lull::Frame> { todo!() }
//! let mut denoiser = lull::Denoiser::default();
//!
//! for frame in frames() {
//!     let color = denoiser.process_frame(frame).unwrap();
//!
//!     // ...
//! #   let _ = color;
//! }
//! ```

mod buffer;
mod config;
mod denoiser;
mod error;
mod frame;
mod passes;
mod utils;

pub use lull_kernels as kernels;
pub use lull_kernels::{JointBilateral, ObjectId};

pub use self::buffer::*;
pub use self::config::*;
pub use self::denoiser::*;
pub use self::error::*;
pub use self::frame::*;
pub use self::passes::*;
pub(crate) use self::utils::*;
