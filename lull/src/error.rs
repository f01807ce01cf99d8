use glam::UVec2;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Errors reported when data is handed over to the denoiser.
///
/// The passes themselves never fail - everything here is checked once per
/// frame, before any pixel gets touched.
#[derive(thiserror::Error, Debug, Clone, PartialEq)]
pub enum Error {
    #[error(
        "buffer of size {}x{} needs {expected} texels, got {actual}",
        size.x,
        size.y
    )]
    BufferSizeMismatch {
        size: UVec2,
        expected: usize,
        actual: usize,
    },

    #[error(
        "`{buffer}` has size {}x{}, but the frame is {}x{}",
        actual.x,
        actual.y,
        expected.x,
        expected.y
    )]
    FrameSizeMismatch {
        buffer: &'static str,
        expected: UVec2,
        actual: UVec2,
    },

    #[error("frame has no pixels")]
    EmptyFrame,

    #[error(
        "frame has {actual} transforms, but at least two (world-to-camera and \
         world-to-screen) are required"
    )]
    MissingCameraTransforms { actual: usize },

    #[error(
        "pixel {}x{} refers to object #{id}, but the frame only has {objects} \
         object transforms",
        pos.x,
        pos.y
    )]
    UnknownObject { pos: UVec2, id: i32, objects: usize },
}
