use glam::{Mat4, UVec2, Vec3};
use log::debug;

use crate::kernels::{ObjectId, PrevView};
use crate::{Buffer2D, Error, Result};

/// Matrices attached to a frame.
#[derive(Clone, Debug, PartialEq)]
pub struct Transforms {
    /// Object-to-world matrix of each object, indexed by [`ObjectId`].
    pub objects: Vec<Mat4>,
    pub world_to_camera: Mat4,
    pub world_to_screen: Mat4,
}

impl Transforms {
    /// Splits a flat list of matrices, laid out as
    /// `[object 0, object 1, ..., world-to-camera, world-to-screen]`.
    pub fn from_matrices(mut matrices: Vec<Mat4>) -> Result<Self> {
        let actual = matrices.len();

        let (Some(world_to_screen), Some(world_to_camera)) =
            (matrices.pop(), matrices.pop())
        else {
            return Err(Error::MissingCameraTransforms { actual });
        };

        Ok(Self {
            objects: matrices,
            world_to_camera,
            world_to_screen,
        })
    }

    pub fn object(&self, id: ObjectId) -> Option<Mat4> {
        self.objects.get(id.index()?).copied()
    }

    /// Returns matrices needed to reproject given object from this frame.
    pub fn view_of(&self, id: ObjectId) -> Option<PrevView> {
        Some(PrevView {
            model: self.object(id)?,
            world_to_camera: self.world_to_camera,
            world_to_screen: self.world_to_screen,
        })
    }

    /// Converts back into the flat layout of [`Self::from_matrices()`].
    pub fn into_matrices(self) -> Vec<Mat4> {
        let mut matrices = self.objects;

        matrices.push(self.world_to_camera);
        matrices.push(self.world_to_screen);
        matrices
    }
}

/// Everything the renderer knows about a single frame.
///
/// Use [`Frame::new()`] to build one - it checks that all buffers line up,
/// so that the passes don't have to.
#[derive(Clone, Debug)]
pub struct Frame {
    beauty: Buffer2D<Vec3>,
    depth: Buffer2D<f32>,
    normal: Buffer2D<Vec3>,
    position: Buffer2D<Vec3>,
    id: Buffer2D<ObjectId>,
    transforms: Transforms,
}

impl Frame {
    pub fn new(
        beauty: Buffer2D<Vec3>,
        depth: Buffer2D<f32>,
        normal: Buffer2D<Vec3>,
        position: Buffer2D<Vec3>,
        id: Buffer2D<ObjectId>,
        transforms: Transforms,
    ) -> Result<Self> {
        let size = beauty.size();

        if beauty.is_empty() {
            return Err(Error::EmptyFrame);
        }

        for (buffer, actual) in [
            ("depth", depth.size()),
            ("normal", normal.size()),
            ("position", position.size()),
            ("id", id.size()),
        ] {
            if actual != size {
                return Err(Error::FrameSizeMismatch {
                    buffer,
                    expected: size,
                    actual,
                });
            }
        }

        if let Some((pos, obj_id)) = id.iter().find(|(_, obj_id)| {
            !obj_id.is_background() && transforms.object(**obj_id).is_none()
        }) {
            return Err(Error::UnknownObject {
                pos,
                id: obj_id.get(),
                objects: transforms.objects.len(),
            });
        }

        debug!(
            "Frame validated; size={}x{}, objects={}",
            size.x,
            size.y,
            transforms.objects.len()
        );

        Ok(Self {
            beauty,
            depth,
            normal,
            position,
            id,
            transforms,
        })
    }

    pub fn size(&self) -> UVec2 {
        self.beauty.size()
    }

    /// Noisy color.
    pub fn beauty(&self) -> &Buffer2D<Vec3> {
        &self.beauty
    }

    pub fn depth(&self) -> &Buffer2D<f32> {
        &self.depth
    }

    pub fn normal(&self) -> &Buffer2D<Vec3> {
        &self.normal
    }

    /// World-space position.
    pub fn position(&self) -> &Buffer2D<Vec3> {
        &self.position
    }

    pub fn id(&self) -> &Buffer2D<ObjectId> {
        &self.id
    }

    pub fn transforms(&self) -> &Transforms {
        &self.transforms
    }
}
