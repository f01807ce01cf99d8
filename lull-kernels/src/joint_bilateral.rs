use glam::{IVec2, Vec3};

use crate::F32Ext;

/// G-buffer data of a single pixel, as seen by the spatial filter.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Texel {
    pub color: Vec3,
    pub normal: Vec3,
    pub position: Vec3,
}

/// Weighting function of the joint bilateral filter.
///
/// Each guide signal contributes a squared difference divided by its sigma
/// squared, i.e. the weight is a product of Gaussians:
///
/// ```text
/// w = exp(-0.5 * (d_coord² / σ_coord² + d_color² / σ_color²
///                 + d_normal² / σ_normal² + d_plane² / σ_plane²))
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct JointBilateral {
    pub sigma_coord: f32,
    pub sigma_color: f32,
    pub sigma_normal: f32,
    pub sigma_plane: f32,
}

impl JointBilateral {
    /// Returns weight of `sample` (at `sample_pos`) when filtering `center`
    /// (at `center_pos`); always within `0.0 ..= 1.0`.
    pub fn weight(
        &self,
        center_pos: IVec2,
        center: &Texel,
        sample_pos: IVec2,
        sample: &Texel,
    ) -> f32 {
        let d_coord = (center_pos - sample_pos).as_vec2().length_squared();

        let d_color = center.color.distance_squared(sample.color);

        let d_normal = center.normal.dot(sample.normal).safe_acos().sqr();

        let d_plane = Self::plane_distance(center, sample).sqr();

        let exponent = d_coord / self.sigma_coord.sqr()
            + d_color / self.sigma_color.sqr()
            + d_normal / self.sigma_normal.sqr()
            + d_plane / self.sigma_plane.sqr();

        (-0.5 * exponent).exp()
    }

    /// Returns how far off `center`'s tangent plane `sample` lays, as a cosine
    /// between `center`'s normal and the direction towards `sample`.
    ///
    /// Samples at the very same position have no direction, so they are
    /// considered to lay on the plane.
    pub fn plane_distance(center: &Texel, sample: &Texel) -> f32 {
        let offset = sample.position - center.position;

        if offset.length_squared() == 0.0 {
            return 0.0;
        }

        center.normal.dot(offset.normalize_or_zero())
    }
}
