use glam::{UVec2, Vec3};
use log::trace;

use super::window_iter;
use crate::kernels::Texel;
use crate::{Buffer2D, DenoiserConfig, Frame};

/// Runs joint bilateral filter over frame's beauty, guided by its normals and
/// positions.
pub fn spatial_filter(
    frame: &Frame,
    config: &DenoiserConfig,
) -> Buffer2D<Vec3> {
    trace!(
        "Running spatial filter; radius={}, sigmas={:?}",
        config.filter_radius,
        config.joint_bilateral()
    );

    let size = frame.size();
    let filter = config.joint_bilateral();
    let texel = |pos: UVec2| Texel {
        color: frame.beauty()[pos],
        normal: frame.normal()[pos],
        position: frame.position()[pos],
    };

    let mut out = Buffer2D::new(size);

    out.par_fill(|center_pos| {
        let center = texel(center_pos);
        let mut sum_color = Vec3::ZERO;
        let mut sum_weights = 0.0;

        for sample_pos in window_iter(center_pos, config.filter_radius, size) {
            let sample = texel(sample_pos);

            let sample_weight = filter.weight(
                center_pos.as_ivec2(),
                &center,
                sample_pos.as_ivec2(),
                &sample,
            );

            sum_color += sample.color * sample_weight;
            sum_weights += sample_weight;
        }

        // All weights can underflow to zero (e.g. for pixels without a
        // normal), in which case there's nothing to average
        if sum_weights < f32::MIN_POSITIVE {
            return center.color;
        }

        let color = sum_color / sum_weights;

        if color.is_finite() {
            color
        } else {
            center.color
        }
    });

    out
}
