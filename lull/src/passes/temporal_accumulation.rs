use glam::Vec3;
use log::trace;

use super::window_iter;
use crate::kernels::{blend, ColorMoments};
use crate::{Buffer2D, DenoiserConfig};

/// Blends reprojected history with the current frame.
///
/// History gets clamped into a color box built out of its valid neighbours
/// first, which suppresses ghosting around disocclusions; pixels without any
/// valid neighbours just take the current color.
pub fn accumulate(
    valid: &Buffer2D<bool>,
    history: &Buffer2D<Vec3>,
    filtered: &Buffer2D<Vec3>,
    config: &DenoiserConfig,
    out: &mut Buffer2D<Vec3>,
) {
    let size = history.size();

    assert_eq!(size, valid.size());
    assert_eq!(size, filtered.size());
    assert_eq!(size, out.size());

    trace!(
        "Running temporal accumulation; alpha={}, k={}, radius={}",
        config.alpha,
        config.color_box_k,
        config.statistics_radius
    );

    out.par_fill(|pos| {
        let curr = filtered[pos];

        let moments: ColorMoments =
            window_iter(pos, config.statistics_radius, size)
                .filter(|&sample_pos| valid[sample_pos])
                .map(|sample_pos| history[sample_pos])
                .collect();

        match moments.color_box(config.color_box_k) {
            Some(color_box) => {
                let prev = color_box.clamp(history[pos]);

                blend(prev, curr, config.alpha)
            }

            None => curr,
        }
    });
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::{uvec2, vec3, UVec2};
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    use super::*;

    fn random(size: UVec2, seed: u64) -> Buffer2D<Vec3> {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut buffer = Buffer2D::new(size);

        for y in 0..size.y {
            for x in 0..size.x {
                buffer[uvec2(x, y)] = vec3(
                    rng.gen_range(0.0..1.0),
                    rng.gen_range(0.0..1.0),
                    rng.gen_range(0.0..1.0),
                );
            }
        }

        buffer
    }

    fn run(
        valid: &Buffer2D<bool>,
        history: &Buffer2D<Vec3>,
        filtered: &Buffer2D<Vec3>,
        config: &DenoiserConfig,
    ) -> Buffer2D<Vec3> {
        let mut out = Buffer2D::filled(history.size(), Vec3::NAN);

        accumulate(valid, history, filtered, config, &mut out);
        out
    }

    #[test]
    fn alpha_of_one_takes_current_frame() {
        let size = uvec2(9, 7);
        let mut valid = Buffer2D::new(size);

        valid.par_fill(|pos| (pos.x + pos.y) % 3 != 0);

        let history = random(size, 1);
        let filtered = random(size, 2);

        let actual = run(
            &valid,
            &history,
            &filtered,
            &DenoiserConfig::default().with_alpha(1.0),
        );

        assert_eq!(filtered, actual);
    }

    #[test]
    fn constant_history_survives_clamping() {
        let size = uvec2(8, 8);
        let color = vec3(0.25, 0.5, 0.75);
        let valid = Buffer2D::filled(size, true);
        let history = Buffer2D::filled(size, color);
        let filtered = random(size, 3);

        for k in [0.0, 0.5, 1.0, 3.0] {
            // With zero variance the box collapses into its center, which is
            // the history itself
            let actual = run(
                &valid,
                &history,
                &filtered,
                &DenoiserConfig::default().with_alpha(0.0).with_color_box_k(k),
            );

            for (_, texel) in actual.iter() {
                assert_relative_eq!(color.x, texel.x, epsilon = 1e-6);
                assert_relative_eq!(color.y, texel.y, epsilon = 1e-6);
                assert_relative_eq!(color.z, texel.z, epsilon = 1e-6);
            }
        }
    }

    #[test]
    fn blend_with_constant_history() {
        let size = uvec2(5, 5);
        let history = Buffer2D::filled(size, Vec3::ONE);
        let filtered = Buffer2D::filled(size, Vec3::ZERO);

        let actual = run(
            &Buffer2D::filled(size, true),
            &history,
            &filtered,
            &DenoiserConfig::default(),
        );

        for (_, texel) in actual.iter() {
            assert_relative_eq!(0.8, texel.x, epsilon = 1e-6);
        }
    }

    #[test]
    fn outliers_get_clamped() {
        let size = uvec2(7, 7);
        let center = uvec2(3, 3);
        let valid = Buffer2D::filled(size, true);
        let mut history = Buffer2D::new(size);

        history.par_fill(|pos| {
            if pos == center {
                Vec3::splat(100.0)
            } else if (pos.x + pos.y) % 2 == 0 {
                Vec3::splat(0.4)
            } else {
                Vec3::splat(0.6)
            }
        });

        let actual = run(
            &valid,
            &history,
            &Buffer2D::new(size),
            &DenoiserConfig::default()
                .with_alpha(0.0)
                .with_statistics_radius(1),
        );

        let moments: ColorMoments = window_iter(center, 1, size)
            .map(|pos| history[pos])
            .collect();

        let color_box = moments.color_box(1.0).unwrap();

        assert!(actual[center].x < 100.0);
        assert_relative_eq!(color_box.max.x, actual[center].x);
    }

    #[test]
    fn no_valid_neighbours_takes_current_frame() {
        let size = uvec2(12, 4);
        let mut valid = Buffer2D::new(size);

        // Only the right edge is valid, so pixels further than 3 texels from
        // it don't have any statistics
        valid.par_fill(|pos| pos.x == 11);

        let history = random(size, 4);
        let filtered = random(size, 5);
        let actual = run(&valid, &history, &filtered, &Default::default());

        for (pos, texel) in actual.iter() {
            if pos.x < 8 {
                assert_eq!(filtered[pos], *texel);
            } else {
                assert_ne!(filtered[pos], *texel);
            }
        }
    }

    #[test]
    fn invalid_history_is_pulled_into_valid_neighbourhood() {
        let size = uvec2(5, 1);
        let mut valid = Buffer2D::filled(size, true);
        let mut history = Buffer2D::filled(size, Vec3::splat(0.5));

        // Pixel #2 got disoccluded, so reprojection gave it zero
        valid[uvec2(2, 0)] = false;
        history[uvec2(2, 0)] = Vec3::ZERO;

        let actual = run(
            &valid,
            &history,
            &Buffer2D::filled(size, Vec3::splat(0.5)),
            &DenoiserConfig::default(),
        );

        assert_relative_eq!(0.5, actual[uvec2(2, 0)].x, epsilon = 1e-6);
    }

    #[test]
    fn output_is_finite() {
        let size = uvec2(16, 16);
        let mut valid = Buffer2D::new(size);

        valid.par_fill(|pos| pos.x % 2 == 0);

        let actual = run(
            &valid,
            &random(size, 6),
            &random(size, 7),
            &Default::default(),
        );

        assert!(actual.iter().all(|(_, texel)| texel.is_finite()));
    }
}
