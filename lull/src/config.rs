use derivative::Derivative;

use crate::kernels::JointBilateral;

/// Tunables of the denoiser.
///
/// Sigmas usually need tuning per scene; the defaults work for scenes
/// measured in meters and rendered at around 1280x720.
#[derive(Clone, Copy, Debug, PartialEq, Derivative)]
#[derivative(Default)]
pub struct DenoiserConfig {
    /// Weight of the current frame when blending it with the history; lower
    /// values trade ghosting for less noise.
    #[derivative(Default(value = "0.2"))]
    pub alpha: f32,

    /// Size of the color box history gets clamped into, in standard
    /// deviations.
    #[derivative(Default(value = "1.0"))]
    pub color_box_k: f32,

    #[derivative(Default(value = "0.1"))]
    pub sigma_plane: f32,

    #[derivative(Default(value = "0.6"))]
    pub sigma_color: f32,

    #[derivative(Default(value = "0.1"))]
    pub sigma_normal: f32,

    #[derivative(Default(value = "32.0"))]
    pub sigma_coord: f32,

    /// Radius of the joint bilateral filter's window, in pixels.
    #[derivative(Default(value = "16"))]
    pub filter_radius: u32,

    /// Radius of the window color box statistics are gathered from, in
    /// pixels.
    #[derivative(Default(value = "3"))]
    pub statistics_radius: u32,
}

impl DenoiserConfig {
    pub fn with_alpha(mut self, alpha: f32) -> Self {
        self.alpha = alpha;
        self
    }

    pub fn with_color_box_k(mut self, color_box_k: f32) -> Self {
        self.color_box_k = color_box_k;
        self
    }

    pub fn with_filter_radius(mut self, filter_radius: u32) -> Self {
        self.filter_radius = filter_radius;
        self
    }

    pub fn with_statistics_radius(mut self, statistics_radius: u32) -> Self {
        self.statistics_radius = statistics_radius;
        self
    }

    pub fn with_sigmas(mut self, sigmas: JointBilateral) -> Self {
        self.sigma_coord = sigmas.sigma_coord;
        self.sigma_color = sigmas.sigma_color;
        self.sigma_normal = sigmas.sigma_normal;
        self.sigma_plane = sigmas.sigma_plane;
        self
    }

    pub fn joint_bilateral(&self) -> JointBilateral {
        JointBilateral {
            sigma_coord: self.sigma_coord,
            sigma_color: self.sigma_color,
            sigma_normal: self.sigma_normal,
            sigma_plane: self.sigma_plane,
        }
    }
}
