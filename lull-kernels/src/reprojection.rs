use glam::{vec2, Mat4, UVec2, Vec2, Vec3};

/// Matrices describing where an object and the camera were in the previous
/// frame.
#[derive(Clone, Copy, Debug)]
pub struct PrevView {
    pub model: Mat4,
    pub world_to_camera: Mat4,
    pub world_to_screen: Mat4,
}

/// Maps world-space positions of one object in the current frame into the
/// previous frame's screen-space.
///
/// Since every object is rigid, the whole chain collapses into a single
/// matrix:
///
/// ```text
/// screen_prev = S_prev * V_prev * M_prev * inverse(M_curr) * world_curr
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ReprojectionChain {
    matrix: Mat4,
}

impl ReprojectionChain {
    pub fn new(curr_model: Mat4, prev: &PrevView) -> Self {
        let matrix = prev.world_to_screen
            * prev.world_to_camera
            * prev.model
            * curr_model.inverse();

        Self { matrix }
    }

    /// Returns where `position` (given in current world-space) landed on the
    /// previous frame's screen.
    pub fn reproject(&self, position: Vec3) -> Reprojection {
        let screen = self.matrix.project_point3(position);

        Reprojection {
            prev_x: screen.x,
            prev_y: screen.y,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Reprojection {
    pub prev_x: f32,
    pub prev_y: f32,
}

impl Reprojection {
    pub fn prev_pos(&self) -> Vec2 {
        vec2(self.prev_x, self.prev_y)
    }

    pub fn prev_pos_round(&self) -> UVec2 {
        self.prev_pos().round().as_uvec2()
    }

    /// Returns whether the previous position lays within
    /// `[0, width - 1] × [0, height - 1]`.
    ///
    /// Non-finite positions (e.g. produced by a degenerate object matrix or a
    /// point on the camera plane) are never contained.
    pub fn is_within(&self, screen_size: UVec2) -> bool {
        let max = (screen_size.as_vec2() - 1.0).max(Vec2::ZERO);

        self.prev_x.is_finite()
            && self.prev_y.is_finite()
            && self.prev_x >= 0.0
            && self.prev_y >= 0.0
            && self.prev_x <= max.x
            && self.prev_y <= max.y
    }

    /// Returns the previous frame's pixel this reprojection points at, if it
    /// is on the screen.
    pub fn locate(&self, screen_size: UVec2) -> Option<UVec2> {
        if self.is_within(screen_size) {
            Some(self.prev_pos_round())
        } else {
            None
        }
    }
}
