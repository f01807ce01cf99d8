use glam::Vec3;

use crate::F32Ext;

pub trait Vec3Ext
where
    Self: Sized,
{
    /// Squares each component of this vector.
    fn sqr(self) -> Self;

    /// See: [`F32Ext::safe_sqrt()`].
    fn safe_sqrt(self) -> Self;

    /// Returns luminance of this color-vector.
    fn luma(self) -> f32;
}

impl Vec3Ext for Vec3 {
    fn sqr(self) -> Self {
        self * self
    }

    fn safe_sqrt(self) -> Self {
        Vec3::new(self.x.safe_sqrt(), self.y.safe_sqrt(), self.z.safe_sqrt())
    }

    fn luma(self) -> f32 {
        self.dot(Vec3::new(0.2126, 0.7152, 0.0722))
    }
}
