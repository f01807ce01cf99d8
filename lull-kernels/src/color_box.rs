use glam::Vec3;

use crate::Vec3Ext;

/// First and second raw moments of a set of colors, accumulated one sample
/// at a time.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ColorMoments {
    sum: Vec3,
    sum_sqr: Vec3,
    count: u32,
}

impl ColorMoments {
    pub fn add(&mut self, color: Vec3) {
        self.sum += color;
        self.sum_sqr += color.sqr();
        self.count += 1;
    }

    pub fn count(&self) -> u32 {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Returns `E[X]`, or `None` if there are no samples.
    pub fn mean(&self) -> Option<Vec3> {
        if self.is_empty() {
            None
        } else {
            Some(self.sum / (self.count as f32))
        }
    }

    /// Returns per-channel standard deviation, computed as
    /// `sqrt(E[X²] - E[X]²)`.
    pub fn std_dev(&self) -> Option<Vec3> {
        let mean = self.mean()?;
        let mean_sqr = self.sum_sqr / (self.count as f32);

        Some((mean_sqr - mean.sqr()).safe_sqrt())
    }

    /// Returns the `mean ± k * std_dev` box, or `None` if there are no
    /// samples to build it from.
    pub fn color_box(&self, k: f32) -> Option<ColorBox> {
        let mean = self.mean()?;
        let std_dev = self.std_dev()?;

        Some(ColorBox {
            min: mean - std_dev * k,
            max: mean + std_dev * k,
        })
    }
}

impl FromIterator<Vec3> for ColorMoments {
    fn from_iter<T>(iter: T) -> Self
    where
        T: IntoIterator<Item = Vec3>,
    {
        let mut this = Self::default();

        for color in iter {
            this.add(color);
        }

        this
    }
}

/// Axis-aligned box in color-space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ColorBox {
    pub min: Vec3,
    pub max: Vec3,
}

impl ColorBox {
    pub fn center(&self) -> Vec3 {
        0.5 * (self.min + self.max)
    }

    /// Clamps `color` into this box, channel by channel.
    pub fn clamp(&self, color: Vec3) -> Vec3 {
        // Not `Vec3::clamp()`, since that one asserts `min <= max` which can
        // be off by an ulp here
        color.max(self.min).min(self.max)
    }

    pub fn contains(&self, color: Vec3) -> bool {
        color.cmpge(self.min).all() && color.cmple(self.max).all()
    }
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use glam::vec3;

    use super::*;

    #[test]
    fn empty() {
        let target = ColorMoments::default();

        assert!(target.is_empty());
        assert_eq!(None, target.mean());
        assert_eq!(None, target.std_dev());
        assert_eq!(None, target.color_box(1.0));
    }

    #[test]
    fn mean_and_std_dev() {
        let target: ColorMoments = [
            vec3(1.0, 0.0, 5.0),
            vec3(3.0, 0.0, 5.0),
            vec3(1.0, 0.0, 5.0),
            vec3(3.0, 0.0, 5.0),
        ]
        .into_iter()
        .collect();

        let mean = target.mean().unwrap();
        let std_dev = target.std_dev().unwrap();

        assert_eq!(4, target.count());
        assert_relative_eq!(2.0, mean.x);
        assert_relative_eq!(0.0, mean.y);
        assert_relative_eq!(5.0, mean.z);
        assert_relative_eq!(1.0, std_dev.x);
        assert_relative_eq!(0.0, std_dev.y);
        assert_relative_eq!(0.0, std_dev.z);
    }

    #[test]
    fn std_dev_never_nan() {
        // Sums of identical non-representable values can make `E[X²]` come
        // out slightly smaller than `E[X]²`
        let target: ColorMoments =
            std::iter::repeat(Vec3::splat(0.1)).take(49).collect();

        let std_dev = target.std_dev().unwrap();

        assert!(!std_dev.is_nan());
        assert!(std_dev.cmpge(Vec3::ZERO).all());
    }

    #[test]
    fn color_box() {
        let target: ColorMoments =
            [vec3(1.0, 2.0, 3.0), vec3(3.0, 2.0, 3.0)].into_iter().collect();

        let actual = target.color_box(2.0).unwrap();

        assert_relative_eq!(0.0, actual.min.x);
        assert_relative_eq!(4.0, actual.max.x);
        assert_relative_eq!(2.0, actual.min.y);
        assert_relative_eq!(2.0, actual.max.y);
        assert_relative_eq!(2.0, actual.center().x);
    }

    #[test]
    fn clamp() {
        let target = ColorBox {
            min: vec3(0.0, 0.5, 1.0),
            max: vec3(1.0, 0.5, 2.0),
        };

        assert_eq!(vec3(1.0, 0.5, 1.0), target.clamp(vec3(3.0, 0.1, -1.0)));
        assert_eq!(vec3(0.3, 0.5, 1.5), target.clamp(vec3(0.3, 0.9, 1.5)));
        assert!(target.contains(vec3(0.3, 0.5, 1.5)));
        assert!(!target.contains(vec3(0.3, 0.6, 1.5)));
    }
}
