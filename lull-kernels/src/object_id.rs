use core::fmt;

/// Identifier of the object visible at given pixel.
///
/// Non-negative ids index directly into the frame's per-object transforms;
/// any negative id means that there's no object there (i.e. the pixel shows
/// the background).
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ObjectId(i32);

impl ObjectId {
    pub const BACKGROUND: Self = Self(-1);

    pub fn new(id: i32) -> Self {
        if id < 0 {
            Self::BACKGROUND
        } else {
            Self(id)
        }
    }

    /// Converts an id read from a float channel of a G-buffer image.
    ///
    /// Renderers usually store `-1.0` for background there; we round the
    /// value (ids come out of image decoders as e.g. `2.9999998`) and treat
    /// anything negative or NaN as the background.
    pub fn from_f32(id: f32) -> Self {
        if id.is_nan() || id < -0.5 {
            Self::BACKGROUND
        } else {
            Self::new(id.round() as i32)
        }
    }

    pub fn is_background(self) -> bool {
        self.0 < 0
    }

    /// Returns index of this object's transform, or `None` for background.
    pub fn index(self) -> Option<usize> {
        if self.is_background() {
            None
        } else {
            Some(self.0 as usize)
        }
    }

    pub fn get(self) -> i32 {
        self.0
    }
}

impl Default for ObjectId {
    fn default() -> Self {
        Self::BACKGROUND
    }
}

impl From<i32> for ObjectId {
    fn from(id: i32) -> Self {
        Self::new(id)
    }
}

impl fmt::Debug for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_background() {
            write!(f, "ObjectId(background)")
        } else {
            write!(f, "ObjectId({})", self.0)
        }
    }
}
