pub trait F32Ext
where
    Self: Sized,
{
    fn sqr(self) -> Self;

    /// `acos()` that doesn't return NaN when rounding errors push the
    /// argument slightly outside of `-1.0 ..= 1.0`.
    fn safe_acos(self) -> Self;

    /// `sqrt()` that treats negative arguments (e.g. a variance computed as
    /// `E[X²] - E[X]²`) as zero.
    fn safe_sqrt(self) -> Self;
}

impl F32Ext for f32 {
    fn sqr(self) -> Self {
        self * self
    }

    fn safe_acos(self) -> Self {
        self.clamp(-1.0, 1.0).acos()
    }

    fn safe_sqrt(self) -> Self {
        self.max(0.0).sqrt()
    }
}
