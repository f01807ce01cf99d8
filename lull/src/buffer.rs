use std::ops::{Index, IndexMut};

use bytemuck::Pod;
use glam::{uvec2, UVec2, Vec3};
use image::Rgb32FImage;
use rayon::prelude::*;

use crate::{Error, Result};

/// Owned, row-major 2D grid of texels.
#[derive(Clone, PartialEq)]
pub struct Buffer2D<T> {
    size: UVec2,
    data: Vec<T>,
}

impl<T> Buffer2D<T> {
    /// Creates a buffer out of row-major `data`.
    pub fn from_vec(size: UVec2, data: Vec<T>) -> Result<Self> {
        let expected = (size.x as usize) * (size.y as usize);

        if data.len() != expected {
            return Err(Error::BufferSizeMismatch {
                size,
                expected,
                actual: data.len(),
            });
        }

        Ok(Self { size, data })
    }

    pub fn size(&self) -> UVec2 {
        self.size
    }

    pub fn width(&self) -> u32 {
        self.size.x
    }

    pub fn height(&self) -> u32 {
        self.size.y
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn get(&self, pos: UVec2) -> Option<&T> {
        let idx = self.idx(pos)?;

        Some(&self.data[idx])
    }

    pub fn get_mut(&mut self, pos: UVec2) -> Option<&mut T> {
        let idx = self.idx(pos)?;

        Some(&mut self.data[idx])
    }

    pub fn as_slice(&self) -> &[T] {
        &self.data
    }

    /// Iterates over all texels, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (UVec2, &T)> + '_ {
        let width = self.size.x.max(1);

        self.data.iter().enumerate().map(move |(idx, texel)| {
            let idx = idx as u32;

            (uvec2(idx % width, idx / width), texel)
        })
    }

    fn idx(&self, pos: UVec2) -> Option<usize> {
        if pos.x < self.size.x && pos.y < self.size.y {
            Some((pos.y as usize) * (self.size.x as usize) + (pos.x as usize))
        } else {
            None
        }
    }
}

impl<T> Buffer2D<T>
where
    T: Clone,
{
    pub fn filled(size: UVec2, value: T) -> Self {
        Self {
            size,
            data: vec![value; (size.x as usize) * (size.y as usize)],
        }
    }
}

impl<T> Buffer2D<T>
where
    T: Clone + Default,
{
    pub fn new(size: UVec2) -> Self {
        Self::filled(size, T::default())
    }
}

impl<T> Buffer2D<T>
where
    T: Send,
{
    /// Overwrites each texel with `f(its position)`, processing rows in
    /// parallel.
    ///
    /// Returns after all rows have been written.
    pub fn par_fill(&mut self, f: impl Fn(UVec2) -> T + Sync + Send) {
        let width = self.size.x as usize;

        if width == 0 {
            return;
        }

        self.data
            .par_chunks_mut(width)
            .enumerate()
            .for_each(|(y, row)| {
                for (x, texel) in row.iter_mut().enumerate() {
                    *texel = f(uvec2(x as u32, y as u32));
                }
            });
    }

    /// Like [`Self::par_fill()`], but also writes to a same-sized companion
    /// buffer.
    pub fn par_fill_with<U>(
        &mut self,
        other: &mut Buffer2D<U>,
        f: impl Fn(UVec2) -> (T, U) + Sync + Send,
    ) where
        U: Send,
    {
        assert_eq!(self.size, other.size);

        let width = self.size.x as usize;

        if width == 0 {
            return;
        }

        self.data
            .par_chunks_mut(width)
            .zip(other.data.par_chunks_mut(width))
            .enumerate()
            .for_each(|(y, (row, other_row))| {
                for (x, (texel, other_texel)) in
                    row.iter_mut().zip(other_row.iter_mut()).enumerate()
                {
                    (*texel, *other_texel) = f(uvec2(x as u32, y as u32));
                }
            });
    }
}

impl<T> Buffer2D<T>
where
    T: Pod,
{
    /// Returns the raw texel data, e.g. to hand it over to an image encoder.
    pub fn as_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.data)
    }
}

impl Buffer2D<Vec3> {
    pub fn from_image(image: &Rgb32FImage) -> Self {
        let size = uvec2(image.width(), image.height());

        let data = image
            .pixels()
            .map(|pixel| Vec3::from_array(pixel.0))
            .collect();

        Self { size, data }
    }

    pub fn to_image(&self) -> Rgb32FImage {
        Rgb32FImage::from_fn(self.size.x, self.size.y, |x, y| {
            image::Rgb(self[uvec2(x, y)].to_array())
        })
    }
}

impl<T> Index<UVec2> for Buffer2D<T> {
    type Output = T;

    fn index(&self, pos: UVec2) -> &Self::Output {
        self.get(pos).unwrap_or_else(|| {
            panic!(
                "position {}x{} is out of bounds of buffer {}x{}",
                pos.x, pos.y, self.size.x, self.size.y
            )
        })
    }
}

impl<T> IndexMut<UVec2> for Buffer2D<T> {
    fn index_mut(&mut self, pos: UVec2) -> &mut Self::Output {
        let size = self.size;

        self.get_mut(pos).unwrap_or_else(|| {
            panic!(
                "position {}x{} is out of bounds of buffer {}x{}",
                pos.x, pos.y, size.x, size.y
            )
        })
    }
}

impl<T> std::fmt::Debug for Buffer2D<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer2D")
            .field("size", &self.size)
            .finish_non_exhaustive()
    }
}
