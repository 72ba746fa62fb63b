//! Image plane types.
//!
//! All samples are normalized `f32` values, nominally in `[0, 1]`, stored
//! row-major. Planes processed together in one frame must share identical
//! dimensions; that invariant is checked at every public seam.

#[cfg(test)]
mod tests;

use crate::common::{Error, Result};

fn validate_dimensions(width: u32, height: u32) -> Result<()> {
    if width == 0 {
        return Err(Error::InvalidParameter {
            name: "width",
            value: width as f64,
        });
    }
    if height == 0 {
        return Err(Error::InvalidParameter {
            name: "height",
            value: height as f64,
        });
    }
    Ok(())
}

/// A rectangular grid of single-channel samples (luma or one chroma
/// channel).
#[derive(Debug, Clone)]
pub struct Plane {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl Plane {
    /// Creates a zero-filled plane.
    pub fn new(width: u32, height: u32) -> Result<Plane> {
        validate_dimensions(width, height)?;
        Ok(Plane {
            width,
            height,
            data: vec![0.0; width as usize * height as usize],
        })
    }

    /// Wraps existing row-major samples.
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<Plane> {
        validate_dimensions(width, height)?;
        let expected = width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::InvalidParameter {
                name: "data length",
                value: data.len() as f64,
            });
        }
        Ok(Plane {
            width,
            height,
            data,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f32 {
        debug_assert!(x < self.width && y < self.height);
        self.data[y as usize * self.width as usize + x as usize]
    }

    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f32) {
        debug_assert!(x < self.width && y < self.height);
        self.data[y as usize * self.width as usize + x as usize] = value;
    }

    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    pub fn fill(&mut self, value: f32) {
        self.data.fill(value);
    }

    pub fn copy_from(&mut self, other: &Plane) {
        assert_eq!(self.width, other.width, "width mismatch");
        assert_eq!(self.height, other.height, "height mismatch");
        self.data.copy_from_slice(&other.data);
    }

    /// Bytes backing this plane, including spare capacity. Used by the
    /// pool's resource-growth probes.
    pub(crate) fn storage_bytes(&self) -> usize {
        self.data.capacity() * std::mem::size_of::<f32>()
    }
}

/// Two interleaved color-difference channels (U, V pairs), recentered
/// around 0.5 in storage.
#[derive(Debug, Clone)]
pub struct ChromaPlane {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl ChromaPlane {
    /// Wraps existing interleaved U,V samples (`2 * width * height` values).
    pub fn from_data(width: u32, height: u32, data: Vec<f32>) -> Result<ChromaPlane> {
        validate_dimensions(width, height)?;
        let expected = 2 * width as usize * height as usize;
        if data.len() != expected {
            return Err(Error::InvalidParameter {
                name: "data length",
                value: data.len() as f64,
            });
        }
        Ok(ChromaPlane {
            width,
            height,
            data,
        })
    }

    /// A colorless plane: every U,V pair at the 0.5 midpoint.
    pub fn neutral(width: u32, height: u32) -> Result<ChromaPlane> {
        validate_dimensions(width, height)?;
        Ok(ChromaPlane {
            width,
            height,
            data: vec![0.5; 2 * width as usize * height as usize],
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// The (U, V) pair at a pixel, still in storage range `[0, 1]`.
    #[inline]
    pub fn uv(&self, x: u32, y: u32) -> (f32, f32) {
        debug_assert!(x < self.width && y < self.height);
        let i = 2 * (y as usize * self.width as usize + x as usize);
        (self.data[i], self.data[i + 1])
    }

    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }
}

/// Interleaved R,G,B output image.
///
/// Deliberately unclamped: out-of-range components are a diagnostic signal
/// for transform errors and must propagate to the caller unchanged.
#[derive(Debug, Clone)]
pub struct RgbImage {
    width: u32,
    height: u32,
    data: Vec<f32>,
}

impl RgbImage {
    pub fn new(width: u32, height: u32) -> Result<RgbImage> {
        validate_dimensions(width, height)?;
        Ok(RgbImage {
            width,
            height,
            data: vec![0.0; 3 * width as usize * height as usize],
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    #[inline]
    pub fn rgb(&self, x: u32, y: u32) -> [f32; 3] {
        debug_assert!(x < self.width && y < self.height);
        let i = 3 * (y as usize * self.width as usize + x as usize);
        [self.data[i], self.data[i + 1], self.data[i + 2]]
    }

    #[inline]
    pub fn samples(&self) -> &[f32] {
        &self.data
    }

    #[inline]
    pub fn samples_mut(&mut self) -> &mut [f32] {
        &mut self.data
    }

    pub(crate) fn storage_bytes(&self) -> usize {
        self.data.capacity() * std::mem::size_of::<f32>()
    }
}
