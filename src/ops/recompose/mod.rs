//! YUV to RGB recomposition.
//!
//! Merges the enhanced luma plane with the untouched chroma plane into an
//! interleaved RGB image using the BT.601 conversion matrix. Output
//! components are deliberately not clamped; callers that need a display
//! range apply their own gamut mapping downstream.

mod cpu;

#[cfg(test)]
mod tests;

use crate::common::{check_dims, Result};
use crate::plane::{ChromaPlane, Plane, RgbImage};

/// BT.601 conversion coefficients.
const V_TO_R: f32 = 1.402;
const U_TO_G: f32 = 0.344;
const V_TO_G: f32 = 0.714;
const U_TO_B: f32 = 1.772;

/// Stored chroma is offset so neutral color sits at this value.
const CHROMA_MIDPOINT: f32 = 0.5;

/// Plane-merge step producing the final RGB image.
#[derive(Debug, Clone, Copy, Default)]
pub struct Recompose;

impl Recompose {
    /// Converts one luma sample and its chroma pair to RGB.
    #[inline]
    pub fn recompose_pixel(luma: f32, u: f32, v: f32) -> [f32; 3] {
        let u = u - CHROMA_MIDPOINT;
        let v = v - CHROMA_MIDPOINT;
        [
            luma + V_TO_R * v,
            luma - U_TO_G * u - V_TO_G * v,
            luma + U_TO_B * u,
        ]
    }

    /// Merges `luma` and `chroma` into `output`. All three extents must
    /// match; mismatches are rejected before any pixel is written.
    pub fn apply(&self, luma: &Plane, chroma: &ChromaPlane, output: &mut RgbImage) -> Result<()> {
        check_dims("recompose luma", luma.dimensions(), output.dimensions())?;
        check_dims("recompose chroma", chroma.dimensions(), output.dimensions())?;
        cpu::apply(luma, chroma, output);
        Ok(())
    }
}
