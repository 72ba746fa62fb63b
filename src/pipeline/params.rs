use crate::common::{Error, Result};

/// Per-pixel cost of the tone curve, in weight units relative to one
/// filter tap.
const ENHANCE_COST: u32 = 1;
/// Per-pixel cost of the RGB merge.
const RECOMPOSE_COST: u32 = 2;

/// Advisory output quality level, reported alongside each frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QualityTier {
    /// Requested parameters ran unmodified.
    #[default]
    Full,
    /// The governor derated the frame to shed load.
    Reduced,
}

/// Per-frame processing parameters.
///
/// Carried by every [`Frame`](super::Frame); the engine validates them
/// before touching any buffer, so a bad set fails the frame cleanly.
#[derive(Debug, Clone, Copy)]
pub struct PipelineParams {
    /// Spatial sigma of the smoothing filter.
    pub spatial_sigma: f32,
    /// Range sigma of the horizontal smoothing pass. The vertical pass
    /// widens this internally.
    pub range_sigma: f32,
    /// Filter kernel half-width.
    pub radius: u32,
    /// Tone curve intensity.
    pub strength: f32,
    /// Quality level these parameters correspond to.
    pub tier: QualityTier,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            spatial_sigma: 1.5,
            range_sigma: 0.08,
            radius: 2,
            strength: 1.0,
            tier: QualityTier::Full,
        }
    }
}

impl PipelineParams {
    pub fn validate(&self) -> Result<()> {
        if !self.spatial_sigma.is_finite() || self.spatial_sigma <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "spatial_sigma",
                value: self.spatial_sigma as f64,
            });
        }
        if !self.range_sigma.is_finite() || self.range_sigma <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "range_sigma",
                value: self.range_sigma as f64,
            });
        }
        if self.radius < 1 {
            return Err(Error::InvalidParameter {
                name: "radius",
                value: self.radius as f64,
            });
        }
        if !self.strength.is_finite() || self.strength <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "strength",
                value: self.strength as f64,
            });
        }
        Ok(())
    }

    /// Abstract per-pixel work estimate: one weight unit per filter tap
    /// across both passes, plus fixed curve and merge costs.
    pub fn cost_per_pixel(&self) -> u32 {
        2 * (2 * self.radius + 1) + ENHANCE_COST + RECOMPOSE_COST
    }
}
