//! Adaptive brightness boost for the filtered luma plane.
//!
//! Dark samples get a strong multiplicative gain that tapers smoothly toward
//! the highlights, then the boosted value is folded through an exponential
//! soft knee so nothing blows out. The curve is monotonic in both the input
//! sample and the strength parameter.

mod cpu;

#[cfg(test)]
mod tests;

use crate::common::{check_dims, Error, Result};
use crate::ops::Stage;
use crate::plane::Plane;

/// Peak multiplicative gain as the sample approaches black.
const GAIN_CEILING: f32 = 6.4;
/// Steepness of the sigmoid that tapers the gain toward the highlights.
const CURVE_STEEPNESS: f32 = 2.0;
/// Small quadratic term that keeps midtones from flattening.
const QUADRATIC_BOOST: f32 = 0.3;

/// Output clamp keeping results strictly inside (0, 1) after f32 rounding.
const OUT_FLOOR: f32 = 1e-7;
const OUT_CEIL: f32 = 1.0 - 1e-6;

/// Tone curve parameters.
#[derive(Debug, Clone, Copy)]
pub struct Enhancement {
    /// Overall curve intensity. Must be finite and > 0; 1.0 is nominal.
    pub strength: f32,
}

impl Default for Enhancement {
    fn default() -> Self {
        Self { strength: 1.0 }
    }
}

impl Enhancement {
    pub fn new(strength: f32) -> Self {
        Self { strength }
    }

    pub fn validate(&self) -> Result<()> {
        if !self.strength.is_finite() || self.strength <= 0.0 {
            return Err(Error::InvalidParameter {
                name: "strength",
                value: self.strength as f64,
            });
        }
        Ok(())
    }

    /// Applies the curve to a single luma sample.
    #[inline]
    pub fn enhance_sample(&self, sample: f32) -> f32 {
        let gain = GAIN_CEILING / (1.0 + (-CURVE_STEEPNESS * sample).exp())
            + QUADRATIC_BOOST * sample * sample;
        let boosted = sample * gain;
        let out = 1.0 - (-boosted * self.strength).exp();
        out.clamp(OUT_FLOOR, OUT_CEIL)
    }

    /// Applies the curve to every sample of `plane` in place.
    pub fn apply_in_place(&self, plane: &mut Plane) -> Result<()> {
        self.validate()?;
        cpu::apply_in_place(self, plane);
        Ok(())
    }
}

impl Stage for Enhancement {
    fn name(&self) -> &'static str {
        "enhance"
    }

    fn run(&self, input: &Plane, output: &mut Plane) -> Result<()> {
        self.validate()?;
        check_dims("enhancement", input.dimensions(), output.dimensions())?;
        output.copy_from(input);
        cpu::apply_in_place(self, output);
        Ok(())
    }
}
