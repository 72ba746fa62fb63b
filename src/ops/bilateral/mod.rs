//! Edge-preserving smoothing filter.
//!
//! Each output sample is a local average weighted by both spatial distance
//! and value similarity, so noise is smoothed while strong discontinuities
//! survive. The 2D filter is approximated by two sequential 1D passes
//! (rows, then columns) at O(radius) cost per axis instead of O(radius²).
//! Because the range term is not separable, the two-pass composition is not
//! exactly the 2D bilateral filter; this is a deliberate accuracy/perf
//! trade-off, not a bug.

mod cpu;


use crate::common::{check_dims, Error, Result};
use crate::ops::{Axis, Stage};
use crate::plane::Plane;

/// Guard for degenerate weight sums. The k=0 term contributes weight 1, so
/// in practice the sum never gets near this.
const MIN_WEIGHT_SUM: f32 = 1e-8;

/// Parameters of one 1D edge-preserving filter pass.
#[derive(Debug, Clone, Copy)]
pub struct BilateralFilter {
    /// Spatial Gaussian sigma, in samples. Must be > 0.
    pub spatial_sigma: f32,
    /// Range Gaussian sigma, in normalized sample units. Must be > 0.
    pub range_sigma: f32,
    /// Kernel half-width, in samples. Must be >= 1.
    pub radius: u32,
}

impl BilateralFilter {
    pub fn new(spatial_sigma: f32, range_sigma: f32, radius: u32) -> Self {
        Self {
            spatial_sigma,
            range_sigma,
            radius,
        }
    }

    /// Validates filter parameters without touching any plane.
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
        Ok(())
    }

    /// Runs one 1D pass along `axis` into `output`.
    ///
    /// Out-of-extent neighbor coordinates clamp to the plane edge (never
    /// wrap). All parameters and dimensions are checked before the first
    /// write, so a failed call leaves `output` untouched.
    pub fn filter_pass(&self, input: &Plane, output: &mut Plane, axis: Axis) -> Result<()> {
        self.validate()?;
        check_dims(
            "bilateral filter pass",
            input.dimensions(),
            output.dimensions(),
        )?;

        match axis {
            Axis::Rows => cpu::pass_rows(self, input, output),
            Axis::Columns => cpu::pass_columns(self, input, output),
        }
        Ok(())
    }

    /// Binds this filter to an axis so it can run through the [`Stage`] seam.
    pub fn pass(self, axis: Axis) -> BilateralPass {
        BilateralPass { filter: self, axis }
    }
}

/// A directional filter pass, runnable as a pipeline [`Stage`].
#[derive(Debug, Clone, Copy)]
pub struct BilateralPass {
    pub filter: BilateralFilter,
    pub axis: Axis,
}

impl Stage for BilateralPass {
    fn name(&self) -> &'static str {
        match self.axis {
            Axis::Rows => "bilateral/rows",
            Axis::Columns => "bilateral/columns",
        }
    }

    fn run(&self, input: &Plane, output: &mut Plane) -> Result<()> {
        self.filter.filter_pass(input, output, self.axis)
    }
}
