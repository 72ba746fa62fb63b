mod bilateral;
mod enhance;
mod recompose;

pub use bilateral::{BilateralFilter, BilateralPass};
pub use enhance::Enhancement;
pub use recompose::Recompose;

use crate::common::Result;
use crate::plane::Plane;

/// Direction of a 1D filter pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    /// Along rows (horizontal neighbors).
    Rows,
    /// Along columns (vertical neighbors).
    Columns,
}

/// One plane-to-plane step of the pipeline.
///
/// This is the execution-backend seam: the kernels in this crate implement
/// it with CPU loops (rayon over row chunks), and a GPU dispatch backend
/// could implement the same contract with a compute pass. The engine drives
/// stages only through this trait.
pub trait Stage {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    /// Runs the stage, writing a same-dimension output plane.
    ///
    /// Validation happens before any write: on error the output plane is
    /// left untouched (all-or-nothing).
    fn run(&self, input: &Plane, output: &mut Plane) -> Result<()>;
}
