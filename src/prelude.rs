// Error handling
pub use crate::common::{Error, Result};

// Plane types
pub use crate::plane::{ChromaPlane, Plane, RgbImage};

// Processing stages
pub use crate::ops::{Axis, BilateralFilter, BilateralPass, Enhancement, Recompose, Stage};

// Pipeline
pub use crate::pipeline::{
    BufferPool, Engine, EngineConfig, Frame, Governor, GovernorConfig, GovernorState,
    PipelineParams, PoolHandle, QualitySample, QualityTier, POOL_SLOTS, QUALITY_FLOOR,
    VERTICAL_RANGE_GAIN,
};
