//! Nocturne - real-time low-light video enhancement.
//!
//! Per-frame pipeline for low-light footage: an edge-preserving two-pass
//! filter denoises the luma plane, an adaptive tone curve expands dynamic
//! range without clipping, and the result is recomposed with the original
//! chroma into a displayable RGB image. All intermediate storage comes from
//! a fixed two-plane pool that is reused every frame, and a quality/power
//! governor trades filter work for power under thermal pressure.
//!
//! # Quick Start
//!
//! ```rust
//! use nocturne::{ChromaPlane, Engine, EngineConfig, Frame, Plane};
//!
//! let config = EngineConfig::default();
//! let mut engine = Engine::initialize(64, 48, config).unwrap();
//!
//! let luma = Plane::new(64, 48).unwrap();
//! let chroma = ChromaPlane::neutral(64, 48).unwrap();
//!
//! let rgb = engine.process_frame(Frame::new(&luma, &chroma, config.baseline)).unwrap();
//! assert_eq!(rgb.width(), 64);
//!
//! engine.shutdown();
//! ```

mod common;
mod ops;
mod pipeline;
mod plane;

pub mod prelude;

pub use prelude::*;
