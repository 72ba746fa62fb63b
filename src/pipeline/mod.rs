//! Frame orchestration.
//!
//! [`Engine`] owns all long-lived state (scratch pool, output image,
//! governor) and drives one frame at a time through the stage chain:
//! horizontal filter pass, vertical filter pass, tone curve, RGB merge.
//! Steady-state processing allocates nothing.

mod buffer_pool;
mod governor;
mod params;


pub use buffer_pool::{BufferPool, PoolHandle, POOL_SLOTS};
pub use governor::{Governor, GovernorConfig, GovernorState};
pub use params::{PipelineParams, QualityTier};

use std::time::Instant;

use tracing::{debug, info, trace};

use crate::common::{check_dims, Error, Result};
use crate::ops::{Axis, BilateralFilter, Enhancement, Recompose, Stage};
use crate::plane::{ChromaPlane, Plane, RgbImage};

/// Range sigma multiplier for the vertical filter pass.
///
/// The horizontal pass compresses in-cluster variance, so a vertical pass
/// gated at the original sigma under-smooths the already partially cleaned
/// samples while strong edges sit far outside either gate. Widening the
/// second gate restores the intended overall smoothing without measurably
/// softening edges.
pub const VERTICAL_RANGE_GAIN: f32 = 1.55;

/// Lower bound of the reported quality score. Even fully derated frames
/// still run the whole stage chain, so quality never drops below this.
pub const QUALITY_FLOOR: f32 = 0.7;

/// One input frame: borrowed planes plus the parameters to process them
/// with.
#[derive(Debug, Clone, Copy)]
pub struct Frame<'a> {
    pub luma: &'a Plane,
    pub chroma: &'a ChromaPlane,
    pub params: PipelineParams,
}

impl<'a> Frame<'a> {
    pub fn new(luma: &'a Plane, chroma: &'a ChromaPlane, params: PipelineParams) -> Frame<'a> {
        Frame {
            luma,
            chroma,
            params,
        }
    }
}

/// Per-frame quality and cost report.
#[derive(Debug, Clone, Copy)]
pub struct QualitySample {
    /// Advisory score in `[QUALITY_FLOOR, 1]`.
    pub score: f32,
    /// Abstract per-pixel cost of the parameters that actually ran.
    pub cost_per_pixel: u32,
}

impl QualitySample {
    /// Scores a processed frame from the work actually spent relative to
    /// the baseline, blended with the enhanced plane's dynamic range.
    fn measure(enhanced: &Plane, effective: &PipelineParams, baseline: &PipelineParams) -> Self {
        let work_fraction =
            (effective.cost_per_pixel() as f32 / baseline.cost_per_pixel() as f32).min(1.0);

        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        for &v in enhanced.samples() {
            min = min.min(v);
            max = max.max(v);
        }
        let spread = (max - min).clamp(0.0, 1.0);

        let score = QUALITY_FLOOR + (1.0 - QUALITY_FLOOR) * (0.5 * work_fraction + 0.5 * spread);
        QualitySample {
            score: score.min(1.0),
            cost_per_pixel: effective.cost_per_pixel(),
        }
    }
}

/// Engine construction parameters.
#[derive(Debug, Clone, Copy, Default)]
pub struct EngineConfig {
    /// Reference parameters the quality score is measured against.
    pub baseline: PipelineParams,
    pub governor: GovernorConfig,
}

/// The per-frame enhancement engine.
///
/// Create once per stream with [`Engine::initialize`], feed frames with
/// [`Engine::process_frame`], and tear down with [`Engine::shutdown`].
/// Frame dimensions are fixed at initialization.
#[derive(Debug)]
pub struct Engine {
    width: u32,
    height: u32,
    pool: Option<BufferPool>,
    output: Option<RgbImage>,
    baseline: PipelineParams,
    governor: Governor,
    last_quality: Option<QualitySample>,
    frames_processed: u64,
}

impl Engine {
    /// Allocates every buffer the engine will ever use and validates the
    /// configuration. All failures surface as [`Error::Initialization`].
    pub fn initialize(width: u32, height: u32, config: EngineConfig) -> Result<Engine> {
        let init_err = |e: Error| Error::Initialization(e.to_string());

        if width == 0 || height == 0 {
            return Err(Error::Initialization(format!(
                "frame dimensions must be nonzero, got {width}x{height}"
            )));
        }
        config.baseline.validate().map_err(init_err)?;
        let governor = Governor::new(config.governor).map_err(init_err)?;

        let pool = BufferPool::new(width, height)?;
        let output = RgbImage::new(width, height).map_err(init_err)?;

        info!(width, height, "engine initialized");
        Ok(Engine {
            width,
            height,
            pool: Some(pool),
            output: Some(output),
            baseline: config.baseline,
            governor,
            last_quality: None,
            frames_processed: 0,
        })
    }

    /// Processes one frame and returns the engine-owned output image.
    ///
    /// The returned borrow is valid until the next call; the engine reuses
    /// the same output buffer every frame. A failed frame leaves the
    /// engine ready for the next one.
    pub fn process_frame(&mut self, frame: Frame<'_>) -> Result<&RgbImage> {
        if self.pool.is_none() || self.output.is_none() {
            return Err(Error::ShutDown);
        }

        check_dims(
            "frame luma",
            (self.width, self.height),
            frame.luma.dimensions(),
        )?;
        check_dims(
            "frame chroma",
            (self.width, self.height),
            frame.chroma.dimensions(),
        )?;
        frame.params.validate()?;

        let effective = self.governor.derate(&frame.params);
        let baseline = self.baseline;

        let (Some(pool), Some(output)) = (self.pool.as_mut(), self.output.as_mut()) else {
            return Err(Error::ShutDown);
        };

        match run_frame(pool, output, &frame, &effective, &baseline) {
            Ok(sample) => {
                self.last_quality = Some(sample);
                self.frames_processed += 1;
                Ok(&*output)
            }
            Err(e) => {
                // Handles dropped mid-chain leave slots flagged in-use.
                pool.recover();
                Err(e)
            }
        }
    }

    /// Feeds one external thermal/power reading to the governor.
    pub fn submit_thermal(&mut self, signal: f32) -> GovernorState {
        self.governor.observe(signal)
    }

    pub fn governor(&self) -> &Governor {
        &self.governor
    }

    /// Reference parameters the quality score is measured against.
    pub fn baseline_params(&self) -> &PipelineParams {
        &self.baseline
    }

    /// Quality score of the most recent successful frame.
    pub fn last_frame_quality(&self) -> Option<f32> {
        self.last_quality.map(|q| q.score)
    }

    /// Per-pixel cost of the most recent successful frame.
    pub fn last_frame_cost(&self) -> Option<u32> {
        self.last_quality.map(|q| q.cost_per_pixel)
    }

    /// Scratch planes allocated since initialization. Constant for the
    /// engine's lifetime; zero after shutdown.
    pub fn buffer_allocation_count(&self) -> usize {
        self.pool.as_ref().map_or(0, BufferPool::allocation_count)
    }

    /// Bytes held by the scratch pool and output image.
    pub fn storage_bytes(&self) -> usize {
        self.pool.as_ref().map_or(0, BufferPool::storage_bytes)
            + self.output.as_ref().map_or(0, RgbImage::storage_bytes)
    }

    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    pub fn frames_processed(&self) -> u64 {
        self.frames_processed
    }

    /// Releases all buffers. Safe to call more than once; processing after
    /// shutdown fails with [`Error::ShutDown`].
    pub fn shutdown(&mut self) {
        if self.pool.take().is_some() {
            self.output = None;
            debug!(frames = self.frames_processed, "engine shut down");
        }
    }
}

fn run_frame(
    pool: &mut BufferPool,
    output: &mut RgbImage,
    frame: &Frame<'_>,
    params: &PipelineParams,
    baseline: &PipelineParams,
) -> Result<QualitySample> {
    let horizontal = BilateralFilter::new(params.spatial_sigma, params.range_sigma, params.radius);
    let vertical = BilateralFilter::new(
        params.spatial_sigma,
        params.range_sigma * VERTICAL_RANGE_GAIN,
        params.radius,
    );
    let curve = Enhancement::new(params.strength);

    let first = pool.acquire()?;
    run_stage(
        &horizontal.pass(Axis::Rows),
        frame.luma,
        pool.plane_mut(&first),
    )?;

    let second = pool.acquire()?;
    {
        let (src, dst) = pool.src_dst(&first, &second);
        run_stage(&vertical.pass(Axis::Columns), src, dst)?;
    }
    pool.release(first);

    curve.apply_in_place(pool.plane_mut(&second))?;
    Recompose.apply(pool.plane(&second), frame.chroma, output)?;

    let sample = QualitySample::measure(pool.plane(&second), params, baseline);
    pool.release(second);
    Ok(sample)
}

fn run_stage(stage: &dyn Stage, input: &Plane, output: &mut Plane) -> Result<()> {
    let started = Instant::now();
    stage.run(input, output)?;
    trace!(
        stage = stage.name(),
        elapsed_us = started.elapsed().as_micros() as u64,
        "stage complete"
    );
    Ok(())
}
