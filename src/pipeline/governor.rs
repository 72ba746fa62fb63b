use tracing::debug;

use crate::common::{Error, Result};
use crate::pipeline::{PipelineParams, QualityTier};

/// Lowest tone curve strength the governor will derate to. Below this the
/// output stops looking enhanced at all, so derating clamps here.
const MIN_STRENGTH: f32 = 0.05;

/// Load-shedding state. Transitions are hysteretic: the thresholds for
/// entering and leaving [`GovernorState::Throttled`] differ so a signal
/// hovering near one threshold cannot make the state oscillate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GovernorState {
    #[default]
    Normal,
    Throttled,
}

/// Thermal/power governor thresholds and derated parameter targets.
#[derive(Debug, Clone, Copy)]
pub struct GovernorConfig {
    /// Signal level above which the governor throttles.
    pub throttle_above: f32,
    /// Signal level below which a throttled governor resumes. Must be
    /// strictly less than `throttle_above`.
    pub resume_below: f32,
    /// Filter radius used while throttled.
    pub throttled_radius: u32,
    /// Multiplier applied to the requested strength while throttled.
    pub throttled_strength_scale: f32,
}

impl Default for GovernorConfig {
    fn default() -> Self {
        Self {
            throttle_above: 80.0,
            resume_below: 70.0,
            throttled_radius: 1,
            throttled_strength_scale: 0.8,
        }
    }
}

impl GovernorConfig {
    pub fn validate(&self) -> Result<()> {
        if !self.throttle_above.is_finite() {
            return Err(Error::InvalidParameter {
                name: "throttle_above",
                value: self.throttle_above as f64,
            });
        }
        if !self.resume_below.is_finite() || self.resume_below >= self.throttle_above {
            return Err(Error::InvalidParameter {
                name: "resume_below",
                value: self.resume_below as f64,
            });
        }
        if self.throttled_radius < 1 {
            return Err(Error::InvalidParameter {
                name: "throttled_radius",
                value: self.throttled_radius as f64,
            });
        }
        if !self.throttled_strength_scale.is_finite()
            || self.throttled_strength_scale <= 0.0
            || self.throttled_strength_scale > 1.0
        {
            return Err(Error::InvalidParameter {
                name: "throttled_strength_scale",
                value: self.throttled_strength_scale as f64,
            });
        }
        Ok(())
    }
}

/// Hysteretic two-state load governor.
///
/// The host feeds it an external thermal or power signal; the engine asks
/// it to derate the requested per-frame parameters while throttled.
#[derive(Debug, Clone)]
pub struct Governor {
    config: GovernorConfig,
    state: GovernorState,
}

impl Governor {
    pub fn new(config: GovernorConfig) -> Result<Governor> {
        config.validate()?;
        Ok(Governor {
            config,
            state: GovernorState::Normal,
        })
    }

    pub fn state(&self) -> GovernorState {
        self.state
    }

    pub fn config(&self) -> &GovernorConfig {
        &self.config
    }

    /// Feeds one signal reading and returns the resulting state.
    ///
    /// Readings between the two thresholds keep the current state.
    pub fn observe(&mut self, signal: f32) -> GovernorState {
        let next = match self.state {
            GovernorState::Normal if signal > self.config.throttle_above => {
                GovernorState::Throttled
            }
            GovernorState::Throttled if signal < self.config.resume_below => GovernorState::Normal,
            current => current,
        };
        if next != self.state {
            debug!(signal, ?next, "governor state change");
            self.state = next;
        }
        next
    }

    /// Applies the current state to the requested parameters.
    ///
    /// In [`GovernorState::Normal`] the parameters pass through unchanged.
    /// While throttled, the radius shrinks, the strength is scaled down
    /// (but never below the usable floor), and the tier is marked reduced.
    pub fn derate(&self, requested: &PipelineParams) -> PipelineParams {
        match self.state {
            GovernorState::Normal => *requested,
            GovernorState::Throttled => PipelineParams {
                radius: requested.radius.min(self.config.throttled_radius),
                strength: (requested.strength * self.config.throttled_strength_scale)
                    .max(MIN_STRENGTH),
                tier: QualityTier::Reduced,
                ..*requested
            },
        }
    }
}
