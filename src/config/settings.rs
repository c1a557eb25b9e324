use std::path::Path;

use crate::{
    effects::style::EffectStyle,
    foundation::core::Rgb,
    foundation::error::{TrailError, TrailResult},
};

/// Shortest trail the settings layer accepts.
pub const MIN_TRAIL_LENGTH: usize = 16;
/// Longest trail the settings layer accepts.
pub const MAX_TRAIL_LENGTH: usize = 256;
/// Shortest fade duration in seconds.
pub const MIN_FADE_SECS: f64 = 0.2;
/// Longest fade duration in seconds.
pub const MAX_FADE_SECS: f64 = 3.0;
/// Nominal callback rate assumed by the fixed time step.
pub const NOMINAL_STEP_SECS: f64 = 1.0 / 60.0;

const MIN_POINT_SIZE: f32 = 1.0;
const MAX_POINT_SIZE: f32 = 64.0;
const MIN_STEP_SECS: f64 = 1.0 / 1000.0;
const MAX_STEP_SECS: f64 = 0.25;

/// How far the animation clock advances per tick.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TimeStep {
    /// Advance by a constant amount regardless of wall time.
    Fixed {
        /// Step length in seconds.
        seconds: f64,
    },
    /// Advance by the measured frame delta, capped to avoid jumps after stalls.
    Measured {
        /// Upper bound applied to a single measured delta.
        max_seconds: f64,
    },
}

impl Default for TimeStep {
    fn default() -> Self {
        Self::Fixed {
            seconds: NOMINAL_STEP_SECS,
        }
    }
}

impl TimeStep {
    /// Resolve the step for one tick given the measured wall-clock delta.
    pub fn resolve(self, measured_secs: f64) -> f64 {
        match self {
            Self::Fixed { seconds } => seconds,
            Self::Measured { max_seconds } => {
                let max = if max_seconds.is_finite() {
                    max_seconds.max(0.0)
                } else {
                    0.0
                };
                if measured_secs.is_finite() {
                    measured_secs.clamp(0.0, max)
                } else {
                    0.0
                }
            }
        }
    }

    fn normalized(self) -> Self {
        fn clamp_step(v: f64) -> f64 {
            if v.is_finite() {
                v.clamp(MIN_STEP_SECS, MAX_STEP_SECS)
            } else {
                NOMINAL_STEP_SECS
            }
        }

        match self {
            Self::Fixed { seconds } => Self::Fixed {
                seconds: clamp_step(seconds),
            },
            Self::Measured { max_seconds } => Self::Measured {
                max_seconds: clamp_step(max_seconds),
            },
        }
    }
}

/// Runtime configuration read by the trail engine.
///
/// The engine accepts any value as given; [`TrailConfig::normalized`] is the boundary operation
/// that clamps everything into the supported ranges.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TrailConfig {
    /// Maximum number of live trail points.
    pub trail_length: usize,
    /// Seconds for a point to fade from fully opaque to invisible.
    pub fade_duration: f64,
    /// Active visual style.
    pub effect_style: EffectStyle,
    /// Base color for Smooth, blended into Lightning.
    pub primary_color: Rgb,
    /// When `false`, no points are admitted and nothing is drawn.
    pub enabled: bool,
    /// Nominal point diameter in pixels.
    pub point_size: f32,
    /// Clock advancement policy.
    pub time_step: TimeStep,
    /// Enables the stochastic side-branches of the Lightning style.
    pub lightning_branches: bool,
    /// Seed for procedural randomness.
    pub seed: u64,
}

impl Default for TrailConfig {
    fn default() -> Self {
        Self {
            trail_length: 64,
            fade_duration: 0.8,
            effect_style: EffectStyle::Smooth,
            primary_color: Rgb::from_u8(0x4d, 0xa6, 0xff),
            enabled: true,
            point_size: 6.0,
            time_step: TimeStep::default(),
            lightning_branches: false,
            seed: 0,
        }
    }
}

impl TrailConfig {
    /// Clamp every field into its supported range.
    pub fn normalized(self) -> Self {
        let defaults = Self::default();
        let fade_duration = if self.fade_duration.is_finite() {
            self.fade_duration.clamp(MIN_FADE_SECS, MAX_FADE_SECS)
        } else {
            defaults.fade_duration
        };
        let point_size = if self.point_size.is_finite() {
            self.point_size.clamp(MIN_POINT_SIZE, MAX_POINT_SIZE)
        } else {
            defaults.point_size
        };
        let c = self.primary_color;

        Self {
            trail_length: self.trail_length.clamp(MIN_TRAIL_LENGTH, MAX_TRAIL_LENGTH),
            fade_duration,
            primary_color: Rgb::new(unit(c.r), unit(c.g), unit(c.b)),
            point_size,
            time_step: self.time_step.normalized(),
            ..self
        }
    }

    /// Parse a JSON config document and normalize it.
    pub fn from_json_str(json: &str) -> TrailResult<Self> {
        let cfg: Self = serde_json::from_str(json)
            .map_err(|e| TrailError::serde(format!("parse config JSON: {e}")))?;
        Ok(cfg.normalized())
    }

    /// Load and normalize a JSON config file.
    #[tracing::instrument]
    pub fn from_path(path: &Path) -> TrailResult<Self> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| TrailError::config(format!("read config '{}': {e}", path.display())))?;
        let cfg = Self::from_json_str(&json)?;
        tracing::debug!(style = %cfg.effect_style, length = cfg.trail_length, "loaded config");
        Ok(cfg)
    }

    /// Serialize as pretty JSON.
    pub fn to_json_pretty(&self) -> TrailResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| TrailError::serde(e.to_string()))
    }
}

fn unit(v: f32) -> f32 {
    if v.is_finite() { v.clamp(0.0, 1.0) } else { 0.0 }
}

#[cfg(test)]
#[path = "../../tests/unit/config/settings.rs"]
mod tests;
