//! Screensaver timing and motion settings.

use crate::blob::SCREENSAVER_AMPLITUDE;
use crate::error::GlowError;
use crate::params::{param_f64, param_usize};
use crate::selector::DEFAULT_JITTER;
use crate::transition::DEFAULT_TRANSITION_SECS;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Default interval between palette re-rolls, in seconds.
pub const DEFAULT_REROLL_SECS: f64 = 60.0;
/// Default frame rate the host is asked to drive.
pub const DEFAULT_TARGET_FPS: usize = 60;

/// Tunables for a screensaver session.
///
/// Use [`Default`] for the stock behavior: an 8 s cross-fade every 60 s,
/// ±0.12 jitter, 0.15 drift, 60 fps.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScreensaverConfig {
    /// Length of a palette cross-fade.
    pub transition_secs: f64,
    /// Time between palette re-rolls.
    pub reroll_secs: f64,
    /// Half-width of per-channel color jitter.
    pub jitter: f64,
    /// Blob drift amplitude in canvas fractions.
    pub amplitude: f64,
    pub target_fps: usize,
}

impl Default for ScreensaverConfig {
    fn default() -> Self {
        Self {
            transition_secs: DEFAULT_TRANSITION_SECS,
            reroll_secs: DEFAULT_REROLL_SECS,
            jitter: DEFAULT_JITTER,
            amplitude: SCREENSAVER_AMPLITUDE,
            target_fps: DEFAULT_TARGET_FPS,
        }
    }
}

impl ScreensaverConfig {
    /// Reads settings from a JSON object, falling back to defaults per key.
    pub fn from_json(params: &Value) -> Self {
        let d = Self::default();
        Self {
            transition_secs: param_f64(params, "transition_secs", d.transition_secs),
            reroll_secs: param_f64(params, "reroll_secs", d.reroll_secs),
            jitter: param_f64(params, "jitter", d.jitter),
            amplitude: param_f64(params, "amplitude", d.amplitude),
            target_fps: param_usize(params, "target_fps", d.target_fps),
        }
    }

    /// Checks that durations are positive and finite, jitter is in [0, 1],
    /// amplitude is finite, and the frame rate is non-zero.
    pub fn validate(&self) -> Result<(), GlowError> {
        let positive = |v: f64| v.is_finite() && v > 0.0;
        if !positive(self.transition_secs) {
            return Err(GlowError::InvalidConfig(format!(
                "transition_secs must be positive, got {}",
                self.transition_secs
            )));
        }
        if !positive(self.reroll_secs) {
            return Err(GlowError::InvalidConfig(format!(
                "reroll_secs must be positive, got {}",
                self.reroll_secs
            )));
        }
        if !(0.0..=1.0).contains(&self.jitter) {
            return Err(GlowError::InvalidConfig(format!(
                "jitter must be in [0, 1], got {}",
                self.jitter
            )));
        }
        if !self.amplitude.is_finite() {
            return Err(GlowError::InvalidConfig("amplitude must be finite".into()));
        }
        if self.target_fps == 0 {
            return Err(GlowError::InvalidConfig("target_fps must be non-zero".into()));
        }
        Ok(())
    }

    /// Seconds between frames at the target rate.
    pub fn frame_interval(&self) -> f64 {
        1.0 / self.target_fps.max(1) as f64
    }
}
