//! Controller configuration.
//!
//! Defaults come from `constants.rs`. The reveal margin and stagger values are
//! visual-design knobs rather than hard requirements, so they are carried here
//! instead of being baked into the trigger.

use super::constants::*;
use super::error::{ConfigError, ConfigResult};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq)]
pub struct ControllerConfig {
    pub stiffness: f32,
    pub damping: f32,
    /// Upper bound for a single integration step, in seconds.
    pub max_dt: f32,
    pub reveal_margin_px: f32,
    pub stagger_step: Duration,
    pub entrance_duration: Duration,
    pub entrance_offset_px: f32,
    pub parallax_range_px: f32,
    pub blob_depths: Vec<f32>,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
            max_dt: MAX_FRAME_DT_SEC,
            reveal_margin_px: REVEAL_MARGIN_PX,
            stagger_step: Duration::from_millis(STAGGER_STEP_MS),
            entrance_duration: Duration::from_millis(ENTRANCE_DURATION_MS),
            entrance_offset_px: ENTRANCE_OFFSET_PX,
            parallax_range_px: PARALLAX_RANGE_PX,
            blob_depths: BLOB_DEPTHS.to_vec(),
        }
    }
}

impl ControllerConfig {
    pub fn validate(&self) -> ConfigResult<()> {
        if !(self.stiffness.is_finite() && self.stiffness > 0.0) {
            return Err(ConfigError::Stiffness(self.stiffness));
        }
        if !(self.damping.is_finite() && self.damping >= 0.0) {
            return Err(ConfigError::Damping(self.damping));
        }
        if !(self.max_dt.is_finite() && self.max_dt > 0.0) {
            return Err(ConfigError::MaxDt(self.max_dt));
        }
        let finite = [
            ("reveal margin", self.reveal_margin_px),
            ("entrance offset", self.entrance_offset_px),
            ("parallax range", self.parallax_range_px),
        ];
        for (name, value) in finite
            .into_iter()
            .chain(self.blob_depths.iter().map(|d| ("blob depth", *d)))
        {
            if !value.is_finite() {
                return Err(ConfigError::NotFinite { name, value });
            }
        }
        Ok(())
    }

    /// Validated config, or the defaults when `self` is unusable.
    pub fn or_default(self) -> Self {
        match self.validate() {
            Ok(()) => self,
            Err(e) => {
                log::warn!("[config] {e}; falling back to defaults");
                Self::default()
            }
        }
    }
}
