//! Widget tuning, loadable from JSON. Missing fields take the defaults in
//! [`crate::constants`].

use crate::audio::ToneParams;
use crate::constants::{LEAVE_TILT_DECAY, MAX_TILT_DEG, SUBMIT_DELAY_MS};
use crate::error::ConfigError;
use crate::layout::KeyboardLayout;
use crate::physics::PhysicsParams;
use serde::{Deserialize, Serialize};
use std::time::Duration;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WidgetConfig {
    pub physics: PhysicsParams,
    pub tone: ToneParams,
    pub max_tilt_deg: f32,
    pub leave_tilt_decay: f32,
    pub submit_delay_ms: u64,
    pub layout: KeyboardLayout,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            physics: PhysicsParams::default(),
            tone: ToneParams::default(),
            max_tilt_deg: MAX_TILT_DEG,
            leave_tilt_decay: LEAVE_TILT_DECAY,
            submit_delay_ms: SUBMIT_DELAY_MS,
            layout: KeyboardLayout::default(),
        }
    }
}

fn check(field: &'static str, value: f64, ok: bool) -> Result<(), ConfigError> {
    if ok && value.is_finite() {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange { field, value })
    }
}

impl WidgetConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: WidgetConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.physics;
        check("physics.gravity", p.gravity as f64, p.gravity >= 0.0)?;
        check("physics.damping", p.damping as f64, p.damping > 0.0 && p.damping < 1.0)?;
        check(
            "physics.restitution",
            p.restitution as f64,
            p.restitution > 0.0 && p.restitution < 1.0,
        )?;
        check("max_tilt_deg", self.max_tilt_deg as f64, self.max_tilt_deg > 0.0)?;
        check(
            "leave_tilt_decay",
            self.leave_tilt_decay as f64,
            (0.0..1.0).contains(&self.leave_tilt_decay),
        )?;
        let t = &self.tone;
        check("tone.volume_cap", t.volume_cap as f64, (0.0..=1.0).contains(&t.volume_cap))?;
        check("tone.velocity_gain", t.velocity_gain as f64, t.velocity_gain >= 0.0)?;
        check("tone.decay_sec", t.decay_sec, t.decay_sec > 0.0)?;
        check("tone.stop_sec", t.stop_sec, t.stop_sec > 0.0)?;
        Ok(())
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }
}
