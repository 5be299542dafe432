//! Edge-triggered tone emission on slot crossings.
//!
//! The platform side implements [`ToneOutput`]; this module decides when a
//! tone fires and what it sounds like. Output failures stop here.

use crate::constants::{
    TONE_DECAY_FLOOR, TONE_DECAY_SEC, TONE_STOP_SEC, TONE_VELOCITY_GAIN, TONE_VOLUME_CAP,
};
use crate::error::AudioError;
use crate::layout::Charset;
use crate::pitch::note_frequency;
use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ToneParams {
    pub volume_cap: f32,
    pub velocity_gain: f32,
    pub decay_sec: f64,
    pub stop_sec: f64,
}

impl Default for ToneParams {
    fn default() -> Self {
        Self {
            volume_cap: TONE_VOLUME_CAP,
            velocity_gain: TONE_VELOCITY_GAIN,
            decay_sec: TONE_DECAY_SEC,
            stop_sec: TONE_STOP_SEC,
        }
    }
}

/// A short sine blip: full `volume` at once, exponential decay to `floor`
/// over `decay_sec`, oscillator stopped at `stop_sec`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tone {
    pub frequency_hz: f32,
    pub volume: f32,
    pub floor: f32,
    pub decay_sec: f64,
    pub stop_sec: f64,
}

pub trait ToneOutput {
    /// Whether the output can currently make sound (e.g. context running).
    fn is_active(&self) -> bool;
    fn play(&mut self, tone: &Tone) -> Result<(), AudioError>;
}

/// Output used before any audio device has been acquired.
#[derive(Clone, Copy, Debug, Default)]
pub struct SilentOutput;

impl ToneOutput for SilentOutput {
    fn is_active(&self) -> bool {
        false
    }

    fn play(&mut self, _tone: &Tone) -> Result<(), AudioError> {
        Err(AudioError::Unavailable)
    }
}

#[inline]
pub fn tone_volume(velocity: f32, params: &ToneParams) -> f32 {
    (velocity.abs() * params.velocity_gain).min(params.volume_cap)
}

pub fn tone_for(c: char, velocity: f32, params: &ToneParams) -> Tone {
    Tone {
        frequency_hz: note_frequency(c),
        volume: tone_volume(velocity, params),
        floor: TONE_DECAY_FLOOR,
        decay_sec: params.decay_sec,
        stop_sec: params.stop_sec,
    }
}

#[derive(Clone, Debug)]
pub struct AudioTrigger {
    last_index: usize,
    params: ToneParams,
}

impl AudioTrigger {
    pub fn new(initial_index: usize, params: ToneParams) -> Self {
        Self {
            last_index: initial_index,
            params,
        }
    }

    pub fn last_index(&self) -> usize {
        self.last_index
    }

    /// Forget the previous slot without sounding, e.g. after a layout reset.
    pub fn reseed(&mut self, index: usize) {
        self.last_index = index;
    }

    /// Called once per frame with the ball's current slot. Returns the tone if
    /// one was emitted.
    pub fn on_frame(
        &mut self,
        index: usize,
        charset: &Charset,
        velocity: f32,
        enabled: bool,
        output: &mut dyn ToneOutput,
    ) -> Option<Tone> {
        let crossed = index != self.last_index;
        self.last_index = index;
        if !crossed || !enabled || !output.is_active() {
            return None;
        }
        let c = charset.get(index)?;
        let tone = tone_for(c, velocity, &self.params);
        match output.play(&tone) {
            Ok(()) => Some(tone),
            Err(e) => {
                log::warn!("[audio] tone for {:?} dropped: {}", c, e);
                None
            }
        }
    }
}
