//! WebAudio tone output.
//!
//! The `AudioContext` is created on the first enable (browsers only allow it
//! after a user gesture), primed with a near-silent blip and reused after.

use balance_core::constants::{PRIME_DURATION_SEC, PRIME_GAIN};
use balance_core::{AudioError, Tone, ToneOutput};
use wasm_bindgen::JsValue;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

fn node_err(label: &str, e: JsValue) -> AudioError {
    AudioError::Node(format!("{}: {:?}", label, e))
}

fn schedule_err(label: &str, e: JsValue) -> AudioError {
    AudioError::Schedule(format!("{}: {:?}", label, e))
}

/// Sine oscillator → gain → destination, started now and stopped at `stop_at`.
fn one_shot(
    ctx: &web::AudioContext,
    frequency_hz: f32,
    gain: f32,
    stop_at: f64,
) -> Result<web::GainNode, AudioError> {
    let now = ctx.current_time();
    let osc = ctx.create_oscillator().map_err(|e| node_err("oscillator", e))?;
    osc.set_type(web::OscillatorType::Sine);
    osc.frequency()
        .set_value_at_time(frequency_hz, now)
        .map_err(|e| schedule_err("frequency", e))?;
    let g = ctx.create_gain().map_err(|e| node_err("gain", e))?;
    g.gain()
        .set_value_at_time(gain, now)
        .map_err(|e| schedule_err("gain", e))?;
    osc.connect_with_audio_node(&g)
        .map_err(|e| node_err("connect oscillator", e))?;
    g.connect_with_audio_node(&ctx.destination())
        .map_err(|e| node_err("connect gain", e))?;
    web::AudioScheduledSourceNode::start(&osc).map_err(|e| schedule_err("start", e))?;
    web::AudioScheduledSourceNode::stop_with_when(&osc, now + stop_at)
        .map_err(|e| schedule_err("stop", e))?;
    Ok(g)
}

fn context_state(ctx: &web::AudioContext) -> &'static str {
    match ctx.state() {
        web::AudioContextState::Suspended => "suspended",
        web::AudioContextState::Running => "running",
        web::AudioContextState::Closed => "closed",
        _ => "unknown",
    }
}

#[derive(Default)]
pub struct WebAudioOutput {
    ctx: Option<web::AudioContext>,
}

impl WebAudioOutput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the context on first call; resume it if it was suspended since.
    /// Must run inside a user-gesture handler.
    pub fn acquire(&mut self) -> Result<(), AudioError> {
        match &self.ctx {
            None => {
                let ctx = web::AudioContext::new().map_err(|e| node_err("AudioContext", e))?;
                // a fresh context stays locked until something has played
                if let Err(e) = one_shot(&ctx, 440.0, PRIME_GAIN, PRIME_DURATION_SEC) {
                    match ctx.close() {
                        Ok(_) => log::warn!("[audio] prime failed; context closed"),
                        Err(c) => log::warn!("[audio] prime failed; close failed: {:?}", c),
                    }
                    return Err(e);
                }
                log::info!("[audio] context created ({})", context_state(&ctx));
                self.ctx = Some(ctx);
            }
            Some(ctx) if ctx.state() == web::AudioContextState::Suspended => {
                let promise = ctx.resume().map_err(|e| schedule_err("resume", e))?;
                let ctx = ctx.clone();
                spawn_local(async move {
                    match JsFuture::from(promise).await {
                        Ok(_) => log::info!("[audio] resumed ({})", context_state(&ctx)),
                        Err(e) => log::warn!("[audio] resume failed: {:?}", e),
                    }
                });
            }
            Some(_) => {}
        }
        Ok(())
    }

    pub fn state(&self) -> &'static str {
        self.ctx.as_ref().map(context_state).unwrap_or("not created")
    }

    pub fn close(&mut self) {
        if let Some(ctx) = self.ctx.take() {
            match ctx.close() {
                Ok(_) => log::info!("[audio] context closed"),
                Err(e) => log::warn!("[audio] close failed: {:?}", e),
            }
        }
    }
}

impl ToneOutput for WebAudioOutput {
    fn is_active(&self) -> bool {
        self.ctx
            .as_ref()
            .map(|c| c.state() == web::AudioContextState::Running)
            .unwrap_or(false)
    }

    fn play(&mut self, tone: &Tone) -> Result<(), AudioError> {
        let ctx = self.ctx.as_ref().ok_or(AudioError::Unavailable)?;
        let g = one_shot(ctx, tone.frequency_hz, tone.volume, tone.stop_sec)?;
        g.gain()
            .exponential_ramp_to_value_at_time(tone.floor, ctx.current_time() + tone.decay_sec)
            .map_err(|e| schedule_err("decay", e))?;
        Ok(())
    }
}
