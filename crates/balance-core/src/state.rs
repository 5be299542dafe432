//! The widget's single owned state record.
//!
//! Every input handler and the per-frame step go through [`BalanceWidget`],
//! so the clamped-position and reset invariants are enforced in one place.
//! Platform front-ends keep one instance behind `Rc<RefCell<_>>` and forward
//! DOM events to it.

use crate::audio::{AudioTrigger, Tone, ToneOutput};
use crate::config::WidgetConfig;
use crate::input::{decay_tilt, key_action, tilt_from_pointer, KeyAction};
use crate::layout::{Charset, KeyboardLayout};
use crate::password::PasswordBuffer;
use crate::physics::{self, Ball, StepReport};
use crate::submit::Submission;
use instant::Instant;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FrameOutcome {
    pub step: StepReport,
    pub index: usize,
    pub tone: Option<Tone>,
    /// True only on the frame the fake submission completed.
    pub submitted_now: bool,
}

#[derive(Clone, Debug)]
pub struct BalanceWidget {
    config: WidgetConfig,
    layout: KeyboardLayout,
    charset: Charset,
    ball: Ball,
    tilt_deg: f32,
    password: PasswordBuffer,
    trigger: AudioTrigger,
    audio_enabled: bool,
    submission: Submission,
    selector_open: bool,
}

impl Default for BalanceWidget {
    fn default() -> Self {
        Self::new(WidgetConfig::default())
    }
}

impl BalanceWidget {
    pub fn new(config: WidgetConfig) -> Self {
        let layout = config.layout;
        let charset = layout.charset();
        let ball = Ball::default();
        let trigger = AudioTrigger::new(charset.index_at(ball.position), config.tone);
        let submission = Submission::new(config.submit_delay());
        Self {
            config,
            layout,
            charset,
            ball,
            tilt_deg: 0.0,
            password: PasswordBuffer::new(),
            trigger,
            audio_enabled: false,
            submission,
            selector_open: false,
        }
    }

    pub fn config(&self) -> &WidgetConfig {
        &self.config
    }

    pub fn ball(&self) -> Ball {
        self.ball
    }

    pub fn tilt_deg(&self) -> f32 {
        self.tilt_deg
    }

    pub fn layout(&self) -> KeyboardLayout {
        self.layout
    }

    pub fn charset(&self) -> &Charset {
        &self.charset
    }

    pub fn password(&self) -> &PasswordBuffer {
        &self.password
    }

    pub fn submission(&self) -> &Submission {
        &self.submission
    }

    pub fn audio_enabled(&self) -> bool {
        self.audio_enabled
    }

    pub fn selector_open(&self) -> bool {
        self.selector_open
    }

    pub fn current_index(&self) -> usize {
        self.charset.index_at(self.ball.position)
    }

    pub fn current_char(&self) -> char {
        self.charset.char_at(self.ball.position)
    }

    /// One animation frame: integrate, remap, maybe sound, poll submission.
    pub fn frame(&mut self, now: Instant, output: &mut dyn ToneOutput) -> FrameOutcome {
        let step = physics::step(&mut self.ball, self.tilt_deg, &self.config.physics);
        let index = self.current_index();
        let tone = self.trigger.on_frame(
            index,
            &self.charset,
            step.pre_bounce_velocity,
            self.audio_enabled,
            output,
        );
        let submitted_now = self.submission.poll(now);
        FrameOutcome {
            step,
            index,
            tone,
            submitted_now,
        }
    }

    pub fn set_tilt(&mut self, tilt_deg: f32) {
        let max = self.config.max_tilt_deg;
        self.tilt_deg = tilt_deg.clamp(-max, max);
    }

    pub fn pointer_move(&mut self, pointer_x: f32, left: f32, width: f32) {
        if self.submission.is_submitted() {
            return;
        }
        self.tilt_deg = tilt_from_pointer(pointer_x, left, width, self.config.max_tilt_deg);
    }

    pub fn pointer_leave(&mut self) {
        self.tilt_deg = decay_tilt(self.tilt_deg, self.config.leave_tilt_decay);
    }

    /// Handles a `KeyboardEvent.code`. Returns the action taken so the caller
    /// can suppress the browser default for it.
    pub fn key(&mut self, code: &str) -> Option<KeyAction> {
        if self.submission.is_submitted() {
            return None;
        }
        let action = key_action(code)?;
        match action {
            KeyAction::Commit => {
                self.commit_current();
            }
            KeyAction::DeleteLast => {
                self.password.delete_last();
            }
        }
        Some(action)
    }

    pub fn commit_current(&mut self) -> char {
        let c = self.current_char();
        self.password.commit(c);
        c
    }

    pub fn delete_last(&mut self) -> Option<char> {
        self.password.delete_last()
    }

    /// Applies a layout and restarts the ball from the fixed reset state.
    pub fn switch_layout(&mut self, layout: KeyboardLayout) {
        self.layout = layout;
        self.charset = layout.charset();
        self.selector_open = false;
        self.ball.reset();
        self.trigger.reseed(self.current_index());
        log::info!("[layout] {} ({} slots)", layout.name(), self.charset.len());
    }

    pub fn toggle_selector(&mut self) -> bool {
        self.selector_open = !self.selector_open;
        self.selector_open
    }

    pub fn set_audio_enabled(&mut self, enabled: bool) {
        self.audio_enabled = enabled;
    }

    pub fn toggle_audio(&mut self) -> bool {
        self.audio_enabled = !self.audio_enabled;
        log::info!("[audio] enabled={}", self.audio_enabled);
        self.audio_enabled
    }

    pub fn audio_label(&self) -> &'static str {
        if self.audio_enabled {
            "Disable Sound Torture"
        } else {
            "Enable Sound Torture"
        }
    }

    pub fn layout_label(&self) -> String {
        format!("{} Layout", self.layout.name())
    }

    pub fn hover_submit(&mut self, now: Instant) -> bool {
        self.submission.hover(!self.password.is_empty(), now)
    }

    /// Places the ball directly; the position is clamped onto the bar.
    pub fn set_ball(&mut self, ball: Ball) {
        self.ball = Ball {
            position: ball.position.clamp(0.0, 1.0),
            velocity: ball.velocity,
        };
    }
}
