// Shared tuning constants used by the simulation and the web frontend.

// Ball physics (units of bar length per frame)
pub const GRAVITY: f32 = 0.0015; // scaled by sin(tilt)
pub const DAMPING: f32 = 0.985; // applied to velocity every step
pub const RESTITUTION: f32 = 0.7; // velocity kept (sign flipped) on a bounce

// Restart state applied on mount and on every layout switch
pub const RESET_POSITION: f32 = 0.5;
pub const RESET_VELOCITY: f32 = 0.01;

// Bar tilt
pub const MAX_TILT_DEG: f32 = 15.0;
pub const LEAVE_TILT_DECAY: f32 = 0.8; // tilt multiplier per pointer-leave event

// Tone shaping
pub const TONE_VOLUME_CAP: f32 = 0.3;
pub const TONE_VELOCITY_GAIN: f32 = 10.0;
pub const TONE_DECAY_SEC: f64 = 0.3; // exponential ramp window
pub const TONE_STOP_SEC: f64 = 0.2; // oscillator stop time
pub const TONE_DECAY_FLOOR: f32 = 0.001; // exponential ramps cannot reach zero

// Muted priming one-shot used to unlock audio output
pub const PRIME_GAIN: f32 = 0.01;
pub const PRIME_DURATION_SEC: f64 = 0.1;

// Fake submission delay
pub const SUBMIT_DELAY_MS: u64 = 1000;

// Password display
pub const MASK_GLYPH: char = '*';
pub const PASSWORD_PLACEHOLDER: &str = "Password";
