//! Platform-free core of the balance-bar password input.
//!
//! - `physics`: the damped-gravity integrator
//! - `layout`: character sets and the position → slot mapping
//! - `pitch` / `audio`: character tones and the edge-triggered emitter
//! - `password` / `submit`: the accumulated password and the fake submission
//! - `scheduler`: recurring frame tasks with cancellation
//! - `state`: the owned widget record tying it all together

pub mod audio;
pub mod config;
pub mod constants;
pub mod error;
pub mod input;
pub mod layout;
pub mod password;
pub mod physics;
pub mod pitch;
pub mod scheduler;
pub mod state;
pub mod submit;

pub use audio::{AudioTrigger, SilentOutput, Tone, ToneOutput, ToneParams};
pub use config::WidgetConfig;
pub use error::{AudioError, ConfigError};
pub use input::KeyAction;
pub use layout::{slot_index, Charset, KeyboardLayout};
pub use password::PasswordBuffer;
pub use physics::{Ball, PhysicsParams, StepReport, Wall};
pub use pitch::{classify, note_frequency, CharClass};
pub use scheduler::{CancelToken, Flow, FrameScheduler, FrameTask, ManualScheduler};
pub use state::{BalanceWidget, FrameOutcome};
pub use submit::{SubmitPhase, Submission};
