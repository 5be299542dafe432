//! Recurring per-frame tasks with explicit cancellation.
//!
//! A host scheduler (the browser's `requestAnimationFrame`, or
//! [`ManualScheduler`] in tests) runs each registered task once per frame
//! until the task asks to stop or its [`CancelToken`] is cancelled. Each
//! registration owns its token, so nothing is shared between widget
//! instances.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::Rc;

#[derive(Default)]
struct TokenInner {
    cancelled: Cell<bool>,
    hooks: RefCell<Vec<Box<dyn FnOnce()>>>,
}

#[derive(Clone, Default)]
pub struct CancelToken {
    inner: Rc<TokenInner>,
}

impl fmt::Debug for CancelToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CancelToken")
            .field("cancelled", &self.is_cancelled())
            .finish()
    }
}

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_cancelled(&self) -> bool {
        self.inner.cancelled.get()
    }

    /// Idempotent. Runs the registered hooks on the first call only.
    pub fn cancel(&self) {
        if self.inner.cancelled.replace(true) {
            return;
        }
        let hooks = std::mem::take(&mut *self.inner.hooks.borrow_mut());
        for hook in hooks {
            hook();
        }
    }

    /// Register cleanup to run on cancel; runs immediately if already cancelled.
    pub fn on_cancel(&self, hook: impl FnOnce() + 'static) {
        if self.is_cancelled() {
            hook();
        } else {
            self.inner.hooks.borrow_mut().push(Box::new(hook));
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Stop,
}

pub type FrameTask = Box<dyn FnMut() -> Flow>;

pub trait FrameScheduler {
    fn schedule(&mut self, task: FrameTask) -> CancelToken;
}

/// Runs tasks only when told to. Drives the widget host-side.
#[derive(Default)]
pub struct ManualScheduler {
    tasks: Vec<(CancelToken, FrameTask)>,
    frames: u64,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Run `frames` frames, each invoking every live task once.
    pub fn advance(&mut self, frames: u32) {
        for _ in 0..frames {
            self.frames += 1;
            self.tasks.retain_mut(|(token, task)| {
                if token.is_cancelled() {
                    return false;
                }
                match task() {
                    Flow::Continue => true,
                    Flow::Stop => {
                        token.cancel();
                        false
                    }
                }
            });
        }
    }

    pub fn live_tasks(&self) -> usize {
        self.tasks.iter().filter(|(t, _)| !t.is_cancelled()).count()
    }

    pub fn frames(&self) -> u64 {
        self.frames
    }
}

impl FrameScheduler for ManualScheduler {
    fn schedule(&mut self, task: FrameTask) -> CancelToken {
        let token = CancelToken::new();
        self.tasks.push((token.clone(), task));
        token
    }
}
