use crate::audio::WebAudioOutput;
use crate::render::BarRenderer;
use crate::ui::Ui;
use crate::view::ViewModel;
use balance_core::{BalanceWidget, CancelToken, Flow, FrameScheduler, FrameTask};
use instant::Instant;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub struct FrameContext {
    pub widget: Rc<RefCell<BalanceWidget>>,
    pub audio: Rc<RefCell<WebAudioOutput>>,
    pub ui: Rc<Ui>,
    pub renderer: BarRenderer,
}

impl FrameContext {
    pub fn frame(&mut self) -> Flow {
        let outcome = {
            let mut widget = self.widget.borrow_mut();
            let mut audio = self.audio.borrow_mut();
            widget.frame(Instant::now(), &mut *audio)
        };
        if outcome.submitted_now {
            log::info!("[frame] submitted; stopping loop");
            self.ui.show_success();
            return Flow::Stop;
        }
        let widget = self.widget.borrow();
        self.renderer.draw(&widget);
        self.ui.sync(&ViewModel::of(&widget));
        Flow::Continue
    }
}

/// `requestAnimationFrame`-driven scheduler. Each task owns its closure and
/// pending handle; cancelling the token cancels the handle and drops both.
pub struct RafScheduler {
    window: web::Window,
}

impl RafScheduler {
    pub fn new(window: web::Window) -> Self {
        Self { window }
    }
}

fn request(window: &web::Window, cb: &Closure<dyn FnMut()>, pending: &Cell<Option<i32>>) {
    match window.request_animation_frame(cb.as_ref().unchecked_ref()) {
        Ok(id) => pending.set(Some(id)),
        Err(e) => log::error!("[frame] requestAnimationFrame failed: {:?}", e),
    }
}

impl FrameScheduler for RafScheduler {
    fn schedule(&mut self, mut task: FrameTask) -> CancelToken {
        let token = CancelToken::new();
        let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));
        let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));

        let tick_weak = Rc::downgrade(&tick);
        let pending_tick = pending.clone();
        let token_tick = token.clone();
        let window = self.window.clone();
        *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
            pending_tick.set(None);
            if token_tick.is_cancelled() {
                return;
            }
            if task() == Flow::Stop {
                // the closure is still on the stack; release it after this callback returns
                let token = token_tick.clone();
                spawn_local(async move { token.cancel() });
                return;
            }
            if let Some(tick) = tick_weak.upgrade() {
                if let Some(cb) = tick.borrow().as_ref() {
                    request(&window, cb, &pending_tick);
                }
            }
        }) as Box<dyn FnMut()>));

        if let Some(cb) = tick.borrow().as_ref() {
            request(&self.window, cb, &pending);
        }

        let window = self.window.clone();
        token.on_cancel(move || {
            if let Some(id) = pending.take() {
                _ = window.cancel_animation_frame(id);
            }
            drop(tick.borrow_mut().take());
        });
        token
    }
}

pub fn start_loop(scheduler: &mut dyn FrameScheduler, mut ctx: FrameContext) -> CancelToken {
    scheduler.schedule(Box::new(move || ctx.frame()))
}
