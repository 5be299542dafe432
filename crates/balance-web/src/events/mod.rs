pub mod controls;
pub mod keyboard;
pub mod pointer;

use crate::audio::WebAudioOutput;
use crate::dom::Listeners;
use crate::ui::Ui;
use balance_core::BalanceWidget;
use std::cell::RefCell;
use std::rc::Rc;

pub use controls::wire_controls;
pub use keyboard::wire_keydown;
pub use pointer::wire_pointer;

/// Shared handles every listener closes over.
#[derive(Clone)]
pub struct Wiring {
    pub widget: Rc<RefCell<BalanceWidget>>,
    pub audio: Rc<RefCell<WebAudioOutput>>,
    pub ui: Rc<Ui>,
    pub listeners: Rc<RefCell<Listeners>>,
}

pub fn wire_all(w: &Wiring, window: &web_sys::Window) {
    wire_pointer(w);
    wire_keydown(w, window);
    wire_controls(w);
    log::info!("[events] {} listeners attached", w.listeners.borrow().len());
}
