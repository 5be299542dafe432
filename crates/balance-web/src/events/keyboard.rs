use super::Wiring;
use balance_core::KeyAction;
use wasm_bindgen::closure::Closure;
use web_sys as web;

pub fn wire_keydown(w: &Wiring, window: &web::Window) {
    let widget = w.widget.clone();
    let closure = Closure::wrap(Box::new(move |ev: web::KeyboardEvent| {
        let code = ev.code();
        let action = widget.borrow_mut().key(&code);
        match action {
            Some(KeyAction::Commit) => {
                // keep Space from scrolling the page
                ev.prevent_default();
                log::debug!("[keys] commit ({} chars)", widget.borrow().password().len());
            }
            Some(KeyAction::DeleteLast) => {
                log::debug!("[keys] delete ({} chars)", widget.borrow().password().len());
            }
            None => {}
        }
    }) as Box<dyn FnMut(_)>);
    w.listeners
        .borrow_mut()
        .listen(window.as_ref(), "keydown", closure);
}
