use super::Wiring;
use wasm_bindgen::closure::Closure;
use web_sys as web;

/// Tilt follows the pointer across the bar; leaving the bar eases it back.
pub fn wire_pointer(w: &Wiring) {
    let target: &web::EventTarget = w.ui.canvas.as_ref();

    // mousemove
    {
        let widget = w.widget.clone();
        let canvas = w.ui.canvas.clone();
        let closure = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let rect = canvas.get_bounding_client_rect();
            widget.borrow_mut().pointer_move(
                ev.client_x() as f32,
                rect.left() as f32,
                rect.width() as f32,
            );
        }) as Box<dyn FnMut(_)>);
        w.listeners.borrow_mut().listen(target, "mousemove", closure);
    }

    // mouseleave
    {
        let widget = w.widget.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            widget.borrow_mut().pointer_leave();
        }) as Box<dyn FnMut(_)>);
        w.listeners.borrow_mut().listen(target, "mouseleave", closure);
    }
}
