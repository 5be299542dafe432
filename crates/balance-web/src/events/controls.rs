use super::Wiring;
use instant::Instant;
use wasm_bindgen::closure::Closure;
use web_sys as web;

pub fn wire_controls(w: &Wiring) {
    // audio toggle; the context can only be created from inside this gesture
    {
        let widget = w.widget.clone();
        let audio = w.audio.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            let enabling = !widget.borrow().audio_enabled();
            if enabling {
                if let Err(e) = audio.borrow_mut().acquire() {
                    log::warn!("[audio] cannot enable: {}", e);
                    return;
                }
            }
            widget.borrow_mut().toggle_audio();
            log::info!("[audio] context {}", audio.borrow().state());
        }) as Box<dyn FnMut(_)>);
        w.listeners
            .borrow_mut()
            .listen(w.ui.audio_button.as_ref(), "click", closure);
    }

    // layout selector visibility
    {
        let widget = w.widget.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            widget.borrow_mut().toggle_selector();
        }) as Box<dyn FnMut(_)>);
        w.listeners
            .borrow_mut()
            .listen(w.ui.layout_button.as_ref(), "click", closure);
    }

    // one listener per layout option
    for (layout, el) in &w.ui.options {
        let layout = *layout;
        let widget = w.widget.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            widget.borrow_mut().switch_layout(layout);
        }) as Box<dyn FnMut(_)>);
        w.listeners.borrow_mut().listen(el.as_ref(), "click", closure);
    }

    // hovering the submit control starts the fake submission
    {
        let widget = w.widget.clone();
        let closure = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            widget.borrow_mut().hover_submit(Instant::now());
        }) as Box<dyn FnMut(_)>);
        w.listeners
            .borrow_mut()
            .listen(w.ui.submit.as_ref(), "mouseover", closure);
    }
}
