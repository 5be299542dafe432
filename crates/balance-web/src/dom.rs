use std::any::Any;
use wasm_bindgen::closure::{Closure, WasmClosure};
use wasm_bindgen::JsCast;
use web_sys as web;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

/// Create `<tag class=...>` with optional text and append it to `parent`.
pub fn append_el(
    document: &web::Document,
    parent: &web::Element,
    tag: &str,
    class: &str,
    text: Option<&str>,
) -> anyhow::Result<web::Element> {
    let el = document
        .create_element(tag)
        .map_err(|e| anyhow::anyhow!("create <{}>: {:?}", tag, e))?;
    el.set_class_name(class);
    if text.is_some() {
        el.set_text_content(text);
    }
    parent
        .append_child(&el)
        .map_err(|e| anyhow::anyhow!("append <{}>: {:?}", tag, e))?;
    Ok(el)
}

#[inline]
pub fn set_class(el: &web::Element, class: &str, on: bool) {
    let cl = el.class_list();
    if on {
        _ = cl.add_1(class);
    } else {
        _ = cl.remove_1(class);
    }
}

pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
}

struct Registered {
    target: web::EventTarget,
    event: &'static str,
    callback: js_sys::Function,
    _closure: Box<dyn Any>,
}

/// Owns every event closure a widget installs so teardown can detach them.
#[derive(Default)]
pub struct Listeners {
    entries: Vec<Registered>,
}

impl Listeners {
    pub fn listen<T>(&mut self, target: &web::EventTarget, event: &'static str, closure: Closure<T>)
    where
        T: ?Sized + WasmClosure + 'static,
    {
        let callback: js_sys::Function = closure.as_ref().unchecked_ref::<js_sys::Function>().clone();
        if let Err(e) = target.add_event_listener_with_callback(event, &callback) {
            log::error!("[dom] {} listener error: {:?}", event, e);
            return;
        }
        self.entries.push(Registered {
            target: target.clone(),
            event,
            callback,
            _closure: Box::new(closure),
        });
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn clear(&mut self) {
        for r in self.entries.drain(..) {
            _ = r
                .target
                .remove_event_listener_with_callback(r.event, &r.callback);
        }
    }
}
