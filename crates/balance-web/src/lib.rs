#![cfg(target_arch = "wasm32")]
mod audio;
mod constants;
mod dom;
mod events;
mod frame;
mod geometry;
mod render;
mod ui;
mod view;

use audio::WebAudioOutput;
use balance_core::{BalanceWidget, CancelToken, WidgetConfig};
use dom::Listeners;
use std::cell::RefCell;
use std::rc::Rc;
use ui::Ui;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::*;
use web_sys as web;

thread_local! {
    static AUTO_MOUNTED: RefCell<Option<WidgetHandle>> = const { RefCell::new(None) };
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("balance-web starting");

    let present = dom::window_document()
        .and_then(|d| d.get_element_by_id(constants::DEFAULT_ROOT_ID))
        .is_some();
    if present {
        match mount_inner(constants::DEFAULT_ROOT_ID, None) {
            Ok(handle) => AUTO_MOUNTED.with(|slot| *slot.borrow_mut() = Some(handle)),
            Err(e) => log::error!("init error: {:?}", e),
        }
    }
    Ok(())
}

/// Mount a widget into the element with id `element_id`. `config_json`
/// falls back to the element's `data-config` attribute, then to defaults.
#[wasm_bindgen]
pub fn mount(element_id: &str, config_json: Option<String>) -> Result<WidgetHandle, JsValue> {
    mount_inner(element_id, config_json).map_err(|e| JsValue::from_str(&format!("{:#}", e)))
}

fn load_config(raw: Option<&str>) -> WidgetConfig {
    let Some(raw) = raw.filter(|s| !s.trim().is_empty()) else {
        return WidgetConfig::default();
    };
    match WidgetConfig::from_json(raw) {
        Ok(config) => config,
        Err(e) => {
            log::warn!("[config] rejected ({}); using defaults", e);
            WidgetConfig::default()
        }
    }
}

fn mount_inner(element_id: &str, config_json: Option<String>) -> anyhow::Result<WidgetHandle> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = document
        .get_element_by_id(element_id)
        .ok_or_else(|| anyhow::anyhow!("missing #{}", element_id))?;

    let config = load_config(
        config_json
            .or_else(|| root.get_attribute("data-config"))
            .as_deref(),
    );
    log::info!(
        "[config] layout={} submit_delay={}ms",
        config.layout.name(),
        config.submit_delay_ms
    );

    let ui = Rc::new(Ui::build(&document, &root)?);
    let widget = Rc::new(RefCell::new(BalanceWidget::new(config)));
    let audio = Rc::new(RefCell::new(WebAudioOutput::new()));
    let listeners = Rc::new(RefCell::new(Listeners::default()));

    // keep the canvas backing store at CSS size * devicePixelRatio
    dom::sync_canvas_backing_size(&ui.canvas);
    {
        let canvas = ui.canvas.clone();
        let closure = Closure::wrap(Box::new(move || {
            dom::sync_canvas_backing_size(&canvas);
        }) as Box<dyn FnMut()>);
        listeners
            .borrow_mut()
            .listen(window.as_ref(), "resize", closure);
    }

    let wiring = events::Wiring {
        widget: widget.clone(),
        audio: audio.clone(),
        ui: ui.clone(),
        listeners: listeners.clone(),
    };
    events::wire_all(&wiring, &window);

    let ctx = frame::FrameContext {
        widget: widget.clone(),
        audio: audio.clone(),
        ui: ui.clone(),
        renderer: render::BarRenderer::new(ui.canvas.clone())?,
    };
    let mut scheduler = frame::RafScheduler::new(window);
    let token = frame::start_loop(&mut scheduler, ctx);
    log::info!("[frame] loop started in #{}", element_id);

    Ok(WidgetHandle {
        token,
        widget,
        audio,
        ui,
        listeners,
    })
}

/// Owns a mounted widget. Dropping the handle leaves the widget running;
/// call `destroy` to tear it down.
#[wasm_bindgen]
pub struct WidgetHandle {
    token: CancelToken,
    widget: Rc<RefCell<BalanceWidget>>,
    audio: Rc<RefCell<WebAudioOutput>>,
    ui: Rc<Ui>,
    listeners: Rc<RefCell<Listeners>>,
}

#[wasm_bindgen]
impl WidgetHandle {
    /// Stops the frame loop, detaches listeners, closes audio and removes the DOM.
    pub fn destroy(&self) {
        self.token.cancel();
        self.listeners.borrow_mut().clear();
        self.audio.borrow_mut().close();
        self.ui.remove();
        log::info!("[frame] widget destroyed");
    }

    #[wasm_bindgen(getter)]
    pub fn submitted(&self) -> bool {
        self.widget.borrow().submission().is_submitted()
    }

    #[wasm_bindgen(getter, js_name = passwordLength)]
    pub fn password_length(&self) -> usize {
        self.widget.borrow().password().len()
    }
}
