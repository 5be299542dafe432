use crate::constants::*;
use crate::dom::{append_el, set_class};
use crate::view::ViewModel;
use balance_core::KeyboardLayout;
use std::cell::RefCell;
use wasm_bindgen::JsCast;
use web_sys as web;

/// DOM for one widget instance. Built once; `sync` patches only what changed.
pub struct Ui {
    container: web::Element,
    form: web::Element,
    pub audio_button: web::Element,
    password: web::Element,
    pub canvas: web::HtmlCanvasElement,
    pub submit: web::Element,
    pub layout_button: web::Element,
    selector: web::Element,
    pub options: Vec<(KeyboardLayout, web::Element)>,
    success: web::Element,
    last: RefCell<Option<ViewModel>>,
}

impl Ui {
    pub fn build(document: &web::Document, root: &web::Element) -> anyhow::Result<Self> {
        let container = append_el(document, root, "div", "pb-widget", None)?;
        append_el(document, &container, "style", "", Some(STYLESHEET))?;

        let form = append_el(document, &container, "div", "", None)?;
        append_el(document, &form, "h2", "", Some(FORM_TITLE))?;
        append_el(document, &form, "p", "pb-help", Some(HELP_TEXT))?;
        let audio_button = append_el(document, &form, "div", "pb-button pb-audio", None)?;
        let password = append_el(document, &form, "div", "pb-password", None)?;
        let canvas = append_el(document, &form, "canvas", "pb-bar", None)?
            .dyn_into::<web::HtmlCanvasElement>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;

        let actions = append_el(document, &form, "div", "pb-actions", None)?;
        let submit = append_el(document, &actions, "div", "pb-button pb-submit", None)?;
        let layout_button = append_el(document, &actions, "div", "pb-button pb-layout", None)?;

        let selector = append_el(document, &form, "div", "pb-selector pb-hidden", None)?;
        let mut options = Vec::with_capacity(KeyboardLayout::ALL.len());
        for layout in KeyboardLayout::ALL {
            let el = append_el(document, &selector, "div", "pb-option", Some(layout.name()))?;
            _ = el.set_attribute("data-layout", layout.name());
            options.push((layout, el));
        }

        let success = append_el(document, &container, "div", "pb-success pb-hidden", None)?;
        append_el(document, &success, "div", "pb-check", Some(SUCCESS_CHECK))?;
        append_el(document, &success, "h2", "", Some(SUCCESS_TITLE))?;
        append_el(document, &success, "p", "", Some(SUCCESS_TEXT))?;

        Ok(Self {
            container,
            form,
            audio_button,
            password,
            canvas,
            submit,
            layout_button,
            selector,
            options,
            success,
            last: RefCell::new(None),
        })
    }

    pub fn sync(&self, view: &ViewModel) {
        let mut last = self.last.borrow_mut();
        let prev = last.as_ref();
        let changed = |f: fn(&ViewModel, &ViewModel) -> bool| prev.map_or(true, |p| f(p, view));

        if changed(|a, b| a.audio_label != b.audio_label) {
            self.audio_button.set_text_content(Some(view.audio_label));
        }
        if changed(|a, b| a.password_text != b.password_text || a.password_empty != b.password_empty) {
            self.password.set_text_content(Some(&view.password_text));
            set_class(&self.password, "pb-empty", view.password_empty);
        }
        if changed(|a, b| a.submit_label != b.submit_label || a.submit_enabled != b.submit_enabled) {
            self.submit.set_text_content(Some(view.submit_label));
            set_class(&self.submit, "pb-disabled", !view.submit_enabled);
        }
        if changed(|a, b| a.layout_label != b.layout_label) {
            self.layout_button.set_text_content(Some(&view.layout_label));
        }
        if changed(|a, b| a.selector_open != b.selector_open) {
            set_class(&self.selector, "pb-hidden", !view.selector_open);
        }
        if changed(|a, b| a.active_layout != b.active_layout) {
            for (layout, el) in &self.options {
                set_class(el, "pb-active", *layout == view.active_layout);
            }
        }
        if view.submitted && !prev.is_some_and(|p| p.submitted) {
            self.show_success();
        }
        *last = Some(view.clone());
    }

    pub fn show_success(&self) {
        set_class(&self.form, "pb-hidden", true);
        set_class(&self.success, "pb-hidden", false);
    }

    pub fn remove(&self) {
        self.container.remove();
    }
}
