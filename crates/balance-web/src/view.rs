// Snapshot of everything the DOM controls display. The frame loop rebuilds it
// each frame and only touches the DOM when it differs from the last one.

use balance_core::{BalanceWidget, KeyboardLayout};

#[derive(Clone, Debug, PartialEq)]
pub struct ViewModel {
    pub password_text: String,
    pub password_empty: bool,
    pub audio_label: &'static str,
    pub layout_label: String,
    pub active_layout: KeyboardLayout,
    pub submit_label: &'static str,
    pub submit_enabled: bool,
    pub selector_open: bool,
    pub submitted: bool,
}

impl ViewModel {
    pub fn of(widget: &BalanceWidget) -> Self {
        let password = widget.password();
        let submission = widget.submission();
        Self {
            password_text: password.display(),
            password_empty: password.is_empty(),
            audio_label: widget.audio_label(),
            layout_label: widget.layout_label(),
            active_layout: widget.layout(),
            submit_label: submission.label(),
            submit_enabled: !password.is_empty() && !submission.is_submitting(),
            selector_open: widget.selector_open(),
            submitted: submission.is_submitted(),
        }
    }
}
