// Host-side tests for the DOM view snapshot.

#![allow(dead_code)]
mod view {
    include!("../src/view.rs");
}

use balance_core::{BalanceWidget, KeyboardLayout};
use instant::Instant;
use std::time::Duration;
use view::ViewModel;

#[test]
fn fresh_widget_shows_placeholder_and_disabled_submit() {
    let v = ViewModel::of(&BalanceWidget::default());
    assert_eq!(v.password_text, "Password");
    assert!(v.password_empty);
    assert!(!v.submit_enabled);
    assert_eq!(v.submit_label, "Hover here to submit");
    assert_eq!(v.audio_label, "Enable Sound Torture");
    assert_eq!(v.layout_label, "US Layout");
    assert!(!v.selector_open);
    assert!(!v.submitted);
}

#[test]
fn committed_characters_are_masked() {
    let mut w = BalanceWidget::default();
    w.key("Space");
    w.key("Space");
    let v = ViewModel::of(&w);
    assert_eq!(v.password_text, "**");
    assert!(!v.password_empty);
    assert!(v.submit_enabled);
}

#[test]
fn submitting_disables_the_control_then_finishes() {
    let mut w = BalanceWidget::default();
    w.key("Space");
    let t0 = Instant::now();
    assert!(w.hover_submit(t0));
    let v = ViewModel::of(&w);
    assert_eq!(v.submit_label, "Processing...");
    assert!(!v.submit_enabled);

    let mut out = balance_core::SilentOutput;
    w.frame(t0 + Duration::from_millis(1000), &mut out);
    assert!(ViewModel::of(&w).submitted);
}

#[test]
fn snapshots_differ_only_when_state_changes() {
    let mut w = BalanceWidget::default();
    let a = ViewModel::of(&w);
    assert_eq!(a, ViewModel::of(&w));
    w.toggle_selector();
    w.switch_layout(KeyboardLayout::French);
    let b = ViewModel::of(&w);
    assert_ne!(a, b);
    assert_eq!(b.active_layout, KeyboardLayout::French);
    assert_eq!(b.layout_label, "French Layout");
    assert!(!b.selector_open);
}
