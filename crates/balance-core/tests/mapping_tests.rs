// Host-side tests for the position → character slot mapping.

use balance_core::layout::{slot_index, KeyboardLayout};
use proptest::prelude::*;

fn any_layout() -> impl Strategy<Value = KeyboardLayout> {
    prop::sample::select(KeyboardLayout::ALL.to_vec())
}

proptest! {
    #[test]
    fn index_is_monotonic_in_position(
        layout in any_layout(),
        a in 0.0f32..=1.0,
        b in 0.0f32..=1.0,
    ) {
        let charset = layout.charset();
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        prop_assert!(charset.index_at(lo) <= charset.index_at(hi));
    }

    #[test]
    fn index_is_always_a_valid_slot(layout in any_layout(), position in -2.0f32..3.0) {
        let charset = layout.charset();
        prop_assert!(charset.index_at(position) < charset.len());
    }

    #[test]
    fn position_lies_inside_its_slot(layout in any_layout(), position in 0.0f32..1.0) {
        let charset = layout.charset();
        let i = charset.index_at(position);
        let w = charset.slot_width();
        // allow one ulp of slack at slot edges
        prop_assert!(position >= i as f32 * w - 1e-6);
        prop_assert!(position <= (i + 1) as f32 * w + 1e-6);
    }
}

#[test]
fn right_end_maps_to_last_slot() {
    for layout in KeyboardLayout::ALL {
        let charset = layout.charset();
        assert_eq!(charset.index_at(1.0), charset.len() - 1, "{}", layout.name());
        assert_eq!(charset.index_at(0.0), 0);
    }
}

#[test]
fn slot_index_matches_floor_formula() {
    assert_eq!(slot_index(0.5, 65), 32);
    assert_eq!(slot_index(0.0, 10), 0);
    assert_eq!(slot_index(0.099, 10), 0);
    assert_eq!(slot_index(0.1, 10), 1);
    assert_eq!(slot_index(0.999, 10), 9);
    assert_eq!(slot_index(-0.5, 10), 0);
    assert_eq!(slot_index(f32::NAN, 10), 0);
}

#[test]
fn us_center_slot_holds_six() {
    let charset = KeyboardLayout::Us.charset();
    assert_eq!(charset.char_at(0.5), '6');
    assert!((charset.slot_center(32) - 32.5 / 65.0).abs() < 1e-6);
}

#[test]
fn every_layout_starts_with_the_alphabet() {
    for layout in KeyboardLayout::ALL {
        let charset = layout.charset();
        let head: String = charset.chars()[..26].iter().collect();
        assert_eq!(head, "abcdefghijklmnopqrstuvwxyz");
    }
}
