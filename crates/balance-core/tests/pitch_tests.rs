// Host-side tests for the character → frequency table.

use balance_core::pitch::*;

#[test]
fn letters_walk_the_chromatic_scale() {
    assert_eq!(note_frequency('a'), 261.63);
    assert_eq!(note_frequency('j'), 440.00);
    assert_eq!(note_frequency('l'), 493.88);
    // 'm' wraps to C one octave up
    assert!((note_frequency('m') - 523.26).abs() < 1e-3);
    // 'y' is two octaves up
    assert!((note_frequency('y') - 261.63 * 4.0).abs() < 1e-3);
    assert!((note_frequency('z') - 277.18 * 4.0).abs() < 1e-3);
}

#[test]
fn letters_ignore_case() {
    for c in 'a'..='z' {
        assert_eq!(note_frequency(c), note_frequency(c.to_ascii_uppercase()));
    }
}

#[test]
fn letter_pitch_rises_through_the_alphabet() {
    let mut prev = note_frequency('a');
    for c in 'b'..='z' {
        let f = note_frequency(c);
        assert!(f > prev, "frequency not increasing at {c}");
        prev = f;
    }
}

#[test]
fn digits_cycle_the_pentatonic() {
    let expected = [
        261.63, 293.66, 329.63, 392.00, 440.00, 261.63, 293.66, 329.63, 392.00, 440.00,
    ];
    for (d, f) in ('0'..='9').zip(expected) {
        assert_eq!(note_frequency(d), f, "digit {d}");
    }
}

#[test]
fn symbols_spread_above_c5() {
    // '!' = 33, 33 % 12 = 9
    assert_eq!(note_frequency('!'), 523.25 + 9.0 * 50.0);
    // '#' = 35, 35 % 12 = 11
    assert_eq!(note_frequency('#'), 523.25 + 11.0 * 50.0);
    // '$' = 36, 36 % 12 = 0
    assert_eq!(note_frequency('$'), 523.25);
}

#[test]
fn accented_letters_count_as_symbols() {
    assert_eq!(classify('ä'), CharClass::Other('ä' as u32));
    // 'ä' = 228, 228 % 12 = 0
    assert_eq!(note_frequency('ä'), 523.25);
    assert_eq!(classify('ß'), CharClass::Other(223));
}

#[test]
fn classification_covers_each_class() {
    assert_eq!(classify('c'), CharClass::Letter(2));
    assert_eq!(classify('C'), CharClass::Letter(2));
    assert_eq!(classify('7'), CharClass::Digit(7));
    assert_eq!(classify('@'), CharClass::Other('@' as u32));
}

#[test]
fn every_layout_character_has_an_audible_pitch() {
    for layout in balance_core::KeyboardLayout::ALL {
        for &c in layout.charset().chars() {
            let f = note_frequency(c);
            assert!(f.is_finite() && (200.0..=1200.0).contains(&f), "{c} -> {f}");
        }
    }
}
