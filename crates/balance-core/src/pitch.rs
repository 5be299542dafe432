//! Character → tone frequency mapping.
//!
//! Each character falls into one [`CharClass`]; each class owns a small table
//! and the frequency is a lookup into it. No per-character branching.

/// Chromatic scale C4..B4 (Hz).
pub const CHROMATIC_C4: [f32; 12] = [
    261.63, 277.18, 293.66, 311.13, 329.63, 349.23, 369.99, 392.00, 415.30, 440.00, 466.16,
    493.88,
];

/// C major pentatonic C4, D4, E4, G4, A4 (Hz).
pub const PENTATONIC_C4: [f32; 5] = [261.63, 293.66, 329.63, 392.00, 440.00];

/// Base of the symbol range, C5 (Hz).
pub const SYMBOL_BASE_HZ: f32 = 523.25;
/// Spacing between the twelve symbol pitches (Hz).
pub const SYMBOL_STEP_HZ: f32 = 50.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CharClass {
    /// ASCII letter, carrying its 0-based alphabet offset.
    Letter(u32),
    /// ASCII digit, carrying its value.
    Digit(u32),
    /// Anything else, carrying its Unicode scalar value.
    Other(u32),
}

pub fn classify(c: char) -> CharClass {
    let lower = c.to_ascii_lowercase();
    match lower {
        'a'..='z' => CharClass::Letter(lower as u32 - 'a' as u32),
        '0'..='9' => CharClass::Digit(lower as u32 - '0' as u32),
        _ => CharClass::Other(c as u32),
    }
}

pub fn class_frequency(class: CharClass) -> f32 {
    match class {
        CharClass::Letter(k) => {
            let n = CHROMATIC_C4.len() as u32;
            CHROMATIC_C4[(k % n) as usize] * 2f32.powi((k / n) as i32)
        }
        CharClass::Digit(d) => PENTATONIC_C4[(d as usize) % PENTATONIC_C4.len()],
        CharClass::Other(code) => SYMBOL_BASE_HZ + (code % 12) as f32 * SYMBOL_STEP_HZ,
    }
}

#[inline]
pub fn note_frequency(c: char) -> f32 {
    class_frequency(classify(c))
}
