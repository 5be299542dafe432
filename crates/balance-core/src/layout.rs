//! Keyboard layouts and the position → character slot mapping.

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum KeyboardLayout {
    #[default]
    #[serde(rename = "US")]
    Us,
    #[serde(rename = "UK")]
    Uk,
    German,
    French,
    Spanish,
    Dutch,
}

impl KeyboardLayout {
    pub const ALL: [KeyboardLayout; 6] = [
        KeyboardLayout::Us,
        KeyboardLayout::Uk,
        KeyboardLayout::German,
        KeyboardLayout::French,
        KeyboardLayout::Spanish,
        KeyboardLayout::Dutch,
    ];

    pub fn name(self) -> &'static str {
        match self {
            KeyboardLayout::Us => "US",
            KeyboardLayout::Uk => "UK",
            KeyboardLayout::German => "German",
            KeyboardLayout::French => "French",
            KeyboardLayout::Spanish => "Spanish",
            KeyboardLayout::Dutch => "Dutch",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|l| l.name().eq_ignore_ascii_case(name))
    }

    fn source(self) -> &'static str {
        match self {
            KeyboardLayout::Us => {
                "abcdefghijklmnopqrstuvwxyz0123456789!@#$%^&*()-_=+[]{}|;:'\",.<>/?"
            }
            KeyboardLayout::Uk => {
                "abcdefghijklmnopqrstuvwxyz0123456789!\"£$%^&*()-_=+[]{}~@#;:'<,>.?/\\"
            }
            KeyboardLayout::German => {
                "abcdefghijklmnopqrstuvwxyzäöüß0123456789!\"§$%&/()=?`´+#-.,;:_'*°²³{[]}\\"
            }
            KeyboardLayout::French => {
                "abcdefghijklmnopqrstuvwxyzéèêëàâäôöùûüÿç0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~"
            }
            KeyboardLayout::Spanish => {
                "abcdefghijklmnopqrstuvwxyzáéíóúüñ0123456789!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~"
            }
            KeyboardLayout::Dutch => {
                "abcdefghijklmnopqrstuvwxyzàáèéëêïìóòöôùúüû0123456789!@#$%^&*()-_=+[]{};:'\",.<>/?"
            }
        }
    }

    pub fn charset(self) -> Charset {
        Charset::new(self.source())
    }
}

/// Ordered, immutable character sequence of one layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Charset {
    chars: Vec<char>,
}

impl Charset {
    /// Panics on an empty sequence; every built-in layout is non-empty.
    pub fn new(source: &str) -> Self {
        let chars: Vec<char> = source.chars().collect();
        assert!(!chars.is_empty(), "charset must not be empty");
        Self { chars }
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn slot_width(&self) -> f32 {
        1.0 / self.chars.len() as f32
    }

    /// Slot under a normalised position, clamped to the last slot.
    #[inline]
    pub fn index_at(&self, position: f32) -> usize {
        slot_index(position, self.chars.len())
    }

    #[inline]
    pub fn char_at(&self, position: f32) -> char {
        self.chars[self.index_at(position)]
    }

    #[inline]
    pub fn get(&self, index: usize) -> Option<char> {
        self.chars.get(index).copied()
    }

    /// Normalised x of the slot's center.
    pub fn slot_center(&self, index: usize) -> f32 {
        (index as f32 + 0.5) / self.chars.len() as f32
    }
}

/// `clamp(floor(position * len), 0, len - 1)`; `len` must be non-zero.
#[inline]
pub fn slot_index(position: f32, len: usize) -> usize {
    let raw = (position * len as f32).floor();
    if raw <= 0.0 || raw.is_nan() {
        0
    } else {
        (raw as usize).min(len - 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn layouts_have_distinct_charsets() {
        for (i, a) in KeyboardLayout::ALL.iter().enumerate() {
            for b in &KeyboardLayout::ALL[i + 1..] {
                assert_ne!(a.charset(), b.charset(), "{} vs {}", a.name(), b.name());
            }
        }
    }

    #[test]
    fn names_round_trip_case_insensitively() {
        for layout in KeyboardLayout::ALL {
            assert_eq!(KeyboardLayout::from_name(layout.name()), Some(layout));
        }
        assert_eq!(KeyboardLayout::from_name("german"), Some(KeyboardLayout::German));
        assert_eq!(KeyboardLayout::from_name("Klingon"), None);
    }

    #[test]
    fn charset_lengths_count_chars_not_bytes() {
        assert_eq!(KeyboardLayout::Us.charset().len(), 65);
        assert_eq!(KeyboardLayout::German.charset().len(), 71);
        assert_eq!(KeyboardLayout::German.charset().get(26), Some('ä'));
    }
}
