use crate::constants::{MASK_GLYPH, PASSWORD_PLACEHOLDER};
use smallvec::SmallVec;

/// Committed characters, in entry order. Never leaves memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PasswordBuffer {
    chars: SmallVec<[char; 32]>,
}

impl PasswordBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commit(&mut self, c: char) {
        self.chars.push(c);
    }

    /// Removes the last character; a no-op on an empty buffer.
    pub fn delete_last(&mut self) -> Option<char> {
        self.chars.pop()
    }

    pub fn clear(&mut self) {
        self.chars.clear();
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// One mask glyph per committed character.
    pub fn masked(&self) -> String {
        std::iter::repeat(MASK_GLYPH).take(self.chars.len()).collect()
    }

    /// What the password field shows: the mask, or the placeholder when empty.
    pub fn display(&self) -> String {
        if self.is_empty() {
            PASSWORD_PLACEHOLDER.to_string()
        } else {
            self.masked()
        }
    }

    pub fn reveal(&self) -> String {
        self.chars.iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mask_hides_every_character() {
        let mut buf = PasswordBuffer::new();
        for c in "hunter2".chars() {
            buf.commit(c);
        }
        assert_eq!(buf.masked(), "*******");
        assert_eq!(buf.reveal(), "hunter2");
    }

    #[test]
    fn placeholder_only_when_empty() {
        let mut buf = PasswordBuffer::new();
        assert_eq!(buf.display(), "Password");
        buf.commit('x');
        assert_eq!(buf.display(), "*");
    }

    #[test]
    fn buffer_grows_past_inline_capacity() {
        let mut buf = PasswordBuffer::new();
        for _ in 0..100 {
            buf.commit('a');
        }
        assert_eq!(buf.len(), 100);
        buf.clear();
        assert!(buf.is_empty());
    }
}
