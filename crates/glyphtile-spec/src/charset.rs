//! Character sets for glyph rasterization.
//!
//! The default set is every printable ASCII character in the conventional
//! `digits, lowercase, uppercase, punctuation, whitespace` order. Whitespace
//! other than the literal space is skipped, and the space itself is only
//! measured.

use serde::{Deserialize, Serialize};

/// Printable ASCII, in rasterization order.
pub const DEFAULT_CHARSET: &str = concat!(
    "0123456789",
    "abcdefghijklmnopqrstuvwxyz",
    "ABCDEFGHIJKLMNOPQRSTUVWXYZ",
    "!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~",
    " \t\n\r\x0b\x0c",
);

/// How the rasterizer treats a character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CharClass {
    /// Rendered onto a canvas.
    Ink,
    /// The space character: measured, not rendered.
    Space,
    /// Any other blank character: skipped entirely.
    Blank,
}

impl CharClass {
    /// Classifies a character.
    ///
    /// Blank means Unicode whitespace plus the ASCII separators
    /// `\x1c`..=`\x1f`. Other control characters are rendered like any
    /// other glyph.
    pub fn of(c: char) -> Self {
        if c == ' ' {
            CharClass::Space
        } else if c.is_whitespace() || matches!(c, '\u{1c}'..='\u{1f}') {
            CharClass::Blank
        } else {
            CharClass::Ink
        }
    }
}

/// An ordered character set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Charset(String);

impl Default for Charset {
    fn default() -> Self {
        Self(DEFAULT_CHARSET.to_string())
    }
}

impl Charset {
    /// Creates a charset from the given characters, keeping their order.
    pub fn new(chars: impl Into<String>) -> Self {
        Self(chars.into())
    }

    /// Returns the characters as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Iterates over the characters in order.
    pub fn chars(&self) -> impl Iterator<Item = char> + '_ {
        self.0.chars()
    }

    /// Characters that will produce an image, in order.
    pub fn ink_chars(&self) -> String {
        self.chars()
            .filter(|&c| CharClass::of(c) == CharClass::Ink)
            .collect()
    }

    /// Returns true if the set contains the space character.
    pub fn has_space(&self) -> bool {
        self.0.contains(' ')
    }

    /// Returns true if no character in the set would be rendered.
    pub fn is_empty(&self) -> bool {
        self.ink_chars().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_charset_size() {
        assert_eq!(DEFAULT_CHARSET.chars().count(), 100);
    }

    #[test]
    fn test_default_ink_chars() {
        let charset = Charset::default();
        let ink = charset.ink_chars();
        assert_eq!(ink.chars().count(), 94);
        assert!(ink.starts_with("0123456789abc"));
        assert!(ink.ends_with("{|}~"));
        assert!(!ink.contains(' '));
        assert!(charset.has_space());
    }

    #[test]
    fn test_char_class() {
        assert_eq!(CharClass::of('A'), CharClass::Ink);
        assert_eq!(CharClass::of('~'), CharClass::Ink);
        assert_eq!(CharClass::of(' '), CharClass::Space);
        assert_eq!(CharClass::of('\t'), CharClass::Blank);
        assert_eq!(CharClass::of('\x0b'), CharClass::Blank);
        assert_eq!(CharClass::of('\x0c'), CharClass::Blank);
        assert_eq!(CharClass::of('\x1c'), CharClass::Blank);
        assert_eq!(CharClass::of('\x1f'), CharClass::Blank);
        assert_eq!(CharClass::of('\u{85}'), CharClass::Blank);
        assert_eq!(CharClass::of('\u{a0}'), CharClass::Blank);
        assert_eq!(CharClass::of('\u{3000}'), CharClass::Blank);
        assert_eq!(CharClass::of('\x01'), CharClass::Ink);
        assert_eq!(CharClass::of('\x7f'), CharClass::Ink);
    }

    #[test]
    fn test_custom_charset_order_preserved() {
        let charset = Charset::new("cba \n");
        assert_eq!(charset.ink_chars(), "cba");
        assert!(!charset.is_empty());
        assert!(Charset::new(" \t").is_empty());
    }
}
