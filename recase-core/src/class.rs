//! Character classification for word segmentation

/// Classification of a single character
///
/// Only ASCII letters and digits count as word characters. Everything else,
/// including non-ASCII letters, is [`CharClass::Other`] and acts as a
/// separator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CharClass {
    /// `a-z`
    Lower,
    /// `A-Z`
    Upper,
    /// `0-9`
    Digit,
    /// Any non-word character
    Other,
}

impl CharClass {
    /// Classify a character
    #[inline]
    pub fn from_char(ch: char) -> Self {
        match ch {
            'a'..='z' => CharClass::Lower,
            'A'..='Z' => CharClass::Upper,
            '0'..='9' => CharClass::Digit,
            _ => CharClass::Other,
        }
    }

    /// Part of a word token
    #[inline]
    pub fn is_word(self) -> bool {
        !matches!(self, CharClass::Other)
    }

    #[inline]
    pub fn is_lower_or_digit(self) -> bool {
        matches!(self, CharClass::Lower | CharClass::Digit)
    }

    #[inline]
    pub fn is_upper_or_digit(self) -> bool {
        matches!(self, CharClass::Upper | CharClass::Digit)
    }
}

impl From<char> for CharClass {
    fn from(ch: char) -> Self {
        CharClass::from_char(ch)
    }
}
