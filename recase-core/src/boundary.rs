//! Case-transition boundaries inside runs of word characters

use crate::class::CharClass;

/// Which transition rule placed a boundary
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum BoundaryKind {
    /// Lowercase or digit followed by uppercase: `fooBar`, `v2Api`
    LowerUpper,
    /// Last capital of an acronym run that starts a new word: `XMLParser`
    AcronymWord,
}

/// Decide whether a word boundary sits immediately before `cur`
///
/// The acronym rule needs a lowercase character after `cur`; at the end of
/// the input (`next == None`) it never fires, so `"ABC"` stays one word.
pub fn boundary_kind(prev: Option<char>, cur: char, next: Option<char>) -> Option<BoundaryKind> {
    let prev = CharClass::from_char(prev?);
    let cur = CharClass::from_char(cur);

    if cur != CharClass::Upper {
        return None;
    }
    if prev.is_lower_or_digit() {
        return Some(BoundaryKind::LowerUpper);
    }

    let next = next.map(CharClass::from_char);
    if prev.is_upper_or_digit() && next == Some(CharClass::Lower) {
        return Some(BoundaryKind::AcronymWord);
    }
    None
}

/// Sliding `[prev, current, next]` window over a character stream
#[derive(Debug, Clone, Default)]
pub struct CharWindow {
    chars: [Option<char>; 3],
    byte_pos: usize,
}

impl CharWindow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Shift the window by one character, supplying one character of lookahead
    pub fn advance(&mut self, current: char, next: Option<char>) {
        self.chars[0] = self.chars[1];
        self.chars[1] = Some(current);
        self.chars[2] = next;
        self.byte_pos += current.len_utf8();
    }

    pub fn prev_char(&self) -> Option<char> {
        self.chars[0]
    }

    pub fn current_char(&self) -> Option<char> {
        self.chars[1]
    }

    pub fn next_char(&self) -> Option<char> {
        self.chars[2]
    }

    /// Byte offset just past the current character
    pub fn byte_position(&self) -> usize {
        self.byte_pos
    }

    /// Boundary before the current character, if any
    pub fn boundary(&self) -> Option<BoundaryKind> {
        boundary_kind(self.prev_char(), self.current_char()?, self.next_char())
    }
}
