//! Casing functions
//!
//! Each function is a join/capitalization rule layered over
//! [`normalize`](crate::normalize::normalize). Functions that accept
//! `impl Into<Option<&str>>` treat `None` as empty input.

use alloc::string::String;

use crate::normalize::normalize;

/// Lowercase `s` without segmenting it
pub fn lower(s: &str) -> String {
    s.to_lowercase()
}

/// Uppercase `s` without segmenting it
pub fn upper(s: &str) -> String {
    s.to_uppercase()
}

/// Uppercase the first character and keep the rest unchanged
///
/// Empty and `None` inputs both give `""`.
pub fn upper_first<'a>(s: impl Into<Option<&'a str>>) -> String {
    let Some(s) = s.into() else {
        return String::new();
    };
    let mut chars = s.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// `dot.case`
pub fn dot<'a>(s: impl Into<Option<&'a str>>) -> String {
    normalize(s, Some("."))
}

/// `param-case`, also known as kebab-case
pub fn param<'a>(s: impl Into<Option<&'a str>>) -> String {
    normalize(s, Some("-"))
}

/// `snake_case`
pub fn snake<'a>(s: impl Into<Option<&'a str>>) -> String {
    normalize(s, Some("_"))
}

/// Words joined by `sep`; `"/"` gives `path/case`
pub fn path<'a>(s: impl Into<Option<&'a str>>, sep: &str) -> String {
    normalize(s, Some(sep))
}

/// `CONSTANT_CASE`
pub fn constant<'a>(s: impl Into<Option<&'a str>>) -> String {
    upper(&snake(s))
}

/// `camelCase`
///
/// Unless `merge` is set, a word that starts with a digit is kept apart from
/// the word before it with an underscore, so `"foo 2 bar"` becomes
/// `"foo_2Bar"` rather than `"foo2Bar"`.
///
/// ```
/// use recase_core::camel;
///
/// assert_eq!(camel("test string", false), "testString");
/// assert_eq!(camel("foo 2 bar", false), "foo_2Bar");
/// assert_eq!(camel("foo 2 bar", true), "foo2Bar");
/// ```
pub fn camel<'a>(s: impl Into<Option<&'a str>>, merge: bool) -> String {
    let normalized = normalize(s, None);
    let mut out = String::with_capacity(normalized.len());
    let mut chars = normalized.chars().peekable();

    while let Some(ch) = chars.next() {
        if ch != ' ' {
            out.push(ch);
            continue;
        }
        match chars.peek() {
            Some(next) if !merge && next.is_ascii_digit() => out.push('_'),
            Some(_) => {
                if let Some(next) = chars.next() {
                    out.extend(next.to_uppercase());
                }
            }
            None => {}
        }
    }
    out
}

/// `PascalCase`
pub fn pascal<'a>(s: impl Into<Option<&'a str>>, merge: bool) -> String {
    upper_first(camel(s, merge).as_str())
}

/// `Title Case`
pub fn title<'a>(s: impl Into<Option<&'a str>>) -> String {
    capitalize_words(&normalize(s, None), ' ')
}

/// `Sentence case`: only the very first character is uppercased
pub fn sentence<'a>(s: impl Into<Option<&'a str>>) -> String {
    upper_first(normalize(s, None).as_str())
}

/// `Header-Case`
pub fn header<'a>(s: impl Into<Option<&'a str>>) -> String {
    capitalize_words(&normalize(s, Some("-")), '-')
}

/// Uppercase the first character and every character that follows `sep`
///
/// A character that was just uppercased never opens the next word itself,
/// so a doubled separator only capitalizes its second half.
fn capitalize_words(s: &str, sep: char) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for ch in s.chars() {
        if at_word_start {
            out.extend(ch.to_uppercase());
            at_word_start = false;
        } else {
            out.push(ch);
            at_word_start = ch == sep;
        }
    }
    out
}
