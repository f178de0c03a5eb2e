//! Word segmentation
//!
//! [`normalize`] turns arbitrary text into lowercase word tokens joined by a
//! replacement token. Every casing function in [`crate::case`] is built on it.
//!
//! A single left-to-right scan does all of the work:
//! - case transitions (`fooBar`, `XMLParser`) become boundaries, see
//!   [`crate::boundary`]
//! - each maximal run of non-word characters becomes one boundary, unless the
//!   run touches the start or the end of the input, in which case it is dropped
//! - every boundary is written as the replacement token and the whole result
//!   is lowercased

use alloc::string::String;
use alloc::vec::Vec;

use crate::boundary::CharWindow;
use crate::class::CharClass;

/// Replacement token used when the caller does not supply one
pub const DEFAULT_REPLACEMENT: &str = " ";

/// Split `s` into lowercase words joined by `replacement`
///
/// `None` input yields an empty string. `None` replacement means a single
/// space. The output never starts or ends with the replacement and never
/// contains it twice in a row.
///
/// ```
/// use recase_core::normalize;
///
/// assert_eq!(normalize("XMLHttpRequest", None), "xml http request");
/// assert_eq!(normalize("  --fooBar__baz!! ", Some("_")), "foo_bar_baz");
/// assert_eq!(normalize(None, Some("-")), "");
/// ```
pub fn normalize<'a>(s: impl Into<Option<&'a str>>, replacement: Option<&str>) -> String {
    let Some(s) = s.into() else {
        return String::new();
    };
    let replacement = replacement.unwrap_or(DEFAULT_REPLACEMENT).to_lowercase();

    let mut out = String::with_capacity(s.len() + replacement.len());
    let mut window = CharWindow::new();
    let mut chars = s.chars().peekable();
    let mut seen_word = false;
    // a non-word run that has not been written yet
    let mut pending_gap = false;

    while let Some(ch) = chars.next() {
        window.advance(ch, chars.peek().copied());

        if !CharClass::from_char(ch).is_word() {
            // runs before the first word are dropped outright
            pending_gap |= seen_word;
            continue;
        }

        if pending_gap || window.boundary().is_some() {
            out.push_str(&replacement);
            pending_gap = false;
        }
        out.push(ch.to_ascii_lowercase());
        seen_word = true;
    }

    // a trailing run leaves pending_gap set and is never written
    out
}

/// Alias of [`normalize`]
#[inline]
pub fn no<'a>(s: impl Into<Option<&'a str>>, replacement: Option<&str>) -> String {
    normalize(s, replacement)
}

/// Lowercase word tokens of `s`
///
/// ```
/// use recase_core::words;
///
/// assert_eq!(words("parseHTTPResponse2"), ["parse", "http", "response2"]);
/// ```
pub fn words<'a>(s: impl Into<Option<&'a str>>) -> Vec<String> {
    normalize(s, None)
        .split(DEFAULT_REPLACEMENT)
        .filter(|word| !word.is_empty())
        .map(String::from)
        .collect()
}
