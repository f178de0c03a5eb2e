//! Target casing styles

use std::fmt;
use std::str::FromStr;

use crate::converter::Converter;
use crate::error::ApiError;

/// A target casing style
///
/// ```
/// use recase::Case;
///
/// assert_eq!(Case::Kebab.apply("fooBar"), "foo-bar");
/// assert_eq!("SCREAMING_SNAKE".parse::<Case>().unwrap(), Case::Constant);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(rename_all = "snake_case")
)]
pub enum Case {
    /// `foo bar`: lowercase words joined by a space
    #[default]
    #[cfg_attr(feature = "serde", serde(alias = "no"))]
    Normal,
    /// Plain lowercase, no segmentation
    Lower,
    /// Plain uppercase, no segmentation
    Upper,
    /// `fooBar`
    Camel,
    /// `FooBar`
    Pascal,
    /// `foo_bar`
    Snake,
    /// `foo-bar`
    #[cfg_attr(feature = "serde", serde(alias = "param"))]
    Kebab,
    /// `foo.bar`
    Dot,
    /// `foo/bar`
    Path,
    /// `FOO_BAR`
    Constant,
    /// `Foo Bar`
    Title,
    /// `Foo bar`
    Sentence,
    /// `Foo-Bar`
    Header,
}

impl Case {
    /// Every supported case, in declaration order
    pub const ALL: [Case; 13] = [
        Case::Normal,
        Case::Lower,
        Case::Upper,
        Case::Camel,
        Case::Pascal,
        Case::Snake,
        Case::Kebab,
        Case::Dot,
        Case::Path,
        Case::Constant,
        Case::Title,
        Case::Sentence,
        Case::Header,
    ];

    /// Canonical name, as accepted by [`FromStr`] and used by serde
    pub fn name(self) -> &'static str {
        match self {
            Case::Normal => "normal",
            Case::Lower => "lower",
            Case::Upper => "upper",
            Case::Camel => "camel",
            Case::Pascal => "pascal",
            Case::Snake => "snake",
            Case::Kebab => "kebab",
            Case::Dot => "dot",
            Case::Path => "path",
            Case::Constant => "constant",
            Case::Title => "title",
            Case::Sentence => "sentence",
            Case::Header => "header",
        }
    }

    /// Whether this case joins words with a caller-chosen separator
    pub fn accepts_separator(self) -> bool {
        matches!(self, Case::Normal | Case::Path)
    }

    /// Convert `s` using default options
    pub fn apply<'a>(self, s: impl Into<Option<&'a str>>) -> String {
        Converter::new(self).convert(s)
    }

    /// True when `s` is non-empty and already written in this case
    pub fn is_case(self, s: &str) -> bool {
        !s.is_empty() && self.apply(s) == s
    }
}

impl fmt::Display for Case {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for Case {
    type Err = ApiError;

    /// Parse a case name
    ///
    /// Names are themselves segmented first, so `"camelCase"`,
    /// `"camel-case"` and `"CAMEL_CASE"` are all the same name.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let case = match recase_core::snake(s).as_str() {
            "normal" | "no" | "no_case" => Case::Normal,
            "lower" | "lowercase" | "lower_case" => Case::Lower,
            "upper" | "uppercase" | "upper_case" => Case::Upper,
            "camel" | "camel_case" | "lower_camel" | "lower_camel_case" => Case::Camel,
            "pascal" | "pascal_case" | "upper_camel" | "upper_camel_case" => Case::Pascal,
            "snake" | "snake_case" => Case::Snake,
            "kebab" | "kebab_case" | "param" | "param_case" => Case::Kebab,
            "dot" | "dot_case" => Case::Dot,
            "path" | "path_case" => Case::Path,
            "constant" | "constant_case" | "screaming_snake" | "screaming_snake_case"
            | "upper_snake" => Case::Constant,
            "title" | "title_case" => Case::Title,
            "sentence" | "sentence_case" => Case::Sentence,
            "header" | "header_case" | "train" | "train_case" => Case::Header,
            _ => return Err(ApiError::UnknownCase(s.to_string())),
        };
        Ok(case)
    }
}
