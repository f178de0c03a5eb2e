//! Configured case conversion

use recase_core as core_case;

use crate::case::Case;
use crate::config::Config;
use crate::error::Result;

/// Separator used by [`Case::Path`] when none is configured
pub const DEFAULT_PATH_SEPARATOR: &str = "/";

/// Converts strings into one configured case
///
/// ```
/// use recase::{Case, Config, Converter};
///
/// let converter = Converter::with_config(
///     Config::builder().case(Case::Path).separator("::").build()?,
/// )?;
/// assert_eq!(converter.convert("fooBar baz"), "foo::bar::baz");
/// # Ok::<(), recase::ApiError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Converter {
    config: Config,
}

impl Converter {
    /// Converter for `case` with default options
    pub fn new(case: Case) -> Self {
        Self {
            config: Config::new(case),
        }
    }

    /// Converter with custom configuration
    pub fn with_config(config: Config) -> Result<Self> {
        config.validate()?;
        log::debug!(
            "creating converter: case={}, merge_digits={}, separator={:?}",
            config.case,
            config.merge_digits,
            config.separator
        );
        Ok(Self { config })
    }

    /// Get the current configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Get the target case
    pub fn case(&self) -> Case {
        self.config.case
    }

    /// Convert one string; `None` converts like `""`
    pub fn convert<'a>(&self, s: impl Into<Option<&'a str>>) -> String {
        let s = s.into();
        log::trace!(
            "converting {} bytes to {} case",
            s.map_or(0, str::len),
            self.config.case
        );

        let merge = self.config.merge_digits;
        let separator = self.config.separator.as_deref();
        match self.config.case {
            Case::Normal => core_case::normalize(s, separator),
            Case::Lower => s.map(core_case::lower).unwrap_or_default(),
            Case::Upper => s.map(core_case::upper).unwrap_or_default(),
            Case::Camel => core_case::camel(s, merge),
            Case::Pascal => core_case::pascal(s, merge),
            Case::Snake => core_case::snake(s),
            Case::Kebab => core_case::param(s),
            Case::Dot => core_case::dot(s),
            Case::Path => core_case::path(s, separator.unwrap_or(DEFAULT_PATH_SEPARATOR)),
            Case::Constant => core_case::constant(s),
            Case::Title => core_case::title(s),
            Case::Sentence => core_case::sentence(s),
            Case::Header => core_case::header(s),
        }
    }

    /// Convert every input, preserving order
    pub fn convert_all<I, S>(&self, inputs: I) -> Vec<String>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        inputs
            .into_iter()
            .map(|s| self.convert(s.as_ref()))
            .collect()
    }
}
