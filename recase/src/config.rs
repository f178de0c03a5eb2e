//! Conversion configuration

use crate::case::Case;
use crate::error::{ApiError, Result};

/// Options for a [`Converter`](crate::Converter)
///
/// Loadable from TOML when the `serde` feature is enabled:
///
/// ```toml
/// case = "path"
/// separator = "::"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default, deny_unknown_fields)
)]
pub struct Config {
    /// Target case
    pub case: Case,
    /// Let words that start with a digit merge into the previous word
    /// in camel and pascal case
    pub merge_digits: bool,
    /// Word separator for [`Case::Normal`] and [`Case::Path`]
    #[cfg_attr(feature = "serde", serde(skip_serializing_if = "Option::is_none"))]
    pub separator: Option<String>,
}

impl Config {
    /// Default options for `case`
    pub fn new(case: Case) -> Self {
        Self {
            case,
            ..Self::default()
        }
    }

    /// Create a builder
    pub fn builder() -> ConfigBuilder {
        ConfigBuilder::default()
    }

    /// Check option combinations
    pub fn validate(&self) -> Result<()> {
        let Some(separator) = &self.separator else {
            return Ok(());
        };
        if !self.case.accepts_separator() {
            return Err(ApiError::Config(format!(
                "separator is not supported for {} case",
                self.case
            )));
        }
        if separator.is_empty() {
            return Err(ApiError::Config("separator must not be empty".to_string()));
        }
        Ok(())
    }

    /// Parse and validate a TOML document
    #[cfg(feature = "serde")]
    pub fn from_toml_str(toml_content: &str) -> Result<Self> {
        let config: Config = toml::from_str(toml_content)?;
        config.validate()?;
        Ok(config)
    }

    /// Parse and validate a JSON document
    #[cfg(feature = "serde")]
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Config = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }
}

/// Configuration builder
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config: Config,
}

impl ConfigBuilder {
    /// Set the target case
    pub fn case(mut self, case: Case) -> Self {
        self.config.case = case;
        self
    }

    /// Set the target case by name, e.g. `"kebab-case"`
    pub fn case_name(mut self, name: &str) -> Result<Self> {
        self.config.case = name.parse()?;
        Ok(self)
    }

    /// Allow digit words to merge in camel and pascal case
    pub fn merge_digits(mut self, merge: bool) -> Self {
        self.config.merge_digits = merge;
        self
    }

    /// Set the word separator
    pub fn separator(mut self, separator: impl Into<String>) -> Self {
        self.config.separator = Some(separator.into());
        self
    }

    /// Build the configuration
    pub fn build(self) -> Result<Config> {
        self.config.validate()?;
        Ok(self.config)
    }
}
