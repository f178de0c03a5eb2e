//! String case conversion
//!
//! This crate provides a typed interface over [`recase_core`]: a [`Case`]
//! enum naming every supported style, a validated [`Config`], a reusable
//! [`Converter`] and the [`Casing`] extension trait.
//!
//! # Example
//!
//! ```rust
//! use recase::{convert, Case, Casing};
//!
//! assert_eq!(convert("XMLHttpRequest", Case::Snake), "xml_http_request");
//! assert_eq!("test string".to_case(Case::Constant), "TEST_STRING");
//!
//! let case: Case = "kebab-case".parse().unwrap();
//! assert_eq!("fooBar".to_case(case), "foo-bar");
//! ```
//!
//! The free functions of [`recase_core`] are re-exported unchanged for
//! callers that want the plain function surface.

#![warn(missing_docs)]

pub mod case;
pub mod casing;
pub mod config;
pub mod converter;
pub mod error;

// Re-export key types
pub use case::Case;
pub use casing::Casing;
pub use config::{Config, ConfigBuilder};
pub use converter::{Converter, DEFAULT_PATH_SEPARATOR};
pub use error::{ApiError, Result};

pub use recase_core::{
    camel, constant, dot, header, lower, no, normalize, param, pascal, path, sentence, snake,
    title, upper, upper_first, words,
};

// Convenience functions

/// Convert `s` to `case` with default options
pub fn convert(s: &str, case: Case) -> String {
    case.apply(s)
}

/// Convert `s` to the case named `case_name`
pub fn convert_named(s: &str, case_name: &str) -> Result<String> {
    let case: Case = case_name.parse()?;
    Ok(case.apply(s))
}
