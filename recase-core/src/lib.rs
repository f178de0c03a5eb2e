//! Word segmentation and case conversion primitives
//!
//! Every casing style in this crate is derived from one normalization step
//! that splits an identifier or phrase into lowercase words:
//!
//! ```rust
//! use recase_core::{camel, constant, header, normalize, snake};
//!
//! assert_eq!(normalize("XMLHttpRequest", None), "xml http request");
//! assert_eq!(camel("XMLHttpRequest", false), "xmlHttpRequest");
//! assert_eq!(snake("XMLHttpRequest"), "xml_http_request");
//! assert_eq!(constant("XMLHttpRequest"), "XML_HTTP_REQUEST");
//! assert_eq!(header("XMLHttpRequest"), "Xml-Http-Request");
//! ```
//!
//! All functions are pure. Inputs typed `impl Into<Option<&str>>` accept
//! either a `&str` or `None`, and `None` behaves like an empty string.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod boundary;
pub mod case;
pub mod class;
pub mod normalize;

pub use boundary::{boundary_kind, BoundaryKind, CharWindow};
pub use case::{
    camel, constant, dot, header, lower, param, pascal, path, sentence, snake, title, upper,
    upper_first,
};
pub use class::CharClass;
pub use normalize::{no, normalize, words, DEFAULT_REPLACEMENT};
