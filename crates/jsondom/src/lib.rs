//! JSON document trees: parse, print, mutate, minify.
//!
//! `jsondom` turns JSON text (RFC 7159 / ECMA-404) into an in-memory tree of
//! [`Value`] nodes, prints trees back out in formatted or compact form, and
//! offers array/object mutation on the tree in between. It is built to be
//! embedded: the crate does no I/O, keeps no global state, and routes its
//! buffer allocations through a caller-installable [`AllocHooks`] gate.
//!
//! # Parsing
//!
//! ```
//! use jsondom::Value;
//!
//! let root = jsondom::parse(r#"{"name":"Ada","scores":[1, 2.5]}"#).unwrap();
//! assert_eq!(root.object_item("name").and_then(Value::as_str), Some("Ada"));
//! assert_eq!(root.object_item("scores").map(Value::array_size), Some(2));
//! ```
//!
//! Malformed input fails with the byte offset of the offending input
//! position, and no partially built tree survives:
//!
//! ```
//! use jsondom::ParseError;
//!
//! assert_eq!(jsondom::parse("[1, oops]"), Err(ParseError::Syntax { offset: 4 }));
//! ```
//!
//! # Printing
//!
//! [`Value::print`] renders formatted (tab-indented members) or compact
//! text; [`Value::print_buffered`] reuses one growing buffer, and
//! [`Value::print_preallocated`] writes into caller memory without
//! allocating at all.
//!
//! ```
//! let tree = jsondom::parse("[1,\t2]").unwrap();
//! assert_eq!(tree.print(true).unwrap(), "[1, 2]");
//! assert_eq!(tree.to_string(), "[1,2]");
//! ```

mod error;
mod hooks;
mod minify;
mod options;
mod parser;
mod printer;
mod value;

#[cfg(test)]
mod tests;

pub use error::{ParseError, PrintError};
pub use hooks::{AllocHooks, SystemHooks};
pub use minify::minify;
pub use options::{ParseOptions, PrintOptions};
pub use value::{Member, Value};

/// Parses a complete JSON value from `text` with default options.
///
/// Leading and trailing whitespace are tolerated, as is trailing garbage
/// after the root value; use [`parse_with_options`] with
/// [`ParseOptions::require_end`] to reject the latter, or to learn where the
/// root value ended.
///
/// # Errors
///
/// See [`ParseError`]. On syntax errors the offset locates the offending
/// byte in `text`.
pub fn parse(text: &str) -> Result<Value, ParseError> {
    parser::parse_document(text, &ParseOptions::default()).map(|(value, _)| value)
}

/// Parses a complete JSON value with explicit options, returning the root
/// value and the byte offset one past the end of its text.
///
/// # Errors
///
/// See [`ParseError`].
///
/// # Examples
///
/// ```
/// use jsondom::{ParseOptions, Value};
///
/// let (value, end) = jsondom::parse_with_options("7 tail", &ParseOptions::default()).unwrap();
/// assert_eq!(value, Value::Number(7.0));
/// assert_eq!(end, 1);
///
/// let strict = ParseOptions { require_end: true, ..ParseOptions::default() };
/// assert!(jsondom::parse_with_options("7 tail", &strict).is_err());
/// ```
pub fn parse_with_options(
    text: &str,
    options: &ParseOptions<'_>,
) -> Result<(Value, usize), ParseError> {
    parser::parse_document(text, options)
}

/// Major component of the crate version.
pub const VERSION_MAJOR: u32 = 1;
/// Minor component of the crate version.
pub const VERSION_MINOR: u32 = 0;
/// Patch component of the crate version.
pub const VERSION_PATCH: u32 = 0;

/// The crate version as `"MAJOR.MINOR.PATCH"`.
#[must_use]
pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
