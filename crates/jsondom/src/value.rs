//! The JSON document tree.
//!
//! This module defines [`Value`], the tagged representation of any JSON
//! value, and [`Member`], a keyed entry in an object. Parents own their
//! children through plain vectors; the one escape hatch from single
//! ownership is [`Value::Reference`], a shallow `Rc` borrow of another
//! tree's payload.

use std::{borrow::Cow, fmt, rc::Rc};

use crate::{
    error::PrintError,
    options::PrintOptions,
    printer::{self, escape, number},
};

/// A member of a JSON object: a key and the value it maps to.
///
/// The key is a [`Cow`] so that keys handed in with
/// [`Value::add_member_const`] are borrowed for the life of the program
/// instead of copied. Key comparison everywhere in this crate is byte-exact
/// and case-sensitive; no Unicode normalization is applied.
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq)]
pub struct Member {
    /// The member key, unescaped UTF-8.
    pub key: Cow<'static, str>,
    /// The member value.
    pub value: Value,
}

impl Member {
    /// Creates a member with an owned copy of `key`.
    pub fn new(key: &str, value: Value) -> Self {
        Self {
            key: Cow::Owned(key.to_owned()),
            value,
        }
    }
}

/// A JSON value as defined by [RFC 7159].
///
/// Beyond the six JSON data types, two extra variants serve embedders:
///
/// - [`Raw`](Value::Raw) holds pre-serialized JSON text that the printer
///   emits verbatim. The parser never produces it.
/// - [`Reference`](Value::Reference) is a shallow borrow of another tree's
///   value: constructing one is O(1) and never deep-copies, and dropping one
///   never frees a payload that is still shared. Reference values are
///   read-only views; the mutation helpers do not reach through them.
///
/// # Examples
///
/// ```
/// use jsondom::Value;
///
/// let mut root = Value::object();
/// root.add_member("name", Value::from("jsondom"));
/// root.add_member("tags", Value::from_iter([Value::from(1.0), Value::Null]));
/// assert_eq!(root.to_string(), r#"{"name":"jsondom","tags":[1,null]}"#);
/// ```
///
/// [RFC 7159]: https://datatracker.ietf.org/doc/html/rfc7159
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[derive(Clone, Debug, PartialEq, Default)]
pub enum Value {
    /// The JSON `null` literal.
    #[default]
    Null,
    /// `true` or `false`.
    Bool(bool),
    /// Any JSON number, stored as an IEEE-754 double.
    Number(f64),
    /// An unescaped UTF-8 string.
    String(String),
    /// Pre-serialized JSON, printed verbatim without escaping.
    Raw(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// An ordered sequence of key/value members. Duplicate keys are
    /// representable; lookups return the first match.
    Object(Vec<Member>),
    /// A shallow borrow of another tree's value.
    Reference(Rc<Value>),
}

impl Value {
    /// Creates an empty array.
    #[must_use]
    pub fn array() -> Self {
        Self::Array(Vec::new())
    }

    /// Creates an empty object.
    #[must_use]
    pub fn object() -> Self {
        Self::Object(Vec::new())
    }

    /// Creates a raw value from pre-serialized JSON text.
    ///
    /// The text is the caller's responsibility: it is emitted into printer
    /// output without any validation or escaping.
    pub fn raw(json: impl Into<String>) -> Self {
        Self::Raw(json.into())
    }

    /// Creates a shallow borrow of `target`.
    ///
    /// The borrow shares the target's payload through the `Rc`; no part of
    /// the target is copied.
    #[must_use]
    pub fn reference(target: &Rc<Value>) -> Self {
        Self::Reference(Rc::clone(target))
    }

    /// Returns `true` if the value is [`Null`](Value::Null).
    #[must_use]
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    /// Returns `true` if the value is [`Bool`](Value::Bool).
    #[must_use]
    pub fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(..))
    }

    /// Returns `true` if the value is [`Number`](Value::Number).
    #[must_use]
    pub fn is_number(&self) -> bool {
        matches!(self, Self::Number(..))
    }

    /// Returns `true` if the value is [`String`](Value::String).
    #[must_use]
    pub fn is_string(&self) -> bool {
        matches!(self, Self::String(..))
    }

    /// Returns `true` if the value is [`Array`](Value::Array).
    #[must_use]
    pub fn is_array(&self) -> bool {
        matches!(self, Self::Array(..))
    }

    /// Returns `true` if the value is [`Object`](Value::Object).
    #[must_use]
    pub fn is_object(&self) -> bool {
        matches!(self, Self::Object(..))
    }

    /// Returns `true` if the value is [`Reference`](Value::Reference).
    #[must_use]
    pub fn is_reference(&self) -> bool {
        matches!(self, Self::Reference(..))
    }

    /// The boolean payload, if this is a [`Bool`](Value::Bool).
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self.resolve() {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// The numeric payload, if this is a [`Number`](Value::Number).
    #[must_use]
    pub fn as_f64(&self) -> Option<f64> {
        match self.resolve() {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// The string payload, if this is a [`String`](Value::String).
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self.resolve() {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    /// The elements, if this is an [`Array`](Value::Array).
    #[must_use]
    pub fn as_array(&self) -> Option<&[Value]> {
        match self.resolve() {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// The members, if this is an [`Object`](Value::Object).
    #[must_use]
    pub fn as_object(&self) -> Option<&[Member]> {
        match self.resolve() {
            Self::Object(members) => Some(members),
            _ => None,
        }
    }

    /// Follows [`Reference`](Value::Reference) links to the borrowed value.
    ///
    /// Returns `self` unchanged for every other variant. All read accessors
    /// on this type resolve references first, so a reference to an array
    /// answers [`array_size`](Value::array_size) like the array itself.
    #[must_use]
    pub fn resolve(&self) -> &Value {
        let mut value = self;
        while let Self::Reference(target) = value {
            value = target.as_ref();
        }
        value
    }

    /// Number of children: elements of an array, members of an object, 0
    /// for anything else.
    #[must_use]
    pub fn array_size(&self) -> usize {
        match self.resolve() {
            Self::Array(items) => items.len(),
            Self::Object(members) => members.len(),
            _ => 0,
        }
    }

    /// The array element at `index`.
    #[must_use]
    pub fn array_item(&self, index: usize) -> Option<&Value> {
        match self.resolve() {
            Self::Array(items) => items.get(index),
            _ => None,
        }
    }

    /// The value of the first member whose key equals `key`, byte-exactly.
    #[must_use]
    pub fn object_item(&self, key: &str) -> Option<&Value> {
        match self.resolve() {
            Self::Object(members) => members
                .iter()
                .find(|member| member.key == key)
                .map(|member| &member.value),
            _ => None,
        }
    }

    /// Returns `true` if this is an object with a member named `key`.
    #[must_use]
    pub fn has_object_item(&self, key: &str) -> bool {
        self.object_item(key).is_some()
    }

    /// Appends `item` to an array. Returns `false` (and drops nothing; the
    /// item is returned to the caller's scope by value and discarded) when
    /// `self` is not an array.
    pub fn add_item(&mut self, item: Value) -> bool {
        match self {
            Self::Array(items) => {
                items.push(item);
                true
            }
            _ => false,
        }
    }

    /// Inserts `item` before position `index`; appends when `index` is past
    /// the end. Returns `false` when `self` is not an array.
    pub fn insert_item(&mut self, index: usize, item: Value) -> bool {
        match self {
            Self::Array(items) => {
                if index >= items.len() {
                    items.push(item);
                } else {
                    items.insert(index, item);
                }
                true
            }
            _ => false,
        }
    }

    /// Unlinks and returns the array element at `index`. The caller owns the
    /// returned value; it no longer appears anywhere in this tree.
    pub fn detach_item(&mut self, index: usize) -> Option<Value> {
        match self {
            Self::Array(items) if index < items.len() => Some(items.remove(index)),
            _ => None,
        }
    }

    /// Detaches and drops the array element at `index`.
    pub fn delete_item(&mut self, index: usize) -> bool {
        self.detach_item(index).is_some()
    }

    /// Replaces the array element at `index`, dropping the old element.
    /// Out-of-range indices leave the array untouched.
    pub fn replace_item(&mut self, index: usize, item: Value) -> bool {
        match self {
            Self::Array(items) if index < items.len() => {
                items[index] = item;
                true
            }
            _ => false,
        }
    }

    /// Appends a member to an object with an owned copy of `key`.
    pub fn add_member(&mut self, key: &str, value: Value) -> bool {
        match self {
            Self::Object(members) => {
                members.push(Member::new(key, value));
                true
            }
            _ => false,
        }
    }

    /// Appends a member whose key is borrowed, not copied.
    ///
    /// The `'static` bound is the ownership contract: the key must outlive
    /// every tree it is linked into, and dropping the member never frees it.
    pub fn add_member_const(&mut self, key: &'static str, value: Value) -> bool {
        match self {
            Self::Object(members) => {
                members.push(Member {
                    key: Cow::Borrowed(key),
                    value,
                });
                true
            }
            _ => false,
        }
    }

    /// Appends a shallow borrow of `target` to an array. O(1), no deep copy.
    pub fn add_item_reference(&mut self, target: &Rc<Value>) -> bool {
        self.add_item(Self::reference(target))
    }

    /// Appends a shallow borrow of `target` to an object under an owned copy
    /// of `key`. O(1), no deep copy.
    pub fn add_member_reference(&mut self, key: &str, target: &Rc<Value>) -> bool {
        self.add_member(key, Self::reference(target))
    }

    /// Unlinks and returns the value of the first member named `key`.
    pub fn detach_member(&mut self, key: &str) -> Option<Value> {
        match self {
            Self::Object(members) => {
                let index = members.iter().position(|member| member.key == key)?;
                Some(members.remove(index).value)
            }
            _ => None,
        }
    }

    /// Detaches and drops the first member named `key`.
    pub fn delete_member(&mut self, key: &str) -> bool {
        self.detach_member(key).is_some()
    }

    /// Replaces the value of the first member named `key` in place, keeping
    /// the member's position and key. The old value is dropped.
    pub fn replace_member(&mut self, key: &str, value: Value) -> bool {
        match self {
            Self::Object(members) => {
                match members.iter_mut().find(|member| member.key == key) {
                    Some(member) => {
                        member.value = value;
                        true
                    }
                    None => false,
                }
            }
            _ => false,
        }
    }

    /// Clones this value into a fully owned tree.
    ///
    /// The copy is never a reference: duplicating a
    /// [`Reference`](Value::Reference) copies the borrowed target instead.
    /// With `recurse` set, children are duplicated all the way down; without
    /// it, arrays and objects come back empty.
    #[must_use]
    pub fn duplicate(&self, recurse: bool) -> Value {
        match self {
            Self::Null => Self::Null,
            Self::Bool(b) => Self::Bool(*b),
            Self::Number(n) => Self::Number(*n),
            Self::String(s) => Self::String(s.clone()),
            Self::Raw(s) => Self::Raw(s.clone()),
            Self::Array(items) => {
                if recurse {
                    Self::Array(items.iter().map(|item| item.duplicate(true)).collect())
                } else {
                    Self::array()
                }
            }
            Self::Object(members) => {
                if recurse {
                    Self::Object(
                        members
                            .iter()
                            .map(|member| Member {
                                key: member.key.clone(),
                                value: member.value.duplicate(true),
                            })
                            .collect(),
                    )
                } else {
                    Self::object()
                }
            }
            Self::Reference(target) => target.duplicate(recurse),
        }
    }

    /// Renders this value to JSON text, formatted or compact.
    ///
    /// Every subtree is rendered into its own freshly allocated string and
    /// the pieces are concatenated; for large trees
    /// [`print_buffered`](Value::print_buffered) amortizes better.
    ///
    /// # Errors
    ///
    /// [`PrintError::OutOfMemory`] when an allocation is vetoed or fails.
    pub fn print(&self, format: bool) -> Result<String, PrintError> {
        self.print_with_options(&PrintOptions {
            format,
            ..PrintOptions::default()
        })
    }

    /// Like [`print`](Value::print), with explicit options.
    ///
    /// # Errors
    ///
    /// [`PrintError::OutOfMemory`] when an allocation is vetoed or fails.
    pub fn print_with_options(&self, options: &PrintOptions<'_>) -> Result<String, PrintError> {
        printer::print_standalone(self, options.format, options.hooks)
    }

    /// Renders this value through a single growing output buffer.
    ///
    /// `prebuffer` sizes the initial allocation; the buffer doubles as
    /// needed from there.
    ///
    /// # Errors
    ///
    /// [`PrintError::OutOfMemory`] when an allocation is vetoed or fails.
    pub fn print_buffered(&self, prebuffer: usize, format: bool) -> Result<String, PrintError> {
        printer::print_buffered(self, prebuffer, format, &crate::SystemHooks)
    }

    /// Renders this value into a caller-provided buffer without allocating.
    ///
    /// Returns the number of bytes written.
    ///
    /// # Errors
    ///
    /// [`PrintError::BufferTooSmall`] when the rendering does not fit.
    pub fn print_preallocated(&self, buf: &mut [u8], format: bool) -> Result<usize, PrintError> {
        printer::print_preallocated(self, buf, format, &crate::SystemHooks)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Number(f64::from(v))
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::String(v)
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Self::Array(v)
    }
}

impl FromIterator<Value> for Value {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Self::Array(iter.into_iter().collect())
    }
}

impl From<&[i32]> for Value {
    fn from(numbers: &[i32]) -> Self {
        numbers.iter().map(|&n| Self::Number(f64::from(n))).collect()
    }
}

impl From<&[f32]> for Value {
    fn from(numbers: &[f32]) -> Self {
        numbers.iter().map(|&n| Self::Number(f64::from(n))).collect()
    }
}

impl From<&[f64]> for Value {
    fn from(numbers: &[f64]) -> Self {
        numbers.iter().map(|&n| Self::Number(n)).collect()
    }
}

impl From<&[&str]> for Value {
    fn from(strings: &[&str]) -> Self {
        strings.iter().map(|&s| Self::from(s)).collect()
    }
}

/// Writes the compact rendering, equivalent to `print(false)` but straight
/// into the formatter.
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => f.write_str(if *b { "true" } else { "false" }),
            Self::Number(n) => f.write_str(&number::format_number(*n)),
            Self::String(s) => {
                f.write_str("\"")?;
                escape::write_escaped(s, f)?;
                f.write_str("\"")
            }
            Self::Raw(s) => f.write_str(s),
            Self::Array(items) => {
                f.write_str("[")?;
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    fmt::Display::fmt(item, f)?;
                }
                f.write_str("]")
            }
            Self::Object(members) => {
                f.write_str("{")?;
                for (i, member) in members.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    f.write_str("\"")?;
                    escape::write_escaped(&member.key, f)?;
                    f.write_str("\":")?;
                    fmt::Display::fmt(&member.value, f)?;
                }
                f.write_str("}")
            }
            Self::Reference(target) => fmt::Display::fmt(target.as_ref(), f),
        }
    }
}
