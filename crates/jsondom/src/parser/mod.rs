//! Recursive-descent JSON parser.
//!
//! The parser walks the input bytes left to right with a single cursor and
//! builds the tree bottom-up. Recursion depth equals JSON nesting depth and
//! is bounded by [`ParseOptions::max_depth`]; every failure path drops the
//! partially built subtree before returning, so callers either receive a
//! complete tree or nothing.
//!
//! [`ParseOptions::max_depth`]: crate::ParseOptions::max_depth

mod string;

use std::borrow::Cow;

use crate::{
    error::ParseError,
    hooks::AllocHooks,
    options::ParseOptions,
    value::{Member, Value},
};

/// Parses one document per the configured options, returning the root value
/// and the byte offset one past the end of the root's text.
pub(crate) fn parse_document(
    text: &str,
    options: &ParseOptions<'_>,
) -> Result<(Value, usize), ParseError> {
    let mut parser = Parser {
        text,
        bytes: text.as_bytes(),
        pos: 0,
        max_depth: options.max_depth,
        hooks: options.hooks,
    };
    let root = parser.parse_value(0)?;
    let end = parser.pos;
    if options.require_end {
        parser.skip_whitespace();
        if parser.pos < parser.bytes.len() {
            return Err(ParseError::Syntax { offset: parser.pos });
        }
    }
    Ok((root, end))
}

pub(crate) struct Parser<'text, 'h> {
    pub(crate) text: &'text str,
    pub(crate) bytes: &'text [u8],
    pub(crate) pos: usize,
    max_depth: usize,
    pub(crate) hooks: &'h dyn AllocHooks,
}

impl Parser<'_, '_> {
    fn peek(&self) -> Option<u8> {
        self.bytes.get(self.pos).copied()
    }

    /// Whitespace here is any byte `<= 0x20`, matching the grammar's
    /// insignificant-byte class.
    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b) if b <= 0x20) {
            self.pos += 1;
        }
    }

    fn parse_value(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.skip_whitespace();
        if depth > self.max_depth {
            return Err(ParseError::Depth { offset: self.pos });
        }
        match self.peek() {
            Some(b'n') => self.parse_literal(b"null", Value::Null),
            Some(b't') => self.parse_literal(b"true", Value::Bool(true)),
            Some(b'f') => self.parse_literal(b"false", Value::Bool(false)),
            Some(b'"') => self.parse_string().map(Value::String),
            Some(b'-' | b'0'..=b'9') => self.parse_number(),
            Some(b'[') => self.parse_array(depth),
            Some(b'{') => self.parse_object(depth),
            _ => Err(ParseError::Syntax { offset: self.pos }),
        }
    }

    fn parse_literal(&mut self, literal: &[u8], value: Value) -> Result<Value, ParseError> {
        if self.bytes[self.pos..].starts_with(literal) {
            self.pos += literal.len();
            Ok(value)
        } else {
            Err(ParseError::Syntax { offset: self.pos })
        }
    }

    /// Strict JSON number lexeme, then `f64` conversion.
    ///
    /// A `.` or exponent introducer is consumed only when a digit actually
    /// follows, so `1.x` parses as `1` and leaves the cursor at the dot for
    /// the caller to reject. Hex floats never get off the ground for the
    /// same reason. Overflowing exponents saturate to infinity, like
    /// `strtod`.
    fn parse_number(&mut self) -> Result<Value, ParseError> {
        let start = self.pos;
        if self.peek() == Some(b'-') {
            self.pos += 1;
        }
        let integer_start = self.pos;
        self.skip_digits();
        if self.pos == integer_start {
            return Err(ParseError::Syntax { offset: start });
        }
        if self.peek() == Some(b'.') && matches!(self.bytes.get(self.pos + 1), Some(b'0'..=b'9')) {
            self.pos += 1;
            self.skip_digits();
        }
        if matches!(self.peek(), Some(b'e' | b'E')) {
            let mut lookahead = self.pos + 1;
            if matches!(self.bytes.get(lookahead), Some(b'+' | b'-')) {
                lookahead += 1;
            }
            if matches!(self.bytes.get(lookahead), Some(b'0'..=b'9')) {
                self.pos = lookahead;
                self.skip_digits();
            }
        }
        match self.text[start..self.pos].parse::<f64>() {
            Ok(number) => Ok(Value::Number(number)),
            Err(_) => Err(ParseError::Syntax { offset: start }),
        }
    }

    fn skip_digits(&mut self) {
        while matches!(self.peek(), Some(b'0'..=b'9')) {
            self.pos += 1;
        }
    }

    fn parse_array(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.pos += 1; // past '['
        self.skip_whitespace();
        if self.peek() == Some(b']') {
            self.pos += 1;
            return Ok(Value::array());
        }
        let mut items = Vec::new();
        loop {
            items.push(self.parse_value(depth + 1)?);
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b']') => {
                    self.pos += 1;
                    return Ok(Value::Array(items));
                }
                _ => return Err(ParseError::Syntax { offset: self.pos }),
            }
        }
    }

    fn parse_object(&mut self, depth: usize) -> Result<Value, ParseError> {
        self.pos += 1; // past '{'
        self.skip_whitespace();
        if self.peek() == Some(b'}') {
            self.pos += 1;
            return Ok(Value::object());
        }
        let mut members = Vec::new();
        loop {
            self.skip_whitespace();
            if self.peek() != Some(b'"') {
                return Err(ParseError::Syntax { offset: self.pos });
            }
            let key = self.parse_string()?;
            self.skip_whitespace();
            if self.peek() != Some(b':') {
                return Err(ParseError::Syntax { offset: self.pos });
            }
            self.pos += 1;
            let value = self.parse_value(depth + 1)?;
            members.push(Member {
                key: Cow::Owned(key),
                value,
            });
            self.skip_whitespace();
            match self.peek() {
                Some(b',') => self.pos += 1,
                Some(b'}') => {
                    self.pos += 1;
                    return Ok(Value::Object(members));
                }
                _ => return Err(ParseError::Syntax { offset: self.pos }),
            }
        }
    }
}
