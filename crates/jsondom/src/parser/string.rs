//! JSON string decoding: escape expansion and UTF-16 surrogate transcoding.
//!
//! Strings are handled in two passes. The first locates the closing quote,
//! treating a backslash plus its follower as an atomic unit so an escaped
//! quote cannot terminate the scan; its span is an upper bound on the
//! decoded length, reserved up front. The second pass copies unescaped runs
//! verbatim and expands escapes. Run boundaries fall on ASCII bytes, so
//! slicing the source text there is always valid.

use super::Parser;
use crate::{error::ParseError, hooks};

impl Parser<'_, '_> {
    /// Parses the string literal at the cursor into its unescaped form and
    /// leaves the cursor one past the closing quote.
    ///
    /// Escape errors are reported at the backslash that introduced the
    /// offending sequence.
    pub(super) fn parse_string(&mut self) -> Result<String, ParseError> {
        let quote = self.pos;
        if self.bytes.get(quote) != Some(&b'"') {
            return Err(ParseError::Syntax { offset: quote });
        }

        // Pass 1: find the closing quote.
        let mut end = quote + 1;
        loop {
            match self.bytes.get(end) {
                None => return Err(ParseError::Syntax { offset: quote }), // unterminated
                Some(b'"') => break,
                Some(b'\\') => {
                    if end + 1 >= self.bytes.len() {
                        // lone backslash at end of input
                        return Err(ParseError::Syntax { offset: end });
                    }
                    end += 2;
                }
                Some(_) => end += 1,
            }
        }

        // Pass 2: decode. Escapes only ever shrink, so the scan span bounds
        // the output.
        let mut out = String::new();
        if !hooks::claim_string(self.hooks, &mut out, end - (quote + 1)) {
            return Err(ParseError::OutOfMemory);
        }

        let mut i = quote + 1;
        while i < end {
            if self.bytes[i] != b'\\' {
                let run_start = i;
                while i < end && self.bytes[i] != b'\\' {
                    i += 1;
                }
                out.push_str(&self.text[run_start..i]);
                continue;
            }

            let escape = i;
            i += 1; // the scan guarantees a follower inside the literal
            match self.bytes[i] {
                b'b' => out.push('\u{0008}'),
                b'f' => out.push('\u{000C}'),
                b'n' => out.push('\n'),
                b'r' => out.push('\r'),
                b't' => out.push('\t'),
                b'"' => out.push('"'),
                b'\\' => out.push('\\'),
                b'/' => out.push('/'),
                b'u' => {
                    let code = self.unicode_escape(escape, &mut i, end)?;
                    out.push(code);
                }
                _ => return Err(ParseError::Syntax { offset: escape }),
            }
            i += 1;
        }

        self.pos = end + 1;
        Ok(out)
    }

    /// Decodes `\uXXXX` (with `i` at the `u`), joining surrogate pairs into
    /// the combined code point. Leaves `i` at the last consumed hex digit.
    fn unicode_escape(
        &self,
        escape: usize,
        i: &mut usize,
        end: usize,
    ) -> Result<char, ParseError> {
        let high = self.read_hex4(*i + 1, end, escape)?;
        *i += 4;

        // An unpaired low half cannot stand alone, and U+0000 is rejected
        // outright.
        if high == 0 || (0xDC00..=0xDFFF).contains(&high) {
            return Err(ParseError::Syntax { offset: escape });
        }

        let code = if (0xD800..=0xDBFF).contains(&high) {
            // the low half must follow immediately as another \u escape
            if *i + 2 >= end || self.bytes[*i + 1] != b'\\' || self.bytes[*i + 2] != b'u' {
                return Err(ParseError::Syntax { offset: escape });
            }
            let low = self.read_hex4(*i + 3, end, escape)?;
            *i += 6;
            if !(0xDC00..=0xDFFF).contains(&low) {
                return Err(ParseError::Syntax { offset: escape });
            }
            0x10000 + (((high & 0x3FF) << 10) | (low & 0x3FF))
        } else {
            high
        };

        char::from_u32(code).ok_or(ParseError::Syntax { offset: escape })
    }

    /// Reads exactly four case-insensitive hex digits ending before `end`.
    fn read_hex4(&self, at: usize, end: usize, escape: usize) -> Result<u32, ParseError> {
        if at + 4 > end {
            return Err(ParseError::Syntax { offset: escape });
        }
        let mut acc = 0u32;
        for &byte in &self.bytes[at..at + 4] {
            let digit = char::from(byte)
                .to_digit(16)
                .ok_or(ParseError::Syntax { offset: escape })?;
            acc = (acc << 4) | digit;
        }
        Ok(acc)
    }
}
