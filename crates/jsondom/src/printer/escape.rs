//! String escaping for printer output.
//!
//! Escaped on output: the quote, the backslash, and every code point below
//! U+0020 (shorthand escapes where JSON defines one, `\u00xx` otherwise).
//! The forward slash is never escaped. Everything else, including non-ASCII
//! text, passes through verbatim.

use std::fmt;

/// The two-character shorthand for `c`, if JSON defines one.
pub(crate) fn shorthand(c: char) -> Option<&'static str> {
    match c {
        '"' => Some("\\\""),
        '\\' => Some("\\\\"),
        '\u{0008}' => Some("\\b"),
        '\u{000C}' => Some("\\f"),
        '\n' => Some("\\n"),
        '\r' => Some("\\r"),
        '\t' => Some("\\t"),
        _ => None,
    }
}

/// Output length of the escaped form of `s`, including the two surrounding
/// quotes. Used to size buffers before writing.
pub(crate) fn escaped_len(s: &str) -> usize {
    let payload: usize = s
        .chars()
        .map(|c| {
            if shorthand(c).is_some() {
                2
            } else if (c as u32) < 0x20 {
                6 // \u00xx
            } else {
                c.len_utf8()
            }
        })
        .sum();
    payload + 2
}

/// Writes the escaped payload of `s` (without surrounding quotes).
pub(crate) fn write_escaped<W: fmt::Write>(s: &str, f: &mut W) -> fmt::Result {
    for c in s.chars() {
        if let Some(short) = shorthand(c) {
            f.write_str(short)?;
        } else if (c as u32) < 0x20 {
            write!(f, "\\u{:04x}", c as u32)?;
        } else {
            f.write_char(c)?;
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::{escaped_len, write_escaped};

    fn escaped(s: &str) -> String {
        let mut out = String::new();
        write_escaped(s, &mut out).unwrap();
        out
    }

    #[test]
    fn shorthands() {
        assert_eq!(escaped("a\"b\\c\u{8}\u{c}\n\r\t"), "a\\\"b\\\\c\\b\\f\\n\\r\\t");
    }

    #[test]
    fn other_controls_use_lowercase_hex() {
        assert_eq!(escaped("\u{1}\u{1f}"), "\\u0001\\u001f");
    }

    #[test]
    fn slash_and_unicode_pass_through() {
        assert_eq!(escaped("a/b 🐱 é"), "a/b 🐱 é");
    }

    #[test]
    fn escaped_len_matches_output() {
        for s in ["", "plain", "q\"q", "ctrl\u{2}", "🐱\n", "caf\u{e9}/"] {
            assert_eq!(escaped_len(s), escaped(s).len() + 2, "input: {s:?}");
        }
    }
}
