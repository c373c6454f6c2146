//! JSON rendering, formatted and compact.
//!
//! Two printing modes share the per-kind logic but manage memory
//! differently:
//!
//! - **standalone**: every subtree renders into its own string; containers
//!   measure their rendered children, reserve the final buffer once, and
//!   concatenate. Any child failure drops the partial strings.
//! - **buffered**: all output lands in one [`PrintBuffer`], growable or
//!   caller-provided (never reallocated).
//!
//! Formatted output indents object members with tabs, one level per nesting
//! depth, and keeps arrays on a single line with `, ` separators.

pub(crate) mod buffer;
pub(crate) mod escape;
pub(crate) mod number;

use buffer::PrintBuffer;

use crate::{
    error::PrintError,
    hooks::{self, AllocHooks},
    value::{Member, Value},
};

pub(crate) fn print_standalone(
    value: &Value,
    format: bool,
    hooks: &dyn AllocHooks,
) -> Result<String, PrintError> {
    print_value(value, 0, format, hooks)
}

pub(crate) fn print_buffered(
    value: &Value,
    prebuffer: usize,
    format: bool,
    hooks: &dyn AllocHooks,
) -> Result<String, PrintError> {
    let mut out = PrintBuffer::owned(prebuffer, hooks)?;
    write_value(value, 0, format, &mut out)?;
    Ok(out.into_string())
}

pub(crate) fn print_preallocated(
    value: &Value,
    buf: &mut [u8],
    format: bool,
    hooks: &dyn AllocHooks,
) -> Result<usize, PrintError> {
    let mut out = PrintBuffer::fixed(buf, hooks);
    write_value(value, 0, format, &mut out)?;
    Ok(out.offset())
}

// ---------------------------------------------------------------------------
// Standalone mode
// ---------------------------------------------------------------------------

fn print_value(
    value: &Value,
    depth: usize,
    format: bool,
    hooks: &dyn AllocHooks,
) -> Result<String, PrintError> {
    match value {
        Value::Null => Ok("null".to_owned()),
        Value::Bool(b) => Ok(if *b { "true" } else { "false" }.to_owned()),
        Value::Number(n) => Ok(number::format_number(*n)),
        Value::String(s) => print_string(s, hooks),
        Value::Raw(s) => Ok(s.clone()),
        Value::Array(items) => print_array(items, depth, format, hooks),
        Value::Object(members) => print_object(members, depth, format, hooks),
        Value::Reference(target) => print_value(target, depth, format, hooks),
    }
}

fn print_string(s: &str, hooks: &dyn AllocHooks) -> Result<String, PrintError> {
    let mut out = String::new();
    if !hooks::claim_string(hooks, &mut out, escape::escaped_len(s)) {
        return Err(PrintError::OutOfMemory);
    }
    out.push('"');
    // writing into a String cannot fail
    let _ = escape::write_escaped(s, &mut out);
    out.push('"');
    Ok(out)
}

fn print_array(
    items: &[Value],
    depth: usize,
    format: bool,
    hooks: &dyn AllocHooks,
) -> Result<String, PrintError> {
    if items.is_empty() {
        return Ok("[]".to_owned());
    }
    let mut rendered = Vec::with_capacity(items.len());
    for item in items {
        match print_value(item, depth + 1, format, hooks) {
            Ok(piece) => rendered.push(piece),
            Err(error) => {
                // drop every piece rendered so far
                release_all(hooks, &rendered);
                return Err(error);
            }
        }
    }

    let separator = if format { ", " } else { "," };
    let total =
        2 + rendered.iter().map(String::len).sum::<usize>() + separator.len() * (rendered.len() - 1);
    let mut out = String::new();
    if !hooks::claim_string(hooks, &mut out, total) {
        release_all(hooks, &rendered);
        return Err(PrintError::OutOfMemory);
    }

    out.push('[');
    for (i, piece) in rendered.iter().enumerate() {
        if i > 0 {
            out.push_str(separator);
        }
        out.push_str(piece);
    }
    out.push(']');
    // the child strings were sized through the hooks and are discarded here
    release_all(hooks, &rendered);
    Ok(out)
}

fn print_object(
    members: &[Member],
    depth: usize,
    format: bool,
    hooks: &dyn AllocHooks,
) -> Result<String, PrintError> {
    if members.is_empty() {
        return Ok(if format {
            format!("{{\n{}}}", "\t".repeat(depth))
        } else {
            "{}".to_owned()
        });
    }

    let inner = depth + 1;
    let mut rendered: Vec<(String, String)> = Vec::with_capacity(members.len());
    let mut failure = None;
    for member in members {
        let key = print_string(&member.key, hooks);
        let value = print_value(&member.value, inner, format, hooks);
        match (key, value) {
            (Ok(key), Ok(value)) => rendered.push((key, value)),
            (key, value) => {
                if let Ok(key) = key {
                    hooks.release(key.capacity());
                }
                if let Ok(value) = value {
                    hooks.release(value.capacity());
                }
                failure = Some(PrintError::OutOfMemory);
                break;
            }
        }
    }
    if let Some(error) = failure {
        for (key, value) in &rendered {
            hooks.release(key.capacity());
            hooks.release(value.capacity());
        }
        return Err(error);
    }

    let mut total = if format { 2 + 1 + depth } else { 2 };
    for (i, (key, value)) in rendered.iter().enumerate() {
        total += key.len() + 1 + value.len();
        if format {
            total += inner + 2; // member indent, tab after the colon, newline
        }
        if i + 1 != rendered.len() {
            total += 1;
        }
    }

    let mut out = String::new();
    if !hooks::claim_string(hooks, &mut out, total) {
        for (key, value) in &rendered {
            hooks.release(key.capacity());
            hooks.release(value.capacity());
        }
        return Err(PrintError::OutOfMemory);
    }

    out.push('{');
    if format {
        out.push('\n');
    }
    for (i, (key, value)) in rendered.iter().enumerate() {
        if format {
            for _ in 0..inner {
                out.push('\t');
            }
        }
        out.push_str(key);
        out.push(':');
        if format {
            out.push('\t');
        }
        out.push_str(value);
        if i + 1 != rendered.len() {
            out.push(',');
        }
        if format {
            out.push('\n');
        }
    }
    for _ in 0..depth {
        out.push('\t');
    }
    out.push('}');
    // the per-member strings were sized through the hooks and are discarded
    // here
    for (key, value) in &rendered {
        hooks.release(key.capacity());
        hooks.release(value.capacity());
    }
    Ok(out)
}

fn release_all(hooks: &dyn AllocHooks, pieces: &[String]) {
    for piece in pieces {
        hooks.release(piece.capacity());
    }
}

// ---------------------------------------------------------------------------
// Buffered mode
// ---------------------------------------------------------------------------

fn write_value(
    value: &Value,
    depth: usize,
    format: bool,
    out: &mut PrintBuffer<'_>,
) -> Result<(), PrintError> {
    match value {
        Value::Null => out.push_str("null"),
        Value::Bool(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Number(n) => out.push_str(&number::format_number(*n)),
        Value::String(s) => write_string(s, out),
        Value::Raw(s) => out.push_str(s),
        Value::Array(items) => write_array(items, depth, format, out),
        Value::Object(members) => write_object(members, depth, format, out),
        Value::Reference(target) => write_value(target, depth, format, out),
    }
}

/// Escapes straight into the output buffer: one up-front `ensure` for the
/// whole escaped length, then verbatim runs interleaved with escape
/// sequences.
fn write_string(s: &str, out: &mut PrintBuffer<'_>) -> Result<(), PrintError> {
    out.ensure(escape::escaped_len(s))?;
    out.push_str("\"")?;
    let mut run_start = 0;
    for (index, c) in s.char_indices() {
        if let Some(short) = escape::shorthand(c) {
            out.push_str(&s[run_start..index])?;
            out.push_str(short)?;
            run_start = index + c.len_utf8();
        } else if (c as u32) < 0x20 {
            out.push_str(&s[run_start..index])?;
            out.push_str(&format!("\\u{:04x}", c as u32))?;
            run_start = index + c.len_utf8();
        }
    }
    out.push_str(&s[run_start..])?;
    out.push_str("\"")
}

fn write_array(
    items: &[Value],
    depth: usize,
    format: bool,
    out: &mut PrintBuffer<'_>,
) -> Result<(), PrintError> {
    out.push_str("[")?;
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            out.push_str(if format { ", " } else { "," })?;
        }
        write_value(item, depth + 1, format, out)?;
    }
    out.push_str("]")
}

fn write_object(
    members: &[Member],
    depth: usize,
    format: bool,
    out: &mut PrintBuffer<'_>,
) -> Result<(), PrintError> {
    out.push_str("{")?;
    if format {
        out.push_str("\n")?;
    }
    if members.is_empty() {
        if format {
            out.push_tabs(depth)?;
        }
        return out.push_str("}");
    }
    let inner = depth + 1;
    for (i, member) in members.iter().enumerate() {
        if format {
            out.push_tabs(inner)?;
        }
        write_string(&member.key, out)?;
        out.push_str(":")?;
        if format {
            out.push_str("\t")?;
        }
        write_value(&member.value, inner, format, out)?;
        if i + 1 != members.len() {
            out.push_str(",")?;
        }
        if format {
            out.push_str("\n")?;
        }
    }
    if format {
        out.push_tabs(depth)?;
    }
    out.push_str("}")
}
