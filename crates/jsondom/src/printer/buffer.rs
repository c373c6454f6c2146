//! The printer's growing output buffer.
//!
//! Output is accumulated either in an owned, doubling string or in a fixed
//! caller-provided byte slice that is never reallocated (the preallocated
//! printing mode fails instead of growing).

use crate::{error::PrintError, hooks::AllocHooks};

pub(crate) struct PrintBuffer<'a> {
    storage: Storage<'a>,
    hooks: &'a dyn AllocHooks,
}

enum Storage<'a> {
    Owned(String),
    Fixed { buf: &'a mut [u8], len: usize },
}

impl<'a> PrintBuffer<'a> {
    /// Creates a growable buffer with `prebuffer` bytes reserved up front.
    pub fn owned(prebuffer: usize, hooks: &'a dyn AllocHooks) -> Result<Self, PrintError> {
        let mut out = String::new();
        if prebuffer > 0
            && !(hooks.allocate(prebuffer) && out.try_reserve_exact(prebuffer).is_ok())
        {
            return Err(PrintError::OutOfMemory);
        }
        Ok(Self {
            storage: Storage::Owned(out),
            hooks,
        })
    }

    /// Wraps a caller-provided buffer. Writes past its end fail with
    /// [`PrintError::BufferTooSmall`]; nothing is ever allocated.
    pub fn fixed(buf: &'a mut [u8], hooks: &'a dyn AllocHooks) -> Self {
        Self {
            storage: Storage::Fixed { buf, len: 0 },
            hooks,
        }
    }

    /// Bytes written so far.
    pub fn offset(&self) -> usize {
        match &self.storage {
            Storage::Owned(out) => out.len(),
            Storage::Fixed { len, .. } => *len,
        }
    }

    fn capacity(&self) -> usize {
        match &self.storage {
            Storage::Owned(out) => out.capacity(),
            Storage::Fixed { buf, .. } => buf.len(),
        }
    }

    /// Makes room for `needed` more bytes.
    ///
    /// Growth doubles from `max(capacity, required)` with checked arithmetic,
    /// so a size computation that overflows fails rather than wrapping.
    pub fn ensure(&mut self, needed: usize) -> Result<(), PrintError> {
        let required = self
            .offset()
            .checked_add(needed)
            .ok_or(PrintError::OutOfMemory)?;
        if required <= self.capacity() {
            return Ok(());
        }
        let Storage::Owned(out) = &mut self.storage else {
            return Err(PrintError::BufferTooSmall);
        };
        let new_size = out
            .capacity()
            .max(required)
            .checked_mul(2)
            .ok_or(PrintError::OutOfMemory)?;
        let additional = new_size - out.len();
        if !self.hooks.allocate(additional) {
            return Err(PrintError::OutOfMemory);
        }
        let replaced = out.capacity();
        out.try_reserve_exact(additional)
            .map_err(|_| PrintError::OutOfMemory)?;
        self.hooks.release(replaced);
        Ok(())
    }

    pub fn push_str(&mut self, s: &str) -> Result<(), PrintError> {
        self.ensure(s.len())?;
        match &mut self.storage {
            Storage::Owned(out) => out.push_str(s),
            Storage::Fixed { buf, len } => {
                buf[*len..*len + s.len()].copy_from_slice(s.as_bytes());
                *len += s.len();
            }
        }
        Ok(())
    }

    pub fn push_tabs(&mut self, depth: usize) -> Result<(), PrintError> {
        self.ensure(depth)?;
        for _ in 0..depth {
            self.push_str("\t")?;
        }
        Ok(())
    }

    /// Consumes the buffer and returns the accumulated string. Only
    /// meaningful for owned storage; fixed-storage callers read their slice.
    pub fn into_string(self) -> String {
        match self.storage {
            Storage::Owned(out) => out,
            Storage::Fixed { .. } => String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::PrintBuffer;
    use crate::{PrintError, SystemHooks};

    #[test]
    fn owned_buffer_grows_by_doubling() {
        let mut out = PrintBuffer::owned(4, &SystemHooks).unwrap();
        out.push_str("abcd").unwrap();
        out.push_str("efgh").unwrap();
        assert_eq!(out.offset(), 8);
        assert_eq!(out.into_string(), "abcdefgh");
    }

    #[test]
    fn fixed_buffer_fails_instead_of_growing() {
        let mut backing = [0u8; 4];
        let mut out = PrintBuffer::fixed(&mut backing, &SystemHooks);
        out.push_str("abcd").unwrap();
        assert_eq!(
            out.push_str("e").unwrap_err(),
            PrintError::BufferTooSmall
        );
        assert_eq!(out.offset(), 4);
        assert_eq!(&backing, b"abcd");
    }

    #[test]
    fn fixed_buffer_records_written_prefix() {
        let mut backing = [0u8; 16];
        let mut out = PrintBuffer::fixed(&mut backing, &SystemHooks);
        out.push_str("xy").unwrap();
        out.push_tabs(2).unwrap();
        assert_eq!(out.offset(), 4);
        assert_eq!(&backing[..4], b"xy\t\t");
    }
}
