use thiserror::Error;

/// Error returned by the parser.
///
/// Parsing either succeeds with a complete tree or fails with one of these;
/// a partially built tree never escapes.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParseError {
    /// The input is not well-formed JSON. `offset` is the byte position at
    /// which the malformation was detected; it equals the input length when
    /// the input ended prematurely.
    #[error("parse failure at byte {offset}")]
    Syntax {
        /// Byte offset of the offending input position.
        offset: usize,
    },

    /// Nesting exceeded [`ParseOptions::max_depth`](crate::ParseOptions::max_depth).
    #[error("nesting deeper than the configured limit at byte {offset}")]
    Depth {
        /// Byte offset of the value that opened one level too many.
        offset: usize,
    },

    /// An allocation was vetoed by the installed [`AllocHooks`](crate::AllocHooks)
    /// or refused by the allocator. Carries no offset: the input may well be
    /// valid.
    #[error("allocation refused or failed")]
    OutOfMemory,
}

impl ParseError {
    /// The byte offset of the failure, if the failure has one.
    #[must_use]
    pub fn offset(&self) -> Option<usize> {
        match self {
            Self::Syntax { offset } | Self::Depth { offset } => Some(*offset),
            Self::OutOfMemory => None,
        }
    }
}

/// Error returned by the printer entry points.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrintError {
    /// An allocation was vetoed by the installed [`AllocHooks`](crate::AllocHooks)
    /// or refused by the allocator.
    #[error("allocation refused or failed")]
    OutOfMemory,

    /// The output did not fit the caller-provided buffer. Only returned by
    /// [`Value::print_preallocated`](crate::Value::print_preallocated),
    /// which never reallocates.
    #[error("preallocated buffer too small")]
    BufferTooSmall,
}
