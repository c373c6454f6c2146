use core::fmt;

use crate::hooks::{AllocHooks, SystemHooks};

/// Configuration for a single parse call.
///
/// Every knob rides the call itself; there is no process-wide state. The
/// default configuration accepts trailing garbage after the root value
/// (mirroring the lenient entry point) and allows nesting up to 1000 levels.
#[derive(Clone, Copy)]
pub struct ParseOptions<'h> {
    /// Require the input to be exhausted after the root value.
    ///
    /// When `true`, trailing whitespace is skipped after the root value and
    /// any residual byte fails the parse at that byte's offset.
    ///
    /// # Default
    ///
    /// `false`
    pub require_end: bool,

    /// Maximum nesting depth of arrays and objects.
    ///
    /// Parser recursion depth equals JSON nesting depth, so unbounded input
    /// could exhaust the stack. Inputs nested deeper than this limit fail
    /// with [`ParseError::Depth`](crate::ParseError::Depth).
    ///
    /// # Default
    ///
    /// `1000`
    pub max_depth: usize,

    /// Allocation hooks consulted for the parser's string buffers.
    ///
    /// # Default
    ///
    /// [`SystemHooks`] (always allow)
    pub hooks: &'h dyn AllocHooks,
}

impl Default for ParseOptions<'_> {
    fn default() -> Self {
        Self {
            require_end: false,
            max_depth: 1000,
            hooks: &SystemHooks,
        }
    }
}

impl fmt::Debug for ParseOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ParseOptions")
            .field("require_end", &self.require_end)
            .field("max_depth", &self.max_depth)
            .finish_non_exhaustive()
    }
}

/// Configuration for a single print call.
#[derive(Clone, Copy)]
pub struct PrintOptions<'h> {
    /// Emit formatted output: newline-and-tab indentation between object
    /// members and `, ` between array elements. `false` emits the compact
    /// form with no whitespace at all.
    ///
    /// # Default
    ///
    /// `true`
    pub format: bool,

    /// Allocation hooks consulted for the printer's output buffers.
    ///
    /// # Default
    ///
    /// [`SystemHooks`] (always allow)
    pub hooks: &'h dyn AllocHooks,
}

impl Default for PrintOptions<'_> {
    fn default() -> Self {
        Self {
            format: true,
            hooks: &SystemHooks,
        }
    }
}

impl fmt::Debug for PrintOptions<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PrintOptions")
            .field("format", &self.format)
            .finish_non_exhaustive()
    }
}
