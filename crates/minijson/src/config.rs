//! Parser configuration.
//!
//! The defaults reproduce the library's documented behaviour: containers may
//! nest 200 levels deep and anything after the first complete value is
//! ignored.

/// Default maximum container nesting accepted by the parser.
pub const DEFAULT_MAX_DEPTH: usize = 200;

/// Hard ceiling on container nesting. A configured `max_depth` above it is
/// clamped, so the recursion depth of a parse never exceeds this value.
pub const MAX_DEPTH_LIMIT: usize = DEFAULT_MAX_DEPTH;

/// Knobs for [`parse_with_config`](crate::parse_with_config).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseConfig {
    /// Maximum number of nested arrays/objects. A container opened at a
    /// recursion depth of `max_depth` or more fails with "exceeded max depth".
    /// Values above [`MAX_DEPTH_LIMIT`] behave as [`MAX_DEPTH_LIMIT`].
    pub max_depth: usize,
    /// Fail when non-whitespace text follows the first complete value.
    pub reject_trailing: bool,
}

impl ParseConfig {
    pub const fn new() -> Self {
        Self {
            max_depth: DEFAULT_MAX_DEPTH,
            reject_trailing: false,
        }
    }

    /// Set the nesting limit, clamped to [`MAX_DEPTH_LIMIT`].
    pub const fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = clamp_depth(max_depth);
        self
    }

    /// The nesting limit the parser enforces.
    pub const fn effective_max_depth(&self) -> usize {
        clamp_depth(self.max_depth)
    }

    pub const fn with_reject_trailing(mut self, reject: bool) -> Self {
        self.reject_trailing = reject;
        self
    }
}

const fn clamp_depth(max_depth: usize) -> usize {
    if max_depth > MAX_DEPTH_LIMIT {
        MAX_DEPTH_LIMIT
    } else {
        max_depth
    }
}

impl Default for ParseConfig {
    fn default() -> Self {
        Self::new()
    }
}
